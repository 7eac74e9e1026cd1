//! Profile form state model.
//!
//! This crate holds the snapshot of everything a user entered or selected in the
//! profile form, the raw inputs it is taken from, and the exclusive selection
//! groups (theme, layout, animation).

pub mod choice;
pub mod image;
pub mod skills;
pub mod social;
pub mod state;

pub use choice::{Animation, Layout, Theme};
pub use image::{encode_data_uri, image_data_uri, is_placeholder, mime_from_path, ImageError};
pub use skills::Skills;
pub use social::{Platform, SocialLinks};
pub use state::{FormInputs, FormState, DEFAULT_FONT};
