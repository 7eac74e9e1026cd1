//! Renderer for portico profile pages.
//!
//! Turns a [`FormState`](portico_form::FormState) into a complete, self-contained
//! HTML document or into a preview fragment for an existing page.

pub mod assets;
pub mod export;
pub mod renderer;
pub mod templates;
pub mod theme;

pub use export::{export_file_name, slugify, write_export, ExportError};
pub use renderer::{
    css_value, html_escape, DocumentRenderer, PageSections, Preview, PreviewStyle, RenderError,
    RenderOptions, DEFAULT_BIO, DEFAULT_COLOR, DEFAULT_NAME, PREVIEW_PLACEHOLDER,
};
pub use theme::ThemeStyle;
