//! Auto-save slot for portico form state.
//!
//! A [`StateStore`] keeps one [`FormState`](portico_form::FormState) in a named
//! slot of durable key-value storage. Saves overwrite the whole slot; a slot
//! that cannot be read back is treated as empty.

pub mod indicator;
pub mod slot;
pub mod store;

pub use indicator::{SaveIndicator, INDICATOR_DURATION};
pub use slot::{FileSlots, KeyValueSlots, MemorySlots};
pub use store::{StateStore, StoreError, DEFAULT_SLOT};
