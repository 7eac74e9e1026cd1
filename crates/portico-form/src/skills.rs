//! Comma-separated skills input.

use serde::{Deserialize, Serialize};

/// Skills as typed into the form.
///
/// The raw text is kept so a saved state restores exactly what the user typed;
/// [`Skills::items`] derives the list that gets rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skills(String);

impl Skills {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The text exactly as entered.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Split on commas, trim, drop empties. Order and duplicates are kept.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.0.split(',').map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }
}

impl From<&str> for Skills {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        let skills = Skills::new(" Go,Rust ,  C++ ");
        assert_eq!(skills.items().collect::<Vec<_>>(), vec!["Go", "Rust", "C++"]);
    }

    #[test]
    fn drops_empty_entries() {
        let skills = Skills::new("Go,, ,Rust,");
        assert_eq!(skills.items().collect::<Vec<_>>(), vec!["Go", "Rust"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let skills = Skills::new("Rust, Go, Rust");
        assert_eq!(skills.items().collect::<Vec<_>>(), vec!["Rust", "Go", "Rust"]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(Skills::new("").is_empty());
        assert!(Skills::new(" , ,").is_empty());
        assert!(!Skills::new("x").is_empty());
    }

    #[test]
    fn preserves_raw_text() {
        let skills = Skills::new(" a , b ");
        assert_eq!(skills.raw(), " a , b ");
    }
}
