//! Exclusive selection groups.
//!
//! Each group is a single field on the form state, so only one option can be
//! active at a time. Names that are not recognised are kept verbatim in an
//! `Other` variant so a saved state survives a round trip unchanged; the
//! renderer decides how to fall back.
//!
//! `Other` must only hold a name the group does not recognise. Build values
//! with `from_name`: an `Other("dark")` serializes as `"dark"` and loads back
//! as `Theme::Dark`, so it does not round trip.

use serde::{Deserialize, Serialize};

/// Color theme of the generated page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    Light,
    White,
    #[default]
    Dark,
    Black,
    Gradient,
    Colorful,
    /// Unrecognised theme name (rendered as white). Never a name listed in `ALL`.
    Other(String),
}

impl Theme {
    /// All recognised themes, in the order the picker shows them.
    pub const ALL: [Theme; 6] = [
        Theme::Light,
        Theme::White,
        Theme::Dark,
        Theme::Black,
        Theme::Gradient,
        Theme::Colorful,
    ];

    /// Parse a theme name. Never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Theme::Light,
            "white" => Theme::White,
            "dark" => Theme::Dark,
            "black" => Theme::Black,
            "gradient" => Theme::Gradient,
            "colorful" => Theme::Colorful,
            other => Theme::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::White => "white",
            Theme::Dark => "dark",
            Theme::Black => "black",
            Theme::Gradient => "gradient",
            Theme::Colorful => "colorful",
            Theme::Other(name) => name,
        }
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Theme::from_name(&name)
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.as_str().to_string()
    }
}

/// Structural arrangement of the page content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Layout {
    /// Single column, everything centered
    #[default]
    Centered,
    /// Image on the left, text on the right
    Side,
    /// Unrecognised layout name (rendered as centered). Never `centered` or `side`.
    Other(String),
}

impl Layout {
    pub fn from_name(name: &str) -> Self {
        match name {
            "centered" => Layout::Centered,
            "side" => Layout::Side,
            other => Layout::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Layout::Centered => "centered",
            Layout::Side => "side",
            Layout::Other(name) => name,
        }
    }

    /// Whether this layout uses the two-column arrangement.
    pub fn is_side(&self) -> bool {
        matches!(self, Layout::Side)
    }
}

impl From<String> for Layout {
    fn from(name: String) -> Self {
        Layout::from_name(&name)
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.as_str().to_string()
    }
}

/// Entrance animation of the generated page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Animation {
    #[default]
    FadeIn,
    SlideUp,
    SlideLeft,
    Typewriter,
    None,
    /// Unrecognised animation name (no animation). Never a known animation name.
    Other(String),
}

impl Animation {
    pub fn from_name(name: &str) -> Self {
        match name {
            "fadeIn" => Animation::FadeIn,
            "slideUp" => Animation::SlideUp,
            "slideLeft" => Animation::SlideLeft,
            "typewriter" => Animation::Typewriter,
            "none" => Animation::None,
            other => Animation::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Animation::FadeIn => "fadeIn",
            Animation::SlideUp => "slideUp",
            Animation::SlideLeft => "slideLeft",
            Animation::Typewriter => "typewriter",
            Animation::None => "none",
            Animation::Other(name) => name,
        }
    }
}

impl From<String> for Animation {
    fn from(name: String) -> Self {
        Animation::from_name(&name)
    }
}

impl From<Animation> for String {
    fn from(animation: Animation) -> Self {
        animation.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_theme_names() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.as_str()), theme);
        }
    }

    #[test]
    fn keeps_unknown_names_verbatim() {
        let theme = Theme::from_name("neon");
        assert_eq!(theme, Theme::Other("neon".to_string()));
        assert_eq!(theme.as_str(), "neon");

        let layout = Layout::from_name("grid");
        assert!(!layout.is_side());
        assert_eq!(layout.as_str(), "grid");

        assert_eq!(Animation::from_name("bounce").as_str(), "bounce");
    }

    #[test]
    fn serializes_as_plain_names() {
        let json = serde_json::to_string(&Animation::SlideLeft).unwrap();
        assert_eq!(json, "\"slideLeft\"");

        let layout: Layout = serde_json::from_str("\"side\"").unwrap();
        assert_eq!(layout, Layout::Side);
    }

    #[test]
    fn defaults_match_reset_selection() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Layout::default(), Layout::Centered);
        assert_eq!(Animation::default(), Animation::FadeIn);
    }

    #[test]
    fn from_name_never_wraps_recognised_names() {
        for theme in Theme::ALL {
            let parsed = Theme::from_name(theme.as_str());
            assert!(!matches!(parsed, Theme::Other(_)), "{:?}", parsed);
        }
        for name in ["centered", "side"] {
            assert!(!matches!(Layout::from_name(name), Layout::Other(_)));
        }
        for name in ["fadeIn", "slideUp", "slideLeft", "typewriter", "none"] {
            assert!(!matches!(Animation::from_name(name), Animation::Other(_)));
        }
    }

    #[test]
    fn misbuilt_other_loads_as_known_variant() {
        let json = serde_json::to_string(&Theme::Other("dark".to_string())).unwrap();
        let theme: Theme = serde_json::from_str(&json).unwrap();

        assert_eq!(theme, Theme::Dark);
    }
}
