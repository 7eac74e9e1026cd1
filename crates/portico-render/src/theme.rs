//! Theme lookup table.

use portico_form::Theme;

/// Colors a theme contributes to the generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ThemeStyle {
    /// Page background (color or gradient)
    pub background: &'static str,
    /// Body text color
    pub color: &'static str,
    /// Background of the content card
    pub surface: &'static str,
    /// Heading text shadow
    pub text_shadow: &'static str,
    /// Background of the bio panel
    pub panel: &'static str,
    /// Background of skill badges and social icons
    pub chip: &'static str,
}

const SHADOW: &str = "2px 2px 4px rgba(0,0,0,0.3)";
const LIGHT_PANEL: &str = "#f5f5f5";
const LIGHT_CHIP: &str = "rgba(102, 126, 234, 0.15)";
const GLASS_SURFACE: &str = "rgba(255, 255, 255, 0.1)";
const GLASS_PANEL: &str = "rgba(255, 255, 255, 0.05)";
const GLASS_CHIP: &str = "rgba(255, 255, 255, 0.2)";

const LIGHT: ThemeStyle = ThemeStyle {
    background: "linear-gradient(135deg, #f5f5f5 0%, #e0e0e0 100%)",
    color: "#333333",
    surface: "transparent",
    text_shadow: "none",
    panel: LIGHT_PANEL,
    chip: LIGHT_CHIP,
};

const WHITE: ThemeStyle = ThemeStyle {
    background: "#ffffff",
    color: "#333333",
    surface: "transparent",
    text_shadow: "none",
    panel: LIGHT_PANEL,
    chip: LIGHT_CHIP,
};

const DARK: ThemeStyle = ThemeStyle {
    background: "linear-gradient(135deg, #2a2a2a 0%, #1a1a1a 100%)",
    color: "#ffffff",
    surface: "transparent",
    text_shadow: SHADOW,
    panel: GLASS_PANEL,
    chip: GLASS_CHIP,
};

const BLACK: ThemeStyle = ThemeStyle {
    background: "#000000",
    color: "#ffffff",
    surface: "transparent",
    text_shadow: SHADOW,
    panel: GLASS_PANEL,
    chip: GLASS_CHIP,
};

const GRADIENT: ThemeStyle = ThemeStyle {
    background: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    color: "#ffffff",
    surface: GLASS_SURFACE,
    text_shadow: SHADOW,
    panel: GLASS_PANEL,
    chip: GLASS_CHIP,
};

const COLORFUL: ThemeStyle = ThemeStyle {
    background: "linear-gradient(135deg, #ffecd2 0%, #fcb69f 25%, #ff9a9e 50%, #fad0c4 75%, #ffecd2 100%)",
    color: "#333333",
    surface: GLASS_SURFACE,
    text_shadow: "none",
    panel: GLASS_PANEL,
    chip: GLASS_CHIP,
};

impl ThemeStyle {
    /// Look up a theme. Unrecognised names get the white entry.
    pub fn resolve(theme: &Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::White => WHITE,
            Theme::Dark => DARK,
            Theme::Black => BLACK,
            Theme::Gradient => GRADIENT,
            Theme::Colorful => COLORFUL,
            Theme::Other(_) => WHITE,
        }
    }
}
