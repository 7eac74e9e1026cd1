//! Form state snapshot.

use serde::{Deserialize, Serialize};

use crate::choice::{Animation, Layout, Theme};
use crate::skills::Skills;
use crate::social::SocialLinks;

/// Font used when no font card is active.
pub const DEFAULT_FONT: &str = "Poppins";

/// Everything the user entered or selected, at one instant.
///
/// Text fields hold exactly what was typed, including empty strings; the
/// renderer applies display defaults. This keeps a save/load round trip
/// lossless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
    /// Display name
    pub name: String,

    /// Accent color (hex)
    #[serde(rename = "color")]
    pub accent_color: String,

    /// Free-form bio text
    pub bio: String,

    /// Comma-separated skills
    pub skills: Skills,

    /// Social profile URLs
    #[serde(flatten)]
    pub social: SocialLinks,

    /// Active theme
    pub theme: Theme,

    /// Active font family
    pub font: String,

    /// Active layout
    pub layout: Layout,

    /// Entrance animation
    pub animation: Animation,

    /// Profile image source, usually a `data:` URI
    pub profile_image: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            accent_color: String::new(),
            bio: String::new(),
            skills: Skills::default(),
            social: SocialLinks::default(),
            theme: Theme::default(),
            font: DEFAULT_FONT.to_string(),
            layout: Layout::default(),
            animation: Animation::default(),
            profile_image: None,
        }
    }
}

/// Raw values of every tracked input, plus the active card of each
/// selection group (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInputs {
    pub name: String,
    pub color: String,
    pub bio: String,
    pub skills: String,
    pub instagram: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub animation: String,
    pub active_theme: Option<String>,
    pub active_font: Option<String>,
    pub active_layout: Option<String>,
    pub image: Option<String>,
}

impl FormInputs {
    /// Take a snapshot of the current inputs.
    ///
    /// Groups with no active card fall back to dark, Poppins and centered.
    pub fn snapshot(&self) -> FormState {
        FormState {
            name: self.name.clone(),
            accent_color: self.color.clone(),
            bio: self.bio.clone(),
            skills: Skills::new(self.skills.as_str()),
            social: SocialLinks {
                instagram: self.instagram.clone(),
                linkedin: self.linkedin.clone(),
                github: self.github.clone(),
                portfolio: self.portfolio.clone(),
            },
            theme: self
                .active_theme
                .as_deref()
                .map(Theme::from_name)
                .unwrap_or_default(),
            font: self
                .active_font
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT.to_string()),
            layout: self
                .active_layout
                .as_deref()
                .map(Layout::from_name)
                .unwrap_or_default(),
            animation: Animation::from_name(&self.animation),
            profile_image: self.image.clone(),
        }
    }
}

impl From<&FormState> for FormInputs {
    fn from(state: &FormState) -> Self {
        Self {
            name: state.name.clone(),
            color: state.accent_color.clone(),
            bio: state.bio.clone(),
            skills: state.skills.raw().to_string(),
            instagram: state.social.instagram.clone(),
            linkedin: state.social.linkedin.clone(),
            github: state.social.github.clone(),
            portfolio: state.social.portfolio.clone(),
            animation: state.animation.as_str().to_string(),
            active_theme: Some(state.theme.as_str().to_string()),
            active_font: Some(state.font.clone()),
            active_layout: Some(state.layout.as_str().to_string()),
            image: state.profile_image.clone(),
        }
    }
}

impl Default for FormInputs {
    fn default() -> Self {
        Self::from(&FormState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshot_keeps_empty_text() {
        let inputs = FormInputs {
            name: String::new(),
            bio: String::new(),
            ..FormInputs::default()
        };

        let state = inputs.snapshot();

        assert_eq!(state.name, "");
        assert_eq!(state.bio, "");
        assert_eq!(state.accent_color, "");
    }

    #[test]
    fn no_active_card_uses_group_defaults() {
        let inputs = FormInputs {
            active_theme: None,
            active_font: None,
            active_layout: None,
            ..FormInputs::default()
        };

        let state = inputs.snapshot();

        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.font, "Poppins");
        assert_eq!(state.layout, Layout::Centered);
    }

    #[test]
    fn inputs_round_trip_through_snapshot() {
        let mut state = FormState {
            name: "Ada".to_string(),
            accent_color: "#112233".to_string(),
            bio: "Engineer".to_string(),
            skills: Skills::new("C, C++"),
            theme: Theme::Gradient,
            font: "Inter".to_string(),
            layout: Layout::Side,
            animation: Animation::Typewriter,
            profile_image: Some("data:image/png;base64,AAAA".to_string()),
            ..FormState::default()
        };
        state.social.github = "https://github.com/ada".to_string();

        let restored = FormInputs::from(&state).snapshot();

        assert_eq!(restored, state);
    }

    #[test]
    fn serializes_with_flat_keys() {
        let mut state = FormState {
            name: "Ada".to_string(),
            ..FormState::default()
        };
        state.social.linkedin = "https://linkedin.com/in/ada".to_string();

        let value = serde_json::to_value(&state).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec![
                "animation",
                "bio",
                "color",
                "font",
                "github",
                "instagram",
                "layout",
                "linkedin",
                "name",
                "portfolio",
                "profileImage",
                "skills",
                "theme",
            ]
        );
        assert_eq!(value["linkedin"], "https://linkedin.com/in/ada");
    }

    #[test]
    fn missing_keys_take_defaults() {
        let state: FormState = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();

        assert_eq!(state.name, "Ada");
        assert_eq!(state.font, "Poppins");
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.profile_image, None);
    }
}
