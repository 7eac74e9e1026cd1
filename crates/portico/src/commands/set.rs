//! Edit profile fields and auto-save.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use portico_form::{image_data_uri, Animation, FormInputs, FormState, Layout, Theme};
use portico_store::{KeyValueSlots, StateStore};

use crate::config::ConfigFile;

/// Fields to change. Anything left out keeps its saved value.
#[derive(Debug, Default, Args)]
pub struct SetArgs {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Accent color, e.g. "#4ecdc4"
    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    /// Comma-separated skills
    #[arg(long)]
    pub skills: Option<String>,

    #[arg(long)]
    pub instagram: Option<String>,

    #[arg(long)]
    pub linkedin: Option<String>,

    #[arg(long)]
    pub github: Option<String>,

    #[arg(long)]
    pub portfolio: Option<String>,

    /// light, white, dark, black, gradient or colorful
    #[arg(long)]
    pub theme: Option<String>,

    /// Font family
    #[arg(long)]
    pub font: Option<String>,

    /// centered or side
    #[arg(long)]
    pub layout: Option<String>,

    /// fadeIn, slideUp, slideLeft, typewriter or none
    #[arg(long)]
    pub animation: Option<String>,

    /// Profile picture to embed
    #[arg(long, conflicts_with = "clear_image")]
    pub image: Option<PathBuf>,

    /// Remove the profile picture
    #[arg(long)]
    pub clear_image: bool,
}

impl SetArgs {
    /// Write the given fields into the form inputs.
    pub fn apply(self, inputs: &mut FormInputs) -> Result<()> {
        let text_fields = [
            (self.name, &mut inputs.name),
            (self.color, &mut inputs.color),
            (self.bio, &mut inputs.bio),
            (self.skills, &mut inputs.skills),
            (self.instagram, &mut inputs.instagram),
            (self.linkedin, &mut inputs.linkedin),
            (self.github, &mut inputs.github),
            (self.portfolio, &mut inputs.portfolio),
        ];
        for (value, field) in text_fields {
            if let Some(value) = value {
                *field = value;
            }
        }

        if let Some(theme) = self.theme {
            if let Theme::Other(name) = Theme::from_name(&theme) {
                tracing::warn!("Unknown theme '{}', it will render as white", name);
            }
            inputs.active_theme = Some(theme);
        }
        if let Some(layout) = self.layout {
            if let Layout::Other(name) = Layout::from_name(&layout) {
                tracing::warn!("Unknown layout '{}', it will render centered", name);
            }
            inputs.active_layout = Some(layout);
        }
        if let Some(animation) = self.animation {
            if let Animation::Other(name) = Animation::from_name(&animation) {
                tracing::warn!("Unknown animation '{}', it will not animate", name);
            }
            inputs.animation = animation;
        }
        if let Some(font) = self.font {
            inputs.active_font = Some(font);
        }

        if self.clear_image {
            inputs.image = None;
        } else if let Some(path) = self.image {
            let uri = image_data_uri(&path).context("Failed to load profile image")?;
            tracing::debug!(bytes = uri.len(), "Encoded {}", path.display());
            inputs.image = Some(uri);
        }

        Ok(())
    }
}

/// Run the set command.
pub async fn run(config: &ConfigFile, args: SetArgs) -> Result<()> {
    let store = config.store();

    if apply_to_store(&store, args)? {
        tracing::info!("Saved ✓ ({})", store.slot_path().display());
    } else {
        tracing::info!("Nothing changed");
    }

    Ok(())
}

/// Apply `args` onto the saved state and save the result.
///
/// Returns `false` without writing when a saved state was read back and
/// nothing changed. An empty or unreadable slot is always rewritten.
pub fn apply_to_store<S: KeyValueSlots>(store: &StateStore<S>, args: SetArgs) -> Result<bool> {
    let saved = store.load();

    let mut inputs = FormInputs::from(saved.as_ref().unwrap_or(&FormState::default()));
    args.apply(&mut inputs)?;
    let state = inputs.snapshot();

    if saved.as_ref() == Some(&state) {
        return Ok(false);
    }

    store.save(&state).context("Failed to save profile")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_form::{Platform, Skills};
    use portico_store::{MemorySlots, DEFAULT_SLOT};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn apply(args: SetArgs, state: &FormState) -> FormState {
        let mut inputs = FormInputs::from(state);
        args.apply(&mut inputs).unwrap();
        inputs.snapshot()
    }

    #[test]
    fn untouched_fields_keep_saved_values() {
        let mut saved = FormState {
            name: "Ada".to_string(),
            bio: "Engineer".to_string(),
            theme: Theme::Gradient,
            layout: Layout::Side,
            font: "Inter".to_string(),
            ..FormState::default()
        };
        saved.social.set(Platform::Github, "https://github.com/ada");

        let state = apply(
            SetArgs {
                skills: Some("Go, Rust".to_string()),
                ..SetArgs::default()
            },
            &saved,
        );

        assert_eq!(state.name, "Ada");
        assert_eq!(state.bio, "Engineer");
        assert_eq!(state.theme, Theme::Gradient);
        assert_eq!(state.layout, Layout::Side);
        assert_eq!(state.font, "Inter");
        assert_eq!(state.social.get(Platform::Github), Some("https://github.com/ada"));
        assert_eq!(state.skills, Skills::new("Go, Rust"));
    }

    #[test]
    fn selections_replace_active_card() {
        let state = apply(
            SetArgs {
                theme: Some("black".to_string()),
                layout: Some("side".to_string()),
                animation: Some("typewriter".to_string()),
                ..SetArgs::default()
            },
            &FormState::default(),
        );

        assert_eq!(state.theme, Theme::Black);
        assert_eq!(state.layout, Layout::Side);
        assert_eq!(state.animation, Animation::Typewriter);
    }

    #[test]
    fn unknown_theme_is_kept_verbatim() {
        let state = apply(
            SetArgs {
                theme: Some("neon".to_string()),
                ..SetArgs::default()
            },
            &FormState::default(),
        );

        assert_eq!(state.theme, Theme::Other("neon".to_string()));
    }

    #[test]
    fn empty_text_clears_field() {
        let saved = FormState {
            name: "Ada".to_string(),
            ..FormState::default()
        };

        let state = apply(
            SetArgs {
                name: Some(String::new()),
                ..SetArgs::default()
            },
            &saved,
        );

        assert_eq!(state.name, "");
    }

    #[test]
    fn image_is_embedded_as_data_uri() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("me.png");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let state = apply(
            SetArgs {
                image: Some(path),
                ..SetArgs::default()
            },
            &FormState::default(),
        );

        let image = state.profile_image.unwrap();
        assert!(image.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn clear_image_removes_picture() {
        let saved = FormState {
            profile_image: Some("data:image/png;base64,AAAA".to_string()),
            ..FormState::default()
        };

        let state = apply(
            SetArgs {
                clear_image: true,
                ..SetArgs::default()
            },
            &saved,
        );

        assert_eq!(state.profile_image, None);
    }

    #[test]
    fn missing_image_is_an_error() {
        let mut inputs = FormInputs::default();
        let args = SetArgs {
            image: Some(PathBuf::from("/no/such/picture.png")),
            ..SetArgs::default()
        };

        assert!(args.apply(&mut inputs).is_err());
        assert_eq!(inputs.image, None);
    }

    #[test]
    fn unchanged_state_is_not_rewritten() {
        let store = StateStore::new(MemorySlots::new(), DEFAULT_SLOT);
        store.save(&FormState::default()).unwrap();

        assert!(!apply_to_store(&store, SetArgs::default()).unwrap());
    }

    #[test]
    fn corrupt_slot_is_replaced_even_without_changes() {
        let slots = MemorySlots::new();
        slots.write(DEFAULT_SLOT, "{ not json").unwrap();
        let store = StateStore::new(slots, DEFAULT_SLOT);

        assert!(apply_to_store(&store, SetArgs::default()).unwrap());
        assert_eq!(store.load(), Some(FormState::default()));
    }

    #[test]
    fn first_set_creates_slot() {
        let store = StateStore::new(MemorySlots::new(), DEFAULT_SLOT);
        let args = SetArgs {
            name: Some("Ada".to_string()),
            ..SetArgs::default()
        };

        assert!(apply_to_store(&store, args).unwrap());
        assert_eq!(store.load().unwrap().name, "Ada");
    }
}
