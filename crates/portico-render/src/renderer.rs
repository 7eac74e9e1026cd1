//! Profile page renderer.

use portico_form::{is_placeholder, FormState, DEFAULT_FONT};
use serde::Serialize;

use crate::assets::{AssetPipeline, FONTS_HREF};
use crate::templates::{Section, TemplateEngine, PREVIEW_SHELL_CSS};
use crate::theme::ThemeStyle;

/// Name shown when the name field is empty.
pub const DEFAULT_NAME: &str = "Anonymous";

/// Accent color used when the color field is empty.
pub const DEFAULT_COLOR: &str = "#667eea";

/// Bio shown when the bio field is empty.
pub const DEFAULT_BIO: &str = "No bio provided yet!";

/// Shown in the preview container when there is nothing to preview.
pub const PREVIEW_PLACEHOLDER: &str = r#"<p style="color:#999;">Your webpage will appear here...</p>"#;

/// Options for rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Minify the stylesheet of exported documents
    pub minify: bool,
}

/// Errors that can occur while rendering.
///
/// The built-in templates render for every form state, so this only signals a
/// broken template.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template {section}: {message}")]
    Template { section: &'static str, message: String },
}

/// Styles the preview container takes from the form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewStyle {
    pub background: String,
    pub color: String,
    pub font_family: String,
}

impl PreviewStyle {
    /// Declarations for a `style` attribute.
    pub fn to_inline_css(&self) -> String {
        format!(
            "background: {}; color: {}; font-family: {};",
            self.background, self.color, self.font_family
        )
    }
}

/// Live preview output: the inner markup plus the container styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub html: String,
    pub style: PreviewStyle,
}

/// Rendered sections of a complete document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSections {
    pub head: String,
    pub style: String,
    pub body: String,
}

/// A social link ready for the template.
#[derive(Debug, Clone, Serialize)]
struct SocialLink {
    href: String,
    title: &'static str,
    icon: &'static str,
}

/// Form state with display defaults applied and user text escaped.
#[derive(Debug, Clone, Serialize)]
struct ResolvedProfile {
    name: String,
    color: String,
    bio: String,
    image: Option<String>,
    skills: Vec<String>,
    socials: Vec<SocialLink>,
    side: bool,
    font: String,
    theme: ThemeStyle,
    animation: Option<&'static str>,
    fonts_href: &'static str,
}

impl ResolvedProfile {
    fn from_state(state: &FormState) -> Self {
        let color = css_value(or_default(&state.accent_color, DEFAULT_COLOR));
        let font = css_value(or_default(&state.font, DEFAULT_FONT));

        Self {
            name: html_escape(or_default(&state.name, DEFAULT_NAME)),
            color: if color.is_empty() {
                DEFAULT_COLOR.to_string()
            } else {
                color
            },
            bio: html_escape(or_default(&state.bio, DEFAULT_BIO)),
            image: state
                .profile_image
                .as_deref()
                .filter(|src| !is_placeholder(src))
                .map(html_escape),
            skills: state.skills.items().map(html_escape).collect(),
            socials: state
                .social
                .iter()
                .map(|(platform, url)| SocialLink {
                    href: html_escape(url),
                    title: platform.title(),
                    icon: AssetPipeline::icon_path(platform),
                })
                .collect(),
            side: state.layout.is_side(),
            font: if font.is_empty() {
                DEFAULT_FONT.to_string()
            } else {
                font
            },
            theme: ThemeStyle::resolve(&state.theme),
            animation: AssetPipeline::keyframes(&state.animation),
            fonts_href: FONTS_HREF,
        }
    }
}

/// Turns form state into HTML.
pub struct DocumentRenderer {
    options: RenderOptions,
    templates: TemplateEngine,
}

impl DocumentRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            templates: TemplateEngine::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a complete, self-contained HTML document.
    pub fn render(&self, state: &FormState) -> Result<String, RenderError> {
        let sections = self.render_sections(state)?;
        self.section(Section::Document, &sections)
    }

    /// Render the head, style and body sections separately.
    pub fn render_sections(&self, state: &FormState) -> Result<PageSections, RenderError> {
        let profile = ResolvedProfile::from_state(state);

        let head = self.section(Section::Head, &profile)?;
        let style = self.section(Section::Style, &profile)?;
        let style = if self.options.minify {
            AssetPipeline::minify_css(&style).unwrap_or_else(|e| {
                tracing::warn!("Keeping unminified styles: {}", e);
                style
            })
        } else {
            style
        };
        let body = self.section(Section::Body, &profile)?;

        Ok(PageSections { head, style, body })
    }

    /// Render the live preview: inner markup plus the styles to apply to the
    /// preview container.
    pub fn render_preview(&self, state: &FormState) -> Result<Preview, RenderError> {
        let profile = ResolvedProfile::from_state(state);
        let html = self.section(Section::Preview, &profile)?;

        Ok(Preview {
            html,
            style: PreviewStyle {
                background: profile.theme.background.to_string(),
                color: profile.theme.color.to_string(),
                font_family: profile.font,
            },
        })
    }

    /// Render a standalone page hosting a preview container.
    ///
    /// With no preview the container shows a placeholder. `refresh` adds a
    /// meta refresh so a browser picks up rewrites of the page.
    pub fn render_preview_page(
        &self,
        preview: Option<&Preview>,
        refresh: Option<u32>,
    ) -> Result<String, RenderError> {
        let (content, container_style) = match preview {
            Some(p) => (p.html.as_str(), Some(p.style.to_inline_css())),
            None => (PREVIEW_PLACEHOLDER, None),
        };

        self.section(
            Section::PreviewPage,
            minijinja::context! {
                content => content,
                container_style => container_style,
                refresh => refresh,
                shell_css => PREVIEW_SHELL_CSS,
                fonts_href => FONTS_HREF,
            },
        )
    }

    fn section<S: Serialize>(&self, section: Section, context: S) -> Result<String, RenderError> {
        self.templates
            .render_section(section, context)
            .map_err(|e| RenderError::Template {
                section: section.template_name(),
                message: e.to_string(),
            })
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// Escape HTML special characters, including both quote styles.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Strip characters that could end a CSS declaration or the style element.
pub fn css_value(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | ';' | '"' | '\'' | '\\'))
        .collect::<String>()
        .trim()
        .to_string()
}
