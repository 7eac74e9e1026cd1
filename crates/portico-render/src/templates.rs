//! Template engine for rendering profile pages.
//!
//! Pages are assembled from named sections. Values reach the templates already
//! escaped, so auto-escaping is turned off for every template.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

/// A named template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `<head>` contents: meta tags, title, web fonts
    Head,
    /// Stylesheet for the exported page
    Style,
    /// Layout-specific page content
    Body,
    /// Full document shell around head, style and body
    Document,
    /// Inline-styled content for the live preview container
    Preview,
    /// Host page holding the live preview container
    PreviewPage,
}

impl Section {
    pub fn template_name(self) -> &'static str {
        match self {
            Section::Head => "head.html",
            Section::Style => "style.css",
            Section::Body => "body.html",
            Section::Document => "document.html",
            Section::Preview => "preview.html",
            Section::PreviewPage => "preview_page.html",
        }
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        let templates = [
            (Section::Head.template_name(), HEAD_TEMPLATE),
            (Section::Style.template_name(), STYLE_TEMPLATE),
            (Section::Body.template_name(), BODY_TEMPLATE),
            (Section::Document.template_name(), DOCUMENT_TEMPLATE),
            (Section::Preview.template_name(), PREVIEW_TEMPLATE),
            (Section::PreviewPage.template_name(), PREVIEW_PAGE_TEMPLATE),
            ("skills.html", SKILLS_TEMPLATE),
            ("social.html", SOCIAL_TEMPLATE),
        ];

        for (name, source) in templates {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("Failed to add built-in template");
        }

        Self { env }
    }

    /// Render one section with the given context.
    pub fn render_section<S: Serialize>(
        &self,
        section: Section,
        context: S,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(section.template_name())?;
        tmpl.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Styles of the page hosting the live preview. The preview container
/// itself gets its background, color and font inline.
pub const PREVIEW_SHELL_CSS: &str = r#"body { font-family: system-ui, sans-serif; margin: 0; padding: 2rem; background: #f0f2f5; }
.preview { max-width: 800px; margin: 0 auto; padding: 40px; border-radius: 16px; text-align: center; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1); }
.skills-container { display: flex; flex-wrap: wrap; gap: 8px; justify-content: center; margin: 15px 0; }
.skill-badge { background: rgba(102, 126, 234, 0.15); padding: 6px 14px; border-radius: 20px; font-size: 13px; font-weight: 600; }
.social-icons { display: flex; gap: 12px; justify-content: center; margin-top: 20px; }
.social-icon { width: 40px; height: 40px; border-radius: 50%; display: flex; align-items: center; justify-content: center; background: rgba(102, 126, 234, 0.15); color: inherit; text-decoration: none; }"#;

const HEAD_TEMPLATE: &str = r##"    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ name }}'s Webpage</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="{{ fonts_href }}" rel="stylesheet">"##;

const STYLE_TEMPLATE: &str = r##"* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: '{{ font }}', sans-serif;
    background: {{ theme.background }};
    color: {{ theme.color }};
    min-height: 100vh;
    display: flex;
    justify-content: center;
    align-items: center;
    padding: 20px;
}

.container {
    max-width: 900px;
    width: 100%;
    text-align: center;
    padding: 40px;
    border-radius: 20px;
    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);
    background: {{ theme.surface }};
}

.profile-img {
    width: 150px;
    height: 150px;
    border-radius: 50%;
    border: 4px solid {{ color }};
    object-fit: cover;
    margin-bottom: 20px;
    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.2);
}

h1 {
    color: {{ color }};
    font-size: 2.5em;
    margin-bottom: 20px;
    text-shadow: {{ theme.text_shadow }};
}

.bio {
    font-size: 1.2em;
    line-height: 1.6;
    margin-top: 20px;
    padding: 20px;
    border-radius: 10px;
    background: {{ theme.panel }};
}

.skills-container {
    display: flex;
    flex-wrap: wrap;
    gap: 10px;
    justify-content: center;
    margin: 20px 0;
}

.skill-badge {
    background: {{ theme.chip }};
    color: {{ color }};
    padding: 8px 16px;
    border-radius: 20px;
    font-size: 14px;
    font-weight: 600;
}

.social-icons {
    display: flex;
    gap: 15px;
    justify-content: center;
    margin-top: 25px;
}

.social-icon {
    width: 50px;
    height: 50px;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    background: {{ theme.chip }};
    color: {{ color }};
    text-decoration: none;
    transition: all 0.3s ease;
}

.social-icon:hover {
    background: {{ color }};
    color: white;
    transform: translateY(-3px);
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
}

/* Layout - Split */
.layout-split {
    display: flex;
    align-items: center;
    gap: 40px;
    text-align: left;
}

.profile-img-left {
    width: 200px;
    height: 200px;
    border-radius: 50%;
    border: 4px solid {{ color }};
    object-fit: cover;
    flex-shrink: 0;
    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.2);
}

.content-right {
    flex: 1;
}
{% if animation %}

/* Animation */
{{ animation }}
{% endif %}

/* Responsive */
@media screen and (max-width: 768px) {
    .container {
        padding: 30px 20px;
    }

    .profile-img {
        width: 120px;
        height: 120px;
    }

    h1 {
        font-size: 2em;
    }

    .bio {
        font-size: 1em;
        padding: 15px;
    }

    .layout-split {
        flex-direction: column;
        text-align: center;
    }

    .profile-img-left {
        width: 150px;
        height: 150px;
    }
}

@media screen and (max-width: 480px) {
    .profile-img {
        width: 100px;
        height: 100px;
    }

    h1 {
        font-size: 1.6em;
    }

    .social-icon {
        width: 45px;
        height: 45px;
    }
}"##;

const BODY_TEMPLATE: &str = r##"{% if side %}
<div class="layout-split">
{% if image %}
    <img src="{{ image }}" alt="{{ name }}'s profile picture" class="profile-img-left">
{% endif %}
    <div class="content-right">
        <h1>Hello, I'm {{ name }}! 👋</h1>
        <div class="bio">
            <strong>About me:</strong><br><br>
            {{ bio }}
        </div>
{% include "skills.html" %}
{% include "social.html" %}
    </div>
</div>
{% else %}
{% if image %}
<img src="{{ image }}" alt="{{ name }}'s profile picture" class="profile-img">
{% endif %}
<h1>Hello, I'm {{ name }}! 👋</h1>
<div class="bio">
    <strong>About me:</strong><br><br>
    {{ bio }}
</div>
{% include "skills.html" %}
{% include "social.html" %}
{% endif %}"##;

const DOCUMENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
{{ head }}
    <style>
{{ style }}
    </style>
</head>
<body>
    <div class="container">
{{ body }}
    </div>
</body>
</html>"##;

const PREVIEW_TEMPLATE: &str = r##"{% if side %}
<div style="display:flex; align-items:center; gap:30px; text-align:left; flex-wrap:wrap;">
{% if image %}
    <img src="{{ image }}" style="width:150px;height:150px;border-radius:50%;border:3px solid {{ color }};object-fit:cover;box-shadow: 0 4px 12px rgba(0,0,0,0.15); flex-shrink:0;">
{% endif %}
    <div style="flex:1; min-width:200px;">
        <h2 style="color:{{ color }}; margin:0 0 10px 0;">Hello, I'm {{ name }}! 👋</h2>
        <p style="margin:10px 0;"><strong>About me:</strong> {{ bio }}</p>
{% include "skills.html" %}
{% include "social.html" %}
    </div>
</div>
{% else %}
{% if image %}
<img src="{{ image }}" style="width:120px;height:120px;border-radius:50%;border:3px solid {{ color }};object-fit:cover;box-shadow: 0 4px 12px rgba(0,0,0,0.15);">
{% endif %}
<h2 style="color:{{ color }}; margin-top:15px;">Hello, I'm {{ name }}! 👋</h2>
<p style="margin-top:10px;"><strong>About me:</strong> {{ bio }}</p>
{% include "skills.html" %}
{% include "social.html" %}
{% endif %}"##;

const PREVIEW_PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
{% if refresh %}
  <meta http-equiv="refresh" content="{{ refresh }}">
{% endif %}
  <title>Live preview</title>
  <link href="{{ fonts_href }}" rel="stylesheet">
  <style>
{{ shell_css }}
  </style>
</head>
<body>
  <div id="output" class="preview"{% if container_style %} style="{{ container_style }}"{% endif %}>
{{ content }}
  </div>
</body>
</html>"##;

const SKILLS_TEMPLATE: &str = r##"{% if skills %}
<div class="skills-container">
{% for skill in skills %}
    <span class="skill-badge">{{ skill }}</span>
{% endfor %}
</div>
{% endif %}"##;

const SOCIAL_TEMPLATE: &str = r##"{% if socials %}
<div class="social-icons">
{% for link in socials %}
    <a href="{{ link.href }}" target="_blank" class="social-icon" title="{{ link.title }}">
        <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
            <path d="{{ link.icon }}"/>
        </svg>
    </a>
{% endfor %}
</div>
{% endif %}"##;
