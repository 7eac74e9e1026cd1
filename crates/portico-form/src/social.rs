//! Social profile links.

use serde::{Deserialize, Serialize};

/// A social platform with a fixed slot on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    Linkedin,
    Github,
    Portfolio,
}

impl Platform {
    /// Render order.
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Github,
        Platform::Portfolio,
    ];

    /// Key used in the saved state.
    pub fn key(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Github => "github",
            Platform::Portfolio => "portfolio",
        }
    }

    /// Display title (used as the link tooltip).
    pub fn title(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Linkedin => "LinkedIn",
            Platform::Github => "GitHub",
            Platform::Portfolio => "Portfolio",
        }
    }
}

/// URLs for each platform. An empty string means "not set".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
}

impl SocialLinks {
    /// Raw value for a platform, possibly empty.
    pub fn raw(&self, platform: Platform) -> &str {
        match platform {
            Platform::Instagram => &self.instagram,
            Platform::Linkedin => &self.linkedin,
            Platform::Github => &self.github,
            Platform::Portfolio => &self.portfolio,
        }
    }

    /// URL for a platform, if one is set.
    pub fn get(&self, platform: Platform) -> Option<&str> {
        let url = self.raw(platform);
        (!url.is_empty()).then_some(url)
    }

    pub fn set(&mut self, platform: Platform, url: impl Into<String>) {
        let slot = match platform {
            Platform::Instagram => &mut self.instagram,
            Platform::Linkedin => &mut self.linkedin,
            Platform::Github => &mut self.github,
            Platform::Portfolio => &mut self.portfolio,
        };
        *slot = url.into();
    }

    /// Set links in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        Platform::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|url| (p, url)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_fixed_order() {
        let mut links = SocialLinks::default();
        links.set(Platform::Portfolio, "https://ada.dev");
        links.set(Platform::Instagram, "https://instagram.com/ada");

        let platforms: Vec<Platform> = links.iter().map(|(p, _)| p).collect();
        assert_eq!(platforms, vec![Platform::Instagram, Platform::Portfolio]);
    }

    #[test]
    fn empty_urls_are_unset() {
        let links = SocialLinks::default();
        assert!(links.is_empty());
        assert_eq!(links.get(Platform::Github), None);
        assert_eq!(links.raw(Platform::Github), "");
    }
}
