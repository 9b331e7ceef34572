//! Configuration file schema
//!
//! The profile section carries the portfolio content the site renders
//! (name, tagline, bio, skills, projects); the theme section can pin an
//! ambient color-scheme for hosts without a platform signal. Defaults
//! reproduce the shipped portfolio.

use folio_domain::ThemeMode;
use serde::{Deserialize, Serialize};

/// Root of `folio.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub profile: ProfileConfig,
    pub theme: ThemeConfig,
}

/// The portfolio owner's content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
}

/// One showcased project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub href: String,
}

impl Default for ProjectEntry {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            href: "#".to_string(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Jonathan Marl".to_string(),
            tagline: "I build clean, modern, and interactive websites using React, Next.js, \
                      TypeScript, TailwindCSS, and more."
                .to_string(),
            bio: "I'm an IT student and front-end developer specializing in modern, minimal, \
                  and user-friendly web interfaces. I enjoy designing beautiful UI and smooth \
                  UX experiences. My focus is on performance, accessibility, and delivering \
                  pixel-perfect designs."
                .to_string(),
            skills: [
                "HTML5 / CSS3",
                "JavaScript (ES6+)",
                "React",
                "Next.js",
                "Tailwind CSS",
                "TypeScript",
                "REST APIs",
                "Git/GitHub",
            ]
            .map(String::from)
            .to_vec(),
            projects: vec![
                ProjectEntry {
                    title: "Project Alpha".to_string(),
                    description: "A complex web application showcasing state management with \
                                  Redux and robust authentication."
                        .to_string(),
                    href: "#".to_string(),
                },
                ProjectEntry {
                    title: "Project Beta".to_string(),
                    description: "A minimal landing page built with Next.js and server-side \
                                  rendering for fast performance."
                        .to_string(),
                    href: "#".to_string(),
                },
                ProjectEntry {
                    title: "Project Gamma".to_string(),
                    description: "An interactive data visualization tool built with D3.js to \
                                  analyze social trends."
                        .to_string(),
                    href: "#".to_string(),
                },
            ],
        }
    }
}

/// Theme-related settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Pinned ambient preference for hosts with no platform signal.
    pub ambient: Option<ThemeMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_the_shipped_profile() {
        let config = FileConfig::default();
        assert_eq!(config.profile.name, "Jonathan Marl");
        assert_eq!(config.profile.skills.len(), 8);
        assert_eq!(config.profile.projects.len(), 3);
        assert!(config.theme.ambient.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults_elsewhere() {
        let config: FileConfig = toml::from_str(
            r#"
            [theme]
            ambient = "dark"

            [profile]
            name = "Ada Lovelace"
            "#,
        )
        .unwrap();
        assert_eq!(config.profile.name, "Ada Lovelace");
        assert_eq!(config.theme.ambient, Some(ThemeMode::Dark));
        // Unspecified fields fall back
        assert_eq!(config.profile.projects.len(), 3);
    }
}
