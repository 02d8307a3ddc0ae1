//! Portfolio Models
//!
//! Data structures decoded from the embedded portfolio document.

use serde::{Deserialize, Serialize};

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Title shown in the navbar
    pub brand: String,
    /// Console log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// How many certifications the home page previews
    #[serde(default = "default_certification_peek")]
    pub certification_peek: usize,
    /// How many projects the home page previews
    #[serde(default = "default_project_peek")]
    pub project_peek: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "MyPortfolio".to_string(),
            log_level: default_log_level(),
            certification_peek: default_certification_peek(),
            project_peek: default_project_peek(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_certification_peek() -> usize {
    4
}

fn default_project_peek() -> usize {
    3
}

/// Who the portfolio is about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    /// Markdown
    pub about: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub cv_url: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub credential_url: String,
}

/// Certifications shown together under one heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationGroup {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Certification>,
}

/// Badge data structure. `date` is free text and only displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub image_url: String,
    pub credential_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

/// A portfolio project. `id` doubles as the detail-page route key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display string and sort key, see `dates::parse_date`
    pub date: String,
    pub thumbnail: String,
    pub summary: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    /// Optional markdown write-up for the detail page
    #[serde(default)]
    pub notes: Option<String>,
}

impl Project {
    /// Searchable text: title, summary and tags separated by single spaces
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.summary, self.tags.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workshop {
    pub title: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Class visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excursion {
    pub title: String,
    pub description: String,
}

/// The whole portfolio document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub site: SiteConfig,
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certifications: Vec<CertificationGroup>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub workshops: Vec<Workshop>,
    #[serde(default)]
    pub excursions: Vec<Excursion>,
}

impl Portfolio {
    /// First `site.certification_peek` certifications across all groups, in group order
    pub fn certification_peek(&self) -> Vec<&Certification> {
        self.certifications
            .iter()
            .flat_map(|group| group.items.iter())
            .take(self.site.certification_peek)
            .collect()
    }

    /// First `site.project_peek` projects in catalog order
    pub fn project_peek(&self) -> &[Project] {
        let end = self.site.project_peek.min(self.projects.len());
        &self.projects[..end]
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haystack_joins_fields_with_spaces() {
        let project = Project {
            id: "p".to_string(),
            title: "Sushi Wizard".to_string(),
            tags: vec!["Rust".to_string(), "WASM".to_string()],
            date: "2025-04".to_string(),
            thumbnail: String::new(),
            summary: "Rolls maki".to_string(),
            details: vec![],
            links: vec![],
            notes: None,
        };
        assert_eq!(project.haystack(), "Sushi Wizard Rolls maki Rust WASM");
    }

    #[test]
    fn test_haystack_without_tags_keeps_trailing_separator() {
        let project = Project {
            id: "p".to_string(),
            title: "T".to_string(),
            tags: vec![],
            date: String::new(),
            thumbnail: String::new(),
            summary: "S".to_string(),
            details: vec![],
            links: vec![],
            notes: None,
        };
        assert_eq!(project.haystack(), "T S ");
    }

    #[test]
    fn test_site_config_defaults() {
        let site: SiteConfig = serde_json::from_str(r#"{ "brand": "Me" }"#).unwrap();
        assert_eq!(site.log_level, "info");
        assert_eq!(site.certification_peek, 4);
        assert_eq!(site.project_peek, 3);
    }
}
