//! Portfolio Catalog
//!
//! Loads the portfolio document compiled into the binary and checks the
//! invariants the pages rely on.

use std::collections::HashSet;

use thiserror::Error;

use crate::dates::parse_date;
use crate::models::Portfolio;

/// Portfolio document embedded at compile time
const EMBEDDED_PORTFOLIO: &str = include_str!("../data/portfolio.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to decode portfolio document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("duplicate project id `{0}`")]
    DuplicateProjectId(String),
    #[error("project #{index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },
    #[error("skill `{name}` has level {level}, expected 0..=100")]
    SkillLevelOutOfRange { name: String, level: u8 },
}

impl Portfolio {
    /// Load the document compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_PORTFOLIO)
    }

    /// Decode and validate a portfolio document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for (index, project) in self.projects.iter().enumerate() {
            if project.id.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "id" });
            }
            if project.title.trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "title" });
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateProjectId(project.id.clone()));
            }
            if parse_date(&project.date).is_none() {
                log::warn!(
                    "[CATALOG] project `{}` has unrecognised date {:?}; it sorts as oldest",
                    project.id,
                    project.date
                );
            }
        }

        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(CatalogError::SkillLevelOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }

        log::debug!(
            "[CATALOG] loaded {} projects, {} certification groups, {} workshops",
            self.projects.len(),
            self.certifications.len(),
            self.workshops.len()
        );
        Ok(())
    }
}
