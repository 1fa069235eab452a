use std::fmt;

use serde::{Deserialize, Serialize};

/// Presentation hint attached to a recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Normal => "normal",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        };
        f.write_str(label)
    }
}

/// A single human-readable finding produced by one of the reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Normal)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Warning)
    }

    pub fn danger(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Danger)
    }
}
