//! Project domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Separator used in the stored `tech_stack` text.
pub const TECH_STACK_SEPARATOR: char = ',';

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Comma-delimited list of technologies, stored verbatim.
    pub tech_stack: String,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Splits the delimited tech stack into its trimmed, non-empty parts.
    pub fn technologies(&self) -> Vec<&str> {
        self.tech_stack
            .split(TECH_STACK_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Fields for inserting a project. Identity and timestamp are assigned by the
/// repository.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub image: Option<String>,
}

impl NewProject {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tech_stack: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tech_stack: tech_stack.into(),
            ..Default::default()
        }
    }

    pub fn with_github_link(mut self, link: impl Into<String>) -> Self {
        self.github_link = Some(link.into());
        self
    }

    pub fn with_live_link(mut self, link: impl Into<String>) -> Self {
        self.live_link = Some(link.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(tech_stack: &str) -> Project {
        Project {
            id: 1,
            title: "Portfolio Site".to_string(),
            description: "A site".to_string(),
            tech_stack: tech_stack.to_string(),
            github_link: None,
            live_link: None,
            image: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_technologies_split_and_trim() {
        let p = project("Rust, Axum ,SQLite");
        assert_eq!(p.technologies(), vec!["Rust", "Axum", "SQLite"]);
    }

    #[test]
    fn test_technologies_skips_empty_parts() {
        let p = project("Rust,, ,Tokio,");
        assert_eq!(p.technologies(), vec!["Rust", "Tokio"]);
    }

    #[test]
    fn test_technologies_single_value() {
        let p = project("Python/Flask");
        assert_eq!(p.technologies(), vec!["Python/Flask"]);
    }

    #[test]
    fn test_new_project_builder() {
        let p = NewProject::new("Title", "Desc", "Rust")
            .with_github_link("https://github.com/x/y")
            .with_live_link("https://x.dev")
            .with_image("img/x.png");
        assert_eq!(p.title, "Title");
        assert_eq!(p.github_link.as_deref(), Some("https://github.com/x/y"));
        assert_eq!(p.live_link.as_deref(), Some("https://x.dev"));
        assert_eq!(p.image.as_deref(), Some("img/x.png"));
    }

    #[test]
    fn test_project_serializes_snake_case() {
        let json = serde_json::to_value(project("Rust")).unwrap();
        assert_eq!(json["tech_stack"], "Rust");
        assert!(json.get("github_link").is_some());
        assert!(json.get("created_at").is_some());
    }
}
