//! Loads the portfolio document from disk. The load happens exactly once at
//! process start; the document is never refreshed or written back.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::dto::PortfolioDocument;
use crate::error::AppError;

/// Built-in placeholder document used when no data file exists yet.
pub fn default_document() -> PortfolioDocument {
    PortfolioDocument {
        name: "Your Name".into(),
        title: "UI/UX Designer".into(),
        email: "your.email@example.com".into(),
        linkedin: "linkedin.com/in/yourprofile".into(),
        behance: "behance.net/yourprofile".into(),
        bio: "Passionate UI/UX designer with expertise in creating intuitive and visually \
              stunning digital experiences."
            .into(),
        skills: [
            "UI Design",
            "UX Research",
            "Figma",
            "Prototyping",
            "User Testing",
            "Wireframing",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        projects: Vec::new(),
        extra: serde_json::Map::new(),
    }
}

/// Reads and parses the document at `path`, falling back to
/// [`default_document`] when the file is absent. A malformed file is a fatal
/// data error; startup must not continue on half-parsed data.
pub fn load(path: &Path) -> Result<PortfolioDocument, AppError> {
    if !path.exists() {
        info!(path = %path.display(), "data file missing, serving built-in defaults");
        return Ok(default_document());
    }

    let raw = fs::read_to_string(path).map_err(|e| AppError::Io(e.to_string()))?;
    let document: PortfolioDocument =
        serde_json::from_str(&raw).map_err(|e| AppError::Data(e.to_string()))?;

    let mut seen = HashSet::new();
    for project in &document.projects {
        if !seen.insert(project.id) {
            warn!(id = project.id, "duplicate project id, lookup returns the first match");
        }
    }

    info!(
        path = %path.display(),
        projects = document.projects.len(),
        "portfolio data loaded"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("portfolio-store-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_default_document() {
        let path = std::env::temp_dir().join("portfolio-store-no-such-file.json");
        let doc = load(&path).unwrap();
        assert_eq!(doc.name, "Your Name");
        assert_eq!(doc.title, "UI/UX Designer");
        assert!(doc.projects.is_empty());
        assert_eq!(doc.skills.len(), 6);
    }

    #[test]
    fn existing_file_is_parsed_verbatim() {
        let path = scratch_file(
            "parsed.json",
            r#"{
                "name": "Ada",
                "title": "Product Designer",
                "email": "ada@example.com",
                "linkedin": "linkedin.com/in/ada",
                "behance": "behance.net/ada",
                "bio": "Designs things.",
                "skills": ["Figma"],
                "projects": [{"id": 1, "title": "App", "category": "UI"}]
            }"#,
        );
        let doc = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(doc.name, "Ada");
        assert_eq!(doc.projects.len(), 1);
        assert_eq!(doc.projects[0].id, 1);
        assert_eq!(doc.projects[0].details["category"], "UI");
    }

    #[test]
    fn partial_document_still_loads() {
        let path = scratch_file("partial.json", r#"{"name": "Ada"}"#);
        let doc = load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(doc.name, "Ada");
        assert!(doc.title.is_empty());
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn malformed_json_is_a_data_error() {
        let path = scratch_file("broken.json", "{not json");
        let err = load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, AppError::Data(_)));
    }
}
