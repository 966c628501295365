//! Data transfer objects shared between the data store and the HTTP surface.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One portfolio item. Only `id` is typed; every other key in the stored
/// JSON passes through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// The root document describing the designer and their projects. Loaded once
/// at startup and treated as immutable afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub behance: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PortfolioDocument {
    /// Linear search in stored order; the first match wins if ids are
    /// duplicated.
    pub fn project_by_id(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with_projects(projects: Vec<Project>) -> PortfolioDocument {
        PortfolioDocument {
            projects,
            ..Default::default()
        }
    }

    fn project(id: i64, label: &str) -> Project {
        serde_json::from_value(json!({ "id": id, "title": label })).unwrap()
    }

    #[test]
    fn lookup_finds_by_id() {
        let doc = doc_with_projects(vec![project(1, "one"), project(2, "two")]);
        let found = doc.project_by_id(2).unwrap();
        assert_eq!(found.details["title"], "two");
    }

    #[test]
    fn lookup_misses_unknown_id() {
        let doc = doc_with_projects(vec![project(1, "one")]);
        assert!(doc.project_by_id(99999).is_none());
    }

    #[test]
    fn duplicate_ids_return_first_match() {
        let doc = doc_with_projects(vec![project(7, "first"), project(7, "second")]);
        assert_eq!(doc.project_by_id(7).unwrap().details["title"], "first");
    }

    #[test]
    fn unknown_project_fields_round_trip() {
        let raw = json!({ "id": 3, "category": "UI Design", "year": 2024 });
        let project: Project = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&project).unwrap(), raw);
    }
}
