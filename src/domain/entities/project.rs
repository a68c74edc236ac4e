use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{category::Category, image::ImageSource, nullable::null_as_default, slug::Slug};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: Slug,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub long_description: String,

    #[serde(default)]
    pub image: Option<ImageSource>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,

    /// Dangling references come back as `null`.
    #[serde(default)]
    pub category: Option<Category>,

    #[serde(default)]
    pub live_url: Option<String>,

    #[serde(default)]
    pub github_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn in_category(&self, category_slug: &str) -> bool {
        self.category
            .as_ref()
            .is_some_and(|c| c.slug.matches(category_slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groq_nulls_do_not_fail_deserialisation() {
        let project: Project = serde_json::from_str(
            r#"{
                "_id": "p1",
                "title": "Compiler",
                "slug": "compiler",
                "description": null,
                "longDescription": null,
                "image": null,
                "technologies": null,
                "category": {"_id": "c1", "title": "Systems", "slug": "systems"},
                "liveUrl": null,
                "githubUrl": "https://github.com/me/compiler",
                "featured": null,
                "order": 2,
                "publishedAt": "2024-03-01T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(project.description, "");
        assert!(project.technologies.is_empty());
        assert!(!project.featured);
        assert!(project.in_category("systems"));
        assert!(!project.in_category("web"));
    }
}
