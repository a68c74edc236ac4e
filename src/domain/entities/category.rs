use serde::{Deserialize, Serialize};

use crate::entities::{nullable::null_as_default, slug::Slug};

/// Lookup target for projects and blog posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: Slug,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tailwind class token, e.g. `bg-blue-500`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
