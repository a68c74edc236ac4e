use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{
    category::Category,
    image::{ImageSource, SanityImage},
    nullable::null_as_default,
    slug::Slug,
};

// ───── Content Models ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: Slug,

    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    /// Portable Text body. Listings leave it out of the projection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentBlock>>,

    #[serde(default)]
    pub image: Option<ImageSource>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,

    /// Estimated minutes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reading_time: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

/// One Portable Text block. Unknown block types are kept as `Unknown` so a
/// new schema type in the studio never breaks rendering of a whole post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum ContentBlock {
    #[serde(rename = "block")]
    Text(TextBlock),

    #[serde(rename = "image")]
    Image(SanityImage),

    #[serde(rename = "code")]
    Code(CodeBlock),

    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default = "default_style", deserialize_with = "style_or_default")]
    pub style: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Span>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub mark_defs: Vec<MarkDef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_item: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    /// Decorator names (`strong`, `em`, `code`...) or `_key`s of mark defs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub marks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,

    #[serde(rename = "_type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

fn default_style() -> String {
    "normal".to_string()
}

fn style_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_style))
}

impl BlogPost {
    pub fn in_category(&self, category_slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug.matches(category_slug))
    }

    pub fn meta_title(&self) -> &str {
        self.seo
            .as_ref()
            .and_then(|s| s.meta_title.as_deref())
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.title)
    }

    pub fn meta_description(&self) -> &str {
        self.seo
            .as_ref()
            .and_then(|s| s.meta_description.as_deref())
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.excerpt)
    }
}
