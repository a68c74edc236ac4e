use serde::{Deserialize, Serialize};

use crate::entities::{image::ImageSource, nullable::null_as_default};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsesItem {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub reasoning: String,

    #[serde(default)]
    pub image: Option<ImageSource>,

    pub category: UsesCategory,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsesCategory {
    Hardware,
    Software,
    #[serde(rename = "Development Tools")]
    DevelopmentTools,
    #[serde(rename = "Office Setup")]
    OfficeSetup,
}

impl UsesCategory {
    /// Display order of the uses page.
    pub const ALL: [UsesCategory; 4] = [
        UsesCategory::Hardware,
        UsesCategory::Software,
        UsesCategory::DevelopmentTools,
        UsesCategory::OfficeSetup,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UsesCategory::Hardware => "Hardware",
            UsesCategory::Software => "Software",
            UsesCategory::DevelopmentTools => "Development Tools",
            UsesCategory::OfficeSetup => "Office Setup",
        }
    }

    /// Lucide icon shown next to the section heading.
    pub fn icon(&self) -> &'static str {
        match self {
            UsesCategory::Hardware => "Monitor",
            UsesCategory::Software => "Code",
            UsesCategory::DevelopmentTools => "Wrench",
            UsesCategory::OfficeSetup => "Coffee",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            UsesCategory::Hardware => "bg-blue-500",
            UsesCategory::Software => "bg-amber-500",
            UsesCategory::DevelopmentTools => "bg-orange-600",
            UsesCategory::OfficeSetup => "bg-orange-400",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_categories_use_display_names_on_the_wire() {
        let category: UsesCategory = serde_json::from_str(r#""Development Tools""#).unwrap();
        assert_eq!(category, UsesCategory::DevelopmentTools);
        assert_eq!(serde_json::to_string(&UsesCategory::OfficeSetup).unwrap(), r#""Office Setup""#);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(serde_json::from_str::<UsesCategory>(r#""Snacks""#).is_err());
    }
}
