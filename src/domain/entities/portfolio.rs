use serde::Serialize;

use crate::{
    entities::{
        blog_post::BlogPost, category::Category, project::Project, site_settings::SiteSettings,
        social_link::SocialLink, uses_item::UsesItem,
    },
    fallback,
};

/// Everything a page needs, plus the degradation signal shown in the status
/// banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
    pub uses_items: Vec<UsesItem>,
    pub categories: Vec<Category>,
    pub site_settings: Option<SiteSettings>,
    pub social_links: Vec<SocialLink>,
    pub is_using_fallback: bool,
    pub errors: Vec<String>,
}

impl PortfolioData {
    /// The complete bundled dataset, flagged as fallback.
    pub fn fallback(errors: Vec<String>) -> Self {
        PortfolioData {
            projects: fallback::PROJECTS.clone(),
            blog_posts: fallback::BLOG_POSTS.clone(),
            uses_items: fallback::USES_ITEMS.clone(),
            categories: fallback::CATEGORIES.clone(),
            site_settings: Some(fallback::SITE_SETTINGS.clone()),
            social_links: fallback::SOCIAL_LINKS.clone(),
            is_using_fallback: true,
            errors,
        }
    }

    /// Status banner payload: present only when content is degraded.
    pub fn status(&self) -> ContentStatus {
        ContentStatus {
            is_using_fallback: self.is_using_fallback,
            errors: self.errors.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStatus {
    pub is_using_fallback: bool,
    pub errors: Vec<String>,
}
