use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::warn;

use crate::{
    entities::{
        blog_post::BlogPost, category::Category, project::Project, site_settings::SiteSettings,
        social_link::SocialLink, uses_item::UsesItem,
    },
    errors::CmsError,
    infrastructure::cms::{queries, SanityClient},
};

/// Read access to the published content. Every call is independent; callers
/// decide how to degrade when one fails.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    fn is_configured(&self) -> bool;
    async fn fetch_projects(&self) -> Result<Vec<Project>, CmsError>;
    async fn fetch_blog_posts(&self) -> Result<Vec<BlogPost>, CmsError>;
    async fn fetch_uses_items(&self) -> Result<Vec<UsesItem>, CmsError>;
    async fn fetch_categories(&self) -> Result<Vec<Category>, CmsError>;
    async fn fetch_site_settings(&self) -> Result<Option<SiteSettings>, CmsError>;
    async fn fetch_social_links(&self) -> Result<Vec<SocialLink>, CmsError>;
    async fn fetch_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, CmsError>;
    async fn fetch_blog_slugs(&self) -> Result<Vec<String>, CmsError>;
    async fn ping(&self) -> Result<(), CmsError>;
}

#[derive(Clone)]
pub struct SanityContentRepo {
    client: SanityClient,
}

#[derive(Deserialize)]
struct SlugRow {
    slug: Option<String>,
}

impl SanityContentRepo {
    pub fn new(client: SanityClient) -> Self {
        SanityContentRepo { client }
    }

    /// A `null` result (no documents of that type yet) reads as empty.
    /// Documents are decoded one by one: an incomplete one is skipped and
    /// logged, the rest of the collection is kept.
    async fn fetch_list<T: DeserializeOwned>(&self, query: &str) -> Result<Vec<T>, CmsError> {
        let items: Option<Vec<Value>> = self.client.fetch(query, &[]).await?;
        Ok(items.unwrap_or_default().into_iter().filter_map(decode_document).collect())
    }
}

fn decode_document<T: DeserializeOwned>(document: Value) -> Option<T> {
    let id = document.get("_id").and_then(Value::as_str).unwrap_or("<missing>").to_string();

    match serde_json::from_value(document) {
        Ok(item) => Some(item),
        Err(err) => {
            warn!(document_id = %id, error = %err, "Skipping malformed document");
            None
        }
    }
}

#[async_trait]
impl ContentRepository for SanityContentRepo {
    fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, CmsError> {
        self.fetch_list(queries::PROJECTS).await
    }

    async fn fetch_blog_posts(&self) -> Result<Vec<BlogPost>, CmsError> {
        self.fetch_list(queries::BLOG_POSTS).await
    }

    async fn fetch_uses_items(&self) -> Result<Vec<UsesItem>, CmsError> {
        self.fetch_list(queries::USES_ITEMS).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, CmsError> {
        self.fetch_list(queries::CATEGORIES).await
    }

    async fn fetch_site_settings(&self) -> Result<Option<SiteSettings>, CmsError> {
        self.client.fetch(queries::SITE_SETTINGS, &[]).await
    }

    async fn fetch_social_links(&self) -> Result<Vec<SocialLink>, CmsError> {
        self.fetch_list(queries::SOCIAL_LINKS).await
    }

    async fn fetch_blog_post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, CmsError> {
        self.client
            .fetch(queries::BLOG_POST_BY_SLUG, &[("slug", slug.to_string())])
            .await
    }

    async fn fetch_blog_slugs(&self) -> Result<Vec<String>, CmsError> {
        let rows: Vec<SlugRow> = self.fetch_list(queries::BLOG_SLUGS).await?;
        Ok(rows
            .into_iter()
            .filter_map(|row| row.slug)
            .filter(|slug| !slug.is_empty())
            .collect())
    }

    async fn ping(&self) -> Result<(), CmsError> {
        let _: Option<Value> = self.client.fetch(queries::HEALTH_PROBE, &[]).await?;
        Ok(())
    }
}
