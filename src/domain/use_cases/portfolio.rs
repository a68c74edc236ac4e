use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::{
    entities::{blog_post::BlogPost, portfolio::PortfolioData},
    errors::CmsError,
    fallback,
    infrastructure::utils::sanitize::sanitize_error,
    repositories::content::ContentRepository,
};

pub const NO_CONTENT_MESSAGE: &str = "No content found in Sanity CMS - using demo data";

/// Outcome of one collection query. A failure leaves the default value in
/// `data` and the sanitized reason in `error`, so "failed" and "empty" stay
/// distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub error: Option<String>,
}

impl<T: Default> Fetched<T> {
    pub fn from_result(collection: &str, result: Result<T, CmsError>) -> Self {
        match result {
            Ok(data) => Fetched { data, error: None },
            Err(err) => {
                let message = sanitize_error(&err);
                error!(collection, error = %message, "Error fetching {} from Sanity", collection);
                Fetched { data: T::default(), error: Some(message) }
            }
        }
    }

    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub message: String,
    pub sanity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct PortfolioHandler<R>
where
    R: ContentRepository,
{
    pub content_repo: R,
}

impl<R> PortfolioHandler<R>
where
    R: ContentRepository,
{
    pub fn new(content_repo: R) -> Self {
        PortfolioHandler { content_repo }
    }

    /// Loads every collection at once and decides between live and bundled
    /// content. Never fails: degradation is reported through
    /// `is_using_fallback` and `errors`.
    #[instrument(skip(self))]
    pub async fn get_portfolio_data(&self) -> PortfolioData {
        if !self.content_repo.is_configured() {
            warn!("Sanity is not configured, serving bundled content");
            return PortfolioData::fallback(vec![connection_failed(&CmsError::NotConfigured.to_string())]);
        }

        let repo = &self.content_repo;
        let (projects, blog_posts, uses_items, categories, site_settings, social_links) = futures::join!(
            repo.fetch_projects(),
            repo.fetch_blog_posts(),
            repo.fetch_uses_items(),
            repo.fetch_categories(),
            repo.fetch_site_settings(),
            repo.fetch_social_links(),
        );

        let projects = Fetched::from_result("projects", projects);
        let blog_posts = Fetched::from_result("blog posts", blog_posts);
        let uses_items = Fetched::from_result("uses items", uses_items);
        let categories = Fetched::from_result("categories", categories);
        let site_settings = Fetched::from_result("site settings", site_settings);
        let social_links = Fetched::from_result("social links", social_links);

        let failures = [
            &projects.error,
            &blog_posts.error,
            &uses_items.error,
            &categories.error,
            &site_settings.error,
            &social_links.error,
        ];
        if failures.iter().all(|e| e.is_some()) {
            let first = failures.iter().find_map(|e| e.as_deref()).unwrap_or_default();
            error!("Failed to fetch from Sanity: {}", first);
            return PortfolioData::fallback(vec![connection_failed(first)]);
        }

        if projects.data.is_empty()
            && blog_posts.data.is_empty()
            && uses_items.data.is_empty()
            && categories.data.is_empty()
        {
            info!("No content found in Sanity, using fallback data");
            return PortfolioData::fallback(vec![NO_CONTENT_MESSAGE.to_string()]);
        }

        let failed = failures.iter().filter(|e| e.is_some()).count();
        if failed > 0 {
            warn!(failed, "Serving live content with some collections missing");
        }
        info!(
            "Loaded from Sanity: {} projects, {} posts, {} uses items, {} categories",
            projects.data.len(),
            blog_posts.data.len(),
            uses_items.data.len(),
            categories.data.len()
        );

        let social_links = if social_links.data.is_empty() {
            fallback::SOCIAL_LINKS.clone()
        } else {
            social_links.data
        };

        PortfolioData {
            projects: projects.data,
            blog_posts: blog_posts.data,
            uses_items: uses_items.data,
            categories: categories.data,
            site_settings: site_settings.data.or_else(|| Some(fallback::SITE_SETTINGS.clone())),
            social_links,
            is_using_fallback: false,
            errors: Vec::new(),
        }
    }

    /// Live post first, then the bundled post with the same slug.
    #[instrument(skip(self))]
    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        if !self.content_repo.is_configured() {
            return fallback::blog_post(slug);
        }

        match self.content_repo.fetch_blog_post_by_slug(slug).await {
            Ok(Some(post)) => Some(post),
            Ok(None) => fallback::blog_post(slug),
            Err(err) => {
                error!("Error fetching blog post by slug: {}", sanitize_error(&err));
                fallback::blog_post(slug)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all_blog_slugs(&self) -> Vec<String> {
        if !self.content_repo.is_configured() {
            return fallback::blog_slugs();
        }

        match self.content_repo.fetch_blog_slugs().await {
            Ok(slugs) if !slugs.is_empty() => slugs,
            Ok(_) => fallback::blog_slugs(),
            Err(err) => {
                error!("Error fetching blog slugs: {}", sanitize_error(&err));
                fallback::blog_slugs()
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn check_health(&self) -> HealthReport {
        if !self.content_repo.is_configured() {
            return HealthReport {
                status: HealthStatus::Warning,
                message: "Sanity not configured".into(),
                sanity: false,
                error: None,
            };
        }

        match self.content_repo.ping().await {
            Ok(()) => HealthReport {
                status: HealthStatus::Healthy,
                message: "All systems operational".into(),
                sanity: true,
                error: None,
            },
            Err(err) => {
                let message = sanitize_error(&err);
                error!("Health check failed: {}", message);
                HealthReport {
                    status: HealthStatus::Degraded,
                    message: "Sanity CMS unavailable - using cached content".into(),
                    sanity: false,
                    error: Some(message),
                }
            }
        }
    }
}

fn connection_failed(reason: &str) -> String {
    format!("Sanity CMS connection failed: {reason}")
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::{mock, predicate::eq};

    use super::*;
    use crate::entities::{
        category::Category, project::Project, site_settings::SiteSettings, slug::Slug,
        social_link::SocialLink, uses_item::UsesItem,
    };

    mock! {
        pub ContentRepo {}

        #[async_trait]
        impl ContentRepository for ContentRepo {
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
    }

    const LEAKY: &str = "error sending request for url (https://p.api.sanity.io/v1/data/query/production?token=sk123abc)";

    fn network_error() -> CmsError {
        CmsError::Request(LEAKY.to_string())
    }

    fn configured() -> MockContentRepo {
        let mut repo = MockContentRepo::new();
        repo.expect_is_configured().return_const(true);
        repo
    }

    /// Repo whose collections are the given values; anything not set is empty.
    fn repo_with(
        projects: Vec<Project>,
        blog_posts: Vec<BlogPost>,
        uses_items: Vec<UsesItem>,
        categories: Vec<Category>,
        site_settings: Option<SiteSettings>,
        social_links: Vec<SocialLink>,
    ) -> MockContentRepo {
        let mut repo = configured();
        repo.expect_fetch_projects().return_once(move || Ok(projects));
        repo.expect_fetch_blog_posts().return_once(move || Ok(blog_posts));
        repo.expect_fetch_uses_items().return_once(move || Ok(uses_items));
        repo.expect_fetch_categories().return_once(move || Ok(categories));
        repo.expect_fetch_site_settings().return_once(move || Ok(site_settings));
        repo.expect_fetch_social_links().return_once(move || Ok(social_links));
        repo
    }

    fn live_project(id: &str) -> Project {
        Project {
            id: id.into(),
            title: format!("Project {id}"),
            slug: Slug::new(format!("project-{id}")),
            ..fallback::PROJECTS[0].clone()
        }
    }

    fn live_category(id: &str) -> Category {
        Category {
            id: id.into(),
            title: id.to_uppercase(),
            slug: Slug::new(id),
            description: None,
            color: None,
        }
    }

    #[tokio::test]
    async fn network_failure_on_every_collection_serves_full_fallback() {
        let mut repo = configured();
        repo.expect_fetch_projects().returning(|| Err(network_error()));
        repo.expect_fetch_blog_posts().returning(|| Err(network_error()));
        repo.expect_fetch_uses_items().returning(|| Err(network_error()));
        repo.expect_fetch_categories().returning(|| Err(network_error()));
        repo.expect_fetch_site_settings().returning(|| Err(network_error()));
        repo.expect_fetch_social_links().returning(|| Err(network_error()));

        let data = PortfolioHandler::new(repo).get_portfolio_data().await;

        assert_eq!(data, PortfolioData::fallback(data.errors.clone()));
        assert!(data.is_using_fallback);
        assert_eq!(data.errors.len(), 1);
        assert!(data.errors[0].starts_with("Sanity CMS connection failed: Request failed: error sending request"));
        assert!(data.errors[0].contains("token=[REDACTED]"));
        assert!(!data.errors[0].contains("sk123abc"));
    }

    #[tokio::test]
    async fn all_primary_collections_empty_serves_fallback() {
        let repo = repo_with(vec![], vec![], vec![], vec![], None, vec![]);

        let data = PortfolioHandler::new(repo).get_portfolio_data().await;

        assert!(data.is_using_fallback);
        assert_eq!(data.errors, vec![NO_CONTENT_MESSAGE.to_string()]);
        assert_eq!(data.projects, *fallback::PROJECTS);
        assert_eq!(data.blog_posts, *fallback::BLOG_POSTS);
        assert_eq!(data.uses_items, *fallback::USES_ITEMS);
        assert_eq!(data.categories, *fallback::CATEGORIES);
        assert_eq!(data.site_settings.as_ref(), Some(&*fallback::SITE_SETTINGS));
        assert_eq!(data.social_links, *fallback::SOCIAL_LINKS);
    }

    #[tokio::test]
    async fn empty_live_settings_are_ignored_when_primary_collections_are_empty() {
        let settings = SiteSettings { name: Some("Live Name".into()), ..SiteSettings::default() };
        let repo = repo_with(vec![], vec![], vec![], vec![], Some(settings), vec![]);

        let data = PortfolioHandler::new(repo).get_portfolio_data().await;

        assert!(data.is_using_fallback);
        assert_eq!(data.site_settings.as_ref(), Some(&*fallback::SITE_SETTINGS));
    }

    #[tokio::test]
    async fn three_projects_two_categories_are_served_as_is() {
        let projects = vec![live_project("a"), live_project("b"), live_project("c")];
        let categories = vec![live_category("rust"), live_category("web")];
        let links = fallback::SOCIAL_LINKS[..1].to_vec();
        let settings = SiteSettings { name: Some("Ada".into()), ..SiteSettings::default() };
        let repo = repo_with(
            projects.clone(),
            vec![],
            vec![],
            categories.clone(),
            Some(settings.clone()),
            links.clone(),
        );

        let data = PortfolioHandler::new(repo).get_portfolio_data().await;

        assert!(!data.is_using_fallback);
        assert!(data.errors.is_empty());
        assert_eq!(data.projects, projects);
        assert!(data.blog_posts.is_empty());
        assert!(data.uses_items.is_empty());
        assert_eq!(data.categories, categories);
        assert_eq!(data.site_settings, Some(settings));
        assert_eq!(data.social_links, links);
    }

    #[tokio::test]
    async fn one_populated_collection_suppresses_fallback() {
        let repo = repo_with(vec![], vec![], vec![], vec![live_category("solo")], None, vec![]);

        let data = PortfolioHandler::new(repo).get_portfolio_data().await;

        assert!(!data.is_using_fallback);
        assert!(data.errors.is_empty());
        assert!(data.projects.is_empty());
    }

    #[tokio::test]
    async fn missing_settings_and_links_are_patched_without_flagging_fallback() {
        let repo = repo_with(vec![live_project("a")], vec![], vec![], vec![], None, vec![]);

        let data = PortfolioHandler::new(repo).get_portfolio_data().await;

        assert!(!data.is_using_fallback);
        assert_eq!(data.site_settings.as_ref(), Some(&*fallback::SITE_SETTINGS));
        assert_eq!(data.social_links, *fallback::SOCIAL_LINKS);
    }

    #[tokio::test]
    async fn partial_failures_degrade_to_empty_collections() {
        let mut repo = configured();
        repo.expect_fetch_projects().returning(|| Ok(vec![live_project("a")]));
        repo.expect_fetch_blog_posts().returning(|| Err(network_error()));
        repo.expect_fetch_uses_items().returning(|| Err(network_error()));
        repo.expect_fetch_categories().returning(|| Ok(vec![]));
        repo.expect_fetch_site_settings().returning(|| Err(network_error()));
        repo.expect_fetch_social_links().returning(|| Err(network_error()));

        let data = PortfolioHandler::new(repo).get_portfolio_data().await;

        assert!(!data.is_using_fallback);
        assert!(data.errors.is_empty());
        assert_eq!(data.projects.len(), 1);
        assert!(data.blog_posts.is_empty());
        assert_eq!(data.site_settings.as_ref(), Some(&*fallback::SITE_SETTINGS));
    }

    #[tokio::test]
    async fn unconfigured_repo_is_never_queried() {
        let mut repo = MockContentRepo::new();
        repo.expect_is_configured().return_const(false);
        repo.expect_fetch_projects().never();

        let data = PortfolioHandler::new(repo).get_portfolio_data().await;

        assert!(data.is_using_fallback);
        assert_eq!(data.errors, vec!["Sanity CMS connection failed: Sanity not configured".to_string()]);
    }

    #[test]
    fn fetch_helper_swallows_errors_into_defaults() {
        let failed: Fetched<Vec<Project>> = Fetched::from_result("projects", Err(network_error()));
        let missing: Fetched<Option<SiteSettings>> = Fetched::from_result("site settings", Err(network_error()));
        let ok: Fetched<Vec<Category>> = Fetched::from_result("categories", Ok(vec![]));

        assert!(failed.data.is_empty() && failed.failed());
        assert!(missing.data.is_none() && missing.failed());
        assert!(!ok.failed());
    }

    #[tokio::test]
    async fn blog_post_lookup_prefers_live_then_fallback() {
        let mut repo = configured();
        let live = BlogPost { title: "Live".into(), ..fallback::BLOG_POSTS[0].clone() };
        let returned = live.clone();
        repo.expect_fetch_blog_post_by_slug()
            .with(eq("support-to-ai-journey"))
            .return_once(move |_| Ok(Some(returned)));
        repo.expect_fetch_blog_post_by_slug()
            .with(eq("scalable-ml-pipelines"))
            .return_once(|_| Ok(None));
        repo.expect_fetch_blog_post_by_slug()
            .with(eq("ai-future-web-dev"))
            .return_once(|_| Err(network_error()));
        repo.expect_fetch_blog_post_by_slug()
            .with(eq("nope"))
            .return_once(|_| Ok(None));

        let handler = PortfolioHandler::new(repo);

        assert_eq!(handler.get_blog_post_by_slug("support-to-ai-journey").await, Some(live));
        assert_eq!(
            handler.get_blog_post_by_slug("scalable-ml-pipelines").await.map(|p| p.id),
            Some("2".to_string())
        );
        assert_eq!(
            handler.get_blog_post_by_slug("ai-future-web-dev").await.map(|p| p.id),
            Some("3".to_string())
        );
        assert_eq!(handler.get_blog_post_by_slug("nope").await, None);
    }

    #[tokio::test]
    async fn blog_slugs_fall_back_when_empty_or_failing() {
        let mut empty = configured();
        empty.expect_fetch_blog_slugs().returning(|| Ok(vec![]));
        let mut failing = configured();
        failing.expect_fetch_blog_slugs().returning(|| Err(network_error()));
        let mut live = configured();
        live.expect_fetch_blog_slugs().returning(|| Ok(vec!["hello-world".into()]));

        assert_eq!(PortfolioHandler::new(empty).get_all_blog_slugs().await, fallback::blog_slugs());
        assert_eq!(PortfolioHandler::new(failing).get_all_blog_slugs().await, fallback::blog_slugs());
        assert_eq!(PortfolioHandler::new(live).get_all_blog_slugs().await, vec!["hello-world".to_string()]);
    }

    #[tokio::test]
    async fn health_maps_configuration_and_ping_result() {
        let mut unconfigured = MockContentRepo::new();
        unconfigured.expect_is_configured().return_const(false);
        let mut healthy = configured();
        healthy.expect_ping().returning(|| Ok(()));
        let mut degraded = configured();
        degraded.expect_ping().returning(|| Err(CmsError::Status { status: 503, body: "down".into() }));

        let warning = PortfolioHandler::new(unconfigured).check_health().await;
        assert_eq!(warning.status, HealthStatus::Warning);
        assert!(!warning.sanity);

        let ok = PortfolioHandler::new(healthy).check_health().await;
        assert_eq!(ok.status, HealthStatus::Healthy);
        assert!(ok.sanity);

        let bad = PortfolioHandler::new(degraded).check_health().await;
        assert_eq!(bad.status, HealthStatus::Degraded);
        assert_eq!(bad.error.as_deref(), Some("Sanity API responded with 503: down"));
    }
}
