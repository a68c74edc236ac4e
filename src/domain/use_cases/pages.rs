//! Page-shaped views over a [`PortfolioData`] bundle. Pure functions: no
//! I/O, so every page sees exactly the bundle it was given.

use serde::Serialize;

use crate::{
    entities::{
        blog_post::BlogPost,
        category::Category,
        image::ImageSource,
        portfolio::{ContentStatus, PortfolioData},
        project::Project,
        site_settings::SiteConfig,
        social_link::{FooterLink, SocialLink},
        uses_item::{UsesCategory, UsesItem},
    },
    fallback,
    infrastructure::utils::{
        image_url::{Fit, ImageOptions, ImageUrlBuilder},
        portable_text::render_content,
    },
};

const HOME_PROJECT_COUNT: usize = 3;
const OG_WIDTH: u32 = 1200;
const OG_HEIGHT: u32 = 630;

const PROJECTS_TITLE: &str = "Projects";
const PROJECTS_DESCRIPTION: &str = "A selection of things I have designed, built and shipped";
const USES_TITLE: &str = "Uses";
const USES_DESCRIPTION: &str = "The hardware, software and tools I use every day";
const BLOG_TITLE: &str = "Blog";
const BLOG_DESCRIPTION: &str = "Thoughts, tutorials, and insights on software development";

// ───── Metadata ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    pub open_graph: OpenGraph,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

impl PageMetadata {
    fn website(title: String, description: String, url: Option<String>) -> Self {
        PageMetadata {
            open_graph: OpenGraph {
                kind: "website",
                title: title.clone(),
                description: description.clone(),
                url: url.clone(),
                images: Vec::new(),
            },
            title,
            description,
            canonical_url: url,
        }
    }
}

// ───── Cards ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    #[serde(flatten)]
    pub project: Project,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostCard {
    #[serde(flatten)]
    pub post: BlogPost,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsesItemCard {
    #[serde(flatten)]
    pub item: UsesItem,
    pub image_url: String,
}

fn card_image(images: &ImageUrlBuilder, image: Option<&ImageSource>, width: u32, height: u32) -> String {
    images.resolve(image, &ImageOptions::sized(width, height).fit(Fit::Crop).auto_format())
}

fn project_card(project: &Project, images: &ImageUrlBuilder) -> ProjectCard {
    ProjectCard {
        image_url: card_image(images, project.image.as_ref(), 400, 300),
        project: project.clone(),
    }
}

fn blog_post_card(post: &BlogPost, images: &ImageUrlBuilder) -> BlogPostCard {
    let mut post = post.clone();
    post.content = None;
    BlogPostCard {
        image_url: card_image(images, post.image.as_ref(), 400, 200),
        post,
    }
}

// ───── Pages ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePayload {
    pub site: SiteConfig,
    pub footer_links: Vec<FooterLink>,
    pub status: ContentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub site: SiteConfig,
    pub footer_links: Vec<FooterLink>,
    pub projects: Vec<ProjectCard>,
    pub blog_posts: Vec<BlogPostCard>,
    pub categories: Vec<Category>,
    pub status: ContentStatus,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPage {
    pub projects: Vec<ProjectCard>,
    pub categories: Vec<Category>,
    pub status: ContentStatus,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsesSection {
    pub category: UsesCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub items: Vec<UsesItemCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsesPage {
    pub sections: Vec<UsesSection>,
    pub status: ContentStatus,
    pub metadata: PageMetadata,
}

/// Filters for the blog listing. All optional; `limit` applies last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListPage {
    pub posts: Vec<BlogPostCard>,
    pub categories: Vec<Category>,
    pub status: ContentStatus,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPage {
    pub post: BlogPost,
    pub image_url: Option<String>,
    pub content_html: String,
    pub metadata: PageMetadata,
}

/// Footer links for the given social links; bundled links when there are
/// none.
pub fn footer_links(links: &[SocialLink]) -> Vec<FooterLink> {
    let links = if links.is_empty() { &fallback::SOCIAL_LINKS[..] } else { links };
    links.iter().map(FooterLink::from).collect()
}

/// Categories that at least one post belongs to, in their original order.
pub fn categories_with_posts(categories: &[Category], posts: &[BlogPost]) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| posts.iter().any(|p| p.in_category(c.slug.as_str())))
        .cloned()
        .collect()
}

pub fn site_payload(data: &PortfolioData) -> SitePayload {
    SitePayload {
        site: SiteConfig::resolve(data.site_settings.as_ref()),
        footer_links: footer_links(&data.social_links),
        status: data.status(),
    }
}

pub fn home_page(data: &PortfolioData, images: &ImageUrlBuilder, site_url: &str) -> HomePage {
    let site = SiteConfig::resolve(data.site_settings.as_ref());

    let mut description = site.hero.description.clone();
    if data.is_using_fallback {
        description.push_str(" (Cached Content)");
    }
    let metadata = PageMetadata::website(
        format!("{} - {}", site.personal.name, site.personal.title),
        description,
        Some(site_url.to_string()),
    );

    HomePage {
        footer_links: footer_links(&data.social_links),
        projects: data
            .projects
            .iter()
            .take(HOME_PROJECT_COUNT)
            .map(|p| project_card(p, images))
            .collect(),
        blog_posts: data.blog_posts.iter().map(|p| blog_post_card(p, images)).collect(),
        categories: categories_with_posts(&data.categories, &data.blog_posts),
        status: data.status(),
        metadata,
        site,
    }
}

pub fn projects_page(data: &PortfolioData, images: &ImageUrlBuilder, site_url: &str, category: Option<&str>) -> ProjectsPage {
    let title = format!("{} - {}", PROJECTS_TITLE, owner_name(data));

    ProjectsPage {
        projects: data
            .projects
            .iter()
            .filter(|p| category.is_none_or(|slug| p.in_category(slug)))
            .map(|p| project_card(p, images))
            .collect(),
        categories: data.categories.clone(),
        status: data.status(),
        metadata: PageMetadata::website(title, PROJECTS_DESCRIPTION.into(), Some(format!("{site_url}/projects"))),
    }
}

pub fn uses_page(data: &PortfolioData, images: &ImageUrlBuilder, site_url: &str) -> UsesPage {
    let sections = UsesCategory::ALL
        .iter()
        .filter_map(|category| {
            let items: Vec<UsesItemCard> = data
                .uses_items
                .iter()
                .filter(|item| item.category == *category)
                .map(|item| UsesItemCard {
                    image_url: card_image(images, item.image.as_ref(), 400, 300),
                    item: item.clone(),
                })
                .collect();

            (!items.is_empty()).then(|| UsesSection {
                category: *category,
                label: category.label(),
                icon: category.icon(),
                color: category.color(),
                items,
            })
        })
        .collect();

    let title = format!("{} - {}", USES_TITLE, owner_name(data));
    UsesPage {
        sections,
        status: data.status(),
        metadata: PageMetadata::website(title, USES_DESCRIPTION.into(), Some(format!("{site_url}/uses"))),
    }
}

pub fn blog_list_page(data: &PortfolioData, images: &ImageUrlBuilder, site_url: &str, filter: &BlogPostFilter) -> BlogListPage {
    let posts = data
        .blog_posts
        .iter()
        .filter(|p| filter.category.as_deref().is_none_or(|slug| p.in_category(slug)))
        .filter(|p| filter.featured.is_none_or(|featured| p.featured == featured))
        .take(filter.limit.unwrap_or(usize::MAX))
        .map(|p| blog_post_card(p, images))
        .collect();

    let title = format!("{} - {}", BLOG_TITLE, owner_name(data));
    BlogListPage {
        posts,
        categories: categories_with_posts(&data.categories, &data.blog_posts),
        status: data.status(),
        metadata: PageMetadata::website(title, BLOG_DESCRIPTION.into(), Some(format!("{site_url}/blog"))),
    }
}

pub fn blog_post_page(post: BlogPost, images: &ImageUrlBuilder, site_url: &str) -> BlogPostPage {
    let content_html = render_content(post.content.as_deref(), images);
    let image_url = images.resolve_real(post.image.as_ref(), &ImageOptions::sized(800, 400).fit(Fit::Crop).auto_format());

    BlogPostPage {
        metadata: blog_post_metadata(&post, images, site_url),
        image_url,
        content_html,
        post,
    }
}

pub fn blog_post_metadata(post: &BlogPost, images: &ImageUrlBuilder, site_url: &str) -> PageMetadata {
    let title = post.meta_title().to_string();
    let description = post.meta_description().to_string();
    let url = format!("{site_url}/blog/{}", post.slug);

    let og_image = images
        .resolve_real(
            post.image.as_ref(),
            &ImageOptions::sized(OG_WIDTH, OG_HEIGHT).fit(Fit::Crop).auto_format(),
        )
        .unwrap_or_else(|| format!("{site_url}/og-image.png"));

    PageMetadata {
        open_graph: OpenGraph {
            kind: "article",
            title: title.clone(),
            description: description.clone(),
            url: Some(url.clone()),
            images: vec![OgImage { url: og_image, width: OG_WIDTH, height: OG_HEIGHT, alt: title.clone() }],
        },
        title,
        description,
        canonical_url: Some(url),
    }
}

fn owner_name(data: &PortfolioData) -> &str {
    data.site_settings
        .as_ref()
        .and_then(|s| s.name.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or("Portfolio")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{
            image::{AssetRef, SanityImage},
            site_settings::SiteSettings,
            social_link::SocialIcon,
        },
        settings::SanityConfig,
    };

    const SITE: &str = "https://portfolio.dev";

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new(&SanityConfig {
            project_id: Some("proj".into()),
            dataset: Some("production".into()),
            ..SanityConfig::default()
        })
    }

    fn live_data() -> PortfolioData {
        PortfolioData {
            is_using_fallback: false,
            errors: vec![],
            ..PortfolioData::fallback(vec![])
        }
    }

    #[test]
    fn home_metadata_marks_cached_content() {
        let data = PortfolioData::fallback(vec!["down".into()]);

        let page = home_page(&data, &images(), SITE);

        assert_eq!(page.metadata.title, "Your Name - Software Developer");
        assert!(page.metadata.description.ends_with(" (Cached Content)"));
        assert!(page.status.is_using_fallback);
        assert_eq!(page.projects.len(), 3);
        assert!(page.projects[0].image_url.starts_with("/placeholder.svg"));
    }

    #[test]
    fn home_metadata_is_plain_for_live_content() {
        let page = home_page(&live_data(), &images(), SITE);
        assert!(!page.metadata.description.contains("Cached"));
        assert_eq!(page.metadata.canonical_url.as_deref(), Some(SITE));
    }

    #[test]
    fn home_shows_at_most_three_projects() {
        let mut data = live_data();
        data.projects = (0..5).map(|i| Project { id: i.to_string(), ..fallback::PROJECTS[0].clone() }).collect();

        assert_eq!(home_page(&data, &images(), SITE).projects.len(), 3);
    }

    #[test]
    fn projects_filter_by_category_slug() {
        let page = projects_page(&live_data(), &images(), SITE, Some("ai-ml"));

        let ids: Vec<_> = page.projects.iter().map(|c| c.project.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(page.categories.len(), 3);
        assert!(projects_page(&live_data(), &images(), SITE, Some("nope")).projects.is_empty());
    }

    #[test]
    fn uses_sections_follow_fixed_order_and_skip_empty_groups() {
        let mut data = live_data();
        data.uses_items.reverse();
        data.uses_items.retain(|i| i.category != UsesCategory::Software);

        let page = uses_page(&data, &images(), SITE);

        let labels: Vec<_> = page.sections.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Hardware", "Development Tools", "Office Setup"]);
        assert_eq!(page.sections[0].icon, "Monitor");
    }

    #[test]
    fn blog_listing_applies_filters_and_hides_unused_categories() {
        let data = live_data();

        let featured = blog_list_page(&data, &images(), SITE, &BlogPostFilter { featured: Some(true), ..Default::default() });
        assert_eq!(featured.posts.len(), 2);

        let full_stack = blog_list_page(
            &data,
            &images(),
            SITE,
            &BlogPostFilter { category: Some("full-stack".into()), limit: Some(5), ..Default::default() },
        );
        assert_eq!(full_stack.posts.len(), 1);
        assert_eq!(full_stack.posts[0].post.slug.as_str(), "scalable-ml-pipelines");

        let limited = blog_list_page(&data, &images(), SITE, &BlogPostFilter { limit: Some(1), ..Default::default() });
        assert_eq!(limited.posts.len(), 1);

        let slugs: Vec<_> = featured.categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["ai-ml", "full-stack"]);
    }

    #[test]
    fn post_metadata_prefers_seo_and_featured_image() {
        let mut post = fallback::BLOG_POSTS[0].clone();
        post.seo = Some(crate::entities::blog_post::Seo {
            meta_title: Some("SEO title".into()),
            meta_description: None,
        });
        post.image = Some(ImageSource::Asset(SanityImage {
            asset: Some(AssetRef { reference: Some("image-cover-2400x1260-png".into()), url: None }),
            ..SanityImage::default()
        }));

        let meta = blog_post_metadata(&post, &images(), SITE);

        assert_eq!(meta.title, "SEO title");
        assert_eq!(meta.description, post.excerpt);
        assert_eq!(meta.canonical_url.as_deref(), Some("https://portfolio.dev/blog/support-to-ai-journey"));
        assert_eq!(meta.open_graph.kind, "article");
        assert!(meta.open_graph.images[0].url.contains("cover-2400x1260.png?w=1200&h=630&fit=crop&auto=format"));
    }

    #[test]
    fn post_without_real_image_uses_site_og_image() {
        let post = fallback::BLOG_POSTS[1].clone();

        let page = blog_post_page(post, &images(), SITE);

        assert_eq!(page.metadata.open_graph.images[0].url, "https://portfolio.dev/og-image.png");
        assert_eq!(page.content_html, "<p>Full content coming soon...</p>");
        assert_eq!(page.image_url, None);
    }

    #[test]
    fn footer_links_default_missing_fields_and_fall_back_when_empty() {
        let link = SocialLink {
            id: "yt".into(),
            name: "YouTube".into(),
            icon: SocialIcon::Other("Rocket".into()),
            href: "https://youtube.com/@me".into(),
            handle: None,
            description: None,
            color: None,
            primary: true,
            order: None,
        };

        let links = footer_links(&[link]);
        assert_eq!(links[0].icon, "HelpCircle");
        assert_eq!(links[0].color, "hover:text-blue-500");
        assert_eq!(links[0].handle, "");

        assert_eq!(footer_links(&[]).len(), fallback::SOCIAL_LINKS.len());
    }

    #[test]
    fn site_payload_resolves_settings_over_defaults() {
        let mut data = live_data();
        data.site_settings = Some(SiteSettings { name: Some("Ada".into()), ..SiteSettings::default() });

        let payload = site_payload(&data);

        assert_eq!(payload.site.personal.name, "Ada");
        assert_eq!(payload.site.personal.title, "Software Developer");
        assert!(!payload.status.is_using_fallback);
    }
}
