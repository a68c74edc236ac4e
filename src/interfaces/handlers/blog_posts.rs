use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::{
    errors::AppError,
    handlers::validate_slug,
    use_cases::pages::{blog_list_page, blog_post_page, BlogPostFilter},
    AppState,
};

#[derive(Debug, Deserialize, Validate)]
pub struct BlogPostsQuery {
    #[validate(custom(function = "validate_slug"))]
    pub category: Option<String>,

    pub featured: Option<bool>,

    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<usize>,
}

impl From<BlogPostsQuery> for BlogPostFilter {
    fn from(query: BlogPostsQuery) -> Self {
        BlogPostFilter {
            category: query.category,
            featured: query.featured,
            limit: query.limit,
        }
    }
}

#[instrument(skip(state))]
pub async fn get_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<BlogPostsQuery>,
) -> Result<impl Responder, AppError> {
    query.validate()?;
    let filter = BlogPostFilter::from(query.into_inner());

    let data = state.portfolio_handler.get_portfolio_data().await;
    let page = blog_list_page(&data, &state.images, &state.site_url, &filter);

    Ok(HttpResponse::Ok().json(page))
}

#[instrument(skip(state))]
pub async fn get_blog_post_by_slug(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let slug = slug.into_inner();

    let post = state
        .portfolio_handler
        .get_blog_post_by_slug(&slug)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Blog post '{}' not found", slug)))?;

    Ok(HttpResponse::Ok().json(blog_post_page(post, &state.images, &state.site_url)))
}

#[instrument(skip(state))]
pub async fn get_blog_slugs(state: web::Data<AppState>) -> impl Responder {
    let slugs = state.portfolio_handler.get_all_blog_slugs().await;
    HttpResponse::Ok().json(slugs)
}
