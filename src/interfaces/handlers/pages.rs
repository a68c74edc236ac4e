use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use crate::{
    errors::AppError,
    handlers::validate_slug,
    use_cases::pages::{home_page, projects_page, site_payload, uses_page},
    AppState,
};

#[derive(Debug, Deserialize, Validate)]
pub struct ProjectsQuery {
    #[validate(custom(function = "validate_slug"))]
    pub category: Option<String>,
}

#[instrument(skip(state))]
pub async fn get_portfolio(state: web::Data<AppState>) -> impl Responder {
    let data = state.portfolio_handler.get_portfolio_data().await;
    HttpResponse::Ok().json(data)
}

#[instrument(skip(state))]
pub async fn get_home_page(state: web::Data<AppState>) -> impl Responder {
    let data = state.portfolio_handler.get_portfolio_data().await;
    HttpResponse::Ok().json(home_page(&data, &state.images, &state.site_url))
}

#[instrument(skip(state))]
pub async fn get_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectsQuery>,
) -> Result<impl Responder, AppError> {
    query.validate()?;

    let data = state.portfolio_handler.get_portfolio_data().await;
    let page = projects_page(&data, &state.images, &state.site_url, query.category.as_deref());

    Ok(HttpResponse::Ok().json(page))
}

#[instrument(skip(state))]
pub async fn get_uses(state: web::Data<AppState>) -> impl Responder {
    let data = state.portfolio_handler.get_portfolio_data().await;
    HttpResponse::Ok().json(uses_page(&data, &state.images, &state.site_url))
}

#[instrument(skip(state))]
pub async fn get_site(state: web::Data<AppState>) -> impl Responder {
    let data = state.portfolio_handler.get_portfolio_data().await;
    HttpResponse::Ok().json(site_payload(&data))
}
