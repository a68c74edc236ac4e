use actix_web::web;

use crate::handlers::pages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/portfolio")
            .route(web::get().to(pages::get_portfolio))
    )
    .service(
        web::resource("/pages/home")
            .route(web::get().to(pages::get_home_page))
    )
    .service(
        web::resource("/projects")
            .route(web::get().to(pages::get_projects))
    )
    .service(
        web::resource("/uses")
            .route(web::get().to(pages::get_uses))
    )
    .service(
        web::resource("/site")
            .route(web::get().to(pages::get_site))
    );
}
