use actix_web::web;

use crate::handlers::home::home;

mod blog;
mod content;
mod json_error;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(system::config_routes)
            .configure(content::config_routes)
            .configure(blog::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
