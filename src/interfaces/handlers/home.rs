use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio content API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/api/v1/health",
        "endpoints": [
            "/api/v1/portfolio",
            "/api/v1/pages/home",
            "/api/v1/projects",
            "/api/v1/uses",
            "/api/v1/site",
            "/api/v1/blog/posts",
            "/api/v1/blog/slugs"
        ]
    }))
}
