mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, fallback, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{cms, utils};

use cms::SanityClient;
use errors::CmsError;
use handlers::system::HealthCache;
use repositories::content::SanityContentRepo;
use use_cases::portfolio::PortfolioHandler;
use utils::image_url::ImageUrlBuilder;

pub struct AppState {
    pub portfolio_handler: AppPortfolioHandler,
    pub images: ImageUrlBuilder,
    /// Public site URL without a trailing slash.
    pub site_url: String,
    pub health_cache: HealthCache,
}

pub type AppPortfolioHandler = PortfolioHandler<SanityContentRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Result<Self, CmsError> {
        let client = SanityClient::new(&config.sanity)?;
        let portfolio_handler = PortfolioHandler::new(SanityContentRepo::new(client));

        Ok(AppState {
            portfolio_handler,
            images: ImageUrlBuilder::new(&config.sanity),
            site_url: config.site_base().to_string(),
            health_cache: HealthCache::default(),
        })
    }
}
