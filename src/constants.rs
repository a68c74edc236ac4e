use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Asset reference carried by bundled content that has no real upload.
pub const FALLBACK_ASSET_REF: &str = "fallback";

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub const SANITY_CDN_HOST: &str = "https://cdn.sanity.io";

pub const DEFAULT_IMAGE_WIDTH: u32 = 400;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 300;

pub const HEALTH_CACHE_SECS: i64 = 5;
