pub mod image_url;
pub mod portable_text;
pub mod sanitize;
