use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub mod blog_posts;
pub mod home;
pub mod pages;
pub mod system;

static SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

const MAX_SLUG_LEN: usize = 96;

/// Accepts lowercase, hyphen separated slugs such as `ai-ml`.
pub fn validate_slug(value: &str) -> Result<(), ValidationError> {
    if value.len() <= MAX_SLUG_LEN && SLUG.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("slug").with_message("must be a lowercase, hyphen separated slug".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_lowercase_and_hyphenated() {
        assert!(validate_slug("ai-ml").is_ok());
        assert!(validate_slug("post-2024").is_ok());
        assert!(validate_slug("Bad Slug").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug(&"a".repeat(97)).is_err());
    }
}
