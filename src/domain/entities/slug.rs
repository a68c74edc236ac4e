use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Wire forms a slug can take: GROQ `"slug": slug.current` projections give
/// a plain string, raw documents give `{ "current": "..." }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SlugRepr {
    Plain(String),
    Structured { current: String },
}

/// Normalised slug. Both wire forms collapse into this once, during
/// deserialisation, so comparisons never branch on shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "SlugRepr")]
pub struct Slug(String);

impl From<SlugRepr> for Slug {
    fn from(repr: SlugRepr) -> Self {
        match repr {
            SlugRepr::Plain(value) => Slug(value),
            SlugRepr::Structured { current } => Slug(current),
        }
    }
}

impl Slug {
    pub fn new(value: impl Into<String>) -> Self {
        Slug(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl Serialize for Slug {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_structured_forms_normalise_identically() {
        let plain: Slug = serde_json::from_str(r#""my-post""#).unwrap();
        let structured: Slug = serde_json::from_str(r#"{"current": "my-post"}"#).unwrap();

        assert_eq!(plain, structured);
        assert_eq!(structured.as_str(), "my-post");
        assert!(structured.matches("my-post"));
    }

    #[test]
    fn serialises_as_plain_string() {
        let slug = Slug::new("ai-ml");
        assert_eq!(serde_json::to_string(&slug).unwrap(), r#""ai-ml""#);
    }
}
