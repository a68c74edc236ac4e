use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_ASSET_REF;

/// An image as delivered by the content lake: either an already-resolved
/// URL (`"image": image.asset->url` projections) or a structured image
/// object whose asset may still be an unresolved reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    Url(String),
    Asset(SanityImage),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SanityImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotspot: Option<Hotspot>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<Crop>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Either a `{ _ref }` reference or a dereferenced asset carrying its `url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Focal point, as fractions of the image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub width: f64,
}

/// Fractions trimmed from each edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ImageSource {
    /// Image used by bundled content: an asset pointing at the sentinel ref.
    pub fn fallback() -> Self {
        ImageSource::Asset(SanityImage {
            asset: Some(AssetRef {
                reference: Some(FALLBACK_ASSET_REF.to_string()),
                url: None,
            }),
            ..SanityImage::default()
        })
    }

    pub fn alt(&self) -> Option<&str> {
        match self {
            ImageSource::Url(_) => None,
            ImageSource::Asset(image) => image.alt.as_deref(),
        }
    }
}

impl SanityImage {
    /// True when there is nothing real to request from the asset pipeline.
    pub fn is_placeholder(&self) -> bool {
        match &self.asset {
            None => true,
            Some(asset) => {
                asset.url.is_none()
                    && asset.reference.as_deref().is_none_or(|r| r == FALLBACK_ASSET_REF)
            }
        }
    }
}

impl Crop {
    pub fn is_empty(&self) -> bool {
        self.top == 0.0 && self.bottom == 0.0 && self.left == 0.0 && self.right == 0.0
    }
}
