use std::fmt;

use tracing::warn;

use crate::{
    constants::{DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, PLACEHOLDER_IMAGE, SANITY_CDN_HOST},
    entities::image::{Crop, ImageSource, SanityImage},
    settings::SanityConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Clip,
    Crop,
    Fill,
    Max,
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Fit::Clip => "clip",
            Fit::Crop => "crop",
            Fit::Fill => "fill",
            Fit::Max => "max",
        };
        f.write_str(s)
    }
}

/// Requested transformation for one rendition.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fit: Option<Fit>,
    pub auto_format: bool,
}

impl ImageOptions {
    pub fn sized(width: u32, height: u32) -> Self {
        ImageOptions { width: Some(width), height: Some(height), ..Self::default() }
    }

    pub fn width(width: u32) -> Self {
        ImageOptions { width: Some(width), ..Self::default() }
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = Some(fit);
        self
    }

    pub fn auto_format(mut self) -> Self {
        self.auto_format = true;
        self
    }
}

/// Parsed `image-<id>-<W>x<H>-<ext>` asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AssetId<'a> {
    id: &'a str,
    width: u32,
    height: u32,
    format: &'a str,
}

fn parse_asset_ref(reference: &str) -> Option<AssetId<'_>> {
    let rest = reference.strip_prefix("image-")?;
    let (rest, format) = rest.rsplit_once('-')?;
    let (id, dimensions) = rest.rsplit_once('-')?;
    let (w, h) = dimensions.split_once('x')?;

    if id.is_empty() || format.is_empty() {
        return None;
    }

    Some(AssetId {
        id,
        width: w.parse().ok()?,
        height: h.parse().ok()?,
        format,
    })
}

/// Turns image values into displayable URLs against the Sanity image CDN.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: Option<String>,
    dataset: Option<String>,
}

impl ImageUrlBuilder {
    pub fn new(config: &SanityConfig) -> Self {
        if config.is_configured() {
            ImageUrlBuilder {
                project_id: config.project_id.clone(),
                dataset: config.dataset.clone(),
            }
        } else {
            ImageUrlBuilder { project_id: None, dataset: None }
        }
    }

    /// Placeholder used when there is no real asset to point at.
    pub fn placeholder(options: &ImageOptions) -> String {
        format!(
            "{}?height={}&width={}",
            PLACEHOLDER_IMAGE,
            options.height.unwrap_or(DEFAULT_IMAGE_HEIGHT),
            options.width.unwrap_or(DEFAULT_IMAGE_WIDTH),
        )
    }

    pub fn resolve(&self, image: Option<&ImageSource>, options: &ImageOptions) -> String {
        match image {
            Some(ImageSource::Url(url)) if !url.is_empty() => url.clone(),
            Some(ImageSource::Asset(asset)) => self
                .asset_url(asset, options)
                .unwrap_or_else(|| Self::placeholder(options)),
            _ => Self::placeholder(options),
        }
    }

    /// Like [`resolve`](Self::resolve) but yields `None` instead of a
    /// placeholder. Used where a missing image should render nothing.
    pub fn resolve_real(&self, image: Option<&ImageSource>, options: &ImageOptions) -> Option<String> {
        match image? {
            ImageSource::Url(url) if !url.is_empty() => Some(url.clone()),
            ImageSource::Url(_) => None,
            ImageSource::Asset(asset) => self.asset_url(asset, options),
        }
    }

    fn asset_url(&self, image: &SanityImage, options: &ImageOptions) -> Option<String> {
        if image.is_placeholder() {
            return None;
        }
        let asset = image.asset.as_ref()?;

        if let Some(url) = &asset.url {
            return Some(with_params(url.clone(), transform_params(None, image, options)));
        }

        let (project_id, dataset) = match (&self.project_id, &self.dataset) {
            (Some(p), Some(d)) => (p, d),
            _ => return None,
        };

        let reference = asset.reference.as_deref()?;
        let Some(parsed) = parse_asset_ref(reference) else {
            warn!("Unrecognised image asset reference: {}", reference);
            return None;
        };

        let base = format!(
            "{}/images/{}/{}/{}-{}x{}.{}",
            SANITY_CDN_HOST, project_id, dataset, parsed.id, parsed.width, parsed.height, parsed.format
        );

        Some(with_params(base, transform_params(Some(&parsed), image, options)))
    }
}

fn transform_params(asset: Option<&AssetId<'_>>, image: &SanityImage, options: &ImageOptions) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if let (Some(asset), Some(crop)) = (asset, image.crop.as_ref()) {
        if let Some(rect) = crop_rect(asset.width, asset.height, crop) {
            params.push(("rect", rect));
        }
    }
    if let Some(w) = options.width {
        params.push(("w", w.to_string()));
    }
    if let Some(h) = options.height {
        params.push(("h", h.to_string()));
    }
    if let Some(fit) = options.fit {
        params.push(("fit", fit.to_string()));
        if fit == Fit::Crop {
            if let Some(hotspot) = image.hotspot {
                params.push(("crop", "focalpoint".to_string()));
                params.push(("fp-x", format!("{:.4}", hotspot.x)));
                params.push(("fp-y", format!("{:.4}", hotspot.y)));
            }
        }
    }
    if options.auto_format {
        params.push(("auto", "format".to_string()));
    }

    params
}

/// Pixel rectangle `left,top,width,height` left after trimming `crop`.
fn crop_rect(width: u32, height: u32, crop: &Crop) -> Option<String> {
    if crop.is_empty() {
        return None;
    }
    let (w, h) = (width as f64, height as f64);
    let left = (crop.left * w).round();
    let top = (crop.top * h).round();
    let rect_w = (w - (crop.left + crop.right) * w).round();
    let rect_h = (h - (crop.top + crop.bottom) * h).round();

    if rect_w <= 0.0 || rect_h <= 0.0 {
        return None;
    }
    Some(format!("{},{},{},{}", left as u32, top as u32, rect_w as u32, rect_h as u32))
}

fn with_params(base: String, params: Vec<(&'static str, String)>) -> String {
    if params.is_empty() {
        return base;
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}
