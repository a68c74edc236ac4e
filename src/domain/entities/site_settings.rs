use serde::{Deserialize, Serialize};

use crate::{constants::PLACEHOLDER_IMAGE, entities::image::ImageSource, fallback};

/// Singleton settings document. Every field is optional in the studio; the
/// gaps are filled in by [`SiteConfig::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    // Personal
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub previous_role: Option<String>,
    pub avatar: Option<ImageSource>,

    // Hero
    pub hero_title_line1: Option<String>,
    pub hero_title_line2: Option<String>,
    pub hero_description: Option<String>,
    pub hero_primary_cta: Option<String>,
    pub hero_primary_cta_href: Option<String>,
    pub hero_secondary_cta: Option<String>,
    pub hero_secondary_cta_href: Option<String>,
    pub technologies: Option<Vec<String>>,

    // Contact
    pub availability_status: Option<AvailabilityStatus>,
    pub availability_message: Option<String>,
    pub response_time: Option<String>,
    pub best_topics: Option<Vec<String>>,
    pub contact_cta_title: Option<String>,
    pub contact_cta_description: Option<String>,

    // Footer
    pub copyright_text: Option<String>,
    pub built_with_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Limited,
    Unavailable,
}

// ───── Resolved configuration ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub personal: PersonalInfo,
    pub hero: HeroSection,
    pub contact: ContactSection,
    pub footer: FooterSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub location: String,
    pub company: String,
    pub role: String,
    pub previous_role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSection {
    pub title: HeroTitle,
    pub description: String,
    pub cta: HeroCtas,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroTitle {
    pub line1: String,
    pub line2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroCtas {
    pub primary: CallToAction,
    pub secondary: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToAction {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    pub availability: Availability,
    pub response_time: String,
    pub best_topics: Vec<String>,
    pub cta: ContactCta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Availability {
    pub status: AvailabilityStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactCta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSection {
    pub copyright: String,
    pub built_with: String,
}

impl SiteConfig {
    /// Merges CMS settings over the bundled defaults, field by field. Blank
    /// strings count as unset; lists only fall back when absent.
    pub fn resolve(settings: Option<&SiteSettings>) -> SiteConfig {
        let defaults: &SiteSettings = &fallback::SITE_SETTINGS;
        let settings = settings.unwrap_or(defaults);

        let text = |value: &Option<String>, default: &Option<String>| -> String {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .or(default.as_deref())
                .unwrap_or_default()
                .to_string()
        };
        let list = |value: &Option<Vec<String>>, default: &Option<Vec<String>>| -> Vec<String> {
            value.clone().or_else(|| default.clone()).unwrap_or_default()
        };

        let avatar = match &settings.avatar {
            Some(ImageSource::Url(url)) => url.clone(),
            Some(ImageSource::Asset(_)) => PLACEHOLDER_IMAGE.to_string(),
            None => match &defaults.avatar {
                Some(ImageSource::Url(url)) => url.clone(),
                _ => PLACEHOLDER_IMAGE.to_string(),
            },
        };

        SiteConfig {
            personal: PersonalInfo {
                name: text(&settings.name, &defaults.name),
                title: text(&settings.title, &defaults.title),
                email: text(&settings.email, &defaults.email),
                location: text(&settings.location, &defaults.location),
                company: text(&settings.company, &defaults.company),
                role: text(&settings.role, &defaults.role),
                previous_role: text(&settings.previous_role, &defaults.previous_role),
                avatar,
            },
            hero: HeroSection {
                title: HeroTitle {
                    line1: text(&settings.hero_title_line1, &defaults.hero_title_line1),
                    line2: text(&settings.hero_title_line2, &defaults.hero_title_line2),
                },
                description: text(&settings.hero_description, &defaults.hero_description),
                cta: HeroCtas {
                    primary: CallToAction {
                        text: text(&settings.hero_primary_cta, &defaults.hero_primary_cta),
                        href: text(&settings.hero_primary_cta_href, &defaults.hero_primary_cta_href),
                    },
                    secondary: CallToAction {
                        text: text(&settings.hero_secondary_cta, &defaults.hero_secondary_cta),
                        href: text(&settings.hero_secondary_cta_href, &defaults.hero_secondary_cta_href),
                    },
                },
                technologies: list(&settings.technologies, &defaults.technologies),
            },
            contact: ContactSection {
                availability: Availability {
                    status: settings
                        .availability_status
                        .or(defaults.availability_status)
                        .unwrap_or(AvailabilityStatus::Available),
                    message: text(&settings.availability_message, &defaults.availability_message),
                },
                response_time: text(&settings.response_time, &defaults.response_time),
                best_topics: list(&settings.best_topics, &defaults.best_topics),
                cta: ContactCta {
                    title: text(&settings.contact_cta_title, &defaults.contact_cta_title),
                    description: text(&settings.contact_cta_description, &defaults.contact_cta_description),
                },
            },
            footer: FooterSection {
                copyright: text(&settings.copyright_text, &defaults.copyright_text),
                built_with: text(&settings.built_with_text, &defaults.built_with_text),
            },
        }
    }
}
