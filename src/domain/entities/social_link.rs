use serde::{Deserialize, Serialize};

use crate::entities::nullable::null_as_default;

const DEFAULT_LINK_COLOR: &str = "hover:text-blue-500";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    pub icon: SocialIcon,

    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Shown in the footer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Icon names understood by the front end's icon map. Anything else keeps
/// its raw name and renders as the `HelpCircle` icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialIcon {
    Mail,
    X,
    Twitter,
    Github,
    Linkedin,
    Youtube,
    Instagram,
    Facebook,
    Twitch,
    MessageCircle,
    Globe,
    Other(String),
}

impl SocialIcon {
    pub fn name(&self) -> &str {
        match self {
            SocialIcon::Mail => "Mail",
            SocialIcon::X => "X",
            SocialIcon::Twitter => "Twitter",
            SocialIcon::Github => "Github",
            SocialIcon::Linkedin => "Linkedin",
            SocialIcon::Youtube => "Youtube",
            SocialIcon::Instagram => "Instagram",
            SocialIcon::Facebook => "Facebook",
            SocialIcon::Twitch => "Twitch",
            SocialIcon::MessageCircle => "MessageCircle",
            SocialIcon::Globe => "Globe",
            SocialIcon::Other(name) => name,
        }
    }

    /// Icon component to render.
    pub fn component(&self) -> &str {
        match self {
            SocialIcon::Other(_) => "HelpCircle",
            known => known.name(),
        }
    }
}

impl From<String> for SocialIcon {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Mail" => SocialIcon::Mail,
            "X" => SocialIcon::X,
            "Twitter" => SocialIcon::Twitter,
            "Github" => SocialIcon::Github,
            "Linkedin" => SocialIcon::Linkedin,
            "Youtube" => SocialIcon::Youtube,
            "Instagram" => SocialIcon::Instagram,
            "Facebook" => SocialIcon::Facebook,
            "Twitch" => SocialIcon::Twitch,
            "MessageCircle" => SocialIcon::MessageCircle,
            "Globe" => SocialIcon::Globe,
            _ => SocialIcon::Other(value),
        }
    }
}

impl From<SocialIcon> for String {
    fn from(icon: SocialIcon) -> Self {
        match icon {
            SocialIcon::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

/// Footer-ready link with every optional field filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterLink {
    pub name: String,
    pub icon: String,
    pub href: String,
    pub handle: String,
    pub description: String,
    pub color: String,
    pub primary: bool,
}

impl From<&SocialLink> for FooterLink {
    fn from(link: &SocialLink) -> Self {
        FooterLink {
            name: link.name.clone(),
            icon: link.icon.component().to_string(),
            href: link.href.clone(),
            handle: link.handle.clone().unwrap_or_default(),
            description: link.description.clone().unwrap_or_default(),
            color: link
                .color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_LINK_COLOR.to_string()),
            primary: link.primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icon_keeps_name_but_renders_help_circle() {
        let link: SocialLink = serde_json::from_str(
            r#"{"_id": "m", "name": "Mastodon", "icon": "Mastodon", "href": "https://hachyderm.io/@me", "primary": true}"#,
        )
        .unwrap();

        assert_eq!(link.icon, SocialIcon::Other("Mastodon".into()));
        assert_eq!(serde_json::to_value(&link).unwrap()["icon"], "Mastodon");

        let footer = FooterLink::from(&link);
        assert_eq!(footer.icon, "HelpCircle");
        assert_eq!(footer.handle, "");
        assert_eq!(footer.color, "hover:text-blue-500");
    }

    #[test]
    fn known_icon_round_trips_by_name() {
        let icon: SocialIcon = serde_json::from_str(r#""Github""#).unwrap();
        assert_eq!(icon, SocialIcon::Github);
        assert_eq!(icon.component(), "Github");
    }
}
