//! Documents of the content store.
//!
//! The serde representation matches the JSON the content store returns for
//! the queries in `portfolio_extern_contracts::content_store::queries`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(rename = "_id")]
    pub id: String,
    pub catchphrase: String,
    pub sub_catchphrase: Option<String>,
    pub site_title: String,
    pub site_description: String,
    pub hero_video_source: Option<HeroVideoSource>,
    /// Older documents store this as `heroVideoUrl`.
    #[serde(alias = "heroVideoUrl")]
    pub hero_youtube_url: Option<String>,
    pub hero_video_file_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroVideoSource {
    Youtube,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub name_en: Option<String>,
    pub bio: String,
    pub profile_image: Option<ProfileImage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strengths: Vec<Strength>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub workflow: Vec<WorkflowStep>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub asset: Option<ImageAsset>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strength {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub step: u32,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialPlatform {
    Twitter,
    Instagram,
    Youtube,
    Facebook,
    Linkedin,
    Github,
    Website,
    Other,
}

impl SocialPlatform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
            Self::Facebook => "facebook",
            Self::Linkedin => "linkedin",
            Self::Github => "github",
            Self::Website => "website",
            Self::Other => "other",
        }
    }

    /// Human readable name of the platform.
    pub fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::Youtube => "YouTube",
            Self::Facebook => "Facebook",
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
            Self::Website => "Website",
            Self::Other => "その他",
        }
    }
}

impl From<String> for SocialPlatform {
    fn from(value: String) -> Self {
        match value.as_str() {
            "twitter" => Self::Twitter,
            "instagram" => Self::Instagram,
            "youtube" => Self::Youtube,
            "facebook" => Self::Facebook,
            "linkedin" => Self::Linkedin,
            "github" => Self::Github,
            "website" => Self::Website,
            _ => Self::Other,
        }
    }
}

impl From<SocialPlatform> for String {
    fn from(value: SocialPlatform) -> Self {
        value.as_str().into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub description: String,
    pub icon: Option<String>,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub category: WorkCategory,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub target_customer: Option<String>,
    pub duration: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    pub thumbnail_url: Option<String>,
    pub thumbnail_alt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkCategory {
    AiVideo,
    AiManga,
    Design,
}

impl WorkCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::AiVideo => "AI動画",
            Self::AiManga => "AIマンガ",
            Self::Design => "デザイン",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl From<&str> for Slug {
    fn from(value: &str) -> Self {
        Self {
            current: value.into(),
        }
    }
}

/// The content store returns `null` for unset fields, which `#[serde(default)]`
/// alone does not cover.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
