use chrono::{DateTime, Utc};
use portfolio_models::content::{
    HeroVideoSource, Profile, Service, SiteSettings, SocialLink, SocialPlatform, Strength, Work,
    WorkCategory, WorkflowStep,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSiteSettings {
    pub id: String,
    pub catchphrase: String,
    pub sub_catchphrase: Option<String>,
    pub site_title: String,
    pub site_description: String,
    pub hero_video: Option<ApiHeroVideo>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ApiHeroVideo {
    pub source: HeroVideoSource,
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProfile {
    pub id: String,
    pub name: String,
    pub name_en: Option<String>,
    pub bio: String,
    pub image: Option<ApiImage>,
    pub strengths: Vec<Strength>,
    /// Ordered by step number.
    pub workflow: Vec<WorkflowStep>,
    pub social_links: Vec<ApiSocialLink>,
}

#[derive(Debug, Serialize)]
pub struct ApiImage {
    pub url: String,
    pub alt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiSocialLink {
    pub platform: SocialPlatform,
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ApiService {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
    pub order: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiWork {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: WorkCategory,
    pub category_label: &'static str,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub target_customer: Option<String>,
    pub duration: Option<String>,
    pub published_at: DateTime<Utc>,
    pub featured: bool,
    pub thumbnail_url: Option<String>,
    pub thumbnail_alt: Option<String>,
}

impl From<SiteSettings> for ApiSiteSettings {
    fn from(value: SiteSettings) -> Self {
        let youtube = value.hero_youtube_url.map(|url| ApiHeroVideo {
            source: HeroVideoSource::Youtube,
            url,
        });
        let file = value.hero_video_file_url.map(|url| ApiHeroVideo {
            source: HeroVideoSource::File,
            url,
        });

        // fall back to whichever video exists if the preferred one is missing
        let hero_video = match value.hero_video_source {
            Some(HeroVideoSource::File) => file.or(youtube),
            Some(HeroVideoSource::Youtube) | None => youtube.or(file),
        };

        Self {
            id: value.id,
            catchphrase: value.catchphrase,
            sub_catchphrase: value.sub_catchphrase,
            site_title: value.site_title,
            site_description: value.site_description,
            hero_video,
        }
    }
}

impl From<Profile> for ApiProfile {
    fn from(value: Profile) -> Self {
        let mut workflow = value.workflow;
        workflow.sort_by_key(|step| step.step);

        Self {
            id: value.id,
            name: value.name,
            name_en: value.name_en,
            bio: value.bio,
            image: value.profile_image.and_then(|image| {
                image.asset.map(|asset| ApiImage {
                    url: asset.url,
                    alt: image.alt,
                })
            }),
            strengths: value.strengths,
            workflow,
            social_links: value.social_links.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SocialLink> for ApiSocialLink {
    fn from(value: SocialLink) -> Self {
        Self {
            platform: value.platform,
            label: value.platform.label(),
            url: value.url,
        }
    }
}

impl From<Service> for ApiService {
    fn from(value: Service) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug.current,
            description: value.description,
            icon: value.icon,
            order: value.order,
        }
    }
}

impl From<Work> for ApiWork {
    fn from(value: Work) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug.current,
            category: value.category,
            category_label: value.category.label(),
            description: value.description,
            video_url: value.video_url,
            target_customer: value.target_customer,
            duration: value.duration,
            published_at: value.published_at,
            featured: value.featured,
            thumbnail_url: value.thumbnail_url,
            thumbnail_alt: value.thumbnail_alt,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn settings() -> SiteSettings {
        portfolio_demo::SITE_SETTINGS.clone()
    }

    #[test]
    fn hero_video_youtube() {
        let settings = ApiSiteSettings::from(settings());

        assert_eq!(
            settings.hero_video,
            Some(ApiHeroVideo {
                source: HeroVideoSource::Youtube,
                url: portfolio_demo::DEMO_VIDEO_URL.into(),
            })
        );
    }

    #[test]
    fn hero_video_file_preferred() {
        let settings = ApiSiteSettings::from(SiteSettings {
            hero_video_source: Some(HeroVideoSource::File),
            hero_video_file_url: Some("https://cdn.example.com/hero.mp4".into()),
            ..settings()
        });

        assert_eq!(
            settings.hero_video,
            Some(ApiHeroVideo {
                source: HeroVideoSource::File,
                url: "https://cdn.example.com/hero.mp4".into(),
            })
        );
    }

    #[test]
    fn hero_video_file_missing() {
        let settings = ApiSiteSettings::from(SiteSettings {
            hero_video_source: Some(HeroVideoSource::File),
            hero_video_file_url: None,
            ..settings()
        });

        assert_eq!(
            settings.hero_video.map(|video| video.source),
            Some(HeroVideoSource::Youtube)
        );
    }

    #[test]
    fn hero_video_none() {
        let settings = ApiSiteSettings::from(SiteSettings {
            hero_video_source: None,
            hero_youtube_url: None,
            hero_video_file_url: None,
            ..settings()
        });

        assert_eq!(settings.hero_video, None);
    }

    #[test]
    fn profile_workflow_sorted() {
        let mut profile = portfolio_demo::PROFILE.clone();
        profile.workflow.reverse();

        let profile = ApiProfile::from(profile);

        let steps = profile.workflow.iter().map(|x| x.step).collect::<Vec<_>>();
        assert_eq!(steps, [1, 2, 3, 4]);
        assert_eq!(profile.social_links[0].label, "Twitter");
    }

    #[test]
    fn work_serialization() {
        let work = ApiWork::from(portfolio_demo::WORKS[2].clone());

        let json = serde_json::to_value(work).unwrap();

        assert_eq!(json["slug"], "ai-video-sample");
        assert_eq!(json["category"], "ai-video");
        assert_eq!(json["categoryLabel"], "AI動画");
        assert_eq!(json["publishedAt"], "2024-01-01T00:00:00Z");
    }
}
