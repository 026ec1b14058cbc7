//! Demo documents for the fake content store and for tests.

use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use portfolio_models::content::{
    HeroVideoSource, Profile, Service, SiteSettings, SocialLink, SocialPlatform, Strength, Work,
    WorkCategory, WorkflowStep,
};

pub const DEMO_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

pub static SITE_SETTINGS: LazyLock<SiteSettings> = LazyLock::new(|| SiteSettings {
    id: "siteSettings".into(),
    catchphrase: "AIで、映像の常識を変える".into(),
    sub_catchphrase: Some("AI動画・AI漫画・デザインで、あなたのビジネスを加速".into()),
    site_title: "KENJIROU Portfolio".into(),
    site_description: "AI動画制作・AI漫画・デザインサービスのポートフォリオサイト".into(),
    hero_video_source: Some(HeroVideoSource::Youtube),
    hero_youtube_url: Some(DEMO_VIDEO_URL.into()),
    hero_video_file_url: None,
});

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| Profile {
    id: "profile".into(),
    name: "林 憲二郎".into(),
    name_en: Some("Kenjirou Hayashi".into()),
    bio: "デザイン歴12年。AIを活用した動画・漫画制作を行っています。\
          キャラクターの一貫性を保ったAI動画制作が強みです。"
        .into(),
    profile_image: None,
    strengths: vec![
        strength(
            "キャラクター一貫性",
            "AIでもキャラクターの一貫性を保った動画制作が可能",
        ),
        strength("デザイン経験", "12年のデザイン経験を活かした高品質な映像制作"),
        strength("スピード納品", "AIの活用により、短納期での制作に対応"),
    ],
    workflow: vec![
        step(1, "ヒアリング", "お客様のご要望を丁寧にお伺いします"),
        step(2, "企画・構成", "ヒアリング内容を元に企画と構成を作成します"),
        step(3, "制作", "AIを活用して効率的に制作を進めます"),
        step(4, "納品", "完成した作品を納品し、フォローアップします"),
    ],
    social_links: vec![SocialLink {
        platform: SocialPlatform::Twitter,
        url: "https://twitter.com/example".into(),
    }],
});

/// Ordered by `order`.
pub static SERVICES: LazyLock<Vec<Service>> = LazyLock::new(|| {
    vec![
        Service {
            id: "service-ai-video".into(),
            title: "AI動画制作".into(),
            slug: "ai-video".into(),
            description: "AIを活用した高品質な動画制作サービス。企画から編集まで一貫して対応します。"
                .into(),
            icon: Some("🎬".into()),
            order: 1,
        },
        Service {
            id: "service-ai-manga".into(),
            title: "AI漫画制作".into(),
            slug: "ai-manga".into(),
            description: "AIを活用した漫画・イラスト制作サービス。広告漫画、説明漫画など様々な用途に対応します。"
                .into(),
            icon: Some("📚".into()),
            order: 2,
        },
        Service {
            id: "service-design".into(),
            title: "デザイン".into(),
            slug: "design".into(),
            description: "12年の経験を活かしたデザインサービス。ロゴ、バナー、Webデザインなど幅広く対応。"
                .into(),
            icon: Some("🎨".into()),
            order: 3,
        },
    ]
});

/// Newest first.
pub static WORKS: LazyLock<Vec<Work>> = LazyLock::new(|| {
    vec![
        Work {
            id: "work-design-sample".into(),
            title: "ロゴデザインサンプル".into(),
            slug: "design-sample".into(),
            category: WorkCategory::Design,
            description: None,
            video_url: None,
            target_customer: Some("スタートアップ向け".into()),
            duration: None,
            published_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            featured: false,
            thumbnail_url: None,
            thumbnail_alt: None,
        },
        Work {
            id: "work-ai-manga-sample".into(),
            title: "AI漫画サンプル作品".into(),
            slug: "ai-manga-sample".into(),
            category: WorkCategory::AiManga,
            description: Some("AIを活用して制作した説明漫画のサンプルです。".into()),
            video_url: None,
            target_customer: Some("BtoB企業向け".into()),
            duration: None,
            published_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            featured: true,
            thumbnail_url: None,
            thumbnail_alt: None,
        },
        Work {
            id: "work-ai-video-sample".into(),
            title: "AI動画サンプル作品".into(),
            slug: "ai-video-sample".into(),
            category: WorkCategory::AiVideo,
            description: Some("AIを活用して制作したプロモーション動画のサンプルです。".into()),
            video_url: Some(DEMO_VIDEO_URL.into()),
            target_customer: Some("飲食店・小売店向け".into()),
            duration: Some("30秒".into()),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            featured: true,
            thumbnail_url: None,
            thumbnail_alt: None,
        },
    ]
});

pub fn featured_works() -> Vec<Work> {
    WORKS.iter().filter(|work| work.featured).cloned().collect()
}

fn strength(title: &str, description: &str) -> Strength {
    Strength {
        title: title.into(),
        description: Some(description.into()),
    }
}

fn step(step: u32, title: &str, description: &str) -> WorkflowStep {
    WorkflowStep {
        step,
        title: title.into(),
        description: Some(description.into()),
    }
}
