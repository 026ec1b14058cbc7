use anyhow::Context;
use clap::Subcommand;
use portfolio_config::Config;
use portfolio_core_content_contracts::ContentFeatureService;
use portfolio_di::Provides;

use crate::environment::{types::ContentFeature, ConfigProvider};

#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// Fetch every content type from the content store and print a summary
    Verify,
}

impl ContentCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContentCommand::Verify => verify(config).await,
        }
    }
}

async fn verify(config: Config) -> anyhow::Result<()> {
    let mut provider = ConfigProvider::new(&config)?;
    let content: ContentFeature = provider.provide();

    println!("Content store: {}", config.content.api_url);
    println!("Dataset: {}\n", config.content.dataset);

    match content
        .get_site_settings()
        .await
        .context("Failed to fetch site settings")?
    {
        Some(settings) => {
            println!("Site settings:");
            println!("  title: {}", settings.site_title);
            println!("  catchphrase: {}", settings.catchphrase);
            println!(
                "  hero video: {}",
                settings
                    .hero_youtube_url
                    .as_deref()
                    .or(settings.hero_video_file_url.as_deref())
                    .unwrap_or("(none)")
            );
        }
        None => println!("Site settings: not found"),
    }

    match content
        .get_profile()
        .await
        .context("Failed to fetch profile")?
    {
        Some(profile) => {
            println!("Profile:");
            println!("  name: {}", profile.name);
            println!("  strengths: {}", profile.strengths.len());
            println!("  workflow steps: {}", profile.workflow.len());
            println!("  social links: {}", profile.social_links.len());
        }
        None => println!("Profile: not found"),
    }

    let services = content
        .list_services()
        .await
        .context("Failed to fetch services")?;
    println!("Services: {}", services.len());
    for service in &services {
        println!("  [{}] {} ({})", service.order, service.title, service.slug.current);
    }

    let works = content
        .list_works(false)
        .await
        .context("Failed to fetch works")?;
    let featured = works.iter().filter(|work| work.featured).count();
    println!("Works: {} ({featured} featured)", works.len());
    for work in &works {
        println!(
            "  {} {} [{}] {}",
            if work.featured { "*" } else { "-" },
            work.published_at.date_naive(),
            work.category.label(),
            work.title,
        );
    }

    Ok(())
}
