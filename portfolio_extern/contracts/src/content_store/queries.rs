//! GROQ queries sent to the content store.

pub const SITE_SETTINGS_QUERY: &str = r#"*[_type == "siteSettings"][0] {
  _id,
  catchphrase,
  subCatchphrase,
  siteTitle,
  siteDescription,
  heroVideoSource,
  "heroYoutubeUrl": coalesce(heroYoutubeUrl, heroVideoUrl),
  "heroVideoFileUrl": heroVideoFile.asset->url
}"#;

pub const PROFILE_QUERY: &str = r#"*[_type == "profile"][0] {
  _id,
  name,
  nameEn,
  bio,
  profileImage {
    asset->{ url },
    alt
  },
  strengths[] { title, description },
  workflow[] { step, title, description },
  socialLinks[] { platform, url }
}"#;

pub const SERVICES_QUERY: &str = r#"*[_type == "service"] | order(order asc) {
  _id,
  title,
  slug,
  description,
  icon,
  order
}"#;

pub const WORKS_QUERY: &str = r#"*[_type == "work"] | order(publishedAt desc) {
  _id,
  title,
  slug,
  category,
  description,
  videoUrl,
  targetCustomer,
  duration,
  publishedAt,
  featured,
  "thumbnailUrl": thumbnail.asset->url,
  "thumbnailAlt": thumbnail.alt
}"#;

pub const FEATURED_WORKS_QUERY: &str = r#"*[_type == "work" && featured == true] | order(publishedAt desc) {
  _id,
  title,
  slug,
  category,
  description,
  videoUrl,
  targetCustomer,
  duration,
  publishedAt,
  featured,
  "thumbnailUrl": thumbnail.asset->url,
  "thumbnailAlt": thumbnail.alt
}"#;

/// Cheapest query that still touches the dataset.
pub const PING_QUERY: &str = r#"count(*[_type == "siteSettings"])"#;
