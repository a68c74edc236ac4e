//! GROQ projections. Field names match the serde shapes in `entities`.

pub const PROJECTS: &str = r#"
  *[_type == "project"] | order(coalesce(order, 999) asc, publishedAt desc) {
    _id,
    title,
    "slug": slug.current,
    description,
    longDescription,
    "image": image.asset->url,
    technologies,
    "category": category->{_id, title, "slug": slug.current, description, color},
    liveUrl,
    githubUrl,
    featured,
    order,
    publishedAt
  }
"#;

pub const BLOG_POSTS: &str = r#"
  *[_type == "blogPost"] | order(publishedAt desc) {
    _id,
    title,
    "slug": slug.current,
    excerpt,
    image { asset, hotspot, crop, alt },
    "categories": categories[]->{_id, title, "slug": slug.current, description, color},
    readingTime,
    featured,
    publishedAt,
    seo
  }
"#;

pub const USES_ITEMS: &str = r#"
  *[_type == "usesItem"] | order(category asc, order asc) {
    _id,
    name,
    description,
    reasoning,
    "image": image.asset->url,
    category,
    url,
    price,
    order
  }
"#;

pub const CATEGORIES: &str = r#"
  *[_type == "category"] | order(title asc) {
    _id,
    title,
    "slug": slug.current,
    description,
    color
  }
"#;

pub const SITE_SETTINGS: &str = r#"
  *[_type == "siteSettings"][0] {
    name,
    title,
    email,
    location,
    company,
    role,
    previousRole,
    "avatar": avatar.asset->url,
    heroTitleLine1,
    heroTitleLine2,
    heroDescription,
    heroPrimaryCta,
    heroPrimaryCtaHref,
    heroSecondaryCta,
    heroSecondaryCtaHref,
    technologies,
    availabilityStatus,
    availabilityMessage,
    responseTime,
    bestTopics,
    contactCtaTitle,
    contactCtaDescription,
    copyrightText,
    builtWithText
  }
"#;

pub const SOCIAL_LINKS: &str = r#"
  *[_type == "socialLink"] | order(order asc) {
    _id,
    name,
    icon,
    href,
    handle,
    description,
    color,
    primary,
    order
  }
"#;

/// Takes `$slug`.
pub const BLOG_POST_BY_SLUG: &str = r#"
  *[_type == "blogPost" && slug.current == $slug][0] {
    _id,
    title,
    "slug": slug.current,
    excerpt,
    content,
    image { asset, hotspot, crop, alt },
    "categories": categories[]->{_id, title, "slug": slug.current, description, color},
    readingTime,
    featured,
    publishedAt,
    seo
  }
"#;

pub const BLOG_SLUGS: &str = r#"*[_type == "blogPost" && defined(slug.current)]{ "slug": slug.current }"#;

/// Cheapest query that proves the dataset is reachable.
pub const HEALTH_PROBE: &str = r#"*[_type == "project"][0...1]{ _id }"#;
