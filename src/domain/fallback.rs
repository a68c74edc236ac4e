//! Bundled demo content served whenever the content lake is unreachable or
//! empty. Built once on first access and never mutated.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::entities::{
    blog_post::BlogPost,
    category::Category,
    image::ImageSource,
    site_settings::{AvailabilityStatus, SiteSettings},
    slug::Slug,
    social_link::{SocialIcon, SocialLink},
    project::Project,
    uses_item::{UsesCategory, UsesItem},
};

fn date(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn category(id: &str, title: &str, description: &str, color: &str) -> Category {
    Category {
        id: id.to_string(),
        title: title.to_string(),
        slug: Slug::new(id),
        description: Some(description.to_string()),
        color: Some(color.to_string()),
    }
}

pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        category("ai-ml", "AI/ML", "Artificial Intelligence and Machine Learning projects", "bg-orange-600"),
        category("full-stack", "Full-Stack", "Full-stack web development projects", "bg-blue-500"),
        category("devops", "DevOps", "DevOps and infrastructure projects", "bg-amber-500"),
    ]
});

pub static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    let ai_ml = CATEGORIES[0].clone();
    let full_stack = CATEGORIES[1].clone();

    vec![
        Project {
            id: "1".into(),
            title: "AI Model Deployment Platform".into(),
            slug: Slug::new("ai-deployment-platform"),
            description: "Streamlined platform for deploying ML models with auto-scaling and monitoring.".into(),
            long_description: "Built a comprehensive platform that simplifies ML model deployment with features like auto-scaling, real-time monitoring, and A/B testing capabilities. Reduced deployment time by 80%.".into(),
            image: Some(ImageSource::fallback()),
            technologies: strings(&["React", "Node.js", "Docker", "Kubernetes", "TensorFlow"]),
            category: Some(ai_ml.clone()),
            live_url: Some("https://ai-deploy.example.com".into()),
            github_url: Some("https://github.com/yourusername/ai-deploy".into()),
            featured: true,
            order: None,
            published_at: date(2024, 1, 15),
        },
        Project {
            id: "2".into(),
            title: "Real-time Chat Analytics".into(),
            slug: Slug::new("chat-analytics"),
            description: "Advanced analytics dashboard for customer support conversations.".into(),
            long_description: "Developed a real-time analytics system that processes thousands of support conversations, providing insights on sentiment, resolution time, and customer satisfaction.".into(),
            image: Some(ImageSource::fallback()),
            technologies: strings(&["Next.js", "TypeScript", "PostgreSQL", "Redis", "Chart.js"]),
            category: Some(full_stack),
            live_url: Some("https://chat-analytics.example.com".into()),
            github_url: Some("https://github.com/yourusername/chat-analytics".into()),
            featured: true,
            order: None,
            published_at: date(2024, 1, 10),
        },
        Project {
            id: "3".into(),
            title: "Computer Vision API".into(),
            slug: Slug::new("computer-vision-api"),
            description: "RESTful API for image classification and object detection tasks.".into(),
            long_description: "Created a scalable computer vision API that handles image classification, object detection, and facial recognition with 99.2% accuracy. Processes over 10M images daily.".into(),
            image: Some(ImageSource::fallback()),
            technologies: strings(&["Python", "FastAPI", "PyTorch", "OpenCV", "AWS"]),
            category: Some(ai_ml),
            live_url: Some("https://vision-api.example.com".into()),
            github_url: Some("https://github.com/yourusername/vision-api".into()),
            featured: false,
            order: None,
            published_at: date(2024, 1, 5),
        },
    ]
});

pub static BLOG_POSTS: Lazy<Vec<BlogPost>> = Lazy::new(|| {
    let ai_ml = CATEGORIES[0].clone();
    let full_stack = CATEGORIES[1].clone();

    let post = |id: &str, title: &str, slug: &str, excerpt: &str, categories: Vec<Category>, reading_time: u32, featured: bool, published_at: Option<DateTime<Utc>>| BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        slug: Slug::new(slug),
        excerpt: excerpt.to_string(),
        content: None,
        image: Some(ImageSource::fallback()),
        categories,
        reading_time,
        featured,
        published_at,
        seo: None,
    };

    vec![
        post(
            "1",
            "From Support Engineering to AI Development: My Journey",
            "support-to-ai-journey",
            "How I transitioned from helping customers solve problems to building AI solutions that solve problems at scale.",
            vec![ai_ml.clone()],
            8,
            true,
            date(2024, 1, 15),
        ),
        post(
            "2",
            "Building Scalable ML Pipelines with Next.js and Python",
            "scalable-ml-pipelines",
            "A deep dive into creating robust machine learning pipelines that can handle production workloads.",
            vec![ai_ml.clone(), full_stack],
            12,
            true,
            date(2024, 1, 8),
        ),
        post(
            "3",
            "The Future of AI in Web Development",
            "ai-future-web-dev",
            "Exploring how artificial intelligence is reshaping the way we build and interact with web applications.",
            vec![ai_ml],
            6,
            false,
            date(2024, 1, 1),
        ),
    ]
});

pub static USES_ITEMS: Lazy<Vec<UsesItem>> = Lazy::new(|| {
    let item = |id: &str, name: &str, description: &str, reasoning: &str, category: UsesCategory, url: &str, price: Option<&str>| UsesItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        reasoning: reasoning.to_string(),
        image: Some(ImageSource::fallback()),
        category,
        url: url.to_string(),
        price: price.map(str::to_string),
        order: None,
    };

    vec![
        item(
            "1",
            "MacBook Pro 16\" M3 Max",
            "Primary development machine with 64GB RAM and 2TB SSD",
            "The M3 Max handles ML model training and multiple development environments effortlessly. The 16\" screen provides excellent real estate for coding.",
            UsesCategory::Hardware,
            "https://apple.com/macbook-pro",
            Some("$4,299"),
        ),
        item(
            "2",
            "VS Code",
            "Primary code editor with extensive AI and ML extensions",
            "Excellent Python and TypeScript support, integrated terminal, and amazing extension ecosystem for AI development.",
            UsesCategory::Software,
            "https://code.visualstudio.com",
            None,
        ),
        item(
            "3",
            "Docker Desktop",
            "Containerization platform for consistent development environments",
            "Essential for ML model deployment and ensuring consistency across development, staging, and production environments.",
            UsesCategory::DevelopmentTools,
            "https://docker.com",
            None,
        ),
        item(
            "4",
            "Herman Miller Aeron Chair",
            "Ergonomic office chair with full adjustability",
            "Investing in ergonomics is crucial for long coding sessions. This chair has saved my back during intense development sprints.",
            UsesCategory::OfficeSetup,
            "https://hermanmiller.com",
            Some("$1,395"),
        ),
    ]
});

pub static SITE_SETTINGS: Lazy<SiteSettings> = Lazy::new(|| SiteSettings {
    name: Some("Your Name".into()),
    title: Some("Software Developer".into()),
    email: Some("your.email@example.com".into()),
    location: Some("Your City, State".into()),
    company: Some("Your Company".into()),
    role: Some("Your Current Role".into()),
    previous_role: Some("Your Previous Role".into()),
    avatar: Some(ImageSource::Url("/placeholder.svg?height=128&width=128".into())),
    hero_title_line1: Some("Software Developer".into()),
    hero_title_line2: Some("& Problem Solver".into()),
    hero_description: Some("Passionate about creating innovative solutions and building exceptional user experiences. Let's build something amazing together.".into()),
    hero_primary_cta: Some("View Projects".into()),
    hero_primary_cta_href: Some("/projects".into()),
    hero_secondary_cta: Some("Read Blog".into()),
    hero_secondary_cta_href: Some("#blog".into()),
    technologies: Some(strings(&["React", "Next.js", "TypeScript", "Node.js", "Python", "PostgreSQL"])),
    availability_status: Some(AvailabilityStatus::Available),
    availability_message: Some("Open to new opportunities and interesting projects".into()),
    response_time: Some("I typically respond within 24-48 hours across all platforms".into()),
    best_topics: Some(strings(&[
        "Web development projects",
        "Technical consulting",
        "Collaboration opportunities",
        "Open source contributions",
    ])),
    contact_cta_title: Some("Ready to Build Something Amazing?".into()),
    contact_cta_description: Some("Whether you have a project in mind, need technical expertise, or want to discuss development opportunities, I'd love to hear from you.".into()),
    copyright_text: Some("Your Name. All rights reserved.".into()),
    built_with_text: Some("Built with Next.js, TypeScript, and Tailwind CSS".into()),
});

pub static SOCIAL_LINKS: Lazy<Vec<SocialLink>> = Lazy::new(|| {
    let link = |id: &str, name: &str, icon: SocialIcon, href: &str, handle: &str, description: &str, color: &str| SocialLink {
        id: id.to_string(),
        name: name.to_string(),
        icon,
        href: href.to_string(),
        handle: Some(handle.to_string()),
        description: Some(description.to_string()),
        color: Some(color.to_string()),
        primary: true,
        order: None,
    };

    vec![
        link("email", "Email", SocialIcon::Mail, "mailto:your.email@example.com", "your.email@example.com", "Drop me a line", "hover:text-red-500"),
        link("twitter", "X", SocialIcon::X, "https://x.com/yourusername", "@yourusername", "Follow my journey", "hover:text-gray-900 dark:hover:text-gray-100"),
        link("github", "GitHub", SocialIcon::Github, "https://github.com/yourusername", "@yourusername", "Check out my code", "hover:text-gray-900 dark:hover:text-gray-100"),
        link("linkedin", "LinkedIn", SocialIcon::Linkedin, "https://linkedin.com/in/yourprofile", "yourprofile", "Let's connect professionally", "hover:text-blue-600"),
    ]
});

/// Bundled post with the given slug, if any.
pub fn blog_post(slug: &str) -> Option<BlogPost> {
    BLOG_POSTS.iter().find(|p| p.slug.matches(slug)).cloned()
}

pub fn blog_slugs() -> Vec<String> {
    BLOG_POSTS.iter().map(|p| p.slug.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn slugs_are_unique_per_type() {
        let project_slugs: HashSet<_> = PROJECTS.iter().map(|p| p.slug.clone()).collect();
        let post_slugs: HashSet<_> = BLOG_POSTS.iter().map(|p| p.slug.clone()).collect();

        assert_eq!(project_slugs.len(), PROJECTS.len());
        assert_eq!(post_slugs.len(), BLOG_POSTS.len());
    }

    #[test]
    fn every_post_has_a_category_and_date() {
        assert!(BLOG_POSTS.iter().all(|p| !p.categories.is_empty() && p.published_at.is_some()));
    }

    #[test]
    fn blog_post_lookup_uses_normalised_slug() {
        assert_eq!(blog_post("scalable-ml-pipelines").map(|p| p.id), Some("2".to_string()));
        assert!(blog_post("missing").is_none());
        assert_eq!(blog_slugs(), vec!["support-to-ai-journey", "scalable-ml-pipelines", "ai-future-web-dev"]);
    }
}
