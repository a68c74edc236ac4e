pub mod blog_post;
pub mod category;
pub mod image;
pub mod nullable;
pub mod portfolio;
pub mod project;
pub mod site_settings;
pub mod slug;
pub mod social_link;
pub mod uses_item;
