pub mod pages;
pub mod portfolio;
