mod image_fetcher;
mod site_store;
mod template_store;

pub use image_fetcher::ImageFetcher;
pub use site_store::SiteStore;
pub use template_store::{ScaffoldFile, TemplateStore};
