mod embedded_assets;
mod http_fetcher;
pub mod imaging;
pub(crate) mod renderer;
mod site_filesystem;
mod status_log;

pub use embedded_assets::EmbeddedAssetStore;
pub use http_fetcher::HttpImageFetcher;
pub use renderer::{build_environment, render};
pub use site_filesystem::FilesystemSiteStore;
pub use status_log::StatusLog;
