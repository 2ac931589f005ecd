use crate::domain::AppError;

/// Port for downloading a single image.
pub trait ImageFetcher {
    /// Fetch the resource at `url` and return its bytes. A non-success
    /// HTTP status is an error, not an empty body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError>;
}
