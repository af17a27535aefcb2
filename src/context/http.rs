use crate::error::NetworkError;
use crate::model::request::RandomOrgRequest;

#[async_trait::async_trait]
pub trait HttpContext {
    /// Performs the request once, within its timeout, and returns the body.
    async fn get_text(&self, request: &RandomOrgRequest) -> Result<String, NetworkError>;
}
