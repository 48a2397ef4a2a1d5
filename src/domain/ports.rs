use crate::domain::model::{CreateRepoArgs, CreationResult, RepositorySummary};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn token(&self) -> Option<&str>;
    fn user_agent(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}

/// The upstream repository-hosting API.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// First page of a user's repositories, in upstream order.
    async fn list_repositories(&self, username: &str) -> Result<Vec<RepositorySummary>>;

    /// Creates a repository for the authenticated user. Succeeds only on `201 Created`.
    async fn create_repository(&self, args: &CreateRepoArgs) -> Result<CreationResult>;
}
