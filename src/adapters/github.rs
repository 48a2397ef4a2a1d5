use crate::domain::model::{
    CreateRepoArgs, CreateRepositoryPayload, CreationResult, RepositorySummary, UpstreamMessage,
    UpstreamRepository,
};
use crate::domain::ports::{ConfigProvider, RepositoryHost};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use std::fmt;
use url::Url;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// `RepositoryHost` backed by the GitHub REST API.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GitHubClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base_url = Url::parse(config.api_base_url()).map_err(|e| {
            GatewayError::InvalidConfigValueError {
                field: "api_base_url".to_string(),
                value: config.api_base_url().to_string(),
                reason: format!("Invalid URL format: {}", e),
            }
        })?;

        let mut builder = Client::builder().user_agent(config.user_agent().to_string());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            token: config.token().map(str::to_string),
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::ConfigError {
                message: format!("API base URL cannot be used as a base: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url).header(ACCEPT, GITHUB_ACCEPT);
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("token {}", token)),
            None => builder,
        }
    }
}

/// Pulls the `message` field out of an upstream error body, if there is one.
async fn upstream_message(response: Response) -> Option<String> {
    response
        .json::<UpstreamMessage>()
        .await
        .ok()
        .and_then(|body| body.message)
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn list_repositories(&self, username: &str) -> Result<Vec<RepositorySummary>> {
        let url = self.endpoint(&["users", username, "repos"])?;
        tracing::debug!("Listing repositories: GET {}", url);

        let response = self.request(Method::GET, url).send().await?;
        let status = response.status();
        tracing::debug!("Upstream list response status: {}", status);

        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                message: upstream_message(response).await,
            });
        }

        let repos: Vec<UpstreamRepository> = response.json().await?;
        Ok(repos.into_iter().map(RepositorySummary::from).collect())
    }

    async fn create_repository(&self, args: &CreateRepoArgs) -> Result<CreationResult> {
        let url = self.endpoint(&["user", "repos"])?;
        tracing::debug!("Creating repository '{}': POST {}", args.repo_name, url);

        let response = self
            .request(Method::POST, url)
            .json(&CreateRepositoryPayload::from(args))
            .send()
            .await?;
        let status = response.status();
        tracing::debug!("Upstream create response status: {}", status);

        // Only 201 counts; any other status, 2xx included, is a failure.
        if status != StatusCode::CREATED {
            return Err(GatewayError::CreationFailed {
                message: upstream_message(response).await.unwrap_or_default(),
            });
        }

        Ok(CreationResult::created(&args.repo_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;

    fn client_for(base: &str) -> GitHubClient {
        let config = GatewayConfig {
            api_base_url: base.to_string(),
            token: Some("secret".to_string()),
            ..GatewayConfig::default()
        };
        GitHubClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = client_for("https://api.github.com");
        let url = client.endpoint(&["users", "octocat", "repos"]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/repos");
    }

    #[test]
    fn test_endpoint_keeps_enterprise_prefix() {
        let client = client_for("https://ghe.example.com/api/v3/");
        let url = client.endpoint(&["user", "repos"]).unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/user/repos");
    }

    #[test]
    fn test_endpoint_encodes_username() {
        let client = client_for("https://api.github.com");
        let url = client.endpoint(&["users", "../admin", "repos"]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/..%2Fadmin/repos");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = client_for("https://api.github.com");
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = GatewayConfig {
            api_base_url: "not a url".to_string(),
            ..GatewayConfig::default()
        };
        let err = GitHubClient::new(&config).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidConfigValueError { .. }));
    }
}
