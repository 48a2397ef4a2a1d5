use crate::core::{Command, CommandOutput, CommandRequest, RepositoryHost};
use crate::utils::error::Result;

/// Translates command requests into calls against a [`RepositoryHost`].
///
/// Holds no per-request state; one instance is shared by every connection.
pub struct CommandGateway<H: RepositoryHost> {
    host: H,
}

impl<H: RepositoryHost> CommandGateway<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Parses the request into a [`Command`] and runs it.
    pub async fn handle(&self, request: CommandRequest) -> Result<CommandOutput> {
        let command = Command::try_from(request)?;
        self.execute(command).await
    }

    pub async fn execute(&self, command: Command) -> Result<CommandOutput> {
        tracing::debug!("Dispatching command: {}", command.name());

        match command {
            Command::ListRepos(args) => {
                let repos = self.host.list_repositories(&args.username).await?;
                tracing::info!(
                    "Listed {} repositories for user '{}'",
                    repos.len(),
                    args.username
                );
                Ok(CommandOutput::Repositories(repos))
            }
            Command::CreateRepo(args) => {
                let result = self.host.create_repository(&args).await?;
                tracing::info!("Created repository '{}'", args.repo_name);
                Ok(CommandOutput::Created(result))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CreateRepoArgs, CreationResult, RepositorySummary};
    use crate::utils::error::GatewayError;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockHost {
        repos: Vec<RepositorySummary>,
        fail_with_status: Option<u16>,
        created: Arc<Mutex<Vec<CreateRepoArgs>>>,
        listed: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl RepositoryHost for MockHost {
        async fn list_repositories(&self, username: &str) -> Result<Vec<RepositorySummary>> {
            self.listed.lock().await.push(username.to_string());
            if let Some(status) = self.fail_with_status {
                return Err(GatewayError::UpstreamStatus {
                    status,
                    message: Some("Not Found".to_string()),
                });
            }
            Ok(self.repos.clone())
        }

        async fn create_repository(&self, args: &CreateRepoArgs) -> Result<CreationResult> {
            let mut created = self.created.lock().await;
            if created.iter().any(|c| c.repo_name == args.repo_name) {
                return Err(GatewayError::CreationFailed {
                    message: "Repository creation failed.".to_string(),
                });
            }
            created.push(args.clone());
            Ok(CreationResult::created(&args.repo_name))
        }
    }

    fn summary(name: &str) -> RepositorySummary {
        RepositorySummary {
            name: name.to_string(),
            url: format!("https://github.com/octocat/{}", name),
            description: None,
            language: Some("Rust".to_string()),
            stars: 3,
            topics: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_repos_dispatches_to_host() {
        let host = MockHost {
            repos: vec![summary("b"), summary("a")],
            ..MockHost::default()
        };
        let gateway = CommandGateway::new(host.clone());

        let output = gateway
            .handle(CommandRequest::new("list_repos", json!({ "username": "octocat" })))
            .await
            .unwrap();

        assert_eq!(
            output,
            CommandOutput::Repositories(vec![summary("b"), summary("a")])
        );
        assert_eq!(*host.listed.lock().await, vec!["octocat".to_string()]);
    }

    #[tokio::test]
    async fn test_list_repos_is_repeatable() {
        let host = MockHost {
            repos: vec![summary("a")],
            ..MockHost::default()
        };
        let gateway = CommandGateway::new(host);
        let request = CommandRequest::new("list_repos", json!({ "username": "octocat" }));

        let first = gateway.handle(request.clone()).await.unwrap();
        let second = gateway.handle(request).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_create_repo_is_not_idempotent() {
        let gateway = CommandGateway::new(MockHost::default());
        let request = CommandRequest::new(
            "create_repo",
            json!({ "repo_name": "demo", "description": "test", "topics": ["a", "b"] }),
        );

        let first = gateway.handle(request.clone()).await.unwrap();
        assert_eq!(
            first,
            CommandOutput::Created(CreationResult::created("demo"))
        );

        let second = gateway.handle(request).await.unwrap_err();
        assert_eq!(second.status_code(), 500);
        assert_eq!(gateway.host().created.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_command_never_reaches_host() {
        let host = MockHost::default();
        let gateway = CommandGateway::new(host.clone());

        let err = gateway
            .handle(CommandRequest::new("delete_repo", json!({ "repo_name": "demo" })))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::UnknownCommand));
        assert!(host.listed.lock().await.is_empty());
        assert!(host.created.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_host_failure_propagates() {
        let host = MockHost {
            fail_with_status: Some(404),
            ..MockHost::default()
        };
        let gateway = CommandGateway::new(host);

        let err = gateway
            .handle(CommandRequest::new("list_repos", json!({ "username": "ghost" })))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("404"));
    }
}
