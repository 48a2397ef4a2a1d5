use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::require_non_empty_argument;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const LIST_REPOS: &str = "list_repos";
pub const CREATE_REPO: &str = "create_repo";

/// Inbound body of `POST /mcp/query`, exactly as received.
///
/// Both fields stay untyped here so that a missing or malformed `command`
/// can be reported as an unknown command instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub command: Value,
    #[serde(default)]
    pub arguments: Value,
}

impl CommandRequest {
    pub fn new(command: impl Into<String>, arguments: Value) -> Self {
        Self {
            command: Value::String(command.into()),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListReposArgs {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateRepoArgs {
    pub repo_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

/// The closed set of commands the gateway dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListRepos(ListReposArgs),
    CreateRepo(CreateRepoArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::ListRepos(_) => LIST_REPOS,
            Command::CreateRepo(_) => CREATE_REPO,
        }
    }
}

impl TryFrom<CommandRequest> for Command {
    type Error = GatewayError;

    fn try_from(request: CommandRequest) -> Result<Self> {
        let name = request
            .command
            .as_str()
            .ok_or(GatewayError::UnknownCommand)?;

        match name {
            LIST_REPOS => {
                let args: ListReposArgs = parse_arguments(LIST_REPOS, request.arguments)?;
                require_non_empty_argument(LIST_REPOS, "username", &args.username)?;
                Ok(Command::ListRepos(args))
            }
            CREATE_REPO => {
                let args: CreateRepoArgs = parse_arguments(CREATE_REPO, request.arguments)?;
                require_non_empty_argument(CREATE_REPO, "repo_name", &args.repo_name)?;
                Ok(Command::CreateRepo(args))
            }
            _ => Err(GatewayError::UnknownCommand),
        }
    }
}

fn parse_arguments<T: DeserializeOwned>(command: &str, arguments: Value) -> Result<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(serde_json::Map::new()),
        Value::Object(_) => arguments,
        other => {
            return Err(GatewayError::invalid_arguments(
                command,
                format!("`arguments` must be an object, got {}", json_kind(&other)),
            ))
        }
    };

    serde_json::from_value(arguments)
        .map_err(|e| GatewayError::invalid_arguments(command, e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reduced view of an upstream repository returned by `list_repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub topics: Vec<String>,
}

/// Upstream repository item; only the fields the summary needs.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamRepository {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

impl From<UpstreamRepository> for RepositorySummary {
    fn from(repo: UpstreamRepository) -> Self {
        Self {
            name: repo.name,
            url: repo.html_url,
            description: repo.description,
            language: repo.language,
            stars: repo.stargazers_count.unwrap_or_default(),
            topics: repo.topics.unwrap_or_default(),
        }
    }
}

/// Body sent to the upstream "create repository" endpoint.
#[derive(Debug, Serialize)]
pub struct CreateRepositoryPayload<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<&'a [String]>,
    pub auto_init: bool,
}

impl<'a> From<&'a CreateRepoArgs> for CreateRepositoryPayload<'a> {
    fn from(args: &'a CreateRepoArgs) -> Self {
        Self {
            name: &args.repo_name,
            description: args.description.as_deref(),
            topics: args.topics.as_deref(),
            // 讓上游自動建立 README
            auto_init: true,
        }
    }
}

/// Error body shape the upstream API uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationResult {
    pub message: String,
}

impl CreationResult {
    pub fn created(repo_name: &str) -> Self {
        Self {
            message: format!("Repository '{}' created successfully!", repo_name),
        }
    }
}

/// Successful result of a command, serialized as the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Repositories(Vec<RepositorySummary>),
    Created(CreationResult),
}
