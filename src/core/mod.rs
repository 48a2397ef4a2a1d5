pub mod gateway;

pub use crate::domain::model::{
    Command, CommandOutput, CommandRequest, CreateRepoArgs, CreationResult, ListReposArgs,
    RepositorySummary,
};
pub use crate::domain::ports::{ConfigProvider, RepositoryHost};
pub use crate::utils::error::Result;
