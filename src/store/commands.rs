use crate::model::statement::{Statement, StatementResult};

use super::table::table::ApplyErrors;

/// Store commands are how callers interact with the store. The majority of
/// interactions happen via statements (add, update, remove, etc), control
/// commands manage the store itself (shutdown).
#[derive(Debug)]
pub enum StoreCommand {
    Statement(Statement),
    Control(Control),
}

impl StoreCommand {
    pub fn is_mutation(&self) -> bool {
        match self {
            StoreCommand::Statement(statement) => statement.is_mutation(),
            StoreCommand::Control(_) => true,
        }
    }

    /// Prints complex logs in a more readable format
    pub fn log_format(&self) -> String {
        format!("{:?}", self)
    }
}

#[derive(Debug)]
pub enum Control {
    /// Performs a safe shutdown of the store, requests before the shutdown
    /// will be run, requests after the shutdown will be ignored
    Shutdown,
}

#[derive(Debug, PartialEq)]
pub enum StoreCommandResponse {
    StatementResult(StatementResult),
    StatementError(ApplyErrors),
    ControlSuccess(String),
}

pub struct StoreCommandRequest {
    pub resolver: oneshot::Sender<StoreCommandResponse>,
    pub command: StoreCommand,
}
