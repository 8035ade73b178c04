use std::time::Duration;
use thiserror::Error;

use crate::{
    consts::consts::PersonId,
    model::{
        person::{Person, UpdatePersonData},
        statement::{Statement, StatementResult},
    },
};

use super::{
    commands::{Control, StoreCommand, StoreCommandRequest, StoreCommandResponse},
    options::StoreOptions,
    table::table::ApplyErrors,
};

#[derive(Clone)]
pub struct RequestManager {
    command_sender: flume::Sender<StoreCommandRequest>,
    request_timeout: Duration,
}

#[derive(Error, Debug)]
pub enum RequestManagerError {
    #[error("Store took too long to respond to the request")]
    StoreTimeout,

    #[error("Statement failed to apply: {0}")]
    Statement(#[from] ApplyErrors),
}

/// Goal of the request manager is to provide a simple interface for
/// interacting with the store from any thread.
///
/// 1. CRUD operations on a single person -- completely type safe
/// 2. Generic statement API -- not type safe because you need to know which
///    StatementResult a Statement maps to
impl RequestManager {
    pub fn new(command_sender: flume::Sender<StoreCommandRequest>, options: StoreOptions) -> Self {
        Self {
            command_sender,
            request_timeout: options.request_timeout,
        }
    }

    pub fn send_add(&self, person: Person) -> Result<Person, RequestManagerError> {
        let statement_result = self.send_statement(Statement::Add(person))?;
        Ok(statement_result.single())
    }

    pub fn send_update(
        &self,
        id: PersonId,
        person_update: UpdatePersonData,
    ) -> Result<Person, RequestManagerError> {
        let statement_result = self.send_statement(Statement::Update(id, person_update))?;
        Ok(statement_result.single())
    }

    pub fn send_get(&self, id: PersonId) -> Result<Option<Person>, RequestManagerError> {
        let statement_result = self.send_statement(Statement::Get(id))?;
        Ok(statement_result.get_single())
    }

    pub fn send_remove(&self, id: PersonId) -> Result<Person, RequestManagerError> {
        let statement_result = self.send_statement(Statement::Remove(id))?;
        Ok(statement_result.single())
    }

    pub fn send_list(&self) -> Result<Vec<Person>, RequestManagerError> {
        let statement_result = self.send_statement(Statement::List)?;
        Ok(statement_result.list())
    }

    /// Sends a shutdown request to the store and returns the store's response
    pub fn send_shutdown_request(&self) -> Result<String, RequestManagerError> {
        match self.send_command(StoreCommand::Control(Control::Shutdown))? {
            StoreCommandResponse::ControlSuccess(status) => Ok(status),
            response => panic!(
                "Control commands always return a control response: {:?}",
                response
            ),
        }
    }

    /// Sends a single statement to the store and returns its result
    pub fn send_statement(
        &self,
        statement: Statement,
    ) -> Result<StatementResult, RequestManagerError> {
        match self.send_command(StoreCommand::Statement(statement))? {
            StoreCommandResponse::StatementResult(statement_result) => Ok(statement_result),
            StoreCommandResponse::StatementError(apply_error) => Err(apply_error.into()),
            response => panic!(
                "Statements always return a statement response: {:?}",
                response
            ),
        }
    }

    fn send_command(
        &self,
        command: StoreCommand,
    ) -> Result<StoreCommandResponse, RequestManagerError> {
        let (resolver, response_receiver) = oneshot::channel::<StoreCommandResponse>();

        let request = StoreCommandRequest { resolver, command };

        // Sends the request to the store worker, the worker will respond on
        // the resolver once it has finished processing the request
        self.command_sender
            .send(request)
            .expect("Store worker should outlive its request managers");

        match response_receiver.recv_timeout(self.request_timeout) {
            Ok(response) => Ok(response),
            Err(oneshot::RecvTimeoutError::Timeout) => Err(RequestManagerError::StoreTimeout),
            Err(oneshot::RecvTimeoutError::Disconnected) => panic!("Store worker exited"),
        }
    }
}
