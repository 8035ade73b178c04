use std::thread;

use super::{
    commands::{Control, StoreCommand, StoreCommandRequest, StoreCommandResponse},
    options::StoreOptions,
    request_manager::RequestManager,
    table::table::PersonTable,
};

/// The store owns the person table and is the only thing that touches it.
/// A single worker thread consumes commands off the channel one at a time,
/// which makes every statement atomic from the caller's perspective.
pub struct Store {
    person_table: PersonTable,
    command_receiver: flume::Receiver<StoreCommandRequest>,
}

impl Store {
    pub fn new(command_receiver: flume::Receiver<StoreCommandRequest>) -> Self {
        Self {
            person_table: PersonTable::new(),
            command_receiver,
        }
    }

    /// Spawns the store worker thread and returns a cloneable handle for
    /// sending requests to it
    pub fn start(options: StoreOptions) -> RequestManager {
        let (command_sender, command_receiver) = flume::unbounded::<StoreCommandRequest>();

        thread::Builder::new()
            .name("store".to_string())
            .spawn(move || Store::new(command_receiver).run())
            .expect("Should be able to spawn the store worker thread");

        RequestManager::new(command_sender, options)
    }

    // Process incoming requests from the channel
    pub fn run(mut self) {
        log::info!("🗄️ Store worker started");

        loop {
            let StoreCommandRequest { command, resolver } = match self.command_receiver.recv() {
                Ok(request) => request,
                // Every request manager is gone, nothing left to serve
                Err(flume::RecvError::Disconnected) => return,
            };

            if command.is_mutation() {
                log::info!("Received command: {}", command.log_format());
            } else {
                log::debug!("Received command: {}", command.log_format());
            }

            let response = match command {
                StoreCommand::Statement(statement) => match self.person_table.apply(statement) {
                    Ok(statement_result) => StoreCommandResponse::StatementResult(statement_result),
                    Err(apply_error) => StoreCommandResponse::StatementError(apply_error),
                },
                StoreCommand::Control(Control::Shutdown) => {
                    let _ = resolver.send(StoreCommandResponse::ControlSuccess(
                        "Successfully shut down store".to_string(),
                    ));

                    return;
                }
            };

            // Sends the response back to the caller of the request (i.e.) the
            // entity on the other end of the channel
            if resolver.send(response).is_err() {
                log::warn!("Request manager gave up waiting for a response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        consts::consts::PersonId,
        model::person::{Person, UpdatePersonData},
        store::{request_manager::RequestManagerError, table::table::ApplyErrors},
    };

    #[test_log::test]
    fn store_serves_a_full_crud_lifecycle() {
        // Given a running store
        let request_manager = Store::start(StoreOptions::new_test());

        // When we add a person
        let person = request_manager
            .send_add(Person::new_test())
            .expect("add should succeed");

        // Then we can read it back
        assert_eq!(
            request_manager
                .send_get(person.id)
                .expect("get should succeed"),
            Some(person.clone())
        );

        // And update it without changing its id
        let updated = request_manager
            .send_update(
                person.id,
                UpdatePersonData {
                    first_name: person.first_name.clone(),
                    last_name: "Smith".to_string(),
                    date_of_birth: person.date_of_birth,
                },
            )
            .expect("update should succeed");

        assert_eq!(updated.id, person.id);
        assert_eq!(updated.last_name, "Smith");

        // And remove it
        request_manager
            .send_remove(person.id)
            .expect("remove should succeed");

        assert_eq!(
            request_manager
                .send_get(person.id)
                .expect("get should succeed"),
            None
        );

        // And the worker acknowledges shutdown
        let status = request_manager
            .send_shutdown_request()
            .expect("shutdown should be acknowledged");

        assert_eq!(status, "Successfully shut down store");
    }

    #[test_log::test]
    fn statement_errors_cross_the_channel_intact() {
        // Given a running store with no data
        let request_manager = Store::start(StoreOptions::new_test());

        // When we update an id that was never added
        let result = request_manager.send_update(
            PersonId(42),
            UpdatePersonData {
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
                date_of_birth: Person::new_test().date_of_birth,
            },
        );

        // Then the typed table error comes back, not a timeout
        assert!(matches!(
            result,
            Err(RequestManagerError::Statement(
                ApplyErrors::CannotUpdateDoesNotExist(PersonId(42))
            ))
        ));
    }
}
