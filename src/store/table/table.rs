use std::collections::HashMap;
use thiserror::Error;

use crate::{
    consts::consts::PersonId,
    model::{
        person::Person,
        statement::{Statement, StatementResult},
    },
};

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ApplyErrors {
    // CRUD - CREATE
    #[error("Cannot create, record already exists: {0}")]
    CannotCreateWhenAlreadyExists(PersonId),

    // CRUD - UPDATE
    #[error("Cannot update, record does not exist: {0}")]
    CannotUpdateDoesNotExist(PersonId),

    // CRUD - DELETE
    #[error("Cannot delete, record does not exist: {0}")]
    CannotDeleteDoesNotExist(PersonId),
}

pub struct PersonTable {
    pub person_rows: HashMap<PersonId, Person>,
}

impl PersonTable {
    pub fn new() -> Self {
        Self {
            person_rows: HashMap::<PersonId, Person>::new(),
        }
    }

    // Mutations verify their target exists (or does not) before touching the
    // row, queries treat absence as a normal outcome
    pub fn apply(&mut self, statement: Statement) -> Result<StatementResult, ApplyErrors> {
        let statement_result = match statement {
            Statement::Add(person) => {
                if self.person_rows.contains_key(&person.id) {
                    return Err(ApplyErrors::CannotCreateWhenAlreadyExists(person.id));
                }

                self.person_rows.insert(person.id, person.clone());

                StatementResult::Single(person)
            }
            Statement::Update(id, update_person) => {
                let person_row = self
                    .person_rows
                    .get_mut(&id)
                    .ok_or(ApplyErrors::CannotUpdateDoesNotExist(id))?;

                // The id and creation timestamp survive every update
                person_row.first_name = update_person.first_name;
                person_row.last_name = update_person.last_name;
                person_row.date_of_birth = update_person.date_of_birth;

                StatementResult::Single(person_row.clone())
            }
            Statement::Remove(id) => {
                let previous = self
                    .person_rows
                    .remove(&id)
                    .ok_or(ApplyErrors::CannotDeleteDoesNotExist(id))?;

                StatementResult::Single(previous)
            }
            Statement::Get(id) => StatementResult::GetSingle(self.person_rows.get(&id).cloned()),
            Statement::List => {
                StatementResult::List(self.person_rows.values().cloned().collect())
            }
        };

        Ok(statement_result)
    }
}
