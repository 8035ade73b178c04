use serde::{Deserialize, Serialize};

use crate::{
    consts::consts::PersonId,
    model::person::{Person, UpdatePersonData},
};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum Statement {
    Add(Person),
    Update(PersonId, UpdatePersonData),
    Remove(PersonId),
    Get(PersonId),
    /// Returns a list of Person
    List,
}

impl Statement {
    pub fn is_query(&self) -> bool {
        !self.is_mutation()
    }

    pub fn is_mutation(&self) -> bool {
        match self {
            Statement::Add(_) | Statement::Remove(_) | Statement::Update(_, _) => true,
            Statement::List | Statement::Get(_) => false,
        }
    }
}

// TODO: Is there a better way to type this? Each Statement maps to exactly one
//  StatementResult variant, the accessors below paper over that at runtime.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum StatementResult {
    Single(Person),
    GetSingle(Option<Person>),
    List(Vec<Person>),
}

impl StatementResult {
    pub fn single(self) -> Person {
        if let StatementResult::Single(p) = self {
            p
        } else {
            panic!("Statement result is not of type Single")
        }
    }

    pub fn get_single(self) -> Option<Person> {
        if let StatementResult::GetSingle(p) = self {
            p
        } else {
            panic!("Statement result is not of type GetSingle")
        }
    }

    pub fn list(self) -> Vec<Person> {
        if let StatementResult::List(l) = self {
            l
        } else {
            panic!("Statement result is not of type List")
        }
    }
}
