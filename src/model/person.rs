use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub date_created: DateTime<Utc>,
}

impl Person {
    pub fn new_test() -> Self {
        Person {
            id: PersonId(1),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
            date_created: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }
}

/// Create payload. The caller assigns the id; the creation timestamp is
/// stamped here when the payload does not carry one.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewPerson {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub date_created: Option<DateTime<Utc>>,
}

impl NewPerson {
    pub fn to_person(self) -> Person {
        Person {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            date_created: self.date_created.unwrap_or_else(Utc::now),
        }
    }
}

/// Replacement data for an update. The record id and creation timestamp are
/// not part of the payload, any such fields on the wire are ignored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdatePersonData {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}
