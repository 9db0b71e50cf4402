//! Theatres and their screens.

use serde::Deserialize;
use serde::Serialize;

use super::dialog::Validate;
use super::status::ActiveStatus;
use super::validator::Validator;
use crate::error::ValidationError;
use crate::model::Value;
use crate::table::TableRecord;

/// A cinema site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theatre {
    pub id: String,
    pub name: String,
    pub chain: String,
    pub city: String,
    pub country: String,
    pub screen_count: u32,
    pub status: ActiveStatus,
}

const THEATRE_FIELDS: [&str; 7] = [
    "id",
    "name",
    "chain",
    "city",
    "country",
    "screen_count",
    "status",
];

impl TableRecord for Theatre {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => Value::from(&self.id),
            "name" => Value::from(&self.name),
            "chain" => Value::from(&self.chain),
            "city" => Value::from(&self.city),
            "country" => Value::from(&self.country),
            "screen_count" => Value::from(self.screen_count),
            "status" => Value::from(self.status),
            _ => return None,
        };
        Some(value)
    }

    fn field_names(&self) -> Vec<String> {
        THEATRE_FIELDS.iter().map(|f| f.to_string()).collect()
    }
}

impl Validate for Theatre {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .field("name", &self.name)
            .required("Theatre name is required")
            .max_length(120, "Theatre name must be at most 120 characters")
            .field("city", &self.city)
            .required("City is required")
            .field("country", &self.country)
            .required("Country is required")
            .field("screen_count", self.screen_count.to_string())
            .min_number(1, "A theatre has at least one screen")
            .validate()
    }
}

/// One auditorium inside a theatre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub theatre_id: String,
    pub name: String,
    pub seats: u32,
    pub projection: String,
    pub status: ActiveStatus,
}

const SCREEN_FIELDS: [&str; 6] = ["id", "theatre_id", "name", "seats", "projection", "status"];

impl TableRecord for Screen {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => Value::from(&self.id),
            "theatre_id" => Value::from(&self.theatre_id),
            "name" => Value::from(&self.name),
            "seats" => Value::from(self.seats),
            "projection" => Value::from(&self.projection),
            "status" => Value::from(self.status),
            _ => return None,
        };
        Some(value)
    }

    fn field_names(&self) -> Vec<String> {
        SCREEN_FIELDS.iter().map(|f| f.to_string()).collect()
    }
}

impl Validate for Screen {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .field("theatre_id", &self.theatre_id)
            .required("Screen must belong to a theatre")
            .field("name", &self.name)
            .required("Screen name is required")
            .field("seats", self.seats.to_string())
            .min_number(1, "Seat count must be positive")
            .validate()
    }
}
