//! Third-party identifier mappings.

use serde::Deserialize;
use serde::Serialize;

use super::dialog::Validate;
use super::status::ActiveStatus;
use super::validator::Validator;
use crate::error::ValidationError;
use crate::model::Value;
use crate::table::TableRecord;

/// Links a theatre to the identifier an external provider uses for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierMapping {
    pub id: String,
    pub theatre_id: String,
    pub provider: String,
    pub external_id: String,
    pub status: ActiveStatus,
}

const MAPPING_FIELDS: [&str; 5] = ["id", "theatre_id", "provider", "external_id", "status"];

impl TableRecord for IdentifierMapping {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => Value::from(&self.id),
            "theatre_id" => Value::from(&self.theatre_id),
            "provider" => Value::from(&self.provider),
            "external_id" => Value::from(&self.external_id),
            "status" => Value::from(self.status),
            _ => return None,
        };
        Some(value)
    }

    fn field_names(&self) -> Vec<String> {
        MAPPING_FIELDS.iter().map(|f| f.to_string()).collect()
    }
}

impl Validate for IdentifierMapping {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .field("theatre_id", &self.theatre_id)
            .required("Choose a theatre")
            .field("provider", &self.provider)
            .required("Provider is required")
            .field("external_id", &self.external_id)
            .required("External identifier is required")
            .max_length(64, "External identifiers are at most 64 characters")
            .validate()
    }
}
