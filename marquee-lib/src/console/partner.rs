//! Partner onboarding requests.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::dialog::Validate;
use super::status::RequestStatus;
use super::validator::Validator;
use crate::error::ValidationError;
use crate::model::Value;
use crate::table::TableRecord;

/// A company asking to join the partner programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRequest {
    pub id: String,
    pub company: String,
    pub contact_email: String,
    pub region: String,
    pub status: RequestStatus,
    pub submitted_at: DateTime<Utc>,
}

const PARTNER_FIELDS: [&str; 6] = [
    "id",
    "company",
    "contact_email",
    "region",
    "status",
    "submitted_at",
];

impl TableRecord for PartnerRequest {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => Value::from(&self.id),
            "company" => Value::from(&self.company),
            "contact_email" => Value::from(&self.contact_email),
            "region" => Value::from(&self.region),
            "status" => Value::from(self.status),
            "submitted_at" => Value::from(self.submitted_at),
            _ => return None,
        };
        Some(value)
    }

    fn field_names(&self) -> Vec<String> {
        PARTNER_FIELDS.iter().map(|f| f.to_string()).collect()
    }
}

impl Validate for PartnerRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .field("company", &self.company)
            .required("Company name is required")
            .field("contact_email", &self.contact_email)
            .required("Contact email is required")
            .email("Enter a valid email address")
            .field("region", &self.region)
            .required("Region is required")
            .validate()
    }
}
