//! WireTAP appliances.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::dialog::Validate;
use super::status::DeviceStatus;
use super::validator::Validator;
use crate::error::ValidationError;
use crate::model::Value;
use crate::table::TableRecord;

/// A WireTAP appliance installed at a theatre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTapDevice {
    pub id: String,
    pub serial: String,
    /// Empty while the device sits in the warehouse.
    pub theatre_id: String,
    pub firmware: String,
    pub status: DeviceStatus,
    /// Last heartbeat, if the device has ever reported.
    pub last_seen: Option<DateTime<Utc>>,
}

const DEVICE_FIELDS: [&str; 6] = ["id", "serial", "theatre_id", "firmware", "status", "last_seen"];

impl TableRecord for WireTapDevice {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => Value::from(&self.id),
            "serial" => Value::from(&self.serial),
            "theatre_id" if self.theatre_id.is_empty() => Value::Null,
            "theatre_id" => Value::from(&self.theatre_id),
            "firmware" => Value::from(&self.firmware),
            "status" => Value::from(self.status),
            "last_seen" => Value::from(self.last_seen),
            _ => return None,
        };
        Some(value)
    }

    fn field_names(&self) -> Vec<String> {
        DEVICE_FIELDS.iter().map(|f| f.to_string()).collect()
    }
}

impl Validate for WireTapDevice {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .field("serial", &self.serial)
            .required("Serial number is required")
            .rule(|s| s.trim().is_empty() || s.starts_with("WT-"), "Serial numbers start with WT-")
            .field("firmware", &self.firmware)
            .required("Firmware version is required")
            .validate()
    }
}
