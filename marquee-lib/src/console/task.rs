//! Fleet tasks queued against WireTAP devices.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::status::TaskKind;
use super::status::TaskStatus;
use crate::model::Value;
use crate::table::TableRecord;

/// A remote operation on one device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetTask {
    pub id: String,
    pub device_id: String,
    pub kind: TaskKind,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

const TASK_FIELDS: [&str; 5] = ["id", "device_id", "kind", "status", "created_at"];

impl TableRecord for FleetTask {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Value> {
        let value = match name {
            "id" => Value::from(&self.id),
            "device_id" => Value::from(&self.device_id),
            "kind" => Value::from(self.kind),
            "status" => Value::from(self.status),
            "created_at" => Value::from(self.created_at),
            _ => return None,
        };
        Some(value)
    }

    fn field_names(&self) -> Vec<String> {
        TASK_FIELDS.iter().map(|f| f.to_string()).collect()
    }
}
