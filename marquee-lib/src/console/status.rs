//! Status and kind enums shown in console tables.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Value;

/// Declares a display enum that converts to and from its label.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display label.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| format!("unknown {} '{}'", stringify!($name), s))
            }
        }

        impl From<$name> for Value {
            fn from(v: $name) -> Self {
                Value::from(v.as_str())
            }
        }
    };
}

labelled_enum! {
    /// Whether a theatre, screen or mapping is in service.
    ActiveStatus {
        Active => "Active",
        Inactive => "Inactive",
    }
}

labelled_enum! {
    /// Connectivity of a WireTAP appliance.
    DeviceStatus {
        Online => "Online",
        Offline => "Offline",
        Maintenance => "Maintenance",
    }
}

labelled_enum! {
    /// Progress of a fleet task.
    TaskStatus {
        Queued => "Queued",
        Running => "Running",
        Completed => "Completed",
        Failed => "Failed",
    }
}

labelled_enum! {
    /// What a fleet task does to its device.
    TaskKind {
        FirmwareUpdate => "Firmware Update",
        Reboot => "Reboot",
        LogUpload => "Log Upload",
        ConfigSync => "Config Sync",
    }
}

labelled_enum! {
    /// Review state of a partner onboarding request.
    RequestStatus {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}
