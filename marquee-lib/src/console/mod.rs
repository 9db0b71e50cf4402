//! Console records, mock datasets and list screens.
//!
//! Each list screen of the console pairs a record type with a column set:
//!
//! | Screen | Record | Columns |
//! |--------|--------|---------|
//! | Theatres | [`Theatre`] | [`screens::theatre_columns`] |
//! | Screens | [`Screen`] | [`screens::screen_columns`] |
//! | WireTAP devices | [`WireTapDevice`] | [`screens::device_columns`] |
//! | Fleet tasks | [`FleetTask`] | [`screens::task_columns`] |
//! | Partner requests | [`PartnerRequest`] | [`screens::partner_columns`] |
//! | Identifier mappings | [`IdentifierMapping`] | [`screens::mapping_columns`] |
//!
//! Records come from [`fixtures`] until a backend exists.

mod device;
mod dialog;
pub mod fixtures;
mod mapping;
mod partner;
pub mod screens;
mod status;
mod task;
mod theatre;
mod validator;

pub use device::*;
pub use dialog::*;
pub use mapping::*;
pub use partner::*;
pub use screens::ConsoleScreen;
pub use status::*;
pub use task::*;
pub use theatre::*;
pub use validator::*;
