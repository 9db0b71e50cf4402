//! Marquee console library
//!
//! The tabular data view behind the cinema infrastructure console, plus the
//! console's record types, mock datasets and edit dialogs.
//!
//! The [`table`] module is generic over any [`table::TableRecord`]; the
//! [`console`] module supplies the theatres, screens, WireTAP devices, fleet
//! tasks, partner requests and identifier mappings the console lists.

pub mod console;
pub mod error;
pub mod model;
pub mod table;
