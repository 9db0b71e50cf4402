//! Column sets for the console's list screens.

use std::fmt;
use std::str::FromStr;

use super::device::WireTapDevice;
use super::mapping::IdentifierMapping;
use super::partner::PartnerRequest;
use super::status::ActiveStatus;
use super::status::DeviceStatus;
use super::status::RequestStatus;
use super::status::TaskKind;
use super::status::TaskStatus;
use super::task::FleetTask;
use super::theatre::Screen;
use super::theatre::Theatre;
use crate::model::Value;
use crate::table::Column;

/// A list screen of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleScreen {
    Theatres,
    Screens,
    Devices,
    Tasks,
    Partners,
    Mappings,
}

impl ConsoleScreen {
    pub const ALL: &'static [ConsoleScreen] = &[
        ConsoleScreen::Theatres,
        ConsoleScreen::Screens,
        ConsoleScreen::Devices,
        ConsoleScreen::Tasks,
        ConsoleScreen::Partners,
        ConsoleScreen::Mappings,
    ];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleScreen::Theatres => "theatres",
            ConsoleScreen::Screens => "screens",
            ConsoleScreen::Devices => "devices",
            ConsoleScreen::Tasks => "tasks",
            ConsoleScreen::Partners => "partners",
            ConsoleScreen::Mappings => "mappings",
        }
    }

    /// Page title.
    pub fn title(&self) -> &'static str {
        match self {
            ConsoleScreen::Theatres => "Theatres",
            ConsoleScreen::Screens => "Screens",
            ConsoleScreen::Devices => "WireTAP Devices",
            ConsoleScreen::Tasks => "Fleet Tasks",
            ConsoleScreen::Partners => "Partner Requests",
            ConsoleScreen::Mappings => "Identifier Mappings",
        }
    }
}

impl fmt::Display for ConsoleScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConsoleScreen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let screen = match s.as_str() {
            "theatres" | "theaters" => ConsoleScreen::Theatres,
            "screens" => ConsoleScreen::Screens,
            "devices" | "wiretap" => ConsoleScreen::Devices,
            "tasks" | "fleet" => ConsoleScreen::Tasks,
            "partners" => ConsoleScreen::Partners,
            "mappings" | "identifiers" => ConsoleScreen::Mappings,
            _ => return Err(format!("unknown screen '{}'", s)),
        };
        Ok(screen)
    }
}

pub fn theatre_columns() -> Vec<Column<Theatre>> {
    vec![
        Column::field("name", "Name").sortable(),
        Column::field("chain", "Chain").sortable().filterable(),
        Column::derived("location", "Location", |t: &Theatre| {
            Value::from(format!("{}, {}", t.city, t.country))
        })
        .sortable(),
        Column::field("country", "Country").sortable().filterable(),
        Column::field("screen_count", "Screens").sortable(),
        Column::field("status", "Status").options(ActiveStatus::ALL.iter().copied()),
    ]
}

pub fn screen_columns() -> Vec<Column<Screen>> {
    vec![
        Column::field("theatre_id", "Theatre").sortable().filterable(),
        Column::field("name", "Screen").sortable(),
        Column::field("seats", "Seats").sortable(),
        Column::field("projection", "Projection").sortable().filterable(),
        Column::field("status", "Status").options(ActiveStatus::ALL.iter().copied()),
    ]
}

/// Unassigned devices show "Warehouse"; devices that never reported show "Never".
pub fn device_columns() -> Vec<Column<WireTapDevice>> {
    vec![
        Column::field("serial", "Serial").sortable(),
        Column::field("theatre_id", "Theatre")
            .sortable()
            .filterable()
            .cell(|d: &WireTapDevice| {
                if d.theatre_id.is_empty() {
                    "Warehouse".to_string()
                } else {
                    d.theatre_id.clone()
                }
            }),
        Column::field("firmware", "Firmware").sortable().filterable(),
        Column::field("status", "Status").options(DeviceStatus::ALL.iter().copied()),
        Column::field("last_seen", "Last Seen")
            .sortable()
            .cell(|d: &WireTapDevice| match d.last_seen {
                Some(seen) => seen.format("%Y-%m-%d %H:%M").to_string(),
                None => "Never".to_string(),
            }),
    ]
}

pub fn task_columns() -> Vec<Column<FleetTask>> {
    vec![
        Column::field("id", "Task").sortable(),
        Column::field("device_id", "Device").sortable().filterable(),
        Column::field("kind", "Kind")
            .sortable()
            .options(TaskKind::ALL.iter().copied()),
        Column::field("status", "Status")
            .sortable()
            .options(TaskStatus::ALL.iter().copied()),
        Column::field("created_at", "Created").sortable(),
    ]
}

pub fn partner_columns() -> Vec<Column<PartnerRequest>> {
    vec![
        Column::field("company", "Company").sortable(),
        Column::field("contact_email", "Contact"),
        Column::field("region", "Region").sortable().filterable(),
        Column::field("status", "Status")
            .sortable()
            .options(RequestStatus::ALL.iter().copied()),
        Column::field("submitted_at", "Submitted").sortable(),
    ]
}

pub fn mapping_columns() -> Vec<Column<IdentifierMapping>> {
    vec![
        Column::field("theatre_id", "Theatre").sortable().filterable(),
        Column::field("provider", "Provider").sortable().filterable(),
        Column::field("external_id", "External ID").sortable(),
        Column::field("status", "Status").options(ActiveStatus::ALL.iter().copied()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::fixtures;
    use crate::table::DataTable;
    use crate::table::Direction;

    #[test]
    fn test_screen_names_round_trip() {
        for screen in ConsoleScreen::ALL {
            assert_eq!(screen.name().parse::<ConsoleScreen>(), Ok(*screen));
        }
        assert_eq!("Theaters".parse::<ConsoleScreen>(), Ok(ConsoleScreen::Theatres));
        assert!("films".parse::<ConsoleScreen>().is_err());
    }

    #[test]
    fn test_status_options_are_static() {
        let columns = task_columns();
        let status = columns.iter().find(|c| c.key == "status").unwrap();
        let options = status.filter_options(&[]);
        assert_eq!(options.len(), TaskStatus::ALL.len());
    }

    #[test]
    fn test_device_cells() {
        let devices = fixtures::devices();
        let columns = device_columns();
        let theatre = &columns[1];
        let seen = &columns[4];
        let warehouse = devices.iter().find(|d| d.theatre_id.is_empty()).unwrap();
        assert_eq!(theatre.render(warehouse), "Warehouse");
        assert_eq!(seen.render(warehouse), "Never");
    }

    #[test]
    fn test_sort_by_derived_location() {
        let table = DataTable::new(theatre_columns(), fixtures::theatres());
        table.set_sort("location", Direction::Asc).unwrap();
        let rows = table.visible_rows();
        assert_eq!(rows[0].city, "Berlin");
    }
}
