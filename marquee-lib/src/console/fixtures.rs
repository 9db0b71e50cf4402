//! Deterministic mock datasets for every console screen.
//!
//! The data is rebuilt on each call and never persisted.

use chrono::DateTime;
use chrono::Utc;

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

/// 2026-01-05 09:00 UTC; every fixture timestamp is an offset from here.
const EPOCH: i64 = 1_767_603_600;

fn at(minutes: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(EPOCH + minutes * 60, 0).unwrap_or_default()
}

const THEATRES: [(&str, &str, &str, &str, u32, bool); 12] = [
    ("Cinema City Metropolis", "Cinema City", "Warsaw", "Poland", 18, true),
    ("Regal Cinemas Union Square", "Regal", "New York", "United States", 14, true),
    ("AMC Lincoln Square", "AMC", "New York", "United States", 13, true),
    ("Odeon Leicester Square", "Odeon", "London", "United Kingdom", 5, true),
    ("Kinepolis Brussels", "Kinepolis", "Brussels", "Belgium", 24, true),
    ("Pathé Wepler", "Pathé", "Paris", "France", 12, true),
    ("Vue Westfield", "Vue", "London", "United Kingdom", 16, false),
    ("Cineworld Glasgow", "Cineworld", "Glasgow", "United Kingdom", 18, true),
    ("Yelmo Ideal", "Yelmo", "Madrid", "Spain", 9, true),
    ("UCI Kinowelt Zoo Palast", "UCI", "Berlin", "Germany", 7, false),
    ("Event George Street", "Event", "Sydney", "Australia", 17, true),
    ("Cinépolis Santa Fe", "Cinépolis", "Mexico City", "Mexico", 15, true),
];

fn status(active: bool) -> ActiveStatus {
    if active {
        ActiveStatus::Active
    } else {
        ActiveStatus::Inactive
    }
}

/// Twelve theatres across several chains and countries.
pub fn theatres() -> Vec<Theatre> {
    THEATRES
        .iter()
        .enumerate()
        .map(|(i, &(name, chain, city, country, screens, active))| Theatre {
            id: format!("th-{:03}", i + 1),
            name: name.to_string(),
            chain: chain.to_string(),
            city: city.to_string(),
            country: country.to_string(),
            screen_count: screens,
            status: status(active),
        })
        .collect()
}

const PROJECTION: [&str; 4] = ["Laser 4K", "Xenon 2K", "IMAX Laser", "Dolby Cinema"];

/// Three screens for each of the first eight theatres.
pub fn screens() -> Vec<Screen> {
    (0..24)
        .map(|i| {
            let theatre = i / 3 + 1;
            let number = i % 3 + 1;
            Screen {
                id: format!("sc-{:03}", i + 1),
                theatre_id: format!("th-{:03}", theatre),
                name: format!("Screen {}", number),
                seats: 80 + ((i * 37) % 260) as u32,
                projection: PROJECTION[i % PROJECTION.len()].to_string(),
                status: status(i % 7 != 6),
            }
        })
        .collect()
}

/// Fifteen devices; the last two are unassigned and have never reported.
pub fn devices() -> Vec<WireTapDevice> {
    (0..15)
        .map(|i| {
            let assigned = i < 13;
            let status = match i % 5 {
                3 => DeviceStatus::Offline,
                4 if assigned => DeviceStatus::Maintenance,
                _ if !assigned => DeviceStatus::Offline,
                _ => DeviceStatus::Online,
            };
            WireTapDevice {
                id: format!("wt-{:03}", i + 1),
                serial: format!("WT-{:05}", 10_240 + i * 17),
                theatre_id: if assigned {
                    format!("th-{:03}", i % 12 + 1)
                } else {
                    String::new()
                },
                firmware: format!("2.{}.{}", 3 + i % 2, i % 4),
                status,
                last_seen: assigned.then(|| at(-(i as i64) * 45)),
            }
        })
        .collect()
}

/// Twenty-five tasks spread over the assigned devices.
pub fn tasks() -> Vec<FleetTask> {
    (0..25)
        .map(|i| {
            let kind = TaskKind::ALL[i % TaskKind::ALL.len()];
            let status = match i {
                0..=2 => TaskStatus::Queued,
                3..=5 => TaskStatus::Running,
                _ if i % 6 == 0 => TaskStatus::Failed,
                _ => TaskStatus::Completed,
            };
            FleetTask {
                id: format!("task-{:04}", i + 1),
                device_id: format!("wt-{:03}", i % 13 + 1),
                kind,
                status,
                created_at: at(-(i as i64) * 95),
            }
        })
        .collect()
}

const PARTNERS: [(&str, &str, &str, RequestStatus); 8] = [
    ("Lumen Analytics", "partners@lumen.example", "EMEA", RequestStatus::Pending),
    ("Boxoffice Data Co", "intake@boxoffice.example", "North America", RequestStatus::Approved),
    ("Reel Insights", "hello@reelinsights.example", "EMEA", RequestStatus::Pending),
    ("Seatmap Labs", "ops@seatmap.example", "APAC", RequestStatus::Rejected),
    ("Trailer Cast", "bd@trailercast.example", "LATAM", RequestStatus::Pending),
    ("Marquee Media", "sales@marquee-media.example", "North America", RequestStatus::Approved),
    ("Ticketflow", "partners@ticketflow.example", "APAC", RequestStatus::Pending),
    ("Screenwise", "contact@screenwise.example", "EMEA", RequestStatus::Approved),
];

/// Eight onboarding requests, newest first.
pub fn partner_requests() -> Vec<PartnerRequest> {
    PARTNERS
        .iter()
        .enumerate()
        .map(|(i, &(company, email, region, status))| PartnerRequest {
            id: format!("pr-{:03}", i + 1),
            company: company.to_string(),
            contact_email: email.to_string(),
            region: region.to_string(),
            status,
            submitted_at: at(-(i as i64) * 1_440),
        })
        .collect()
}

const PROVIDERS: [&str; 3] = ["Fandango", "Comscore", "Gracenote"];

/// One mapping per provider for the first five theatres.
pub fn identifier_mappings() -> Vec<IdentifierMapping> {
    (0..15)
        .map(|i| {
            let theatre = i / PROVIDERS.len() + 1;
            let provider = PROVIDERS[i % PROVIDERS.len()];
            IdentifierMapping {
                id: format!("map-{:03}", i + 1),
                theatre_id: format!("th-{:03}", theatre),
                provider: provider.to_string(),
                external_id: format!("{}-{}", &provider[..3].to_uppercase(), 48_100 + i * 13),
                status: status(i != 7),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::console::Validate;
    use crate::table::TableRecord;

    fn unique<T: TableRecord>(records: &[T]) -> bool {
        let ids: HashSet<String> = records.iter().map(|r| r.id()).collect();
        ids.len() == records.len()
    }

    #[test]
    fn test_ids_unique() {
        assert!(unique(&theatres()));
        assert!(unique(&screens()));
        assert!(unique(&devices()));
        assert!(unique(&tasks()));
        assert!(unique(&partner_requests()));
        assert!(unique(&identifier_mappings()));
    }

    #[test]
    fn test_fixtures_are_deterministic() {
        assert_eq!(theatres(), theatres());
        assert_eq!(tasks(), tasks());
    }

    #[test]
    fn test_fixtures_validate() {
        assert!(theatres().iter().all(|t| t.validate().is_ok()));
        assert!(screens().iter().all(|s| s.validate().is_ok()));
        assert!(devices().iter().all(|d| d.validate().is_ok()));
        assert!(partner_requests().iter().all(|p| p.validate().is_ok()));
        assert!(identifier_mappings().iter().all(|m| m.validate().is_ok()));
    }

    #[test]
    fn test_unassigned_devices() {
        let devices = devices();
        let unassigned: Vec<_> = devices.iter().filter(|d| d.theatre_id.is_empty()).collect();
        assert_eq!(unassigned.len(), 2);
        assert!(unassigned.iter().all(|d| d.last_seen.is_none()));
    }
}
