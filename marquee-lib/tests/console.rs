//! Console screens wired to tables and edit dialogs.

use std::sync::Arc;
use std::sync::Mutex;

use marquee_lib::console::screens::{device_columns, partner_columns, task_columns};
use marquee_lib::console::{
    fixtures, DeviceStatus, EditDialog, PartnerRequest, RequestStatus, TaskKind, Validate,
    WireTapDevice,
};
use marquee_lib::model::Value;
use marquee_lib::table::{DataTable, Direction, RowAction, RowActions};

#[test]
fn partner_dialog_rejects_bad_email() {
    let request = fixtures::partner_requests().remove(0);
    let mut dialog = EditDialog::edit(&request);
    dialog.draft_mut().contact_email = "not-an-email".to_string();
    dialog.draft_mut().company = "  ".to_string();

    let err = dialog.submit(|_| {}).unwrap_err();
    assert!(err.has_field("company"));
    assert!(err.has_field("contact_email"));
    assert!(!err.has_field("region"));
    assert!(dialog.is_open());
    assert!(dialog.is_dirty());
}

#[test]
fn approved_request_flows_back_into_table() {
    let table = DataTable::new(partner_columns(), fixtures::partner_requests());
    table.set_filter("status", [RequestStatus::Pending]).unwrap();
    let pending = table.total_count();

    let request: PartnerRequest = table.visible_rows()[0].clone();
    let mut dialog = EditDialog::edit(&request);
    dialog.draft_mut().status = RequestStatus::Approved;
    dialog
        .submit(|saved| table.replace_row(saved).unwrap())
        .unwrap();

    assert!(!dialog.is_open());
    assert_eq!(table.total_count(), pending - 1);
}

#[test]
fn new_record_dialog() {
    let draft = PartnerRequest {
        id: "pr-new".to_string(),
        company: "Projection Partners".to_string(),
        contact_email: "team@projection.example".to_string(),
        region: "EMEA".to_string(),
        status: RequestStatus::Pending,
        submitted_at: chrono::DateTime::default(),
    };
    assert!(draft.validate().is_ok());

    let mut dialog = EditDialog::create(draft.clone());
    assert!(dialog.is_new());
    let mut saved = None;
    dialog.submit(|r| saved = Some(r)).unwrap();
    assert_eq!(saved, Some(draft));
}

#[test]
fn device_status_options_and_actions() {
    let reboots = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&reboots);
    let actions = RowActions::per_row(move |device: &WireTapDevice| {
        let mut menu = Vec::new();
        if device.status == DeviceStatus::Online {
            let log = Arc::clone(&log);
            menu.push(RowAction::new("Reboot", move |d: &WireTapDevice| {
                if let Ok(mut log) = log.lock() {
                    log.push(d.id.clone());
                }
            }));
        }
        menu.push(RowAction::new("View tasks", |_: &WireTapDevice| {}));
        menu
    });
    let table = DataTable::new(device_columns(), fixtures::devices()).with_actions(actions);

    assert_eq!(
        table.filter_options("status").unwrap(),
        [Value::from("Maintenance"), Value::from("Offline"), Value::from("Online")]
    );

    table.set_filter("status", [DeviceStatus::Online]).unwrap();
    let first = table.visible_rows()[0].id.clone();
    assert_eq!(table.actions_for(&first).unwrap(), ["Reboot", "View tasks"]);
    table.invoke_action(&first, "Reboot").unwrap();
    assert_eq!(*reboots.lock().unwrap(), [first.clone()]);

    table.set_filter("status", [DeviceStatus::Offline]).unwrap();
    let offline = table.visible_rows()[0].id.clone();
    assert!(table.invoke_action(&offline, "Reboot").is_err());
}

#[test]
fn newest_tasks_first() {
    let table = DataTable::new(task_columns(), fixtures::tasks());
    table.set_filter("kind", [TaskKind::Reboot]).unwrap();
    assert_eq!(table.toggle_sort("created_at").unwrap(), Direction::Asc);
    assert_eq!(table.toggle_sort("created_at").unwrap(), Direction::Desc);

    let rows = table.visible_rows();
    assert!(rows.iter().all(|t| t.kind == TaskKind::Reboot));
    assert!(rows.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let rendered = table.render();
    let created = rendered.headers.iter().find(|h| h.key == "created_at").unwrap();
    assert_eq!(created.indicator(), "▼");
}
