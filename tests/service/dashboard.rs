//! Dashboard commands: add, view, update, remove, addable.

use serde_json::json;

use booktrack::{Book, DashboardEntry, HandlerError, RecordStore, Section};

use crate::support;

#[test]
fn add_places_a_book_on_the_dashboard() {
    let service = support::service();
    let book_id = support::seed_book(&service, "Dune", 412);

    let result = service
        .dispatch(
            "dashboard.add",
            json!({ "book_id": &book_id, "section": "reading", "current_page": 42, "rating": 8 }),
        )
        .unwrap();
    assert_eq!(result, json!({ "result": "new entry added to the dashboard" }));

    let index = service.store().index::<DashboardEntry>().unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index[0].book_id, book_id);
    assert_eq!(index[0].section, Section::Reading);
}

#[test]
fn add_unknown_book_is_not_found() {
    let service = support::service();
    let result = service.dispatch(
        "dashboard.add",
        json!({ "book_id": "gone", "section": "reading", "current_page": 0, "rating": 0 }),
    );
    assert!(matches!(result, Err(HandlerError::NotFound(_))));
}

#[test]
fn a_book_can_be_on_the_dashboard_only_once() {
    let service = support::service();
    let book_id = support::seed_book(&service, "Dune", 412);

    service
        .dispatch(
            "dashboard.add",
            json!({ "book_id": &book_id, "section": "planToRead", "current_page": 0, "rating": 0 }),
        )
        .unwrap();

    let result = service.dispatch(
        "dashboard.add",
        json!({ "book_id": &book_id, "section": "reading", "current_page": 1, "rating": 5 }),
    );
    assert!(matches!(result, Err(HandlerError::Invalid(_))));

    assert_eq!(service.store().index::<DashboardEntry>().unwrap().len(), 1);
}

#[test]
fn current_page_cannot_exceed_page_count() {
    let service = support::service();
    let book_id = support::seed_book(&service, "Dune", 412);

    let result = service.dispatch(
        "dashboard.add",
        json!({ "book_id": &book_id, "section": "reading", "current_page": 413, "rating": 5 }),
    );
    assert!(matches!(result, Err(HandlerError::Invalid(_))));

    // The last page itself is fine.
    service
        .dispatch(
            "dashboard.add",
            json!({ "book_id": &book_id, "section": "completed", "current_page": 412, "rating": 9 }),
        )
        .unwrap();
}

#[test]
fn rating_is_bounded_at_ten() {
    let service = support::service();
    let book_id = support::seed_book(&service, "Dune", 412);

    let result = service.dispatch(
        "dashboard.add",
        json!({ "book_id": &book_id, "section": "reading", "current_page": 0, "rating": 11 }),
    );
    assert!(matches!(result, Err(HandlerError::Invalid(_))));

    let result = service.dispatch(
        "dashboard.add",
        json!({ "book_id": &book_id, "section": "reading", "current_page": 0, "rating": -1 }),
    );
    assert!(matches!(result, Err(HandlerError::DecodeFailed(_))));
}

#[test]
fn unknown_section_fails_to_decode() {
    let service = support::service();
    let book_id = support::seed_book(&service, "Dune", 412);

    let result = service.dispatch(
        "dashboard.add",
        json!({ "book_id": &book_id, "section": "dropped", "current_page": 0, "rating": 0 }),
    );
    assert!(matches!(result, Err(HandlerError::DecodeFailed(_))));
}

#[test]
fn view_filters_by_section_and_joins_books() {
    let service = support::service();
    let reading = support::seed_book(&service, "Dune", 412);
    let done = support::seed_book(&service, "The Dispossessed", 387);
    support::seed_entry(&service, &reading, Section::Reading, 42, 8);
    support::seed_entry(&service, &done, Section::Completed, 387, 10);

    let view = service
        .dispatch("dashboard.view", json!({ "section": "reading" }))
        .unwrap();
    let entries = view["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["entry"]["book_id"], reading);
    assert_eq!(entries[0]["book"]["name"], "Dune");
    assert_eq!(view["incomplete"], false);
}

#[test]
fn view_of_empty_section_returns_a_message() {
    let service = support::service();
    let view = service
        .dispatch("dashboard.view", json!({ "section": "completed" }))
        .unwrap();
    assert_eq!(view, json!({ "message": "no entries in this section" }));
}

#[test]
fn view_drops_orphaned_entries_and_flags_them() {
    let service = support::service();
    let kept = support::seed_book(&service, "Dune", 412);
    let orphaned = support::seed_book(&service, "The Dispossessed", 387);
    support::seed_entry(&service, &kept, Section::Reading, 42, 8);
    support::seed_entry(&service, &orphaned, Section::Reading, 100, 6);

    // Lose the second entry's book record out from under the dashboard.
    service.store().remove::<Book>(&orphaned).unwrap();

    let view = service
        .dispatch("dashboard.view", json!({ "section": "reading" }))
        .unwrap();
    let entries = view["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["book"]["name"], "Dune");
    assert_eq!(view["incomplete"], true);
}

#[test]
fn update_replaces_fields_but_keeps_id_and_book() {
    let service = support::service();
    let book_id = support::seed_book(&service, "Dune", 412);
    let entry_id = support::seed_entry(&service, &book_id, Section::PlanToRead, 0, 0);

    let result = service
        .dispatch(
            "dashboard.update",
            json!({ "id": &entry_id, "section": "reading", "current_page": 42, "rating": 8 }),
        )
        .unwrap();
    assert_eq!(result, json!({ "result": "entry updated" }));

    let entry: DashboardEntry = service.store().get(&entry_id).unwrap().unwrap();
    assert_eq!(entry.id, entry_id);
    assert_eq!(entry.book_id, book_id);
    assert_eq!(entry.section, Section::Reading);
    assert_eq!(entry.current_page, 42);
    assert_eq!(entry.rating, 8);

    // Still exactly one index row for this entry.
    let index = service.store().index::<DashboardEntry>().unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index[0].section, Section::Reading);
}

#[test]
fn update_unknown_entry_is_not_found() {
    let service = support::service();
    let result = service.dispatch(
        "dashboard.update",
        json!({ "id": "gone", "section": "reading", "current_page": 1, "rating": 1 }),
    );
    assert!(matches!(result, Err(HandlerError::NotFound(_))));
}

#[test]
fn update_checks_page_bound_against_the_existing_book() {
    let service = support::service();
    let book_id = support::seed_book(&service, "Dune", 412);
    let entry_id = support::seed_entry(&service, &book_id, Section::Reading, 42, 8);

    let result = service.dispatch(
        "dashboard.update",
        json!({ "id": &entry_id, "section": "reading", "current_page": 9000, "rating": 8 }),
    );
    assert!(matches!(result, Err(HandlerError::Invalid(_))));

    // The entry is untouched.
    let entry: DashboardEntry = service.store().get(&entry_id).unwrap().unwrap();
    assert_eq!(entry.current_page, 42);
}

#[test]
fn remove_deletes_the_entry_and_its_index_row() {
    let service = support::service();
    let book_id = support::seed_book(&service, "Dune", 412);
    let entry_id = support::seed_entry(&service, &book_id, Section::Reading, 42, 8);

    let result = service
        .dispatch("dashboard.remove", json!({ "id": &entry_id }))
        .unwrap();
    assert_eq!(result, json!({ "result": "entry removed" }));

    assert!(!service.store().exists::<DashboardEntry>(&entry_id).unwrap());
    assert!(service.store().index::<DashboardEntry>().unwrap().is_empty());
}

#[test]
fn remove_unknown_entry_is_not_found() {
    let service = support::service();
    let result = service.dispatch("dashboard.remove", json!({ "id": "gone" }));
    assert!(matches!(result, Err(HandlerError::NotFound(_))));
}

#[test]
fn removed_book_becomes_addable_again() {
    let service = support::service();
    let book_id = support::seed_book(&service, "Dune", 412);
    let entry_id = support::seed_entry(&service, &book_id, Section::Reading, 42, 8);

    service
        .dispatch("dashboard.remove", json!({ "id": &entry_id }))
        .unwrap();

    service
        .dispatch(
            "dashboard.add",
            json!({ "book_id": &book_id, "section": "planToRead", "current_page": 0, "rating": 0 }),
        )
        .unwrap();
}

#[test]
fn addable_filters_out_tracked_books() {
    let service = support::service();
    let tracked = support::seed_book(&service, "Dune", 412);
    let free = support::seed_book(&service, "Hyperion", 482);
    support::seed_entry(&service, &tracked, Section::Reading, 42, 8);

    let result = service
        .dispatch("dashboard.addable", json!({ "book_ids": [&tracked, &free] }))
        .unwrap();
    assert_eq!(result, json!({ "addable": [&free] }));
}

#[test]
fn addable_with_no_dashboard_keeps_everything() {
    let service = support::service();
    let result = service
        .dispatch("dashboard.addable", json!({ "book_ids": ["a", "b"] }))
        .unwrap();
    assert_eq!(result, json!({ "addable": ["a", "b"] }));
}
