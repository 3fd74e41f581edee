//! End-to-end flow: drive the application state store against an on-disk
//! database, restart it, and verify what survived.

use tempfile::TempDir;

use weekly::repo::Repository;
use weekly::state::AppStore;

fn open_store(dir: &TempDir) -> AppStore {
    let repo = Repository::open(&dir.path().join("weekly.db")).unwrap();
    AppStore::new(repo).unwrap()
}

#[test]
fn full_week_of_commands_and_a_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = open_store(&dir);

        // Fresh database: seeded week, Monday selected
        let s = store.snapshot();
        assert_eq!(s.days.len(), 7);
        assert_eq!(s.selected_day().unwrap().name, "Monday");

        // Populate a few days
        store.add_task("write report", Some(1)).unwrap();
        store.add_task("dentist", Some(3)).unwrap();
        store.add_task("groceries", Some(3)).unwrap();
        store.add_task("", Some(3)).unwrap(); // dropped: blank
        store.add_task("orphan", None).unwrap(); // dropped: no day

        assert_eq!(store.snapshot().tasks.len(), 3);

        // Work on Wednesday
        store.select_day(3);
        let s = store.snapshot();
        assert_eq!(s.selected_day().unwrap().name, "Wednesday");
        assert_eq!(s.filtered_tasks().len(), 2);

        let dentist = s.filtered_tasks()[0].id;
        store.toggle_task(dentist).unwrap();
        assert!(store.snapshot().task(dentist).unwrap().done);

        // Rename the other one through the dialog flow
        let groceries = store.snapshot().filtered_tasks()[1].id;
        store.open_task_actions(groceries);
        store.request_edit();
        store.set_edit_text("groceries + pharmacy");
        store.confirm_edit().unwrap();
        assert_eq!(
            store.snapshot().task(groceries).unwrap().title,
            "groceries + pharmacy"
        );
    }

    {
        // Restart: days are adopted (not reseeded), tasks persisted
        let mut store = open_store(&dir);
        let s = store.snapshot();
        assert_eq!(s.days.len(), 7);
        assert_eq!(s.tasks.len(), 3);
        assert!(s.tasks.iter().any(|t| t.title == "groceries + pharmacy"));
        assert_eq!(s.tasks.iter().filter(|t| t.done).count(), 1);

        // Clear Wednesday
        store.open_clear_day(3);
        store.confirm_clear_day().unwrap();
        let s = store.snapshot();
        assert_eq!(s.tasks.len(), 1);
        assert_eq!(s.tasks[0].title, "write report");
    }

    {
        // And the clear survives a second restart
        let store = open_store(&dir);
        assert_eq!(store.snapshot().tasks.len(), 1);
    }
}

#[test]
fn two_stores_on_one_database_reconcile_through_notifications() {
    // Not a concurrency test: a second store opened later simply observes
    // whatever the first one persisted.
    let dir = TempDir::new().unwrap();

    let mut first = open_store(&dir);
    first.add_task("from the first session", Some(5)).unwrap();

    let second = open_store(&dir);
    let s = second.snapshot();
    assert_eq!(s.days.len(), 7);
    assert_eq!(s.tasks.len(), 1);
    assert_eq!(s.tasks[0].day_id, 5);
}
