mod common;

use std::rc::Rc;

use formfit::models::{JournalEntry, SleepQuality};
use formfit::store::{MemoryBackend, StorageBackend, Store};

#[test]
fn add_then_delete_restores_prior_contents() {
    let store = common::memory_store();
    let repo = common::workout_repo(&store);

    repo.add(common::date("2025-06-01"), "Push Day", vec![common::bench_press()]);
    repo.add(common::date("2025-06-02"), "Pull Day", vec![common::bench_press()]);
    let before = repo.all();

    let added = repo.add(common::date("2025-06-03"), "Legs", vec![common::bench_press()]);
    assert_eq!(repo.all().len(), 3);

    assert!(repo.delete(&added.id));
    assert_eq!(repo.all(), before);
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let store = common::memory_store();
    let repo = common::sleep_repo(&store);

    repo.add(common::date("2025-06-01"), 7.5, SleepQuality::Good);
    let before = repo.all();

    assert!(!repo.delete("nope"));
    assert_eq!(repo.all(), before);
}

#[test]
fn workout_edit_replaces_the_whole_session() {
    let store = common::memory_store();
    let repo = common::workout_repo(&store);

    let session = repo.add(common::date("2025-06-01"), "Push Day", vec![common::bench_press()]);
    let other = repo.add(common::date("2025-06-02"), "Pull Day", vec![common::bench_press()]);

    let mut edited = session.clone();
    edited.name = "Push Day (heavy)".to_string();
    edited.exercises = vec![common::bench_press(), common::bench_press()];
    assert!(repo.replace(edited.clone()));

    let sessions = repo.all();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0], edited);
    assert_eq!(sessions[1], other);
}

#[test]
fn journal_update_replaces_exactly_the_target() {
    let store = common::memory_store();
    let repo = common::journal_repo(&store);

    let first = repo.add(common::date("2025-06-01"), "Day one", "Started strong.");
    let second = repo.add(common::date("2025-06-02"), "Day two", "Tired today.");

    assert!(repo.update(JournalEntry {
        id: second.id.clone(),
        date: second.date,
        title: "Day two, revised".to_string(),
        content: "Actually not bad.".to_string(),
    }));

    let entries = repo.all();
    assert_eq!(entries[0], first);
    assert_eq!(entries[1].id, second.id);
    assert_eq!(entries[1].date, second.date);
    assert_eq!(entries[1].title, "Day two, revised");
    assert_eq!(entries[1].content, "Actually not bad.");
}

#[test]
fn update_unknown_journal_id_changes_nothing() {
    let store = common::memory_store();
    let repo = common::journal_repo(&store);

    let entry = repo.add(common::date("2025-06-01"), "", "Some reflection.");
    assert_eq!(entry.title, "Untitled");

    assert!(!repo.update(JournalEntry {
        id: "missing".to_string(),
        date: common::date("2025-06-01"),
        title: "x".to_string(),
        content: "y".to_string(),
    }));
    assert_eq!(repo.all(), vec![entry]);
}

#[test]
fn clear_empties_the_collection() {
    let store = common::memory_store();
    let repo = common::sleep_repo(&store);

    repo.add(common::date("2025-06-01"), 6.0, SleepQuality::Poor);
    repo.add(common::date("2025-06-02"), 8.0, SleepQuality::Great);
    repo.clear();
    assert!(repo.all().is_empty());
}

#[test]
fn collections_round_trip_through_the_store() {
    let store = common::memory_store();

    let workouts = common::workout_repo(&store);
    let sleep = common::sleep_repo(&store);
    let journal = common::journal_repo(&store);

    workouts.add(common::date("2025-06-01"), "", vec![common::bench_press()]);
    sleep.add(common::date("2025-06-01"), 7.25, SleepQuality::Okay);
    journal.add(common::date("2025-06-01"), "Title", "Content.");

    // Fresh repository handles over the same backend see identical state.
    assert_eq!(common::workout_repo(&store).all(), workouts.all());
    assert_eq!(common::sleep_repo(&store).all(), sleep.all());
    assert_eq!(common::journal_repo(&store).all(), journal.all());

    assert_eq!(workouts.all()[0].name, "Workout");
}

#[test]
fn legacy_flat_exercises_are_migrated_on_read() {
    let backend = Rc::new(MemoryBackend::new());
    backend
        .write(
            "formfit_workouts",
            r#"[{
                "id": "w1",
                "date": "2025-05-30",
                "name": "Old format",
                "exercises": [
                    {"id": "e1", "name": "Squat", "sets": 3, "reps": 5, "weight": 225, "notes": "belt on"},
                    {"name": "Plank", "sets": null, "reps": null, "weight": null, "notes": ""}
                ]
            }]"#,
        )
        .unwrap();

    let store = Store::new(backend);
    let sessions = common::workout_repo(&store).all();
    assert_eq!(sessions.len(), 1);

    let squat = &sessions[0].exercises[0];
    assert_eq!(squat.sets.len(), 3);
    assert!(squat.sets.iter().all(|s| s.weight == Some(225.0) && s.reps == Some(5)));
    assert_eq!(squat.sets[0].notes.as_deref(), Some("belt on"));
    assert_eq!(squat.sets[1].notes, None);

    let plank = &sessions[0].exercises[1];
    assert_eq!(plank.sets.len(), 1);
    assert_eq!(plank.sets[0].weight, None);
    assert!(!plank.id.is_empty());
}

#[test]
fn stringly_typed_set_values_are_accepted() {
    let backend = Rc::new(MemoryBackend::new());
    backend
        .write(
            "formfit_workouts",
            r#"[{
                "id": "w1",
                "date": "2025-05-30",
                "name": "Raw form input",
                "exercises": [
                    {"id": "e1", "name": "Rows", "sets": [{"weight": "95", "reps": "12", "notes": ""}, {"weight": "", "reps": "", "notes": ""}]}
                ]
            }]"#,
        )
        .unwrap();

    let store = Store::new(backend);
    let sessions = common::workout_repo(&store).all();
    let sets = &sessions[0].exercises[0].sets;
    assert_eq!(sets[0].weight, Some(95.0));
    assert_eq!(sets[0].reps, Some(12));
    assert_eq!(sets[1].weight, None);
    assert_eq!(sets[1].reps, None);
}
