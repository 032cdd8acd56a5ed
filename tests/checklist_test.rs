mod common;

use formfit::models::{ChecklistField, DailyChecklist};

#[test]
fn defaults_show_until_first_toggle() {
    let store = common::memory_store();
    let repo = common::checklist_repo(&store);
    let date = common::date("2025-06-10");

    let computed = DailyChecklist {
        workout: true,
        sleep: false,
        journal: false,
    };
    assert_eq!(repo.effective(date, computed), computed);
    assert!(repo.overrides().is_empty());
}

#[test]
fn toggle_flips_one_field_and_persists_the_whole_record() {
    let store = common::memory_store();
    let repo = common::checklist_repo(&store);
    let date = common::date("2025-06-10");

    let computed = DailyChecklist {
        workout: false,
        sleep: true,
        journal: false,
    };
    let updated = repo.toggle(date, ChecklistField::Workout, computed);

    assert!(updated.workout);
    assert!(updated.sleep);
    assert!(!updated.journal);
    assert_eq!(repo.overrides().get(&date), Some(&updated));
}

#[test]
fn override_is_sticky_against_later_domain_changes() {
    let store = common::memory_store();
    let repo = common::checklist_repo(&store);
    let date = common::date("2025-06-10");

    // No workout logged yet: computed default is false, user toggles it on.
    let toggled = repo.toggle(date, ChecklistField::Workout, DailyChecklist::default());
    assert!(toggled.workout);

    // A real workout for that date later changes the computed default, but
    // the stored record still wins, unchanged.
    let recomputed = DailyChecklist {
        workout: true,
        sleep: false,
        journal: false,
    };
    assert_eq!(repo.effective(date, recomputed), toggled);

    // Toggling off afterwards also sticks, even though the recomputed
    // default would now say done.
    let off = repo.toggle(date, ChecklistField::Workout, recomputed);
    assert!(!off.workout);
    assert_eq!(repo.effective(date, recomputed), off);
}

#[test]
fn overrides_are_per_date() {
    let store = common::memory_store();
    let repo = common::checklist_repo(&store);

    repo.toggle(common::date("2025-06-10"), ChecklistField::Journal, DailyChecklist::default());
    let other = common::date("2025-06-11");
    assert_eq!(repo.effective(other, DailyChecklist::default()), DailyChecklist::default());
}

#[test]
fn checklist_map_round_trips_through_the_store() {
    let store = common::memory_store();
    let repo = common::checklist_repo(&store);
    let date = common::date("2025-06-10");

    let updated = repo.toggle(date, ChecklistField::Sleep, DailyChecklist::default());
    let reloaded = common::checklist_repo(&store).overrides();
    assert_eq!(reloaded.get(&date), Some(&updated));
}
