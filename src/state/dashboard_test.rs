use super::*;

// =============================================================
// DashboardCategory
// =============================================================

#[test]
fn dashboard_category_default_is_workout_tracker() {
    assert_eq!(DashboardCategory::default(), DashboardCategory::WorkoutTracker);
}

#[test]
fn dashboard_category_tabs_keep_display_order() {
    let labels: Vec<_> = DashboardCategory::ALL
        .iter()
        .map(|category| category.tab_label())
        .collect();
    assert_eq!(labels, ["Workout tracker", "Workout plan", "Exercises"]);
}

#[test]
fn dashboard_category_variants_are_distinct() {
    let variants = DashboardCategory::ALL;
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn tracker_heading_is_title_cased() {
    assert_eq!(DashboardCategory::WorkoutTracker.heading(), "Workout Tracker");
    assert_eq!(DashboardCategory::Exercises.heading(), "Exercises");
}
