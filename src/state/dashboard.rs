#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Dashboard section picked from the navigation tabs.
///
/// Sections have no backing data yet; the value only decides which heading
/// the panel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardCategory {
    #[default]
    WorkoutTracker,
    WorkoutPlan,
    Exercises,
}

impl DashboardCategory {
    /// Tabs in display order.
    pub const ALL: [Self; 3] = [Self::WorkoutTracker, Self::WorkoutPlan, Self::Exercises];

    /// Text for the navigation tab.
    pub const fn tab_label(self) -> &'static str {
        match self {
            Self::WorkoutTracker => "Workout tracker",
            Self::WorkoutPlan => "Workout plan",
            Self::Exercises => "Exercises",
        }
    }

    /// Heading shown in the panel body.
    pub const fn heading(self) -> &'static str {
        match self {
            Self::WorkoutTracker => "Workout Tracker",
            Self::WorkoutPlan => "Workout plan",
            Self::Exercises => "Exercises",
        }
    }
}
