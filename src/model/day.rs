/// A weekday bucket owning zero or more tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    /// Unique identity, stable once assigned
    pub id: i64,
    /// Display name ("Monday", ...)
    pub name: String,
    /// Position in the week bar (0 = leftmost)
    pub order: i32,
}

impl Day {
    pub fn new(id: i64, name: impl Into<String>, order: i32) -> Self {
        Day {
            id,
            name: name.into(),
            order,
        }
    }

    /// The fixed seven-day set seeded into an empty database.
    /// Ids are assigned here, not by the store, so the in-memory copy
    /// and the persisted rows can never disagree.
    pub fn default_week() -> Vec<Day> {
        [
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday",
        ]
        .iter()
        .enumerate()
        .map(|(i, name)| Day::new(i as i64 + 1, *name, i as i32))
        .collect()
    }

    /// Two-letter label for the tab bar ("Mo", "Tu", ...)
    pub fn short_name(&self) -> String {
        self.name.chars().take(2).collect()
    }
}
