/// A user-created task belonging to one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identity; 0 means "not yet persisted" (the store assigns one on insert)
    pub id: i64,
    /// Title text
    pub title: String,
    /// Identity of the owning day. Not enforced by a constraint: deleting
    /// a day without cascading can leave orphaned tasks behind.
    pub day_id: i64,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new, not-yet-persisted task
    pub fn new(title: impl Into<String>, day_id: i64) -> Self {
        Task {
            id: 0,
            title: title.into(),
            day_id,
            done: false,
        }
    }

    /// Checkbox character for list rendering
    pub fn checkbox_char(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}
