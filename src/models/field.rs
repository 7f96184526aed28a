use serde::Serialize;

/// Canonical role of a day-block sub-column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    Attendance,
    ActivityCategory,
    TaskPriority,
    StartTime,
    EndTime,
    WorkTime,
    Description,
}

impl Field {
    pub const COUNT: usize = 7;

    /// Canonical column name used in the normalized record set.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Attendance => "Attendance_Status",
            Field::ActivityCategory => "Activity Category",
            Field::TaskPriority => "Task Priority",
            Field::StartTime => "Start Time",
            Field::EndTime => "End Time",
            Field::WorkTime => "Work Time (Mins)",
            Field::Description => "Description",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
