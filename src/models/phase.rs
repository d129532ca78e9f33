use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::task::Task;

/// Template for one weekday within a phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
  pub physical: Task,
  pub intellectual: Task,
}

/// A named macro-period of the plan with its own weekly template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
  pub id: u32,
  pub name: String,
  pub description: String,
  /// Inclusive
  pub start_date: NaiveDate,
  /// Inclusive
  pub end_date: NaiveDate,
  /// Index 0 = Sunday .. 6 = Saturday
  pub schedule: [ScheduleDay; 7],
  pub focus: String,
}

impl Phase {
  pub fn contains(&self, date: NaiveDate) -> bool {
    self.start_date <= date && date <= self.end_date
  }

  pub fn day(&self, weekday: Weekday) -> &ScheduleDay {
    &self.schedule[weekday.num_days_from_sunday() as usize]
  }
}
