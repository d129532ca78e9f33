//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Date helpers
//! - Phase and plan factories
//! - Goal fixtures

use chrono::{Duration, NaiveDate};

use crate::models::{
  DetailedStep, GoalCategory, GoalDefinition, GoalIcon, Phase, ScheduleDay, Task, TaskType,
};
use crate::plan::Plan;

/// ---------------------------------------------------------------------------
/// Date Helpers
/// ---------------------------------------------------------------------------

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Every day from `from` to `to`, both inclusive
pub fn days_between(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
  let mut days = Vec::new();
  let mut current = from;
  while current <= to {
    days.push(current);
    current += Duration::days(1);
  }
  days
}

/// ---------------------------------------------------------------------------
/// Phase Factories
/// ---------------------------------------------------------------------------

/// Phase whose slots are titled "P{id} slot {i}" (0 = Sunday)
pub fn create_test_phase(id: u32, start: NaiveDate, end: NaiveDate) -> Phase {
  let schedule = std::array::from_fn(|i| ScheduleDay {
    physical: Task::new(
      TaskType::Calisthenics,
      &format!("P{} slot {}", id, i),
      &["Template detail"],
      "60 min",
    )
    .with_steps(vec![DetailedStep::new("Template", &["Template item"])]),
    intellectual: Task::new(
      TaskType::LanguagePrep,
      &format!("P{} study {}", id, i),
      &["Template study"],
      "45 min",
    ),
  });

  Phase {
    id,
    name: format!("Phase {}", id),
    description: format!("Test phase {}", id),
    start_date: start,
    end_date: end,
    schedule,
    focus: "Testing".to_string(),
  }
}

/// Two back-to-back phases: 2025-12-01..2026-03-31 and 2026-04-01..2026-06-30
pub fn contiguous_phases() -> Vec<Phase> {
  vec![
    create_test_phase(1, date(2025, 12, 1), date(2026, 3, 31)),
    create_test_phase(2, date(2026, 4, 1), date(2026, 6, 30)),
  ]
}

/// Same as [`contiguous_phases`] but phase 2 only starts on 2026-04-15
pub fn gapped_phases() -> Vec<Phase> {
  vec![
    create_test_phase(1, date(2025, 12, 1), date(2026, 3, 31)),
    create_test_phase(2, date(2026, 4, 15), date(2026, 6, 30)),
  ]
}

/// ---------------------------------------------------------------------------
/// Goal Fixtures
/// ---------------------------------------------------------------------------

/// Back squat 105 -> 150 kg over the 2025-12-01..2026-12-31 window
pub fn squat_goal() -> GoalDefinition {
  GoalDefinition {
    id: "3".to_string(),
    title: "Back Squat".to_string(),
    target: "150kg 1RM".to_string(),
    deadline: "Dec 2026".to_string(),
    category: GoalCategory::Physical,
    icon: GoalIcon::Dumbbell,
    current_status: "105kg".to_string(),
    progress: 0,
    start_value: Some(105.0),
    target_value: Some(150.0),
    unit: Some("kg".to_string()),
    start_date: Some(date(2025, 12, 1)),
    deadline_date: Some(date(2026, 12, 31)),
    maintenance: false,
  }
}

/// Minimal valid plan built from [`contiguous_phases`]
pub fn create_test_plan() -> Plan {
  Plan {
    phases: contiguous_phases(),
    goals: vec![squat_goal()],
  }
}
