use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

/// Configuration errors. All of them are raised while loading the plan or the
/// environment; resolving a date never fails.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
  #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
  InvalidDate(String),

  #[error("Phase {phase_id} ends before it starts")]
  InvalidPhaseRange { phase_id: u32 },

  #[error("Phase {later} overlaps or precedes phase {earlier}")]
  PhaseOverlap { earlier: u32, later: u32 },

  #[error("Plan has no phases")]
  EmptyPlan,

  #[error("Goal {goal_id} has an invalid progress window")]
  InvalidGoalWindow { goal_id: String },

  #[error("Invalid time zone: {0}")]
  InvalidTimeZone(String),

  #[error("Parse error: {0}")]
  Parse(String),

  #[error("Failed to read plan file: {0}")]
  Io(String),
}

impl From<serde_json::Error> for PlanError {
  fn from(e: serde_json::Error) -> Self {
    PlanError::Parse(e.to_string())
  }
}

impl From<std::io::Error> for PlanError {
  fn from(e: std::io::Error) -> Self {
    PlanError::Io(e.to_string())
  }
}

impl Serialize for PlanError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}
