//! Plan data: phases with their weekly templates, and goal definitions
//!
//! The built-in tables ship with the binary. A JSON file with the same shape
//! can replace them (see `EngineConfig::load_plan`). Either way the plan is
//! validated once at load time, so resolution never has to fail.

mod builtin;

pub use builtin::{SQUAT_GOAL_ID, TOEFL_GOAL_ID};

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::PlanError;
use crate::models::{GoalDefinition, Phase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
  /// Sorted by start date, non-overlapping
  pub phases: Vec<Phase>,
  #[serde(default)]
  pub goals: Vec<GoalDefinition>,
}

impl Plan {
  /// The 2025-12 .. 2026-12 training year
  pub fn builtin() -> Self {
    Plan {
      phases: builtin::phases(),
      goals: builtin::goals(),
    }
  }

  pub fn from_json(json: &str) -> Result<Self, PlanError> {
    let plan: Plan = serde_json::from_str(json)?;
    plan.validate()?;
    info!(
      phases = plan.phases.len(),
      goals = plan.goals.len(),
      "Loaded plan from JSON"
    );
    Ok(plan)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PlanError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
      .map_err(|e| PlanError::Io(format!("{}: {}", path.display(), e)))?;
    info!(path = %path.display(), "Reading plan file");
    Self::from_json(&json)
  }

  /// Check phase ordering and goal windows
  pub fn validate(&self) -> Result<(), PlanError> {
    if self.phases.is_empty() {
      return Err(PlanError::EmptyPlan);
    }

    for phase in &self.phases {
      if phase.start_date > phase.end_date {
        return Err(PlanError::InvalidPhaseRange { phase_id: phase.id });
      }
    }

    for pair in self.phases.windows(2) {
      let (earlier, later) = (&pair[0], &pair[1]);
      if later.start_date <= earlier.end_date {
        return Err(PlanError::PhaseOverlap {
          earlier: earlier.id,
          later: later.id,
        });
      }
    }

    for goal in &self.goals {
      let window_ok = match (goal.start_date, goal.deadline_date) {
        (Some(start), Some(deadline)) => start < deadline,
        (None, None) => true,
        _ => false,
      };
      let values_ok = goal.start_value.is_some() == goal.target_value.is_some();
      if !window_ok || !values_ok {
        return Err(PlanError::InvalidGoalWindow {
          goal_id: goal.id.clone(),
        });
      }
    }

    Ok(())
  }

  pub fn goal(&self, id: &str) -> Option<&GoalDefinition> {
    self.goals.iter().find(|g| g.id == id)
  }
}

impl Default for Plan {
  fn default() -> Self {
    Self::builtin()
  }
}
