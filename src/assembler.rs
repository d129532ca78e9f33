//! Daily plan assembly
//!
//! Resolves the phase template for a date and layers the calculator output
//! for that weekday on top of it. This is the only place that knows which
//! weekday runs which calculator.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar::{self, PhaseStatus, TimelineEntry};
use crate::calisthenics::{self, Skill};
use crate::error::PlanError;
use crate::goals;
use crate::language::{self, LanguageDay};
use crate::models::{DetailedStep, Goal, Phase, ScheduleDay, Task, TaskOverride};
use crate::plan::Plan;
use crate::running::{self, RunWorkout};
use crate::strength::{self, CapacitySeries};

/// Header of the block appended to the combined Saturday session
pub const SECOND_SESSION_HEADER: &str = "--- SECOND SESSION: RUNNING ---";

/// Tasks for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
  pub physical: Task,
  pub intellectual: Task,
}

/// ---------------------------------------------------------------------------
/// Dispatch
/// ---------------------------------------------------------------------------

fn physical_override(date: NaiveDate, weekday: Weekday) -> Option<TaskOverride> {
  match weekday {
    Weekday::Sun => Some(calisthenics::calculate(date, Skill::Planche)),
    Weekday::Tue => Some(running::calculate(date, RunWorkout::Intervals)),
    Weekday::Fri => Some(strength::calculate(date)),
    _ => None,
  }
}

fn intellectual_override(date: NaiveDate, weekday: Weekday) -> Option<TaskOverride> {
  let day = match weekday {
    Weekday::Mon => LanguageDay::Input,
    Weekday::Tue => LanguageDay::Speaking,
    Weekday::Thu => LanguageDay::Writing,
    Weekday::Sat => LanguageDay::Integrated,
    _ => return None,
  };
  Some(language::calculate(date, day))
}

/// Front lever session followed by the long run.
///
/// The calisthenics override replaces the template as usual; the long run
/// is then appended as one extra block instead of replacing anything.
fn combined_session(template: &Task, date: NaiveDate) -> Task {
  let mut task = template.merged(&calisthenics::calculate(date, Skill::FrontLever));
  let run = running::prescribe(date, RunWorkout::LongRun);

  let run_title = run.title.strip_prefix("Run:").unwrap_or(&run.title).trim();
  let run_title = if run_title.is_empty() { "Run" } else { run_title };
  task.title = format!("{} + {}", task.title, run_title);

  if let Some(block) = run.main_block() {
    task
      .extended_content
      .push(DetailedStep::computed(SECOND_SESSION_HEADER, block.items.clone()));
  }
  task
}

/// Apply the weekday's calculators to a resolved template
pub fn assemble(day: &ScheduleDay, date: NaiveDate) -> DailyPlan {
  let weekday = date.weekday();

  let physical = if weekday == Weekday::Sat {
    combined_session(&day.physical, date)
  } else {
    match physical_override(date, weekday) {
      Some(ov) => day.physical.merged(&ov),
      None => day.physical.clone(),
    }
  };

  let intellectual = match intellectual_override(date, weekday) {
    Some(ov) => day.intellectual.merged(&ov),
    None => day.intellectual.clone(),
  };

  debug!(
    %date,
    ?weekday,
    physical = %physical.title,
    intellectual = %intellectual.title,
    "assembled daily plan"
  );
  DailyPlan {
    physical,
    intellectual,
  }
}

/// ---------------------------------------------------------------------------
/// Engine
/// ---------------------------------------------------------------------------

/// Read-only view over a validated plan. Holds no clock: every query takes
/// the date explicitly.
#[derive(Debug, Clone)]
pub struct PlanEngine {
  plan: Plan,
}

impl PlanEngine {
  pub fn new(plan: Plan) -> Result<Self, PlanError> {
    plan.validate()?;
    Ok(Self { plan })
  }

  pub fn builtin() -> Self {
    Self {
      plan: Plan::builtin(),
    }
  }

  pub fn plan(&self) -> &Plan {
    &self.plan
  }

  pub fn resolve_phase(&self, date: NaiveDate) -> Option<&Phase> {
    calendar::resolve_phase(&self.plan.phases, date)
  }

  /// `None` when the date falls outside every phase
  pub fn resolve_daily_plan(&self, date: NaiveDate) -> Option<DailyPlan> {
    let phase = self.resolve_phase(date);
    match calendar::resolve_day(date, phase) {
      Some(day) => Some(assemble(day, date)),
      None => {
        warn!(%date, "date is outside every phase (off-season)");
        None
      }
    }
  }

  pub fn compute_goals(&self, date: NaiveDate) -> Vec<Goal> {
    goals::compute_goals(&self.plan.goals, date)
  }

  pub fn capacity_series(&self) -> CapacitySeries {
    strength::capacity_series()
  }

  pub fn timeline(&self, date: NaiveDate) -> Vec<TimelineEntry> {
    calendar::phase_timeline(&self.plan.phases, date)
  }

  pub fn current_phase_status(&self, date: NaiveDate) -> Option<PhaseStatus> {
    self
      .resolve_phase(date)
      .map(|phase| calendar::phase_status(phase, date))
  }
}

impl Default for PlanEngine {
  fn default() -> Self {
    Self::builtin()
  }
}
