//! Consumer-facing queries
//!
//! Everything a dashboard needs for one date, bundled into serialisable
//! structs so a rendering layer (or the CLI's `--json`) can consume it as is.

use chrono::NaiveDate;
use serde::Serialize;

use crate::assembler::{DailyPlan, PlanEngine};
use crate::calendar::{self, PhaseStatus, TimelineEntry};
use crate::error::PlanError;
use crate::models::{Goal, Phase};
use crate::plan::{SQUAT_GOAL_ID, TOEFL_GOAL_ID};
use crate::strength::CapacitySeries;

pub const OFF_SEASON_LABEL: &str = "OFF SEASON";

#[derive(Debug, Clone, Serialize)]
pub struct PhaseSummary {
  pub id: u32,
  pub name: String,
  pub description: String,
  pub focus: String,
  pub range_label: String,
  pub status: PhaseStatus,
}

impl PhaseSummary {
  fn new(phase: &Phase, date: NaiveDate) -> Self {
    Self {
      id: phase.id,
      name: phase.name.clone(),
      description: phase.description.clone(),
      focus: phase.focus.clone(),
      range_label: format!(
        "{} - {}",
        phase.start_date.format("%Y-%m-%d"),
        phase.end_date.format("%Y-%m-%d")
      ),
      status: calendar::phase_status(phase, date),
    }
  }
}

/// Big number shown next to the goal list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineFigure {
  pub label: String,
  /// Goal status without its unit ("118" for "118kg")
  pub value: String,
  pub unit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
  pub date: NaiveDate,
  /// "Lunes, 1 de Diciembre de 2025"
  pub date_label: String,
  /// Phase name, or "OFF SEASON"
  pub phase_label: String,
  pub phase: Option<PhaseSummary>,
  pub plan: Option<DailyPlan>,
  pub goals: Vec<Goal>,
  pub timeline: Vec<TimelineEntry>,
  pub squat_estimate: Option<HeadlineFigure>,
  pub toefl_estimate: Option<HeadlineFigure>,
}

impl DashboardSnapshot {
  pub fn is_off_season(&self) -> bool {
    self.phase.is_none()
  }
}

fn headline(goals: &[Goal], id: &str, label: &str, suffix: &str) -> Option<HeadlineFigure> {
  goals.iter().find(|g| g.id == id).map(|goal| {
    let unit = goal.unit.as_deref().unwrap_or("");
    let value = goal
      .current_status
      .strip_suffix(unit)
      .unwrap_or(&goal.current_status)
      .to_string();
    HeadlineFigure {
      label: label.to_string(),
      value,
      unit: suffix.to_string(),
    }
  })
}

/// Everything the dashboard shows for `date`
pub fn dashboard_snapshot(engine: &PlanEngine, date: NaiveDate) -> DashboardSnapshot {
  let phase = engine.resolve_phase(date);
  let goals = engine.compute_goals(date);

  DashboardSnapshot {
    date,
    date_label: calendar::format_long_date(date),
    phase_label: phase
      .map(|p| p.name.clone())
      .unwrap_or_else(|| OFF_SEASON_LABEL.to_string()),
    phase: phase.map(|p| PhaseSummary::new(p, date)),
    plan: engine.resolve_daily_plan(date),
    squat_estimate: headline(&goals, SQUAT_GOAL_ID, "Est. Squat RM", "kg"),
    toefl_estimate: headline(&goals, TOEFL_GOAL_ID, "Est. Score", "+"),
    goals,
    timeline: engine.timeline(date),
  }
}

pub fn goals_for(engine: &PlanEngine, date: NaiveDate) -> Vec<Goal> {
  engine.compute_goals(date)
}

pub fn squat_chart(engine: &PlanEngine) -> CapacitySeries {
  engine.capacity_series()
}

/// Validate a manual "YYYY-MM-DD" date input
pub fn parse_simulated_date(input: &str) -> Result<NaiveDate, PlanError> {
  calendar::parse_date(input)
}
