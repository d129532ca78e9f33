use std::env;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::calendar::{parse_date, PlanTimeZone};
use crate::error::PlanError;
use crate::plan::Plan;

pub const TIMEZONE_VAR: &str = "ATHLETE_OS_TIMEZONE";
pub const PLAN_FILE_VAR: &str = "ATHLETE_OS_PLAN_FILE";
pub const SIMULATED_DATE_VAR: &str = "ATHLETE_OS_SIMULATED_DATE";

/// Engine settings read from the environment (and `.env` via dotenvy)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
  pub time_zone: PlanTimeZone,
  /// JSON plan replacing the built-in tables
  pub plan_file: Option<PathBuf>,
  /// Fixed "today" for simulation
  pub simulated_date: Option<NaiveDate>,
}

/// Unset and empty both mean "not configured"
fn optional_var(key: &str) -> Option<String> {
  env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl EngineConfig {
  pub fn from_env() -> Result<Self, PlanError> {
    let time_zone = match optional_var(TIMEZONE_VAR) {
      Some(tz) => tz.parse()?,
      None => PlanTimeZone::Local,
    };

    let simulated_date = optional_var(SIMULATED_DATE_VAR)
      .map(|s| parse_date(&s))
      .transpose()?;

    Ok(Self {
      time_zone,
      plan_file: optional_var(PLAN_FILE_VAR).map(PathBuf::from),
      simulated_date,
    })
  }

  /// The date the engine should treat as today
  pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
    self
      .simulated_date
      .unwrap_or_else(|| self.time_zone.local_date(now))
  }

  pub fn load_plan(&self) -> Result<Plan, PlanError> {
    match &self.plan_file {
      Some(path) => Plan::from_file(path),
      None => {
        info!("Using built-in plan");
        let plan = Plan::builtin();
        plan.validate()?;
        Ok(plan)
      }
    }
  }
}
