//! Calendar and phase resolution
//!
//! Every date handled by the engine is a local calendar date (`NaiveDate`).
//! Instants are converted exactly once, through [`PlanTimeZone::local_date`],
//! so an evening in a zone west of UTC never rolls over to tomorrow.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlanError;
use crate::models::{Phase, ScheduleDay};

/// Build a calendar constant. Invalid literals fail at compile time.
pub(crate) const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
  match NaiveDate::from_ymd_opt(year, month, day) {
    Some(date) => date,
    None => panic!("invalid calendar constant"),
  }
}

/// Day zero for every weekly progression (a Monday)
pub const PLAN_EPOCH: NaiveDate = ymd(2025, 12, 1);

/// ---------------------------------------------------------------------------
/// Time Zone
/// ---------------------------------------------------------------------------

/// Zone used to turn "now" into a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanTimeZone {
  /// The operating system's zone
  #[default]
  Local,
  Fixed(FixedOffset),
}

impl PlanTimeZone {
  pub fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
    match self {
      PlanTimeZone::Local => now.with_timezone(&Local).date_naive(),
      PlanTimeZone::Fixed(offset) => now.with_timezone(offset).date_naive(),
    }
  }
}

impl std::str::FromStr for PlanTimeZone {
  type Err = PlanError;

  /// Accepts `local`, `utc` / `z`, or an offset such as `-05:00`, `+0530`
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    match trimmed.to_ascii_lowercase().as_str() {
      "local" => return Ok(Self::Local),
      "utc" | "z" => return Ok(Self::Fixed(FixedOffset::east_opt(0).ok_or_else(|| invalid_tz(s))?)),
      _ => {}
    }

    let (sign, rest) = match trimmed.chars().next() {
      Some('+') => (1, &trimmed[1..]),
      Some('-') => (-1, &trimmed[1..]),
      _ => return Err(invalid_tz(s)),
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
      return Err(invalid_tz(s));
    }
    let hours: i32 = digits[..2].parse().map_err(|_| invalid_tz(s))?;
    let minutes: i32 = digits[2..].parse().map_err(|_| invalid_tz(s))?;
    if hours > 14 || minutes > 59 {
      return Err(invalid_tz(s));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
      .map(Self::Fixed)
      .ok_or_else(|| invalid_tz(s))
  }
}

fn invalid_tz(s: &str) -> PlanError {
  PlanError::InvalidTimeZone(s.to_string())
}

/// Parse a `YYYY-MM-DD` date (manual date input, config, plan files)
pub fn parse_date(s: &str) -> Result<NaiveDate, PlanError> {
  NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| PlanError::InvalidDate(s.to_string()))
}

/// ---------------------------------------------------------------------------
/// Plan Weeks
/// ---------------------------------------------------------------------------

/// Whole weeks from `anchor` to `date`; dates before the anchor are week 0
pub fn weeks_since(anchor: NaiveDate, date: NaiveDate) -> u32 {
  let days = (date - anchor).num_days();
  if days <= 0 {
    0
  } else {
    (days / 7) as u32
  }
}

/// Whole weeks since [`PLAN_EPOCH`]
pub fn weeks_elapsed(date: NaiveDate) -> u32 {
  weeks_since(PLAN_EPOCH, date)
}

/// ---------------------------------------------------------------------------
/// Phase Resolution
/// ---------------------------------------------------------------------------

/// First phase whose inclusive range contains `date`, `None` when off season
pub fn resolve_phase(phases: &[Phase], date: NaiveDate) -> Option<&Phase> {
  let phase = phases.iter().find(|p| p.contains(date));
  debug!(%date, phase_id = phase.map(|p| p.id), "resolved phase");
  phase
}

/// Weekday template for `date` (Sunday = slot 0)
pub fn resolve_day(date: NaiveDate, phase: Option<&Phase>) -> Option<&ScheduleDay> {
  phase.map(|p| p.day(date.weekday()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
  Completed,
  Current,
  Upcoming,
}

pub fn phase_status(phase: &Phase, date: NaiveDate) -> PhaseStatus {
  if date > phase.end_date {
    PhaseStatus::Completed
  } else if phase.contains(date) {
    PhaseStatus::Current
  } else {
    PhaseStatus::Upcoming
  }
}

/// One node of the macrocycle timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
  pub phase_id: u32,
  pub name: String,
  pub focus: String,
  /// e.g. "2025-12 - 2026-03"
  pub range_label: String,
  pub status: PhaseStatus,
}

pub fn phase_timeline(phases: &[Phase], date: NaiveDate) -> Vec<TimelineEntry> {
  phases
    .iter()
    .map(|p| TimelineEntry {
      phase_id: p.id,
      name: p.name.clone(),
      focus: p.focus.clone(),
      range_label: format!("{} - {}", p.start_date.format("%Y-%m"), p.end_date.format("%Y-%m")),
      status: phase_status(p, date),
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Display Formatting
/// ---------------------------------------------------------------------------

const DAY_NAMES: [&str; 7] = ["Domingo", "Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado"];

const MONTH_NAMES: [&str; 12] = [
  "Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
  "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre",
];

const MONTH_ABBREVIATIONS: [&str; 12] = [
  "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

pub fn day_name(weekday: Weekday) -> &'static str {
  DAY_NAMES[weekday.num_days_from_sunday() as usize]
}

/// "Lunes, 1 de Diciembre de 2025"
pub fn format_long_date(date: NaiveDate) -> String {
  format!(
    "{}, {} de {} de {}",
    day_name(date.weekday()),
    date.day(),
    MONTH_NAMES[date.month0() as usize],
    date.year()
  )
}

/// Decimal without a trailing ".0": 75.0 -> "75", 72.5 -> "72.5"
pub fn format_decimal(value: f64) -> String {
  if value.fract() == 0.0 {
    format!("{:.0}", value)
  } else {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').to_string()
  }
}

/// "5 dic"
pub fn format_short_date(date: NaiveDate) -> String {
  format!("{} {}", date.day(), MONTH_ABBREVIATIONS[date.month0() as usize])
}
