use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
  Physical,
  Intellectual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalIcon {
  Activity,
  Dumbbell,
  Wind,
  BookOpen,
  Trophy,
}

/// Static goal as configured. `progress` and `current_status` are only the
/// fallback values for goals without a date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDefinition {
  pub id: String,
  pub title: String,
  /// Human description of the target (e.g. "150kg 1RM")
  pub target: String,
  /// Human description of the deadline (e.g. "Dec 2026")
  pub deadline: String,
  pub category: GoalCategory,
  pub icon: GoalIcon,
  pub current_status: String,
  pub progress: u8,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start_value: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub target_value: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub unit: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start_date: Option<NaiveDate>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub deadline_date: Option<NaiveDate>,
  /// Already achieved and only maintained: always reported at 100%
  #[serde(default)]
  pub maintenance: bool,
}

/// Goal as seen on a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
  pub id: String,
  pub title: String,
  pub target: String,
  pub deadline: String,
  pub category: GoalCategory,
  pub icon: GoalIcon,
  pub current_status: String,
  /// 0-100
  pub progress: u8,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_value: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub target_value: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub unit: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_date: Option<NaiveDate>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub deadline_date: Option<NaiveDate>,
}

impl Goal {
  pub fn from_definition(def: &GoalDefinition, progress: u8, current_status: String) -> Self {
    Self {
      id: def.id.clone(),
      title: def.title.clone(),
      target: def.target.clone(),
      deadline: def.deadline.clone(),
      category: def.category,
      icon: def.icon,
      current_status,
      progress,
      start_value: def.start_value,
      target_value: def.target_value,
      unit: def.unit.clone(),
      start_date: def.start_date,
      deadline_date: def.deadline_date,
    }
  }
}
