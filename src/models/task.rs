use serde::{Deserialize, Serialize};

/// Discipline of a task. Drives both the card label and the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
  Calisthenics,
  Running,
  Powerlifting,
  LanguagePrep,
  Rest,
  Hybrid,
}

impl TaskType {
  pub fn label(&self) -> &'static str {
    match self {
      TaskType::Calisthenics => "Calisthenics",
      TaskType::Running => "Running",
      TaskType::Powerlifting => "Powerlifting",
      TaskType::LanguagePrep => "TOEFL Prep",
      TaskType::Rest => "Rest",
      TaskType::Hybrid => "Hybrid",
    }
  }

  pub fn icon(&self) -> TaskIcon {
    match self {
      TaskType::Running => TaskIcon::Wind,
      TaskType::LanguagePrep => TaskIcon::BookOpen,
      TaskType::Powerlifting | TaskType::Calisthenics => TaskIcon::Dumbbell,
      TaskType::Rest => TaskIcon::Brain,
      TaskType::Hybrid => TaskIcon::Activity,
    }
  }
}

impl std::fmt::Display for TaskType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

/// Icon the rendering layer draws on a task card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskIcon {
  Wind,
  BookOpen,
  Dumbbell,
  Brain,
  Activity,
}

/// One block of the detail view: a header, its bullet items and an optional note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedStep {
  pub header: String,
  pub items: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub note: Option<String>,
}

impl DetailedStep {
  pub fn new(header: impl Into<String>, items: &[&str]) -> Self {
    Self {
      header: header.into(),
      items: items.iter().map(|s| s.to_string()).collect(),
      note: None,
    }
  }

  /// Block whose items were computed (already owned strings)
  pub fn computed(header: impl Into<String>, items: Vec<String>) -> Self {
    Self {
      header: header.into(),
      items,
      note: None,
    }
  }

  pub fn with_note(mut self, note: impl Into<String>) -> Self {
    self.note = Some(note.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
  pub task_type: TaskType,
  pub title: String,
  /// Short summary lines shown on the card
  pub details: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub duration: Option<String>,
  /// Ordered blocks shown in the detail view
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub extended_content: Vec<DetailedStep>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dynamic_load: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dynamic_set_info: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub methodology: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub focus_metric: Option<String>,
}

impl Task {
  pub fn new(task_type: TaskType, title: &str, details: &[&str], duration: &str) -> Self {
    Self {
      task_type,
      title: title.to_string(),
      details: details.iter().map(|s| s.to_string()).collect(),
      duration: Some(duration.to_string()),
      extended_content: Vec::new(),
      dynamic_load: None,
      dynamic_set_info: None,
      methodology: None,
      focus_metric: None,
    }
  }

  pub fn with_steps(mut self, steps: Vec<DetailedStep>) -> Self {
    self.extended_content = steps;
    self
  }

  pub fn is_rest(&self) -> bool {
    self.task_type == TaskType::Rest
  }

  /// Consumers only open the detail view when there is something to show
  pub fn has_details(&self) -> bool {
    !self.extended_content.is_empty()
  }

  /// Layer an override on top of this task.
  ///
  /// Every field present in the override replaces the template field, lists
  /// included (no concatenation). The task type is never overridden.
  pub fn merged(&self, ov: &TaskOverride) -> Task {
    let mut task = self.clone();
    task.apply(ov);
    task
  }

  pub fn apply(&mut self, ov: &TaskOverride) {
    if let Some(title) = &ov.title {
      self.title = title.clone();
    }
    if let Some(details) = &ov.details {
      self.details = details.clone();
    }
    if let Some(duration) = &ov.duration {
      self.duration = Some(duration.clone());
    }
    if let Some(content) = &ov.extended_content {
      self.extended_content = content.clone();
    }
    if let Some(load) = &ov.dynamic_load {
      self.dynamic_load = Some(load.clone());
    }
    if let Some(set_info) = &ov.dynamic_set_info {
      self.dynamic_set_info = Some(set_info.clone());
    }
    if let Some(methodology) = &ov.methodology {
      self.methodology = Some(methodology.clone());
    }
    if let Some(metric) = &ov.focus_metric {
      self.focus_metric = Some(metric.clone());
    }
  }
}

/// Partial task produced by a calculator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskOverride {
  pub title: Option<String>,
  pub details: Option<Vec<String>>,
  pub duration: Option<String>,
  pub extended_content: Option<Vec<DetailedStep>>,
  pub dynamic_load: Option<String>,
  pub dynamic_set_info: Option<String>,
  pub methodology: Option<String>,
  pub focus_metric: Option<String>,
}
