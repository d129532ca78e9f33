//! Developer CLI: inspect the plan for the live or a simulated date.

use std::fmt::Write as _;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::assembler::PlanEngine;
use crate::calendar::{parse_date, PhaseStatus};
use crate::commands::{self, DashboardSnapshot};
use crate::error::PlanError;
use crate::models::{Goal, Task};
use crate::strength::CapacitySeries;

#[derive(Debug, Parser)]
#[command(name = "athlete-os", version, about = "Daily training and study plan engine")]
pub struct Cli {
    /// Simulate this date (YYYY-MM-DD) instead of today.
    #[arg(long, global = true, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the phase and both tasks for the date.
    Today,
    /// Show goal progress for the date.
    Goals,
    /// Show the weekly squat capacity series.
    SquatChart,
    /// Show the macrocycle timeline.
    Phases,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

/// Render a command's output for `date`
pub fn render(
    engine: &PlanEngine,
    command: Command,
    date: NaiveDate,
    json: bool,
) -> Result<String, PlanError> {
    match command {
        Command::Today => {
            let snapshot = commands::dashboard_snapshot(engine, date);
            if json {
                Ok(serde_json::to_string_pretty(&snapshot)?)
            } else {
                Ok(render_today(&snapshot))
            }
        }
        Command::Goals => {
            let goals = commands::goals_for(engine, date);
            if json {
                Ok(serde_json::to_string_pretty(&goals)?)
            } else {
                Ok(render_goals(&goals))
            }
        }
        Command::SquatChart => {
            let series = commands::squat_chart(engine);
            if json {
                Ok(serde_json::to_string_pretty(&series)?)
            } else {
                Ok(render_squat_chart(&series))
            }
        }
        Command::Phases => {
            let timeline = engine.timeline(date);
            if json {
                return Ok(serde_json::to_string_pretty(&timeline)?);
            }
            let mut out = String::new();
            for entry in &timeline {
                let marker = match entry.status {
                    PhaseStatus::Completed => "done",
                    PhaseStatus::Current => "NOW ",
                    PhaseStatus::Upcoming => "next",
                };
                let _ = writeln!(
                    out,
                    "[{}] {}  {}  ({})",
                    marker, entry.name, entry.range_label, entry.focus
                );
            }
            Ok(out)
        }
    }
}

fn render_task(out: &mut String, heading: &str, task: &Task) {
    let duration = task.duration.as_deref().unwrap_or("-");
    let _ = writeln!(out, "{} [{}] {} ({})", heading, task.task_type, task.title, duration);
    for detail in &task.details {
        let _ = writeln!(out, "  - {}", detail);
    }
    if let Some(methodology) = &task.methodology {
        let _ = writeln!(out, "  Methodology: {}", methodology);
    }
    if let Some(metric) = &task.focus_metric {
        let _ = writeln!(out, "  Focus: {}", metric);
    }
    if let Some(load) = &task.dynamic_load {
        let set_info = task.dynamic_set_info.as_deref().unwrap_or("");
        let _ = writeln!(out, "  Load: {} | {}", load, set_info);
    }
    for step in &task.extended_content {
        let _ = writeln!(out, "  # {}", step.header);
        for item in &step.items {
            let _ = writeln!(out, "      {}", item);
        }
        if let Some(note) = &step.note {
            let _ = writeln!(out, "      Note: {}", note);
        }
    }
}

fn render_today(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", snapshot.date_label);
    let _ = writeln!(out, "{}", snapshot.phase_label);

    match &snapshot.plan {
        Some(plan) => {
            out.push('\n');
            render_task(&mut out, "PHYSICAL", &plan.physical);
            out.push('\n');
            render_task(&mut out, "INTELLECTUAL", &plan.intellectual);
        }
        None => {
            let _ = writeln!(out, "\nFuera de Temporada: la fecha está fuera del plan programado.");
        }
    }

    if let Some(squat) = &snapshot.squat_estimate {
        let _ = writeln!(out, "\n{}: {}{}", squat.label, squat.value, squat.unit);
    }
    if let Some(toefl) = &snapshot.toefl_estimate {
        let _ = writeln!(out, "{}: {}{}", toefl.label, toefl.value, toefl.unit);
    }
    out
}

fn render_goals(goals: &[Goal]) -> String {
    let mut out = String::new();
    for goal in goals {
        let _ = writeln!(
            out,
            "{:<16} {:>3}%  {:<18} target: {} ({})",
            goal.title, goal.progress, goal.current_status, goal.target, goal.deadline
        );
    }
    out
}

fn render_squat_chart(series: &CapacitySeries) -> String {
    let mut out = String::from("date      capacity  working\n");
    for i in 0..series.dates.len() {
        let _ = writeln!(
            out,
            "{:<9} {:>8.1}  {:>7.1}",
            series.labels[i], series.capacity_line[i], series.working_line[i]
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_parse_cli_flags() {
        let cli = Cli::try_parse_from(["athlete-os", "--date", "2026-04-01", "--json", "today"]).unwrap();
        assert_eq!(cli.date, Some(date(2026, 4, 1)));
        assert!(cli.json);
        assert_eq!(cli.command, Command::Today);

        let cli = Cli::try_parse_from(["athlete-os", "squat-chart"]).unwrap();
        assert_eq!(cli.command, Command::SquatChart);
        assert!(cli.date.is_none());
    }

    #[test]
    fn test_bad_date_flag_rejected() {
        assert!(Cli::try_parse_from(["athlete-os", "--date", "01/04/2026", "today"]).is_err());
    }

    #[test]
    fn test_render_today_text() {
        let engine = PlanEngine::builtin();
        let out = render(&engine, Command::Today, date(2026, 1, 2), false).unwrap();

        assert!(out.starts_with("Viernes, 2 de Enero de 2026\nFase 1: Base Building"));
        assert!(out.contains("PHYSICAL [Powerlifting] LEG DAY: Linear Hypertrophy"));
        assert!(out.contains("Load: 75 KG | 4 Sets x 8 Reps (RIR 2)"));
    }

    #[test]
    fn test_render_off_season_text() {
        let engine = PlanEngine::builtin();
        let out = render(&engine, Command::Today, date(2027, 3, 1), false).unwrap();
        assert!(out.contains("OFF SEASON"));
        assert!(out.contains("Fuera de Temporada"));
    }

    #[test]
    fn test_render_json_is_valid() {
        let engine = PlanEngine::builtin();
        for command in [Command::Today, Command::Goals, Command::SquatChart, Command::Phases] {
            let out = render(&engine, command, date(2026, 2, 14), true).unwrap();
            let value: serde_json::Value = serde_json::from_str(&out).unwrap();
            assert!(!value.is_null());
        }
    }

    #[test]
    fn test_render_phases_marks_current() {
        let engine = PlanEngine::builtin();
        let out = render(&engine, Command::Phases, date(2026, 8, 1), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[done]"));
        assert!(lines[2].starts_with("[NOW ] Fase 3: Max Strength"));
    }
}
