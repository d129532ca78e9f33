//! Running Periodization Calculator
//!
//! Quality day (intervals) runs through three macro-phases keyed on plan week:
//! - Aerobic power (weeks 0-7): 4 min reps at controlled tempo pace
//! - Lactate threshold (weeks 8-15): continuous tempo runs
//! - Race specificity (week 16+): 1km repeats at goal pace
//!
//! The long run grows linearly to a cap and is tapered before race day.
//! Every fourth week is a deload week for both workouts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{format_decimal, weeks_elapsed};
use crate::models::{DetailedStep, TaskOverride};

// ---------------------------------------------------------------------------
/// Configuration
// ---------------------------------------------------------------------------

const DELOAD_PERIOD_WEEKS: u32 = 4;
const WARMUP_MINUTES: u32 = 10;
const COOLDOWN_MINUTES: u32 = 10;

const AEROBIC_PHASE_END_WEEK: u32 = 8;
const THRESHOLD_PHASE_END_WEEK: u32 = 16;

const AEROBIC_BASE_REPS: u32 = 4;
const AEROBIC_REP_MINUTES: u32 = 4;
const AEROBIC_REST_MINUTES: u32 = 2;
const AEROBIC_PACE: &str = "5:40 - 5:50/km";

const TEMPO_BASE_MINUTES: u32 = 20;
const TEMPO_WEEKLY_MINUTES: u32 = 2;
const TEMPO_DELOAD_MINUTES: u32 = 15;
const THRESHOLD_PACE: &str = "5:15 - 5:25/km";

const RACE_BASE_REPS: u32 = 5;
const RACE_MAX_REPS: u32 = 8;
/// ~5 min at goal pace + 2 min standing rest per kilometre repeat
const RACE_REP_MINUTES: u32 = 7;
const RACE_PACE: &str = "4:55 - 5:05/km";

const DELOAD_REPS: u32 = 3;

const LONG_RUN_BASE_KM: f64 = 7.0;
const LONG_RUN_WEEKLY_KM: f64 = 0.6;
const LONG_RUN_MAX_KM: f64 = 19.0;
const LONG_RUN_DELOAD_FACTOR: f64 = 0.7;
/// Taper for the June half marathon
const TAPER_START_WEEK: u32 = 24;
const TAPER_FACTOR: f64 = 0.5;
/// Assumed easy pace, minutes per km
const EASY_PACE_MIN_PER_KM: f64 = 7.0;

// ---------------------------------------------------------------------------
/// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunWorkout {
    Intervals,
    LongRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    AerobicPower,
    LactateThreshold,
    RaceSpecificity,
    /// Long runs have a single progression
    Endurance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunPrescription {
    pub workout: RunWorkout,
    pub phase: RunPhase,
    pub week: u32,
    pub deload: bool,
    /// Interval reps (aerobic power, race specificity)
    pub reps: Option<u32>,
    /// Minutes between warm-up and cool-down
    pub main_set_minutes: Option<u32>,
    /// Long run distance, rounded to 0.1 km
    pub distance_km: Option<f64>,
    pub total_minutes: u32,
    pub title: String,
    pub methodology: String,
    pub focus_metric: String,
    pub duration: String,
    pub details: Vec<String>,
    pub extended_content: Vec<DetailedStep>,
    /// Index into `extended_content` of the block carrying the prescribed work
    main_block: usize,
}

/// Week 3, 7, 11, ... of the plan
pub fn is_deload_week(week: u32) -> bool {
    (week + 1) % DELOAD_PERIOD_WEEKS == 0
}

impl RunPrescription {
    /// The main set for intervals, the strategy block for the long run
    pub fn main_block(&self) -> Option<&DetailedStep> {
        self.extended_content.get(self.main_block)
    }

    /// Work volume used to compare weeks: main-set minutes or kilometres
    pub fn volume(&self) -> f64 {
        match self.workout {
            RunWorkout::Intervals => self.main_set_minutes.unwrap_or(0) as f64,
            RunWorkout::LongRun => self.distance_km.unwrap_or(0.0),
        }
    }

    pub fn to_override(&self) -> TaskOverride {
        TaskOverride {
            title: Some(self.title.clone()),
            details: Some(self.details.clone()),
            duration: Some(self.duration.clone()),
            extended_content: Some(self.extended_content.clone()),
            methodology: Some(self.methodology.clone()),
            focus_metric: Some(self.focus_metric.clone()),
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
/// Calculator
// ---------------------------------------------------------------------------

pub fn prescribe(date: NaiveDate, workout: RunWorkout) -> RunPrescription {
    let week = weeks_elapsed(date);
    match workout {
        RunWorkout::Intervals if week < AEROBIC_PHASE_END_WEEK => aerobic_intervals(week),
        RunWorkout::Intervals if week < THRESHOLD_PHASE_END_WEEK => tempo_run(week),
        RunWorkout::Intervals => race_pace_intervals(week),
        RunWorkout::LongRun => long_run(week),
    }
}

pub fn calculate(date: NaiveDate, workout: RunWorkout) -> TaskOverride {
    prescribe(date, workout).to_override()
}

fn warmup_cooldown_total(main_set: u32) -> u32 {
    WARMUP_MINUTES + main_set + COOLDOWN_MINUTES
}

fn aerobic_intervals(week: u32) -> RunPrescription {
    let deload = is_deload_week(week);
    let reps = if deload { DELOAD_REPS } else { AEROBIC_BASE_REPS + week / 2 };
    let main_set = reps * (AEROBIC_REP_MINUTES + AEROBIC_REST_MINUTES);
    let total = warmup_cooldown_total(main_set);

    let main_items = if deload {
        vec![
            format!("{} min Continuous Easy Run (Zone 2)", main_set),
            "Focus on cadence (170+ spm)".to_string(),
        ]
    } else {
        vec![
            format!("{} x {} min @ {}", reps, AEROBIC_REP_MINUTES, AEROBIC_PACE),
            format!("{} min Recovery Jog between reps", AEROBIC_REST_MINUTES),
            "Don't sprint. Stay controlled.".to_string(),
        ]
    };

    RunPrescription {
        workout: RunWorkout::Intervals,
        phase: RunPhase::AerobicPower,
        week,
        deload,
        reps: Some(reps),
        main_set_minutes: Some(main_set),
        distance_km: None,
        total_minutes: total,
        title: if deload {
            "Run: Recovery Jog".to_string()
        } else {
            format!("Run: Aerobic Intervals W{}", week + 1)
        },
        methodology: "Aerobic Power".to_string(),
        focus_metric: if deload {
            "Form Focus".to_string()
        } else {
            format!("Pace: {}", AEROBIC_PACE)
        },
        duration: format!("{} min", total),
        details: vec![
            format!("Total: {} min", total),
            "Intensity: 7/10 RPE".to_string(),
            "Build confidence at speed".to_string(),
        ],
        extended_content: vec![
            DetailedStep::computed(
                "Warmup",
                vec![format!("{} min Very Easy", WARMUP_MINUTES), "Leg Swings & Drills".to_string()],
            ),
            DetailedStep::computed("Main Set", main_items),
            DetailedStep::computed("Cooldown", vec![format!("{} min Walk", COOLDOWN_MINUTES)]),
        ],
        main_block: 1,
    }
}

fn tempo_run(week: u32) -> RunPrescription {
    let deload = is_deload_week(week);
    let tempo = if deload {
        TEMPO_DELOAD_MINUTES
    } else {
        TEMPO_BASE_MINUTES + (week - AEROBIC_PHASE_END_WEEK) * TEMPO_WEEKLY_MINUTES
    };
    let total = warmup_cooldown_total(tempo);

    RunPrescription {
        workout: RunWorkout::Intervals,
        phase: RunPhase::LactateThreshold,
        week,
        deload,
        reps: None,
        main_set_minutes: Some(tempo),
        distance_km: None,
        total_minutes: total,
        title: if deload {
            "Run: Deload".to_string()
        } else {
            format!("Run: Tempo Run W{}", week + 1)
        },
        methodology: "Lactate Threshold".to_string(),
        focus_metric: format!("Sustain: {}", THRESHOLD_PACE),
        duration: format!("{} min", total),
        details: vec!["Continuous Effort".to_string(), "Hard but sustainable".to_string()],
        extended_content: vec![
            DetailedStep::computed(
                "Warmup",
                vec![format!("{} min Progressive", WARMUP_MINUTES), "2 x 20s Strides".to_string()],
            ),
            DetailedStep::computed(
                "Main Set",
                vec![
                    format!("{} min Continuous Run", tempo),
                    format!("Target Pace: {}", THRESHOLD_PACE),
                    "Mental Focus: Don't quit when it burns.".to_string(),
                ],
            ),
            DetailedStep::computed("Cooldown", vec![format!("{} min easy", COOLDOWN_MINUTES)]),
        ],
        main_block: 1,
    }
}

fn race_pace_intervals(week: u32) -> RunPrescription {
    let deload = is_deload_week(week);
    let reps = if deload {
        DELOAD_REPS
    } else {
        (RACE_BASE_REPS + (week - THRESHOLD_PHASE_END_WEEK) / 2).min(RACE_MAX_REPS)
    };
    let main_set = reps * RACE_REP_MINUTES;
    let total = warmup_cooldown_total(main_set);

    RunPrescription {
        workout: RunWorkout::Intervals,
        phase: RunPhase::RaceSpecificity,
        week,
        deload,
        reps: Some(reps),
        main_set_minutes: Some(main_set),
        distance_km: None,
        total_minutes: total,
        title: if deload {
            "Run: Tapering Speed".to_string()
        } else {
            "Run: Race Pace Intervals".to_string()
        },
        methodology: "Race Specificity".to_string(),
        focus_metric: format!("Goal Pace: {}", RACE_PACE),
        duration: format!("{} min", total),
        details: vec![format!("{} x 1km Repeats", reps), "Simulating Race Day".to_string()],
        extended_content: vec![
            DetailedStep::computed(
                "Warmup",
                vec![format!("{} min Easy", WARMUP_MINUTES), "4 x Strides (Race pace)".to_string()],
            ),
            DetailedStep::computed(
                "The Exam",
                vec![
                    format!("{} x 1000m Intervals", reps),
                    format!("MUST HIT: {}", RACE_PACE),
                    "Rest: 2 min standing/walking".to_string(),
                ],
            ),
            DetailedStep::computed("Cooldown", vec![format!("{} min easy", COOLDOWN_MINUTES)]),
        ],
        main_block: 1,
    }
}

fn long_run_distance(week: u32, deload: bool) -> f64 {
    let mut distance = (LONG_RUN_BASE_KM + week as f64 * LONG_RUN_WEEKLY_KM).min(LONG_RUN_MAX_KM);
    if deload {
        distance *= LONG_RUN_DELOAD_FACTOR;
    }
    if week >= TAPER_START_WEEK {
        distance *= TAPER_FACTOR;
    }
    (distance * 10.0).round() / 10.0
}

fn long_run(week: u32) -> RunPrescription {
    let deload = is_deload_week(week);
    let distance = long_run_distance(week, deload);
    let minutes = (distance * EASY_PACE_MIN_PER_KM).round() as u32;
    let km = format_decimal(distance);

    RunPrescription {
        workout: RunWorkout::LongRun,
        phase: RunPhase::Endurance,
        week,
        deload,
        reps: None,
        main_set_minutes: None,
        distance_km: Some(distance),
        total_minutes: minutes,
        title: if deload {
            "Run: Deload Long Run".to_string()
        } else {
            "Run: Time on Feet".to_string()
        },
        methodology: "Aerobic Base (Zone 2)".to_string(),
        focus_metric: format!("{} KM", km),
        duration: format!("~{} min", minutes),
        details: vec![
            format!("Distance: {} km", km),
            "Pace: IGNORE SPEED.".to_string(),
            if deload { "Active Recovery" } else { "Just finish it." }.to_string(),
        ],
        extended_content: vec![
            DetailedStep::computed(
                "Strategy",
                vec![
                    format!("Objetivo: Completar {} km.", km),
                    "RITMO: Muy suave (6:45 - 7:00/km).".to_string(),
                    "Si te falta el aire, CAMINA. No es vergüenza, es estrategia.".to_string(),
                ],
            ),
            DetailedStep::new(
                "Checklist",
                &["Zapatillas cómodas", "Podcast largo", "Hidratación obligatoria"],
            ),
        ],
        main_block: 0,
    }
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::PLAN_EPOCH;
    use crate::test_utils::date;
    use chrono::Duration;

    /// A Tuesday (quality day) in the given plan week
    fn tuesday_of_week(week: u32) -> NaiveDate {
        PLAN_EPOCH + Duration::days(week as i64 * 7 + 1)
    }

    /// A Saturday (long run day) in the given plan week
    fn saturday_of_week(week: u32) -> NaiveDate {
        PLAN_EPOCH + Duration::days(week as i64 * 7 + 5)
    }

    #[test]
    fn test_deload_is_periodic() {
        let deloads: Vec<u32> = (0..20).filter(|w| is_deload_week(*w)).collect();
        assert_eq!(deloads, vec![3, 7, 11, 15, 19]);
        for week in 0..100 {
            assert_eq!(is_deload_week(week), is_deload_week(week + DELOAD_PERIOD_WEEKS));
        }
    }

    #[test]
    fn test_first_week_aerobic_intervals() {
        let rx = prescribe(date(2025, 12, 2), RunWorkout::Intervals);

        assert_eq!(rx.phase, RunPhase::AerobicPower);
        assert_eq!(rx.reps, Some(4));
        assert_eq!(rx.main_set_minutes, Some(24));
        assert_eq!(rx.total_minutes, 44);
        assert_eq!(rx.title, "Run: Aerobic Intervals W1");
        assert_eq!(rx.duration, "44 min");
        assert_eq!(rx.focus_metric, "Pace: 5:40 - 5:50/km");
        assert_eq!(rx.main_block().unwrap().items[0], "4 x 4 min @ 5:40 - 5:50/km");
    }

    #[test]
    fn test_aerobic_reps_grow_every_two_weeks() {
        let reps: Vec<u32> = [0, 1, 2, 4, 5, 6]
            .iter()
            .map(|w| prescribe(tuesday_of_week(*w), RunWorkout::Intervals).reps.unwrap())
            .collect();
        assert_eq!(reps, vec![4, 4, 5, 6, 6, 7]);
    }

    #[test]
    fn test_aerobic_deload_is_easy_continuous_run() {
        let rx = prescribe(tuesday_of_week(3), RunWorkout::Intervals);

        assert!(rx.deload);
        assert_eq!(rx.title, "Run: Recovery Jog");
        assert_eq!(rx.focus_metric, "Form Focus");
        // 3 reps worth of minutes, run continuously
        assert_eq!(rx.main_set_minutes, Some(18));
        assert_eq!(rx.main_block().unwrap().items[0], "18 min Continuous Easy Run (Zone 2)");
        assert_eq!(rx.duration, "38 min");
    }

    #[test]
    fn test_tempo_phase() {
        let rx = prescribe(tuesday_of_week(10), RunWorkout::Intervals);
        assert_eq!(rx.phase, RunPhase::LactateThreshold);
        // 20 + (10 - 8) * 2
        assert_eq!(rx.main_set_minutes, Some(24));
        assert_eq!(rx.title, "Run: Tempo Run W11");
        assert_eq!(rx.duration, "44 min");
        assert_eq!(rx.main_block().unwrap().items[0], "24 min Continuous Run");

        let deload = prescribe(tuesday_of_week(11), RunWorkout::Intervals);
        assert_eq!(deload.title, "Run: Deload");
        assert_eq!(deload.main_set_minutes, Some(15));
    }

    #[test]
    fn test_race_pace_reps_are_capped() {
        let rx = prescribe(tuesday_of_week(16), RunWorkout::Intervals);
        assert_eq!(rx.phase, RunPhase::RaceSpecificity);
        assert_eq!(rx.reps, Some(5));
        assert_eq!(rx.details[0], "5 x 1km Repeats");
        assert_eq!(rx.main_block().unwrap().header, "The Exam");

        let late = prescribe(tuesday_of_week(40), RunWorkout::Intervals);
        assert_eq!(late.reps, Some(RACE_MAX_REPS));
        assert_eq!(late.main_set_minutes, Some(56));
        assert_eq!(late.duration, "76 min");
    }

    #[test]
    fn test_long_run_progression() {
        let rx = prescribe(saturday_of_week(0), RunWorkout::LongRun);
        assert_eq!(rx.distance_km, Some(7.0));
        assert_eq!(rx.focus_metric, "7 KM");
        assert_eq!(rx.duration, "~49 min");
        assert_eq!(rx.title, "Run: Time on Feet");

        // 7 + 2 * 0.6 = 8.2 km, 57.4 -> 57 min
        let rx = prescribe(saturday_of_week(2), RunWorkout::LongRun);
        assert_eq!(rx.distance_km, Some(8.2));
        assert_eq!(rx.duration, "~57 min");
        assert_eq!(rx.main_block().unwrap().items[0], "Objetivo: Completar 8.2 km.");
    }

    #[test]
    fn test_long_run_deload_and_cap() {
        // 7 + 3 * 0.6 = 8.8 * 0.7 = 6.16 -> 6.2
        let rx = prescribe(saturday_of_week(3), RunWorkout::LongRun);
        assert!(rx.deload);
        assert_eq!(rx.distance_km, Some(6.2));
        assert_eq!(rx.title, "Run: Deload Long Run");
        assert_eq!(rx.details[2], "Active Recovery");

        // 7 + 22 * 0.6 = 20.2, capped at 19
        let rx = prescribe(saturday_of_week(22), RunWorkout::LongRun);
        assert_eq!(rx.distance_km, Some(19.0));
    }

    #[test]
    fn test_long_run_taper() {
        // Capped 19 km halved
        let rx = prescribe(saturday_of_week(24), RunWorkout::LongRun);
        assert_eq!(rx.distance_km, Some(9.5));
        assert_eq!(rx.duration, "~67 min");
    }

    #[test]
    fn test_deload_volume_below_previous_week() {
        for week in 1..60 {
            if !is_deload_week(week) {
                continue;
            }
            for workout in [RunWorkout::Intervals, RunWorkout::LongRun] {
                let day = |w| match workout {
                    RunWorkout::Intervals => tuesday_of_week(w),
                    RunWorkout::LongRun => saturday_of_week(w),
                };
                let deload = prescribe(day(week), workout);
                let before = prescribe(day(week - 1), workout);
                assert!(
                    deload.volume() < before.volume(),
                    "week {} {:?}: {} !< {}",
                    week,
                    workout,
                    deload.volume(),
                    before.volume()
                );
            }
        }
    }

    #[test]
    fn test_displayed_numbers_match_formula() {
        for week in 0..60 {
            let rx = prescribe(tuesday_of_week(week), RunWorkout::Intervals);
            let main_set = rx.main_set_minutes.unwrap();
            assert_eq!(rx.total_minutes, WARMUP_MINUTES + main_set + COOLDOWN_MINUTES);
            assert_eq!(rx.duration, format!("{} min", rx.total_minutes));
            let main_text = rx.main_block().unwrap().items.join(" ");
            let shows_reps = rx.reps.map_or(false, |r| main_text.contains(&format!("{} x", r)));
            let shows_minutes = main_text.contains(&format!("{} min", main_set));
            assert!(shows_reps || shows_minutes, "week {}: {}", week, main_text);
        }
    }

    #[test]
    fn test_override_carries_all_fields() {
        let ov = calculate(tuesday_of_week(5), RunWorkout::Intervals);
        assert!(ov.title.is_some());
        assert!(ov.methodology.is_some());
        assert!(ov.focus_metric.is_some());
        assert!(ov.duration.is_some());
        assert_eq!(ov.extended_content.map(|c| c.len()), Some(3));
        assert!(ov.dynamic_load.is_none());
    }

    #[test]
    fn test_calculator_is_idempotent() {
        let d = saturday_of_week(9);
        assert_eq!(prescribe(d, RunWorkout::LongRun), prescribe(d, RunWorkout::LongRun));
        assert_eq!(calculate(d, RunWorkout::Intervals), calculate(d, RunWorkout::Intervals));
    }
}
