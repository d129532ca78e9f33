//! Strength Load Calculator (back squat)
//!
//! Three macro-phases on fixed boundary dates:
//! - Linear hypertrophy: base 70kg, +1.25kg per week, 4x8
//! - Strength base: base 95kg, +1.5kg per week, 5x5
//! - Peaking: 4-week waves on an estimated max that climbs 5kg per wave
//!
//! Every working weight is rounded to the nearest 2.5kg plate increment.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::{format_decimal, format_short_date, weeks_since, ymd, PLAN_EPOCH};
use crate::models::TaskOverride;

// ---------------------------------------------------------------------------
/// Configuration
// ---------------------------------------------------------------------------

pub const STRENGTH_START: NaiveDate = PLAN_EPOCH;
pub const BASE_PHASE_START: NaiveDate = ymd(2026, 4, 1);
pub const PEAK_PHASE_START: NaiveDate = ymd(2026, 7, 1);
pub const STRENGTH_END: NaiveDate = ymd(2026, 12, 31);

pub const PLATE_INCREMENT: f64 = 2.5;

const HYPERTROPHY_BASE: f64 = 70.0;
const HYPERTROPHY_WEEKLY: f64 = 1.25;
const BASE_PHASE_BASE: f64 = 95.0;
const BASE_PHASE_WEEKLY: f64 = 1.5;

const PEAK_CYCLE_WEEKS: u32 = 4;
const PEAK_BASE_MAX: f64 = 125.0;
const PEAK_MAX_PER_CYCLE: f64 = 5.0;

/// Estimated 1RM on day one and on the last day of the plan (chart only)
const CAPACITY_START: f64 = 105.0;
const CAPACITY_TARGET: f64 = 150.0;

/// Squat day, used to anchor the chart samples
const SQUAT_WEEKDAY: Weekday = Weekday::Fri;

struct WaveWeek {
    intensity: f64,
    set_info: &'static str,
}

const WAVE: [WaveWeek; 4] = [
    WaveWeek { intensity: 0.75, set_info: "3 Sets x 5 Reps (Last set AMRAP)" },
    WaveWeek { intensity: 0.85, set_info: "3 Sets x 3 Reps (Last set AMRAP)" },
    WaveWeek { intensity: 0.95, set_info: "5/3/1+ (Heavy Single)" },
    WaveWeek { intensity: 0.50, set_info: "3 Sets x 10 Reps (Speed work)" },
];

const DELOAD_WEEK_IN_CYCLE: u32 = 3;

// ---------------------------------------------------------------------------
/// Prescription
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthPhase {
    LinearHypertrophy,
    StrengthBase,
    Peaking,
}

impl StrengthPhase {
    pub fn for_date(date: NaiveDate) -> Self {
        if date < BASE_PHASE_START {
            Self::LinearHypertrophy
        } else if date < PEAK_PHASE_START {
            Self::StrengthBase
        } else {
            Self::Peaking
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthPrescription {
    pub phase: StrengthPhase,
    pub weeks_in_phase: u32,
    /// Load on the bar, always a multiple of [`PLATE_INCREMENT`]
    pub working_weight: f64,
    pub set_info: String,
    pub deload: bool,
    /// Peaking only: zero-based wave index
    pub cycle: Option<u32>,
    /// Peaking only: estimated 1RM the wave percentages apply to
    pub estimated_max: Option<f64>,
    /// Peaking only
    pub intensity: Option<f64>,
}

/// Nearest multiple of 2.5 (halves round away from zero)
pub fn round_to_plate(weight: f64) -> f64 {
    (weight / PLATE_INCREMENT).round() * PLATE_INCREMENT
}

pub fn format_load(weight: f64) -> String {
    format!("{} KG", format_decimal(weight))
}

/// Squat prescription for `date`
pub fn prescribe(date: NaiveDate) -> StrengthPrescription {
    match StrengthPhase::for_date(date) {
        StrengthPhase::LinearHypertrophy => {
            let weeks = weeks_since(STRENGTH_START, date);
            StrengthPrescription {
                phase: StrengthPhase::LinearHypertrophy,
                weeks_in_phase: weeks,
                working_weight: round_to_plate(HYPERTROPHY_BASE + weeks as f64 * HYPERTROPHY_WEEKLY),
                set_info: "4 Sets x 8 Reps (RIR 2)".to_string(),
                deload: false,
                cycle: None,
                estimated_max: None,
                intensity: None,
            }
        }
        StrengthPhase::StrengthBase => {
            let weeks = weeks_since(BASE_PHASE_START, date);
            StrengthPrescription {
                phase: StrengthPhase::StrengthBase,
                weeks_in_phase: weeks,
                working_weight: round_to_plate(BASE_PHASE_BASE + weeks as f64 * BASE_PHASE_WEEKLY),
                set_info: "5 Sets x 5 Reps".to_string(),
                deload: false,
                cycle: None,
                estimated_max: None,
                intensity: None,
            }
        }
        StrengthPhase::Peaking => {
            let weeks = weeks_since(PEAK_PHASE_START, date);
            let cycle = weeks / PEAK_CYCLE_WEEKS;
            let week_in_cycle = weeks % PEAK_CYCLE_WEEKS;
            let wave = &WAVE[week_in_cycle as usize];
            let estimated_max = PEAK_BASE_MAX + cycle as f64 * PEAK_MAX_PER_CYCLE;

            StrengthPrescription {
                phase: StrengthPhase::Peaking,
                weeks_in_phase: weeks,
                working_weight: round_to_plate(estimated_max * wave.intensity),
                set_info: wave.set_info.to_string(),
                deload: week_in_cycle == DELOAD_WEEK_IN_CYCLE,
                cycle: Some(cycle),
                estimated_max: Some(estimated_max),
                intensity: Some(wave.intensity),
            }
        }
    }
}

impl StrengthPrescription {
    pub fn title(&self) -> String {
        match self.phase {
            StrengthPhase::LinearHypertrophy => "LEG DAY: Linear Hypertrophy".to_string(),
            StrengthPhase::StrengthBase => "LEG DAY: 5x5 Strength Base".to_string(),
            StrengthPhase::Peaking if self.deload => "LEG DAY: Deload".to_string(),
            StrengthPhase::Peaking => {
                format!("LEG DAY: Wendler Cycle {}", self.cycle.unwrap_or(0) + 1)
            }
        }
    }

    pub fn details(&self) -> Vec<String> {
        let weight = format!("Working Weight: {}kg", format_decimal(self.working_weight));
        match self.phase {
            StrengthPhase::LinearHypertrophy => vec![
                weight,
                "Focus: Bar Speed".to_string(),
                "Accessory: RDL 3x10".to_string(),
            ],
            StrengthPhase::StrengthBase => vec![
                weight,
                "Rest: 3-5 mins".to_string(),
                "Accessory: Box Jumps".to_string(),
            ],
            StrengthPhase::Peaking => vec![
                format!(
                    "Cycle Base 1RM: {}kg",
                    format_decimal(self.estimated_max.unwrap_or(PEAK_BASE_MAX))
                ),
                format!("Intensity: {}%", (self.intensity.unwrap_or(0.0) * 100.0).round()),
                self.set_info.clone(),
            ],
        }
    }

    pub fn to_override(&self) -> TaskOverride {
        TaskOverride {
            title: Some(self.title()),
            details: Some(self.details()),
            dynamic_load: Some(format_load(self.working_weight)),
            dynamic_set_info: Some(self.set_info.clone()),
            ..Default::default()
        }
    }
}

/// Friday card override for `date`
pub fn calculate(date: NaiveDate) -> TaskOverride {
    prescribe(date).to_override()
}

// ---------------------------------------------------------------------------
/// Capacity Chart
// ---------------------------------------------------------------------------

/// Weekly samples for the squat chart: theoretical 1RM vs load on the bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitySeries {
    pub dates: Vec<NaiveDate>,
    pub labels: Vec<String>,
    pub capacity_line: Vec<f64>,
    pub working_line: Vec<f64>,
}

fn first_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let ahead = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    date + Duration::days(ahead as i64)
}

/// One sample per squat day from the first one on or after the start date
/// through the end of the year. Working weights come from [`prescribe`], the
/// same call that feeds the daily card.
pub fn capacity_series() -> CapacitySeries {
    let total_days = (STRENGTH_END - STRENGTH_START).num_days() as f64;
    let mut series = CapacitySeries {
        dates: Vec::new(),
        labels: Vec::new(),
        capacity_line: Vec::new(),
        working_line: Vec::new(),
    };

    let mut current = first_weekday_on_or_after(STRENGTH_START, SQUAT_WEEKDAY);
    while current <= STRENGTH_END {
        let elapsed = (current - STRENGTH_START).num_days().max(0) as f64;
        let capacity = CAPACITY_START + (CAPACITY_TARGET - CAPACITY_START) * (elapsed / total_days);

        series.dates.push(current);
        series.labels.push(format_short_date(current));
        series.capacity_line.push(capacity);
        series.working_line.push(prescribe(current).working_weight);

        current += Duration::days(7);
    }

    series
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, days_between};

    fn is_plate_multiple(weight: f64) -> bool {
        let plates = weight / PLATE_INCREMENT;
        (plates - plates.round()).abs() < 1e-9
    }

    #[test]
    fn test_four_weeks_in_is_75kg() {
        // 70 + 4 * 1.25 = 75
        let rx = prescribe(date(2025, 12, 29));
        assert_eq!(rx.phase, StrengthPhase::LinearHypertrophy);
        assert_eq!(rx.weeks_in_phase, 4);
        assert_eq!(rx.working_weight, 75.0);
    }

    #[test]
    fn test_rounding_to_nearest_plate() {
        assert_eq!(round_to_plate(71.25), 72.5);
        assert_eq!(round_to_plate(73.74), 72.5);
        assert_eq!(round_to_plate(73.75), 75.0);
        assert_eq!(round_to_plate(96.5), 97.5);
        assert_eq!(round_to_plate(118.75), 120.0);
    }

    #[test]
    fn test_first_day_hypertrophy_card() {
        let ov = calculate(date(2025, 12, 5));
        assert_eq!(ov.title.as_deref(), Some("LEG DAY: Linear Hypertrophy"));
        assert_eq!(ov.dynamic_load.as_deref(), Some("70 KG"));
        assert_eq!(ov.dynamic_set_info.as_deref(), Some("4 Sets x 8 Reps (RIR 2)"));
        assert_eq!(ov.details.unwrap()[0], "Working Weight: 70kg");
    }

    #[test]
    fn test_strength_base_counts_from_its_own_start() {
        let rx = prescribe(date(2026, 4, 3));
        assert_eq!(rx.phase, StrengthPhase::StrengthBase);
        assert_eq!(rx.weeks_in_phase, 0);
        assert_eq!(rx.working_weight, 95.0);

        // 95 + 2 * 1.5 = 98 -> 97.5
        let rx = prescribe(date(2026, 4, 17));
        assert_eq!(rx.weeks_in_phase, 2);
        assert_eq!(rx.working_weight, 97.5);
        assert_eq!(rx.title(), "LEG DAY: 5x5 Strength Base");
    }

    #[test]
    fn test_peaking_wave() {
        // Week 0 of cycle 0: 125 * 0.75 = 93.75 -> 95
        let rx = prescribe(date(2026, 7, 3));
        assert_eq!(rx.phase, StrengthPhase::Peaking);
        assert_eq!(rx.cycle, Some(0));
        assert_eq!(rx.working_weight, 95.0);
        assert_eq!(rx.title(), "LEG DAY: Wendler Cycle 1");

        // Week 2: 125 * 0.95 = 118.75 -> 120
        let rx = prescribe(date(2026, 7, 17));
        assert_eq!(rx.working_weight, 120.0);
        assert_eq!(rx.set_info, "5/3/1+ (Heavy Single)");

        // Week 3 is the deload
        let rx = prescribe(date(2026, 7, 24));
        assert!(rx.deload);
        assert_eq!(rx.title(), "LEG DAY: Deload");
        assert_eq!(rx.working_weight, 62.5);

        // Cycle 1 raises the estimated max to 130
        let rx = prescribe(date(2026, 7, 31));
        assert_eq!(rx.cycle, Some(1));
        assert_eq!(rx.estimated_max, Some(130.0));
        assert_eq!(rx.title(), "LEG DAY: Wendler Cycle 2");
        assert_eq!(rx.details()[0], "Cycle Base 1RM: 130kg");
        assert_eq!(rx.details()[1], "Intensity: 75%");
    }

    #[test]
    fn test_weights_are_plate_multiples_every_day() {
        for d in days_between(date(2025, 12, 1), date(2026, 12, 31)) {
            let rx = prescribe(d);
            assert!(is_plate_multiple(rx.working_weight), "{} -> {}", d, rx.working_weight);
        }
    }

    #[test]
    fn test_linear_phases_never_decrease() {
        let mut previous: Option<(StrengthPhase, f64)> = None;
        for d in days_between(date(2025, 12, 1), date(2026, 6, 30)) {
            let rx = prescribe(d);
            if let Some((phase, weight)) = previous {
                if phase == rx.phase {
                    assert!(rx.working_weight >= weight, "weight dropped on {}", d);
                }
            }
            previous = Some((rx.phase, rx.working_weight));
        }
    }

    #[test]
    fn test_peaking_max_never_decreases_and_waves_ramp() {
        let mut previous_max = 0.0;
        for d in days_between(PEAK_PHASE_START, STRENGTH_END) {
            let rx = prescribe(d);
            let max = rx.estimated_max.unwrap();
            assert!(max >= previous_max);
            previous_max = max;
        }

        // Within a wave the non-deload weeks ramp up
        let w0 = prescribe(date(2026, 8, 28)).working_weight;
        let w1 = prescribe(date(2026, 9, 4)).working_weight;
        let w2 = prescribe(date(2026, 9, 11)).working_weight;
        assert!(w0 < w1 && w1 < w2);
    }

    #[test]
    fn test_calculator_is_idempotent() {
        let d = date(2026, 9, 11);
        assert_eq!(calculate(d), calculate(d));
    }

    #[test]
    fn test_capacity_series_shape() {
        let series = capacity_series();

        // Fridays from 2025-12-05 through 2026-12-25
        assert_eq!(series.dates.len(), 56);
        assert_eq!(series.dates[0], date(2025, 12, 5));
        assert_eq!(*series.dates.last().unwrap(), date(2026, 12, 25));
        assert!(series.dates.iter().all(|d| d.weekday() == Weekday::Fri));
        assert_eq!(series.labels[0], "5 dic");
        assert_eq!(series.labels.len(), series.capacity_line.len());
        assert_eq!(series.working_line.len(), series.capacity_line.len());
    }

    #[test]
    fn test_capacity_line_is_linear_from_start() {
        let series = capacity_series();
        // 4 days in out of 395
        let expected = 105.0 + 45.0 * (4.0 / 395.0);
        assert!((series.capacity_line[0] - expected).abs() < 1e-9);
        assert!(series.capacity_line.windows(2).all(|w| w[1] > w[0]));
        assert!(*series.capacity_line.last().unwrap() < CAPACITY_TARGET);
    }

    #[test]
    fn test_chart_matches_daily_card() {
        let series = capacity_series();
        for (d, weight) in series.dates.iter().zip(&series.working_line) {
            assert_eq!(calculate(*d).dynamic_load, Some(format_load(*weight)));
        }
    }
}
