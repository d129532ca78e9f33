//! Calisthenics Skill Calculator
//!
//! Static skills progress through a fixed ladder of variations, one rung per
//! 8-week block. Inside a block the hold time grows 2 s per week and the last
//! week of the block is a deload (half the hold, one set fewer).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::weeks_elapsed;
use crate::models::{DetailedStep, TaskOverride};

// ---------------------------------------------------------------------------
/// Configuration
// ---------------------------------------------------------------------------

const WEEKS_PER_LEVEL: u32 = 8;
const DELOAD_WEEK_IN_BLOCK: u32 = 7;
const BASE_HOLD_SECONDS: u32 = 6;
const HOLD_STEP_SECONDS: u32 = 2;
const WORKING_SETS: u32 = 4;
const DELOAD_SETS: u32 = 3;

const FRONT_LEVER_LADDER: [&str; 5] = [
    "Tuck Lever",
    "Advanced Tuck",
    "Single Leg",
    "Straddle Halves",
    "Full Lever",
];

const PLANCHE_LADDER: [&str; 4] = [
    "Planche Lean",
    "Pseudo Pushup Hold",
    "Tuck Planche",
    "Adv Tuck Planche",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    FrontLever,
    Planche,
}

impl Skill {
    pub fn ladder(&self) -> &'static [&'static str] {
        match self {
            Skill::FrontLever => &FRONT_LEVER_LADDER,
            Skill::Planche => &PLANCHE_LADDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPrescription {
    pub skill: Skill,
    pub week: u32,
    /// Index into the skill ladder
    pub level: usize,
    pub progression: String,
    pub week_in_block: u32,
    pub deload: bool,
    pub sets: u32,
    pub hold_seconds: u32,
}

// ---------------------------------------------------------------------------
/// Calculator
// ---------------------------------------------------------------------------

pub fn prescribe(date: NaiveDate, skill: Skill) -> SkillPrescription {
    let week = weeks_elapsed(date);
    let ladder = skill.ladder();
    let level = ((week / WEEKS_PER_LEVEL) as usize).min(ladder.len() - 1);
    let week_in_block = week % WEEKS_PER_LEVEL;
    let deload = week_in_block == DELOAD_WEEK_IN_BLOCK;

    let hold = BASE_HOLD_SECONDS + HOLD_STEP_SECONDS * week_in_block;
    let (sets, hold_seconds) = if deload {
        (DELOAD_SETS, hold / 2)
    } else {
        (WORKING_SETS, hold)
    };

    SkillPrescription {
        skill,
        week,
        level,
        progression: ladder[level].to_string(),
        week_in_block,
        deload,
        sets,
        hold_seconds,
    }
}

pub fn calculate(date: NaiveDate, skill: Skill) -> TaskOverride {
    prescribe(date, skill).to_override()
}

impl SkillPrescription {
    fn hold_line(&self) -> String {
        format!("{} series de {} segundos", self.sets, self.hold_seconds)
    }

    pub fn to_override(&self) -> TaskOverride {
        match self.skill {
            Skill::FrontLever => self.front_lever(),
            Skill::Planche => self.planche(),
        }
    }

    fn front_lever(&self) -> TaskOverride {
        let p = &self.progression;
        TaskOverride {
            title: Some(if self.deload {
                "Cali: Deload / Mobility".to_string()
            } else {
                format!("Pull: {} Cycle", p)
            }),
            methodology: Some("Connective Tissue".to_string()),
            focus_metric: Some(format!("TUT: {}x{}s", self.sets, self.hold_seconds)),
            details: Some(vec![
                format!("Progression: {}", p),
                format!("Volume: {} Sets", self.sets),
                if self.deload {
                    "Focus: Recovery"
                } else {
                    "Focus: Scapular Retraction"
                }
                .to_string(),
            ]),
            extended_content: Some(vec![
                DetailedStep::computed(
                    "Main Static",
                    vec![
                        format!("{} Hold", p),
                        self.hold_line(),
                        "Descanso: 3 min completos".to_string(),
                    ],
                ),
                DetailedStep::new(
                    "Dynamic Accessory",
                    &["Dominadas Lastradas 3x5", "Front Lever Raises 3x8"],
                ),
                DetailedStep::new("Connective Health", &["3x1min Dead Hangs (Active Shoulders)"]),
            ]),
            ..Default::default()
        }
    }

    fn planche(&self) -> TaskOverride {
        let p = &self.progression;
        TaskOverride {
            title: Some(if self.deload {
                "Cali: Joint Prep".to_string()
            } else {
                format!("Push: {} Focus", p)
            }),
            methodology: Some("Straight Arm Strength".to_string()),
            focus_metric: Some(format!("Hold: {}s", self.hold_seconds)),
            details: Some(vec![
                format!("Move: {}", p),
                "Protract Hard".to_string(),
                if self.deload { "Light Load" } else { "High Intensity" }.to_string(),
            ]),
            extended_content: Some(vec![
                DetailedStep::new(
                    "Warmup Specific",
                    &["Wrist Routine (GMB)", "Scapular Pushups x 15"],
                ),
                DetailedStep::computed(
                    "Main Static",
                    vec![p.clone(), self.hold_line(), "Bloqueo de codos 100%".to_string()],
                ),
                DetailedStep::new("Dynamic", &["HSPU Progression 3x8", "Dips 3x12"]),
            ]),
            ..Default::default()
        }
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

    fn in_week(week: u32) -> NaiveDate {
        PLAN_EPOCH + Duration::days(week as i64 * 7 + 5)
    }

    #[test]
    fn test_first_week_front_lever() {
        let rx = prescribe(date(2025, 12, 6), Skill::FrontLever);

        assert_eq!(rx.level, 0);
        assert_eq!(rx.progression, "Tuck Lever");
        assert_eq!(rx.sets, 4);
        assert_eq!(rx.hold_seconds, 6);
        assert!(!rx.deload);

        let ov = rx.to_override();
        assert_eq!(ov.title.as_deref(), Some("Pull: Tuck Lever Cycle"));
        assert_eq!(ov.focus_metric.as_deref(), Some("TUT: 4x6s"));
    }

    #[test]
    fn test_hold_grows_inside_block() {
        let holds: Vec<u32> = (0..7).map(|w| prescribe(in_week(w), Skill::Planche).hold_seconds).collect();
        assert_eq!(holds, vec![6, 8, 10, 12, 14, 16, 18]);
    }

    #[test]
    fn test_block_deload() {
        // Week 7: hold would be 20 s, halved with one set fewer
        let rx = prescribe(in_week(7), Skill::FrontLever);
        assert!(rx.deload);
        assert_eq!(rx.sets, 3);
        assert_eq!(rx.hold_seconds, 10);

        let ov = rx.to_override();
        assert_eq!(ov.title.as_deref(), Some("Cali: Deload / Mobility"));
        assert_eq!(ov.details.unwrap()[2], "Focus: Recovery");
    }

    #[test]
    fn test_level_advances_every_eight_weeks() {
        let rx = prescribe(in_week(8), Skill::FrontLever);
        assert_eq!(rx.progression, "Advanced Tuck");
        assert_eq!(rx.hold_seconds, 6);

        let rx = prescribe(in_week(17), Skill::Planche);
        assert_eq!(rx.progression, "Tuck Planche");
        assert_eq!(rx.hold_seconds, 8);
    }

    #[test]
    fn test_level_clamped_to_last_rung() {
        let rx = prescribe(in_week(200), Skill::Planche);
        assert_eq!(rx.progression, "Adv Tuck Planche");
        let rx = prescribe(in_week(200), Skill::FrontLever);
        assert_eq!(rx.progression, "Full Lever");
    }

    #[test]
    fn test_planche_blocks_show_numbers() {
        let ov = calculate(in_week(2), Skill::Planche);
        assert_eq!(ov.title.as_deref(), Some("Push: Planche Lean Focus"));
        assert_eq!(ov.focus_metric.as_deref(), Some("Hold: 10s"));

        let content = ov.extended_content.unwrap();
        assert_eq!(content[1].header, "Main Static");
        assert_eq!(content[1].items[1], "4 series de 10 segundos");
    }

    #[test]
    fn test_deload_holds_less_than_previous_week() {
        for block in 0..6 {
            let deload_week = block * WEEKS_PER_LEVEL + DELOAD_WEEK_IN_BLOCK;
            let deload = prescribe(in_week(deload_week), Skill::FrontLever);
            let before = prescribe(in_week(deload_week - 1), Skill::FrontLever);
            assert!(deload.sets * deload.hold_seconds < before.sets * before.hold_seconds);
        }
    }

    #[test]
    fn test_before_epoch_is_week_zero() {
        let rx = prescribe(date(2025, 11, 20), Skill::FrontLever);
        assert_eq!(rx.week, 0);
        assert_eq!(rx.hold_seconds, 6);
    }
}
