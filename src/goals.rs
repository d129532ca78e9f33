//! Goal Interpolator
//!
//! Goal progress is linear in calendar days between the goal's start and
//! deadline. Goals with numeric endpoints also get an interpolated status
//! ("118kg", "72pts").

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Goal, GoalDefinition};

/// Fraction of the goal window elapsed at `date`, clamped to [0, 1]
pub fn window_fraction(start: NaiveDate, deadline: NaiveDate, date: NaiveDate) -> f64 {
    let total = (deadline - start).num_days();
    if total <= 0 {
        return if date >= deadline { 1.0 } else { 0.0 };
    }
    let elapsed = (date - start).num_days();
    (elapsed as f64 / total as f64).clamp(0.0, 1.0)
}

pub fn interpolate_value(start: f64, target: f64, pct: f64) -> f64 {
    start + (target - start) * pct
}

/// Project a single goal definition onto `date`
pub fn compute_goal(def: &GoalDefinition, date: NaiveDate) -> Goal {
    if def.maintenance {
        return Goal::from_definition(def, 100, def.current_status.clone());
    }

    let (start, deadline) = match (def.start_date, def.deadline_date) {
        (Some(start), Some(deadline)) => (start, deadline),
        _ => return Goal::from_definition(def, def.progress, def.current_status.clone()),
    };

    let pct = window_fraction(start, deadline, date);
    let progress = (pct * 100.0).round() as u8;

    let status = match (def.start_value, def.target_value) {
        (Some(from), Some(to)) => {
            let value = interpolate_value(from, to, pct).round() as i64;
            format!("{}{}", value, def.unit.as_deref().unwrap_or(""))
        }
        _ => def.current_status.clone(),
    };

    Goal::from_definition(def, progress, status)
}

/// Project every goal onto `date`, preserving definition order
pub fn compute_goals(defs: &[GoalDefinition], date: NaiveDate) -> Vec<Goal> {
    debug!(%date, count = defs.len(), "computing goals");
    defs.iter().map(|def| compute_goal(def, date)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, squat_goal};

    #[test]
    fn test_start_date_is_zero() {
        let goal = compute_goal(&squat_goal(), date(2025, 12, 1));
        assert_eq!(goal.progress, 0);
        assert_eq!(goal.current_status, "105kg");
    }

    #[test]
    fn test_deadline_is_hundred() {
        let goal = compute_goal(&squat_goal(), date(2026, 12, 31));
        assert_eq!(goal.progress, 100);
        assert_eq!(goal.current_status, "150kg");
    }

    #[test]
    fn test_clamped_outside_window() {
        let before = compute_goal(&squat_goal(), date(2025, 6, 1));
        let after = compute_goal(&squat_goal(), date(2027, 3, 1));
        assert_eq!(before.progress, 0);
        assert_eq!(before.current_status, "105kg");
        assert_eq!(after.progress, 100);
        assert_eq!(after.current_status, "150kg");
    }

    #[test]
    fn test_midpoint_interpolation() {
        let mut def = squat_goal();
        def.start_date = Some(date(2026, 1, 1));
        def.deadline_date = Some(date(2026, 1, 11));
        def.start_value = Some(100.0);
        def.target_value = Some(110.0);

        let goal = compute_goal(&def, date(2026, 1, 6));
        assert_eq!(goal.progress, 50);
        assert_eq!(goal.current_status, "105kg");
    }

    #[test]
    fn test_maintenance_is_always_complete() {
        let mut def = squat_goal();
        def.maintenance = true;
        def.current_status = "Logrado".to_string();

        for d in [date(2025, 1, 1), date(2026, 5, 5), date(2030, 1, 1)] {
            let goal = compute_goal(&def, d);
            assert_eq!(goal.progress, 100);
            assert_eq!(goal.current_status, "Logrado");
        }
    }

    #[test]
    fn test_time_based_goal_keeps_status() {
        let mut def = squat_goal();
        def.start_value = None;
        def.target_value = None;
        def.current_status = "Base building".to_string();

        let goal = compute_goal(&def, date(2026, 7, 1));
        assert_eq!(goal.current_status, "Base building");
        assert!(goal.progress > 0 && goal.progress < 100);
    }

    #[test]
    fn test_goal_without_window_is_returned_as_configured() {
        let mut def = squat_goal();
        def.start_date = None;
        def.deadline_date = None;
        def.progress = 42;

        let goal = compute_goal(&def, date(2026, 7, 1));
        assert_eq!(goal.progress, 42);
        assert_eq!(goal.current_status, def.current_status);
    }

    #[test]
    fn test_progress_never_decreases() {
        let def = squat_goal();
        let mut last = 0;
        for d in crate::test_utils::days_between(date(2025, 11, 1), date(2027, 1, 31)) {
            let progress = compute_goal(&def, d).progress;
            assert!(progress >= last);
            assert!(progress <= 100);
            last = progress;
        }
    }

    #[test]
    fn test_order_preserved() {
        let mut second = squat_goal();
        second.id = "b".to_string();
        let defs = vec![squat_goal(), second];
        let ids: Vec<String> = compute_goals(&defs, date(2026, 2, 2)).into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["3", "b"]);
    }
}
