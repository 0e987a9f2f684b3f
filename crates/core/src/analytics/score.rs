//! Productivity score formula
//!
//! ```text
//! score = tasks_completed * 2 + focus_minutes / 30 + habit_streak_bonus
//! ```
//!
//! rounded to one decimal place, ties away from zero. The habit streak bonus
//! is computed by the habit store (sum of `streak * 0.5` over active habits)
//! and passed in; this module stays a pure function of its inputs.

/// Compute the productivity score for one day's aggregates.
pub fn calculate_score(tasks_completed: u32, focus_minutes: u32, habit_streak_bonus: f64) -> f64 {
    let score =
        f64::from(tasks_completed) * 2.0 + f64::from(focus_minutes) / 30.0 + habit_streak_bonus;
    round_to_tenth(score)
}

/// Round to one decimal place, ties away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        assert_eq!(calculate_score(2, 90, 4.0), 11.0);
        assert_eq!(calculate_score(0, 0, 0.0), 0.0);
        // 1*2 + 55/30 + 0.5 = 4.3333... -> 4.3
        assert_eq!(calculate_score(1, 55, 0.5), 4.3);
    }

    #[test]
    fn rounds_ties_away_from_zero() {
        // 0*2 + 0/30 + 0.25 scales to 2.5, which rounds up to 0.3
        assert_eq!(calculate_score(0, 0, 0.25), 0.3);
    }

    #[test]
    fn focus_minutes_contribute_fractionally() {
        assert_eq!(calculate_score(0, 30, 0.0), 1.0);
        assert_eq!(calculate_score(0, 45, 0.0), 1.5);
    }
}
