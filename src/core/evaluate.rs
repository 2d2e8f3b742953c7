//! Threshold evaluation - pure budget math with no I/O.
//!
//! Given a goal and the current spend, decides whether a warning or exceeded
//! condition holds and builds the notification text. The percentage carried
//! on a breach is clamped to 100 because that is what gets stored and
//! displayed; the exceeded message reports the true overage amount, which is
//! deliberately not clamped.

use crate::entities::{AlertType, Category};

/// Utilization at which a warning fires, in percent.
pub const WARNING_THRESHOLD_PERCENT: f64 = 80.0;
/// Utilization at which the budget counts as exceeded, in percent.
pub const EXCEEDED_THRESHOLD_PERCENT: f64 = 100.0;

/// A threshold crossing produced by [`evaluate_threshold`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdBreach {
    /// Which threshold was crossed
    pub alert_type: AlertType,
    /// Utilization percentage, clamped to 100 for storage and display
    pub percentage: f64,
    /// Human-readable notification text
    pub message: String,
}

/// Calculates budget utilization as a percentage of the goal.
///
/// A goal of zero (or less) yields 0 regardless of spend: no goal means
/// nothing to measure against, and the guard keeps the division defined.
/// The result is unclamped; 150% utilization returns 150.
#[must_use]
pub fn utilization_percent(spent: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        (spent / goal) * 100.0
    } else {
        0.0
    }
}

/// Evaluates a category's spend against its goal.
///
/// Returns `None` below 80% utilization. At 80% and above (but under 100%)
/// the breach is a warning whose message reports the utilization to one
/// decimal place. At 100% and above the breach is exceeded and the message
/// reports the overage amount `|goal - spent|` without clamping, even though
/// the stored percentage is capped at 100.
#[must_use]
pub fn evaluate_threshold(category: Category, goal: f64, spent: f64) -> Option<ThresholdBreach> {
    let percentage = utilization_percent(spent, goal);

    if percentage >= EXCEEDED_THRESHOLD_PERCENT {
        let overage = (goal - spent).abs();
        Some(ThresholdBreach {
            alert_type: AlertType::Exceeded,
            percentage: percentage.min(100.0),
            message: format!("You've exceeded your {category} budget by ₹{overage:.2}"),
        })
    } else if percentage >= WARNING_THRESHOLD_PERCENT {
        Some(ThresholdBreach {
            alert_type: AlertType::Warning,
            percentage,
            message: format!("You've used {percentage:.1}% of your {category} budget"),
        })
    } else {
        None
    }
}
