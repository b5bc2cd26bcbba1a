use std::env;

use secretaria_core::standing::ApprovalPolicy;

/// Load the institution approval thresholds from the environment.
///
/// `SECRETARIA_MIN_AVERAGE_GRADE` and `SECRETARIA_MIN_ATTENDANCE_RATIO`
/// override the defaults; unparseable values fall back to them.
pub fn approval_policy_from_env() -> ApprovalPolicy {
    let defaults = ApprovalPolicy::default();
    ApprovalPolicy {
        min_average_grade: env::var("SECRETARIA_MIN_AVERAGE_GRADE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.min_average_grade),
        min_attendance_ratio: env::var("SECRETARIA_MIN_ATTENDANCE_RATIO")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.min_attendance_ratio),
    }
}
