use strum::Display;

/// Outcome of comparing a metric against its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warning,
    Critical,
}

impl Status {
    /// Monitoring-plugin exit code for this status.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
        }
    }
}

/// Classify `value` against the warning and critical thresholds.
///
/// Critical is checked first, so it wins whenever `value >= crit`, even
/// when `warn >= crit`.
pub fn classify(value: i64, warn: i64, crit: i64) -> Status {
    if value >= crit {
        Status::Critical
    } else if value >= warn {
        Status::Warning
    } else {
        Status::Ok
    }
}
