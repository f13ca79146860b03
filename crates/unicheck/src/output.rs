//! Status line rendering.
//!
//! Monitoring systems read the first line of stdout as the service output,
//! so everything a check reports fits on one line. Optional performance
//! data follows a `|` in the usual `label=value;warn;crit;min;max` form.

use std::io::{self, Write};

use unicheck_core::Measurement;

use crate::error::CliError;

/// `"<LEVEL> - <mode> utilization in %: <value>"`, plus perfdata on request.
pub fn status_line(m: &Measurement, perfdata: bool) -> String {
    let line = format!("{} - {} utilization in %: {}", m.status, m.mode, m.observed);
    if perfdata {
        format!(
            "{line} | {mode}={value}%;{warn};{crit};0;100",
            mode = m.mode,
            value = m.observed,
            warn = m.thresholds.warning,
            crit = m.thresholds.critical,
        )
    } else {
        line
    }
}

/// `"UNKNOWN - <diagnostic>"`.
pub fn error_line(err: &CliError) -> String {
    format!("UNKNOWN - {err}")
}

/// Write the line to stdout and flush before the process exits.
pub fn print_line(line: &str) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{line}");
    let _ = stdout.flush();
}
