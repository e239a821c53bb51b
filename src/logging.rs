use std::fs::OpenOptions;

use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Settings;
use crate::eval::{Check, Decision};

/// Route `log` records to the decision log file.
///
/// Best-effort: if the directory or file cannot be opened, or a logger is
/// already installed, logging stays disabled. Stdout is the reply channel,
/// so nothing is ever logged there.
pub fn init(settings: &Settings) -> bool {
    if !settings.log_decisions {
        return false;
    }
    let Some(path) = settings.log_path() else {
        return false;
    };
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return false;
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    WriteLogger::init(settings.level_filter(), config, file).is_ok()
}

/// Record one decision as a single tab-separated line.
///
/// Blocks are logged at `info`, allows at `debug`.
pub fn log_decision(check: Check, command: &str, decision: &Decision) {
    let line = decision_record(check, command, decision);
    if decision.is_block() {
        log::info!("{line}");
    } else {
        log::debug!("{line}");
    }
}

/// `check \t decision \t command (≤200 chars) \t reason on one line`.
fn decision_record(check: Check, command: &str, decision: &Decision) -> String {
    // Compact single-line fields for the log (replace newlines with "; ")
    let reason_oneline = decision.reason().replace('\n', "; ");
    let cmd_truncated: String = command.chars().take(200).collect::<String>().replace('\n', "; ");
    format!(
        "{check}\t{decision}\t{cmd}\t{reason}",
        check = check.name(),
        decision = decision.as_str(),
        cmd = cmd_truncated,
        reason = reason_oneline,
    )
}
