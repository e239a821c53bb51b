//! cc-stagegate: PreToolUse hook for Claude Code.
//!
//! Usage: `cc-stagegate <check>` with the hook payload on stdin.
//! Writes a block decision to stdout, or nothing to allow.
//! Always exits 0 on the hook path.

use std::io::Read;

use cc_stagegate::config::Config;
use cc_stagegate::eval::{Check, Gate};
use cc_stagegate::{Interception, logging, response};

fn usage() -> ! {
    let names: Vec<&str> = Check::ALL.iter().map(|c| c.name()).collect();
    eprintln!("usage: cc-stagegate <check> | --list-checks | --dump-config");
    eprintln!("checks: {}", names.join(", "));
    std::process::exit(1);
}

fn main() {
    let config = Config::load();

    let check = match std::env::args().nth(1).as_deref() {
        Some("--dump-config") => {
            match config.to_toml() {
                Ok(s) => print!("{s}"),
                Err(e) => {
                    eprintln!("cc-stagegate: cannot render config: {e}");
                    std::process::exit(1);
                }
            }
            return;
        }
        Some("--list-checks") => {
            for check in Check::ALL {
                println!("{}", check.name());
            }
            return;
        }
        Some(name) => Check::from_name(name).unwrap_or_else(|| usage()),
        None => usage(),
    };

    logging::init(&config.settings);

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        log::debug!("failed to read stdin: {e}");
        return;
    }

    let gate = Gate::from_config(check, &config);
    let Some(Interception { event, decision }) = cc_stagegate::intercept(&gate, &input) else {
        return;
    };
    logging::log_decision(gate.check(), &event.command, &decision);

    let mut out = std::io::stdout().lock();
    if let Err(e) = response::write_response(&mut out, &decision) {
        log::error!("failed to write response: {e}");
    }
}
