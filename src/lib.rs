//! cc-stagegate: a PreToolUse hook for Claude Code that vets `git add`.
//!
//! Each invocation runs one policy [`eval::Check`] against the command the
//! agent is about to execute. A clean command produces no output; a violating
//! one produces a single `{"decision": "block", "reason": ...}` line naming
//! what was refused and how to fix it. The hook never runs or rewrites the
//! command itself.
//!
//! # Architecture
//!
//! - **[`parse`]** — Payload decoding, shlex tokenizer, `git add` classification.
//! - **[`rules`]** — Staging rules: blanket staging, basename globs, size, conflict markers.
//! - **[`eval`]** — Check selection, per-command context, violation aggregation.
//! - **[`response`]** — The block/allow reply protocol on stdout.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — Decision logging to `~/.local/share/cc-stagegate/decisions.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Evaluation engine: check selection, decision aggregation, command context.
pub mod eval;
/// File-based decision logging.
pub mod logging;
/// Hook payload decoding and `git add` recognition.
pub mod parse;
/// Reply serialization.
pub mod response;
/// Staging rule trait and the five rule implementations.
pub mod rules;

use eval::{Check, Decision, Gate};
use parse::InterceptionEvent;

/// Evaluate a command against one check using the default config.
///
/// This is the main entry point for tests and simple usage.
/// For CLI usage with a user config, build the [`Gate`] directly.
pub fn evaluate(check: Check, command: &str) -> Decision {
    let config = config::Config::default_config();
    Gate::from_config(check, &config).evaluate(command)
}

/// A decoded event and the decision reached for it.
#[derive(Debug)]
pub struct Interception {
    pub event: InterceptionEvent,
    pub decision: Decision,
}

/// Decode a raw hook payload and evaluate its command.
///
/// Returns `None` for undecodable input, which the caller treats as an
/// allow with nothing to log.
pub fn intercept(gate: &Gate, input: &str) -> Option<Interception> {
    let event = parse::decode(input)?;
    let decision = gate.evaluate(&event.command);
    Some(Interception { event, decision })
}
