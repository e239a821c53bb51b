//! Reply protocol: a block is one JSON line on stdout, an allow is silence.

use std::io::{self, Write};

use crate::eval::{Decision, HookResponse};

/// Write `decision` in the host's reply format.
///
/// `Allow` writes nothing. `Block` writes `{"decision":"block","reason":...}`
/// followed by a single newline. The exit status is never used to signal a
/// block.
pub fn write_response<W: Write>(out: &mut W, decision: &Decision) -> io::Result<()> {
    let Decision::Block(reason) = decision else {
        return Ok(());
    };
    let text = reason.text();
    let response = HookResponse {
        decision: decision.as_str(),
        reason: &text,
    };
    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    out.flush()
}
