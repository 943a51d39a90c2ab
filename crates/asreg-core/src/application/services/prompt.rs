//! Prompt reader: one question, one answer.

use tracing::trace;

use crate::{
    application::{
        ApplicationError,
        ports::{Console, LineSource, Tone},
    },
    error::AsregResult,
};

/// Ask `message` and return the operator's answer, or `default` if they
/// just pressed enter.
///
/// Layout: the message on its own line, then `[default]> ` (or just `> `
/// when there is no default) with the cursor left after it.
///
/// One trailing `\n` is stripped, then one trailing `\r`. A read error, end
/// of input, or a last line with no `\n` are all read failures; the caller
/// aborts the run on any of them.
pub fn read_string(
    input: &mut dyn LineSource,
    console: &dyn Console,
    message: &str,
    default: &str,
) -> AsregResult<String> {
    console.line(Tone::Prompt, message).map_err(output_failed)?;
    if !default.is_empty() {
        console
            .inline(Tone::Plain, &format!("[{default}]"))
            .map_err(output_failed)?;
    }
    console.inline(Tone::Plain, "> ").map_err(output_failed)?;

    let raw = input
        .read_line()
        .map_err(|e| ApplicationError::InputFailed {
            reason: e.to_string(),
        })?
        .ok_or_else(end_of_input)?;

    let Some(line) = raw.strip_suffix('\n') else {
        return Err(end_of_input().into());
    };
    let value = line.strip_suffix('\r').unwrap_or(line);

    trace!(prompt = message, answered = !value.is_empty(), "Prompt answered");

    if value.is_empty() {
        Ok(default.to_owned())
    } else {
        Ok(value.to_owned())
    }
}

/// `yes` or `y`, in any case. Anything else, including surrounding
/// whitespace, is a no.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.to_lowercase();
    answer == "yes" || answer == "y"
}

pub(crate) fn output_failed(e: std::io::Error) -> ApplicationError {
    ApplicationError::OutputFailed {
        reason: e.to_string(),
    }
}

fn end_of_input() -> ApplicationError {
    ApplicationError::InputFailed {
        reason: "unexpected end of input".into(),
    }
}
