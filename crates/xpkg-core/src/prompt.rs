//! Interactive yes/no questions.

use std::io::{self, BufRead, Write};

/// Strip leading and trailing whitespace.
pub fn trim(s: &str) -> &str {
    s.trim()
}

/// Ask `question`, defaulting to yes on an empty answer.
///
/// # Errors
///
/// Returns an I/O error if the prompt cannot be written or the answer read.
pub fn yes_no<R: BufRead, W: Write>(input: R, output: W, question: &str) -> io::Result<bool> {
    ask(input, output, question, true)
}

/// Ask `question`, defaulting to no on an empty answer.
///
/// # Errors
///
/// Returns an I/O error if the prompt cannot be written or the answer read.
pub fn no_yes<R: BufRead, W: Write>(input: R, output: W, question: &str) -> io::Result<bool> {
    ask(input, output, question, false)
}

/// Ask on the terminal (stdin/stderr). `preset` is the answer on an empty reply.
///
/// # Errors
///
/// Returns an I/O error if the terminal cannot be used.
pub fn confirm(question: &str, preset: bool) -> io::Result<bool> {
    ask(io::stdin().lock(), io::stderr().lock(), question, preset)
}

fn ask<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    question: &str,
    preset: bool,
) -> io::Result<bool> {
    let choices = if preset { "[YES/no]" } else { "[yes/NO]" };
    write!(output, "{question} {choices} ")?;
    output.flush()?;

    // Raw bytes: a reply that is not valid UTF-8 is just another "no".
    let mut response = Vec::new();
    if input.read_until(b'\n', &mut response)? == 0 {
        return Ok(false);
    }

    let answer = response.trim_ascii();
    if answer.is_empty() {
        return Ok(preset);
    }
    Ok(answer.eq_ignore_ascii_case(b"yes"))
}
