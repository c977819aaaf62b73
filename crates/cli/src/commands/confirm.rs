// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{BufRead, Write};

use crate::error::Result;

/// Whether `answer` accepts: `y` or `yes`, in any case.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask `question` on `prompt` and read one line of `input`.
///
/// End of input counts as a refusal.
pub fn ask<R: BufRead, W: Write>(input: &mut R, prompt: &mut W, question: &str) -> Result<bool> {
    write!(prompt, "{question} (y/n): ")?;
    prompt.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(prompt)?;
        return Ok(false);
    }
    Ok(is_yes(&answer))
}

#[cfg(test)]
#[path = "confirm_tests.rs"]
mod tests;
