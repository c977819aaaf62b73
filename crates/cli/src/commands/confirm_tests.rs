// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::io::Cursor;
use yare::parameterized;

#[parameterized(
    y = { "y", true },
    yes = { "yes", true },
    upper = { "Y", true },
    padded = { "  yes \n", true },
    no = { "n", false },
    empty = { "", false },
    yeah = { "yeah", false },
)]
fn answers(answer: &str, expected: bool) {
    assert_eq!(is_yes(answer), expected);
}

#[test]
fn ask_writes_prompt_and_reads_line() {
    let mut input = Cursor::new("y\nignored\n");
    let mut prompt = Vec::new();
    assert!(ask(&mut input, &mut prompt, "Upload?").unwrap());
    assert_eq!(String::from_utf8(prompt).unwrap(), "Upload? (y/n): ");
}

#[test]
fn ask_end_of_input_refuses() {
    let mut input = Cursor::new("");
    let mut prompt = Vec::new();
    assert!(!ask(&mut input, &mut prompt, "Upload?").unwrap());
}
