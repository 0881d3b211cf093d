//! Common helpers for driving the compiled binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Run `poem2csv` with `input` on stdin and collect its output.
///
/// # Panics
/// Panics if the binary cannot be spawned or stdin cannot be written.
pub fn run_with_stdin(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_poem2csv"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn poem2csv");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input)
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for poem2csv")
}

/// Sample text with multi-line paragraphs, punctuation, and a blank run.
pub fn sample_poem() -> &'static str {
    "Roses are red,\nviolets are blue.\n\nSugar is \"sweet\"\n\n\n\nand so are you."
}
