use crate::app::models::ProbeOutcome;
use anyhow::{Context, Result};
use std::process::Command;

pub const DEFAULT_PROGRAM: &str = "pkgconf";
pub const DEFAULT_LIBRARY: &str = "gl";

/// Runs `<program> <library> --cflags --libs` and waits for it to exit.
///
/// A non-zero exit is an `Unavailable` outcome. Failing to start the
/// program at all (missing, not executable) is returned as an error.
pub fn query(program: &str, library: &str) -> Result<ProbeOutcome> {
    log::debug!("Running {} {} --cflags --libs", program, library);

    let output = Command::new(program)
        .arg(library)
        .arg("--cflags")
        .arg("--libs")
        .output()
        .with_context(|| format!("Failed to execute {}", program))?;

    if !output.status.success() {
        return Ok(ProbeOutcome::Unavailable {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let (cflags, libs) = split_flags(&String::from_utf8_lossy(&output.stdout));
    Ok(ProbeOutcome::Available { cflags, libs })
}

/// Splits combined pkg-config output into compiler flags and linker flags.
///
/// Linker flags are `-l`, `-L`, `-Wl,` and `-framework <name>`; everything else
/// is a compiler flag.
fn split_flags(stdout: &str) -> (Vec<String>, Vec<String>) {
    let mut cflags = Vec::new();
    let mut libs = Vec::new();

    let mut tokens = tokenize(stdout).into_iter();
    while let Some(token) = tokens.next() {
        if token == "-framework" {
            libs.push(token);
            libs.extend(tokens.next());
        } else if token.starts_with("-l") || token.starts_with("-L") || token.starts_with("-Wl,") {
            libs.push(token);
        } else {
            cflags.push(token);
        }
    }

    (cflags, libs)
}

/// Whitespace tokenizer that honors pkg-config's backslash escapes (`\ ` inside paths).
fn tokenize(stdout: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    let mut chars = stdout.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => current.push('\\'),
            },
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
