use std::io::{BufRead, Write};

use anyhow::Result;

use crate::error::RepushError;

/// Ask on stderr whether `destination` is correct. Only "y" proceeds.
pub fn destination(destination: &str) -> Result<()> {
    eprintln!("Generated destination image: {destination}");
    eprint!("Do you agree to tag & push it? [type y to confirm]: ");
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;
    if !is_confirmed(&input) {
        return Err(RepushError::Aborted.into());
    }
    Ok(())
}

fn is_confirmed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
