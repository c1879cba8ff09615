use std::io::Write;

use crate::error::Result;
use crate::report::format::{banner, rule, BANNER_WIDTH};

pub const TAKEAWAYS: [&str; 5] = [
    "Decision trees = chains of Boolean operations",
    "Neural networks = complex combinations of Boolean logic",
    "XOR shows why we need multiple layers (deep learning)",
    "Vectorization = applying Boolean ops to entire datasets",
    "Your digital logic skills directly apply to ML!",
];

pub fn render<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{}", banner("KEY TAKEAWAYS:"))?;
    for (i, line) in TAKEAWAYS.iter().enumerate() {
        writeln!(out, "{}. {line}", i + 1)?;
    }
    writeln!(out, "{}", rule(BANNER_WIDTH))?;
    writeln!(out)?;
    Ok(())
}
