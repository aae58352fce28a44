use crate::analysis::Analysis;
use std::io::{self, Write};

/// Write the human readable report: whitespace tallies, every classified token, then the summary
pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    let counts = analysis.get_counts();

    writeln!(out, "Spaces found: {}", counts.spaces)?;
    writeln!(out, "Tabs found: {}", counts.tabs)?;

    for token in analysis.get_tokens() {
        writeln!(out, "{} => {}", token.get_token(), token.get_category())?;
    }

    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "Keywords found: {}", counts.keywords)?;
    writeln!(
        out,
        "Relational operators found: {}",
        counts.relational_operators
    )?;
    writeln!(out, "Valid numbers found: {}", counts.numbers)?;
    writeln!(out, "Valid identifiers found: {}", counts.identifiers)?;

    Ok(())
}
