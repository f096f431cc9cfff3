//! Plain-text findings reporting
//!
//! Human-readable output, not a stable machine contract. Kept out of
//! [`crate::Inspector`] so the core stays a pure data transformation.

use crate::inspector::InspectionOutcome;
use std::io::{self, Write};

/// Write the findings report to `out`
pub fn write_findings<W: Write>(out: &mut W, outcome: &InspectionOutcome) -> io::Result<()> {
    writeln!(out, "Findings: {}", outcome.finding_count())?;
    for finding in outcome.findings() {
        writeln!(out, "\tQuote: {}", finding.quote)?;
        writeln!(out, "\tInfo type: {}", finding.info_type.name)?;
        writeln!(out, "\tLikelihood: {}", finding.likelihood)?;
    }
    Ok(())
}

/// Write the findings report to stdout
pub fn print_findings(outcome: &InspectionOutcome) -> io::Result<()> {
    write_findings(&mut io::stdout().lock(), outcome)
}
