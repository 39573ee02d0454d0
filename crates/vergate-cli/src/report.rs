//! Rendering of gate results for humans and for CI tooling.

use std::io::{self, Write};

use serde::Serialize;
use vergate_core::GateDecision;

use crate::source::SourcedVersion;

/// Everything a run produced, as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct GateReport<'a> {
    pub candidate_source: &'a str,
    pub reference_source: &'a str,
    #[serde(flatten)]
    pub decision: &'a GateDecision,
}

impl<'a> GateReport<'a> {
    pub fn new(
        candidate: &'a SourcedVersion,
        reference: &'a SourcedVersion,
        decision: &'a GateDecision,
    ) -> Self {
        Self {
            candidate_source: &candidate.origin,
            reference_source: &reference.origin,
            decision,
        }
    }

    /// Plain text: one line per version, then the verdict line.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "candidate: {} ({})",
            self.decision.candidate, self.candidate_source
        )?;
        writeln!(
            out,
            "reference: {} ({})",
            self.decision.reference, self.reference_source
        )?;
        writeln!(
            out,
            "{}: {}",
            self.decision.verdict,
            self.decision.explanation()
        )
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}
