//! Version bump gate.
//!
//! [`decide`] parses a candidate and a reference version string and produces
//! a [`GateDecision`], the pass/fail decision that blocks or allows a merge
//! or publish. The candidate passes only when it is strictly greater than the
//! reference. Unparseable input is a failing decision, never an error.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::compare::{compare, Comparison, ComparisonResult};
use crate::error::ParseError;
use crate::exit_codes;
use crate::obs;
use crate::version::parse_version;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// Pass/fail outcome of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Candidate is strictly greater than the reference.
    Pass,
    /// Candidate is equal, older, or could not be parsed.
    Fail,
}

impl Verdict {
    /// Process exit code for this verdict.
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Pass => exit_codes::SUCCESS,
            Verdict::Fail => exit_codes::GATE_FAILED,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => f.write_str("PASS"),
            Verdict::Fail => f.write_str("FAIL"),
        }
    }
}

// ---------------------------------------------------------------------------
// Invalid input
// ---------------------------------------------------------------------------

/// Which side of the gate an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Candidate,
    Reference,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Candidate => f.write_str("candidate"),
            Role::Reference => f.write_str("reference"),
        }
    }
}

/// An input string that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidVersion {
    pub role: Role,
    pub input: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: ParseError,
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// The outcome of gating a candidate version against a reference version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateDecision {
    pub verdict: Verdict,
    /// Human-readable explanation naming both versions and the reason.
    pub explanation: String,
    /// Raw candidate input.
    pub candidate: String,
    /// Raw reference input.
    pub reference: String,
    /// Present when both inputs parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonResult>,
    /// Inputs that failed to parse, candidate first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invalid: Vec<InvalidVersion>,
}

impl GateDecision {
    /// Whether the gate passed.
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Decide whether `candidate_raw` is strictly greater than `reference_raw`.
///
/// Pure apart from one `gate.decided` tracing event; identical inputs always
/// yield identical decisions.
pub fn decide(candidate_raw: &str, reference_raw: &str) -> GateDecision {
    let candidate = parse_version(candidate_raw);
    let reference = parse_version(reference_raw);

    let decision = match (candidate, reference) {
        (Ok(candidate), Ok(reference)) => {
            let result = compare(&candidate, &reference);
            let (verdict, explanation) = match result.outcome() {
                Comparison::Greater => (
                    Verdict::Pass,
                    format!("candidate {candidate} is greater than reference {reference}"),
                ),
                Comparison::Equal => (
                    Verdict::Fail,
                    format!(
                        "candidate {candidate} is not greater than reference {reference} \
                         (versions are equal)"
                    ),
                ),
                Comparison::Less => (
                    Verdict::Fail,
                    format!(
                        "candidate {candidate} is not greater than reference {reference} \
                         (candidate is older)"
                    ),
                ),
            };
            GateDecision {
                verdict,
                explanation,
                candidate: candidate_raw.to_string(),
                reference: reference_raw.to_string(),
                comparison: Some(result),
                invalid: Vec::new(),
            }
        }
        (candidate, reference) => {
            let mut invalid = Vec::new();
            if let Err(error) = candidate {
                invalid.push(InvalidVersion {
                    role: Role::Candidate,
                    input: candidate_raw.to_string(),
                    error,
                });
            }
            if let Err(error) = reference {
                invalid.push(InvalidVersion {
                    role: Role::Reference,
                    input: reference_raw.to_string(),
                    error,
                });
            }
            GateDecision {
                verdict: Verdict::Fail,
                explanation: explain_invalid(&invalid, candidate_raw, reference_raw),
                candidate: candidate_raw.to_string(),
                reference: reference_raw.to_string(),
                comparison: None,
                invalid,
            }
        }
    };

    obs::emit_gate_decided(candidate_raw, reference_raw, &decision);
    decision
}

fn explain_invalid(
    invalid: &[InvalidVersion],
    candidate_raw: &str,
    reference_raw: &str,
) -> String {
    let details: Vec<String> = invalid
        .iter()
        .map(|iv| {
            format!(
                "{} version {:?} could not be parsed: {}",
                iv.role, iv.input, iv.error
            )
        })
        .collect();

    match invalid {
        [only] if only.role == Role::Candidate => {
            format!("{} (reference {:?})", details.join("; "), reference_raw)
        }
        [only] if only.role == Role::Reference => {
            format!("{} (candidate {:?})", details.join("; "), candidate_raw)
        }
        _ => details.join("; "),
    }
}
