//! Structured observability hooks for gate runs.
//!
//! Events are emitted at `info!`/`debug!` level; raise verbosity with
//! `RUST_LOG=vergate_core=info` (or `--verbose` on the CLI) to see them.

use tracing::{debug, info};

use crate::gate::GateDecision;

/// Emit event: a gate decision was produced.
///
/// ```ignore
/// emit_gate_decided("1.2.1", "1.2.0", &decision);
/// // logs: event=gate.decided candidate=1.2.1 reference=1.2.0 verdict=PASS
/// ```
pub fn emit_gate_decided(candidate: &str, reference: &str, decision: &GateDecision) {
    info!(
        event = "gate.decided",
        candidate = %candidate,
        reference = %reference,
        verdict = %decision.verdict,
        parse_failures = decision.invalid.len(),
    );
}

/// Emit event: a version string was read from `origin` (a path or git
/// revision) for the given role.
pub fn emit_source_read(role: &str, origin: &str, version: &str) {
    debug!(event = "source.read", role = %role, origin = %origin, version = %version);
}
