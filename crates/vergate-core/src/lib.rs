//! vergate core library
//!
//! Parses version strings, orders them, and decides whether a candidate
//! version is a strict bump over a reference version. Knows nothing about
//! files, manifests or git; callers hand it two strings.
//!
//! ```
//! let decision = vergate_core::decide("1.2.1", "1.2.0");
//! assert!(decision.passed());
//! ```

pub mod compare;
pub mod error;
pub mod exit_codes;
pub mod gate;
pub mod obs;
pub mod telemetry;
pub mod version;

pub use compare::{compare, Comparison, ComparisonResult};
pub use error::{ParseError, Result};
pub use gate::{decide, GateDecision, InvalidVersion, Role, Verdict};
pub use obs::{emit_gate_decided, emit_source_read};
pub use telemetry::init_tracing;
pub use version::{parse_version, Version};

/// vergate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
