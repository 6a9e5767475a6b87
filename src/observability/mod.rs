//! Observability subsystem
//!
//! Structured logging only. Principles:
//!
//! 1. Observability is read-only
//! 2. No side effects on derivation results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! The library core never logs; the CLI layer emits `DERIVE_START`,
//! `DERIVE_COMPLETE`, `DERIVE_FAILED` and `SYMBOL_UNRECOGNIZED` events
//! around each derivation.

mod logger;

pub use logger::{Logger, Severity};
