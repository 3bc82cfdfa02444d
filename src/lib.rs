//! pqc-artifacts: Post-Quantum PKI Test Fixture Generator
//!
//! This library generates a reproducible matrix of PKI test fixtures: one
//! self-contained three-tier certificate hierarchy per supported
//! post-quantum signature algorithm. For each algorithm it:
//!
//! - Generates independent key pairs for a Trust Anchor, a subordinate CA
//!   and an End Entity
//! - Builds the corresponding X.509 certificates, certification requests
//!   and revocation lists
//! - Persists every artifact in DER and PEM under a predictable
//!   per-algorithm directory layout
//!
//! # Architecture
//!
//! The library follows a functional style where the hierarchy assembler
//! composes small, testable builder functions. All operations return
//! `Result` types with comprehensive error handling - no `unwrap()` or
//! panic outside tests. Any failure aborts the whole run; artifacts
//! already written stay on disk.
//!
//! # Example
//!
//! ```rust,no_run
//! use pqc_artifacts::error::Result;
//! use pqc_artifacts::hierarchy::generate_artifact_matrix;
//! use std::path::Path;
//!
//! fn example() -> Result<()> {
//!     generate_artifact_matrix(Path::new("artifacts"))?;
//!     Ok(())
//! }
//! ```

pub mod cert;
pub mod crypto;
pub mod error;
pub mod hierarchy;
pub mod output;

// Re-export commonly used types
pub use error::{ArtifactError, Result};
