//! Certificate, CRL and CSR generation module.
//!
//! This module provides the builders for every signed structure in a
//! three-tier test hierarchy, plus serial number generation and the
//! DER/PEM adapters for persisting what was built.

pub mod builder;
pub mod crl;
pub mod csr;
pub mod encoding;
pub mod serial;
