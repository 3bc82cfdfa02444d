//! Error types for the artifact generator.
//!
//! This module defines all error types used throughout the library.
//! All errors implement `std::error::Error` and are designed to provide
//! clear, actionable error messages. No error is recovered locally: any
//! failure propagates up and aborts the whole generation run.

use thiserror::Error;

/// The main error type for artifact generation operations.
///
/// This enum covers all possible errors that can occur during key
/// generation, signing, certificate/CRL/CSR assembly, encoding, and
/// artifact output.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// Cryptographic operation failed
    #[error("Cryptographic error: {0}")]
    CryptoError(String),

    /// Invalid key format or content
    #[error("Invalid key: {0}")]
    InvalidKeyError(String),

    /// Certificate assembly or signing error
    #[error("Certificate error: {0}")]
    CertificateError(String),

    /// Revocation list assembly or signing error
    #[error("CRL error: {0}")]
    CrlError(String),

    /// Certification request assembly or signing error
    #[error("CSR error: {0}")]
    CsrError(String),

    /// DER encoding/decoding error
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// PEM encoding/decoding error
    #[error("PEM error: {0}")]
    PemError(String),

    /// Artifact output I/O error
    #[error("Storage I/O error: {0}")]
    StorageError(#[from] std::io::Error),
}

/// A specialized Result type for artifact generation operations.
pub type Result<T> = std::result::Result<T, ArtifactError>;
