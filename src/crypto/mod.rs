//! Cryptographic operations module.
//!
//! This module provides the post-quantum key material for the generator:
//!
//! - The fixed, ordered catalog of supported signature algorithms
//! - Key pair generation, detached signing and verification over the
//!   pqcrypto backends
//! - PKCS#8 and SubjectPublicKeyInfo encodings of the key material
//!
//! # Example
//!
//! ```rust
//! use pqc_artifacts::crypto::algorithm::SignatureAlgorithm;
//! use pqc_artifacts::crypto::keypair::KeyPair;
//!
//! # fn example() -> pqc_artifacts::error::Result<()> {
//! let keypair = KeyPair::generate(SignatureAlgorithm::Dilithium2);
//!
//! let signature = keypair.sign(b"message")?;
//! keypair.public().verify(b"message", &signature)?;
//! # Ok(())
//! # }
//! ```

pub mod algorithm;
pub mod keypair;
