//! Post-quantum key pair operations.
//!
//! This module wraps the pqcrypto signature backends behind a single
//! byte-oriented key pair type. Keys are generated fresh per role per
//! algorithm and are never reused across roles.

use crate::crypto::algorithm::SignatureAlgorithm;
use crate::error::{ArtifactError, Result};
use der::Encode;
use spki::{AlgorithmIdentifierRef, SubjectPublicKeyInfoOwned};

/// Dispatches `$body` with `$backend` bound to the pqcrypto module
/// implementing `$algorithm`.
macro_rules! with_backend {
    ($algorithm:expr, $backend:ident, $body:block) => {
        match $algorithm {
            SignatureAlgorithm::Dilithium2 => {
                use pqcrypto_dilithium::dilithium2 as $backend;
                $body
            }
            SignatureAlgorithm::Dilithium3 => {
                use pqcrypto_dilithium::dilithium3 as $backend;
                $body
            }
            SignatureAlgorithm::Dilithium5 => {
                use pqcrypto_dilithium::dilithium5 as $backend;
                $body
            }
            SignatureAlgorithm::Dilithium2Aes => {
                use pqcrypto_dilithium::dilithium2aes as $backend;
                $body
            }
            SignatureAlgorithm::Dilithium3Aes => {
                use pqcrypto_dilithium::dilithium3aes as $backend;
                $body
            }
            SignatureAlgorithm::Dilithium5Aes => {
                use pqcrypto_dilithium::dilithium5aes as $backend;
                $body
            }
            SignatureAlgorithm::Falcon512 => {
                use pqcrypto_falcon::falcon512 as $backend;
                $body
            }
            SignatureAlgorithm::Falcon1024 => {
                use pqcrypto_falcon::falcon1024 as $backend;
                $body
            }
        }
    };
}

/// A public key bound to one signature algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    algorithm: SignatureAlgorithm,
    bytes: Vec<u8>,
}

impl PublicKey {
    /// The algorithm this key belongs to.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// Raw public key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Verify a detached signature over a message.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        with_backend!(self.algorithm, backend, {
            use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _};

            let pk = backend::PublicKey::from_bytes(&self.bytes)
                .map_err(|e| ArtifactError::InvalidKeyError(format!("Invalid public key: {}", e)))?;
            let sig = backend::DetachedSignature::from_bytes(signature).map_err(|e| {
                ArtifactError::CryptoError(format!("Malformed detached signature: {}", e))
            })?;

            backend::verify_detached_signature(&sig, message, &pk).map_err(|e| {
                ArtifactError::CryptoError(format!("Signature verification failed: {}", e))
            })
        })
    }

    /// Build the SubjectPublicKeyInfo structure embedding this key.
    pub fn to_spki(&self) -> Result<SubjectPublicKeyInfoOwned> {
        let subject_public_key = der::asn1::BitString::from_bytes(&self.bytes)
            .map_err(|e| ArtifactError::EncodingError(format!("Failed to wrap public key: {}", e)))?;

        Ok(SubjectPublicKeyInfoOwned {
            algorithm: self.algorithm.algorithm_identifier(),
            subject_public_key,
        })
    }

    /// Encode as SubjectPublicKeyInfo DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        self.to_spki()?
            .to_der()
            .map_err(|e| ArtifactError::EncodingError(format!("Failed to encode public key: {}", e)))
    }

    /// Encode as a `PUBLIC KEY` PEM block.
    pub fn to_pem(&self) -> Result<String> {
        Ok(pem::encode(&pem::Pem::new("PUBLIC KEY", self.to_der()?)))
    }
}

/// A post-quantum key pair bound to one signature algorithm.
#[derive(Debug, Clone)]
pub struct KeyPair {
    algorithm: SignatureAlgorithm,
    public: PublicKey,
    secret: Vec<u8>,
}

impl KeyPair {
    /// Generate a fresh key pair for the given algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use pqc_artifacts::crypto::algorithm::SignatureAlgorithm;
    /// use pqc_artifacts::crypto::keypair::KeyPair;
    ///
    /// let keypair = KeyPair::generate(SignatureAlgorithm::Falcon512);
    /// assert_eq!(keypair.algorithm(), SignatureAlgorithm::Falcon512);
    /// ```
    pub fn generate(algorithm: SignatureAlgorithm) -> KeyPair {
        let (public_bytes, secret_bytes) = with_backend!(algorithm, backend, {
            use pqcrypto_traits::sign::{PublicKey as _, SecretKey as _};

            let (pk, sk) = backend::keypair();
            (pk.as_bytes().to_vec(), sk.as_bytes().to_vec())
        });

        KeyPair {
            algorithm,
            public: PublicKey {
                algorithm,
                bytes: public_bytes,
            },
            secret: secret_bytes,
        }
    }

    /// The algorithm this key pair belongs to.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// The public half of the key pair.
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Produce a detached signature over a message with the secret key.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        with_backend!(self.algorithm, backend, {
            use pqcrypto_traits::sign::{DetachedSignature as _, SecretKey as _};

            let sk = backend::SecretKey::from_bytes(&self.secret)
                .map_err(|e| ArtifactError::InvalidKeyError(format!("Invalid secret key: {}", e)))?;

            Ok(backend::detached_sign(message, &sk).as_bytes().to_vec())
        })
    }

    /// Encode the secret key as PKCS#8 PrivateKeyInfo DER.
    pub fn private_key_der(&self) -> Result<Vec<u8>> {
        let algorithm = AlgorithmIdentifierRef {
            oid: self.algorithm.oid(),
            parameters: None,
        };

        pkcs8::PrivateKeyInfo::new(algorithm, &self.secret)
            .to_der()
            .map_err(|e| ArtifactError::EncodingError(format!("Failed to encode private key: {}", e)))
    }

    /// Encode the secret key as a `PRIVATE KEY` PEM block.
    pub fn private_key_pem(&self) -> Result<String> {
        Ok(pem::encode(&pem::Pem::new(
            "PRIVATE KEY",
            self.private_key_der()?,
        )))
    }
}
