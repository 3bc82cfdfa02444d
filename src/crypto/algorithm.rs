//! Post-quantum signature algorithm catalog.
//!
//! The catalog is a fixed, ordered list of the signature schemes the
//! generator produces hierarchies for. Each entry is one structured record
//! carrying its object identifier and its display name, so the two can
//! never drift out of alignment.

use const_oid::ObjectIdentifier;
use spki::AlgorithmIdentifierOwned;

/// A supported post-quantum signature scheme.
///
/// The lattice-based CRYSTALS-Dilithium parameter sets (including the
/// AES-based variants) and the Falcon parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    Dilithium2,
    Dilithium3,
    Dilithium5,
    Dilithium2Aes,
    Dilithium3Aes,
    Dilithium5Aes,
    Falcon512,
    Falcon1024,
}

impl SignatureAlgorithm {
    /// All supported algorithms, in generation order.
    pub const ALL: [SignatureAlgorithm; 8] = [
        SignatureAlgorithm::Dilithium2,
        SignatureAlgorithm::Dilithium3,
        SignatureAlgorithm::Dilithium5,
        SignatureAlgorithm::Dilithium2Aes,
        SignatureAlgorithm::Dilithium3Aes,
        SignatureAlgorithm::Dilithium5Aes,
        SignatureAlgorithm::Falcon512,
        SignatureAlgorithm::Falcon1024,
    ];

    /// The object identifier used in keys, certificates and signatures.
    pub const fn oid(&self) -> ObjectIdentifier {
        match self {
            SignatureAlgorithm::Dilithium2 => {
                ObjectIdentifier::new_unwrap("1.3.6.1.4.1.2.267.7.4.4")
            }
            SignatureAlgorithm::Dilithium3 => {
                ObjectIdentifier::new_unwrap("1.3.6.1.4.1.2.267.7.6.5")
            }
            SignatureAlgorithm::Dilithium5 => {
                ObjectIdentifier::new_unwrap("1.3.6.1.4.1.2.267.7.8.7")
            }
            SignatureAlgorithm::Dilithium2Aes => {
                ObjectIdentifier::new_unwrap("1.3.6.1.4.1.2.267.11.4.4")
            }
            SignatureAlgorithm::Dilithium3Aes => {
                ObjectIdentifier::new_unwrap("1.3.6.1.4.1.2.267.11.6.5")
            }
            SignatureAlgorithm::Dilithium5Aes => {
                ObjectIdentifier::new_unwrap("1.3.6.1.4.1.2.267.11.8.7")
            }
            SignatureAlgorithm::Falcon512 => ObjectIdentifier::new_unwrap("1.3.9999.3.6"),
            SignatureAlgorithm::Falcon1024 => ObjectIdentifier::new_unwrap("1.3.9999.3.9"),
        }
    }

    /// Human-readable algorithm name, as used in distinguished names.
    pub const fn name(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Dilithium2 => "dilithium2",
            SignatureAlgorithm::Dilithium3 => "dilithium3",
            SignatureAlgorithm::Dilithium5 => "dilithium5",
            SignatureAlgorithm::Dilithium2Aes => "dilithium2-aes",
            SignatureAlgorithm::Dilithium3Aes => "dilithium3-aes",
            SignatureAlgorithm::Dilithium5Aes => "dilithium5-aes",
            SignatureAlgorithm::Falcon512 => "falcon-512",
            SignatureAlgorithm::Falcon1024 => "falcon-1024",
        }
    }

    /// The X.509 algorithm identifier for this scheme (no parameters).
    pub fn algorithm_identifier(&self) -> AlgorithmIdentifierOwned {
        AlgorithmIdentifierOwned {
            oid: self.oid(),
            parameters: None,
        }
    }
}

impl std::fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
