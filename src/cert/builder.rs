//! Role-parameterized X.509 certificate building.
//!
//! One builder covers all three hierarchy roles; the differences between a
//! trust anchor, a subordinate CA and an end-entity certificate are carried
//! by a role policy value rather than separate builder functions.

use crate::cert::serial::SerialNumberGenerator;
use crate::crypto::keypair::{KeyPair, PublicKey};
use crate::error::{ArtifactError, Result};
use chrono::Utc;
use const_oid::db::rfc5280::{ID_CE_BASIC_CONSTRAINTS, ID_CE_KEY_USAGE};
use der::asn1::{BitString, OctetString, UtcTime, Utf8StringRef};
use der::Encode;
use std::time::Duration;
use x509_cert::attr::AttributeTypeAndValue;
use x509_cert::certificate::{Certificate, Version};
use x509_cert::ext::pkix::{BasicConstraints, KeyUsage, KeyUsages};
use x509_cert::ext::Extension;
use x509_cert::name::{RdnSequence, RelativeDistinguishedName};
use x509_cert::time::{Time, Validity};
use x509_cert::TbsCertificate;

/// Clock-skew tolerance subtracted from the current time for notBefore.
const NOT_BEFORE_SKEW_MILLIS: i64 = 60 * 1000;

/// Certificate lifetime added to the current time for notAfter.
const VALIDITY_MILLIS: i64 = 365 * 24 * 60 * 60 * 1000;

/// The position a certificate occupies in the three-tier hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateRole {
    /// Self-signed root of the hierarchy.
    TrustAnchor,
    /// Subordinate CA certified by the trust anchor.
    IntermediateCa,
    /// Leaf certificate holder certified by the subordinate CA.
    EndEntity,
}

impl CertificateRole {
    /// Short role tag used in distinguished names.
    pub fn label(&self) -> &'static str {
        match self {
            CertificateRole::TrustAnchor => "TA",
            CertificateRole::IntermediateCa => "CA",
            CertificateRole::EndEntity => "EE",
        }
    }

    fn policy(&self) -> RolePolicy {
        match self {
            CertificateRole::TrustAnchor => RolePolicy {
                basic_constraints: BasicConstraints {
                    ca: true,
                    path_len_constraint: Some(1),
                },
                key_usage: KeyUsage(KeyUsages::KeyCertSign | KeyUsages::CRLSign),
            },
            CertificateRole::IntermediateCa => RolePolicy {
                basic_constraints: BasicConstraints {
                    ca: true,
                    path_len_constraint: Some(0),
                },
                key_usage: KeyUsage(KeyUsages::KeyCertSign | KeyUsages::CRLSign),
            },
            CertificateRole::EndEntity => RolePolicy {
                basic_constraints: BasicConstraints {
                    ca: false,
                    path_len_constraint: None,
                },
                key_usage: KeyUsage(KeyUsages::DigitalSignature.into()),
            },
        }
    }
}

/// The extension set a role mandates. Both extensions are critical for
/// every role.
struct RolePolicy {
    basic_constraints: BasicConstraints,
    key_usage: KeyUsage,
}

impl RolePolicy {
    fn to_extensions(&self) -> Result<Vec<Extension>> {
        Ok(vec![
            critical_extension(ID_CE_BASIC_CONSTRAINTS, &self.basic_constraints)?,
            critical_extension(ID_CE_KEY_USAGE, &self.key_usage)?,
        ])
    }
}

fn critical_extension<T: Encode>(extn_id: const_oid::ObjectIdentifier, value: &T) -> Result<Extension> {
    let der = value
        .to_der()
        .map_err(|e| ArtifactError::CertificateError(format!("Failed to encode extension: {}", e)))?;

    Ok(Extension {
        extn_id,
        critical: true,
        extn_value: OctetString::new(der)
            .map_err(|e| ArtifactError::CertificateError(format!("Failed to wrap extension: {}", e)))?,
    })
}

/// Build a signed certificate for one role of the hierarchy.
///
/// The issuer key pair signs the to-be-signed certificate bytes with its
/// own algorithm; for a self-signed trust anchor, pass the same common
/// name for subject and issuer and the trust anchor's own key pair.
///
/// # Arguments
///
/// * `subject_cn` - Common Name of the certificate holder
/// * `issuer_cn` - Common Name of the signing authority
/// * `issuer_key` - The issuer's key pair (used for signing)
/// * `subject_public_key` - The public key embedded in the certificate
/// * `role` - The holder's position in the hierarchy
/// * `serials` - Shared serial number generator
pub fn build_certificate(
    subject_cn: &str,
    issuer_cn: &str,
    issuer_key: &KeyPair,
    subject_public_key: &PublicKey,
    role: CertificateRole,
    serials: &SerialNumberGenerator,
) -> Result<Certificate> {
    let signature_algorithm = issuer_key.algorithm().algorithm_identifier();

    let tbs = TbsCertificate {
        version: Version::V3,
        serial_number: serials.next()?,
        signature: signature_algorithm.clone(),
        issuer: common_name_rdn(issuer_cn)?,
        validity: validity_window()?,
        subject: common_name_rdn(subject_cn)?,
        subject_public_key_info: subject_public_key.to_spki()?,
        issuer_unique_id: None,
        subject_unique_id: None,
        extensions: Some(role.policy().to_extensions()?),
    };

    let tbs_der = tbs
        .to_der()
        .map_err(|e| ArtifactError::CertificateError(format!("Failed to encode TBS: {}", e)))?;
    let signature_bytes = issuer_key.sign(&tbs_der)?;
    let signature = BitString::from_bytes(&signature_bytes).map_err(|e| {
        ArtifactError::CertificateError(format!("Failed to create signature bitstring: {}", e))
    })?;

    Ok(Certificate {
        tbs_certificate: tbs,
        signature_algorithm,
        signature,
    })
}

/// Build a single-RDN distinguished name from a common name.
///
/// Accepts either a bare value ("My CA") or a prefixed form ("CN=My CA").
pub fn common_name_rdn(cn: &str) -> Result<RdnSequence> {
    let value = cn.strip_prefix("CN=").unwrap_or(cn);

    let cn_attr = AttributeTypeAndValue {
        oid: const_oid::db::rfc4519::CN,
        value: Utf8StringRef::new(value)
            .map_err(|e| ArtifactError::EncodingError(format!("Invalid CN: {}", e)))?
            .into(),
    };

    let mut attr_set = der::asn1::SetOfVec::new();
    attr_set
        .insert_ordered(cn_attr)
        .map_err(|e| ArtifactError::CertificateError(format!("Failed to add attribute: {}", e)))?;

    Ok(RdnSequence(vec![RelativeDistinguishedName::from(attr_set)]))
}

/// The shared validity window: notBefore is backed off one minute for
/// clock skew, notAfter is one year out.
fn validity_window() -> Result<Validity> {
    let now_millis = Utc::now().timestamp_millis();

    Ok(Validity {
        not_before: unix_seconds_time((now_millis - NOT_BEFORE_SKEW_MILLIS) / 1000)?,
        not_after: unix_seconds_time((now_millis + VALIDITY_MILLIS) / 1000)?,
    })
}

pub(crate) fn unix_seconds_time(seconds: i64) -> Result<Time> {
    let time = UtcTime::from_unix_duration(Duration::from_secs(seconds as u64))
        .map_err(|e| ArtifactError::EncodingError(format!("Failed to encode time: {}", e)))?;

    Ok(Time::UtcTime(time))
}
