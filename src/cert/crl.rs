//! Certificate revocation list building.
//!
//! Each issuer in the hierarchy publishes a one-entry CRL revoking a fixed
//! synthetic serial number, so consumers of the fixtures always have a
//! revocation to exercise.

use crate::cert::builder::{common_name_rdn, unix_seconds_time};
use crate::crypto::keypair::KeyPair;
use crate::error::{ArtifactError, Result};
use chrono::Utc;
use const_oid::db::rfc5280::ID_CE_CRL_REASONS;
use der::asn1::{BitString, OctetString};
use der::Encode;
use x509_cert::certificate::Version;
use x509_cert::crl::{CertificateList, RevokedCert, TbsCertList};
use x509_cert::ext::pkix::CrlReason;
use x509_cert::ext::Extension;
use x509_cert::serial_number::SerialNumber;

/// Build a signed v2 CRL with exactly one revoked entry.
///
/// The entry revokes `revoked_serial` with reason "cessation of
/// operation"; both thisUpdate and the revocation date are the current
/// time. No nextUpdate is set.
///
/// # Arguments
///
/// * `issuer_cn` - Common Name of the issuing authority
/// * `issuer_key` - The issuer's key pair (used for signing)
/// * `revoked_serial` - Serial number carried by the single entry
pub fn build_crl(
    issuer_cn: &str,
    issuer_key: &KeyPair,
    revoked_serial: u64,
) -> Result<CertificateList> {
    let now = unix_seconds_time(Utc::now().timestamp_millis() / 1000)?;
    let signature_algorithm = issuer_key.algorithm().algorithm_identifier();

    let reason_der = CrlReason::CessationOfOperation
        .to_der()
        .map_err(|e| ArtifactError::CrlError(format!("Failed to encode reason code: {}", e)))?;
    let reason_ext = Extension {
        extn_id: ID_CE_CRL_REASONS,
        critical: false,
        extn_value: OctetString::new(reason_der)
            .map_err(|e| ArtifactError::CrlError(format!("Failed to wrap reason code: {}", e)))?,
    };

    let revoked = RevokedCert {
        serial_number: small_serial(revoked_serial)?,
        revocation_date: now.clone(),
        crl_entry_extensions: Some(vec![reason_ext]),
    };

    let tbs = TbsCertList {
        version: Version::V2,
        signature: signature_algorithm.clone(),
        issuer: common_name_rdn(issuer_cn)?,
        this_update: now,
        next_update: None,
        revoked_certificates: Some(vec![revoked]),
        crl_extensions: None,
    };

    let tbs_der = tbs
        .to_der()
        .map_err(|e| ArtifactError::CrlError(format!("Failed to encode TBS cert list: {}", e)))?;
    let signature_bytes = issuer_key.sign(&tbs_der)?;
    let signature = BitString::from_bytes(&signature_bytes)
        .map_err(|e| ArtifactError::CrlError(format!("Failed to create signature bitstring: {}", e)))?;

    Ok(CertificateList {
        tbs_cert_list: tbs,
        signature_algorithm,
        signature,
    })
}

/// Minimal big-endian encoding of a small serial value.
fn small_serial(value: u64) -> Result<SerialNumber> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len() - 1);

    SerialNumber::new(&bytes[start..])
        .map_err(|e| ArtifactError::CrlError(format!("Failed to create serial number: {}", e)))
}
