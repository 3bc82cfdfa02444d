//! PKCS#10 certification request building.
//!
//! A request is self-signed with the private half of the key pair whose
//! public half it declares, proving possession of the key.

use crate::cert::builder::common_name_rdn;
use crate::crypto::keypair::KeyPair;
use crate::error::{ArtifactError, Result};
use der::asn1::BitString;
use der::Encode;
use x509_cert::request::{CertReq, CertReqInfo};

/// Build a signed certification request for a subject.
///
/// # Arguments
///
/// * `subject_cn` - Common Name of the requesting subject
/// * `keypair` - Key pair declared in the request and used to sign it
pub fn build_csr(subject_cn: &str, keypair: &KeyPair) -> Result<CertReq> {
    let info = CertReqInfo {
        version: x509_cert::request::Version::V1,
        subject: common_name_rdn(subject_cn)?,
        public_key: keypair.public().to_spki()?,
        attributes: Default::default(),
    };

    let info_der = info
        .to_der()
        .map_err(|e| ArtifactError::CsrError(format!("Failed to encode request info: {}", e)))?;
    let signature_bytes = keypair.sign(&info_der)?;
    let signature = BitString::from_bytes(&signature_bytes)
        .map_err(|e| ArtifactError::CsrError(format!("Failed to create signature bitstring: {}", e)))?;

    Ok(CertReq {
        info,
        algorithm: keypair.algorithm().algorithm_identifier(),
        signature,
    })
}
