//! DER and PEM adapters for built structures.
//!
//! Both encodings round-trip losslessly to the same in-memory structure:
//! PEM is a base64 text wrapper around the DER bytes with header/footer
//! delimiters.

use crate::error::{ArtifactError, Result};
use der::{Decode, Encode};
use x509_cert::certificate::Certificate;
use x509_cert::crl::CertificateList;
use x509_cert::request::CertReq;

fn encode_der<T: Encode>(value: &T, what: &str) -> Result<Vec<u8>> {
    value
        .to_der()
        .map_err(|e| ArtifactError::EncodingError(format!("Failed to encode {}: {}", what, e)))
}

/// Encode a certificate as DER.
pub fn certificate_to_der(cert: &Certificate) -> Result<Vec<u8>> {
    encode_der(cert, "certificate")
}

/// Encode a certificate as a `CERTIFICATE` PEM block.
pub fn certificate_to_pem(cert: &Certificate) -> Result<String> {
    Ok(pem::encode(&pem::Pem::new(
        "CERTIFICATE",
        certificate_to_der(cert)?,
    )))
}

/// Load a certificate from a `CERTIFICATE` PEM block.
pub fn certificate_from_pem(pem_str: &str) -> Result<Certificate> {
    let pem = pem::parse(pem_str)
        .map_err(|e| ArtifactError::PemError(format!("Failed to parse PEM: {}", e)))?;

    if pem.tag() != "CERTIFICATE" {
        return Err(ArtifactError::PemError(format!(
            "Expected CERTIFICATE, got {}",
            pem.tag()
        )));
    }

    Certificate::from_der(pem.contents())
        .map_err(|e| ArtifactError::EncodingError(format!("Failed to decode certificate: {}", e)))
}

/// Encode a revocation list as DER.
pub fn crl_to_der(crl: &CertificateList) -> Result<Vec<u8>> {
    encode_der(crl, "CRL")
}

/// Encode a certification request as DER.
pub fn csr_to_der(csr: &CertReq) -> Result<Vec<u8>> {
    encode_der(csr, "CSR")
}
