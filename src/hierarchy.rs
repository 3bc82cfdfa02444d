//! Per-algorithm hierarchy assembly.
//!
//! For each supported algorithm the assembler generates three independent
//! key pairs and builds the seven signed artifacts of one self-contained
//! trust hierarchy: the TA, CA and EE certificates, the TA and CA
//! revocation lists, and the CA and EE certification requests. Generation
//! is purely in-memory; writing the artifacts out is left to the output
//! module.

use crate::cert::builder::{build_certificate, CertificateRole};
use crate::cert::crl::build_crl;
use crate::cert::csr::build_csr;
use crate::cert::serial::SerialNumberGenerator;
use crate::crypto::algorithm::SignatureAlgorithm;
use crate::crypto::keypair::KeyPair;
use crate::error::Result;
use crate::output;
use std::path::Path;
use tracing::{debug, info};
use x509_cert::certificate::Certificate;
use x509_cert::crl::CertificateList;
use x509_cert::request::CertReq;

/// Serial revoked by every trust anchor CRL.
const TA_REVOKED_SERIAL: u64 = 1;

/// Serial revoked by every subordinate CA CRL.
const CA_REVOKED_SERIAL: u64 = 10;

/// Key pair and certificate for one role of a hierarchy.
pub struct RoleMaterial {
    pub key_pair: KeyPair,
    pub certificate: Certificate,
}

/// Everything generated for one algorithm.
pub struct HierarchyArtifacts {
    pub algorithm: SignatureAlgorithm,
    pub trust_anchor: RoleMaterial,
    pub subordinate_ca: RoleMaterial,
    pub end_entity: RoleMaterial,
    pub ta_crl: CertificateList,
    pub ca_crl: CertificateList,
    pub ca_csr: CertReq,
    pub ee_csr: CertReq,
}

/// Subject common name for a role under one algorithm,
/// e.g. "BC dilithium2 Test TA".
pub fn subject_cn(algorithm: SignatureAlgorithm, role: CertificateRole) -> String {
    format!("BC {} Test {}", algorithm.name(), role.label())
}

/// Generate the full hierarchy for one algorithm.
///
/// Key pairs are freshly generated per role and never reused across
/// roles. The build order is fixed; the shared serial generator advances
/// once per certificate.
pub fn generate_hierarchy(
    algorithm: SignatureAlgorithm,
    serials: &SerialNumberGenerator,
) -> Result<HierarchyArtifacts> {
    let ta_keypair = KeyPair::generate(algorithm);
    let ca_keypair = KeyPair::generate(algorithm);
    let ee_keypair = KeyPair::generate(algorithm);

    let ta_cn = subject_cn(algorithm, CertificateRole::TrustAnchor);
    let ca_cn = subject_cn(algorithm, CertificateRole::IntermediateCa);
    let ee_cn = subject_cn(algorithm, CertificateRole::EndEntity);

    let ta_cert = build_certificate(
        &ta_cn,
        &ta_cn,
        &ta_keypair,
        ta_keypair.public(),
        CertificateRole::TrustAnchor,
        serials,
    )?;
    debug!(
        serial = %hex::encode(ta_cert.tbs_certificate.serial_number.as_bytes()),
        "built trust anchor certificate"
    );

    let ta_crl = build_crl(&ta_cn, &ta_keypair, TA_REVOKED_SERIAL)?;

    let ca_csr = build_csr(&ca_cn, &ee_keypair)?;

    let ca_cert = build_certificate(
        &ca_cn,
        &ta_cn,
        &ta_keypair,
        ca_keypair.public(),
        CertificateRole::IntermediateCa,
        serials,
    )?;
    debug!(
        serial = %hex::encode(ca_cert.tbs_certificate.serial_number.as_bytes()),
        "built subordinate CA certificate"
    );

    let ca_crl = build_crl(&ca_cn, &ca_keypair, CA_REVOKED_SERIAL)?;

    let ee_csr = build_csr(&ee_cn, &ee_keypair)?;

    let ee_cert = build_certificate(
        &ee_cn,
        &ca_cn,
        &ca_keypair,
        ee_keypair.public(),
        CertificateRole::EndEntity,
        serials,
    )?;
    debug!(
        serial = %hex::encode(ee_cert.tbs_certificate.serial_number.as_bytes()),
        "built end-entity certificate"
    );

    Ok(HierarchyArtifacts {
        algorithm,
        trust_anchor: RoleMaterial {
            key_pair: ta_keypair,
            certificate: ta_cert,
        },
        subordinate_ca: RoleMaterial {
            key_pair: ca_keypair,
            certificate: ca_cert,
        },
        end_entity: RoleMaterial {
            key_pair: ee_keypair,
            certificate: ee_cert,
        },
        ta_crl,
        ca_crl,
        ca_csr,
        ee_csr,
    })
}

/// Generate and write hierarchies for every algorithm in the catalog.
///
/// The serial counter is shared across all algorithms; any failure aborts
/// the run, leaving artifacts already written for prior algorithms on
/// disk.
pub fn generate_artifact_matrix(output_dir: &Path) -> Result<()> {
    let serials = SerialNumberGenerator::new();

    for algorithm in SignatureAlgorithm::ALL {
        info!(algorithm = %algorithm, "generating hierarchy");
        let artifacts = generate_hierarchy(algorithm, &serials)?;
        output::write_artifacts(output_dir, &artifacts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cert::builder::common_name_rdn;
    use der::Encode;

    fn dilithium2_hierarchy() -> HierarchyArtifacts {
        let serials = SerialNumberGenerator::new();
        generate_hierarchy(SignatureAlgorithm::Dilithium2, &serials).unwrap()
    }

    #[test]
    fn test_subject_cn_format() {
        assert_eq!(
            subject_cn(SignatureAlgorithm::Dilithium2, CertificateRole::TrustAnchor),
            "BC dilithium2 Test TA"
        );
        assert_eq!(
            subject_cn(SignatureAlgorithm::Falcon512, CertificateRole::EndEntity),
            "BC falcon-512 Test EE"
        );
    }

    #[test]
    fn test_trust_anchor_is_self_signed() {
        let artifacts = dilithium2_hierarchy();
        let ta = &artifacts.trust_anchor;

        assert_eq!(
            ta.certificate.tbs_certificate.issuer,
            ta.certificate.tbs_certificate.subject
        );

        let tbs_der = ta.certificate.tbs_certificate.to_der().unwrap();
        assert!(ta
            .key_pair
            .public()
            .verify(&tbs_der, ta.certificate.signature.raw_bytes())
            .is_ok());
    }

    #[test]
    fn test_ca_certificate_is_signed_by_trust_anchor() {
        let artifacts = dilithium2_hierarchy();
        let ca_cert = &artifacts.subordinate_ca.certificate;

        assert_eq!(
            ca_cert.tbs_certificate.issuer,
            artifacts.trust_anchor.certificate.tbs_certificate.subject
        );

        let tbs_der = ca_cert.tbs_certificate.to_der().unwrap();
        assert!(artifacts
            .trust_anchor
            .key_pair
            .public()
            .verify(&tbs_der, ca_cert.signature.raw_bytes())
            .is_ok());
    }

    #[test]
    fn test_ee_certificate_is_signed_by_ca() {
        let artifacts = dilithium2_hierarchy();
        let ee_cert = &artifacts.end_entity.certificate;

        assert_eq!(
            ee_cert.tbs_certificate.issuer,
            artifacts.subordinate_ca.certificate.tbs_certificate.subject
        );

        let tbs_der = ee_cert.tbs_certificate.to_der().unwrap();
        assert!(artifacts
            .subordinate_ca
            .key_pair
            .public()
            .verify(&tbs_der, ee_cert.signature.raw_bytes())
            .is_ok());
    }

    #[test]
    fn test_certificate_subjects() {
        let artifacts = dilithium2_hierarchy();

        assert_eq!(
            artifacts.trust_anchor.certificate.tbs_certificate.subject,
            common_name_rdn("BC dilithium2 Test TA").unwrap()
        );
        assert_eq!(
            artifacts.subordinate_ca.certificate.tbs_certificate.subject,
            common_name_rdn("BC dilithium2 Test CA").unwrap()
        );
        assert_eq!(
            artifacts.end_entity.certificate.tbs_certificate.subject,
            common_name_rdn("BC dilithium2 Test EE").unwrap()
        );
    }

    #[test]
    fn test_ca_csr_carries_end_entity_key() {
        let artifacts = dilithium2_hierarchy();

        assert_eq!(
            artifacts.ca_csr.info.public_key.subject_public_key.raw_bytes(),
            artifacts.end_entity.key_pair.public().as_bytes()
        );
        assert_eq!(
            artifacts.ca_csr.info.subject,
            common_name_rdn("BC dilithium2 Test CA").unwrap()
        );
    }

    #[test]
    fn test_ee_csr_carries_end_entity_key() {
        let artifacts = dilithium2_hierarchy();

        assert_eq!(
            artifacts.ee_csr.info.public_key.subject_public_key.raw_bytes(),
            artifacts.end_entity.key_pair.public().as_bytes()
        );
    }

    #[test]
    fn test_crl_issuers() {
        let artifacts = dilithium2_hierarchy();

        assert_eq!(
            artifacts.ta_crl.tbs_cert_list.issuer,
            common_name_rdn("BC dilithium2 Test TA").unwrap()
        );
        assert_eq!(
            artifacts.ca_crl.tbs_cert_list.issuer,
            common_name_rdn("BC dilithium2 Test CA").unwrap()
        );
    }

    #[test]
    fn test_crl_revoked_serials() {
        let artifacts = dilithium2_hierarchy();

        let ta_revoked = artifacts
            .ta_crl
            .tbs_cert_list
            .revoked_certificates
            .as_ref()
            .unwrap();
        assert_eq!(ta_revoked.len(), 1);
        assert_eq!(ta_revoked[0].serial_number.as_bytes(), &[1]);

        let ca_revoked = artifacts
            .ca_crl
            .tbs_cert_list
            .revoked_certificates
            .as_ref()
            .unwrap();
        assert_eq!(ca_revoked.len(), 1);
        assert_eq!(ca_revoked[0].serial_number.as_bytes(), &[10]);
    }

    #[test]
    fn test_key_pairs_are_independent() {
        let artifacts = dilithium2_hierarchy();

        let ta = artifacts.trust_anchor.key_pair.public().as_bytes();
        let ca = artifacts.subordinate_ca.key_pair.public().as_bytes();
        let ee = artifacts.end_entity.key_pair.public().as_bytes();

        assert_ne!(ta, ca);
        assert_ne!(ca, ee);
        assert_ne!(ta, ee);
    }
}
