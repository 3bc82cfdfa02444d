//! Artifact output layout.
//!
//! Each algorithm gets one directory keyed by its dotted OID, with `ta/`,
//! `ca/`, `ee/` and `crl/` subdirectories holding the PEM and DER
//! encodings of the generated keys, certificates, requests and revocation
//! lists.

use crate::cert::encoding::{certificate_to_der, certificate_to_pem, crl_to_der, csr_to_der};
use crate::error::Result;
use crate::hierarchy::{HierarchyArtifacts, RoleMaterial};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write the complete artifact set for one algorithm under `root`.
///
/// Directories are created as needed. Existing files are overwritten;
/// nothing already on disk is cleaned up on failure.
pub fn write_artifacts(root: &Path, artifacts: &HierarchyArtifacts) -> Result<()> {
    let alg_dir = root.join(artifacts.algorithm.oid().to_string());

    let ta_dir = alg_dir.join("ta");
    fs::create_dir_all(&ta_dir)?;
    write_role_material(&ta_dir, "ta", &artifacts.trust_anchor)?;

    let ca_dir = alg_dir.join("ca");
    fs::create_dir_all(&ca_dir)?;
    fs::write(ca_dir.join("ca.csr"), csr_to_der(&artifacts.ca_csr)?)?;
    write_role_material(&ca_dir, "ca", &artifacts.subordinate_ca)?;

    let ee_dir = alg_dir.join("ee");
    fs::create_dir_all(&ee_dir)?;
    fs::write(ee_dir.join("cert.csr"), csr_to_der(&artifacts.ee_csr)?)?;
    write_role_material(&ee_dir, "cert", &artifacts.end_entity)?;

    let crl_dir = alg_dir.join("crl");
    fs::create_dir_all(&crl_dir)?;
    fs::write(crl_dir.join("crl_ta.crl"), crl_to_der(&artifacts.ta_crl)?)?;
    fs::write(crl_dir.join("crl_ca.crl"), crl_to_der(&artifacts.ca_crl)?)?;

    debug!(directory = %alg_dir.display(), "wrote artifact set");

    Ok(())
}

/// Write the six encodings of one role's certificate and key pair.
fn write_role_material(dir: &Path, stem: &str, material: &RoleMaterial) -> Result<()> {
    fs::write(
        dir.join(format!("{}.pem", stem)),
        certificate_to_pem(&material.certificate)?,
    )?;
    fs::write(
        dir.join(format!("{}_priv.pem", stem)),
        material.key_pair.private_key_pem()?,
    )?;
    fs::write(
        dir.join(format!("{}_pub.pem", stem)),
        material.key_pair.public().to_pem()?,
    )?;
    fs::write(
        dir.join(format!("{}.der", stem)),
        certificate_to_der(&material.certificate)?,
    )?;
    fs::write(
        dir.join(format!("{}_priv.der", stem)),
        material.key_pair.private_key_der()?,
    )?;
    fs::write(
        dir.join(format!("{}_pub.der", stem)),
        material.key_pair.public().to_der()?,
    )?;

    Ok(())
}
