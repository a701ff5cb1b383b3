//! Dossier export.
//!
//! A dossier is a bundle of certificates for a project or PO. Nothing is
//! actually rendered here: [`MockDossierGenerator`] assembles the
//! manifest, checksums it, and returns the artifact description after a
//! pacing delay.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use traza_core::certificate::{Certificate, CertificateStatus};
use traza_core::hashing::sha256_hex;
use traza_core::types::Timestamp;

use crate::error::PipelineError;

/// Default generation pacing delay in milliseconds.
const DEFAULT_DELAY_MS: u64 = 1500;

/// Which certificates go into the bundle.
///
/// `todo` overrides the individual pickers; `revisados` and `pendientes`
/// can be combined. Certificates in incident state are only exported
/// with `todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DossierScope {
    pub todo: bool,
    pub revisados: bool,
    pub pendientes: bool,
}

impl DossierScope {
    /// Export everything.
    pub fn todo() -> Self {
        Self {
            todo: true,
            revisados: false,
            pendientes: false,
        }
    }

    /// Whether a certificate in `estado` belongs in the bundle.
    pub fn includes(&self, estado: CertificateStatus) -> bool {
        if self.todo {
            return true;
        }
        match estado {
            CertificateStatus::Revisado => self.revisados,
            CertificateStatus::PendienteRevision => self.pendientes,
            CertificateStatus::Incidencia => false,
        }
    }
}

/// Description of a generated bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DossierArtifact {
    pub nombre_archivo: String,
    /// One line per exported certificate, in collection order.
    pub manifiesto: Vec<String>,
    /// SHA-256 hex digest of the manifest.
    pub checksum: String,
    pub generado_en: Timestamp,
}

/// Produces certificate bundles.
#[async_trait]
pub trait DossierGenerator: Send + Sync {
    /// Generate a dossier labelled `etiqueta` (project name, PO number,
    /// or a generic selection label) from the given certificates.
    async fn generate(
        &self,
        etiqueta: &str,
        scope: DossierScope,
        certificates: &[Certificate],
    ) -> Result<DossierArtifact, PipelineError>;
}

/// Configuration for [`MockDossierGenerator`].
#[derive(Debug, Clone)]
pub struct DossierConfig {
    /// Artificial generation delay in milliseconds.
    pub delay_ms: u64,
}

impl DossierConfig {
    /// Load configuration from the environment.
    ///
    /// | Variable           | Required | Default |
    /// |--------------------|----------|---------|
    /// | `DOSSIER_DELAY_MS` | no       | `1500`  |
    pub fn from_env() -> Self {
        Self {
            delay_ms: std::env::var("DOSSIER_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DELAY_MS),
        }
    }
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

/// Mock implementation of [`DossierGenerator`].
#[derive(Debug, Clone, Default)]
pub struct MockDossierGenerator {
    config: DossierConfig,
}

impl MockDossierGenerator {
    pub fn new(config: DossierConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DossierGenerator for MockDossierGenerator {
    async fn generate(
        &self,
        etiqueta: &str,
        scope: DossierScope,
        certificates: &[Certificate],
    ) -> Result<DossierArtifact, PipelineError> {
        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;

        let manifiesto: Vec<String> = certificates
            .iter()
            .filter(|cert| scope.includes(cert.estado))
            .map(|cert| format!("{}: {}", cert.id, cert.nombre_archivo))
            .collect();
        let checksum = sha256_hex(manifiesto.join("\n").as_bytes());
        let nombre_archivo = format!("dossier_{}.pdf", slugify(etiqueta));

        tracing::info!(
            etiqueta,
            documentos = manifiesto.len(),
            "dossier generated"
        );
        Ok(DossierArtifact {
            nombre_archivo,
            manifiesto,
            checksum,
            generado_en: Utc::now(),
        })
    }
}

/// Lowercase and replace whitespace with underscores for file names.
fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
