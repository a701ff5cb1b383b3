//! Supplier extraction from document file names.
//!
//! Stands in for a real OCR/AI layer: [`PatternExtractor`] matches the
//! file name against a fixed table of known supplier markers and invents
//! a confidence score. Unknown files fall back to a random known
//! supplier at low confidence so the upload form always has something to
//! prefill.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::Serialize;

use crate::error::PipelineError;

/// Default extraction pacing delay in milliseconds.
const DEFAULT_DELAY_MS: u64 = 1500;

/// Marker substrings (lowercase) and the canonical supplier they map to,
/// scanned in order; the first hit wins.
const PROVIDER_MARKERS: &[(&str, &str)] = &[
    ("tubacex", "Tubacex S.A."),
    ("acerinox", "Acerinox"),
    ("repsol", "Repsol Química"),
    ("sidenor", "Sidenor"),
    ("arcelor", "ArcelorMittal"),
    ("cepsa", "Cepsa"),
    ("bp", "BP Oil España"),
    ("tecnicas", "Técnicas Reunidas"),
    ("nervion", "Nervión Industries"),
    ("zamakona", "Astilleros Zamakona"),
    ("euskal", "Euskal Forging"),
    ("vicinay", "Vicinay Cadenas"),
    ("sabic", "Sabic"),
    ("basf", "BASF Española"),
    ("dow", "Dow Chemical"),
    ("ercros", "Ercros"),
    ("logista", "Logista"),
    ("xpo", "XPO Logistics"),
];

/// Suppliers used when no marker matches.
const FALLBACK_PROVIDERS: &[&str] = &["Tubacex S.A.", "Acerinox", "Sidenor"];

/// A detected supplier with the extractor's confidence in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub proveedor: String,
    /// 0.0–1.0; marker hits score high, fallbacks score low.
    pub confianza: f64,
}

/// Detects the supplier behind an uploaded document.
#[async_trait]
pub trait ProviderExtractor: Send + Sync {
    async fn extract(&self, nombre_archivo: &str) -> Result<ExtractionResult, PipelineError>;
}

/// Configuration for [`PatternExtractor`].
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Artificial processing delay in milliseconds.
    pub delay_ms: u64,
}

impl ExtractionConfig {
    /// Load configuration from the environment.
    ///
    /// | Variable              | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `EXTRACTION_DELAY_MS` | no       | `1500`  |
    pub fn from_env() -> Self {
        Self {
            delay_ms: std::env::var("EXTRACTION_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DELAY_MS),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

/// Marker-table extractor; the mock implementation of
/// [`ProviderExtractor`].
#[derive(Debug, Clone, Default)]
pub struct PatternExtractor {
    config: ExtractionConfig,
}

impl PatternExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProviderExtractor for PatternExtractor {
    async fn extract(&self, nombre_archivo: &str) -> Result<ExtractionResult, PipelineError> {
        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;

        let lower = nombre_archivo.to_lowercase();
        let mut rng = rand::rng();

        for (marker, proveedor) in PROVIDER_MARKERS {
            if lower.contains(marker) {
                let result = ExtractionResult {
                    proveedor: (*proveedor).to_string(),
                    confianza: rng.random_range(0.85..0.95),
                };
                tracing::debug!(
                    nombre_archivo,
                    proveedor = %result.proveedor,
                    "supplier marker matched"
                );
                return Ok(result);
            }
        }

        let proveedor = FALLBACK_PROVIDERS[rng.random_range(0..FALLBACK_PROVIDERS.len())];
        tracing::debug!(nombre_archivo, proveedor, "no marker matched, using fallback");
        Ok(ExtractionResult {
            proveedor: proveedor.to_string(),
            confianza: rng.random_range(0.45..0.65),
        })
    }
}
