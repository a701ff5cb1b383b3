//! Mocked external integrations.
//!
//! The platform's OCR extraction, dossier generation, and email
//! notification are stand-ins: each lives behind an async trait so a
//! real implementation can be substituted without touching the store or
//! view contracts, and each mock paces itself with a fixed-duration
//! `tokio::time::sleep` instead of performing real I/O.
//!
//! - [`ProviderExtractor`] / [`PatternExtractor`] — supplier detection
//!   from a document file name.
//! - [`DossierGenerator`] / [`MockDossierGenerator`] — certificate
//!   bundle export.
//! - [`EmailNotifier`] / [`MockEmailNotifier`] — documentation request
//!   emails.
//! - [`flows`] — glue that runs an integration and records the
//!   corresponding store timeline event.

pub mod dossier;
pub mod email;
pub mod error;
pub mod extract;
pub mod flows;

pub use dossier::{DossierArtifact, DossierGenerator, DossierScope, MockDossierGenerator};
pub use email::{EmailNotifier, EmailReceipt, EmailRequest, MockEmailNotifier};
pub use error::PipelineError;
pub use extract::{ExtractionResult, PatternExtractor, ProviderExtractor};
