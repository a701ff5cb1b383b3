//! Certificates and their status/urgency/document-type enumerations.
//!
//! A certificate is one supplier compliance document (certificate,
//! delivery note, invoice, other) tied to exactly one purchase order.
//! `proyecto_id` is denormalized from the PO and must stay equal to the
//! PO's `proyecto_id`; the store enforces this on insert.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Review status of a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateStatus {
    /// Received but not yet reviewed.
    PendienteRevision,
    /// Reviewed and accepted.
    Revisado,
    /// Flagged with an incident.
    Incidencia,
}

impl CertificateStatus {
    /// Canonical wire value, as stored and matched by the query parser.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendienteRevision => "pendiente_revision",
            Self::Revisado => "revisado",
            Self::Incidencia => "incidencia",
        }
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority flag, independent of review status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Normal,
    Urgente,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Urgente => "urgente",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of supplier document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Certificado,
    Albaran,
    Factura,
    Otro,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Certificado => "certificado",
            Self::Albaran => "albaran",
            Self::Factura => "factura",
            Self::Otro => "otro",
        }
    }
}

// ---------------------------------------------------------------------------
// Certificate
// ---------------------------------------------------------------------------

/// A supplier compliance document tied to one purchase order.
///
/// `updated_at >= created_at` always holds; every mutation refreshes
/// `updated_at`. Certificates are never deleted in-session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: EntityId,
    pub nombre_archivo: String,
    pub po_id: EntityId,
    /// Denormalized from the referenced PO.
    pub proyecto_id: EntityId,
    pub proveedor: String,
    /// Calendar date the document was received.
    pub fecha_recepcion: NaiveDate,
    pub estado: CertificateStatus,
    pub urgencia: Urgency,
    pub tipo_documento: DocumentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nro_albaran: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
