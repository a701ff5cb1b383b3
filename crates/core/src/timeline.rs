//! Append-only activity timeline.
//!
//! Timeline events form the audit log of the platform: they are never
//! mutated or deleted, and the store keeps them newest-first by
//! insertion order rather than re-sorting.

use serde::{Deserialize, Serialize};

use crate::notification::ObjectType;
use crate::types::{EntityId, Timestamp};
use crate::user::User;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventType {
    DocumentoSubido,
    EstadoCambiado,
    IncidenciaCreada,
    IncidenciaCerrada,
    ComentarioAgregado,
    DossierSolicitado,
    EmailEnviado,
}

impl TimelineEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentoSubido => "documento_subido",
            Self::EstadoCambiado => "estado_cambiado",
            Self::IncidenciaCreada => "incidencia_creada",
            Self::IncidenciaCerrada => "incidencia_cerrada",
            Self::ComentarioAgregado => "comentario_agregado",
            Self::DossierSolicitado => "dossier_solicitado",
            Self::EmailEnviado => "email_enviado",
        }
    }
}

/// One audit log entry, attributed to the user that caused it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: EntityId,
    pub tipo: TimelineEventType,
    pub descripcion: String,
    pub objeto_id: EntityId,
    pub objeto_tipo: ObjectType,
    pub usuario: User,
    /// Free-form JSON payload (dossier scope, email recipients, …).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub created_at: Timestamp,
}
