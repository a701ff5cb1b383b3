//! Incidents raised against a PO or a specific certificate.
//!
//! Incident status moves through an explicit transition table: an open
//! incident must pass through `en_curso` before it can be closed, and a
//! closed incident can be reopened. The table is validated inside the
//! store mutation, not left to the caller.

use serde::{Deserialize, Serialize};

use crate::certificate::Urgency;
use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// What kind of problem was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidenciaType {
    FaltaDocumento,
    DocumentoIncorrecto,
    Otro,
}

impl IncidenciaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FaltaDocumento => "falta_documento",
            Self::DocumentoIncorrecto => "documento_incorrecto",
            Self::Otro => "otro",
        }
    }
}

/// Lifecycle status of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidenciaStatus {
    Abierta,
    EnCurso,
    Cerrada,
}

impl IncidenciaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abierta => "abierta",
            Self::EnCurso => "en_curso",
            Self::Cerrada => "cerrada",
        }
    }

    /// Returns `true` if the transition `self -> next` is allowed.
    ///
    /// Allowed transitions: `abierta -> en_curso`, `en_curso -> cerrada`,
    /// and `cerrada -> abierta` (reopen). Closing an incident directly
    /// from `abierta` is not allowed; neither are self-transitions.
    pub fn can_transition_to(&self, next: IncidenciaStatus) -> bool {
        matches!(
            (self, next),
            (Self::Abierta, Self::EnCurso)
                | (Self::EnCurso, Self::Cerrada)
                | (Self::Cerrada, Self::Abierta)
        )
    }
}

impl std::fmt::Display for IncidenciaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a status transition, returning a typed error on violation.
pub fn validate_transition(
    from: IncidenciaStatus,
    to: IncidenciaStatus,
) -> Result<(), CoreError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Incidencia
// ---------------------------------------------------------------------------

/// A reported problem against a PO or certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incidencia {
    pub id: EntityId,
    /// The certificate the incident refers to, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificado_id: Option<EntityId>,
    pub po_id: EntityId,
    pub proyecto_id: EntityId,
    pub tipo: IncidenciaType,
    /// Non-empty free-text description of the problem.
    pub comentario: String,
    pub urgencia: Urgency,
    pub estado: IncidenciaStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
