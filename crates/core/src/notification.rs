//! In-app notifications.
//!
//! Notifications are created automatically by store mutations (new
//! certificate, status change, new incident) and are append-only except
//! for the `leido` read flag.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// What triggered the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    NuevoDocumento,
    Incidencia,
    EstadoCambiado,
    /// Kept for wire compatibility; no store mutation currently emits it.
    DossierGenerado,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NuevoDocumento => "nuevo_documento",
            Self::Incidencia => "incidencia",
            Self::EstadoCambiado => "estado_cambiado",
            Self::DossierGenerado => "dossier_generado",
        }
    }
}

/// The kind of entity a notification or timeline event points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Certificado,
    Po,
    Proyecto,
    Incidencia,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Certificado => "certificado",
            Self::Po => "po",
            Self::Proyecto => "proyecto",
            Self::Incidencia => "incidencia",
        }
    }
}

/// An unread/read notification shown in the header bell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: EntityId,
    pub tipo: NotificationType,
    pub titulo: String,
    pub descripcion: String,
    /// Id of the entity the notification refers to.
    pub objeto_id: EntityId,
    pub objeto_tipo: ObjectType,
    pub leido: bool,
    pub created_at: Timestamp,
}
