//! Upload form validation.
//!
//! All field validation happens here, before any store mutation is
//! attempted: the store is never handed a syntactically invalid
//! certificate. Messages are the Spanish strings shown next to the form
//! fields.

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::certificate::{Certificate, CertificateStatus, DocumentType, Urgency};
use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

/// Maximum length for the free-text observations field.
pub const MAX_OBSERVACIONES_LEN: u64 = 500;

/// A validated certificate upload submission.
///
/// Built by the (out-of-scope) upload form; [`Validate::validate`] must
/// pass before the value is turned into a [`Certificate`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadRequest {
    #[validate(length(min = 1, message = "Selecciona un proyecto para continuar"))]
    pub proyecto_id: String,
    #[validate(length(min = 1, message = "Selecciona la PO asociada a este certificado"))]
    pub po_id: String,
    #[validate(length(min = 1, message = "Indica el proveedor del certificado"))]
    pub proveedor: String,
    /// Receipt date; must not lie in the future.
    #[validate(custom(function = validar_fecha_no_futura))]
    pub fecha_recepcion: NaiveDate,
    pub tipo_documento: DocumentType,
    #[serde(default = "default_urgencia")]
    pub urgencia: Urgency,
    #[serde(default)]
    pub nro_albaran: Option<String>,
    #[validate(length(
        max = 500,
        message = "Las observaciones no pueden superar 500 caracteres"
    ))]
    #[serde(default)]
    pub observaciones: Option<String>,
    #[validate(length(min = 1, message = "Selecciona un archivo para subir"))]
    pub nombre_archivo: String,
}

fn default_urgencia() -> Urgency {
    Urgency::Normal
}

fn validar_fecha_no_futura(fecha: &NaiveDate) -> Result<(), ValidationError> {
    if *fecha > Local::now().date_naive() {
        let mut err = ValidationError::new("fecha_futuro");
        err.message = Some("La fecha no puede ser futura".into());
        return Err(err);
    }
    Ok(())
}

impl UploadRequest {
    /// Validate and convert into a certificate ready for the store.
    ///
    /// New certificates always start in `pendiente_revision` with both
    /// timestamps set to `now`.
    pub fn into_certificate(self, id: EntityId, now: Timestamp) -> Result<Certificate, CoreError> {
        self.validate().map_err(validation_error)?;
        Ok(Certificate {
            id,
            nombre_archivo: self.nombre_archivo,
            po_id: self.po_id,
            proyecto_id: self.proyecto_id,
            proveedor: self.proveedor,
            fecha_recepcion: self.fecha_recepcion,
            estado: CertificateStatus::PendienteRevision,
            urgencia: self.urgencia,
            tipo_documento: self.tipo_documento,
            nro_albaran: self.nro_albaran,
            observaciones: self.observaciones,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Non-empty check for incident comments, shared by the incident form.
pub fn validate_incidencia_comentario(comentario: &str) -> Result<(), CoreError> {
    if comentario.trim().is_empty() {
        return Err(CoreError::Validation(
            "Añade un comentario para la incidencia".to_string(),
        ));
    }
    Ok(())
}

/// Flatten `validator` field errors into a single [`CoreError`].
pub fn validation_error(errors: ValidationErrors) -> CoreError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    messages.sort();
    CoreError::Validation(messages.join("; "))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, Utc};

    use super::*;

    fn valid_request() -> UploadRequest {
        UploadRequest {
            proyecto_id: "P-001".to_string(),
            po_id: "PO-4500001".to_string(),
            proveedor: "Tubacex S.A.".to_string(),
            fecha_recepcion: Local::now().date_naive() - Duration::days(2),
            tipo_documento: DocumentType::Certificado,
            urgencia: Urgency::Normal,
            nro_albaran: Some("ALB-9931".to_string()),
            observaciones: None,
            nombre_archivo: "certificado_tubacex_marzo.pdf".to_string(),
        }
    }

    #[test]
    fn complete_request_produces_pending_certificate() {
        let now = Utc::now();
        let cert = valid_request()
            .into_certificate("CERT-1".to_string(), now)
            .unwrap();
        assert_eq!(cert.estado, CertificateStatus::PendienteRevision);
        assert_eq!(cert.created_at, cert.updated_at);
        assert_eq!(cert.proyecto_id, "P-001");
    }

    #[test]
    fn missing_project_blocks_with_spanish_message() {
        let mut req = valid_request();
        req.proyecto_id = String::new();
        let err = req
            .into_certificate("CERT-1".to_string(), Utc::now())
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg)
            if msg.contains("Selecciona un proyecto para continuar"));
    }

    #[test]
    fn missing_po_and_provider_both_reported() {
        let mut req = valid_request();
        req.po_id = String::new();
        req.proveedor = String::new();
        let err = req
            .into_certificate("CERT-1".to_string(), Utc::now())
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Selecciona la PO asociada a este certificado"));
        assert!(msg.contains("Indica el proveedor del certificado"));
    }

    #[test]
    fn future_receipt_date_rejected() {
        let mut req = valid_request();
        req.fecha_recepcion = Local::now().date_naive() + Duration::days(1);
        let err = req
            .into_certificate("CERT-1".to_string(), Utc::now())
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg)
            if msg.contains("La fecha no puede ser futura"));
    }

    #[test]
    fn today_is_an_acceptable_receipt_date() {
        let mut req = valid_request();
        req.fecha_recepcion = Local::now().date_naive();
        assert!(req.into_certificate("CERT-1".to_string(), Utc::now()).is_ok());
    }

    #[test]
    fn oversized_observations_rejected() {
        let mut req = valid_request();
        req.observaciones = Some("x".repeat(MAX_OBSERVACIONES_LEN as usize + 1));
        let err = req
            .into_certificate("CERT-1".to_string(), Utc::now())
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg)
            if msg.contains("Las observaciones no pueden superar 500 caracteres"));
    }

    #[test]
    fn observations_at_limit_accepted() {
        let mut req = valid_request();
        req.observaciones = Some("x".repeat(MAX_OBSERVACIONES_LEN as usize));
        assert!(req.into_certificate("CERT-1".to_string(), Utc::now()).is_ok());
    }

    #[test]
    fn incidencia_comment_must_not_be_blank() {
        assert!(validate_incidencia_comentario("Falta el certificado 3.1").is_ok());
        assert!(validate_incidencia_comentario("").is_err());
        assert!(validate_incidencia_comentario("   ").is_err());
    }
}
