//! Integration flows.
//!
//! Each flow runs one mocked integration and, on success, records the
//! corresponding timeline event in the store. The store itself stays
//! unaware of the integrations; these helpers are the only glue.

use chrono::Utc;
use traza_core::notification::ObjectType;
use traza_core::timeline::{TimelineEvent, TimelineEventType};
use traza_store::ids::{self, prefix};
use traza_store::AppStore;

use crate::dossier::{DossierArtifact, DossierGenerator, DossierScope};
use crate::email::{EmailNotifier, EmailReceipt, EmailRequest};
use crate::error::PipelineError;

/// Label used when a dossier is requested without a project/PO context.
const DOSSIER_FALLBACK_LABEL: &str = "selección";

/// Generate a dossier over the store's certificates and record the
/// `dossier_solicitado` timeline event.
///
/// `etiqueta` is the project name or PO number the dossier was requested
/// from, when there is one.
pub async fn generar_dossier(
    store: &mut AppStore,
    generator: &dyn DossierGenerator,
    etiqueta: Option<&str>,
    scope: DossierScope,
) -> Result<DossierArtifact, PipelineError> {
    let label = etiqueta.unwrap_or(DOSSIER_FALLBACK_LABEL);
    let artifact = generator
        .generate(label, scope, store.certificates())
        .await?;

    store.add_timeline_event(TimelineEvent {
        id: ids::new_id(prefix::EVENT),
        tipo: TimelineEventType::DossierSolicitado,
        descripcion: format!("Dossier generado para {label}"),
        objeto_id: etiqueta.unwrap_or("dossier").to_string(),
        objeto_tipo: ObjectType::Proyecto,
        usuario: store.current_user().clone(),
        metadata: Some(serde_json::json!({ "scope": scope })),
        created_at: Utc::now(),
    });
    Ok(artifact)
}

/// Send a documentation request email and record the `email_enviado`
/// timeline event.
pub async fn enviar_email(
    store: &mut AppStore,
    notifier: &dyn EmailNotifier,
    request: &EmailRequest,
) -> Result<EmailReceipt, PipelineError> {
    let receipt = notifier.send(request).await?;

    store.add_timeline_event(TimelineEvent {
        id: ids::new_id(prefix::EVENT),
        tipo: TimelineEventType::EmailEnviado,
        descripcion: format!(
            "Email enviado a {} destinatario(s): {}",
            receipt.destinatarios, receipt.asunto
        ),
        objeto_id: "email".to_string(),
        objeto_tipo: ObjectType::Proyecto,
        usuario: store.current_user().clone(),
        metadata: Some(serde_json::json!({
            "recipients": request.destinatarios,
            "subject": request.asunto,
        })),
        created_at: Utc::now(),
    });
    Ok(receipt)
}
