//! Documentation request emails.
//!
//! [`MockEmailNotifier`] sends nothing: it validates the request, waits
//! out the pacing delay, and returns a receipt the caller turns into an
//! `email_enviado` timeline event.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use traza_core::types::Timestamp;

use crate::error::PipelineError;

/// Default send pacing delay in milliseconds.
const DEFAULT_DELAY_MS: u64 = 800;

/// Default sender address when `EMAIL_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "calidad@traza.local";

/// Default subject for documentation requests.
pub const DEFAULT_SUBJECT: &str = "Solicitud de documentación - Departamento de Calidad";

/// An outgoing documentation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailRequest {
    pub destinatarios: Vec<String>,
    pub asunto: String,
    pub cuerpo: String,
}

impl EmailRequest {
    /// The standard documentation request template, signed by the
    /// current user.
    pub fn solicitud_documentacion(destinatarios: Vec<String>, firmante: &str) -> Self {
        Self {
            destinatarios,
            asunto: DEFAULT_SUBJECT.to_string(),
            cuerpo: format!(
                "Estimado/a,\n\n\
                 Desde el Departamento de Calidad, nos ponemos en contacto para \
                 solicitar la siguiente documentación:\n\n\
                 - [Describir documentación requerida]\n\n\
                 Quedamos a la espera de su respuesta.\n\n\
                 Saludos cordiales,\n{firmante}\nDepartamento de Calidad"
            ),
        }
    }
}

/// Proof that a request was accepted for delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailReceipt {
    /// How many recipients the message went to.
    pub destinatarios: usize,
    pub asunto: String,
    pub enviado_en: Timestamp,
}

/// Sends documentation request emails.
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    async fn send(&self, request: &EmailRequest) -> Result<EmailReceipt, PipelineError>;
}

/// Configuration for [`MockEmailNotifier`].
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Artificial send delay in milliseconds.
    pub delay_ms: u64,
    /// Sender address recorded in logs.
    pub from_address: String,
}

impl EmailConfig {
    /// Load configuration from the environment.
    ///
    /// | Variable         | Required | Default               |
    /// |------------------|----------|-----------------------|
    /// | `EMAIL_DELAY_MS` | no       | `800`                 |
    /// | `EMAIL_FROM`     | no       | `calidad@traza.local` |
    pub fn from_env() -> Self {
        Self {
            delay_ms: std::env::var("EMAIL_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DELAY_MS),
            from_address: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
        }
    }
}

/// Mock implementation of [`EmailNotifier`].
#[derive(Debug, Clone, Default)]
pub struct MockEmailNotifier {
    config: EmailConfig,
}

impl MockEmailNotifier {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EmailNotifier for MockEmailNotifier {
    async fn send(&self, request: &EmailRequest) -> Result<EmailReceipt, PipelineError> {
        if request.destinatarios.is_empty() {
            return Err(PipelineError::Validation(
                "Selecciona al menos un destinatario".to_string(),
            ));
        }

        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        tracing::info!(
            from = %self.config.from_address,
            destinatarios = request.destinatarios.len(),
            asunto = %request.asunto,
            "notification email sent"
        );
        Ok(EmailReceipt {
            destinatarios: request.destinatarios.len(),
            asunto: request.asunto.clone(),
            enviado_en: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn notifier() -> MockEmailNotifier {
        MockEmailNotifier::new(EmailConfig {
            delay_ms: 10,
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn send_returns_a_receipt_for_each_recipient_count() {
        let request = EmailRequest::solicitud_documentacion(
            vec![
                "porfirio.lopez@empresa.com".to_string(),
                "carmen.ruiz@empresa.com".to_string(),
            ],
            "Mónica García",
        );
        let receipt = notifier().send(&request).await.unwrap();
        assert_eq!(receipt.destinatarios, 2);
        assert_eq!(receipt.asunto, DEFAULT_SUBJECT);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_recipient_list_is_rejected() {
        let request = EmailRequest::solicitud_documentacion(Vec::new(), "Mónica García");
        let err = notifier().send(&request).await.unwrap_err();
        assert_matches!(err, PipelineError::Validation(ref msg)
            if msg.contains("al menos un destinatario"));
    }

    #[test]
    fn template_is_signed_by_the_current_user() {
        let request =
            EmailRequest::solicitud_documentacion(vec!["a@empresa.com".to_string()], "Carmen Ruiz");
        assert!(request.cuerpo.contains("Carmen Ruiz"));
        assert!(request.cuerpo.contains("Departamento de Calidad"));
    }

    #[test]
    fn config_defaults_without_env() {
        std::env::remove_var("EMAIL_DELAY_MS");
        std::env::remove_var("EMAIL_FROM");
        let config = EmailConfig::from_env();
        assert_eq!(config.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(config.from_address, DEFAULT_FROM_ADDRESS);
    }
}
