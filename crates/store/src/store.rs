//! The application store: collections, mutations, and side-effect fan-out.

use chrono::Utc;
use serde_json::Value;
use traza_core::certificate::{Certificate, CertificateStatus, Urgency};
use traza_core::error::CoreError;
use traza_core::filter::{filter_certificates, FilterKey, SearchFilters};
use traza_core::incidencia::{validate_transition, Incidencia, IncidenciaStatus};
use traza_core::notification::{Notification, NotificationType, ObjectType};
use traza_core::project::Project;
use traza_core::purchase_order::PurchaseOrder;
use traza_core::timeline::{TimelineEvent, TimelineEventType};
use traza_core::upload::validate_incidencia_comentario;
use traza_core::user::User;

use crate::ids::{self, prefix};
use crate::seed;
use crate::ui::UiState;

/// Notification descriptions keep the first 50 chars of the comment.
const NOTIFICATION_COMMENT_CHARS: usize = 50;

/// Timeline descriptions keep the first 30 chars of the comment.
const TIMELINE_COMMENT_CHARS: usize = 30;

/// Take the first `max` chars and append an ellipsis.
fn comment_preview(text: &str, max: usize) -> String {
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

/// Single authoritative in-memory state container.
///
/// Owns every domain collection and every mutation entry point. The
/// mutations marked as such in the module docs fan out into exactly one
/// [`Notification`] and one [`TimelineEvent`]; lookup misses return a
/// typed error and emit nothing.
#[derive(Debug)]
pub struct AppStore {
    current_user: User,
    projects: Vec<Project>,
    purchase_orders: Vec<PurchaseOrder>,
    certificates: Vec<Certificate>,
    incidencias: Vec<Incidencia>,
    /// Newest first.
    notifications: Vec<Notification>,
    /// Newest first; append-only.
    timeline: Vec<TimelineEvent>,
    search_query: String,
    filters: SearchFilters,
    ui: UiState,
}

impl AppStore {
    /// An empty store acting on behalf of `current_user`.
    pub fn new(current_user: User) -> Self {
        Self {
            current_user,
            projects: Vec::new(),
            purchase_orders: Vec::new(),
            certificates: Vec::new(),
            incidencias: Vec::new(),
            notifications: Vec::new(),
            timeline: Vec::new(),
            search_query: String::new(),
            filters: SearchFilters::default(),
            ui: UiState::default(),
        }
    }

    /// A store pre-loaded with the demo dataset.
    pub fn with_seed_data() -> Self {
        Self {
            current_user: seed::current_user(),
            projects: seed::projects(),
            purchase_orders: seed::purchase_orders(),
            certificates: seed::certificates(),
            incidencias: seed::incidencias(),
            notifications: seed::notifications(),
            timeline: seed::timeline_events(),
            search_query: String::new(),
            filters: SearchFilters::default(),
            ui: UiState::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Read interface
    // -----------------------------------------------------------------------

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn purchase_orders(&self) -> &[PurchaseOrder] {
        &self.purchase_orders
    }

    pub fn certificates(&self) -> &[Certificate] {
        &self.certificates
    }

    pub fn incidencias(&self) -> &[Incidencia] {
        &self.incidencias
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    pub fn certificate(&self, id: &str) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.id == id)
    }

    pub fn incidencia(&self, id: &str) -> Option<&Incidencia> {
        self.incidencias.iter().find(|i| i.id == id)
    }

    // -----------------------------------------------------------------------
    // Derived reads
    // -----------------------------------------------------------------------

    pub fn certificates_for_po(&self, po_id: &str) -> Vec<&Certificate> {
        self.certificates.iter().filter(|c| c.po_id == po_id).collect()
    }

    pub fn certificates_for_project(&self, proyecto_id: &str) -> Vec<&Certificate> {
        self.certificates
            .iter()
            .filter(|c| c.proyecto_id == proyecto_id)
            .collect()
    }

    pub fn incidencias_for_project(&self, proyecto_id: &str) -> Vec<&Incidencia> {
        self.incidencias
            .iter()
            .filter(|i| i.proyecto_id == proyecto_id)
            .collect()
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.leido).count()
    }

    pub fn count_certificates_with_status(&self, estado: CertificateStatus) -> usize {
        self.certificates.iter().filter(|c| c.estado == estado).count()
    }

    pub fn count_incidencias_with_status(&self, estado: IncidenciaStatus) -> usize {
        self.incidencias.iter().filter(|i| i.estado == estado).count()
    }

    /// The certificate list after applying the store's own text query and
    /// structured filters.
    pub fn filtered_certificates(&self) -> Vec<&Certificate> {
        filter_certificates(&self.certificates, &self.search_query, &self.filters)
    }

    // -----------------------------------------------------------------------
    // Certificate mutations
    // -----------------------------------------------------------------------

    /// Append a new certificate.
    ///
    /// The certificate's id must be unused, its PO must exist, and its
    /// denormalized `proyecto_id` must equal the PO's. Emits one
    /// `nuevo_documento` notification and one `documento_subido` timeline
    /// event.
    pub fn add_certificate(&mut self, cert: Certificate) -> Result<(), CoreError> {
        if self.certificate(&cert.id).is_some() {
            return Err(CoreError::Conflict(format!(
                "certificate id {} already exists",
                cert.id
            )));
        }
        let po = self
            .purchase_orders
            .iter()
            .find(|po| po.id == cert.po_id)
            .ok_or(CoreError::NotFound {
                entity: "purchase_order",
                id: cert.po_id.clone(),
            })?;
        if po.proyecto_id != cert.proyecto_id {
            return Err(CoreError::Conflict(format!(
                "certificate proyecto_id {} does not match PO {} (project {})",
                cert.proyecto_id, po.id, po.proyecto_id
            )));
        }

        let id = cert.id.clone();
        let nombre = cert.nombre_archivo.clone();
        self.certificates.push(cert);
        tracing::info!(certificate = %id, "certificate added");

        self.emit_notification(
            NotificationType::NuevoDocumento,
            "Nuevo certificado subido".to_string(),
            format!("Se ha subido {nombre}"),
            id.clone(),
            ObjectType::Certificado,
        );
        self.emit_timeline_event(
            TimelineEventType::DocumentoSubido,
            format!("Certificado subido: {nombre}"),
            id,
            ObjectType::Certificado,
            None,
        );
        Ok(())
    }

    /// Change a certificate's review status.
    ///
    /// A non-empty `comment` replaces the stored observations; otherwise
    /// the existing observations are kept. Emits one `estado_cambiado`
    /// notification and timeline event.
    pub fn update_certificate_status(
        &mut self,
        id: &str,
        estado: CertificateStatus,
        comment: Option<String>,
    ) -> Result<(), CoreError> {
        let now = Utc::now();
        let cert = self
            .certificates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound {
                entity: "certificate",
                id: id.to_string(),
            })?;
        cert.estado = estado;
        if let Some(comment) = comment.filter(|c| !c.is_empty()) {
            cert.observaciones = Some(comment);
        }
        cert.updated_at = now;
        let nombre = cert.nombre_archivo.clone();
        tracing::info!(certificate = %id, estado = %estado, "certificate status updated");

        self.emit_notification(
            NotificationType::EstadoCambiado,
            "Estado actualizado".to_string(),
            format!("{nombre} ha cambiado a {estado}"),
            id.to_string(),
            ObjectType::Certificado,
        );
        self.emit_timeline_event(
            TimelineEventType::EstadoCambiado,
            format!("Estado cambiado a \"{estado}\" para {nombre}"),
            id.to_string(),
            ObjectType::Certificado,
            None,
        );
        Ok(())
    }

    /// Flip a certificate's urgency flag.
    ///
    /// Deliberately silent: no notification and no timeline event.
    pub fn update_certificate_urgency(
        &mut self,
        id: &str,
        urgencia: Urgency,
    ) -> Result<(), CoreError> {
        let cert = self
            .certificates
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound {
                entity: "certificate",
                id: id.to_string(),
            })?;
        cert.urgencia = urgencia;
        cert.updated_at = Utc::now();
        tracing::debug!(certificate = %id, urgencia = %urgencia, "certificate urgency updated");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Incidencia mutations
    // -----------------------------------------------------------------------

    /// Append a new incident.
    ///
    /// The id must be unused and the comment non-empty. Emits one
    /// `incidencia` notification and one `incidencia_creada` timeline
    /// event, both carrying a truncated comment preview.
    pub fn add_incidencia(&mut self, incidencia: Incidencia) -> Result<(), CoreError> {
        if self.incidencia(&incidencia.id).is_some() {
            return Err(CoreError::Conflict(format!(
                "incidencia id {} already exists",
                incidencia.id
            )));
        }
        validate_incidencia_comentario(&incidencia.comentario)?;

        let id = incidencia.id.clone();
        let comentario = incidencia.comentario.clone();
        self.incidencias.push(incidencia);
        tracing::info!(incidencia = %id, "incidencia added");

        self.emit_notification(
            NotificationType::Incidencia,
            "Nueva incidencia creada".to_string(),
            comment_preview(&comentario, NOTIFICATION_COMMENT_CHARS),
            id.clone(),
            ObjectType::Incidencia,
        );
        self.emit_timeline_event(
            TimelineEventType::IncidenciaCreada,
            format!(
                "Incidencia creada: {}",
                comment_preview(&comentario, TIMELINE_COMMENT_CHARS)
            ),
            id,
            ObjectType::Incidencia,
            None,
        );
        Ok(())
    }

    /// Move an incident through its lifecycle.
    ///
    /// The transition must be allowed by the status table; on violation
    /// the incident is left untouched. A timeline event is emitted only
    /// when the incident reaches `cerrada`.
    pub fn update_incidencia_status(
        &mut self,
        id: &str,
        estado: IncidenciaStatus,
    ) -> Result<(), CoreError> {
        let now = Utc::now();
        let inc = self
            .incidencias
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CoreError::NotFound {
                entity: "incidencia",
                id: id.to_string(),
            })?;
        validate_transition(inc.estado, estado)?;
        inc.estado = estado;
        inc.updated_at = now;
        tracing::info!(incidencia = %id, estado = %estado, "incidencia status updated");

        if estado == IncidenciaStatus::Cerrada {
            self.emit_timeline_event(
                TimelineEventType::IncidenciaCerrada,
                format!("Incidencia {id} cerrada"),
                id.to_string(),
                ObjectType::Incidencia,
                None,
            );
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Notifications
    // -----------------------------------------------------------------------

    /// Prepend a notification (newest first).
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
    }

    /// Mark one notification as read. Returns `true` if it was found.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.leido = true;
                true
            }
            None => false,
        }
    }

    /// Mark every notification as read, returning how many were unread.
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut marked = 0;
        for n in self.notifications.iter_mut().filter(|n| !n.leido) {
            n.leido = true;
            marked += 1;
        }
        marked
    }

    // -----------------------------------------------------------------------
    // Timeline
    // -----------------------------------------------------------------------

    /// Prepend a timeline event. The timeline is append-only: events are
    /// never mutated or removed, and newest-first ordering comes from
    /// insertion, not re-sorting.
    pub fn add_timeline_event(&mut self, event: TimelineEvent) {
        self.timeline.insert(0, event);
    }

    // -----------------------------------------------------------------------
    // Search & filter state
    // -----------------------------------------------------------------------

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
    }

    /// Reset both the structured filters and the free-text query.
    pub fn clear_filters(&mut self) {
        self.filters = SearchFilters::default();
        self.search_query.clear();
    }

    /// Drop a single filter dimension.
    pub fn remove_filter(&mut self, key: FilterKey) {
        self.filters.remove(key);
    }

    // -----------------------------------------------------------------------
    // Fan-out
    // -----------------------------------------------------------------------

    fn emit_notification(
        &mut self,
        tipo: NotificationType,
        titulo: String,
        descripcion: String,
        objeto_id: String,
        objeto_tipo: ObjectType,
    ) {
        self.add_notification(Notification {
            id: ids::new_id(prefix::NOTIFICATION),
            tipo,
            titulo,
            descripcion,
            objeto_id,
            objeto_tipo,
            leido: false,
            created_at: Utc::now(),
        });
    }

    fn emit_timeline_event(
        &mut self,
        tipo: TimelineEventType,
        descripcion: String,
        objeto_id: String,
        objeto_tipo: ObjectType,
        metadata: Option<Value>,
    ) {
        self.add_timeline_event(TimelineEvent {
            id: ids::new_id(prefix::EVENT),
            tipo,
            descripcion,
            objeto_id,
            objeto_tipo,
            usuario: self.current_user.clone(),
            metadata,
            created_at: Utc::now(),
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
