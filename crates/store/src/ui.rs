//! Transient UI state.
//!
//! Selection and modal flags live alongside the domain collections so
//! the view layer has a single source of truth, but none of this is
//! part of the durable model.

use traza_core::types::EntityId;

/// Which modal dialogs exist in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Upload,
    Incidencia,
    Email,
    Dossier,
}

/// Current selection and modal visibility.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub selected_project_id: Option<EntityId>,
    pub selected_po_id: Option<EntityId>,
    upload_open: bool,
    incidencia_open: bool,
    email_open: bool,
    dossier_open: bool,
}

impl UiState {
    /// Select a project; any PO selection belongs to the previous
    /// project and is reset.
    pub fn select_project(&mut self, id: Option<EntityId>) {
        self.selected_project_id = id;
        self.selected_po_id = None;
    }

    pub fn select_po(&mut self, id: Option<EntityId>) {
        self.selected_po_id = id;
    }

    pub fn open(&mut self, modal: Modal) {
        *self.flag_mut(modal) = true;
    }

    pub fn close(&mut self, modal: Modal) {
        *self.flag_mut(modal) = false;
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::Upload => self.upload_open,
            Modal::Incidencia => self.incidencia_open,
            Modal::Email => self.email_open,
            Modal::Dossier => self.dossier_open,
        }
    }

    fn flag_mut(&mut self, modal: Modal) -> &mut bool {
        match modal {
            Modal::Upload => &mut self.upload_open,
            Modal::Incidencia => &mut self.incidencia_open,
            Modal::Email => &mut self.email_open,
            Modal::Dossier => &mut self.dossier_open,
        }
    }
}
