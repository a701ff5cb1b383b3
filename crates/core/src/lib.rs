//! Traza domain core.
//!
//! Pure domain layer for the supplier-document tracking platform: entity
//! types and their enumerations, the free-text query parser, the
//! certificate filter evaluator, aging computation, and the form
//! validation used before any store mutation is attempted.
//!
//! This crate has zero internal dependencies so it can be shared by the
//! in-memory store, the mocked integrations, and any future API or CLI
//! layer.

pub mod aging;
pub mod certificate;
pub mod error;
pub mod filter;
pub mod hashing;
pub mod incidencia;
pub mod notification;
pub mod project;
pub mod purchase_order;
pub mod query;
pub mod timeline;
pub mod types;
pub mod upload;
pub mod user;

pub use certificate::{Certificate, CertificateStatus, DocumentType, Urgency};
pub use error::CoreError;
pub use filter::{filter_certificates, FilterKey, SearchFilters};
pub use query::parse_natural_query;
pub use incidencia::{Incidencia, IncidenciaStatus, IncidenciaType};
pub use notification::{Notification, NotificationType, ObjectType};
pub use project::Project;
pub use purchase_order::PurchaseOrder;
pub use timeline::{TimelineEvent, TimelineEventType};
pub use upload::UploadRequest;
pub use user::User;
