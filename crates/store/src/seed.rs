//! Demo dataset.
//!
//! A small but referentially consistent slice of production-like data:
//! every certificate points at an existing PO, every PO at an existing
//! project, and every denormalized `proyecto_id` agrees with its PO.

use chrono::{NaiveDate, TimeZone, Utc};
use traza_core::certificate::{Certificate, CertificateStatus, DocumentType, Urgency};
use traza_core::incidencia::{Incidencia, IncidenciaStatus, IncidenciaType};
use traza_core::notification::{Notification, NotificationType, ObjectType};
use traza_core::project::Project;
use traza_core::purchase_order::PurchaseOrder;
use traza_core::timeline::{TimelineEvent, TimelineEventType};
use traza_core::types::Timestamp;
use traza_core::user::User;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

/// The quality department members.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "u1".into(),
            nombre: "Mónica García".into(),
            email: "monica.garcia@empresa.com".into(),
            avatar: Some("/avatars/monica.png".into()),
        },
        User {
            id: "u2".into(),
            nombre: "Porfirio López".into(),
            email: "porfirio.lopez@empresa.com".into(),
            avatar: Some("/avatars/porfirio.png".into()),
        },
        User {
            id: "u3".into(),
            nombre: "Carmen Ruiz".into(),
            email: "carmen.ruiz@empresa.com".into(),
            avatar: Some("/avatars/carmen.png".into()),
        },
        User {
            id: "u4".into(),
            nombre: "Antonio Fernández".into(),
            email: "antonio.fernandez@empresa.com".into(),
            avatar: Some("/avatars/antonio.png".into()),
        },
        User {
            id: "u5".into(),
            nombre: "Laura Martínez".into(),
            email: "laura.martinez@empresa.com".into(),
            avatar: Some("/avatars/laura.png".into()),
        },
    ]
}

/// The hardcoded logged-in user.
pub fn current_user() -> User {
    users().remove(0)
}

pub fn projects() -> Vec<Project> {
    let users = users();
    vec![
        Project {
            id: "P-001".into(),
            nombre: "Planta Química Tarragona".into(),
            owner: users[0].clone(),
            created_at: date(2024, 10, 1),
        },
        Project {
            id: "P-002".into(),
            nombre: "Refinería Huelva".into(),
            owner: users[1].clone(),
            created_at: date(2024, 9, 15),
        },
        Project {
            id: "P-003".into(),
            nombre: "Terminal Portuaria Bilbao".into(),
            owner: users[2].clone(),
            created_at: date(2024, 8, 20),
        },
        Project {
            id: "P-004".into(),
            nombre: "Planta Petroquímica Cartagena".into(),
            owner: users[3].clone(),
            created_at: date(2024, 7, 10),
        },
        Project {
            id: "P-005".into(),
            nombre: "Centro Logístico Valencia".into(),
            owner: users[4].clone(),
            created_at: date(2024, 11, 1),
        },
    ]
}

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    let po = |id: &str, numero: &str, proyecto: &str, proveedor: &str, created: NaiveDate| {
        PurchaseOrder {
            id: id.into(),
            numero: numero.into(),
            proyecto_id: proyecto.into(),
            proveedor: Some(proveedor.into()),
            owner: None,
            created_at: created,
        }
    };
    vec![
        po("PO-4500001", "4500001", "P-001", "Tubacex S.A.", date(2024, 10, 5)),
        po("PO-4500002", "4500002", "P-001", "Acerinox", date(2024, 10, 8)),
        po("PO-4500003", "4500003", "P-001", "Repsol Química", date(2024, 10, 12)),
        po("PO-4500004", "4500004", "P-001", "Sidenor", date(2024, 10, 15)),
        po("PO-4500005", "4500005", "P-001", "ArcelorMittal", date(2024, 10, 20)),
        po("PO-4500010", "4500010", "P-002", "Cepsa", date(2024, 9, 18)),
        po("PO-4500011", "4500011", "P-002", "BP Oil España", date(2024, 9, 22)),
        po("PO-4500012", "4500012", "P-002", "Técnicas Reunidas", date(2024, 9, 28)),
        po("PO-4500020", "4500020", "P-003", "Nervión Industries", date(2024, 8, 25)),
        po("PO-4500030", "4500030", "P-004", "Sabic", date(2024, 7, 15)),
        po("PO-4500040", "4500040", "P-005", "Logista", date(2024, 11, 5)),
        po("PO-4500042", "4500042", "P-005", "XPO Logistics", date(2024, 11, 15)),
    ]
}

pub fn certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: "CERT-001".into(),
            nombre_archivo: "Cert_Tubacex_Lote_A2024.pdf".into(),
            po_id: "PO-4500001".into(),
            proyecto_id: "P-001".into(),
            proveedor: "Tubacex S.A.".into(),
            fecha_recepcion: date(2024, 10, 10),
            estado: CertificateStatus::Revisado,
            urgencia: Urgency::Normal,
            tipo_documento: DocumentType::Certificado,
            nro_albaran: Some("ALB-2024-1001".into()),
            observaciones: None,
            created_at: ts(2024, 10, 10, 9, 0),
            updated_at: ts(2024, 10, 11, 14, 30),
        },
        Certificate {
            id: "CERT-002".into(),
            nombre_archivo: "Cert_Tubacex_Calidad_Material.pdf".into(),
            po_id: "PO-4500001".into(),
            proyecto_id: "P-001".into(),
            proveedor: "Tubacex S.A.".into(),
            fecha_recepcion: date(2024, 10, 12),
            estado: CertificateStatus::PendienteRevision,
            urgencia: Urgency::Urgente,
            tipo_documento: DocumentType::Certificado,
            nro_albaran: None,
            observaciones: None,
            created_at: ts(2024, 10, 12, 11, 0),
            updated_at: ts(2024, 10, 12, 11, 0),
        },
        Certificate {
            id: "CERT-003".into(),
            nombre_archivo: "Albaran_Acerinox_Oct24.pdf".into(),
            po_id: "PO-4500002".into(),
            proyecto_id: "P-001".into(),
            proveedor: "Acerinox".into(),
            fecha_recepcion: date(2024, 10, 15),
            estado: CertificateStatus::Incidencia,
            urgencia: Urgency::Urgente,
            tipo_documento: DocumentType::Albaran,
            nro_albaran: None,
            observaciones: Some("Falta sello del proveedor en página 2".into()),
            created_at: ts(2024, 10, 15, 10, 0),
            updated_at: ts(2024, 10, 16, 9, 0),
        },
        Certificate {
            id: "CERT-004".into(),
            nombre_archivo: "Cert_Repsol_Quimica_Batch.pdf".into(),
            po_id: "PO-4500003".into(),
            proyecto_id: "P-001".into(),
            proveedor: "Repsol Química".into(),
            fecha_recepcion: date(2024, 10, 18),
            estado: CertificateStatus::Revisado,
            urgencia: Urgency::Normal,
            tipo_documento: DocumentType::Certificado,
            nro_albaran: Some("ALB-REP-9922".into()),
            observaciones: None,
            created_at: ts(2024, 10, 18, 8, 30),
            updated_at: ts(2024, 10, 19, 16, 0),
        },
        Certificate {
            id: "CERT-005".into(),
            nombre_archivo: "Factura_Sidenor_001.pdf".into(),
            po_id: "PO-4500004".into(),
            proyecto_id: "P-001".into(),
            proveedor: "Sidenor".into(),
            fecha_recepcion: date(2024, 10, 20),
            estado: CertificateStatus::PendienteRevision,
            urgencia: Urgency::Normal,
            tipo_documento: DocumentType::Factura,
            nro_albaran: None,
            observaciones: None,
            created_at: ts(2024, 10, 20, 14, 0),
            updated_at: ts(2024, 10, 20, 14, 0),
        },
        Certificate {
            id: "CERT-006".into(),
            nombre_archivo: "Cert_ArcelorMittal_Steel.pdf".into(),
            po_id: "PO-4500005".into(),
            proyecto_id: "P-001".into(),
            proveedor: "ArcelorMittal".into(),
            fecha_recepcion: date(2024, 10, 22),
            estado: CertificateStatus::PendienteRevision,
            urgencia: Urgency::Urgente,
            tipo_documento: DocumentType::Certificado,
            nro_albaran: None,
            observaciones: None,
            created_at: ts(2024, 10, 22, 10, 0),
            updated_at: ts(2024, 10, 22, 10, 0),
        },
        Certificate {
            id: "CERT-010".into(),
            nombre_archivo: "Cert_Cepsa_Fuel_Quality.pdf".into(),
            po_id: "PO-4500010".into(),
            proyecto_id: "P-002".into(),
            proveedor: "Cepsa".into(),
            fecha_recepcion: date(2024, 9, 25),
            estado: CertificateStatus::Revisado,
            urgencia: Urgency::Normal,
            tipo_documento: DocumentType::Certificado,
            nro_albaran: Some("CEP-2024-5566".into()),
            observaciones: None,
            created_at: ts(2024, 9, 25, 9, 0),
            updated_at: ts(2024, 9, 26, 11, 0),
        },
        Certificate {
            id: "CERT-011".into(),
            nombre_archivo: "Cert_BP_Lubricants.pdf".into(),
            po_id: "PO-4500011".into(),
            proyecto_id: "P-002".into(),
            proveedor: "BP Oil España".into(),
            fecha_recepcion: date(2024, 9, 28),
            estado: CertificateStatus::PendienteRevision,
            urgencia: Urgency::Normal,
            tipo_documento: DocumentType::Certificado,
            nro_albaran: None,
            observaciones: None,
            created_at: ts(2024, 9, 28, 12, 0),
            updated_at: ts(2024, 9, 28, 12, 0),
        },
    ]
}

pub fn incidencias() -> Vec<Incidencia> {
    vec![
        Incidencia {
            id: "INC-001".into(),
            certificado_id: Some("CERT-003".into()),
            po_id: "PO-4500002".into(),
            proyecto_id: "P-001".into(),
            tipo: IncidenciaType::DocumentoIncorrecto,
            comentario: "Falta sello del proveedor en página 2. Se ha solicitado reenvío.".into(),
            urgencia: Urgency::Urgente,
            estado: IncidenciaStatus::Abierta,
            created_at: ts(2024, 10, 16, 9, 0),
            updated_at: ts(2024, 10, 16, 9, 0),
        },
        Incidencia {
            id: "INC-002".into(),
            certificado_id: None,
            po_id: "PO-4500012".into(),
            proyecto_id: "P-002".into(),
            tipo: IncidenciaType::DocumentoIncorrecto,
            comentario: "Datos de calibración incompletos en el informe técnico.".into(),
            urgencia: Urgency::Urgente,
            estado: IncidenciaStatus::EnCurso,
            created_at: ts(2024, 10, 3, 9, 0),
            updated_at: ts(2024, 10, 5, 11, 0),
        },
        Incidencia {
            id: "INC-005".into(),
            certificado_id: None,
            po_id: "PO-4500040".into(),
            proyecto_id: "P-005".into(),
            tipo: IncidenciaType::FaltaDocumento,
            comentario: "Falta certificado de calidad para el lote recibido el 10/11.".into(),
            urgencia: Urgency::Normal,
            estado: IncidenciaStatus::Abierta,
            created_at: ts(2024, 11, 13, 10, 0),
            updated_at: ts(2024, 11, 13, 10, 0),
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "NOT-001".into(),
            tipo: NotificationType::Incidencia,
            titulo: "Nueva incidencia creada".into(),
            descripcion: "Falta sello del proveedor en página 2. Se ha solici...".into(),
            objeto_id: "INC-001".into(),
            objeto_tipo: ObjectType::Incidencia,
            leido: false,
            created_at: ts(2024, 10, 16, 9, 0),
        },
        Notification {
            id: "NOT-002".into(),
            tipo: NotificationType::NuevoDocumento,
            titulo: "Nuevo certificado subido".into(),
            descripcion: "Se ha subido Cert_ArcelorMittal_Steel.pdf".into(),
            objeto_id: "CERT-006".into(),
            objeto_tipo: ObjectType::Certificado,
            leido: true,
            created_at: ts(2024, 10, 22, 10, 0),
        },
    ]
}

pub fn timeline_events() -> Vec<TimelineEvent> {
    let users = users();
    vec![
        TimelineEvent {
            id: "EVT-003".into(),
            tipo: TimelineEventType::IncidenciaCreada,
            descripcion: "Incidencia creada: Falta sello del proveedor en pá...".into(),
            objeto_id: "INC-001".into(),
            objeto_tipo: ObjectType::Incidencia,
            usuario: users[0].clone(),
            metadata: None,
            created_at: ts(2024, 10, 16, 9, 0),
        },
        TimelineEvent {
            id: "EVT-002".into(),
            tipo: TimelineEventType::EstadoCambiado,
            descripcion: "Estado cambiado a \"revisado\" para Cert_Repsol_Quimica_Batch.pdf".into(),
            objeto_id: "CERT-004".into(),
            objeto_tipo: ObjectType::Certificado,
            usuario: users[1].clone(),
            metadata: None,
            created_at: ts(2024, 10, 19, 16, 0),
        },
        TimelineEvent {
            id: "EVT-001".into(),
            tipo: TimelineEventType::DocumentoSubido,
            descripcion: "Certificado subido: Cert_Tubacex_Lote_A2024.pdf".into(),
            objeto_id: "CERT-001".into(),
            objeto_tipo: ObjectType::Certificado,
            usuario: users[0].clone(),
            metadata: None,
            created_at: ts(2024, 10, 10, 9, 0),
        },
    ]
}
