//! Structured certificate filters and the filter evaluator.
//!
//! A [`SearchFilters`] value holds one optional constraint per dimension;
//! `None` means "no constraint on that dimension", never "match empty".
//! [`filter_certificates`] applies every present constraint with logical
//! AND, preserving input order. Both are pure and total: an empty result
//! set is a valid outcome, not a failure.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::aging::aging_days;
use crate::certificate::{Certificate, CertificateStatus, Urgency};

// ---------------------------------------------------------------------------
// SearchFilters
// ---------------------------------------------------------------------------

/// Sparse structured filter over the certificate collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Exact match against `proyecto_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proyecto: Option<String>,
    /// Exact match against `po_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po: Option<String>,
    /// Case-insensitive substring match against `proveedor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<CertificateStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgencia: Option<Urgency>,
    /// Inclusive lower bound on `fecha_recepcion`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_desde: Option<NaiveDate>,
    /// Inclusive upper bound on `fecha_recepcion`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hasta: Option<NaiveDate>,
    /// Minimum aging in whole days (inclusive, open-ended above).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aging_dias: Option<i64>,
}

/// Addresses one filter dimension, for keyed removal of a single chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    Proyecto,
    Po,
    Proveedor,
    Estado,
    Urgencia,
    FechaDesde,
    FechaHasta,
    AgingDias,
}

impl SearchFilters {
    /// Returns `true` if no dimension carries a constraint.
    pub fn is_empty(&self) -> bool {
        self.active_keys().is_empty()
    }

    /// The dimensions that currently carry a constraint.
    pub fn active_keys(&self) -> Vec<FilterKey> {
        let mut keys = Vec::new();
        if self.proyecto.is_some() {
            keys.push(FilterKey::Proyecto);
        }
        if self.po.is_some() {
            keys.push(FilterKey::Po);
        }
        if self.proveedor.is_some() {
            keys.push(FilterKey::Proveedor);
        }
        if self.estado.is_some() {
            keys.push(FilterKey::Estado);
        }
        if self.urgencia.is_some() {
            keys.push(FilterKey::Urgencia);
        }
        if self.fecha_desde.is_some() {
            keys.push(FilterKey::FechaDesde);
        }
        if self.fecha_hasta.is_some() {
            keys.push(FilterKey::FechaHasta);
        }
        if self.aging_dias.is_some() {
            keys.push(FilterKey::AgingDias);
        }
        keys
    }

    /// Drop the constraint on one dimension, leaving the rest untouched.
    pub fn remove(&mut self, key: FilterKey) {
        match key {
            FilterKey::Proyecto => self.proyecto = None,
            FilterKey::Po => self.po = None,
            FilterKey::Proveedor => self.proveedor = None,
            FilterKey::Estado => self.estado = None,
            FilterKey::Urgencia => self.urgencia = None,
            FilterKey::FechaDesde => self.fecha_desde = None,
            FilterKey::FechaHasta => self.fecha_hasta = None,
            FilterKey::AgingDias => self.aging_dias = None,
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Case-insensitive substring match of `text` against file name, provider
/// and id. An empty `text` matches everything.
fn matches_text(cert: &Certificate, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    cert.nombre_archivo.to_lowercase().contains(&needle)
        || cert.proveedor.to_lowercase().contains(&needle)
        || cert.id.to_lowercase().contains(&needle)
}

/// Whether `cert` satisfies every present constraint in `filters`,
/// with aging computed against `today`.
fn matches_filters(cert: &Certificate, filters: &SearchFilters, today: NaiveDate) -> bool {
    if let Some(proyecto) = &filters.proyecto {
        if cert.proyecto_id != *proyecto {
            return false;
        }
    }
    if let Some(po) = &filters.po {
        if cert.po_id != *po {
            return false;
        }
    }
    if let Some(proveedor) = &filters.proveedor {
        if !cert
            .proveedor
            .to_lowercase()
            .contains(&proveedor.to_lowercase())
        {
            return false;
        }
    }
    if let Some(estado) = filters.estado {
        if cert.estado != estado {
            return false;
        }
    }
    if let Some(urgencia) = filters.urgencia {
        if cert.urgencia != urgencia {
            return false;
        }
    }
    if let Some(min_days) = filters.aging_dias {
        if aging_days(cert.fecha_recepcion, today) < min_days {
            return false;
        }
    }
    if let Some(desde) = filters.fecha_desde {
        if cert.fecha_recepcion < desde {
            return false;
        }
    }
    if let Some(hasta) = filters.fecha_hasta {
        if cert.fecha_recepcion > hasta {
            return false;
        }
    }
    true
}

/// Filter `all` down to the certificates matching the free-text query AND
/// every present structured constraint, with aging evaluated against
/// `today`. Preserves the input's relative order.
pub fn filter_certificates_on<'a>(
    all: &'a [Certificate],
    text: &str,
    filters: &SearchFilters,
    today: NaiveDate,
) -> Vec<&'a Certificate> {
    all.iter()
        .filter(|cert| matches_text(cert, text) && matches_filters(cert, filters, today))
        .collect()
}

/// [`filter_certificates_on`] against the local wall-clock date.
pub fn filter_certificates<'a>(
    all: &'a [Certificate],
    text: &str,
    filters: &SearchFilters,
) -> Vec<&'a Certificate> {
    filter_certificates_on(all, text, filters, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::certificate::DocumentType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cert(id: &str, proyecto: &str, po: &str, proveedor: &str, recepcion: NaiveDate) -> Certificate {
        let now = Utc::now();
        Certificate {
            id: id.to_string(),
            nombre_archivo: format!("{id}.pdf"),
            po_id: po.to_string(),
            proyecto_id: proyecto.to_string(),
            proveedor: proveedor.to_string(),
            fecha_recepcion: recepcion,
            estado: CertificateStatus::PendienteRevision,
            urgencia: Urgency::Normal,
            tipo_documento: DocumentType::Certificado,
            nro_albaran: None,
            observaciones: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample() -> Vec<Certificate> {
        let mut a = cert("CERT-1", "P-001", "PO-4500001", "Tubacex S.A.", date(2025, 3, 1));
        a.urgencia = Urgency::Urgente;
        let mut b = cert("CERT-2", "P-001", "PO-4500002", "Acerinox", date(2025, 3, 5));
        b.estado = CertificateStatus::Revisado;
        let c = cert("CERT-3", "P-002", "PO-4500010", "Sidenor", date(2025, 3, 8));
        vec![a, b, c]
    }

    #[test]
    fn empty_filters_and_query_return_everything_in_order() {
        let certs = sample();
        let result =
            filter_certificates_on(&certs, "", &SearchFilters::default(), date(2025, 3, 10));
        let ids: Vec<_> = result.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CERT-1", "CERT-2", "CERT-3"]);
    }

    #[test]
    fn text_query_matches_file_name_provider_or_id() {
        let certs = sample();
        let today = date(2025, 3, 10);
        let by_provider =
            filter_certificates_on(&certs, "tubacex", &SearchFilters::default(), today);
        assert_eq!(by_provider.len(), 1);
        assert_eq!(by_provider[0].id, "CERT-1");

        let by_id = filter_certificates_on(&certs, "cert-3", &SearchFilters::default(), today);
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "CERT-3");

        let by_file = filter_certificates_on(&certs, "CERT-2.pdf", &SearchFilters::default(), today);
        assert_eq!(by_file.len(), 1);
    }

    #[test]
    fn constraints_compose_with_logical_and() {
        let certs = sample();
        let filters = SearchFilters {
            proyecto: Some("P-001".to_string()),
            estado: Some(CertificateStatus::Revisado),
            ..Default::default()
        };
        let result = filter_certificates_on(&certs, "", &filters, date(2025, 3, 10));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "CERT-2");
    }

    #[test]
    fn removing_a_key_never_shrinks_the_result() {
        let certs = sample();
        let today = date(2025, 3, 10);
        let mut filters = SearchFilters {
            proyecto: Some("P-001".to_string()),
            urgencia: Some(Urgency::Urgente),
            ..Default::default()
        };
        let constrained = filter_certificates_on(&certs, "", &filters, today).len();
        filters.remove(FilterKey::Urgencia);
        let relaxed = filter_certificates_on(&certs, "", &filters, today).len();
        assert!(relaxed >= constrained);
        assert_eq!(constrained, 1);
        assert_eq!(relaxed, 2);
    }

    #[test]
    fn provider_filter_is_substring_not_equality() {
        let certs = sample();
        let filters = SearchFilters {
            proveedor: Some("tubacex".to_string()),
            ..Default::default()
        };
        let result = filter_certificates_on(&certs, "", &filters, date(2025, 3, 10));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].proveedor, "Tubacex S.A.");
    }

    #[test]
    fn aging_bound_is_inclusive() {
        let certs = sample();
        let today = date(2025, 3, 8);
        // CERT-1 is 7 days old on 2025-03-08.
        let exactly = SearchFilters {
            aging_dias: Some(7),
            ..Default::default()
        };
        let result = filter_certificates_on(&certs, "", &exactly, today);
        assert!(result.iter().any(|c| c.id == "CERT-1"));

        let stricter = SearchFilters {
            aging_dias: Some(8),
            ..Default::default()
        };
        let result = filter_certificates_on(&certs, "", &stricter, today);
        assert!(!result.iter().any(|c| c.id == "CERT-1"));
    }

    #[test]
    fn date_bounds_are_inclusive_and_independent() {
        let certs = sample();
        let today = date(2025, 3, 10);
        let from = SearchFilters {
            fecha_desde: Some(date(2025, 3, 5)),
            ..Default::default()
        };
        let ids: Vec<_> = filter_certificates_on(&certs, "", &from, today)
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(ids, vec!["CERT-2", "CERT-3"]);

        let until = SearchFilters {
            fecha_hasta: Some(date(2025, 3, 5)),
            ..Default::default()
        };
        let ids: Vec<_> = filter_certificates_on(&certs, "", &until, today)
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(ids, vec!["CERT-1", "CERT-2"]);
    }

    #[test]
    fn no_match_is_an_empty_result_not_an_error() {
        let certs = sample();
        let filters = SearchFilters {
            proyecto: Some("P-999".to_string()),
            ..Default::default()
        };
        assert!(filter_certificates_on(&certs, "", &filters, date(2025, 3, 10)).is_empty());
    }

    #[test]
    fn active_keys_and_is_empty() {
        let mut filters = SearchFilters::default();
        assert!(filters.is_empty());
        filters.proyecto = Some("P-001".to_string());
        filters.aging_dias = Some(5);
        assert_eq!(
            filters.active_keys(),
            vec![FilterKey::Proyecto, FilterKey::AgingDias]
        );
        filters.remove(FilterKey::Proyecto);
        filters.remove(FilterKey::AgingDias);
        assert!(filters.is_empty());
    }
}
