//! Natural-language query parser.
//!
//! Maps one free-text string to a [`SearchFilters`] value with ordered,
//! case-insensitive heuristics. This stands in for a real NLU layer, so
//! the matching rules are deliberately fixed: the same input always
//! produces the same filters, and unmatched text yields an empty filter
//! object rather than an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::certificate::{CertificateStatus, Urgency};
use crate::filter::SearchFilters;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// Project id preceded by the keyword, e.g. "proyecto P-001".
static PROJECT_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)proyecto\s*(P-\d+)").expect("valid regex"));

/// Bare project id fallback.
static PROJECT_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(P-\d+)").expect("valid regex"));

/// PO reference: "PO-4500001", "PO 4500001", "po4500001".
static PO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PO[- ]?(\d+)").expect("valid regex"));

/// PO keyword with arbitrary whitespace fallback.
static PO_LOOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)po\s*(\d+)").expect("valid regex"));

static STATUS_PENDING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pendiente|sin\s*revisar|por\s*revisar").expect("valid regex"));

static STATUS_REVIEWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)revisado|aprobado|validado").expect("valid regex"));

static STATUS_INCIDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)incidencia|problema|error").expect("valid regex"));

static URGENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)urgente|urgencia|prioritario|crítico").expect("valid regex"));

/// Number-of-days pattern; only honored next to a contextual word.
static AGING_DAYS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*días?").expect("valid regex"));

static AGING_CONTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)antiguo|desde|más\s*de|pendiente").expect("valid regex"));

/// Known supplier keywords, scanned in order; the first substring hit
/// wins. Lowercase on purpose: matching happens on the lowercased query.
pub const KNOWN_PROVIDERS: &[&str] = &[
    "tubacex",
    "acerinox",
    "repsol",
    "sidenor",
    "arcelormittal",
    "cepsa",
    "bp",
    "técnicas reunidas",
    "nervión",
    "sabic",
    "basf",
    "dow",
    "ercros",
    "logista",
    "xpo",
];

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Capitalize only the first character, leaving the rest untouched
/// ("técnicas reunidas" -> "Técnicas reunidas").
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Parse a free-text query into structured filters.
///
/// Detections are independent and non-exclusive, except status and
/// provider where only the first matching pattern wins. There are no
/// error conditions: text that matches nothing yields an empty
/// [`SearchFilters`].
pub fn parse_natural_query(query: &str) -> SearchFilters {
    let mut filters = SearchFilters::default();
    let lower = query.to_lowercase();

    // Project: keyword form first, bare id as fallback; normalize case.
    if let Some(caps) = PROJECT_KEYWORD_RE
        .captures(query)
        .or_else(|| PROJECT_BARE_RE.captures(query))
    {
        filters.proyecto = Some(caps[1].to_uppercase());
    }

    // PO: the filter value is always rebuilt from the captured digits.
    if let Some(caps) = PO_RE
        .captures(query)
        .or_else(|| PO_LOOSE_RE.captures(query))
    {
        filters.po = Some(format!("PO-{}", &caps[1]));
    }

    // Provider: first keyword found as a substring wins.
    for provider in KNOWN_PROVIDERS {
        if lower.contains(provider) {
            filters.proveedor = Some(capitalize_first(provider));
            break;
        }
    }

    // Status: fixed priority order, one winner only.
    if STATUS_PENDING_RE.is_match(query) {
        filters.estado = Some(CertificateStatus::PendienteRevision);
    } else if STATUS_REVIEWED_RE.is_match(query) {
        filters.estado = Some(CertificateStatus::Revisado);
    } else if STATUS_INCIDENT_RE.is_match(query) {
        filters.estado = Some(CertificateStatus::Incidencia);
    }

    // Urgency: there is no pattern asking for "normal" explicitly.
    if URGENCY_RE.is_match(query) {
        filters.urgencia = Some(Urgency::Urgente);
    }

    // Aging: requires both the day count and a contextual word.
    if let Some(caps) = AGING_DAYS_RE.captures(query) {
        if AGING_CONTEXT_RE.is_match(query) {
            if let Ok(days) = caps[1].parse::<i64>() {
                filters.aging_dias = Some(days);
            }
        }
    }

    filters
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_yields_empty_filters() {
        assert_eq!(parse_natural_query(""), SearchFilters::default());
        assert_eq!(
            parse_natural_query("nada que detectar aquí"),
            SearchFilters::default()
        );
    }

    #[test]
    fn parser_is_deterministic() {
        let q = "Certificados urgentes de Tubacex del proyecto P-001 con más de 7 días";
        assert_eq!(parse_natural_query(q), parse_natural_query(q));
    }

    #[test]
    fn project_with_keyword() {
        let filters = parse_natural_query("certificados del proyecto P-001");
        assert_eq!(filters.proyecto.as_deref(), Some("P-001"));
    }

    #[test]
    fn bare_project_id_and_case_normalization() {
        let filters = parse_natural_query("documentos de p-002");
        assert_eq!(filters.proyecto.as_deref(), Some("P-002"));
    }

    #[test]
    fn po_value_is_rebuilt_from_digits() {
        let filters = parse_natural_query("PO-4500001");
        assert_eq!(filters.po.as_deref(), Some("PO-4500001"));
        // A PO reference alone is not a project reference.
        assert_eq!(filters.proyecto, None);
        assert_eq!(
            parse_natural_query("po 4500002").po.as_deref(),
            Some("PO-4500002")
        );
        assert_eq!(
            parse_natural_query("PO4500003").po.as_deref(),
            Some("PO-4500003")
        );
    }

    #[test]
    fn first_provider_in_list_order_wins() {
        // Both appear in the text; "tubacex" precedes "acerinox" in the list.
        let filters = parse_natural_query("comparar acerinox con tubacex");
        assert_eq!(filters.proveedor.as_deref(), Some("Tubacex"));
    }

    #[test]
    fn provider_keeps_only_first_char_capitalized() {
        let filters = parse_natural_query("albaranes de Técnicas Reunidas");
        assert_eq!(filters.proveedor.as_deref(), Some("Técnicas reunidas"));
    }

    #[test]
    fn status_priority_pending_beats_incident() {
        let filters = parse_natural_query("pendiente e incidencia");
        assert_eq!(filters.estado, Some(CertificateStatus::PendienteRevision));
    }

    #[test]
    fn status_reviewed_synonyms() {
        for q in ["revisado", "aprobados ayer", "ya validado"] {
            assert_eq!(
                parse_natural_query(q).estado,
                Some(CertificateStatus::Revisado),
                "query: {q}"
            );
        }
    }

    #[test]
    fn status_incident_synonyms() {
        assert_eq!(
            parse_natural_query("con problemas").estado,
            Some(CertificateStatus::Incidencia)
        );
        assert_eq!(
            parse_natural_query("documentos con error").estado,
            Some(CertificateStatus::Incidencia)
        );
    }

    #[test]
    fn urgency_synonyms() {
        for q in ["urgente", "con urgencia", "prioritario", "algo crítico"] {
            assert_eq!(parse_natural_query(q).urgencia, Some(Urgency::Urgente), "query: {q}");
        }
        assert_eq!(parse_natural_query("ritmo normal").urgencia, None);
    }

    #[test]
    fn aging_requires_contextual_word() {
        // Day count alone is not enough.
        assert_eq!(parse_natural_query("7 días").aging_dias, None);
        // Count plus context sets the filter.
        assert_eq!(parse_natural_query("más de 7 días").aging_dias, Some(7));
        assert_eq!(
            parse_natural_query("pendientes desde hace 30 días").aging_dias,
            Some(30)
        );
        // Context alone is not enough either.
        assert_eq!(parse_natural_query("los más antiguos").aging_dias, None);
    }

    #[test]
    fn detections_are_independent() {
        let filters = parse_natural_query("proyecto P-001 urgente");
        assert_eq!(filters.proyecto.as_deref(), Some("P-001"));
        assert_eq!(filters.urgencia, Some(Urgency::Urgente));
        assert_eq!(filters.po, None);
        assert_eq!(filters.estado, None);
    }

    #[test]
    fn combined_query_sets_every_detected_field() {
        let filters =
            parse_natural_query("Certificados pendientes de Tubacex del proyecto P-001, PO-4500001, más de 10 días");
        assert_eq!(filters.proyecto.as_deref(), Some("P-001"));
        assert_eq!(filters.po.as_deref(), Some("PO-4500001"));
        assert_eq!(filters.proveedor.as_deref(), Some("Tubacex"));
        assert_eq!(filters.estado, Some(CertificateStatus::PendienteRevision));
        assert_eq!(filters.aging_dias, Some(10));
    }

    #[test]
    fn pending_certificates_for_project_query() {
        let filters = parse_natural_query("Certificados pendientes del proyecto P-001");
        assert_eq!(
            filters,
            SearchFilters {
                proyecto: Some("P-001".to_string()),
                estado: Some(CertificateStatus::PendienteRevision),
                ..Default::default()
            }
        );
    }
}
