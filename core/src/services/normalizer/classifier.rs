//! Code to kind heuristic

use crate::domain::entities::ErrorKind;

/// Substring rules, checked in order; the first rule with a matching
/// pattern decides the kind.
const RULES: [(&[&str], ErrorKind); 3] = [
    (&["password", "auth"], ErrorKind::Authentication),
    (&["email", "validation"], ErrorKind::Validation),
    (&["network", "connection"], ErrorKind::Network),
];

/// Derive an error kind from a provider error code.
///
/// Matching is case-sensitive and purely substring based. Codes matching no
/// rule are `Unknown`.
pub fn classify(code: &str) -> ErrorKind {
    RULES
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|pattern| code.contains(*pattern)))
        .map(|(_, kind)| *kind)
        .unwrap_or(ErrorKind::Unknown)
}
