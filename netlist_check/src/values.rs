use crate::Severity;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use netlist_model::{ComponentType, NetlistDocument};
use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+\.?\d*").unwrap());

/// True when the text holds a negative magnitude for a type that cannot take one.
///
/// Looks at the text as typed, before suffix expansion. Only resistors and capacitors are
/// checked, sources, inductors and gains may be negative.
pub fn is_disallowed_negative(ty: ComponentType, raw_value: &str) -> bool {
    if ty.allows_negative_value() {
        return false;
    }
    let value = raw_value.trim();
    if value.is_empty() {
        return false;
    }
    if value.starts_with('-') {
        return true;
    }
    LEADING_NUMBER
        .find(value)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .is_some_and(|v| v < 0.0)
}

pub fn check_values(document: &NetlistDocument, diagnostics: &mut Vec<Diagnostic>) {
    for c in document.iter() {
        if is_disallowed_negative(c.ty, &c.raw_value) {
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                component: c.id,
                name: c.name.clone(),
                ty: c.ty,
                kind: DiagnosticKind::NegativeValue,
            });
        }
    }
}
