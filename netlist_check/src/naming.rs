use crate::Severity;
use crate::config::NameUniqueness;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use itertools::Itertools;
use netlist_model::NetlistDocument;
use std::collections::HashSet;

/// Flags every component whose name is shared with another one.
pub fn check_names(
    document: &NetlistDocument,
    policy: NameUniqueness,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let severity = match policy {
        NameUniqueness::Ignore => return,
        NameUniqueness::Warn => Severity::Warning,
        NameUniqueness::Reject => Severity::Error,
    };
    let duplicates = document
        .iter()
        .map(|c| c.name.as_str())
        .duplicates()
        .collect::<HashSet<_>>();
    for c in document.iter() {
        if duplicates.contains(c.name.as_str()) {
            diagnostics.push(Diagnostic {
                severity,
                component: c.id,
                name: c.name.clone(),
                ty: c.ty,
                kind: DiagnosticKind::DuplicateName,
            });
        }
    }
}
