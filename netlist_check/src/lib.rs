pub mod config;
pub mod diagnostics;
pub mod naming;
pub mod values;

pub use config::{CheckConfig, NameUniqueness};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use values::is_disallowed_negative;

use log::warn;
use netlist_model::NetlistDocument;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    /// Blocks submission
    Error,
    Warning,
}

/// Runs every check over the document. Warnings are logged, errors are left for the caller to act on.
pub fn check_netlist(document: &NetlistDocument, config: &CheckConfig) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();
    values::check_values(document, &mut diagnostics.values);
    naming::check_names(document, config.name_uniqueness, &mut diagnostics.naming);
    for d in diagnostics.iter() {
        if d.severity == Severity::Warning {
            warn!("{d}");
        }
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlist_model::{ComponentType, NetlistBuilder, load_preset};

    #[test]
    fn presets_are_clean() {
        let config = CheckConfig {
            name_uniqueness: NameUniqueness::Reject,
        };
        for name in netlist_model::preset_names() {
            let mut builder = NetlistBuilder::new();
            load_preset(&mut builder, name);
            let diagnostics = check_netlist(builder.document(), &config);
            assert!(diagnostics.is_empty(), "{name}: {diagnostics:?}");
        }
    }

    #[test]
    fn errors_and_warnings_are_separated() {
        let mut builder = NetlistBuilder::new();
        builder.add(ComponentType::Resistor, Some("R1"), None, Some("-10"));
        builder.add(ComponentType::Capacitor, Some("R1"), None, None);
        let diagnostics = check_netlist(builder.document(), &CheckConfig::default());
        assert_eq!(
            diagnostics.error_messages(),
            vec!["R1 (Resistor): value cannot be negative".to_string()]
        );
        assert_eq!(diagnostics.naming.len(), 2);
        assert!(diagnostics.has_errors());
    }
}
