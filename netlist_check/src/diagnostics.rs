use crate::Severity;
use netlist_model::{ComponentId, ComponentType};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub component: ComponentId,
    pub name: String,
    pub ty: ComponentType,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    NegativeValue,
    DuplicateName,
}

#[derive(Default, Debug)]
pub struct Diagnostics {
    pub values: Vec<Diagnostic>,
    pub naming: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.values.iter().chain(self.naming.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.naming.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.iter().any(|d| d.severity == Severity::Error)
    }

    /// Messages for everything that blocks submission, in document order per check.
    pub fn error_messages(&self) -> Vec<String> {
        self.iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| d.to_string())
            .collect()
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = if self.name.is_empty() {
            "unnamed component"
        } else {
            self.name.as_str()
        };
        match self.kind {
            DiagnosticKind::NegativeValue => {
                write!(f, "{name} ({}): value cannot be negative", self.ty)
            }
            DiagnosticKind::DuplicateName => {
                write!(f, "{name} ({}): name is used by more than one component", self.ty)
            }
        }
    }
}
