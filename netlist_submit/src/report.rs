use crate::prelude::*;
use std::fmt::{Display, Formatter};

/// Plain text rendering of a successful solver response.
pub struct Report<'a>(pub &'a SolverResponse);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let r = self.0;
        if let Some(equations) = &r.equations {
            writeln!(f, "Equations:")?;
            for eq in equations {
                writeln!(f, "  {}", eq.replacen("==", "=", 1))?;
            }
        }

        if r.superposition_hidden() {
            writeln!(f, "Superposition: skipped, the circuit has dependent sources")?;
        } else if r.superposition.is_some() {
            writeln!(f, "Superposition:")?;
            for (source, values) in r.superposition_by_node() {
                writeln!(f, "  {source} active:")?;
                for (node, value) in values {
                    writeln!(f, "    v_{node} = {value}")?;
                }
            }
        }

        if let Some(results) = &r.results {
            writeln!(f, "Results:")?;
            for result in results {
                writeln!(
                    f,
                    "  {}: {} {}",
                    result.location,
                    result.value,
                    result.unit
                )?;
            }
        }

        if let Some(meshes) = &r.meshes {
            if meshes.is_empty() {
                writeln!(f, "Meshes: none, no fundamental loops")?;
            } else {
                writeln!(f, "Meshes:")?;
                for (idx, mesh) in meshes.iter().enumerate() {
                    writeln!(f, "  {}. {}", idx + 1, mesh.description)?;
                    writeln!(f, "     sum V = {}", mesh.equation)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_sections() {
        let response: SolverResponse = serde_json::from_str(
            r#"{
                "Equacoes": ["v1 == 10", "v2 == 5"],
                "Superposicao": [{"FonteAtiva": "V1", "ResultadosParciais": ["10", "5"]}],
                "Resultados": [{"Local": "V(2)", "ValorNumerico": "5.", "Unidade": "V"}],
                "Malhas": [{"Descricao": "V1 R1 R2", "Equacao": "10 - 100 i1 - 100 i1"}],
                "NosLista": [1, 2]
            }"#,
        )
        .unwrap();
        assert_eq!(
            Report(&response).to_string(),
            "Equations:\n  v1 = 10\n  v2 = 5\n\
             Superposition:\n  V1 active:\n    v_1 = 10\n    v_2 = 5\n\
             Results:\n  V(2): 5. V\n\
             Meshes:\n  1. V1 R1 R2\n     sum V = 10 - 100 i1 - 100 i1\n"
        );
    }

    #[test]
    fn dependent_sources_and_no_loops() {
        let response: SolverResponse =
            serde_json::from_str(r#"{"Superposicao": [], "Malhas": []}"#).unwrap();
        assert_eq!(
            Report(&response).to_string(),
            "Superposition: skipped, the circuit has dependent sources\n\
             Meshes: none, no fundamental loops\n"
        );
    }
}
