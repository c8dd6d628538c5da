use crate::error::{Result, SubmitError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Solver reply. `error` set means nothing else is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverResponse {
    #[serde(rename = "Erro", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "Equacoes", default, skip_serializing_if = "Option::is_none")]
    pub equations: Option<Vec<String>>,
    /// Absent or empty when the network has dependent sources
    #[serde(rename = "Superposicao", default, skip_serializing_if = "Option::is_none")]
    pub superposition: Option<Vec<SuperpositionStep>>,
    #[serde(rename = "Resultados", default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<NodeResult>>,
    #[serde(rename = "Malhas", default, skip_serializing_if = "Option::is_none")]
    pub meshes: Option<Vec<Mesh>>,
    /// Node label for each index of `ResultadosParciais`
    #[serde(rename = "NosLista", default, skip_serializing_if = "Option::is_none")]
    pub node_labels: Option<Vec<Scalar>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperpositionStep {
    #[serde(rename = "FonteAtiva")]
    pub active_source: String,
    #[serde(rename = "ResultadosParciais", default)]
    pub partial_results: Vec<Scalar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeResult {
    #[serde(rename = "Local")]
    pub location: String,
    #[serde(rename = "ValorNumerico")]
    pub value: Scalar,
    #[serde(rename = "Unidade", default)]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    #[serde(rename = "Descricao")]
    pub description: String,
    #[serde(rename = "Equacao")]
    pub equation: String,
}

/// Values the solver sends either as text or as a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(t) => write!(f, "{t}"),
        }
    }
}

/// Parses a response body, errors carry the JSON path that failed.
///
/// An `Erro` string wins over everything else, the remaining fields are not looked at.
pub fn decode_response(body: &str) -> Result<SolverResponse> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| SubmitError::Transport(format!("invalid solver response: {e}")))?;
    if let Some(error) = value.get("Erro").and_then(|e| e.as_str()) {
        return Err(SubmitError::Solver(error.to_string()));
    }
    serde_path_to_error::deserialize(value).map_err(|e| {
        SubmitError::Transport(format!("invalid solver response at {}: {}", e.path(), e.inner()))
    })
}

impl SolverResponse {
    pub fn into_result(self) -> Result<Self> {
        match self.error {
            Some(error) => Err(SubmitError::Solver(error)),
            None => Ok(self),
        }
    }

    /// Fields a usable answer must carry that are absent from this one.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.results.is_none() {
            missing.push("Resultados");
        }
        if self.equations.is_none() {
            missing.push("Equacoes");
        }
        missing
    }

    /// True when the solver sent the superposition field but left it empty.
    pub fn superposition_hidden(&self) -> bool {
        self.superposition.as_ref().is_some_and(|s| s.is_empty())
    }

    /// Pairs each partial result with its node label, per active source.
    /// Results without a label get `?`.
    pub fn superposition_by_node(&self) -> Vec<(&str, Vec<(String, &Scalar)>)> {
        let Some(steps) = &self.superposition else {
            return Vec::new();
        };
        let labels = self.node_labels.as_deref().unwrap_or_default();
        steps
            .iter()
            .map(|step| {
                let pairs = step
                    .partial_results
                    .iter()
                    .enumerate()
                    .map(|(idx, value)| {
                        let label = labels
                            .get(idx)
                            .map(|l| l.to_string())
                            .unwrap_or_else(|| "?".to_string());
                        (label, value)
                    })
                    .collect();
                (step.active_source.as_str(), pairs)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "Equacoes": ["v1 == 10", "(v1 - v2)/100 == v2/100"],
        "Superposicao": [
            {"FonteAtiva": "V1", "ResultadosParciais": ["10", 5]}
        ],
        "Resultados": [
            {"Local": "Nó 1", "ValorNumerico": "10.", "Unidade": "V"},
            {"Local": "Nó 2", "ValorNumerico": 5, "Unidade": "V"}
        ],
        "Malhas": [],
        "NosLista": [1, 2]
    }"#;

    #[test]
    fn decodes_full_response() {
        let r = decode_response(FULL).unwrap();
        assert_eq!(r.equations.as_ref().unwrap().len(), 2);
        let results = r.results.as_ref().unwrap();
        assert_eq!(results[0].location, "Nó 1");
        assert_eq!(results[0].value, Scalar::Text("10.".into()));
        assert_eq!(results[1].value.to_string(), "5");
        assert_eq!(r.meshes, Some(vec![]));
        assert!(r.missing_fields().is_empty());
        assert!(r.clone().into_result().is_ok());
    }

    #[test]
    fn pairs_superposition_with_node_labels() {
        let r = decode_response(FULL).unwrap();
        let steps = r.superposition_by_node();
        assert_eq!(steps.len(), 1);
        let (source, pairs) = &steps[0];
        assert_eq!(*source, "V1");
        let rendered = pairs
            .iter()
            .map(|(node, v)| format!("v_{node} = {v}"))
            .collect::<Vec<_>>();
        assert_eq!(rendered, vec!["v_1 = 10", "v_2 = 5"]);
    }

    #[test]
    fn labels_missing_for_extra_results() {
        let r = decode_response(
            r#"{"Superposicao": [{"FonteAtiva": "I1", "ResultadosParciais": [1, 2]}], "NosLista": ["a"]}"#,
        )
        .unwrap();
        let steps = r.superposition_by_node();
        assert_eq!(steps[0].1[1].0, "?");
    }

    #[test]
    fn error_response() {
        assert_eq!(
            decode_response(r#"{"Erro": "Singular matrix"}"#),
            Err(SubmitError::Solver("Singular matrix".into()))
        );
        let r = SolverResponse {
            error: Some("Singular matrix".into()),
            ..Default::default()
        };
        assert_eq!(
            r.into_result(),
            Err(SubmitError::Solver("Singular matrix".into()))
        );
    }

    #[test]
    fn error_wins_over_malformed_fields() {
        assert_eq!(
            decode_response(r#"{"Erro": "Circuito invalido", "Resultados": "n/a"}"#),
            Err(SubmitError::Solver("Circuito invalido".into()))
        );
    }

    #[test]
    fn empty_superposition_is_hidden() {
        let r = decode_response(r#"{"Superposicao": [], "Resultados": []}"#).unwrap();
        assert!(r.superposition_hidden());
        assert!(r.superposition_by_node().is_empty());
        assert_eq!(r.missing_fields(), vec!["Equacoes"]);
        assert!(!SolverResponse::default().superposition_hidden());
    }

    #[test]
    fn malformed_body_is_a_transport_error() {
        let err = decode_response(r#"{"Resultados": [{"Local": 3}]}"#).unwrap_err();
        let SubmitError::Transport(message) = err else {
            panic!("unexpected {err:?}");
        };
        assert!(message.contains("Resultados[0].Local"), "{message}");

        assert!(matches!(
            decode_response("<html>"),
            Err(SubmitError::Transport(_))
        ));
    }
}
