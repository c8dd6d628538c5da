use crate::component_type::ComponentType;
use crate::netlist::{NetlistBuilder, NetlistDocument};
use crate::value_expr::expand_value_expression;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};

/// One netlist entry in the form the solver accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(rename = "Componente")]
    pub name: String,
    #[serde(rename = "Tipo")]
    pub ty: ComponentType,
    #[serde(rename = "Valor")]
    pub value: String,
    #[serde(rename = "Nos")]
    pub nodes: Vec<u32>,
}

/// Converts the document into solver records, keeping document order.
///
/// A blank value is sent as the component name so the solver treats it as a symbol, anything else
/// goes through suffix expansion.
pub fn serialize(document: &NetlistDocument) -> Vec<SubmissionRecord> {
    document
        .iter()
        .map(|c| {
            let value = if c.raw_value.trim().is_empty() {
                c.name.clone()
            } else {
                expand_value_expression(&c.raw_value)
            };
            let arity = c.ty.node_arity();
            SubmissionRecord {
                name: c.name.clone(),
                ty: c.ty,
                value,
                nodes: c.nodes.iter().take(arity).copied().collect(),
            }
        })
        .collect()
}

/// JSON text sent in the `netlist` form field.
pub fn to_payload_json(records: &[SubmissionRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Replaces the document with records read from JSON in the wire layout. `Valor` is taken as
/// the raw, unexpanded value.
pub fn load_netlist_json(builder: &mut NetlistBuilder, json: &str) -> Result<()> {
    let records: Vec<SubmissionRecord> = serde_json::from_str(json)?;
    for r in &records {
        if r.nodes.len() != r.ty.node_arity() {
            return Err(Error::msg(format!(
                "{} ({}) takes {} nodes, got {}",
                r.name,
                r.ty,
                r.ty.node_arity(),
                r.nodes.len()
            )));
        }
    }
    builder.clear();
    for r in records {
        builder.add(
            r.ty,
            Some(r.name.as_str()),
            Some(r.nodes.as_slice()),
            Some(r.value.as_str()),
        );
    }
    Ok(())
}
