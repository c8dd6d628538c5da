use crate::component_type::{ComponentType, DEFAULT_NODES};
use anyhow::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    pub ty: ComponentType,
    pub name: String,
    /// Length always equals the type's node arity. Node 0 is ground by convention.
    pub nodes: Vec<u32>,
    /// As typed by the user, may carry a suffix or be blank
    pub raw_value: String,
}

/// Ordered components, insertion order is the order they are submitted in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NetlistDocument {
    components: Vec<Component>,
}

impl NetlistDocument {
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Owns the working document together with the id counter used to name new components.
#[derive(Debug, Clone)]
pub struct NetlistBuilder {
    document: NetlistDocument,
    next_id: u32,
}

impl Default for NetlistBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NetlistBuilder {
    pub fn new() -> Self {
        Self {
            document: NetlistDocument::default(),
            next_id: 1,
        }
    }

    pub fn document(&self) -> &NetlistDocument {
        &self.document
    }

    /// Appends a new component, filling in name, nodes and value from the type defaults.
    ///
    /// An empty explicit name or value counts as not given.
    /// Explicit nodes are laid over the `[1, 0, 1, 0]` defaults position by position and then
    /// cut to the type's arity, so a two-node list given for a VCVS keeps the default input pair.
    pub fn add(
        &mut self,
        ty: ComponentType,
        name: Option<&str>,
        nodes: Option<&[u32]>,
        raw_value: Option<&str>,
    ) -> &Component {
        let descriptor = ty.describe();
        let id = ComponentId(self.next_id);
        self.next_id += 1;

        let mut resolved_nodes = DEFAULT_NODES.to_vec();
        if let Some(nodes) = nodes {
            for (slot, node) in resolved_nodes.iter_mut().zip(nodes) {
                *slot = *node;
            }
        }
        resolved_nodes.truncate(descriptor.node_arity);

        let name = match name.filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => format!("{}{}", descriptor.name_prefix, id.0),
        };
        let raw_value = raw_value
            .filter(|v| !v.is_empty())
            .unwrap_or(descriptor.default_value)
            .to_string();

        debug!("Adding {ty} {name} {resolved_nodes:?} = {raw_value:?}");
        self.document.components.push(Component {
            id,
            ty,
            name,
            nodes: resolved_nodes,
            raw_value,
        });
        &self.document.components[self.document.components.len() - 1]
    }

    /// Removes the component with the given id, does nothing if it is not present.
    pub fn remove(&mut self, id: ComponentId) {
        let before = self.document.components.len();
        self.document.components.retain(|c| c.id != id);
        if self.document.components.len() != before {
            debug!("Removed component {}", id.0);
        }
    }

    /// Empties the document, the next added component gets id 1 again.
    pub fn clear(&mut self) {
        self.document.components.clear();
        self.next_id = 1;
    }

    pub fn rename(&mut self, id: ComponentId, name: &str) -> Result<()> {
        self.get_mut(id)?.name = name.to_string();
        Ok(())
    }

    pub fn set_value(&mut self, id: ComponentId, raw_value: &str) -> Result<()> {
        self.get_mut(id)?.raw_value = raw_value.to_string();
        Ok(())
    }

    pub fn set_nodes(&mut self, id: ComponentId, nodes: &[u32]) -> Result<()> {
        let component = self.get_mut(id)?;
        let arity = component.ty.node_arity();
        if nodes.len() != arity {
            return Err(Error::msg(format!(
                "{} ({}) takes {arity} nodes, got {}",
                component.name,
                component.ty,
                nodes.len()
            )));
        }
        component.nodes = nodes.to_vec();
        Ok(())
    }

    fn get_mut(&mut self, id: ComponentId) -> Result<&mut Component> {
        self.document
            .components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(Error::msg(format!("No component with id {}", id.0)))
    }
}

impl Display for NetlistDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for c in &self.components {
            write!(f, "{} {} {}", c.ty.describe().badge_label, c.name, c.ty)?;
            for node in &c.nodes {
                write!(f, " {node}")?;
            }
            writeln!(f, " {}: {}", c.ty.describe().value_label, c.raw_value)?;
        }
        Ok(())
    }
}
