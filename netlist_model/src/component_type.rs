use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Closed set of element kinds the solver understands. Variant names are the exact wire tags.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum ComponentType {
    Resistor,
    Capacitor,
    Inductor,
    VoltageSource,
    CurrentSource,
    /// Voltage controlled voltage source, nodes are out+, out-, in+, in-
    VCVS,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ComponentTypeDescriptor {
    pub type_tag: ComponentType,
    pub badge_label: &'static str,
    pub name_prefix: &'static str,
    /// Caption shown next to the value field
    pub value_label: &'static str,
    pub default_value: &'static str,
    pub node_arity: usize,
    pub allows_negative_value: bool,
}

/// Default node assignment, two-terminal types take the first two.
pub const DEFAULT_NODES: [u32; 4] = [1, 0, 1, 0];

// Indexed by ComponentType discriminant, keep in declaration order.
static DESCRIPTORS: [ComponentTypeDescriptor; 6] = [
    ComponentTypeDescriptor {
        type_tag: ComponentType::Resistor,
        badge_label: "Ω",
        name_prefix: "R",
        value_label: "Value",
        default_value: "1k",
        node_arity: 2,
        allows_negative_value: false,
    },
    ComponentTypeDescriptor {
        type_tag: ComponentType::Capacitor,
        badge_label: "C",
        name_prefix: "C",
        value_label: "Value",
        default_value: "100u",
        node_arity: 2,
        allows_negative_value: false,
    },
    ComponentTypeDescriptor {
        type_tag: ComponentType::Inductor,
        badge_label: "L",
        name_prefix: "L",
        value_label: "Value",
        default_value: "1m",
        node_arity: 2,
        allows_negative_value: true,
    },
    ComponentTypeDescriptor {
        type_tag: ComponentType::VoltageSource,
        badge_label: "V",
        name_prefix: "V",
        value_label: "Value",
        default_value: "1k",
        node_arity: 2,
        allows_negative_value: true,
    },
    ComponentTypeDescriptor {
        type_tag: ComponentType::CurrentSource,
        badge_label: "A",
        name_prefix: "I",
        value_label: "Value",
        default_value: "1k",
        node_arity: 2,
        allows_negative_value: true,
    },
    ComponentTypeDescriptor {
        type_tag: ComponentType::VCVS,
        badge_label: "G",
        name_prefix: "E",
        value_label: "Gain",
        default_value: "2",
        node_arity: 4,
        allows_negative_value: true,
    },
];

impl ComponentType {
    pub fn describe(self) -> &'static ComponentTypeDescriptor {
        &DESCRIPTORS[self as usize]
    }

    pub fn node_arity(self) -> usize {
        self.describe().node_arity
    }

    pub fn allows_negative_value(self) -> bool {
        self.describe().allows_negative_value
    }
}

/// Parses a wire tag such as `"VoltageSource"`, unknown tags are rejected.
pub fn parse_type_tag(tag: &str) -> anyhow::Result<ComponentType> {
    tag.parse::<ComponentType>()
        .map_err(|_| anyhow::Error::msg(format!("Unknown component type: {tag}")))
}
