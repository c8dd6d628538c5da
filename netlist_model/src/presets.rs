use crate::component_type::ComponentType::{self, Resistor, VCVS, VoltageSource};
use crate::netlist::NetlistBuilder;
use log::{info, warn};

#[derive(Debug)]
pub struct PresetComponent {
    pub name: &'static str,
    pub ty: ComponentType,
    pub raw_value: &'static str,
    pub nodes: &'static [u32],
}

#[derive(Debug)]
pub struct ExamplePreset {
    pub name: &'static str,
    pub description: &'static str,
    pub components: &'static [PresetComponent],
}

const fn part(
    name: &'static str,
    ty: ComponentType,
    raw_value: &'static str,
    nodes: &'static [u32],
) -> PresetComponent {
    PresetComponent {
        name,
        ty,
        raw_value,
        nodes,
    }
}

pub static PRESETS: [ExamplePreset; 4] = [
    ExamplePreset {
        name: "divisor",
        description: "Resistive voltage divider",
        components: &[
            part("V1", VoltageSource, "10", &[1, 0]),
            part("R1", Resistor, "100", &[1, 2]),
            part("R2", Resistor, "100", &[2, 0]),
        ],
    },
    ExamplePreset {
        name: "ponte",
        description: "Wheatstone bridge",
        components: &[
            part("V1", VoltageSource, "12", &[1, 0]),
            part("R1", Resistor, "1k", &[1, 2]),
            part("R2", Resistor, "1k", &[2, 0]),
            part("R3", Resistor, "1k", &[1, 3]),
            part("R4", Resistor, "1k", &[3, 0]),
            part("R_Ponte", Resistor, "500", &[2, 3]),
        ],
    },
    ExamplePreset {
        name: "amp",
        description: "VCVS amplifier stage",
        components: &[
            part("V_In", VoltageSource, "5", &[1, 0]),
            part("R1", Resistor, "1k", &[1, 0]),
            part("E_Amp", VCVS, "3", &[2, 0, 1, 0]),
            part("R_Carga", Resistor, "10k", &[2, 0]),
        ],
    },
    ExamplePreset {
        name: "misto",
        description: "Two sources in a resistive network",
        components: &[
            part("V1", VoltageSource, "20", &[1, 0]),
            part("R1", Resistor, "2", &[1, 2]),
            part("R2", Resistor, "2", &[2, 0]),
            part("R3", Resistor, "2", &[2, 3]),
            part("V2", VoltageSource, "10", &[3, 0]),
        ],
    },
];

pub fn find_preset(name: &str) -> Option<&'static ExamplePreset> {
    PRESETS.iter().find(|p| p.name == name)
}

pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}

/// Replaces the document with the named preset. The document is cleared even when the name is
/// empty or unknown, returns whether a preset was found.
pub fn load_preset(builder: &mut NetlistBuilder, name: &str) -> bool {
    builder.clear();
    if name.is_empty() {
        return false;
    }
    let Some(preset) = find_preset(name) else {
        warn!("Unknown preset: {name}");
        return false;
    };
    for c in preset.components {
        builder.add(c.ty, Some(c.name), Some(c.nodes), Some(c.raw_value));
    }
    info!(
        "Loaded preset {} ({} components)",
        preset.name,
        preset.components.len()
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist::ComponentId;

    #[test]
    fn all_presets_respect_arity() {
        for preset in &PRESETS {
            for c in preset.components {
                assert_eq!(c.nodes.len(), c.ty.node_arity(), "{} {}", preset.name, c.name);
            }
        }
    }

    #[test]
    fn loading_preserves_declared_order() {
        let mut builder = NetlistBuilder::new();
        assert!(load_preset(&mut builder, "amp"));
        let doc = builder.document();
        let names = doc.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["V_In", "R1", "E_Amp", "R_Carga"]);
        assert_eq!(doc.components()[2].nodes, vec![2, 0, 1, 0]);
        assert_eq!(doc.components()[3].raw_value, "10k");
        assert_eq!(doc.components()[0].id, ComponentId(1));
    }

    #[test]
    fn loading_replaces_previous_contents() {
        let mut builder = NetlistBuilder::new();
        load_preset(&mut builder, "ponte");
        load_preset(&mut builder, "divisor");
        assert_eq!(builder.document().len(), 3);
        assert_eq!(builder.document().components()[2].id, ComponentId(3));
    }

    #[test]
    fn unknown_or_empty_name_still_clears() {
        let mut builder = NetlistBuilder::new();
        load_preset(&mut builder, "misto");
        assert!(!load_preset(&mut builder, "nope"));
        assert!(builder.document().is_empty());

        load_preset(&mut builder, "misto");
        assert!(!load_preset(&mut builder, ""));
        assert!(builder.document().is_empty());
        assert_eq!(
            builder.add(ComponentType::Resistor, None, None, None).id,
            ComponentId(1)
        );
    }

    #[test]
    fn divisor_then_clear() {
        let mut builder = NetlistBuilder::new();
        load_preset(&mut builder, "divisor");
        builder.clear();
        assert!(builder.document().is_empty());
        let r = builder.add(ComponentType::Resistor, None, None, None);
        assert_eq!(r.id, ComponentId(1));
        assert_eq!(r.name, "R1");
    }

    #[test]
    fn names_in_declaration_order() {
        assert_eq!(
            preset_names().collect::<Vec<_>>(),
            vec!["divisor", "ponte", "amp", "misto"]
        );
    }
}
