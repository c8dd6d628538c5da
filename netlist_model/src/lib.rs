pub mod component_type;
pub mod netlist;
pub mod presets;
pub mod submission;
pub mod value_expr;

pub use component_type::{ComponentType, ComponentTypeDescriptor, parse_type_tag};
pub use netlist::{Component, ComponentId, NetlistBuilder, NetlistDocument};
pub use presets::{load_preset, preset_names};
pub use submission::{SubmissionRecord, load_netlist_json, serialize, to_payload_json};
pub use value_expr::expand_value_expression;
