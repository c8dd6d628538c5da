use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// What to do when two components share a name. The solver's results refer to components by
/// name, duplicates make those results ambiguous.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumIter)]
pub enum NameUniqueness {
    Ignore,
    #[default]
    Warn,
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    pub name_uniqueness: NameUniqueness,
}
