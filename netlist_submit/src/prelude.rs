pub use crate::config::SubmitConfig;
pub use crate::session::Session;
pub use log::{debug, info, trace, warn};
pub use netlist_model::{ComponentId, ComponentType, NetlistBuilder};
pub use serde::{Deserialize, Serialize};
pub use solver_client::{SolverClient, SolverResponse, SubmitError};
pub use strum::IntoEnumIterator;
pub use tap::prelude::*;
