use crate::prelude::*;
use std::time::Duration;

/// Result of submitting one preset during a smoke run.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetOutcome {
    pub preset: &'static str,
    /// `None` when the solver answered with equations and results
    pub failure: Option<String>,
}

impl PresetOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Submits every built-in preset in turn, one request at a time with `pause` in between.
pub async fn run_presets<C: SolverClient>(
    client: &C,
    config: &SubmitConfig,
    pause: Duration,
) -> Vec<PresetOutcome> {
    let mut outcomes = Vec::new();
    for (idx, preset) in netlist_model::preset_names().enumerate() {
        if idx > 0 && !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
        let session = Session::new(config.clone()).tap_mut(|s| {
            s.load_preset(preset);
        });
        let failure = match session.submit(client).await {
            Ok(response) => {
                let missing = response.missing_fields();
                if missing.is_empty() {
                    None
                } else {
                    Some(format!("Missing fields: {}", missing.join(", ")))
                }
            }
            Err(e) => Some(e.to_string()),
        };
        match &failure {
            None => info!("{preset}: passed"),
            Some(reason) => warn!("{preset}: failed: {reason}"),
        }
        outcomes.push(PresetOutcome { preset, failure });
    }
    outcomes
}
