use crate::prelude::*;
use netlist_check::check_netlist;
use netlist_model::{SubmissionRecord, serialize};

/// One working document plus the settings it is checked and submitted with.
pub struct Session {
    builder: NetlistBuilder,
    config: SubmitConfig,
}

impl Session {
    pub fn new(config: SubmitConfig) -> Self {
        Self {
            builder: NetlistBuilder::new(),
            config,
        }
    }

    pub fn builder(&self) -> &NetlistBuilder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut NetlistBuilder {
        &mut self.builder
    }

    pub fn load_preset(&mut self, name: &str) -> bool {
        netlist_model::load_preset(&mut self.builder, name)
    }

    /// Runs the checks and, only if nothing blocks, produces the records to send.
    pub fn prepare(&self) -> Result<Vec<SubmissionRecord>, SubmitError> {
        let diagnostics = check_netlist(self.builder.document(), &self.config.checks);
        if diagnostics.has_errors() {
            return Err(SubmitError::Validation(diagnostics.error_messages()));
        }
        Ok(serialize(self.builder.document()))
    }

    pub async fn submit<C: SolverClient>(&self, client: &C) -> Result<SolverResponse, SubmitError> {
        let records = self.prepare()?;
        client.solve(&records).await
    }
}
