pub mod error;
pub mod http;
pub mod response;

pub use error::{Result, SubmitError};
pub use http::{DEFAULT_SOLVER_URL, HttpSolverClient, NETLIST_FIELD};
pub use response::{Mesh, NodeResult, Scalar, SolverResponse, SuperpositionStep};

use log::info;
use netlist_model::{SubmissionRecord, to_payload_json};

/// The external solver. One request at a time, no retries.
#[allow(async_fn_in_trait)]
pub trait SolverClient {
    /// Sends the JSON payload and decodes whatever comes back, including error responses.
    async fn exchange(&self, payload: String) -> Result<SolverResponse>;

    /// Submits the records and turns an `Erro` response into [`SubmitError::Solver`].
    async fn solve(&self, records: &[SubmissionRecord]) -> Result<SolverResponse> {
        let payload = to_payload_json(records).map_err(|e| SubmitError::Encode(format!("{e}")))?;
        info!("Submitting {} components", records.len());
        self.exchange(payload).await?.into_result()
    }
}
