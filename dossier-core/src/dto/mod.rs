//! Request payloads for the document service API
//!
//! These map one-to-one onto the JSON bodies the service accepts. Optional
//! fields are skipped on the wire so defaults stay server-side.

pub mod ingest;
pub mod response;
pub mod store;

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by every delete endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionStatus {
    pub id: String,
    pub deleted: bool,
}
