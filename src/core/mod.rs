pub mod touch;

pub use crate::domain::model::{Revision, RevisionEnvelope, ServiceDefinition};
pub use crate::domain::ports::{RevisionApi, UpdateResponse};
pub use crate::utils::error::Result;
