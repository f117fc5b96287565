// Application layer - the operations a client can perform on the session's ledger.
// Parses user text into domain values and reports failures as AppError.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
