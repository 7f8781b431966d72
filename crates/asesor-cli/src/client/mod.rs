pub(crate) mod client;
pub(crate) mod detail;
pub(crate) mod error;
pub(crate) mod outcome;

pub use client::Client;
pub use detail::extract_detail;
pub use error::{ClientError, Result as CliClientResult};
pub use outcome::Outcome;
