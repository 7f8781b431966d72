//! asesor-cli library
//!
//! Terminal client for the asesorías tutoring booking backend: a credential
//! gate, forms for creating, editing and deleting tutoring sessions, a
//! session lister and the navigation shell that ties them together.

pub mod banner;
pub(crate) mod client;
pub mod error;
pub mod forms;
pub mod gate;
pub mod lister;
pub mod logger;
pub mod models;
pub mod session;
pub mod shell;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, Outcome, extract_detail};
