//! Repository location classification
//!
//! This module turns an opaque repository location string (SSH URL,
//! SCP-style address, `file://` URI, or plain filesystem path) into a
//! normalized [`RepositoryReference`] that the transport and command
//! layers consume.

pub mod parser;
pub mod reference;

pub use reference::{Protocol, RepositoryReference};
