//! Shared wire types and process utilities used by every crate in the workspace.

pub mod types;
pub mod utils;
