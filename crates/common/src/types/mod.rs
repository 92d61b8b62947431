use serde::{Deserialize, Serialize};

/// Service name reported by the index endpoint.
pub const SERVICE_NAME: &str = "Account REST API Service";
/// Public API version reported by the index endpoint.
pub const SERVICE_VERSION: &str = "1.0";

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "OK" } }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self { Self { name: SERVICE_NAME, version: SERVICE_VERSION } }
}
