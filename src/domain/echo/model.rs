use std::fmt;

use serde::Serialize;

/// A pod's name together with the IP the cluster reports for it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PodSummary {
    pub name: String,
    pub ip: String,
}

impl PodSummary {
    pub fn new(name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
        }
    }
}

impl fmt::Display for PodSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.ip)
    }
}
