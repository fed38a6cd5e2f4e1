use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use jobboard_core::DomainError;

/// Metadata key the identity provider stores the role under.
pub const ROLE_METADATA_KEY: &str = "role";

/// Area of the application an identity is permitted to use.
///
/// Validated once at the identity boundary; pages and handlers only ever see
/// this enum, never the raw metadata string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employer,
    Jobseeker,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Employer, Role::Jobseeker];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employer => "employer",
            Role::Jobseeker => "jobseeker",
        }
    }

    /// Human-facing label (link text, page headings).
    pub fn label(&self) -> &'static str {
        match self {
            Role::Employer => "Employer",
            Role::Jobseeker => "Job seeker",
        }
    }

    /// Read the role out of a loosely-typed public metadata bag.
    ///
    /// Missing keys, non-string values and unknown names all yield `None`.
    pub fn from_metadata(metadata: &Map<String, Value>) -> Option<Self> {
        metadata
            .get(ROLE_METADATA_KEY)
            .and_then(Value::as_str)
            .and_then(|raw| raw.parse().ok())
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown role '{s}'")))
    }
}
