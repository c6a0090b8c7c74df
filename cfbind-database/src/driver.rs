//! Database driver identification.

use serde::{Deserialize, Serialize};

use crate::error::{BindingError, BindingResult};

/// Database driver for a bound service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// MySQL
    MySql,
}

impl Driver {
    /// Get the driver name (the URL scheme token).
    pub fn name(&self) -> &'static str {
        match self {
            Self::MySql => "mysql",
        }
    }

    /// Get the JDBC driver class consumers load for this driver.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::MySql => "com.mysql.jdbc.Driver",
        }
    }

    /// Parse driver from URL scheme.
    ///
    /// One match arm per supported database; anything else is a typed
    /// [`BindingError::UnknownDriver`], never a silent default.
    pub fn from_scheme(scheme: &str) -> BindingResult<Self> {
        match scheme.to_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            other => Err(BindingError::UnknownDriver(other.to_string())),
        }
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
