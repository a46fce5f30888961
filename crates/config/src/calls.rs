use crate::ConfigError;
use minter_common::CallSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A TOML list of calls to encode:
///
/// ```toml
/// [[calls]]
/// signature = "transfer(address,uint256)"
/// args = ["0x7A860e9c0986B5F7B1aB6AE7f0017d793dFcEa2E", "1000000000000000000"]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallsFile {
    #[serde(default)]
    pub calls: Vec<CallSpec>,
}

impl CallsFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
