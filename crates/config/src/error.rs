use std::path::PathBuf;

/// Errors raised while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("please set DEPLOYER_PRIVATE_KEY in your environment or .env file")]
    MissingPrivateKey,
    /// The message never contains the key itself.
    #[error("DEPLOYER_PRIVATE_KEY is not a valid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("invalid RPC URL `{url}`")]
    InvalidRpcUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
