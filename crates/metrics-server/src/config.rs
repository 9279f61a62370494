use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATA_PATH: &str = "data/data.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_path: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr(AddrParseError),
    InvalidDataPath,
    NonUnicodeListenAddr,
    NonUnicodeDataPath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenAddr(err) => {
                write!(f, "METRICS_SERVER_ADDR is not a valid socket address: {err}")
            }
            Self::InvalidDataPath => {
                write!(f, "METRICS_SERVER_DATA must not be empty or whitespace")
            }
            Self::NonUnicodeListenAddr => {
                write!(f, "METRICS_SERVER_ADDR contains non-unicode data")
            }
            Self::NonUnicodeDataPath => {
                write!(f, "METRICS_SERVER_DATA contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidListenAddr(err) => Some(err),
            Self::InvalidDataPath => None,
            Self::NonUnicodeListenAddr => None,
            Self::NonUnicodeDataPath => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("METRICS_SERVER_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let data_path = match env::var("METRICS_SERVER_DATA") {
            Ok(value) => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidDataPath);
                }
                value
            }
            Err(env::VarError::NotPresent) => DEFAULT_DATA_PATH.to_owned(),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeDataPath);
            }
        };

        Ok(Self {
            listen_addr,
            data_path,
        })
    }
}
