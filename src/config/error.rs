//----------------------------------------
// configuration errors
//----------------------------------------
use std::path::PathBuf;

use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigErr {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse TOML: {0}")]
    Parse(toml::de::Error),
    #[error("{name} should be {expected}; got {value}")]
    InvalidParameter {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl From<ConfigErr> for AbcomputeErr {
    fn from(e: ConfigErr) -> Self {
        AbcomputeErr::Config(e)
    }
}
