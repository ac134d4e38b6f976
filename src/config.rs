use std::path::PathBuf;

use crate::encode_options::EncodeOptions;

/// Locations of the external encoder and decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub cwebp: PathBuf,
    pub dwebp: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            cwebp: PathBuf::from("cwebp"),
            dwebp: PathBuf::from("dwebp"),
        }
    }
}

/// Everything one conversion needs to know, passed explicitly into `run`.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub out: Option<PathBuf>,
    pub ext: Option<String>,
    pub encode: EncodeOptions,
    pub verbose: bool,
    pub debug: bool,
    pub tools: ToolPaths,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            out: None,
            ext: None,
            encode: EncodeOptions::default(),
            verbose: false,
            debug: false,
            tools: ToolPaths::default(),
        }
    }
}
