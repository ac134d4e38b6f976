use std::path::PathBuf;

use clap::Parser;

use crate::{
    config::{Config, ToolPaths},
    encode_options::EncodeOptions,
};

pub const BIN_NAME: &str = "convert-webp";

#[derive(Debug, Parser)]
#[command(
    name = BIN_NAME,
    version,
    about = "Convert an image from or to webp format",
    long_about = "Convert an image from or to webp format. This program will guess which you mean based on the file extension of provided argument. For more information on compression flags for conversion to webp, see https://developers.google.com/speed/webp/docs/cwebp",
    override_usage = "convert-webp [flags] <file>"
)]
pub struct Cli {
    /// Image file to convert
    #[arg(value_name = "file", required_unless_present_any = ["setup", "cleanup"])]
    pub file: Option<PathBuf>,

    /// Set up this command line tool for autocompletion
    #[arg(long)]
    pub setup: bool,

    /// Undo autocompletion setups (remove files from ~)
    #[arg(long, conflicts_with = "setup")]
    pub cleanup: bool,

    /// Print debug messages
    #[arg(long)]
    pub debug: bool,

    /// Output logging from conversion
    #[arg(short, long)]
    pub verbose: bool,

    /// Output file name. Specify without file extension
    #[arg(short = 'O', long, value_name = "name")]
    pub out: Option<PathBuf>,

    /// Specify a file extension for the output. Otherwise, you will be prompted to select this
    #[arg(short = 'E', long, value_name = "ext")]
    pub ext: Option<String>,

    /// Compression factor (0-100) for compression to webp
    #[arg(short = 'q', value_name = "factor")]
    pub quality: Option<String>,

    /// Use lossless conversion to webp
    #[arg(long)]
    pub lossless: bool,

    /// Use lossless compression mode with level (0-9)
    #[arg(short = 'z', value_name = "level")]
    pub level: Option<String>,

    #[arg(long, env = "CONVERT_WEBP_CWEBP", default_value = "cwebp", hide = true)]
    pub cwebp: PathBuf,

    #[arg(long, env = "CONVERT_WEBP_DWEBP", default_value = "dwebp", hide = true)]
    pub dwebp: PathBuf,
}

impl Cli {
    /// `None` when no file was given, which clap only allows alongside
    /// `--setup` or `--cleanup`.
    pub fn into_config(self) -> Option<Config> {
        let encode = EncodeOptions::assemble(
            self.quality.as_deref(),
            self.lossless,
            self.level.as_deref(),
        );
        Some(Config {
            input: self.file?,
            out: self.out,
            ext: self.ext,
            encode,
            verbose: self.verbose,
            debug: self.debug,
            tools: ToolPaths {
                cwebp: self.cwebp,
                dwebp: self.dwebp,
            },
        })
    }
}
