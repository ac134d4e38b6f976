use std::{
    io::{self, Write},
    path::Path,
    process::{Command, Output},
};

use log::{debug, info};

use crate::{config::ToolPaths, encode_options::EncodeOptions, error::ConvertError};

/// Runs the actual WebP encode/decode.
pub trait Converter {
    fn convert_to_webp(
        &self,
        source: &Path,
        output: &Path,
        options: &EncodeOptions,
        verbose: bool,
    ) -> Result<(), ConvertError>;

    fn convert_from_webp(&self, source: &Path, output: &Path, verbose: bool) -> Result<(), ConvertError>;
}

/// Shells out to the `cwebp` and `dwebp` binaries.
#[derive(Debug, Clone)]
pub struct WebpTools {
    paths: ToolPaths,
}

impl WebpTools {
    pub fn new(paths: ToolPaths) -> Self {
        Self { paths }
    }

    pub fn encode_command(
        &self,
        source: &Path,
        output: &Path,
        options: &EncodeOptions,
        verbose: bool,
    ) -> Command {
        let mut cmd = Command::new(&self.paths.cwebp);
        cmd.args(options.args()).arg(source).arg("-o").arg(output);
        if verbose {
            cmd.arg("-v");
        }
        cmd
    }

    pub fn decode_command(&self, source: &Path, output: &Path, verbose: bool) -> Command {
        let mut cmd = Command::new(&self.paths.dwebp);
        cmd.arg(source).arg("-o").arg(output);
        if verbose {
            cmd.arg("-v");
        }
        cmd
    }
}

impl Converter for WebpTools {
    fn convert_to_webp(
        &self,
        source: &Path,
        output: &Path,
        options: &EncodeOptions,
        verbose: bool,
    ) -> Result<(), ConvertError> {
        run_tool(self.encode_command(source, output, options, verbose), verbose)
    }

    fn convert_from_webp(&self, source: &Path, output: &Path, verbose: bool) -> Result<(), ConvertError> {
        run_tool(self.decode_command(source, output, verbose), verbose)
    }
}

fn run_tool(mut cmd: Command, verbose: bool) -> Result<(), ConvertError> {
    let tool = cmd.get_program().to_string_lossy().into_owned();
    debug!("Running {:?}", cmd);

    let output = cmd.output().map_err(|source| ConvertError::Spawn {
        tool: tool.clone(),
        source,
    })?;

    if !output.status.success() {
        return Err(ConvertError::ExternalTool {
            tool,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    info!("{tool} finished with {}", output.status);
    if verbose {
        echo_output(&output)?;
    }
    Ok(())
}

fn echo_output(output: &Output) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    stderr.write_all(&output.stdout)?;
    stderr.write_all(&output.stderr)?;
    stderr.flush()
}
