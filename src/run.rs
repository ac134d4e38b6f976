use std::{
    io,
    path::{self, Path, PathBuf},
};

use log::{debug, error, warn};
use serde_json::json;

use crate::{
    config::Config,
    converter::Converter,
    direction::{derive_direction, Direction, EXTENSION_CHOICES},
    error::ConvertError,
    output_path::resolve_output_path,
    prompt::{ExtensionPrompt, PromptOutcome},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted(PathBuf),
    Cancelled,
}

/// Converts the single file named in `config`.
pub fn run(
    config: &Config,
    prompt: &mut dyn ExtensionPrompt,
    converter: &dyn Converter,
) -> Result<Outcome, ConvertError> {
    debug!("{}", json!({ "step": "handle_file", "file": config.input.display().to_string() }));
    let source = resolve_source(&config.input)?;

    let direction = derive_direction(&source);
    let target_extension = match direction {
        Direction::FromWebp => match &config.ext {
            Some(ext) => Some(ext.clone()),
            None => match prompt
                .choose_extension(&EXTENSION_CHOICES, 0)
                .map_err(ConvertError::Prompt)?
            {
                PromptOutcome::Selected(ext) => Some(ext),
                PromptOutcome::Cancelled => {
                    debug!("{}", json!({ "step": "prompt", "cancelled": true }));
                    return Ok(Outcome::Cancelled);
                }
            },
        },
        Direction::ToWebp => config.ext.clone(),
    };

    let output = resolve_output_path(
        &source,
        config.out.as_deref(),
        direction,
        target_extension.as_deref(),
    );
    debug!(
        "{}",
        json!({
            "step": "generate_outfile",
            "file": source.display().to_string(),
            "out": output.display().to_string(),
            "direction": direction.as_str(),
            "ext": target_extension,
        })
    );

    match direction {
        Direction::ToWebp => {
            debug!(
                "{}",
                json!({ "step": "convert_to_webp", "options": config.encode.to_string() })
            );
            converter.convert_to_webp(&source, &output, &config.encode, config.verbose)?
        }
        Direction::FromWebp => {
            debug!("{}", json!({ "step": "convert_from_webp" }));
            converter.convert_from_webp(&source, &output, config.verbose)?
        }
    }
    Ok(Outcome::Converted(output))
}

fn resolve_source(input: &Path) -> Result<PathBuf, ConvertError> {
    let source = path::absolute(input)?;
    match source.metadata() {
        Ok(meta) if meta.is_file() => Ok(source),
        Ok(_) => Err(ConvertError::NotAFile(source)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ConvertError::FileNotFound(source)),
        Err(e) => Err(e.into()),
    }
}

/// Reports the result to the user and picks the process status.
///
/// A missing input file and a cancelled prompt both exit cleanly.
pub fn exit_code(result: &Result<Outcome, ConvertError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(err @ ConvertError::FileNotFound(_)) => {
            warn!("{err}");
            0
        }
        Err(err) => {
            error!("{err:?}");
            warn!("Exiting with error...");
            1
        }
    }
}
