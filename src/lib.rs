pub mod cli;
pub mod completion;
pub mod config;
pub mod converter;
pub mod direction;
pub mod encode_options;
pub mod error;
pub mod output_path;
pub mod prompt;
pub mod run;

pub use config::{Config, ToolPaths};
pub use converter::{Converter, WebpTools};
pub use direction::{derive_direction, Direction};
pub use encode_options::EncodeOptions;
pub use error::ConvertError;
pub use output_path::resolve_output_path;
pub use prompt::{ExtensionPrompt, LinePrompt, PromptOutcome};
pub use run::{exit_code, run, Outcome};
