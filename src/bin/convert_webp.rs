use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use convert_webp::{
    cli::Cli,
    completion::{self, CompletionTarget},
    exit_code, run, LinePrompt, WebpTools,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbosity = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();

    if cli.setup || cli.cleanup {
        if let Err(e) = autocomplete(cli.setup) {
            log::error!("{e:?}");
            return ExitCode::FAILURE;
        }
    }

    let Some(config) = cli.into_config() else {
        return ExitCode::SUCCESS;
    };
    let tools = WebpTools::new(config.tools.clone());
    let result = run(&config, &mut LinePrompt::terminal(), &tools);
    ExitCode::from(exit_code(&result))
}

fn autocomplete(setup: bool) -> anyhow::Result<()> {
    let target = CompletionTarget::detect()?;
    if setup {
        completion::setup(&target, &mut Cli::command())?;
        println!("convert-webp autocomplete setup complete!");
    } else {
        completion::cleanup(&target)?;
        println!("convert-webp autocomplete cleanup complete!");
    }
    Ok(())
}
