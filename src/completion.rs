use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context};
use clap::Command;
use clap_complete::Shell;
use log::info;

const SCRIPT_DIR: &str = ".convert-webp";
const BLOCK_START: &str = "# begin convert-webp completion";
const BLOCK_END: &str = "# end convert-webp completion";

/// Where completion lives for one shell under one home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionTarget {
    pub shell: Shell,
    pub script: PathBuf,
    pub init_file: PathBuf,
}

impl CompletionTarget {
    pub fn new(home: &Path, shell: Shell) -> anyhow::Result<Self> {
        let init_file = match shell {
            Shell::Bash => home.join(".bashrc"),
            Shell::Zsh => home.join(".zshrc"),
            Shell::Fish => home.join(".config").join("fish").join("config.fish"),
            other => bail!("autocompletion is not supported for {other}"),
        };
        Ok(Self {
            shell,
            script: home.join(SCRIPT_DIR).join(format!("completion.{shell}")),
            init_file,
        })
    }

    /// Target for the user's login shell, taken from `$SHELL`.
    pub fn detect() -> anyhow::Result<Self> {
        let home = dirs_next::home_dir().ok_or_else(|| anyhow!("could not find home directory"))?;
        let shell = Shell::from_env().ok_or_else(|| anyhow!("could not detect shell from $SHELL"))?;
        Self::new(&home, shell)
    }
}

pub fn setup(target: &CompletionTarget, cmd: &mut Command) -> anyhow::Result<()> {
    let bin_name = cmd.get_name().to_owned();
    let mut script = Vec::new();
    clap_complete::generate(target.shell, cmd, bin_name, &mut script);

    if let Some(dir) = target.script.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    fs::write(&target.script, script)
        .with_context(|| format!("Failed to write {}", target.script.display()))?;
    info!("Wrote completion script to {}", target.script.display());

    let init = read_init_file(&target.init_file)?;
    if init.contains(BLOCK_START) {
        info!("{} already sources completion", target.init_file.display());
        return Ok(());
    }
    let mut updated = init;
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(&format!(
        "{BLOCK_START}\nsource '{}'\n{BLOCK_END}\n",
        target.script.display()
    ));
    if let Some(dir) = target.init_file.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    fs::write(&target.init_file, updated)
        .with_context(|| format!("Failed to write {}", target.init_file.display()))?;
    Ok(())
}

pub fn cleanup(target: &CompletionTarget) -> anyhow::Result<()> {
    let init = read_init_file(&target.init_file)?;
    if init.contains(BLOCK_START) {
        fs::write(&target.init_file, strip_block(&init))
            .with_context(|| format!("Failed to write {}", target.init_file.display()))?;
    }
    if target.script.exists() {
        fs::remove_file(&target.script)
            .with_context(|| format!("Failed to remove {}", target.script.display()))?;
    }
    // only removes the directory once no other shell's script is left in it
    if let Some(dir) = target.script.parent() {
        fs::remove_dir(dir).ok();
    }
    Ok(())
}

fn read_init_file(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn strip_block(init: &str) -> String {
    let mut inside = false;
    let mut kept = String::with_capacity(init.len());
    for line in init.lines() {
        match line.trim() {
            BLOCK_START => inside = true,
            BLOCK_END if inside => inside = false,
            _ if inside => (),
            _ => {
                kept.push_str(line);
                kept.push('\n');
            }
        }
    }
    kept
}
