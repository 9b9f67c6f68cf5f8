use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the compiled `capweave` binary.
pub fn capweave_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_capweave"))
}

/// A `capweave` command isolated from the caller's menu and log settings.
pub fn capweave(args: &[&str]) -> Command {
    let mut cmd = Command::new(capweave_bin());
    cmd.args(args).env_remove("CAPWEAVE_MENU").env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn write_menu(dir: &Path, name: &str, body: &serde_json::Value) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(body)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
