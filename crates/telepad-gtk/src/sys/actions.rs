use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};
use telepad::Zone;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ShellCommand(String);

/// Starts the command bound to a selected zone without waiting for it.
pub fn run(zone: Zone, command: Option<&ShellCommand>) {
    let Some(command) = command.filter(|c| !c.trim().is_empty()) else {
        log::info!("No action bound to {}", zone);
        return;
    };

    log::info!("Running '{}' for {}", command, zone);
    if let Err(e) = spawn(command) {
        log::error!("Failed to run '{}': {}", command, e);
    }
}

fn spawn(command: &ShellCommand) -> std::io::Result<()> {
    Command::new("sh")
        .arg("-c")
        .arg(&command.0)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
