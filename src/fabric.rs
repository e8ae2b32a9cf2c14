// fabric.rs - Fabric installer bootstrap and invocation

use anyhow::{Context, Result, bail};
use console::style;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use crate::modrinth_client::ModrinthClient;

pub const INSTALLER_JAR: &str = "fabric-installer.jar";
const INSTALLER_URL: &str =
    "https://maven.fabricmc.net/net/fabricmc/fabric-installer/1.0.1/fabric-installer-1.0.1.jar";

/// Makes sure the Fabric installer jar sits next to the binary, downloading
/// it on first run. The jar is kept across runs.
pub async fn ensure_installer_jar(client: &ModrinthClient) -> Result<()> {
    let jar = Path::new(INSTALLER_JAR);
    if jar.exists() {
        return Ok(());
    }

    println!("{}", style("Downloading the Fabric installer...").cyan());
    client.download_file(INSTALLER_URL, jar).await.with_context(|| {
        format!(
            "Could not download the Fabric installer. Fetch it manually from {} and save it as {}",
            INSTALLER_URL, INSTALLER_JAR
        )
    })
}

/// Runs `java -version` with output suppressed; only the exit status matters.
pub async fn check_java() -> Result<()> {
    let status = Command::new("java")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .context("Could not run java. Is a Java runtime installed and on PATH?")?;

    if !status.success() {
        bail!("java -version exited with {}", status);
    }
    Ok(())
}

pub async fn run_installer(minecraft_dir: &Path, game_version: &str) -> Result<()> {
    println!(
        "{}",
        style(format!("Installing the Fabric loader for {}...", game_version)).cyan()
    );

    let status = Command::new("java")
        .arg("-jar")
        .arg(INSTALLER_JAR)
        .arg("client")
        .arg("-dir")
        .arg(minecraft_dir)
        .arg("-mcversion")
        .arg(game_version)
        .status()
        .await
        .context("Failed to run the Fabric installer")?;

    if !status.success() {
        bail!(
            "The Fabric installer rejected {}. Incompatible or unknown Minecraft version",
            game_version
        );
    }
    Ok(())
}
