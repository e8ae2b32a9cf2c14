use anyhow::Result;
use console::{Color, Term, style};
use dialoguer::{Confirm, Input};

mod config;
mod fabric;
mod models;
mod modrinth_client;
mod sync;

use config::InstallerPaths;
use models::{InstallReport, Outcome, RunConfig};
use modrinth_client::ModrinthClient;

fn ask_run_config() -> Result<RunConfig> {
    let game_version: String = Input::<String>::new()
        .with_prompt(
            style("Minecraft version to install (e.g. 1.21.1)")
                .fg(Color::Green)
                .to_string(),
        )
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Version must not be empty".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let clean_install = Confirm::new()
        .with_prompt(
            style("Back up and remove the currently installed mods first?")
                .fg(Color::Green)
                .to_string(),
        )
        .default(false)
        .interact()?;

    Ok(RunConfig {
        game_version: game_version.trim().to_string(),
        clean_install,
    })
}

fn print_summary(report: &InstallReport, game_version: &str) {
    println!("\n{}", style("Summary:").bold());
    println!("{} copied from local folders", report.copied_local);
    println!("{} downloaded", report.downloaded);
    println!("{} already present", report.already_present);
    println!("{} not available for {}", report.unavailable, game_version);

    match report.outcome() {
        Outcome::Complete => {
            println!("\n{}", style("All mods are installed.").green().bold());
        }
        Outcome::Partial => {
            println!(
                "\n{}",
                style(format!(
                    "Done, but {} mod(s) were not available for {}.",
                    report.unavailable, game_version
                ))
                .yellow()
                .bold()
            );
        }
        Outcome::Failed => {
            println!("\n{}", style("No mods could be installed.").red().bold());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let term = Term::stdout();
    term.clear_screen()?;

    println!("{}", style(r#"
███████╗ █████╗ ██████╗ ██████╗ ██╗██╗  ██╗██╗████████╗
██╔════╝██╔══██╗██╔══██╗██╔══██╗██║██║ ██╔╝██║╚══██╔══╝
█████╗  ███████║██████╔╝██████╔╝██║█████╔╝ ██║   ██║
██╔══╝  ██╔══██║██╔══██╗██╔══██╗██║██╔═██╗ ██║   ██║
██║     ██║  ██║██████╔╝██║  ██║██║██║  ██╗██║   ██║
╚═╝     ╚═╝  ╚═╝╚═════╝ ╚═╝  ╚═╝╚═╝╚═╝  ╚═╝╚═╝   ╚═╝
              v0.3 - by @vdkvdev
"#).fg(Color::Yellow).bold());

    let paths = InstallerPaths::resolve()?;
    let run = ask_run_config()?;

    println!("\n{}", style("Configuration:").bold());
    println!("Minecraft folder: {}", paths.minecraft_dir.display());
    println!("Version: {}", run.game_version);
    println!();

    let client = ModrinthClient::new()?;

    fabric::ensure_installer_jar(&client).await?;
    fabric::check_java().await?;
    fabric::run_installer(&paths.minecraft_dir, &run.game_version).await?;

    paths.ensure_directories().await?;

    if run.clean_install {
        sync::backup_and_clean(&paths);
    }

    let mut report = InstallReport::default();
    sync::merge_local(&paths, &mut report);
    sync::fetch_remote(&client, &paths, &run.game_version, &mut report).await;

    print_summary(&report, &run.game_version);

    Ok(())
}
