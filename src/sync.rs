// sync.rs - backup/cleanup, local merge and the remote fetch loop

use anyhow::Result;
use chrono::Local;
use console::style;
use indicatif::ProgressBar;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::InstallerPaths;
use crate::models::{InstallReport, MOD_MANIFEST, ModEntry, ModFile, ModVersion, SHADER_PACK};
use crate::modrinth_client::ModrinthClient;

// Pause between Modrinth lookups. Not a rate limiter, just politeness.
const FETCH_PAUSE: Duration = Duration::from_millis(500);

/// Whether an installed filename looks like a release of the given slug.
/// Matches the slug itself or its underscore variant as a lowercase
/// substring; filenames using any other separator pattern are not matched.
pub fn mod_matches_filename(filename: &str, slug: &str) -> bool {
    let name = filename.to_lowercase();
    name.contains(slug) || name.contains(&slug.replace('-', "_"))
}

fn warn(message: String) {
    println!("{}", style(format!("Warning: {}", message)).yellow());
}

fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect()
}

fn is_installed(dir: &Path, slug: &str) -> bool {
    file_names(dir).iter().any(|f| mod_matches_filename(f, slug))
}

/// Moves everything currently installed into a timestamped folder on the
/// desktop. Best-effort: failures are logged per file and never abort the
/// run. Two runs within the same second share a backup folder.
pub fn backup_and_clean(paths: &InstallerPaths) {
    let Some(desktop) = dirs::desktop_dir() else {
        warn("no desktop folder found, skipping backup".to_string());
        return;
    };

    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let backup_root = desktop.join(format!("minecraft_mods_backup_{}", stamp));

    println!(
        "{}",
        style(format!("Backing up installed mods to {}", backup_root.display())).cyan()
    );

    backup_dir(&paths.mods_dir, &backup_root.join("mods"), Some("jar"));
    backup_dir(&paths.shaderpacks_dir, &backup_root.join("shaderpacks"), None);
}

/// Copies matching files out of `source` into `backup`, then deletes the
/// originals. `extension` of None takes every file.
fn backup_dir(source: &Path, backup: &Path, extension: Option<&str>) {
    if let Err(e) = fs::create_dir_all(backup) {
        warn(format!("could not create {}: {}", backup.display(), e));
        return;
    }

    let Ok(entries) = fs::read_dir(source) else {
        return;
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = extension {
            if path.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
        }

        let target = backup.join(entry.file_name());
        if let Err(e) = fs::copy(&path, &target).and_then(|_| fs::remove_file(&path)) {
            warn(format!("could not back up {}: {}", path.display(), e));
        }
    }
}

/// Copies user-provided files from the local staging folders into the
/// installed folders, skipping any filename that already exists there.
pub fn merge_local(paths: &InstallerPaths, report: &mut InstallReport) {
    merge_dir(&paths.local_mods_dir, &paths.mods_dir, Some("jar"), report);
    merge_dir(&paths.local_shaderpacks_dir, &paths.shaderpacks_dir, None, report);
}

fn merge_dir(staging: &Path, installed: &Path, extension: Option<&str>, report: &mut InstallReport) {
    let entries = match fs::read_dir(staging) {
        Ok(entries) => entries,
        Err(_) => {
            warn(format!("local folder {} not found, skipping", staging.display()));
            return;
        }
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = extension {
            if path.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
        }

        let target = installed.join(entry.file_name());
        if target.exists() {
            report.already_present += 1;
            continue;
        }

        match fs::copy(&path, &target) {
            Ok(_) => {
                println!(
                    "{}",
                    style(format!("Copied {}", entry.file_name().to_string_lossy())).green()
                );
                report.copied_local += 1;
            }
            Err(e) => warn(format!("could not copy {}: {}", path.display(), e)),
        }
    }
}

/// Walks the manifest, then the shader pack, downloading whatever is not
/// installed yet. Per-mod failures are tallied, never fatal.
pub async fn fetch_remote(
    client: &ModrinthClient,
    paths: &InstallerPaths,
    game_version: &str,
    report: &mut InstallReport,
) {
    for entry in MOD_MANIFEST {
        fetch_entry(client, entry, &paths.mods_dir, game_version, report).await;
        tokio::time::sleep(FETCH_PAUSE).await;
    }
    fetch_entry(client, &SHADER_PACK, &paths.shaderpacks_dir, game_version, report).await;
}

async fn fetch_entry(
    client: &ModrinthClient,
    entry: &ModEntry,
    target_dir: &Path,
    game_version: &str,
    report: &mut InstallReport,
) {
    if is_installed(target_dir, entry.slug) {
        println!("{}", style(format!("{} is already installed", entry.name)).dim());
        report.already_present += 1;
        return;
    }

    let progress = ProgressBar::new_spinner();
    progress.enable_steady_tick(Duration::from_millis(80));
    progress.set_message(format!("Fetching {}...", entry.name));

    let result = try_download(client, entry, target_dir, game_version).await;
    progress.finish_and_clear();

    match result {
        Ok(Some(version_number)) => {
            println!(
                "{}",
                style(format!("Installed {} {}", entry.name, version_number)).green()
            );
            report.downloaded += 1;
        }
        Ok(None) => {
            println!(
                "{}",
                style(format!("{} is not available for {}", entry.name, game_version)).yellow()
            );
            report.unavailable += 1;
        }
        Err(e) => {
            warn(format!("could not fetch {}: {}", entry.name, e));
            report.unavailable += 1;
        }
    }
}

/// Only the first release and its first file are ever consulted; Modrinth
/// returns best match first. No releases, or a release without files,
/// means the mod is unavailable for this game version.
fn pick_file(versions: Vec<ModVersion>) -> Option<(String, ModFile)> {
    let ModVersion { version_number, files } = versions.into_iter().next()?;
    let file = files.into_iter().next()?;
    Some((version_number, file))
}

async fn try_download(
    client: &ModrinthClient,
    entry: &ModEntry,
    target_dir: &Path,
    game_version: &str,
) -> Result<Option<String>> {
    let versions = client.get_versions(entry.slug, game_version).await?;
    let Some((version_number, file)) = pick_file(versions) else {
        return Ok(None);
    };

    client.download_file(&file.url, &target_dir.join(&file.filename)).await?;
    Ok(Some(version_number))
}
