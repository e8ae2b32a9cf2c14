// config.rs - Platform resolution and directory layout

use anyhow::{Context, Result, bail};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Clone)]
pub struct InstallerPaths {
    pub minecraft_dir: PathBuf,
    pub mods_dir: PathBuf,
    pub shaderpacks_dir: PathBuf,
    pub local_mods_dir: PathBuf,
    pub local_shaderpacks_dir: PathBuf,
}

impl InstallerPaths {
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        let appdata = env::var_os("APPDATA").map(PathBuf::from);
        let minecraft_dir = minecraft_dir_for(env::consts::OS, &home, appdata.as_deref())?;
        Ok(Self::from_root(minecraft_dir))
    }

    fn from_root(minecraft_dir: PathBuf) -> Self {
        Self {
            mods_dir: minecraft_dir.join("mods"),
            shaderpacks_dir: minecraft_dir.join("shaderpacks"),
            local_mods_dir: PathBuf::from("minecraft").join("mods"),
            local_shaderpacks_dir: PathBuf::from("minecraft").join("shaderpacks"),
            minecraft_dir,
        }
    }

    pub async fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(&self.mods_dir).await?;
        fs::create_dir_all(&self.shaderpacks_dir).await?;
        Ok(())
    }
}

fn minecraft_dir_for(os: &str, home: &Path, appdata: Option<&Path>) -> Result<PathBuf> {
    match os {
        "macos" => Ok(home
            .join("Library")
            .join("Application Support")
            .join("minecraft")),
        "windows" => match appdata {
            Some(dir) => Ok(dir.join(".minecraft")),
            None => bail!("APPDATA is not set; cannot locate the Minecraft folder"),
        },
        _ => Ok(home.join(".minecraft")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_uses_application_support() {
        let dir = minecraft_dir_for("macos", Path::new("/Users/steve"), None).unwrap();
        assert!(dir.ends_with("Library/Application Support/minecraft"));
    }

    #[test]
    fn linux_uses_dot_minecraft() {
        let dir = minecraft_dir_for("linux", Path::new("/home/steve"), None).unwrap();
        assert_eq!(dir, PathBuf::from("/home/steve/.minecraft"));
    }

    #[test]
    fn windows_uses_appdata() {
        let appdata = Path::new("C:\\Users\\steve\\AppData\\Roaming");
        let dir = minecraft_dir_for("windows", Path::new("C:\\Users\\steve"), Some(appdata)).unwrap();
        assert!(dir.starts_with(appdata));
        assert!(dir.ends_with(".minecraft"));
    }

    #[test]
    fn windows_without_appdata_is_an_error() {
        let result = minecraft_dir_for("windows", Path::new("C:\\Users\\steve"), None);
        assert!(result.is_err());
    }

    #[test]
    fn subdirectories_hang_off_the_root() {
        let paths = InstallerPaths::from_root(PathBuf::from("/home/steve/.minecraft"));
        assert_eq!(paths.mods_dir, PathBuf::from("/home/steve/.minecraft/mods"));
        assert_eq!(
            paths.shaderpacks_dir,
            PathBuf::from("/home/steve/.minecraft/shaderpacks")
        );
        assert_eq!(paths.local_mods_dir, PathBuf::from("minecraft/mods"));
    }
}
