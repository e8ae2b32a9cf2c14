use serde::Deserialize;

/// One entry in the fixed mod manifest.
#[derive(Debug, Clone, Copy)]
pub struct ModEntry {
    pub slug: &'static str,
    pub name: &'static str,
}

/// The mod pack, in install order. Adding a mod is a data change.
pub const MOD_MANIFEST: &[ModEntry] = &[
    ModEntry { slug: "fabric-api", name: "Fabric API" },
    ModEntry { slug: "sodium", name: "Sodium" },
    ModEntry { slug: "lithium", name: "Lithium" },
    ModEntry { slug: "iris", name: "Iris Shaders" },
    ModEntry { slug: "modmenu", name: "Mod Menu" },
    ModEntry { slug: "lambdynamiclights", name: "LambDynamicLights" },
];

/// Optional shader pack, installed into shaderpacks/ instead of mods/.
pub const SHADER_PACK: ModEntry = ModEntry {
    slug: "complementary-reimagined",
    name: "Complementary Reimagined",
};

#[derive(Debug, Clone, Deserialize)]
pub struct ModVersion {
    pub version_number: String,
    pub files: Vec<ModFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModFile {
    pub url: String,
    pub filename: String,
}

/// The two answers collected up front; read-only afterwards.
pub struct RunConfig {
    pub game_version: String,
    pub clean_install: bool,
}

/// Counters accumulated across the merge and fetch stages.
#[derive(Debug, Default)]
pub struct InstallReport {
    pub copied_local: u32,
    pub downloaded: u32,
    pub already_present: u32,
    pub unavailable: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Complete,
    Partial,
    Failed,
}

impl InstallReport {
    /// Mods obtained from any source: local copy, download or a previous run.
    pub fn sourced(&self) -> u32 {
        self.copied_local + self.downloaded + self.already_present
    }

    pub fn outcome(&self) -> Outcome {
        if self.unavailable == 0 {
            Outcome::Complete
        } else if self.sourced() > 0 {
            Outcome::Partial
        } else {
            Outcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_version_listing() {
        let body = r#"[
            {
                "id": "abc123",
                "version_number": "0.5.8",
                "game_versions": ["1.21.10"],
                "loaders": ["fabric"],
                "files": [
                    {"url": "https://cdn.modrinth.com/sodium.jar", "filename": "sodium-fabric-0.5.8.jar", "primary": true}
                ]
            }
        ]"#;
        let versions: Option<Vec<ModVersion>> = serde_json::from_str(body).unwrap();
        let versions = versions.unwrap();
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].version_number, "0.5.8");
        assert_eq!(versions[0].files[0].filename, "sodium-fabric-0.5.8.jar");
    }

    #[test]
    fn null_listing_means_no_releases() {
        let versions: Option<Vec<ModVersion>> = serde_json::from_str("null").unwrap();
        assert!(versions.is_none());
    }

    #[test]
    fn empty_listing_parses() {
        let versions: Option<Vec<ModVersion>> = serde_json::from_str("[]").unwrap();
        assert_eq!(versions.unwrap().len(), 0);
    }

    #[test]
    fn outcome_complete_when_nothing_unavailable() {
        let report = InstallReport {
            downloaded: 3,
            already_present: 2,
            ..Default::default()
        };
        assert_eq!(report.outcome(), Outcome::Complete);
    }

    #[test]
    fn outcome_partial_when_some_sourced() {
        let report = InstallReport {
            downloaded: 5,
            unavailable: 1,
            ..Default::default()
        };
        assert_eq!(report.outcome(), Outcome::Partial);
    }

    #[test]
    fn outcome_failed_when_nothing_sourced() {
        let report = InstallReport {
            unavailable: 7,
            ..Default::default()
        };
        assert_eq!(report.outcome(), Outcome::Failed);
    }
}
