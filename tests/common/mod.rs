//! Common test utilities for connect-doctor integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const MODERN_BUNDLED: &str =
    "Applications/Self Service+.app/Contents/MacOS/Jamf Connect.app/Contents/Info.plist";
#[allow(dead_code)]
pub const LEGACY_APP: &str = "Applications/Jamf Connect.app/Contents/Info.plist";
#[allow(dead_code)]
pub const LOGIN_BUNDLE: &str =
    "Library/Security/SecurityAgentPlugins/JamfConnectLogin.bundle/Contents/Info.plist";

/// A temporary directory standing in for the root of a Mac
pub struct TestMachine {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path passed as --root
    pub path: PathBuf,
    /// Isolated HOME so no user config file is picked up
    pub home: PathBuf,
}

impl TestMachine {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("root");
        let home = temp.path().join("home");
        std::fs::create_dir_all(&path).expect("Failed to create root directory");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        Self { temp, path, home }
    }

    /// Write a file relative to the machine root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Install an Info.plist with the given short version
    #[allow(dead_code)]
    pub fn install(&self, path: &str, version: &str) {
        self.write_file(path, &info_plist(version));
    }

    /// Write a config file outside the machine root and return its path
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.home.join("doctor.yaml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// connect-doctor command pointed at this machine
    pub fn cmd(&self) -> Command {
        let mut cmd = doctor_cmd();
        cmd.arg("--root")
            .arg(&self.path)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("CONNECT_DOCTOR_ROOT")
            .env_remove("CONNECT_DOCTOR_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        &self.path
    }
}

impl Default for TestMachine {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn doctor_cmd() -> Command {
    Command::cargo_bin("connect-doctor").expect("binary should be built")
}

pub fn info_plist(version: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleShortVersionString</key>
    <string>{version}</string>
</dict>
</plist>
"#
    )
}
