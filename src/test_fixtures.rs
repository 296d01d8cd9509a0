//! Test fixtures for building fake machine roots.
//!
//! ```ignore
//! use crate::test_fixtures::FakeMachine;
//!
//! let machine = FakeMachine::new();
//! machine.install(Location::LegacyApp, "2.40.0");
//! let settings = machine.settings();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::Settings;
use crate::domain::Location;
use crate::probe::{ProbeOutcome, VersionSource};
use crate::report::system::{CommandOutput, CommandRunner};
use crate::version::Version;

/// Minimal `Info.plist` with an optional short version string.
#[must_use]
pub fn info_plist(short_version: Option<&str>) -> String {
    let version_entry = short_version
        .map(|v| format!("    <key>CFBundleShortVersionString</key>\n    <string>{v}</string>\n"))
        .unwrap_or_default();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleIdentifier</key>
    <string>com.jamf.connect</string>
{version_entry}    <key>CFBundleVersion</key>
    <string>1</string>
</dict>
</plist>
"#
    )
}

/// A temporary directory standing in for the root of a Mac.
pub struct FakeMachine {
    temp: TempDir,
}

impl FakeMachine {
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Settings with defaults re-rooted at this machine
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            root: self.root().to_path_buf(),
            ..Settings::default()
        }
    }

    /// Install a bundle whose metadata carries `version`
    pub fn install(&self, location: Location, version: &str) -> PathBuf {
        self.write_metadata(location, &info_plist(Some(version)))
    }

    /// Write raw metadata content at a location
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_metadata(&self, location: Location, content: &str) -> PathBuf {
        let path = self.settings().metadata_path(location);
        self.write(&path, content);
        path
    }

    /// Write a file at an absolute machine path
    pub fn write_machine_file(&self, machine_path: &Path, content: &str) -> PathBuf {
        let path = self.settings().resolve(machine_path);
        self.write(&path, content);
        path
    }

    fn write(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }
}

impl Default for FakeMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory [`VersionSource`] that records every location it is asked about.
#[derive(Default)]
pub struct RecordingSource {
    outcomes: HashMap<Location, ProbeOutcome>,
    probed: RefCell<Vec<Location>>,
}

impl RecordingSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if `version` is blank.
    #[must_use]
    pub fn with(self, location: Location, version: &str) -> Self {
        let version = Version::parse(version).expect("fixture version must not be blank");
        self.with_outcome(location, ProbeOutcome::Found(version))
    }

    #[must_use]
    pub fn with_outcome(mut self, location: Location, outcome: ProbeOutcome) -> Self {
        self.outcomes.insert(location, outcome);
        self
    }

    /// Locations probed so far, in order
    pub fn probed(&self) -> Vec<Location> {
        self.probed.borrow().clone()
    }
}

impl VersionSource for RecordingSource {
    fn probe(&self, location: Location) -> ProbeOutcome {
        self.probed.borrow_mut().push(location);
        self.outcomes
            .get(&location)
            .cloned()
            .unwrap_or(ProbeOutcome::Absent)
    }
}

/// [`CommandRunner`] with canned results per program. Unscripted programs
/// behave as if they are not installed.
#[derive(Default)]
pub struct ScriptedRunner {
    results: HashMap<String, CommandOutput>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn succeed(mut self, program: &str, stdout: &str) -> Self {
        self.results.insert(
            program.to_string(),
            CommandOutput {
                success: true,
                stdout: stdout.to_string(),
            },
        );
        self
    }

    #[must_use]
    pub fn fail(mut self, program: &str) -> Self {
        self.results.insert(
            program.to_string(),
            CommandOutput {
                success: false,
                stdout: String::new(),
            },
        );
        self
    }

    /// Command lines run so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.borrow_mut().push(line);

        self.results.get(program).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{program}: command not found"),
            )
        })
    }
}
