use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use ugrid_check::netcdf::{self, Dataset};

/// Isolated working directory for running the ugrid-check binary.
///
/// The global config directory is redirected into the temp dir (through
/// `XDG_CONFIG_HOME` and `HOME`) so a developer's own config never leaks
/// into a test run. Windows resolves it without the environment, so tests
/// relying on the redirect are not run there.
pub struct TestHarness {
    pub dir: TempDir,
    pub binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("xdg")).expect("Failed to create config dir");
        Self {
            dir,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_ugrid-check")),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `dataset` as a binary netCDF header.
    pub fn write_nc(&self, name: &str, dataset: &Dataset) -> PathBuf {
        let path = self.path().join(name);
        let bytes = netcdf::write_header(dataset).expect("Failed to encode header");
        fs::write(&path, bytes).expect("Failed to write dataset");
        path
    }

    /// Write `dataset` as a JSON description.
    pub fn write_json(&self, name: &str, dataset: &Dataset) -> PathBuf {
        let path = self.path().join(name);
        let text = serde_json::to_string_pretty(dataset).expect("Failed to encode JSON");
        fs::write(&path, text).expect("Failed to write dataset");
        path
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write the global config file where the redirected binary looks for it.
    pub fn write_global_config(&self, content: &str) {
        let base = if cfg!(target_os = "macos") {
            self.path().join("Library").join("Application Support")
        } else {
            self.path().join("xdg")
        };
        let dir = base.join("ugrid-check");
        fs::create_dir_all(&dir).expect("Failed to create global config dir");
        fs::write(dir.join("config.yaml"), content).expect("Failed to write global config");
    }

    /// Run the binary inside the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary)
            .args(args)
            .current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join("xdg"))
            .env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env_remove("UGRID_CHECK_QUIET")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run ugrid-check")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
