//! Common test utilities for Fragmenta integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway project directory for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Project with two style groups and one script group
    pub fn with_sample_assets() -> Self {
        let project = Self::new();
        project.write_file("app/assets/styles/global/a.css", "body { margin: 0 }");
        project.write_file("app/assets/styles/global/b.css", "h1 { color: red }");
        project.write_file("app/assets/styles/admin/x.css", ".admin { display: none }");
        project.write_file(
            "app/assets/scripts/app/main.js",
            "// entry point\nfunction main ( ) {\n  return 1 ;\n}\n",
        );
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Files directly inside a project directory, relative names, sorted
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(path))
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Get path to fragmenta binary
    pub fn fragmenta_bin() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_fragmenta"))
    }
}
