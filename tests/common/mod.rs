#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the java-guard binary.
#[macro_export]
macro_rules! java_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("java-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the temp directory as a `&str` argument.
    pub fn arg(&self) -> &str {
        self.dir.path().to_str().expect("temp path is UTF-8")
    }

    /// Creates a `.java-guard.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".java-guard.toml", content);
    }

    /// Creates a well-formed class with `methods` trivial methods.
    pub fn create_clean_class(&self, relative_path: &str, name: &str, methods: usize) {
        let mut content = format!("public class {name} {{\n");
        for i in 0..methods {
            let _ = writeln!(content, "    private int value{i}() {{");
            let _ = writeln!(content, "        return {i};");
            let _ = writeln!(content, "    }}");
        }
        content.push_str("}\n");
        self.create_file(relative_path, &content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A class with one blocker (hardcoded password) and one minor finding
/// (a 130 character line).
pub fn login_class() -> String {
    format!(
        "public class Login {{\n    String password = \"hunter2\";\n    // {}\n}}\n",
        "a".repeat(123)
    )
}

/// Config that switches off the security category.
pub const NO_SECURITY_CONFIG: &str = r"
[rules.security]
enabled = false
";

/// Config selecting the legacy approximation.
pub const LEGACY_CONFIG: &str = r#"
[analysis]
mode = "legacy"
"#;
