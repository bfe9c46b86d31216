//! Shared scaffolding for harness integration tests.
//!
//! Builds a throwaway project with a fixtures directory and a stub compiler
//! script, so tests can drive real subprocess invocations without a Haxe
//! toolchain on the machine.

use crucible::config::HarnessConfig;
use std::fs;
use std::path::PathBuf;

/// A scratch project rooted in the system temp directory, removed on drop.
pub struct ScratchProject {
    pub root: PathBuf,
}

impl ScratchProject {
    pub fn new(tag: &str) -> Self {
        let root = std::env::temp_dir().join(format!("crucible-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("tests/compile-errors")).expect("create fixtures dir");
        Self { root }
    }

    pub fn fixtures_dir(&self) -> PathBuf {
        self.root.join("tests/compile-errors")
    }

    pub fn write_fixture(&self, file_name: &str, contents: &str) {
        fs::write(self.fixtures_dir().join(file_name), contents).expect("write fixture");
    }

    /// Harness config pointed at this project, with colors off so captured
    /// report text is stable.
    pub fn config(&self, compiler: &str) -> HarnessConfig {
        HarnessConfig {
            project_root: self.root.clone(),
            compiler: compiler.to_string(),
            use_colors: false,
            ..HarnessConfig::default()
        }
    }

    /// Installs an executable stub compiler from a raw shell script and
    /// returns its path.
    #[cfg(unix)]
    pub fn install_stub_compiler(&self, script: &str) -> String {
        use std::os::unix::fs::PermissionsExt;
        let path = self.root.join("stub-compiler");
        fs::write(&path, script).expect("write stub compiler");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("chmod stub compiler");
        path.to_string_lossy().into_owned()
    }

    /// Stub compiler that prints fixed text on both streams and exits with
    /// `code`, ignoring its arguments.
    #[cfg(unix)]
    pub fn stub_compiler(&self, stdout_text: &str, stderr_text: &str, code: i32) -> String {
        let script = format!(
            "#!/bin/sh\n\
             cat <<'CRUCIBLE_OUT'\n{stdout_text}\nCRUCIBLE_OUT\n\
             cat <<'CRUCIBLE_ERR' >&2\n{stderr_text}\nCRUCIBLE_ERR\n\
             exit {code}\n"
        );
        self.install_stub_compiler(&script)
    }
}

impl Drop for ScratchProject {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
