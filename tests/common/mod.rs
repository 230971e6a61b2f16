//! Common test utilities for Meanie integration tests
//!
//! Tests run the real binary against a throwaway project directory and a
//! fake `npm` executable serving packages from an on-disk registry, wired
//! up through the `MEANIE_NPM` / `MEANIE_CACHE_DIR` seams.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Shell stand-in for npm, backed by `MEANIE_FAKE_REGISTRY`
const FAKE_NPM: &str = r#"#!/bin/sh
set -e
registry="${MEANIE_FAKE_REGISTRY:?}"
cmd="$1"; shift
case "$cmd" in
  view)
    pkg="$1"
    if [ ! -f "$registry/$pkg/version" ]; then
      echo "npm error 404 Not Found - GET https://registry.npmjs.org/$pkg" >&2
      exit 1
    fi
    printf '"%s"\n' "$(cat "$registry/$pkg/version")"
    ;;
  install)
    pkg="$1"; shift
    prefix=""
    while [ "$#" -gt 0 ]; do
      if [ "$1" = "--prefix" ]; then prefix="$2"; shift; fi
      shift
    done
    if [ ! -d "$registry/$pkg/package" ]; then
      echo "npm error 404 Not Found - GET https://registry.npmjs.org/$pkg" >&2
      exit 1
    fi
    mkdir -p "$prefix/node_modules/$pkg"
    cp -R "$registry/$pkg/package/." "$prefix/node_modules/$pkg/"
    ;;
  *)
    echo "npm error unknown command: $cmd" >&2
    exit 1
    ;;
esac
"#;

/// A test project with its own fake registry and cache
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory holding everything
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
    /// Path to the fake registry
    pub registry: PathBuf,
    npm_bin: PathBuf,
    cache: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project environment
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let registry = temp.path().join("registry");
        let cache = temp.path().join("cache");
        let npm_bin = temp.path().join("bin").join("npm");

        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&registry).expect("Failed to create registry directory");
        std::fs::create_dir_all(npm_bin.parent().unwrap()).expect("Failed to create bin dir");
        std::fs::write(&npm_bin, FAKE_NPM).expect("Failed to write fake npm");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&npm_bin, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to mark fake npm executable");
        }

        Self {
            temp,
            path,
            registry,
            npm_bin,
            cache,
        }
    }

    /// Write an initialized meaniefile into the project
    pub fn init_project(&self) {
        let config = serde_json::json!({
            "name": "test-project",
            "cliVersion": env!("CARGO_PKG_VERSION"),
            "modules": {}
        });
        self.write_file(
            "meaniefile.json",
            &format!("{}\n", serde_json::to_string_pretty(&config).unwrap()),
        );
    }

    /// Command for the meanie binary wired to this environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("meanie").expect("Failed to find meanie binary");
        cmd.current_dir(&self.path)
            .env("MEANIE_NPM", &self.npm_bin)
            .env("MEANIE_FAKE_REGISTRY", &self.registry)
            .env("MEANIE_CACHE_DIR", &self.cache);
        cmd
    }

    /// Publish a module package into the fake registry
    ///
    /// `files` are relative paths written under the package root.
    pub fn publish_module(
        &self,
        short_name: &str,
        version: &str,
        manifest: &str,
        files: &[(&str, &str)],
    ) {
        let package_name = format!("meanie-{}", short_name);
        let root = self.registry.join(&package_name);
        let package = root.join("package");

        std::fs::create_dir_all(&package).expect("Failed to create package directory");
        std::fs::write(root.join("version"), version).expect("Failed to write version");
        std::fs::write(
            package.join("package.json"),
            format!(
                "{{ \"name\": \"{}\", \"version\": \"{}\" }}\n",
                package_name, version
            ),
        )
        .expect("Failed to write package.json");
        std::fs::write(package.join("meanie.json"), manifest)
            .expect("Failed to write meanie.json");

        for (rel, content) in files {
            let file_path = package.join(rel);
            std::fs::create_dir_all(file_path.parent().unwrap())
                .expect("Failed to create package subdirectory");
            std::fs::write(&file_path, content).expect("Failed to write package file");
        }
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
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Parse the project's meaniefile
    pub fn config(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_file("meaniefile.json"))
            .expect("Failed to parse meaniefile")
    }

    /// Installed version recorded for a module, if any
    pub fn installed_version(&self, short_name: &str) -> Option<String> {
        self.config()["modules"]
            .get(short_name)
            .and_then(|v| v.as_str())
            .map(String::from)
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
