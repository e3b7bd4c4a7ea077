//! Project workspace operations.
//!
//! [`Project`] wraps the project root directory together with the `[project]`
//! configuration section and provides the filesystem chores the tasks share:
//! cleaning build products, stripping Python bytecode, listing distribution
//! artifacts, and reading or rewriting the generated version module.
use log::*;
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use walkdir::WalkDir;

use crate::{config::ProjectConfig, result::Result};

static BYTECODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.py[co]$").unwrap());

static VERSION_ASSIGNMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^VERSION\s*=\s*['"]([^'"]*)['"]"#).unwrap()
});

/// Project root plus layout configuration.
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
}

impl Project {
    pub fn new(root: &Path, config: &ProjectConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            config: config.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.config.source_dir)
    }

    pub fn test_dir(&self) -> PathBuf {
        self.root.join(&self.config.test_dir)
    }

    pub fn dist_dir(&self) -> PathBuf {
        self.root.join(&self.config.dist_dir)
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join(&self.config.build_dir)
    }

    pub fn version_file(&self) -> PathBuf {
        self.root.join(&self.config.version_file)
    }

    /// Remove build products: bytecode always, the build directory always,
    /// and the dist directory unless `keep_dist` is set.
    pub fn clean(&self, keep_dist: bool) -> Result<()> {
        self.remove_bytecode()?;

        let dist_dir = self.dist_dir();
        if !keep_dist && dist_dir.exists() {
            debug!("removing {}", dist_dir.display());
            fs::remove_dir_all(&dist_dir)?;
        }

        let build_dir = self.build_dir();
        if build_dir.exists() {
            debug!("removing {}", build_dir.display());
            fs::remove_dir_all(&build_dir)?;
        }

        Ok(())
    }

    /// Strip compiled Python files and `__pycache__` directories from the
    /// source and test trees.
    pub fn remove_bytecode(&self) -> Result<()> {
        for dir in [self.source_dir(), self.test_dir()] {
            if !dir.exists() {
                continue;
            }

            let mut cache_dirs: Vec<PathBuf> = vec![];

            for entry in WalkDir::new(&dir)
                .follow_links(false)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let name = entry.file_name().to_string_lossy();
                if entry.file_type().is_dir() && name == "__pycache__" {
                    cache_dirs.push(entry.path().to_path_buf());
                } else if entry.file_type().is_file()
                    && BYTECODE_REGEX.is_match(&name)
                {
                    fs::remove_file(entry.path())?;
                }
            }

            for cache_dir in cache_dirs {
                if cache_dir.exists() {
                    fs::remove_dir_all(&cache_dir)?;
                }
            }
        }

        Ok(())
    }

    /// Distribution archives currently present, sorted by name.
    pub fn dist_artifacts(&self) -> Result<Vec<PathBuf>> {
        let dist_dir = self.dist_dir();
        if !dist_dir.exists() {
            return Ok(vec![]);
        }

        let mut artifacts: Vec<PathBuf> = fs::read_dir(&dist_dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect();

        artifacts.sort();

        Ok(artifacts)
    }

    /// Read the current version out of the generated version module.
    pub fn read_version(&self) -> Result<String> {
        let path = self.version_file();
        let content = fs::read_to_string(&path)?;

        let captures =
            VERSION_ASSIGNMENT_REGEX.captures(&content).ok_or_else(|| {
                color_eyre::eyre::eyre!(
                    "no VERSION assignment found in {}",
                    path.display()
                )
            })?;

        Ok(captures[1].to_string())
    }

    /// Overwrite the generated version module with the given version.
    pub fn write_version(&self, version: &str) -> Result<()> {
        let path = self.version_file();

        let content = format!(
            "# Automatically generated by relkit.\nVERSION = '{version}'\n"
        );
        fs::write(&path, content)?;

        info!("version set to {} in {}", version, path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_project(root: &Path) -> Project {
        let config = ProjectConfig {
            name: "myapp".into(),
            source_dir: "src".into(),
            test_dir: "utest".into(),
            dist_dir: "dist".into(),
            build_dir: "build".into(),
            version_file: "src/myapp/version.py".into(),
        };
        Project::new(root, &config)
    }

    #[test]
    fn writes_and_reads_version_module() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/myapp")).unwrap();
        let project = test_project(dir.path());

        project.write_version("2.1b3").unwrap();

        let written =
            fs::read_to_string(dir.path().join("src/myapp/version.py"))
                .unwrap();
        assert_eq!(
            written,
            "# Automatically generated by relkit.\nVERSION = '2.1b3'\n"
        );
        assert_eq!(project.read_version().unwrap(), "2.1b3");
    }

    #[test]
    fn read_version_fails_without_assignment() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/myapp")).unwrap();
        fs::write(
            dir.path().join("src/myapp/version.py"),
            "# nothing here\n",
        )
        .unwrap();
        let project = test_project(dir.path());

        assert!(project.read_version().is_err());
    }

    #[test]
    fn removes_bytecode_and_pycache() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/myapp/__pycache__")).unwrap();
        fs::create_dir_all(dir.path().join("utest")).unwrap();
        fs::write(dir.path().join("src/myapp/app.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("src/myapp/app.pyc"), "junk").unwrap();
        fs::write(
            dir.path().join("src/myapp/__pycache__/app.cpython-312.pyc"),
            "junk",
        )
        .unwrap();
        fs::write(dir.path().join("utest/test_app.pyo"), "junk").unwrap();
        let project = test_project(dir.path());

        project.remove_bytecode().unwrap();

        assert!(dir.path().join("src/myapp/app.py").exists());
        assert!(!dir.path().join("src/myapp/app.pyc").exists());
        assert!(!dir.path().join("src/myapp/__pycache__").exists());
        assert!(!dir.path().join("utest/test_app.pyo").exists());
    }

    #[test]
    fn clean_removes_build_and_dist() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("dist")).unwrap();
        fs::create_dir_all(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("dist/myapp-2.1.tar.gz"), "archive")
            .unwrap();
        let project = test_project(dir.path());

        project.clean(false).unwrap();

        assert!(!dir.path().join("dist").exists());
        assert!(!dir.path().join("build").exists());
    }

    #[test]
    fn clean_can_keep_dist() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("dist")).unwrap();
        fs::create_dir_all(dir.path().join("build")).unwrap();
        fs::write(dir.path().join("dist/myapp-2.1.tar.gz"), "archive")
            .unwrap();
        let project = test_project(dir.path());

        project.clean(true).unwrap();

        assert!(dir.path().join("dist/myapp-2.1.tar.gz").exists());
        assert!(!dir.path().join("build").exists());
    }

    #[test]
    fn lists_dist_artifacts_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("dist")).unwrap();
        fs::write(dir.path().join("dist/b.tar.gz"), "b").unwrap();
        fs::write(dir.path().join("dist/a.tar.gz"), "a").unwrap();
        let project = test_project(dir.path());

        let artifacts = project.dist_artifacts().unwrap();
        let names: Vec<_> = artifacts
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.tar.gz", "b.tar.gz"]);
    }

    #[test]
    fn dist_artifacts_empty_without_dist_dir() {
        let dir = tempfile::tempdir().unwrap();
        let project = test_project(dir.path());
        assert!(project.dist_artifacts().unwrap().is_empty());
    }
}
