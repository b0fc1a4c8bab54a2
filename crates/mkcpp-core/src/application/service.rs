//! Scaffold service - writes a scaffold plan to the filesystem.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{FsEntry, ProjectConfig, ScaffoldPlan},
    error::{ScaffoldError, ScaffoldResult},
};

/// Materializes [`ScaffoldPlan`]s through a [`Filesystem`] port.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a service over the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold a new project under `parent_dir`.
    ///
    /// Fails with [`ScaffoldError::ProjectExists`] when the project root is
    /// already present. Entries are written sequentially and deliberately
    /// non-transactionally: a mid-sequence failure leaves the partially
    /// created tree on disk.
    #[instrument(
        skip_all,
        fields(project = %config.project_name, parent = %parent_dir.display())
    )]
    pub fn scaffold(&self, config: &ProjectConfig, parent_dir: &Path) -> ScaffoldResult<ScaffoldPlan> {
        let plan = ScaffoldPlan::for_project(config, parent_dir);

        if self.filesystem.exists(plan.root()) {
            return Err(ScaffoldError::ProjectExists {
                path: plan.root().to_path_buf(),
            });
        }

        info!(root = %plan.root().display(), "creating project skeleton");
        self.filesystem.create_dir_all(plan.root())?;

        for entry in plan.entries() {
            match entry {
                FsEntry::Directory(path) => {
                    let path = plan.root().join(path);
                    debug!(path = %path.display(), "creating directory");
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File { path, content } => {
                    let path = plan.root().join(path);
                    debug!(path = %path.display(), bytes = content.len(), "writing file");
                    self.filesystem.write_file(&path, content)?;
                }
            }
        }

        info!("scaffold completed");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    mockall::mock! {
        Fs {}

        impl Filesystem for Fs {
            fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;
            fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;
            fn exists(&self, path: &Path) -> bool;
        }
    }

    #[test]
    fn existing_root_fails_without_touching_disk() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs));
        let err = service
            .scaffold(&ProjectConfig::new("myapp"), Path::new("/work"))
            .unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::ProjectExists {
                path: PathBuf::from("/work/myapp")
            }
        );
    }

    #[test]
    fn happy_path_writes_dirs_then_files() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .times(3) // root, include, src
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .times(2) // CMakeLists.txt, src/main.cpp
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs));
        let plan = service
            .scaffold(&ProjectConfig::new("myapp"), Path::new("/work"))
            .unwrap();
        assert_eq!(plan.root(), Path::new("/work/myapp"));
    }

    #[test]
    fn write_failure_stops_the_sequence_without_rollback() {
        let mut fs = MockFs::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        // First file write fails; the second is never attempted.
        fs.expect_write_file().times(1).returning(|path, _| {
            Err(ScaffoldError::Filesystem {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            })
        });

        let service = ScaffoldService::new(Box::new(fs));
        let err = service
            .scaffold(&ProjectConfig::new("myapp"), Path::new("/work"))
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
    }
}
