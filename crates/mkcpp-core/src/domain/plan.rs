//! Scaffold plan: the filesystem shape of a new project.

use std::path::{Path, PathBuf};

use crate::domain::{ProjectConfig, templates};

/// One entry to materialize, path relative to the plan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsEntry {
    Directory(PathBuf),
    File { path: PathBuf, content: String },
}

/// Ordered list of directories and files for one project.
///
/// Write order matters: parents come before children, and the application
/// layer writes entries sequentially without reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    root: PathBuf,
    entries: Vec<FsEntry>,
}

impl ScaffoldPlan {
    /// Build the plan for a project: root, `include/`, `src/`,
    /// `CMakeLists.txt`, `src/main.cpp`.
    pub fn for_project(config: &ProjectConfig, parent_dir: &Path) -> Self {
        let root = parent_dir.join(&config.project_name);
        let entries = vec![
            FsEntry::Directory("include".into()),
            FsEntry::Directory("src".into()),
            FsEntry::File {
                path: "CMakeLists.txt".into(),
                content: templates::cmakelists(config),
            },
            FsEntry::File {
                path: PathBuf::from("src").join("main.cpp"),
                content: templates::main_cpp().to_string(),
            },
        ];
        Self { root, entries }
    }

    /// The project root directory (parent joined with the project name).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Entries in write order, paths relative to [`root`](Self::root).
    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    /// Files only.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File { path, content } => Some((path.as_path(), content.as_str())),
            _ => None,
        })
    }
}
