//! Resolved project configuration.

/// Version used when neither a flag nor configuration supplies one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// The binary/library target name, tagged by origin.
///
/// Either defaulted (equal to the project name, borrowed at resolution
/// time) or explicitly supplied via `-n/--name`. The tag makes ownership
/// structurally unambiguous instead of tracking it by string identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BinaryName {
    /// Equals the project name.
    #[default]
    Defaulted,
    /// User-supplied name.
    Explicit(String),
}

/// Fully resolved configuration for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// The positional argument: project directory name.
    pub project_name: String,
    /// Binary/library target name.
    pub name: BinaryName,
    /// Project version, defaults to [`DEFAULT_VERSION`].
    pub version: String,
    /// Optional project description; rendered as an empty string when absent.
    pub description: Option<String>,
    /// Build a shared library instead of an executable.
    pub shared: bool,
}

impl ProjectConfig {
    /// Configuration with all defaults for the given project name.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            name: BinaryName::Defaulted,
            version: DEFAULT_VERSION.to_string(),
            description: None,
            shared: false,
        }
    }

    /// Resolve the binary name: explicit value or the project name.
    pub fn binary_name(&self) -> &str {
        match &self.name {
            BinaryName::Defaulted => &self.project_name,
            BinaryName::Explicit(name) => name,
        }
    }
}
