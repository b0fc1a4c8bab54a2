//! Generated file contents.
//!
//! The rendered bytes are part of the tool's contract: existing projects
//! were generated with exactly these strings, so formatting (tabs, missing
//! trailing newline) is preserved verbatim.

use crate::domain::ProjectConfig;

/// Render `CMakeLists.txt` for the given configuration.
///
/// Chooses between an `add_executable` and an `add_library(... SHARED ...)`
/// target based on `config.shared`. An absent description renders as `""`.
pub fn cmakelists(config: &ProjectConfig) -> String {
    let target = if config.shared {
        format!(
            "add_library({} SHARED ${{SOURCE_FILES}})",
            config.binary_name()
        )
    } else {
        format!("add_executable({} ${{SOURCE_FILES}})", config.binary_name())
    };

    format!(
        "cmake_minimum_required(VERSION 3.10)\n\
         \n\
         project({project}\n\
         \t\tVERSION {version}\n\
         \t\tDESCRIPTION \"{description}\"\n\
         \t\tLANGUAGES CXX)\n\
         \n\
         set(CMAKE_CXX_STANDARD 17)\n\
         set(CMAKE_CXX_STANDARD_REQUIRED ON)\n\
         \n\
         include_directories(include)\n\
         \n\
         file(GLOB_RECURSE SOURCE_FILES \"src/*.cpp\" \"src/*.c\")\n\
         {target}",
        project = config.project_name,
        version = config.version,
        description = config.description.as_deref().unwrap_or(""),
        target = target,
    )
}

/// The fixed hello-world stub written to `src/main.cpp`.
pub fn main_cpp() -> &'static str {
    "#include <cstdio>\n\nint main(int argc, char* argv[]) {\n\tprintf(\"Hello, world!\\n\");\n}"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BinaryName;

    #[test]
    fn executable_descriptor() {
        let config = ProjectConfig::new("myapp");
        let rendered = cmakelists(&config);
        assert!(rendered.starts_with("cmake_minimum_required(VERSION 3.10)\n"));
        assert!(rendered.contains("project(myapp\n\t\tVERSION 1.0.0\n\t\tDESCRIPTION \"\"\n\t\tLANGUAGES CXX)"));
        assert!(rendered.ends_with("add_executable(myapp ${SOURCE_FILES})"));
        assert!(!rendered.contains("add_library"));
    }

    #[test]
    fn shared_descriptor_uses_binary_name() {
        let mut config = ProjectConfig::new("myapp");
        config.name = BinaryName::Explicit("custom".into());
        config.shared = true;
        let rendered = cmakelists(&config);
        assert!(rendered.contains("add_library(custom SHARED ${SOURCE_FILES})"));
        assert!(!rendered.contains("add_executable"));
    }

    #[test]
    fn description_is_quoted_verbatim() {
        let mut config = ProjectConfig::new("myapp");
        config.description = Some("A demo".into());
        assert!(cmakelists(&config).contains("DESCRIPTION \"A demo\""));
    }

    #[test]
    fn main_stub_is_stable() {
        let stub = main_cpp();
        assert!(stub.starts_with("#include <cstdio>"));
        assert!(stub.contains("Hello, world!"));
        // No trailing newline, matching the historical output.
        assert!(stub.ends_with('}'));
    }
}
