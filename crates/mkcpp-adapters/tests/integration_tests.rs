//! Full scaffold workflow over the in-memory filesystem.

use std::path::Path;

use mkcpp_adapters::MemoryFilesystem;
use mkcpp_core::{
    application::{Filesystem, ScaffoldService},
    domain::{BinaryName, ProjectConfig},
    error::ScaffoldError,
};

fn service_over(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(Box::new(fs.clone()))
}

#[test]
fn scaffold_creates_expected_tree() {
    let fs = MemoryFilesystem::new();
    let service = service_over(&fs);

    service
        .scaffold(&ProjectConfig::new("myapp"), Path::new("/work"))
        .unwrap();

    assert!(fs.exists(Path::new("/work/myapp")));
    assert!(fs.exists(Path::new("/work/myapp/include")));
    assert!(fs.exists(Path::new("/work/myapp/src")));
    assert!(fs.exists(Path::new("/work/myapp/CMakeLists.txt")));
    assert!(fs.exists(Path::new("/work/myapp/src/main.cpp")));
    assert_eq!(fs.list_files().len(), 2);
}

#[test]
fn default_descriptor_targets_an_executable() {
    let fs = MemoryFilesystem::new();
    let service = service_over(&fs);

    service
        .scaffold(&ProjectConfig::new("myapp"), Path::new("/work"))
        .unwrap();

    let cmake = fs.read_file(Path::new("/work/myapp/CMakeLists.txt")).unwrap();
    assert!(cmake.contains("project(myapp\n\t\tVERSION 1.0.0"));
    assert!(cmake.contains("add_executable(myapp ${SOURCE_FILES})"));
}

#[test]
fn shared_flag_with_custom_name_targets_a_library() {
    let fs = MemoryFilesystem::new();
    let service = service_over(&fs);

    let mut config = ProjectConfig::new("myapp");
    config.name = BinaryName::Explicit("custom".into());
    config.shared = true;
    service.scaffold(&config, Path::new("/work")).unwrap();

    let cmake = fs.read_file(Path::new("/work/myapp/CMakeLists.txt")).unwrap();
    assert!(cmake.contains("add_library(custom SHARED ${SOURCE_FILES})"));
    assert!(cmake.contains("project(myapp\n")); // project keeps the directory name
}

#[test]
fn main_cpp_is_the_hello_world_stub() {
    let fs = MemoryFilesystem::new();
    let service = service_over(&fs);

    service
        .scaffold(&ProjectConfig::new("myapp"), Path::new("/work"))
        .unwrap();

    let main_cpp = fs.read_file(Path::new("/work/myapp/src/main.cpp")).unwrap();
    assert_eq!(
        main_cpp,
        "#include <cstdio>\n\nint main(int argc, char* argv[]) {\n\tprintf(\"Hello, world!\\n\");\n}"
    );
}

#[test]
fn second_run_fails_without_mutating_the_first() {
    let fs = MemoryFilesystem::new();
    let service = service_over(&fs);

    let mut config = ProjectConfig::new("myapp");
    config.description = Some("original".into());
    service.scaffold(&config, Path::new("/work")).unwrap();
    let before = fs.read_file(Path::new("/work/myapp/CMakeLists.txt")).unwrap();

    let mut second = ProjectConfig::new("myapp");
    second.description = Some("changed".into());
    let err = service.scaffold(&second, Path::new("/work")).unwrap_err();
    assert!(matches!(err, ScaffoldError::ProjectExists { .. }));

    let after = fs.read_file(Path::new("/work/myapp/CMakeLists.txt")).unwrap();
    assert_eq!(before, after);
}
