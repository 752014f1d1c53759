use gencpp::templates::*;

#[test]
fn test_root_cmake_lists_declares_project() {
    let cmake = root_cmake_lists("myapp", Variant::CmakeConan);
    assert!(cmake.lines().any(|l| l == "project(myapp)"));
    assert!(cmake.trim_end().ends_with("add_subdirectory(src)"));
}

#[test]
fn test_root_cmake_lists_keeps_cmake_variables() {
    let cmake = root_cmake_lists("myapp", Variant::CmakeConan);
    assert!(cmake.contains("${CMAKE_BINARY_DIR}/conan.cmake"));
    assert!(cmake.contains("SETTINGS ${settings})"));
    assert!(!cmake.contains("{name}"));
}

#[test]
fn test_root_cmake_lists_conan_cmake_bootstraps_download() {
    let cmake = root_cmake_lists("myapp", Variant::CmakeConan);
    assert!(cmake.contains("file(DOWNLOAD"));
    assert!(cmake.contains(
        "EXPECTED_HASH SHA256=3bef79da16c2e031dc429e1dac87a08b9226418b300ce004cc125a82687baeef"
    ));
    assert!(cmake.contains("conan_cmake_install("));
}

#[test]
fn test_root_cmake_lists_conanfile_uses_generated_buildinfo() {
    let cmake = root_cmake_lists("myapp", Variant::Conanfile);
    assert!(cmake.contains("project(myapp)"));
    assert!(cmake.contains("conanbuildinfo.cmake"));
    assert!(!cmake.contains("file(DOWNLOAD"));
}

#[test]
fn test_root_cmake_lists_name_is_verbatim() {
    let cmake = root_cmake_lists("my-app.v2", Variant::Conanfile);
    assert!(cmake.contains("project(my-app.v2)"));
}

#[test]
fn test_root_cmake_lists_substitutes_only_once() {
    let cmake = root_cmake_lists("{name}", Variant::CmakeConan);
    assert_eq!(cmake.matches("{name}").count(), 1);
}

#[test]
fn test_conanfile_sections_are_empty() {
    let sections: Vec<&str> = CONANFILE_TXT.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(sections, ["[requires]", "[generators]"]);
}

#[test]
fn test_clang_format_style() {
    assert!(CLANG_FORMAT.contains("BasedOnStyle: LLVM"));
    assert!(CLANG_FORMAT.contains("IndentWidth: 4"));
}

#[test]
fn test_gitignore_covers_build_dirs() {
    for pattern in ["/build", "/.vscode", "/.idea", "/cmake-build-debug", ".DS_Store"] {
        assert!(GITIGNORE.lines().any(|l| l == pattern), "missing {pattern}");
    }
}

#[test]
fn test_default_variant() {
    assert_eq!(Variant::default(), Variant::CmakeConan);
}
