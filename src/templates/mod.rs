use clap::ValueEnum;

/// Which package-manager integration the generated project uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Root CMakeLists.txt downloads and drives `conan.cmake` itself
    #[default]
    CmakeConan,
    /// A `conanfile.txt` manifest, consumed via `conan install`
    Conanfile,
}

const NAME_MARKER: &str = "{name}";

pub fn root_cmake_lists(name: &str, variant: Variant) -> String {
    let template = match variant {
        Variant::CmakeConan => ROOT_CMAKE_LISTS_CONAN_CMAKE,
        Variant::Conanfile => ROOT_CMAKE_LISTS_CONANFILE,
    };
    template.replacen(NAME_MARKER, name, 1)
}

pub const CLANG_FORMAT: &str = r#"---
BasedOnStyle: LLVM
IndentWidth: 4
---
Language: Cpp
AccessModifierOffset: -4
ColumnLimit: 0
PointerAlignment: Left
"#;

pub const GITIGNORE: &str = r#"# VS Code
/.vscode
/build

# MSVC
/.vs
/out
/CMakeSettings.json

# CLion
/.idea
/cmake-build-debug
/cmake-build-debug-coverage
/cmake-build-release

# Mac OS
.DS_Store
"#;

const ROOT_CMAKE_LISTS_CONAN_CMAKE: &str = r#"cmake_minimum_required(VERSION 3.5)

project({name})

set(CMAKE_CXX_STANDARD 20)
set(CMAKE_CXX_STANDARD_REQUIRED ON)

########### Conan Package Manager ###########################################################
#############################################################################################

list(APPEND CMAKE_MODULE_PATH ${CMAKE_BINARY_DIR})
list(APPEND CMAKE_PREFIX_PATH ${CMAKE_BINARY_DIR})

if(NOT EXISTS "${CMAKE_BINARY_DIR}/conan.cmake")
    message(STATUS "Downloading conan.cmake from https://github.com/conan-io/cmake-conan")
    file(DOWNLOAD "https://raw.githubusercontent.com/conan-io/cmake-conan/release/0.17/conan.cmake"
         "${CMAKE_BINARY_DIR}/conan.cmake"
         EXPECTED_HASH SHA256=3bef79da16c2e031dc429e1dac87a08b9226418b300ce004cc125a82687baeef
         TLS_VERIFY ON)
endif()

include(${CMAKE_BINARY_DIR}/conan.cmake)

# Add requires here
conan_cmake_configure(
    REQUIRES

    GENERATORS
        cmake_find_package
    IMPORTS
        "bin, *.dll -> ./src"
        "lib, *.dylib* -> ./src")

conan_cmake_autodetect(settings)
conan_cmake_install(
    PATH_OR_REFERENCE .
    BUILD missing
    REMOTE conancenter
    SETTINGS ${settings})

# Add `find_package` here

#############################################################################################
########### Conan Package Manager End #######################################################

add_subdirectory(src)
"#;

const ROOT_CMAKE_LISTS_CONANFILE: &str = r#"cmake_minimum_required(VERSION 3.5)

project({name})

set(CMAKE_CXX_STANDARD 20)
set(CMAKE_CXX_STANDARD_REQUIRED ON)

# Populated by `conan install .. --build missing` from the build directory
if(EXISTS "${CMAKE_BINARY_DIR}/conanbuildinfo.cmake")
    include(${CMAKE_BINARY_DIR}/conanbuildinfo.cmake)
    conan_basic_setup(TARGETS)
endif()

add_subdirectory(src)
"#;

pub const CONANFILE_TXT: &str = r#"[requires]

[generators]
"#;

pub const MAIN_CPP: &str = r#"#include <iostream>

int main() {
    std::cout << "Hello World!\n";
}
"#;

pub const SRC_CMAKE_LISTS: &str = r#"add_executable(${CMAKE_PROJECT_NAME} main.cpp)
"#;
