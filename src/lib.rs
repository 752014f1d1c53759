//! gencpp - scaffold a CMake + Conan C++ project.
//!
//! A [`Scaffolder`] claims `<base>/<name>`, writes a fixed set of boilerplate
//! files into it and hands the directory to a [`VersionControl`] backend.
//! It never touches a path that already exists.

pub mod error;
pub mod git;
pub mod scaffold;
pub mod templates;

pub use error::ScaffoldError;
pub use git::{Git, VersionControl};
pub use scaffold::{Scaffold, Scaffolder};
pub use templates::Variant;
