use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, ScaffoldError};
use crate::git::VersionControl;
use crate::templates::{self, Variant};

/// What a successful [`Scaffolder::generate`] left behind.
#[derive(Debug, Default)]
pub struct Scaffold {
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
    /// Captured stdout of the repository initialization.
    pub vcs_output: String,
}

/// Creates a C++ project named `name` under a base directory.
///
/// Construction fails if anything already exists at the target path, so a
/// scaffolder always starts from an empty slot. Generation is not atomic: an
/// error midway leaves the partially written tree in place.
#[derive(Debug)]
pub struct Scaffolder {
    name: String,
    path: PathBuf,
    variant: Variant,
}

impl Scaffolder {
    pub fn new(base: &Path, name: &str, variant: Variant) -> Result<Self> {
        let path = base.join(name);

        // symlink_metadata so a dangling link still counts as taken
        if fs::symlink_metadata(&path).is_ok() {
            return Err(ScaffoldError::TargetExists(path));
        }

        Ok(Self { name: name.to_string(), path, variant })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    pub fn generate(&self, vcs: &impl VersionControl) -> Result<Scaffold> {
        let mut scaffold = Scaffold::default();

        info!(project = %self.name, path = %self.path.display(), "writing root files");
        self.gen_root_files(&mut scaffold.files)?;

        info!("writing source files");
        self.gen_src_files(&mut scaffold.files)?;

        info!("initializing repository");
        scaffold.vcs_output = vcs.init(&self.path)?;

        Ok(scaffold)
    }

    fn gen_root_files(&self, files: &mut Vec<PathBuf>) -> Result<()> {
        files.push(self.write_file("", ".clang-format", templates::CLANG_FORMAT)?);
        files.push(self.write_file("", ".gitignore", templates::GITIGNORE)?);

        let cmake_lists = templates::root_cmake_lists(&self.name, self.variant);
        files.push(self.write_file("", "CMakeLists.txt", &cmake_lists)?);

        if self.variant == Variant::Conanfile {
            files.push(self.write_file("", "conanfile.txt", templates::CONANFILE_TXT)?);
        }

        Ok(())
    }

    fn gen_src_files(&self, files: &mut Vec<PathBuf>) -> Result<()> {
        files.push(self.write_file("src", "main.cpp", templates::MAIN_CPP)?);
        files.push(self.write_file("src", "CMakeLists.txt", templates::SRC_CMAKE_LISTS)?);
        Ok(())
    }

    /// Creates `relative` (and the project root) if missing. Existing directories are left alone.
    fn ensure_dir(&self, relative: &str) -> Result<PathBuf> {
        let dir = self.path.join(relative);
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "creating directory");
            fs::create_dir_all(&dir)
                .map_err(|e| ScaffoldError::io("create directory", &dir, e))?;
        }
        Ok(dir)
    }

    /// Overwrites any file already at the destination.
    fn write_file(&self, relative: &str, file_name: &str, content: &str) -> Result<PathBuf> {
        let file = self.ensure_dir(relative)?.join(file_name);
        debug!(file = %file.display(), bytes = content.len(), "writing file");
        fs::write(&file, content).map_err(|e| ScaffoldError::io("write", &file, e))?;
        Ok(file)
    }
}
