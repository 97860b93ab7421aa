use crate::domain::model::{ImageReference, TagCommand};
use crate::utils::error::{PublishError, Result};
use std::path::{Path, PathBuf};

/// File name of the helper that re-tags and pushes the image.
pub const HELPER_SCRIPT: &str = "docker-tag.sh";

/// Directory holding the running executable, with symlinks resolved.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(PublishError::ProgramDir)?;
    let exe = exe.canonicalize().map_err(PublishError::ProgramDir)?;

    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        PublishError::ProgramDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

pub fn helper_path(dir: &Path) -> PathBuf {
    dir.join(HELPER_SCRIPT)
}

pub fn build_command(helper_dir: &Path, image: &ImageReference) -> TagCommand {
    TagCommand::new(helper_path(helper_dir), image)
}
