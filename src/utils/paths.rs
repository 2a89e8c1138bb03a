use crate::error::{PacwiseError, Result};
use crate::project_identity;
use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("org", project_identity::CONFIG_DIR_NAME, project_identity::CONFIG_DIR_NAME)
        .ok_or_else(|| PacwiseError::Other("Could not determine home directory".to_string()))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(project_identity::CONFIG_FILE_BASENAME))
}

pub fn cache_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.cache_dir().to_path_buf())
}

pub fn log_file() -> Result<PathBuf> {
    Ok(cache_dir()?.join(project_identity::LOG_FILE_BASENAME))
}

pub fn backups_dir() -> Result<PathBuf> {
    Ok(cache_dir()?.join("backups"))
}
