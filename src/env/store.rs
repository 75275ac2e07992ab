use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::validate::{validate_auth, validate_host, validate_name};
use super::{CredentialRecord, EnvError, EnvResult};
use crate::config::Paths;

/// Registry of named environments, one directory per name.
#[derive(Debug, Clone)]
pub struct EnvironmentStore {
    root: PathBuf,
}

impl EnvironmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn env_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Path of the stored `.wskprops` for `name`.
    pub fn props_path(&self, name: &str) -> PathBuf {
        self.env_dir(name).join(Paths::wskprops_file_name())
    }

    /// Fails unless `name` is valid and not taken yet.
    pub fn ensure_absent(&self, name: &str) -> EnvResult<()> {
        validate_name(name)?;

        if self.env_dir(name).exists() {
            return Err(EnvError::AlreadyExists(name.to_string()));
        }

        Ok(())
    }

    pub fn create(&self, name: &str, host: &str, auth: &str) -> EnvResult<()> {
        self.ensure_absent(name)?;

        if !validate_host(host) {
            return Err(EnvError::InvalidHost(host.to_string()));
        }

        if !validate_auth(auth) {
            return Err(EnvError::InvalidAuth);
        }

        let dir = self.env_dir(name);
        fs::create_dir_all(&dir)?;

        let record = CredentialRecord::new(host, auth);
        fs::write(self.props_path(name), record.render())?;

        log::info!("created environment '{name}' at {}", dir.display());
        Ok(())
    }

    /// Leaves the active properties and the selection marker alone.
    pub fn remove(&self, name: &str) -> EnvResult<()> {
        validate_name(name)?;

        let dir = self.env_dir(name);
        if !dir.exists() {
            return Err(EnvError::NotFound(name.to_string()));
        }

        fs::remove_dir_all(&dir)?;

        log::info!("removed environment '{name}'");
        Ok(())
    }

    /// Raw contents of the stored properties file.
    pub fn read_raw(&self, name: &str) -> EnvResult<String> {
        validate_name(name)?;

        let path = self.props_path(name);
        log::debug!("reading {}", path.display());

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(EnvError::NotFound(name.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn get(&self, name: &str) -> EnvResult<CredentialRecord> {
        let contents = self.read_raw(name)?;

        CredentialRecord::parse(&contents)
            .ok_or_else(|| EnvError::CorruptRecord(self.props_path(name)))
    }

    /// Sorted environment names. Bookkeeping entries (dot files such as the
    /// selection marker) and plain files are skipped.
    pub fn list(&self) -> EnvResult<Vec<String>> {
        if !self.root.is_dir() {
            return Err(EnvError::RegistryUnavailable(self.root.clone()));
        }

        let mut names = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                log::warn!("skipping non UTF-8 entry {:?}", entry.file_name());
                continue;
            };

            if name.starts_with('.') {
                continue;
            }

            if entry.file_type()?.is_dir() {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }
}
