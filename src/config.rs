use directories::BaseDirs;
use std::path::{Path, PathBuf};

use crate::env::{EnvError, EnvResult};

const WSKPROPS_FILE: &str = ".wskprops";
const REGISTRY_DIR: &str = ".wskenvs";
const MARKER_FILE: &str = ".selected";

/// Locations of the persisted state, resolved once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// The file the `wsk` client reads.
    pub wskprops: PathBuf,
    pub registry_root: PathBuf,
    pub marker: PathBuf,
}

impl Paths {
    pub fn under(home: &Path) -> Self {
        let registry_root = home.join(REGISTRY_DIR);

        Self {
            wskprops: home.join(WSKPROPS_FILE),
            marker: registry_root.join(MARKER_FILE),
            registry_root,
        }
    }

    /// `home` and `props` come from `--home`/`WSKENV_HOME` and
    /// `--props`/`WSK_CONFIG_FILE`.
    pub fn resolve(home: Option<PathBuf>, props: Option<PathBuf>) -> EnvResult<Self> {
        let home = match home {
            Some(home) => home,
            None => BaseDirs::new()
                .map(|dirs| dirs.home_dir().to_path_buf())
                .ok_or(EnvError::MissingHomeDir)?,
        };

        let mut paths = Self::under(&home);
        if let Some(props) = props {
            paths.wskprops = props;
        }

        log::debug!("resolved paths: {paths:?}");
        Ok(paths)
    }

    pub fn wskprops_file_name() -> &'static str {
        WSKPROPS_FILE
    }
}
