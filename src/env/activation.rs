use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::{CredentialRecord, EnvError, EnvResult, EnvironmentStore};
use crate::config::Paths;

/// Owns the active properties file and the selection marker.
///
/// The marker only records which environment was last copied into the active
/// properties; the two files are read independently and may disagree after
/// external edits.
#[derive(Debug, Clone)]
pub struct ActivationController {
    store: EnvironmentStore,
    wskprops: PathBuf,
    marker: PathBuf,
}

impl ActivationController {
    pub fn new(store: EnvironmentStore, wskprops: PathBuf, marker: PathBuf) -> Self {
        Self {
            store,
            wskprops,
            marker,
        }
    }

    pub fn from_paths(paths: &Paths) -> Self {
        Self::new(
            EnvironmentStore::new(&paths.registry_root),
            paths.wskprops.clone(),
            paths.marker.clone(),
        )
    }

    pub fn store(&self) -> &EnvironmentStore {
        &self.store
    }

    pub fn wskprops(&self) -> &Path {
        &self.wskprops
    }

    /// Copies the stored properties over the active file, then records `name`
    /// in the marker. If the marker write fails the copy stays in place;
    /// activating again brings both back in line.
    pub fn activate(&self, name: &str) -> EnvResult<()> {
        self.store.get(name).map_err(|err| match err {
            EnvError::CorruptRecord(path) => {
                log::warn!("refusing to activate malformed {}", path.display());
                EnvError::NotFound(name.to_string())
            }
            err => err,
        })?;

        if let Some(parent) = self.wskprops.parent() {
            fs::create_dir_all(parent)?;
        }

        let source = self.store.props_path(name);
        if same_file(&source, &self.wskprops)? {
            // Copying onto itself would truncate the stored record.
            log::debug!("{} already is the stored record", self.wskprops.display());
        } else {
            log::debug!("copying {} -> {}", source.display(), self.wskprops.display());
            fs::copy(&source, &self.wskprops)?;
        }

        fs::write(&self.marker, format!("{name}\n"))?;

        log::info!("activated environment '{name}'");
        Ok(())
    }

    /// Empty when nothing has been selected yet.
    pub fn current_selection(&self) -> String {
        match fs::read_to_string(&self.marker) {
            Ok(contents) => contents.trim().to_string(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(err) => {
                log::warn!("unable to read {}: {err}", self.marker.display());
                String::new()
            }
        }
    }

    pub fn is_active(&self, name: &str) -> bool {
        !name.is_empty() && self.current_selection() == name
    }

    /// Reads the active properties file itself, not the stored copy the
    /// marker points at.
    pub fn describe_active(&self) -> EnvResult<CredentialRecord> {
        if !self.wskprops.is_file() {
            return Err(EnvError::NoActiveEnvironment(self.wskprops.clone()));
        }

        let contents = fs::read_to_string(&self.wskprops)?;

        CredentialRecord::parse(&contents)
            .ok_or_else(|| EnvError::NoActiveEnvironment(self.wskprops.clone()))
    }
}

/// Both paths resolve to the same file. A missing `dest` never matches.
fn same_file(source: &Path, dest: &Path) -> io::Result<bool> {
    if !dest.exists() {
        return Ok(false);
    }

    Ok(fs::canonicalize(source)? == fs::canonicalize(dest)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn auth(fill: char) -> String {
        format!(
            "550e8400-e29b-41d4-a716-446655440000:{}",
            fill.to_string().repeat(64)
        )
    }

    fn controller() -> (TempDir, ActivationController) {
        let tmp = TempDir::new().unwrap();
        let ctl = ActivationController::from_paths(&Paths::under(tmp.path()));
        (tmp, ctl)
    }

    #[test]
    fn nothing_selected_initially() {
        let (_tmp, ctl) = controller();

        assert_eq!(ctl.current_selection(), "");
        assert!(!ctl.is_active(""));
        assert!(!ctl.is_active("dev"));
    }

    #[test]
    fn activate_copies_record_and_updates_marker() {
        let (_tmp, ctl) = controller();
        ctl.store().create("dev", "localhost:3233", &auth('a')).unwrap();

        ctl.activate("dev").unwrap();

        assert_eq!(ctl.current_selection(), "dev");
        assert!(ctl.is_active("dev"));
        assert_eq!(ctl.describe_active().unwrap(), ctl.store().get("dev").unwrap());
        assert_eq!(
            fs::read_to_string(ctl.wskprops()).unwrap(),
            ctl.store().read_raw("dev").unwrap()
        );
    }

    #[test]
    fn activate_is_idempotent() {
        let (_tmp, ctl) = controller();
        ctl.store().create("dev", "localhost", &auth('a')).unwrap();

        ctl.activate("dev").unwrap();
        let once = fs::read_to_string(ctl.wskprops()).unwrap();
        ctl.activate("dev").unwrap();
        let twice = fs::read_to_string(ctl.wskprops()).unwrap();

        assert_eq!(once, twice);
        assert_eq!(ctl.current_selection(), "dev");
    }

    #[test]
    fn switching_overwrites_active_properties() {
        let (_tmp, ctl) = controller();
        ctl.store().create("dev", "localhost", &auth('a')).unwrap();
        ctl.store().create("prod", "https://prod.example.com", &auth('b')).unwrap();

        ctl.activate("dev").unwrap();
        ctl.activate("prod").unwrap();

        let active = ctl.describe_active().unwrap();
        assert_eq!(active.api_host, "https://prod.example.com");
        assert_eq!(active.auth_token, auth('b'));
        assert!(!ctl.is_active("dev"));
    }

    #[test]
    fn activate_missing_changes_nothing() {
        let (_tmp, ctl) = controller();

        assert!(matches!(ctl.activate("ghost"), Err(EnvError::NotFound(_))));
        assert!(!ctl.wskprops().exists());
        assert_eq!(ctl.current_selection(), "");
    }

    #[test]
    fn describe_without_active_file() {
        let (_tmp, ctl) = controller();
        assert!(matches!(
            ctl.describe_active(),
            Err(EnvError::NoActiveEnvironment(_))
        ));
    }

    #[test]
    fn describe_malformed_active_file() {
        let (_tmp, ctl) = controller();
        fs::write(ctl.wskprops(), "APIHOST=localhost\n").unwrap();

        assert!(matches!(
            ctl.describe_active(),
            Err(EnvError::NoActiveEnvironment(_))
        ));
    }

    #[test]
    fn describe_reads_legacy_alias() {
        let (_tmp, ctl) = controller();
        fs::write(ctl.wskprops(), "ALIAS=old\nAUTH=a:b\nAPIHOST=localhost\n").unwrap();

        assert_eq!(ctl.describe_active().unwrap().alias.as_deref(), Some("old"));
    }

    #[test]
    fn removing_active_env_keeps_copy_and_marker() {
        let (_tmp, ctl) = controller();
        ctl.store().create("dev", "localhost", &auth('a')).unwrap();
        ctl.activate("dev").unwrap();

        ctl.store().remove("dev").unwrap();

        assert_eq!(ctl.current_selection(), "dev");
        assert_eq!(ctl.describe_active().unwrap().api_host, "localhost");
    }

    #[test]
    fn marker_is_trimmed() {
        let (_tmp, ctl) = controller();
        ctl.store().create("dev", "localhost", &auth('a')).unwrap();
        fs::write(&ctl.marker, "  dev \n\n").unwrap();

        assert_eq!(ctl.current_selection(), "dev");
    }

    #[test]
    fn honours_custom_wskprops_location() {
        let tmp = TempDir::new().unwrap();
        let mut paths = Paths::under(tmp.path());
        paths.wskprops = tmp.path().join("wsk").join("props");
        let ctl = ActivationController::from_paths(&paths);
        ctl.store().create("dev", "localhost", &auth('a')).unwrap();

        ctl.activate("dev").unwrap();

        assert!(tmp.path().join("wsk/props").is_file());
        assert!(!tmp.path().join(".wskprops").exists());
    }

    #[test]
    fn activate_malformed_record_is_not_found() {
        let (_tmp, ctl) = controller();
        fs::create_dir_all(ctl.store().root().join("broken")).unwrap();
        fs::write(ctl.store().props_path("broken"), "AUTH=x\n").unwrap();

        assert!(matches!(ctl.activate("broken"), Err(EnvError::NotFound(_))));
        assert!(!ctl.wskprops().exists());
        assert_eq!(ctl.current_selection(), "");
    }

    #[test]
    fn activate_onto_stored_record_keeps_it() {
        let tmp = TempDir::new().unwrap();
        let mut paths = Paths::under(tmp.path());
        let store = EnvironmentStore::new(&paths.registry_root);
        store.create("dev", "localhost", &auth('a')).unwrap();
        let before = store.read_raw("dev").unwrap();

        paths.wskprops = store.props_path("dev");
        let ctl = ActivationController::from_paths(&paths);
        ctl.activate("dev").unwrap();

        assert_eq!(store.read_raw("dev").unwrap(), before);
        assert_eq!(ctl.describe_active().unwrap(), store.get("dev").unwrap());
        assert_eq!(ctl.current_selection(), "dev");
    }

    #[cfg(unix)]
    #[test]
    fn activate_through_symlinked_wskprops_keeps_record() {
        let (_tmp, ctl) = controller();
        ctl.store().create("dev", "localhost", &auth('a')).unwrap();
        let before = ctl.store().read_raw("dev").unwrap();
        std::os::unix::fs::symlink(ctl.store().props_path("dev"), ctl.wskprops()).unwrap();

        ctl.activate("dev").unwrap();

        assert_eq!(ctl.store().read_raw("dev").unwrap(), before);
        assert_eq!(ctl.current_selection(), "dev");
    }

    #[test]
    fn describe_directory_is_no_active_environment() {
        let (_tmp, ctl) = controller();
        fs::create_dir_all(ctl.wskprops()).unwrap();

        assert!(matches!(
            ctl.describe_active(),
            Err(EnvError::NoActiveEnvironment(_))
        ));
    }
}
