use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{OptionExt, WrapErr};
use cube_core::CubeState;
use log::debug;
use serde::{Deserialize, Serialize};

/// Named cube states kept in a TOML file, one `[saves.<name>]` table each.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveStore {
    #[serde(default)]
    saves: BTreeMap<String, CubeState>,
    #[serde(skip)]
    path: PathBuf,
}

impl SaveStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> color_eyre::Result<SaveStore> {
        let mut store = match fs::read_to_string(path) {
            Ok(text) => toml::from_str::<SaveStore>(&text)
                .wrap_err_with(|| format!("Failed to parse the saves in {}", path.display()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => SaveStore::default(),
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("Failed to read the saves in {}", path.display()));
            }
        };
        debug!("Opened {} save(s) from {}", store.saves.len(), path.display());
        store.path = path.to_owned();
        Ok(store)
    }

    pub fn write(&self) -> color_eyre::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(self)?)
            .wrap_err_with(|| format!("Failed to write the saves to {}", self.path.display()))
    }

    pub fn get(&self, name: &str) -> color_eyre::Result<&CubeState> {
        self.saves
            .get(name)
            .ok_or_eyre(format!("There is no save called `{name}`"))
    }

    /// Store `state` under `name`, returning whatever was there before.
    pub fn insert(&mut self, name: String, state: CubeState) -> Option<CubeState> {
        self.saves.insert(name, state)
    }

    pub fn remove(&mut self, name: &str) -> color_eyre::Result<CubeState> {
        self.saves
            .remove(name)
            .ok_or_eyre(format!("There is no save called `{name}`"))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.saves.keys().map(String::as_str)
    }
}
