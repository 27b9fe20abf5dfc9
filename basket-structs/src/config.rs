use crate::serializable_struct_with_getters;
use basket_utils::dejsonify_file;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

serializable_struct_with_getters! {
    ServerConfig {
        host: String,
        port: u16,
        catalog_path: Option<PathBuf>,
    }
}

impl ServerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        dejsonify_file::<Self, _>(path)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            catalog_path: None,
        }
    }
}
