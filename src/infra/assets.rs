//! Stylesheet and script assets embedded into the produced document.
//!
//! Both files are read fresh on every save from the configured paths, so an
//! edited theme takes effect without restarting anything. Their content is
//! opaque to the pipeline and lands in the document verbatim.

use std::{fs, io, path::PathBuf};

use thiserror::Error;

use crate::config::AssetSettings;

#[derive(Debug, Error)]
#[error("failed to read asset `{}`: {source}", .path.display())]
pub struct AssetError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Text of the two assets embedded inline into every document.
#[derive(Debug, Clone)]
pub struct DocumentAssets {
    pub stylesheet: String,
    pub script: String,
}

/// Read the stylesheet and script from the configured paths.
pub fn load(settings: &AssetSettings) -> Result<DocumentAssets, AssetError> {
    Ok(DocumentAssets {
        stylesheet: read_asset(&settings.stylesheet)?,
        script: read_asset(&settings.script)?,
    })
}

fn read_asset(path: &PathBuf) -> Result<String, AssetError> {
    fs::read_to_string(path).map_err(|source| AssetError {
        path: path.clone(),
        source,
    })
}
