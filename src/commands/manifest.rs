use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::icon::IconSet;
use crate::icon::constants::{PNG_MIME, icon_filename};

/// One entry of a web app manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconsSection {
    pub icons: Vec<ManifestIcon>,
}

/// Build the `icons` section for the standard sizes, with `src` paths
/// under `prefix`. Size 0 is rejected, as it is when generating.
pub fn run(prefix: &str, sizes: &[u32]) -> io::Result<IconsSection> {
    let set = IconSet::new(sizes);
    if set.sizes.contains(&0) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "icon size must be greater than zero",
        ));
    }

    let icons = set
        .sizes
        .iter()
        .map(|&size| ManifestIcon {
            src: join_prefix(prefix, &icon_filename(size)),
            sizes: format!("{}x{}", size, size),
            mime: PNG_MIME.to_string(),
            purpose: "any maskable".to_string(),
        })
        .collect();

    Ok(IconsSection { icons })
}

impl IconsSection {
    pub fn to_json(&self) -> io::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_json()?)
    }
}

fn join_prefix(prefix: &str, file: &str) -> String {
    if prefix.is_empty() || prefix.ends_with('/') {
        format!("{}{}", prefix, file)
    } else {
        format!("{}/{}", prefix, file)
    }
}
