use super::constants::{DERIVED_ICONS, ICON_SIZES, icon_filename};

/// How derived icons are produced once the standard sizes exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeriveMode {
    /// Copy the already-written source icon, skipping it if absent
    #[default]
    Copy,
    /// Render a fresh icon at the source size
    Regenerate,
}

/// A derived icon and the standard icon it is taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedIcon {
    pub file: String,
    pub size: u32,
}

impl DerivedIcon {
    pub fn source_file(&self) -> String {
        icon_filename(self.size)
    }
}

/// Ordered list of files a generator run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    pub sizes: Vec<u32>,
    pub derived: Vec<DerivedIcon>,
}

impl IconSet {
    /// Use `sizes` for the standard icons, or the default list when empty.
    /// Duplicate sizes are written once, in first-seen order.
    pub fn new(sizes: &[u32]) -> Self {
        let requested = if sizes.is_empty() { ICON_SIZES } else { sizes };
        let mut unique = Vec::with_capacity(requested.len());
        for &size in requested {
            if !unique.contains(&size) {
                unique.push(size);
            }
        }

        IconSet {
            sizes: unique,
            derived: DERIVED_ICONS
                .iter()
                .map(|&(file, size)| DerivedIcon {
                    file: file.to_string(),
                    size,
                })
                .collect(),
        }
    }

    /// Every expected file name with its pixel size, standard icons first.
    pub fn files(&self) -> Vec<(String, u32)> {
        self.sizes
            .iter()
            .map(|&size| (icon_filename(size), size))
            .chain(self.derived.iter().map(|d| (d.file.clone(), d.size)))
            .collect()
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_standard_and_derived_icons() {
        let set = IconSet::default();
        let files = set.files();

        assert_eq!(files.len(), 13);
        assert_eq!(files[0], ("icon-72x72.png".to_string(), 72));
        assert_eq!(files[7], ("icon-512x512.png".to_string(), 512));
        assert!(files.contains(&("action-view.png".to_string(), 72)));
    }

    #[test]
    fn explicit_sizes_replace_defaults_and_drop_duplicates() {
        let set = IconSet::new(&[48, 96, 48]);

        assert_eq!(set.sizes, vec![48, 96]);
        assert_eq!(set.derived.len(), 5);
    }

    #[test]
    fn derived_icon_names_its_source() {
        let set = IconSet::default();
        let view = set.derived.iter().find(|d| d.file == "action-view.png").unwrap();

        assert_eq!(view.source_file(), "icon-72x72.png");
    }
}
