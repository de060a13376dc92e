use std::path::Path;

use crate::icon::IconSet;
use crate::utils::hash::hash_file;
use crate::utils::png::{PngProbe, probe_png};

/// Outcome of checking one expected icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyStatus {
    Ok { hash: String },
    Missing,
    NotPng,
    WrongSize { width: u32, height: u32 },
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyEntry {
    pub file: String,
    pub size: u32,
    pub status: VerifyStatus,
}

pub struct VerifyReport {
    pub entries: Vec<VerifyEntry>,
}

impl VerifyReport {
    pub fn all_ok(&self) -> bool {
        self.entries
            .iter()
            .all(|e| matches!(e.status, VerifyStatus::Ok { .. }))
    }

    pub fn failures(&self) -> impl Iterator<Item = &VerifyEntry> {
        self.entries
            .iter()
            .filter(|e| !matches!(e.status, VerifyStatus::Ok { .. }))
    }
}

/// Check that every icon a generator run would write exists in `dir`
/// and decodes as a PNG of the expected size. Every problem is recorded
/// against its own entry; the pass always covers the whole set.
pub fn run(dir: &Path, sizes: &[u32]) -> VerifyReport {
    let set = IconSet::new(sizes);
    let mut entries = Vec::new();

    for (file, size) in set.files() {
        let path = dir.join(&file);
        let status = match probe_png(&path) {
            PngProbe::Missing => VerifyStatus::Missing,
            PngProbe::NotPng => VerifyStatus::NotPng,
            PngProbe::Unreadable(reason) => VerifyStatus::Unreadable(reason),
            PngProbe::Decoded { width, height } if width != size || height != size => {
                VerifyStatus::WrongSize { width, height }
            }
            PngProbe::Decoded { .. } => match hash_file(&path) {
                Ok(hash) => VerifyStatus::Ok { hash },
                Err(e) => VerifyStatus::Unreadable(e.to_string()),
            },
        };
        entries.push(VerifyEntry { file, size, status });
    }

    VerifyReport { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate::{self, GenerateOptions, Progress};
    use crate::icon::FontSource;
    use image::{DynamicImage, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn generate_into(dir: &Path) {
        let options = GenerateOptions {
            fonts: FontSource::None,
            ..GenerateOptions::default()
        };
        generate::run(dir, &options, None::<fn(Progress)>).unwrap();
    }

    fn status_of<'a>(report: &'a VerifyReport, file: &str) -> &'a VerifyStatus {
        &report.entries.iter().find(|e| e.file == file).unwrap().status
    }

    #[test]
    fn generated_set_verifies() {
        let dir = tempdir().unwrap();
        generate_into(dir.path());

        let report = run(dir.path(), &[]);

        assert_eq!(report.entries.len(), 13);
        assert!(report.all_ok());
    }

    #[test]
    fn copied_icons_share_source_hash() {
        let dir = tempdir().unwrap();
        generate_into(dir.path());

        let report = run(dir.path(), &[]);

        assert_eq!(
            status_of(&report, "shortcut-reservation.png"),
            status_of(&report, "icon-96x96.png")
        );
    }

    #[test]
    fn empty_directory_reports_missing() {
        let dir = tempdir().unwrap();

        let report = run(dir.path(), &[]);

        assert!(!report.all_ok());
        assert_eq!(report.failures().count(), 13);
        assert_eq!(status_of(&report, "icon-72x72.png"), &VerifyStatus::Missing);
    }

    #[test]
    fn resized_icon_reports_wrong_size() {
        let dir = tempdir().unwrap();
        generate_into(dir.path());
        DynamicImage::ImageRgba8(RgbaImage::new(64, 48))
            .save(dir.path().join("icon-128x128.png"))
            .unwrap();

        let report = run(dir.path(), &[]);

        assert_eq!(
            status_of(&report, "icon-128x128.png"),
            &VerifyStatus::WrongSize { width: 64, height: 48 }
        );
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn non_png_content_is_flagged() {
        let dir = tempdir().unwrap();
        generate_into(dir.path());
        fs::write(dir.path().join("action-view.png"), b"<svg/>").unwrap();

        let report = run(dir.path(), &[]);

        assert_eq!(status_of(&report, "action-view.png"), &VerifyStatus::NotPng);
    }

    #[test]
    fn unreadable_entry_does_not_stop_the_pass() {
        let dir = tempdir().unwrap();
        generate_into(dir.path());
        fs::remove_file(dir.path().join("icon-96x96.png")).unwrap();
        fs::create_dir(dir.path().join("icon-96x96.png")).unwrap();

        let report = run(dir.path(), &[]);

        assert_eq!(report.entries.len(), 13);
        assert!(matches!(
            status_of(&report, "icon-96x96.png"),
            VerifyStatus::Unreadable(_)
        ));
        assert_eq!(report.failures().count(), 1);
    }
}
