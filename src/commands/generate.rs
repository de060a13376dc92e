//! Write the full icon set into a directory.
//!
//! Standard sizes are rendered first, one after another; derived icons
//! follow, copied from or rendered like their source size. A failure stops
//! the run and leaves every file written so far in place.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::icon::constants::icon_filename;
use crate::icon::{
    DeriveMode, DerivedIcon, FontSource, GlyphOutcome, GlyphRenderer, IconError, IconSet,
    IconStyle, render_icon,
};
use crate::utils::png::save_png;

/// Settings for a generator run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub style: IconStyle,
    /// Standard sizes to write; empty means the default list
    pub sizes: Vec<u32>,
    pub derive: DeriveMode,
    pub fonts: FontSource,
}

/// One output of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedFile {
    Rendered {
        file: String,
        size: u32,
        glyph: GlyphOutcome,
    },
    Copied {
        file: String,
        source: String,
    },
    /// Copy mode found no source icon to duplicate
    Skipped {
        file: String,
        source: String,
    },
}

impl GeneratedFile {
    pub fn file(&self) -> &str {
        match self {
            GeneratedFile::Rendered { file, .. } => file,
            GeneratedFile::Copied { file, .. } => file,
            GeneratedFile::Skipped { file, .. } => file,
        }
    }
}

impl fmt::Display for GeneratedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedFile::Rendered { file, size, .. } => {
                write!(f, "Created {} ({}x{})", file, size, size)
            }
            GeneratedFile::Copied { file, source } => {
                write!(f, "Copied {} from {}", file, source)
            }
            GeneratedFile::Skipped { file, source } => {
                write!(f, "Skipped {} ({} not found)", file, source)
            }
        }
    }
}

/// Progress report passed to the callback after each file.
pub struct Progress<'a> {
    pub entry: &'a GeneratedFile,
    pub index: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub files: Vec<GeneratedFile>,
}

impl GenerateReport {
    /// Number of icons whose glyph was replaced by the fallback disc.
    pub fn fallback_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| {
                matches!(
                    f,
                    GeneratedFile::Rendered {
                        glyph: GlyphOutcome::Fallback(_),
                        ..
                    }
                )
            })
            .count()
    }
}

pub fn run<F>(
    output_dir: &Path,
    options: &GenerateOptions,
    mut on_progress: Option<F>,
) -> Result<GenerateReport, IconError>
where
    F: FnMut(Progress),
{
    fs::create_dir_all(output_dir).map_err(|source| IconError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let set = IconSet::new(&options.sizes);
    let glyphs = GlyphRenderer::new(&options.fonts);
    let total = set.sizes.len() + set.derived.len();
    let mut report = GenerateReport::default();

    let mut record = |entry: GeneratedFile, report: &mut GenerateReport| {
        if let Some(ref mut callback) = on_progress {
            callback(Progress {
                entry: &entry,
                index: report.files.len(),
                total,
            });
        }
        report.files.push(entry);
    };

    for &size in &set.sizes {
        let entry = write_icon(output_dir, &icon_filename(size), size, options.style, &glyphs)?;
        record(entry, &mut report);
    }

    for derived in &set.derived {
        let entry = match options.derive {
            DeriveMode::Copy => copy_icon(output_dir, derived)?,
            DeriveMode::Regenerate => {
                write_icon(output_dir, &derived.file, derived.size, options.style, &glyphs)?
            }
        };
        record(entry, &mut report);
    }

    Ok(report)
}

fn write_icon(
    output_dir: &Path,
    file: &str,
    size: u32,
    style: IconStyle,
    glyphs: &GlyphRenderer,
) -> Result<GeneratedFile, IconError> {
    let icon = render_icon(size, style, glyphs)?;
    save_png(&icon.image, &output_dir.join(file))?;

    Ok(GeneratedFile::Rendered {
        file: file.to_string(),
        size,
        glyph: icon.glyph,
    })
}

fn copy_icon(output_dir: &Path, derived: &DerivedIcon) -> Result<GeneratedFile, IconError> {
    let source = derived.source_file();
    let from = output_dir.join(&source);
    let to = output_dir.join(&derived.file);

    if !from.exists() {
        return Ok(GeneratedFile::Skipped {
            file: derived.file.clone(),
            source,
        });
    }

    fs::copy(&from, &to).map_err(|e| IconError::Copy {
        from: from.clone(),
        to: to.clone(),
        source: e,
    })?;

    Ok(GeneratedFile::Copied {
        file: derived.file.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::GlyphError;
    use crate::utils::hash::hash_file;
    use crate::utils::png::{PngProbe, probe_png};
    use tempfile::tempdir;

    fn offline_options() -> GenerateOptions {
        GenerateOptions {
            fonts: FontSource::None,
            ..GenerateOptions::default()
        }
    }

    fn generate(dir: &Path, options: &GenerateOptions) -> GenerateReport {
        run(dir, options, None::<fn(Progress)>).unwrap()
    }

    #[test]
    fn writes_every_standard_size() {
        let dir = tempdir().unwrap();

        generate(dir.path(), &offline_options());

        for size in [72, 96, 128, 144, 152, 192, 384, 512] {
            let path = dir.path().join(format!("icon-{}x{}.png", size, size));
            assert_eq!(
                probe_png(&path),
                PngProbe::Decoded { width: size, height: size }
            );
        }
    }

    #[test]
    fn copies_derived_icons_from_sources() {
        let dir = tempdir().unwrap();

        let report = generate(dir.path(), &offline_options());

        assert_eq!(report.files.len(), 13);
        assert_eq!(
            hash_file(&dir.path().join("shortcut-admin.png")).unwrap(),
            hash_file(&dir.path().join("icon-96x96.png")).unwrap()
        );
        assert_eq!(
            probe_png(&dir.path().join("action-view.png")),
            PngProbe::Decoded { width: 72, height: 72 }
        );
        assert!(report.files.contains(&GeneratedFile::Copied {
            file: "action-dismiss.png".to_string(),
            source: "icon-96x96.png".to_string(),
        }));
    }

    #[test]
    fn copy_mode_skips_derived_icons_without_source() {
        let dir = tempdir().unwrap();
        let options = GenerateOptions {
            sizes: vec![72],
            ..offline_options()
        };

        let report = generate(dir.path(), &options);

        assert!(dir.path().join("action-view.png").exists());
        assert!(!dir.path().join("shortcut-admin.png").exists());
        assert!(report.files.contains(&GeneratedFile::Skipped {
            file: "shortcut-admin.png".to_string(),
            source: "icon-96x96.png".to_string(),
        }));
    }

    #[test]
    fn regenerate_mode_renders_derived_icons() {
        let dir = tempdir().unwrap();
        let options = GenerateOptions {
            sizes: vec![72],
            derive: DeriveMode::Regenerate,
            ..offline_options()
        };

        generate(dir.path(), &options);

        assert_eq!(
            probe_png(&dir.path().join("shortcut-products.png")),
            PngProbe::Decoded { width: 96, height: 96 }
        );
    }

    #[test]
    fn second_run_is_byte_identical_without_fonts() {
        let dir = tempdir().unwrap();
        let options = offline_options();

        generate(dir.path(), &options);
        let first = hash_file(&dir.path().join("icon-192x192.png")).unwrap();
        generate(dir.path(), &options);
        let second = hash_file(&dir.path().join("icon-192x192.png")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn reports_fallback_for_every_rendered_icon_without_fonts() {
        let dir = tempdir().unwrap();

        let report = generate(dir.path(), &offline_options());

        assert_eq!(report.fallback_count(), 8);
        assert!(report.files.iter().any(|f| matches!(
            f,
            GeneratedFile::Rendered {
                glyph: GlyphOutcome::Fallback(GlyphError::NoFonts),
                ..
            }
        )));
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("public").join("icons");
        let options = GenerateOptions {
            sizes: vec![96],
            ..offline_options()
        };

        generate(&output, &options);

        assert!(output.join("icon-96x96.png").exists());
    }

    #[test]
    fn zero_size_stops_run_after_earlier_files() {
        let dir = tempdir().unwrap();
        let options = GenerateOptions {
            sizes: vec![72, 0, 96],
            ..offline_options()
        };

        let result = run(dir.path(), &options, None::<fn(Progress)>);

        assert!(matches!(result, Err(IconError::InvalidSize(0))));
        assert!(dir.path().join("icon-72x72.png").exists());
        assert!(!dir.path().join("icon-96x96.png").exists());
    }

    #[test]
    fn progress_callback_sees_every_file_in_order() {
        let dir = tempdir().unwrap();
        let mut seen = Vec::new();

        run(
            dir.path(),
            &offline_options(),
            Some(|p: Progress| {
                assert_eq!(p.total, 13);
                seen.push((p.index, p.entry.file().to_string()));
            }),
        )
        .unwrap();

        assert_eq!(seen.len(), 13);
        assert_eq!(seen[0], (0, "icon-72x72.png".to_string()));
        assert_eq!(seen[12], (12, "action-dismiss.png".to_string()));
    }

    #[test]
    fn progress_lines_name_file_and_size() {
        let rendered = GeneratedFile::Rendered {
            file: "icon-72x72.png".to_string(),
            size: 72,
            glyph: GlyphOutcome::Drawn,
        };
        let copied = GeneratedFile::Copied {
            file: "shortcut-admin.png".to_string(),
            source: "icon-96x96.png".to_string(),
        };

        assert_eq!(rendered.to_string(), "Created icon-72x72.png (72x72)");
        assert_eq!(copied.to_string(), "Copied shortcut-admin.png from icon-96x96.png");
    }
}
