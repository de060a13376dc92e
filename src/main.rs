use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use pwa_icons::commands::generate::{GenerateOptions, GeneratedFile, Progress};
use pwa_icons::commands::verify::VerifyStatus;
use pwa_icons::icon::constants::MANIFEST_PREFIX;
use pwa_icons::icon::{DeriveMode, FontSource, GlyphOutcome, IconStyle};

#[derive(Parser)]
#[command(name = "pwa-icons")]
#[command(about = "Generate placeholder PNG icons for a web app manifest")]
#[command(version)]
struct Cli {
    /// Runs `generate` with defaults in the current directory when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every icon size plus the shortcut and action icons
    Generate(GenerateArgs),
    /// Check that every expected icon is a PNG of the right size
    Verify {
        /// Directory holding the icons
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Icon size to expect. Repeat for multiple; defaults to the standard set
        #[arg(short, long = "size")]
        sizes: Vec<u32>,
    },
    /// Write scalable SVG variants of each icon size
    Svg {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
        /// Icon size to write. Repeat for multiple; defaults to the standard set
        #[arg(short, long = "size")]
        sizes: Vec<u32>,
    },
    /// Print the `icons` section for a web app manifest
    Manifest {
        /// Path prefix for each icon's `src`
        #[arg(long, default_value = MANIFEST_PREFIX)]
        prefix: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Icon size to list. Repeat for multiple; defaults to the standard set
        #[arg(short, long = "size")]
        sizes: Vec<u32>,
    },
}

#[derive(clap::Args, Debug, Default)]
struct GenerateArgs {
    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Icon style
    #[arg(long, value_enum, default_value_t = IconStyle::Badge)]
    style: IconStyle,

    /// Icon size to write. Repeat for multiple; defaults to the standard set
    #[arg(short, long = "size")]
    sizes: Vec<u32>,

    /// Render shortcut and action icons instead of copying them
    #[arg(long)]
    regenerate_shortcuts: bool,

    /// Font file for the glyph (system fonts are used otherwise)
    #[arg(long, conflicts_with = "no_fonts")]
    font: Option<PathBuf>,

    /// Skip font lookup and always draw the fallback disc
    #[arg(long)]
    no_fonts: bool,
}

impl GenerateArgs {
    fn options(&self) -> GenerateOptions {
        let fonts = match (&self.font, self.no_fonts) {
            (_, true) => FontSource::None,
            (Some(path), false) => FontSource::File(path.clone()),
            (None, false) => FontSource::System,
        };
        let derive = if self.regenerate_shortcuts {
            DeriveMode::Regenerate
        } else {
            DeriveMode::Copy
        };

        GenerateOptions {
            style: self.style,
            sizes: self.sizes.clone(),
            derive,
            fonts,
        }
    }
}

fn print_progress(p: Progress) {
    println!("{}", p.entry);
    if let GeneratedFile::Rendered {
        glyph: GlyphOutcome::Fallback(reason),
        ..
    } = p.entry
    {
        println!("  glyph fallback: {}", reason);
    }
}

fn generate(args: &GenerateArgs) {
    match pwa_icons::commands::generate::run(&args.output, &args.options(), Some(print_progress)) {
        Ok(report) => {
            println!(
                "Generated {} icons in {}",
                report.files.len(),
                args.output.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => generate(&GenerateArgs {
            output: PathBuf::from("."),
            ..GenerateArgs::default()
        }),
        Some(Commands::Generate(args)) => generate(&args),
        Some(Commands::Verify { dir, sizes }) => {
            let report = pwa_icons::commands::verify::run(&dir, &sizes);
            for entry in &report.entries {
                match &entry.status {
                    VerifyStatus::Ok { hash } => println!("{}: {}", entry.file, hash),
                    VerifyStatus::Missing => println!("{}: missing", entry.file),
                    VerifyStatus::NotPng => println!("{}: not a PNG", entry.file),
                    VerifyStatus::WrongSize { width, height } => println!(
                        "{}: expected {}x{}, found {}x{}",
                        entry.file, entry.size, entry.size, width, height
                    ),
                    VerifyStatus::Unreadable(reason) => {
                        println!("{}: unreadable: {}", entry.file, reason)
                    }
                }
            }
            if report.all_ok() {
                println!("All icons valid");
            } else {
                println!("{} icons failed verification", report.failures().count());
                process::exit(1);
            }
        }
        Some(Commands::Svg { output, sizes }) => {
            match pwa_icons::commands::svg::run(&output, &sizes) {
                Ok(written) => {
                    for path in &written {
                        println!("Created {}", path.display());
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Some(Commands::Manifest {
            prefix,
            output,
            sizes,
        }) => {
            let result =
                pwa_icons::commands::manifest::run(&prefix, &sizes).and_then(|section| {
                    match &output {
                        Some(path) => section.save(path).map(|()| {
                            println!("Manifest icons written to {}", path.display());
                        }),
                        None => section.to_json().map(|json| println!("{}", json)),
                    }
                });
            if let Err(e) = result {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        }
    }
}
