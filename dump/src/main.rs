//! A CLI tool for inspecting the contents of DICOM JSON files
//! by printing them in a human readable format.
use clap::Parser;
use dcmset_dump::{determine_width, ColorMode, DumpOptions};
use dcmset_object::DataSet;
use snafu::{Report, ResultExt, Whatever};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

/// Exit code for when an error emerged while reading the file.
const ERROR_READ: i32 = -2;
/// Exit code for when an error emerged while dumping the file.
const ERROR_PRINT: i32 = -3;

/// Dump the contents of DICOM JSON files
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM JSON file(s) to read
    #[clap(required = true)]
    files: Vec<PathBuf>,
    /// Print text values to the end
    /// (limited to `width` by default)
    #[clap(long = "no-text-limit")]
    no_text_limit: bool,
    /// Print all values to the end
    /// (implies `no_text_limit`, limited to `width` by default)
    #[clap(long = "no-limit")]
    no_limit: bool,
    /// The width of the display
    /// (default is to check automatically)
    #[clap(short = 'w', long = "width")]
    width: Option<u32>,
    /// The color mode
    #[clap(long = "color", default_value = "auto")]
    color: ColorMode,
    /// Fail if any errors are encountered
    #[clap(long = "fail-first")]
    fail_first: bool,
    /// Verbose mode
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    run().unwrap_or_else(|e| {
        eprintln!("{}", Report::from_error(e));
        std::process::exit(ERROR_READ);
    });
}

fn open_json(path: &Path) -> Result<DataSet, Whatever> {
    let file = File::open(path)
        .with_whatever_context(|_| format!("Could not open {}", path.display()))?;
    dcmset_json::from_reader(BufReader::new(file))
        .with_whatever_context(|_| format!("Could not read DICOM JSON from {}", path.display()))
}

fn run() -> Result<(), Whatever> {
    let App {
        files: filenames,
        no_text_limit,
        no_limit,
        width,
        color,
        fail_first,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .with_writer(std::io::stderr)
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let width = determine_width(width);
    debug!("Dumping {} file(s) with width {}", filenames.len(), width);

    let mut options = DumpOptions::new();
    options
        .no_text_limit(no_text_limit)
        .no_limit(no_limit)
        .width(width)
        .color_mode(color);
    let fail_first = filenames.len() == 1 || fail_first;
    let mut errors: i32 = 0;

    for filename in &filenames {
        println!("{}: ", filename.display());
        match open_json(filename) {
            Err(e) => {
                eprintln!("{}", Report::from_error(e));
                if fail_first {
                    std::process::exit(ERROR_READ);
                }
                errors += 1;
            }
            Ok(obj) => {
                debug!("{}: {} element(s)", filename.display(), obj.len());
                if let Err(ref e) = options.dump_object(&obj) {
                    if e.kind() == ErrorKind::BrokenPipe {
                        // handle broken pipe separately with a no-op
                    } else {
                        eprintln!("[ERROR] {}", Report::from_error(e));
                        if fail_first {
                            std::process::exit(ERROR_PRINT);
                        }
                    }
                    errors += 1;
                }
            }
        };
    }

    std::process::exit(errors);
}
