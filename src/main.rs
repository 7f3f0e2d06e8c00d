use clap::{Parser, Subcommand};
use commons_upload::config::{self, UploadConfig};
use commons_upload::description::{self, DEFAULT_AUTHOR, DEFAULT_LICENSE, UploadMetadata};
use commons_upload::upload::{PwbUploader, UploadRequest, Uploader};
use commons_upload::{naming, output};
use dialoguer::Confirm;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "commons-upload")]
#[command(about = "Upload portfolio photos to Wikimedia Commons")]
#[command(long_about = "\
Upload portfolio photos to Wikimedia Commons

The filename is the metadata source. Photos are named with up to three
underscore-delimited tokens, dashes standing in for spaces:

  subject_event_year.ext
  vanessa-kirby_toronto-film-festival_2024.jpg

which becomes the description page caption

  Vanessa Kirby at Toronto Film Festival in 2024

Missing tokens are fine — 'photo.jpg' uploads with the caption \"Photo\".

The actual transfer is delegated to the pywikibot client: 'pwb' must be on
PATH and logged in to Commons. A preview of the parsed fields and the full
description page is printed before anything is sent.

Examples:

  commons-upload upload photo.jpg --categories 'Film festivals,Toronto'
  commons-upload upload photo.jpg --config tiff-2024.json --license '{{cc-by-4.0}}'
  commons-upload quick photo.jpg 'Film festivals,Toronto'")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a photo, with a preview and confirmation prompt
    Upload(UploadArgs),
    /// Upload immediately with positional categories, no confirmation
    Quick(QuickArgs),
}

#[derive(clap::Args)]
struct UploadArgs {
    /// Photo to upload
    photo: PathBuf,

    /// Comma-separated category labels
    #[arg(long, value_name = "LIST")]
    categories: Option<String>,

    /// License template for the description page
    #[arg(long, value_name = "TEMPLATE")]
    license: Option<String>,

    /// JSON upload profile with "categories" and/or "license"
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Author credited on the description page
    #[arg(long, default_value = DEFAULT_AUTHOR)]
    author: String,

    /// Tell the upload client to suppress warning-based aborts
    #[arg(long)]
    ignore_warnings: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

#[derive(clap::Args)]
struct QuickArgs {
    /// Photo to upload
    photo: PathBuf,

    /// Comma-separated category labels
    categories: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Upload(args) => run_upload(args),
        Command::Quick(args) => run_quick(args),
    }
}

fn run_upload(args: UploadArgs) -> Result<(), Box<dyn std::error::Error>> {
    let filename = require_photo(&args.photo);

    let profile = match &args.config {
        Some(path) => Some(UploadConfig::load(path)?),
        None => None,
    };
    let cli_categories = args
        .categories
        .as_deref()
        .map(config::parse_category_list)
        .unwrap_or_default();

    let meta = UploadMetadata {
        parsed: naming::parse_filename(&filename),
        author: args.author,
        license: config::resolve_license(args.license.as_deref(), profile.as_ref()),
        categories: config::merge_categories(&cli_categories, profile.as_ref()),
        additional_info: String::new(),
        filename,
    };
    let page = description::generate_description(&meta);
    output::print_preview(&meta, &page);

    if !args.yes {
        let proceed = Confirm::new()
            .with_prompt("Proceed with upload?")
            .default(false)
            .interact()?;
        if !proceed {
            println!("Upload cancelled.");
            return Ok(());
        }
    }

    let request = UploadRequest {
        file_path: args.photo,
        target_filename: meta.filename,
        description: page,
        ignore_warnings: args.ignore_warnings,
    };
    PwbUploader::default().upload(&request)?;
    println!("✓ Uploaded: {}", request.target_filename);
    Ok(())
}

fn run_quick(args: QuickArgs) -> Result<(), Box<dyn std::error::Error>> {
    let filename = require_photo(&args.photo);

    let meta = UploadMetadata {
        parsed: naming::parse_filename(&filename),
        author: DEFAULT_AUTHOR.to_string(),
        license: DEFAULT_LICENSE.to_string(),
        categories: args
            .categories
            .as_deref()
            .map(config::parse_category_list)
            .unwrap_or_default(),
        additional_info: String::new(),
        filename,
    };
    let page = description::generate_description(&meta);
    output::print_preview(&meta, &page);

    let request = UploadRequest {
        file_path: args.photo,
        target_filename: meta.filename,
        description: page,
        ignore_warnings: false,
    };
    let uploader = PwbUploader::default();
    println!();
    println!("Running: {}", uploader.command_line(&request));
    uploader.upload(&request)?;
    println!("✓ Uploaded: {}", request.target_filename);
    Ok(())
}

/// Validate the photo path and return its base name, the target filename on
/// the remote site. A missing file is the one user-input error this tool
/// reports itself; everything after this point either succeeds or surfaces a
/// collaborator failure.
fn require_photo(photo: &Path) -> String {
    if !photo.exists() {
        eprintln!("Error: file not found: {}", photo.display());
        std::process::exit(1);
    }
    photo
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
