// SPDX-License-Identifier: GPL-3.0-only

use camera_shell::backends::camera::{
    DestinationType, EncodingType, MediaType, PictureSourceType,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "camera-shell")]
#[command(about = "Take pictures and keep a profile through substitutable device providers")]
#[command(version = env!("GIT_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a picture or pick one from the library
    Photo(PhotoArgs),

    /// Show the detected origin and which camera provider it binds
    Env,

    /// Show or update the stored profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(clap::Args)]
pub struct PhotoArgs {
    /// JSON file with camera options (flags below override it)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Picture quality (0-100)
    #[arg(short, long)]
    quality: Option<u8>,

    /// Where the picture comes from
    #[arg(short, long, value_enum)]
    source: Option<SourceArg>,

    /// Shape of the result
    #[arg(short, long, value_enum)]
    destination: Option<DestinationArg>,

    /// Image encoding
    #[arg(short, long, value_enum)]
    encoding: Option<EncodingArg>,

    /// Media kind for library selections
    #[arg(short, long, value_enum)]
    media: Option<MediaArg>,

    /// Also keep captures in the saved album
    #[arg(long)]
    save_to_album: bool,

    /// Write the picture to this file instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Remove intermediate capture files afterwards
    #[arg(long)]
    cleanup: bool,

    /// Give up after this many seconds
    #[arg(short, long)]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the stored profile
    Show,
    /// Replace the stored profile
    Set {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Camera,
    Library,
    Album,
}

#[derive(Clone, Copy, ValueEnum)]
enum DestinationArg {
    DataUrl,
    FileUri,
    NativeUri,
}

#[derive(Clone, Copy, ValueEnum)]
enum EncodingArg {
    Jpeg,
    Png,
}

#[derive(Clone, Copy, ValueEnum)]
enum MediaArg {
    Picture,
    Video,
    All,
}

impl From<SourceArg> for PictureSourceType {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Camera => PictureSourceType::Camera,
            SourceArg::Library => PictureSourceType::PhotoLibrary,
            SourceArg::Album => PictureSourceType::SavedPhotoAlbum,
        }
    }
}

impl From<DestinationArg> for DestinationType {
    fn from(arg: DestinationArg) -> Self {
        match arg {
            DestinationArg::DataUrl => DestinationType::DataUrl,
            DestinationArg::FileUri => DestinationType::FileUri,
            DestinationArg::NativeUri => DestinationType::NativeUri,
        }
    }
}

impl From<EncodingArg> for EncodingType {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Jpeg => EncodingType::Jpeg,
            EncodingArg::Png => EncodingType::Png,
        }
    }
}

impl From<MediaArg> for MediaType {
    fn from(arg: MediaArg) -> Self {
        match arg {
            MediaArg::Picture => MediaType::Picture,
            MediaArg::Video => MediaType::Video,
            MediaArg::All => MediaType::AllMedia,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=camera_shell=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let config = camera_shell::Config::load()?;

    match cli.command {
        Commands::Photo(args) => cli::take_photo(&config, args).await,
        Commands::Env => cli::show_environment(&config),
        Commands::Profile {
            action: ProfileAction::Show,
        } => cli::show_profile(&config).await,
        Commands::Profile {
            action:
                ProfileAction::Set {
                    first_name,
                    last_name,
                },
        } => cli::set_profile(&config, first_name, last_name).await,
    }
}
