mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use framelog_core::sorting::FrameSort;
use framelog_core::Logbook;

/// Framelog — analog photography logbook
#[derive(Parser)]
#[command(name = "framelog", version, about)]
struct Cli {
    /// Path to the logbook database
    #[arg(long, default_value_t = default_catalog_path())]
    catalog: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage camera bodies: list, add, or remove
    Cameras {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
        #[command(subcommand)]
        action: Option<CamerasAction>,
    },
    /// Manage lenses: list, add, or remove
    Lenses {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
        #[command(subcommand)]
        action: Option<LensesAction>,
    },
    /// Manage lens filters: list, add, or remove
    Filters {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
        #[command(subcommand)]
        action: Option<FiltersAction>,
    },
    /// Mark a gear combination as mountable
    Mount {
        #[command(subcommand)]
        pair: MountPair,
    },
    /// Remove a mountable gear combination
    Unmount {
        #[command(subcommand)]
        pair: MountPair,
    },
    /// Manage film rolls: list, start, archive, or remove
    Rolls {
        /// List archived rolls instead of active ones
        #[arg(long)]
        archived: bool,
        /// List every roll, archived or not
        #[arg(long, conflicts_with = "archived")]
        all: bool,
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
        #[command(subcommand)]
        action: Option<RollsAction>,
    },
    /// Manage the frames of a roll
    Frames {
        #[command(subcommand)]
        action: FramesAction,
    },
    /// Print exiftool commands for a roll's frames
    Export {
        /// Roll ID
        roll_id: i64,
        /// Write the script to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show logbook totals
    Status,
    /// Get or set export defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CamerasAction {
    /// Register a camera body
    Add {
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
        /// Serial number engraved on the body
        #[arg(long)]
        serial: Option<String>,
    },
    /// List the lenses mountable on a camera
    Lenses { id: i64 },
    /// Remove a camera
    Rm { id: i64 },
}

#[derive(Subcommand)]
enum LensesAction {
    /// Register a lens
    Add {
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        serial: Option<String>,
        /// Narrowest stop, e.g. 22
        #[arg(long)]
        min_aperture: Option<String>,
        /// Widest stop, e.g. 1.8
        #[arg(long)]
        max_aperture: Option<String>,
        /// Focal length in mm (fixed lenses: pass the same value twice)
        #[arg(long, default_value_t = 50)]
        min_focal_length: i64,
        #[arg(long, default_value_t = 50)]
        max_focal_length: i64,
    },
    /// List the cameras a lens mounts on
    Cameras { id: i64 },
    /// List the filters mountable on a lens
    Filters { id: i64 },
    /// Remove a lens
    Rm { id: i64 },
}

#[derive(Subcommand)]
enum FiltersAction {
    /// Register a filter
    Add {
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
    },
    /// List the lenses a filter mounts on
    Lenses { id: i64 },
    /// Remove a filter
    Rm { id: i64 },
}

#[derive(Subcommand)]
enum MountPair {
    /// A lens on a camera
    Lens { camera_id: i64, lens_id: i64 },
    /// A filter on a lens
    Filter { lens_id: i64, filter_id: i64 },
}

#[derive(Subcommand)]
enum RollsAction {
    /// Start a new roll
    Add {
        #[arg(long)]
        name: String,
        /// Camera the roll is loaded in
        #[arg(long)]
        camera: Option<i64>,
        #[arg(long)]
        note: Option<String>,
        /// Load date as "YYYY-MM-DD HH:MM" (defaults to now)
        #[arg(long)]
        date: Option<String>,
    },
    /// Archive a developed roll
    Archive { id: i64 },
    /// Bring a roll back from the archive
    Unarchive { id: i64 },
    /// Remove a roll and its frames
    Rm { id: i64 },
}

#[derive(Subcommand)]
enum FramesAction {
    /// List the frames of a roll
    Ls {
        roll_id: i64,
        #[arg(long, value_enum, default_value_t)]
        sort: SortArg,
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Log a frame on a roll
    Add {
        roll_id: i64,
        /// Frame number on the roll
        #[arg(long)]
        count: i64,
        /// Exposure date as "YYYY-MM-DD HH:MM" (defaults to now)
        #[arg(long)]
        date: Option<String>,
        /// Lens ID used for the exposure
        #[arg(long)]
        lens: Option<i64>,
        /// Shutter speed token, e.g. "1/125", "30\"" or "B"
        #[arg(long)]
        shutter: Option<String>,
        /// Aperture token, e.g. "5.6"
        #[arg(long)]
        aperture: Option<String>,
        #[arg(long)]
        note: Option<String>,
        /// GPS position as "<latitude> <longitude>"
        #[arg(long)]
        location: Option<String>,
        /// Human-readable address for the position
        #[arg(long)]
        address: Option<String>,
    },
    /// Remove a frame
    Rm { id: i64 },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show or set the artist written to exports
    Artist { value: Option<String> },
    /// Show or set the copyright written to exports
    Copyright { value: Option<String> },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum SortArg {
    #[default]
    Count,
    Date,
    Aperture,
    Shutter,
}

impl From<SortArg> for FrameSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Count => FrameSort::Count,
            SortArg::Date => FrameSort::Date,
            SortArg::Aperture => FrameSort::Aperture,
            SortArg::Shutter => FrameSort::ShutterSpeed,
        }
    }
}

fn default_catalog_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
        .join(".framelog")
        .join("catalog.db")
        .to_string_lossy()
        .to_string()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog_path = PathBuf::from(&cli.catalog);
    let mut logbook = Logbook::open(&catalog_path)?;

    match cli.command {
        Commands::Cameras { json, action } => match action {
            None => commands::cameras::list(&logbook, json)?,
            Some(CamerasAction::Add {
                make,
                model,
                serial,
            }) => commands::cameras::add(&logbook, make, model, serial)?,
            Some(CamerasAction::Lenses { id }) => commands::cameras::lenses(&logbook, id)?,
            Some(CamerasAction::Rm { id }) => commands::cameras::rm(&mut logbook, id)?,
        },
        Commands::Lenses { json, action } => match action {
            None => commands::lenses::list(&logbook, json)?,
            Some(LensesAction::Add {
                make,
                model,
                serial,
                min_aperture,
                max_aperture,
                min_focal_length,
                max_focal_length,
            }) => commands::lenses::add(
                &logbook,
                make,
                model,
                serial,
                min_aperture,
                max_aperture,
                min_focal_length,
                max_focal_length,
            )?,
            Some(LensesAction::Cameras { id }) => commands::lenses::cameras(&logbook, id)?,
            Some(LensesAction::Filters { id }) => commands::lenses::filters(&logbook, id)?,
            Some(LensesAction::Rm { id }) => commands::lenses::rm(&mut logbook, id)?,
        },
        Commands::Filters { json, action } => match action {
            None => commands::filters::list(&logbook, json)?,
            Some(FiltersAction::Add { make, model }) => {
                commands::filters::add(&logbook, make, model)?
            }
            Some(FiltersAction::Lenses { id }) => commands::filters::lenses(&logbook, id)?,
            Some(FiltersAction::Rm { id }) => commands::filters::rm(&mut logbook, id)?,
        },
        Commands::Mount { pair } => match pair {
            MountPair::Lens { camera_id, lens_id } => {
                commands::mount::mount_lens(&logbook, camera_id, lens_id)?
            }
            MountPair::Filter { lens_id, filter_id } => {
                commands::mount::mount_filter(&logbook, lens_id, filter_id)?
            }
        },
        Commands::Unmount { pair } => match pair {
            MountPair::Lens { camera_id, lens_id } => {
                commands::mount::unmount_lens(&logbook, camera_id, lens_id)?
            }
            MountPair::Filter { lens_id, filter_id } => {
                commands::mount::unmount_filter(&logbook, lens_id, filter_id)?
            }
        },
        Commands::Rolls {
            archived,
            all,
            json,
            action,
        } => match action {
            None => commands::rolls::list(&logbook, archived, all, json)?,
            Some(RollsAction::Add {
                name,
                camera,
                note,
                date,
            }) => commands::rolls::add(&logbook, name, camera, note, date)?,
            Some(RollsAction::Archive { id }) => commands::rolls::archive(&logbook, id, true)?,
            Some(RollsAction::Unarchive { id }) => commands::rolls::archive(&logbook, id, false)?,
            Some(RollsAction::Rm { id }) => commands::rolls::rm(&mut logbook, id)?,
        },
        Commands::Frames { action } => match action {
            FramesAction::Ls {
                roll_id,
                sort,
                json,
            } => commands::frames::list(&logbook, roll_id, sort.into(), json)?,
            FramesAction::Add {
                roll_id,
                count,
                date,
                lens,
                shutter,
                aperture,
                note,
                location,
                address,
            } => commands::frames::add(
                &logbook,
                commands::frames::NewFrame {
                    roll_id,
                    count,
                    date,
                    lens,
                    shutter,
                    aperture,
                    note,
                    location,
                    address,
                },
            )?,
            FramesAction::Rm { id } => commands::frames::rm(&logbook, id)?,
        },
        Commands::Export { roll_id, output } => {
            commands::export::run(&logbook, roll_id, output)?
        }
        Commands::Status => commands::status::run(&logbook)?,
        Commands::Config { action } => match action {
            ConfigAction::Artist { value } => commands::config::artist(&logbook, value)?,
            ConfigAction::Copyright { value } => commands::config::copyright(&logbook, value)?,
        },
    }

    Ok(())
}
