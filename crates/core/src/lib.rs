pub mod catalog;
pub mod domain;
pub mod error;
pub mod exiftool;
pub mod sorting;

use std::collections::HashMap;
use std::path::Path;

use catalog::Catalog;
use domain::*;
use error::Result;
use exiftool::ExportOptions;

/// The main entry point for the framelog library.
///
/// A `Logbook` owns one catalog handle; callers construct it once and pass
/// it to whatever needs it.
pub struct Logbook {
    catalog: Catalog,
}

impl Logbook {
    /// Open or create a logbook backed by the database at the given path.
    pub fn open(catalog_path: &Path) -> Result<Self> {
        let catalog = Catalog::open(catalog_path)?;
        Ok(Self { catalog })
    }

    /// Open an in-memory logbook (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let catalog = Catalog::open_in_memory()?;
        Ok(Self { catalog })
    }

    // ── Cameras ──────────────────────────────────────────────────────

    /// Register a camera and return it with its generated id.
    pub fn add_camera(&self, camera: &Camera) -> Result<Camera> {
        let id = self.catalog.add_camera(camera)?;
        self.catalog.get_camera(id)
    }

    pub fn camera(&self, id: i64) -> Result<Camera> {
        self.catalog.get_camera(id)
    }

    pub fn cameras(&self) -> Result<Vec<Camera>> {
        self.catalog.list_cameras()
    }

    pub fn update_camera(&self, camera: &Camera) -> Result<()> {
        self.catalog.update_camera(camera)
    }

    /// Remove a camera. Rejected while any roll references it.
    pub fn delete_camera(&mut self, id: i64) -> Result<()> {
        self.catalog.delete_camera(id)
    }

    pub fn camera_in_use(&self, id: i64) -> Result<bool> {
        self.catalog.camera_in_use(id)
    }

    // ── Lenses ───────────────────────────────────────────────────────

    /// Register a lens and return it with its generated id.
    pub fn add_lens(&self, lens: &Lens) -> Result<Lens> {
        let id = self.catalog.add_lens(lens)?;
        self.catalog.get_lens(id)
    }

    pub fn lens(&self, id: i64) -> Result<Lens> {
        self.catalog.get_lens(id)
    }

    pub fn lenses(&self) -> Result<Vec<Lens>> {
        self.catalog.list_lenses()
    }

    pub fn update_lens(&self, lens: &Lens) -> Result<()> {
        self.catalog.update_lens(lens)
    }

    /// Remove a lens. Rejected while any frame references it.
    pub fn delete_lens(&mut self, id: i64) -> Result<()> {
        self.catalog.delete_lens(id)
    }

    pub fn lens_in_use(&self, id: i64) -> Result<bool> {
        self.catalog.lens_in_use(id)
    }

    // ── Filters ──────────────────────────────────────────────────────

    /// Register a filter and return it with its generated id.
    pub fn add_filter(&self, filter: &Filter) -> Result<Filter> {
        let id = self.catalog.add_filter(filter)?;
        self.catalog.get_filter(id)
    }

    pub fn filter(&self, id: i64) -> Result<Filter> {
        self.catalog.get_filter(id)
    }

    pub fn filters(&self) -> Result<Vec<Filter>> {
        self.catalog.list_filters()
    }

    pub fn update_filter(&self, filter: &Filter) -> Result<()> {
        self.catalog.update_filter(filter)
    }

    pub fn delete_filter(&mut self, id: i64) -> Result<()> {
        self.catalog.delete_filter(id)
    }

    // ── Mountability ─────────────────────────────────────────────────

    /// Mark a lens as mountable on a camera. Already-mounted pairs are a
    /// no-op.
    pub fn mount_lens(&self, camera_id: i64, lens_id: i64) -> Result<()> {
        self.catalog.add_camera_lens(camera_id, lens_id)
    }

    pub fn unmount_lens(&self, camera_id: i64, lens_id: i64) -> Result<()> {
        self.catalog.remove_camera_lens(camera_id, lens_id)
    }

    /// Mark a filter as mountable on a lens. Already-mounted pairs are a
    /// no-op.
    pub fn mount_filter(&self, lens_id: i64, filter_id: i64) -> Result<()> {
        self.catalog.add_lens_filter(lens_id, filter_id)
    }

    pub fn unmount_filter(&self, lens_id: i64, filter_id: i64) -> Result<()> {
        self.catalog.remove_lens_filter(lens_id, filter_id)
    }

    pub fn mountable_lenses(&self, camera_id: i64) -> Result<Vec<Lens>> {
        self.catalog.mountable_lenses(camera_id)
    }

    pub fn mountable_cameras(&self, lens_id: i64) -> Result<Vec<Camera>> {
        self.catalog.mountable_cameras(lens_id)
    }

    pub fn mountable_filters(&self, lens_id: i64) -> Result<Vec<Filter>> {
        self.catalog.mountable_filters(lens_id)
    }

    pub fn lenses_for_filter(&self, filter_id: i64) -> Result<Vec<Lens>> {
        self.catalog.lenses_for_filter(filter_id)
    }

    // ── Rolls ────────────────────────────────────────────────────────

    /// Start a roll and return it with its generated id.
    pub fn add_roll(&self, roll: &Roll) -> Result<Roll> {
        let id = self.catalog.add_roll(roll)?;
        self.catalog.get_roll(id)
    }

    pub fn roll(&self, id: i64) -> Result<Roll> {
        self.catalog.get_roll(id)
    }

    pub fn rolls(&self, filter: RollFilter) -> Result<Vec<Roll>> {
        self.catalog.list_rolls(filter)
    }

    pub fn update_roll(&self, roll: &Roll) -> Result<()> {
        self.catalog.update_roll(roll)
    }

    /// Archive or unarchive a roll.
    pub fn archive_roll(&self, id: i64, archived: bool) -> Result<()> {
        let mut roll = self.catalog.get_roll(id)?;
        roll.archived = archived;
        self.catalog.update_roll(&roll)
    }

    /// Remove a roll and all of its frames. Returns the number of frames
    /// removed.
    pub fn delete_roll(&mut self, id: i64) -> Result<usize> {
        self.catalog.delete_roll(id)
    }

    // ── Frames ───────────────────────────────────────────────────────

    /// Log a frame and return it with its generated id.
    pub fn add_frame(&self, frame: &Frame) -> Result<Frame> {
        let id = self.catalog.add_frame(frame)?;
        self.catalog.get_frame(id)
    }

    pub fn frame(&self, id: i64) -> Result<Frame> {
        self.catalog.get_frame(id)
    }

    /// The frames of a roll, ordered by frame count.
    pub fn frames(&self, roll_id: i64) -> Result<Vec<Frame>> {
        self.catalog.list_frames(roll_id)
    }

    pub fn update_frame(&self, frame: &Frame) -> Result<()> {
        self.catalog.update_frame(frame)
    }

    pub fn delete_frame(&self, id: i64) -> Result<()> {
        self.catalog.delete_frame(id)
    }

    pub fn delete_frames(&self, roll_id: i64) -> Result<usize> {
        self.catalog.delete_frames(roll_id)
    }

    // ── Settings ─────────────────────────────────────────────────────

    pub fn set_artist(&self, artist: &str) -> Result<()> {
        self.catalog.set_config("artist", artist)
    }

    pub fn artist(&self) -> Result<Option<String>> {
        self.catalog.get_config("artist")
    }

    pub fn set_copyright(&self, copyright: &str) -> Result<()> {
        self.catalog.set_config("copyright", copyright)
    }

    pub fn copyright(&self) -> Result<Option<String>> {
        self.catalog.get_config("copyright")
    }

    // ── Reports ──────────────────────────────────────────────────────

    /// Get all catalog counts in a single query for the status dashboard.
    pub fn status(&self) -> Result<CatalogStats> {
        self.catalog.stats_summary()
    }

    /// Render a roll's frames as an exiftool command script.
    pub fn export_roll(&self, roll_id: i64) -> Result<String> {
        let roll = self.catalog.get_roll(roll_id)?;
        let camera = match roll.camera_id {
            Some(id) => Some(self.catalog.get_camera(id)?),
            None => None,
        };
        let frames = self.catalog.list_frames(roll_id)?;
        let lenses: HashMap<i64, Lens> = self
            .catalog
            .list_lenses()?
            .into_iter()
            .map(|l| (l.id, l))
            .collect();
        let opts = ExportOptions {
            artist: self.catalog.get_config("artist")?,
            copyright: self.catalog.get_config("copyright")?,
        };
        Ok(exiftool::build_commands(
            &roll,
            camera.as_ref(),
            &frames,
            &lenses,
            &opts,
        ))
    }
}
