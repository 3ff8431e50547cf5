pub mod schema;

use std::path::Path;

use rusqlite::{params, Connection, Row};

use crate::domain::*;
use crate::error::{Error, Result};

/// SQLite-backed catalog for gear, rolls and frames.
///
/// Every statement uses bound parameters, absent rows surface as typed
/// NotFound errors, and multi-statement deletes run inside a transaction.
pub struct Catalog {
    conn: Connection,
}

impl Catalog {
    /// Open or create a catalog at the given path with WAL mode.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        schema::initialize(&conn)?;
        schema::migrate(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory catalog (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        schema::initialize(&conn)?;
        schema::migrate(&conn)?;
        Ok(Self { conn })
    }

    // ── Cameras ──────────────────────────────────────────────────────

    /// Insert a camera and return its generated id.
    pub fn add_camera(&self, camera: &Camera) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO cameras (make, model, serial_number) VALUES (?1, ?2, ?3)",
            params![camera.make, camera.model, camera.serial_number],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_camera(&self, id: i64) -> Result<Camera> {
        match self.conn.query_row(
            "SELECT id, make, model, serial_number FROM cameras WHERE id = ?1",
            params![id],
            map_camera,
        ) {
            Ok(camera) => Ok(camera),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::CameraNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list_cameras(&self) -> Result<Vec<Camera>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, make, model, serial_number FROM cameras
             ORDER BY make COLLATE NOCASE, model COLLATE NOCASE",
        )?;
        let cameras = stmt
            .query_map([], map_camera)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(cameras)
    }

    /// Overwrite all mutable fields of the camera with the given id.
    /// Silently a no-op when the id does not exist.
    pub fn update_camera(&self, camera: &Camera) -> Result<()> {
        self.conn.execute(
            "UPDATE cameras SET make = ?1, model = ?2, serial_number = ?3 WHERE id = ?4",
            params![camera.make, camera.model, camera.serial_number, camera.id],
        )?;
        Ok(())
    }

    /// Delete a camera and its camera↔lens rows in one transaction.
    /// Rejected while any roll references the camera.
    pub fn delete_camera(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        let in_use: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM rolls WHERE camera_id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        if in_use {
            return Err(Error::CameraInUse(id));
        }
        tx.execute(
            "DELETE FROM camera_lenses WHERE camera_id = ?1",
            params![id],
        )?;
        tx.execute("DELETE FROM cameras WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(())
    }

    /// True iff at least one roll references this camera.
    pub fn camera_in_use(&self, id: i64) -> Result<bool> {
        let in_use = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM rolls WHERE camera_id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(in_use)
    }

    // ── Lenses ───────────────────────────────────────────────────────

    pub fn add_lens(&self, lens: &Lens) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO lenses (make, model, serial_number, min_aperture, max_aperture,
             min_focal_length, max_focal_length)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                lens.make,
                lens.model,
                lens.serial_number,
                lens.min_aperture,
                lens.max_aperture,
                lens.min_focal_length,
                lens.max_focal_length,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_lens(&self, id: i64) -> Result<Lens> {
        match self.conn.query_row(
            "SELECT id, make, model, serial_number, min_aperture, max_aperture,
             min_focal_length, max_focal_length
             FROM lenses WHERE id = ?1",
            params![id],
            map_lens,
        ) {
            Ok(lens) => Ok(lens),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::LensNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list_lenses(&self) -> Result<Vec<Lens>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, make, model, serial_number, min_aperture, max_aperture,
             min_focal_length, max_focal_length
             FROM lenses
             ORDER BY make COLLATE NOCASE, model COLLATE NOCASE",
        )?;
        let lenses = stmt
            .query_map([], map_lens)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(lenses)
    }

    pub fn update_lens(&self, lens: &Lens) -> Result<()> {
        self.conn.execute(
            "UPDATE lenses SET make = ?1, model = ?2, serial_number = ?3, min_aperture = ?4,
             max_aperture = ?5, min_focal_length = ?6, max_focal_length = ?7
             WHERE id = ?8",
            params![
                lens.make,
                lens.model,
                lens.serial_number,
                lens.min_aperture,
                lens.max_aperture,
                lens.min_focal_length,
                lens.max_focal_length,
                lens.id,
            ],
        )?;
        Ok(())
    }

    /// Delete a lens and its join rows (both camera↔lens and lens↔filter)
    /// in one transaction. Rejected while any frame references the lens.
    pub fn delete_lens(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        let in_use: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM frames WHERE lens_id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        if in_use {
            return Err(Error::LensInUse(id));
        }
        tx.execute("DELETE FROM camera_lenses WHERE lens_id = ?1", params![id])?;
        tx.execute("DELETE FROM lens_filters WHERE lens_id = ?1", params![id])?;
        tx.execute("DELETE FROM lenses WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(())
    }

    /// True iff at least one frame references this lens.
    pub fn lens_in_use(&self, id: i64) -> Result<bool> {
        let in_use = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM frames WHERE lens_id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(in_use)
    }

    // ── Filters ──────────────────────────────────────────────────────

    pub fn add_filter(&self, filter: &Filter) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO filters (make, model) VALUES (?1, ?2)",
            params![filter.make, filter.model],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_filter(&self, id: i64) -> Result<Filter> {
        match self.conn.query_row(
            "SELECT id, make, model FROM filters WHERE id = ?1",
            params![id],
            map_filter,
        ) {
            Ok(filter) => Ok(filter),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::FilterNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list_filters(&self) -> Result<Vec<Filter>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, make, model FROM filters
             ORDER BY make COLLATE NOCASE, model COLLATE NOCASE",
        )?;
        let filters = stmt
            .query_map([], map_filter)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(filters)
    }

    pub fn update_filter(&self, filter: &Filter) -> Result<()> {
        self.conn.execute(
            "UPDATE filters SET make = ?1, model = ?2 WHERE id = ?3",
            params![filter.make, filter.model, filter.id],
        )?;
        Ok(())
    }

    /// Delete a filter and its lens↔filter rows in one transaction.
    pub fn delete_filter(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM lens_filters WHERE filter_id = ?1", params![id])?;
        tx.execute("DELETE FROM filters WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(())
    }

    // ── Rolls ────────────────────────────────────────────────────────

    pub fn add_roll(&self, roll: &Roll) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO rolls (name, date, note, camera_id, archived)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![roll.name, roll.date, roll.note, roll.camera_id, roll.archived],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_roll(&self, id: i64) -> Result<Roll> {
        match self.conn.query_row(
            "SELECT id, name, date, note, camera_id, archived FROM rolls WHERE id = ?1",
            params![id],
            map_roll,
        ) {
            Ok(roll) => Ok(roll),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::RollNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// List rolls newest first.
    pub fn list_rolls(&self, filter: RollFilter) -> Result<Vec<Roll>> {
        let sql = match filter {
            RollFilter::Active => {
                "SELECT id, name, date, note, camera_id, archived FROM rolls
                 WHERE archived = 0 ORDER BY date DESC, id DESC"
            }
            RollFilter::Archived => {
                "SELECT id, name, date, note, camera_id, archived FROM rolls
                 WHERE archived = 1 ORDER BY date DESC, id DESC"
            }
            RollFilter::All => {
                "SELECT id, name, date, note, camera_id, archived FROM rolls
                 ORDER BY date DESC, id DESC"
            }
        };
        let mut stmt = self.conn.prepare(sql)?;
        let rolls = stmt
            .query_map([], map_roll)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rolls)
    }

    pub fn update_roll(&self, roll: &Roll) -> Result<()> {
        self.conn.execute(
            "UPDATE rolls SET name = ?1, date = ?2, note = ?3, camera_id = ?4, archived = ?5
             WHERE id = ?6",
            params![
                roll.name,
                roll.date,
                roll.note,
                roll.camera_id,
                roll.archived,
                roll.id,
            ],
        )?;
        Ok(())
    }

    /// Delete a roll and all of its frames in one transaction.
    /// Returns the number of frames removed.
    pub fn delete_roll(&mut self, id: i64) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let frames = tx.execute("DELETE FROM frames WHERE roll_id = ?1", params![id])?;
        tx.execute("DELETE FROM rolls WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(frames)
    }

    // ── Frames ───────────────────────────────────────────────────────

    pub fn add_frame(&self, frame: &Frame) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO frames (roll_id, count, date, lens_id, shutter_speed, aperture,
             note, latitude, longitude, formatted_address)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                frame.roll_id,
                frame.count,
                frame.date,
                frame.lens_id,
                frame.shutter_speed,
                frame.aperture,
                frame.note,
                frame.location.map(|p| p.latitude),
                frame.location.map(|p| p.longitude),
                frame.formatted_address,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_frame(&self, id: i64) -> Result<Frame> {
        match self.conn.query_row(
            "SELECT id, roll_id, count, date, lens_id, shutter_speed, aperture, note,
             latitude, longitude, formatted_address
             FROM frames WHERE id = ?1",
            params![id],
            map_frame,
        ) {
            Ok(frame) => Ok(frame),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::FrameNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// List the frames of a roll, ordered by frame count ascending.
    pub fn list_frames(&self, roll_id: i64) -> Result<Vec<Frame>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, roll_id, count, date, lens_id, shutter_speed, aperture, note,
             latitude, longitude, formatted_address
             FROM frames WHERE roll_id = ?1
             ORDER BY count ASC, id ASC",
        )?;
        let frames = stmt
            .query_map(params![roll_id], map_frame)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(frames)
    }

    pub fn update_frame(&self, frame: &Frame) -> Result<()> {
        self.conn.execute(
            "UPDATE frames SET roll_id = ?1, count = ?2, date = ?3, lens_id = ?4,
             shutter_speed = ?5, aperture = ?6, note = ?7, latitude = ?8, longitude = ?9,
             formatted_address = ?10
             WHERE id = ?11",
            params![
                frame.roll_id,
                frame.count,
                frame.date,
                frame.lens_id,
                frame.shutter_speed,
                frame.aperture,
                frame.note,
                frame.location.map(|p| p.latitude),
                frame.location.map(|p| p.longitude),
                frame.formatted_address,
                frame.id,
            ],
        )?;
        Ok(())
    }

    pub fn delete_frame(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM frames WHERE id = ?1", params![id])?;
        Ok(())
    }

    /// Delete every frame of a roll. Returns the number of rows removed.
    pub fn delete_frames(&self, roll_id: i64) -> Result<usize> {
        let deleted = self
            .conn
            .execute("DELETE FROM frames WHERE roll_id = ?1", params![roll_id])?;
        Ok(deleted)
    }

    // ── Mountable relations ──────────────────────────────────────────

    /// Record that a lens mounts on a camera. Adding an existing pair is a
    /// no-op.
    pub fn add_camera_lens(&self, camera_id: i64, lens_id: i64) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO camera_lenses (camera_id, lens_id) VALUES (?1, ?2)",
            params![camera_id, lens_id],
        )?;
        Ok(())
    }

    pub fn remove_camera_lens(&self, camera_id: i64, lens_id: i64) -> Result<()> {
        self.conn.execute(
            "DELETE FROM camera_lenses WHERE camera_id = ?1 AND lens_id = ?2",
            params![camera_id, lens_id],
        )?;
        Ok(())
    }

    /// Record that a filter mounts on a lens. Adding an existing pair is a
    /// no-op.
    pub fn add_lens_filter(&self, lens_id: i64, filter_id: i64) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO lens_filters (lens_id, filter_id) VALUES (?1, ?2)",
            params![lens_id, filter_id],
        )?;
        Ok(())
    }

    pub fn remove_lens_filter(&self, lens_id: i64, filter_id: i64) -> Result<()> {
        self.conn.execute(
            "DELETE FROM lens_filters WHERE lens_id = ?1 AND filter_id = ?2",
            params![lens_id, filter_id],
        )?;
        Ok(())
    }

    pub fn mountable_lenses(&self, camera_id: i64) -> Result<Vec<Lens>> {
        let mut stmt = self.conn.prepare(
            "SELECT l.id, l.make, l.model, l.serial_number, l.min_aperture, l.max_aperture,
             l.min_focal_length, l.max_focal_length
             FROM lenses l
             JOIN camera_lenses cl ON cl.lens_id = l.id
             WHERE cl.camera_id = ?1
             ORDER BY l.make COLLATE NOCASE, l.model COLLATE NOCASE",
        )?;
        let lenses = stmt
            .query_map(params![camera_id], map_lens)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(lenses)
    }

    pub fn mountable_cameras(&self, lens_id: i64) -> Result<Vec<Camera>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.id, c.make, c.model, c.serial_number
             FROM cameras c
             JOIN camera_lenses cl ON cl.camera_id = c.id
             WHERE cl.lens_id = ?1
             ORDER BY c.make COLLATE NOCASE, c.model COLLATE NOCASE",
        )?;
        let cameras = stmt
            .query_map(params![lens_id], map_camera)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(cameras)
    }

    pub fn mountable_filters(&self, lens_id: i64) -> Result<Vec<Filter>> {
        let mut stmt = self.conn.prepare(
            "SELECT f.id, f.make, f.model
             FROM filters f
             JOIN lens_filters lf ON lf.filter_id = f.id
             WHERE lf.lens_id = ?1
             ORDER BY f.make COLLATE NOCASE, f.model COLLATE NOCASE",
        )?;
        let filters = stmt
            .query_map(params![lens_id], map_filter)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(filters)
    }

    pub fn lenses_for_filter(&self, filter_id: i64) -> Result<Vec<Lens>> {
        let mut stmt = self.conn.prepare(
            "SELECT l.id, l.make, l.model, l.serial_number, l.min_aperture, l.max_aperture,
             l.min_focal_length, l.max_focal_length
             FROM lenses l
             JOIN lens_filters lf ON lf.lens_id = l.id
             WHERE lf.filter_id = ?1
             ORDER BY l.make COLLATE NOCASE, l.model COLLATE NOCASE",
        )?;
        let lenses = stmt
            .query_map(params![filter_id], map_lens)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(lenses)
    }

    // ── Config ───────────────────────────────────────────────────────

    pub fn set_config(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn get_config(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM config WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .ok();
        Ok(value)
    }

    // ── Stats ────────────────────────────────────────────────────────

    /// Get all catalog counts in a single query for the status dashboard.
    pub fn stats_summary(&self) -> Result<CatalogStats> {
        let stats = self.conn.query_row(
            "SELECT
                (SELECT COUNT(*) FROM cameras),
                (SELECT COUNT(*) FROM lenses),
                (SELECT COUNT(*) FROM filters),
                (SELECT COUNT(*) FROM rolls),
                (SELECT COUNT(*) FROM frames)",
            [],
            |row| {
                Ok(CatalogStats {
                    cameras: row.get::<_, i64>(0)? as usize,
                    lenses: row.get::<_, i64>(1)? as usize,
                    filters: row.get::<_, i64>(2)? as usize,
                    rolls: row.get::<_, i64>(3)? as usize,
                    frames: row.get::<_, i64>(4)? as usize,
                })
            },
        )?;
        Ok(stats)
    }
}

fn map_camera(row: &Row<'_>) -> rusqlite::Result<Camera> {
    Ok(Camera {
        id: row.get(0)?,
        make: row.get(1)?,
        model: row.get(2)?,
        serial_number: row.get(3)?,
    })
}

fn map_lens(row: &Row<'_>) -> rusqlite::Result<Lens> {
    Ok(Lens {
        id: row.get(0)?,
        make: row.get(1)?,
        model: row.get(2)?,
        serial_number: row.get(3)?,
        min_aperture: row.get(4)?,
        max_aperture: row.get(5)?,
        min_focal_length: row.get(6)?,
        max_focal_length: row.get(7)?,
    })
}

fn map_filter(row: &Row<'_>) -> rusqlite::Result<Filter> {
    Ok(Filter {
        id: row.get(0)?,
        make: row.get(1)?,
        model: row.get(2)?,
    })
}

fn map_roll(row: &Row<'_>) -> rusqlite::Result<Roll> {
    Ok(Roll {
        id: row.get(0)?,
        name: row.get(1)?,
        date: row.get(2)?,
        note: row.get(3)?,
        camera_id: row.get(4)?,
        archived: row.get(5)?,
    })
}

fn map_frame(row: &Row<'_>) -> rusqlite::Result<Frame> {
    let latitude: Option<f64> = row.get(8)?;
    let longitude: Option<f64> = row.get(9)?;
    let location = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint {
            latitude,
            longitude,
        }),
        _ => None,
    };
    Ok(Frame {
        id: row.get(0)?,
        roll_id: row.get(1)?,
        count: row.get(2)?,
        date: row.get(3)?,
        lens_id: row.get(4)?,
        shutter_speed: row.get(5)?,
        aperture: row.get(6)?,
        note: row.get(7)?,
        location,
        formatted_address: row.get(10)?,
    })
}
