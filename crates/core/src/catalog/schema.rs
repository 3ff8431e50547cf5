use rusqlite::Connection;

use crate::error::{Error, Result};

/// Schema version written by this build.
pub const SCHEMA_VERSION: u32 = 1;

pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS cameras (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            make          TEXT NOT NULL,
            model         TEXT NOT NULL,
            serial_number TEXT
        );

        CREATE TABLE IF NOT EXISTS lenses (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            make             TEXT NOT NULL,
            model            TEXT NOT NULL,
            serial_number    TEXT,
            min_aperture     TEXT,
            max_aperture     TEXT,
            min_focal_length INTEGER NOT NULL,
            max_focal_length INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS filters (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            make  TEXT NOT NULL,
            model TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS rolls (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            name      TEXT NOT NULL,
            date      TEXT NOT NULL,
            note      TEXT,
            camera_id INTEGER REFERENCES cameras(id),
            archived  INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_rolls_camera ON rolls(camera_id);

        CREATE TABLE IF NOT EXISTS frames (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            roll_id           INTEGER NOT NULL REFERENCES rolls(id),
            count             INTEGER NOT NULL,
            date              TEXT,
            lens_id           INTEGER REFERENCES lenses(id),
            shutter_speed     TEXT,
            aperture          TEXT,
            note              TEXT,
            latitude          REAL,
            longitude         REAL,
            formatted_address TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_frames_roll ON frames(roll_id);
        CREATE INDEX IF NOT EXISTS idx_frames_lens ON frames(lens_id);

        CREATE TABLE IF NOT EXISTS camera_lenses (
            camera_id INTEGER NOT NULL REFERENCES cameras(id),
            lens_id   INTEGER NOT NULL REFERENCES lenses(id),
            PRIMARY KEY (camera_id, lens_id)
        );

        CREATE INDEX IF NOT EXISTS idx_camera_lenses_lens ON camera_lenses(lens_id);

        CREATE TABLE IF NOT EXISTS lens_filters (
            lens_id   INTEGER NOT NULL REFERENCES lenses(id),
            filter_id INTEGER NOT NULL REFERENCES filters(id),
            PRIMARY KEY (lens_id, filter_id)
        );

        CREATE INDEX IF NOT EXISTS idx_lens_filters_filter ON lens_filters(filter_id);

        CREATE TABLE IF NOT EXISTS config (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

/// Stamp fresh (or pre-versioning) databases with the current schema version
/// and reject databases written by a newer build.
pub fn migrate(conn: &Connection) -> Result<()> {
    let stored: Option<String> = conn
        .query_row(
            "SELECT value FROM config WHERE key = 'schema_version'",
            [],
            |row| row.get(0),
        )
        .ok();

    match stored {
        None => {
            conn.execute(
                "INSERT INTO config (key, value) VALUES ('schema_version', ?1)",
                [SCHEMA_VERSION.to_string()],
            )?;
            Ok(())
        }
        Some(v) => {
            let db: u32 = v.parse().unwrap_or(0);
            if db > SCHEMA_VERSION {
                return Err(Error::SchemaTooNew {
                    db,
                    code: SCHEMA_VERSION,
                });
            }
            // db == SCHEMA_VERSION: nothing to do. Older versions would be
            // migrated step by step here once version 2 exists.
            Ok(())
        }
    }
}
