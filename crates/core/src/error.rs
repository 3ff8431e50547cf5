#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("camera not found: {0}")]
    CameraNotFound(i64),

    #[error("lens not found: {0}")]
    LensNotFound(i64),

    #[error("filter not found: {0}")]
    FilterNotFound(i64),

    #[error("roll not found: {0}")]
    RollNotFound(i64),

    #[error("frame not found: {0}")]
    FrameNotFound(i64),

    #[error("camera {0} is referenced by at least one roll")]
    CameraInUse(i64),

    #[error("lens {0} is referenced by at least one frame")]
    LensInUse(i64),

    #[error("invalid location: {0:?} (expected \"<latitude> <longitude>\")")]
    InvalidLocation(String),

    #[error("invalid date: {0:?} (expected \"YYYY-MM-DD HH:MM\")")]
    InvalidDate(String),

    #[error("catalog schema version {db} is newer than this build supports ({code})")]
    SchemaTooNew { db: u32, code: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
