pub mod cameras;
pub mod config;
pub mod export;
pub mod filters;
pub mod frames;
pub mod lenses;
pub mod mount;
pub mod rolls;
pub mod status;
