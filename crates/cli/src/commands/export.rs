use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use framelog_core::Logbook;

pub fn run(logbook: &Logbook, roll_id: i64, output: Option<PathBuf>) -> Result<()> {
    let script = logbook.export_roll(roll_id)?;

    match output {
        Some(path) => {
            fs::write(&path, &script)?;
            let frames = script.matches("exiftool").count();
            println!("Wrote {} exiftool commands to {}", frames, path.display());
        }
        None => print!("{script}"),
    }
    Ok(())
}
