use std::collections::HashMap;

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use framelog_core::domain::{format_datetime, parse_datetime, Roll, RollFilter};
use framelog_core::Logbook;

pub fn add(
    logbook: &Logbook,
    name: String,
    camera: Option<i64>,
    note: Option<String>,
    date: Option<String>,
) -> Result<()> {
    // Reject a bad camera id up front rather than failing on the FK.
    if let Some(camera_id) = camera {
        logbook.camera(camera_id)?;
    }
    let date = match date {
        Some(s) => parse_datetime(&s)?,
        None => now(),
    };
    let roll = logbook.add_roll(&Roll {
        id: 0,
        name,
        date,
        note,
        camera_id: camera,
        archived: false,
    })?;
    println!("Started roll #{}: {}", roll.id, roll.name);
    Ok(())
}

pub fn list(logbook: &Logbook, archived: bool, all: bool, json: bool) -> Result<()> {
    let filter = if all {
        RollFilter::All
    } else if archived {
        RollFilter::Archived
    } else {
        RollFilter::Active
    };
    let rolls = logbook.rolls(filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rolls)?);
        return Ok(());
    }
    if rolls.is_empty() {
        println!("No rolls found. Run `framelog rolls add` first.");
        return Ok(());
    }

    let camera_names: HashMap<i64, String> = logbook
        .cameras()?
        .into_iter()
        .map(|c| (c.id, c.name()))
        .collect();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Date", "Camera", "Frames", "Archived"]);
    for roll in &rolls {
        let camera = roll
            .camera_id
            .and_then(|id| camera_names.get(&id).cloned())
            .unwrap_or_default();
        let frames = logbook.frames(roll.id)?.len();
        table.add_row(vec![
            roll.id.to_string(),
            roll.name.clone(),
            format_datetime(roll.date),
            camera,
            frames.to_string(),
            if roll.archived { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn archive(logbook: &Logbook, id: i64, archived: bool) -> Result<()> {
    let roll = logbook.roll(id)?;
    logbook.archive_roll(id, archived)?;
    if archived {
        println!("Archived roll #{}: {}", id, roll.name);
    } else {
        println!("Unarchived roll #{}: {}", id, roll.name);
    }
    Ok(())
}

pub fn rm(logbook: &mut Logbook, id: i64) -> Result<()> {
    let roll = logbook.roll(id)?;
    let frames = logbook.delete_roll(id)?;
    println!("Removed roll #{}: {} ({} frames removed)", id, roll.name, frames);
    Ok(())
}

fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}
