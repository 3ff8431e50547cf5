use std::collections::HashMap;

use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use framelog_core::domain::{
    format_datetime, parse_datetime, Frame, GeoPoint, APERTURE_VALUES, SHUTTER_SPEED_VALUES,
};
use framelog_core::sorting::{sort_frames, FrameSort};
use framelog_core::Logbook;

pub struct NewFrame {
    pub roll_id: i64,
    pub count: i64,
    pub date: Option<String>,
    pub lens: Option<i64>,
    pub shutter: Option<String>,
    pub aperture: Option<String>,
    pub note: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
}

pub fn add(logbook: &Logbook, new: NewFrame) -> Result<()> {
    logbook.roll(new.roll_id)?;
    if let Some(lens_id) = new.lens {
        logbook.lens(lens_id)?;
    }
    if let Some(token) = new.shutter.as_deref() {
        if !SHUTTER_SPEED_VALUES.contains(&token) {
            bail!("unknown shutter speed token {token:?}");
        }
    }
    if let Some(token) = new.aperture.as_deref() {
        if !APERTURE_VALUES.contains(&token) {
            bail!("unknown aperture token {token:?}");
        }
    }
    let date = match new.date {
        Some(s) => Some(parse_datetime(&s)?),
        None => Some(chrono::Local::now().naive_local()),
    };
    let location = match new.location {
        Some(s) => Some(s.parse::<GeoPoint>()?),
        None => None,
    };

    let frame = logbook.add_frame(&Frame {
        id: 0,
        roll_id: new.roll_id,
        count: new.count,
        date,
        lens_id: new.lens,
        shutter_speed: new.shutter,
        aperture: new.aperture,
        note: new.note,
        location,
        formatted_address: new.address,
    })?;
    println!("Logged frame #{} on roll #{}", frame.count, frame.roll_id);
    Ok(())
}

pub fn list(logbook: &Logbook, roll_id: i64, sort: FrameSort, json: bool) -> Result<()> {
    let roll = logbook.roll(roll_id)?;
    let mut frames = logbook.frames(roll_id)?;
    sort_frames(&mut frames, sort);

    if json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
        return Ok(());
    }
    if frames.is_empty() {
        println!("No frames logged on {}.", roll.name);
        return Ok(());
    }

    let lens_names: HashMap<i64, String> = logbook
        .lenses()?
        .into_iter()
        .map(|l| (l.id, l.name()))
        .collect();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "#", "Date", "Lens", "Shutter", "Aperture", "Location", "Note",
    ]);
    for frame in &frames {
        let lens = frame
            .lens_id
            .and_then(|id| lens_names.get(&id).cloned())
            .unwrap_or_default();
        let location = match (&frame.location, &frame.formatted_address) {
            (_, Some(address)) => address.clone(),
            (Some(point), None) => point.to_string(),
            (None, None) => String::new(),
        };
        table.add_row(vec![
            frame.count.to_string(),
            frame.date.map(format_datetime).unwrap_or_default(),
            lens,
            frame.shutter_speed.clone().unwrap_or_default(),
            frame
                .aperture
                .as_deref()
                .map(|a| format!("f/{a}"))
                .unwrap_or_default(),
            location,
            frame.note.clone().unwrap_or_default(),
        ]);
    }
    println!();
    println!("  {} — {} frames", roll.name, frames.len());
    println!("{table}");
    Ok(())
}

pub fn rm(logbook: &Logbook, id: i64) -> Result<()> {
    let frame = logbook.frame(id)?;
    logbook.delete_frame(id)?;
    println!("Removed frame #{} from roll #{}", frame.count, frame.roll_id);
    Ok(())
}
