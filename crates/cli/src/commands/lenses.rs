use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use framelog_core::domain::Lens;
use framelog_core::Logbook;

#[allow(clippy::too_many_arguments)]
pub fn add(
    logbook: &Logbook,
    make: String,
    model: String,
    serial: Option<String>,
    min_aperture: Option<String>,
    max_aperture: Option<String>,
    min_focal_length: i64,
    max_focal_length: i64,
) -> Result<()> {
    let lens = logbook.add_lens(&Lens {
        id: 0,
        make,
        model,
        serial_number: serial,
        min_aperture,
        max_aperture,
        min_focal_length,
        max_focal_length,
    })?;
    println!("Added lens #{}: {}", lens.id, lens.name());
    Ok(())
}

pub fn list(logbook: &Logbook, json: bool) -> Result<()> {
    let lenses = logbook.lenses()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lenses)?);
        return Ok(());
    }
    if lenses.is_empty() {
        println!("No lenses registered. Run `framelog lenses add` first.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Make", "Model", "Apertures", "Focal length"]);
    for lens in &lenses {
        let apertures = match (&lens.max_aperture, &lens.min_aperture) {
            (Some(max), Some(min)) => format!("f/{max}–f/{min}"),
            (Some(max), None) => format!("f/{max}"),
            _ => String::new(),
        };
        let focal = if lens.min_focal_length == lens.max_focal_length {
            format!("{}mm", lens.min_focal_length)
        } else {
            format!("{}-{}mm", lens.min_focal_length, lens.max_focal_length)
        };
        table.add_row(vec![
            lens.id.to_string(),
            lens.make.clone(),
            lens.model.clone(),
            apertures,
            focal,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn cameras(logbook: &Logbook, id: i64) -> Result<()> {
    let lens = logbook.lens(id)?;
    let cameras = logbook.mountable_cameras(id)?;

    if cameras.is_empty() {
        println!("No cameras accept {}.", lens.name());
        return Ok(());
    }
    println!("Cameras accepting {}:", lens.name());
    for camera in &cameras {
        println!("  #{} {}", camera.id, camera.name());
    }
    Ok(())
}

pub fn filters(logbook: &Logbook, id: i64) -> Result<()> {
    let lens = logbook.lens(id)?;
    let filters = logbook.mountable_filters(id)?;

    if filters.is_empty() {
        println!("No filters mountable on {}.", lens.name());
        return Ok(());
    }
    println!("Filters mountable on {}:", lens.name());
    for filter in &filters {
        println!("  #{} {}", filter.id, filter.name());
    }
    Ok(())
}

pub fn rm(logbook: &mut Logbook, id: i64) -> Result<()> {
    let lens = logbook.lens(id)?;
    logbook.delete_lens(id)?;
    println!("Removed lens #{}: {}", id, lens.name());
    Ok(())
}
