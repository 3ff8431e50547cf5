use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use framelog_core::domain::Camera;
use framelog_core::Logbook;

pub fn add(logbook: &Logbook, make: String, model: String, serial: Option<String>) -> Result<()> {
    let camera = logbook.add_camera(&Camera {
        id: 0,
        make,
        model,
        serial_number: serial,
    })?;
    println!("Added camera #{}: {}", camera.id, camera.name());
    Ok(())
}

pub fn list(logbook: &Logbook, json: bool) -> Result<()> {
    let cameras = logbook.cameras()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&cameras)?);
        return Ok(());
    }
    if cameras.is_empty() {
        println!("No cameras registered. Run `framelog cameras add` first.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Make", "Model", "Serial"]);
    for camera in &cameras {
        table.add_row(vec![
            camera.id.to_string(),
            camera.make.clone(),
            camera.model.clone(),
            camera.serial_number.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn lenses(logbook: &Logbook, id: i64) -> Result<()> {
    let camera = logbook.camera(id)?;
    let lenses = logbook.mountable_lenses(id)?;

    if lenses.is_empty() {
        println!("No lenses mountable on {}.", camera.name());
        return Ok(());
    }
    println!("Lenses mountable on {}:", camera.name());
    for lens in &lenses {
        println!("  #{} {}", lens.id, lens.name());
    }
    Ok(())
}

pub fn rm(logbook: &mut Logbook, id: i64) -> Result<()> {
    let camera = logbook.camera(id)?;
    logbook.delete_camera(id)?;
    println!("Removed camera #{}: {}", id, camera.name());
    Ok(())
}
