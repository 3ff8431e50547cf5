use anyhow::Result;
use framelog_core::Logbook;

pub fn mount_lens(logbook: &Logbook, camera_id: i64, lens_id: i64) -> Result<()> {
    let camera = logbook.camera(camera_id)?;
    let lens = logbook.lens(lens_id)?;
    logbook.mount_lens(camera_id, lens_id)?;
    println!("{} now mounts on {}.", lens.name(), camera.name());
    Ok(())
}

pub fn unmount_lens(logbook: &Logbook, camera_id: i64, lens_id: i64) -> Result<()> {
    let camera = logbook.camera(camera_id)?;
    let lens = logbook.lens(lens_id)?;
    logbook.unmount_lens(camera_id, lens_id)?;
    println!("{} no longer mounts on {}.", lens.name(), camera.name());
    Ok(())
}

pub fn mount_filter(logbook: &Logbook, lens_id: i64, filter_id: i64) -> Result<()> {
    let lens = logbook.lens(lens_id)?;
    let filter = logbook.filter(filter_id)?;
    logbook.mount_filter(lens_id, filter_id)?;
    println!("{} now mounts on {}.", filter.name(), lens.name());
    Ok(())
}

pub fn unmount_filter(logbook: &Logbook, lens_id: i64, filter_id: i64) -> Result<()> {
    let lens = logbook.lens(lens_id)?;
    let filter = logbook.filter(filter_id)?;
    logbook.unmount_filter(lens_id, filter_id)?;
    println!("{} no longer mounts on {}.", filter.name(), lens.name());
    Ok(())
}
