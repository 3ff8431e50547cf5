use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use framelog_core::domain::Filter;
use framelog_core::Logbook;

pub fn add(logbook: &Logbook, make: String, model: String) -> Result<()> {
    let filter = logbook.add_filter(&Filter { id: 0, make, model })?;
    println!("Added filter #{}: {}", filter.id, filter.name());
    Ok(())
}

pub fn list(logbook: &Logbook, json: bool) -> Result<()> {
    let filters = logbook.filters()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&filters)?);
        return Ok(());
    }
    if filters.is_empty() {
        println!("No filters registered. Run `framelog filters add` first.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Make", "Model"]);
    for filter in &filters {
        table.add_row(vec![
            filter.id.to_string(),
            filter.make.clone(),
            filter.model.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn lenses(logbook: &Logbook, id: i64) -> Result<()> {
    let filter = logbook.filter(id)?;
    let lenses = logbook.lenses_for_filter(id)?;

    if lenses.is_empty() {
        println!("No lenses accept {}.", filter.name());
        return Ok(());
    }
    println!("Lenses accepting {}:", filter.name());
    for lens in &lenses {
        println!("  #{} {}", lens.id, lens.name());
    }
    Ok(())
}

pub fn rm(logbook: &mut Logbook, id: i64) -> Result<()> {
    let filter = logbook.filter(id)?;
    logbook.delete_filter(id)?;
    println!("Removed filter #{}: {}", id, filter.name());
    Ok(())
}
