use anyhow::Result;
use framelog_core::Logbook;

pub fn run(logbook: &Logbook) -> Result<()> {
    let stats = logbook.status()?;
    let artist = logbook.artist()?;

    println!();
    println!("  Logbook");
    println!("  -------");
    println!("  Cameras  {:>6}", stats.cameras);
    println!("  Lenses   {:>6}", stats.lenses);
    println!("  Filters  {:>6}", stats.filters);
    println!("  Rolls    {:>6}", stats.rolls);
    println!("  Frames   {:>6}", stats.frames);
    println!();
    match artist {
        Some(artist) => println!("  Exports signed as: {artist}"),
        None => println!("  No artist configured — run `framelog config artist <name>`."),
    }
    println!();
    Ok(())
}
