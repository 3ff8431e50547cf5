use anyhow::Result;
use framelog_core::Logbook;

pub fn artist(logbook: &Logbook, value: Option<String>) -> Result<()> {
    match value {
        Some(value) => {
            logbook.set_artist(&value)?;
            println!("Artist set to {value:?}");
        }
        None => match logbook.artist()? {
            Some(artist) => println!("{artist}"),
            None => println!("not configured"),
        },
    }
    Ok(())
}

pub fn copyright(logbook: &Logbook, value: Option<String>) -> Result<()> {
    match value {
        Some(value) => {
            logbook.set_copyright(&value)?;
            println!("Copyright set to {value:?}");
        }
        None => match logbook.copyright()? {
            Some(copyright) => println!("{copyright}"),
            None => println!("not configured"),
        },
    }
    Ok(())
}
