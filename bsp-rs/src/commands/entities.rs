//! Entity lump dump

use anyhow::{Context, Result};
use console::style;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use source_bsp::{LumpDirectory, LumpIndex, parse_entities};

pub fn execute(path: PathBuf, classname: Option<String>) -> Result<()> {
    let file =
        File::open(&path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let directory = LumpDirectory::read(&mut reader)
        .with_context(|| format!("Failed to read lump directory: {}", path.display()))?;
    let data = directory
        .read_lump(&mut reader, LumpIndex::ENTITIES)
        .context("Failed to read entity lump")?;
    let entities = parse_entities(&data)
        .with_context(|| format!("Failed to parse entity lump: {}", path.display()))?;

    let mut shown = 0;
    for (index, entity) in entities.iter().enumerate() {
        if let Some(wanted) = &classname
            && entity.classname() != Some(wanted.as_str())
        {
            continue;
        }

        println!(
            "{} {}",
            style(format!("#{index}")).dim(),
            style(entity.classname().unwrap_or("<no classname>")).bold()
        );
        for (key, value) in entity.pairs() {
            println!("  {} = {:?}", style(key).cyan(), value);
        }
        shown += 1;
    }

    log::info!("Listed {} of {} entities", shown, entities.len());
    Ok(())
}
