//! Header, lump and static prop summary

use anyhow::{Context, Result};
use console::style;
use prettytable::row;
use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::PathBuf;

use source_bsp::{
    GameLumpDirectory, LumpDirectory, LumpIndex, STATIC_PROP_LUMP_ID, StaticProps,
    parse_entities,
};

use crate::utils::{create_table, format_bytes, lump_name};

pub fn execute(path: PathBuf) -> Result<()> {
    let file =
        File::open(&path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let file_size = file.metadata().map(|m| m.len()).unwrap_or(0);
    let mut reader = BufReader::new(file);

    let directory = LumpDirectory::read(&mut reader)
        .with_context(|| format!("Failed to read lump directory: {}", path.display()))?;

    println!("\n{}", style("BSP File Information").bold().underlined());
    println!("File: {}", style(path.display()).cyan());
    println!("Size: {}", format_bytes(file_size));
    println!("Version: {}", style(directory.version).yellow());
    println!("Layout: {}", style(directory.variant).yellow());

    let mut table = create_table(vec!["Index", "Name", "Offset", "Length", "Size"]);
    for (index, entry) in directory.entries().iter().enumerate() {
        if entry.length == 0 {
            continue;
        }
        table.add_row(row![
            index,
            lump_name(index),
            entry.offset,
            entry.length,
            format_bytes(entry.length.max(0) as u64)
        ]);
    }
    println!("\n{}", style("Lumps").bold());
    table.printstd();

    let entity_data = directory
        .read_lump(&mut reader, LumpIndex::ENTITIES)
        .context("Failed to read entity lump")?;
    let entities = parse_entities(&entity_data).context("Failed to parse entity lump")?;
    println!("\nEntities: {}", style(entities.len()).green());

    let Some(game_lump) = directory.lump(LumpIndex::GAME_LUMP).copied() else {
        return Ok(());
    };
    if game_lump.offset < 0 || game_lump.length <= 0 {
        println!("Game lump: {}", style("none").dim());
        return Ok(());
    }

    reader.seek(SeekFrom::Start(game_lump.offset as u64))?;
    let game_lumps =
        GameLumpDirectory::read(&mut reader).context("Failed to read game lump directory")?;

    let mut table = create_table(vec!["Id", "Flags", "Version", "Offset", "Length"]);
    for entry in game_lumps.entries() {
        table.add_row(row![
            entry.fourcc(),
            entry.flags,
            entry.version,
            entry.offset,
            entry.length
        ]);
    }
    println!("\n{}", style("Game Lumps").bold());
    table.printstd();

    if let Some(entry) = game_lumps.find(STATIC_PROP_LUMP_ID) {
        let props =
            StaticProps::read(&mut reader, entry).context("Failed to read static props")?;
        println!(
            "\nStatic props: {} instances of {} models",
            style(props.prop_count).green(),
            style(props.models().count()).green()
        );
    } else {
        println!("\nStatic props: {}", style("missing").red());
    }

    Ok(())
}
