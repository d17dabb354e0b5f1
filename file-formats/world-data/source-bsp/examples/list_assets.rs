//! Example showing how to list every asset a map depends on

use source_bsp::{BspReader, KeyVocabulary};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let path = if args.len() > 1 {
        &args[1]
    } else {
        println!("Usage: {} <path_to_bsp_file> [game_folder]", args[0]);
        println!("\nExample:");
        println!("  {} tf/maps/ctf_2fort.bsp tf", args[0]);
        return Ok(());
    };

    let vocabulary = KeyVocabulary::new()
        .with_model_keys(["model", "gibmodel"])
        .with_sound_keys(["message", "startsound", "stopsound"])
        .with_material_keys(["texture", "overlaymaterial"]);

    let mut reader = BspReader::new(vocabulary);
    if let Some(game_folder) = args.get(2) {
        reader = reader.with_game_folder(game_folder);
    }

    let assets = reader.read_file(path)?;
    println!("{assets}");

    println!("\nStatic prop models:");
    for (index, name) in assets.static_props.names.iter().enumerate() {
        if !name.is_empty() {
            println!("  {name} (skins {:?})", assets.skins_for(index));
        }
    }

    println!("\nAll referenced files:");
    for path in assets.all_paths() {
        println!("  {path}");
    }

    Ok(())
}
