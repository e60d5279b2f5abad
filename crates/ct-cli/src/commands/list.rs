use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ct_core::{CharacterClass, ClassRegistry};

pub fn races(registry: &ClassRegistry) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Race"]);

    for (i, race) in registry.races().iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), race.raw_value().to_string()]);
    }

    println!("{table}");
    Ok(())
}

pub fn classes(registry: &ClassRegistry) -> Result<(), String> {
    if registry.is_empty() {
        println!("  No classes registered.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Class", "Kind"]);

    for (i, class) in registry.classes().iter().enumerate() {
        let kind = match class {
            CharacterClass::Custom(_) => "custom",
            _ => "built-in",
        };
        table.add_row(vec![
            (i + 1).to_string(),
            class.name().to_string(),
            kind.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} classes", registry.len().to_string().bold());

    Ok(())
}
