use ct_core::{Character, ClassRegistry};
use ct_creator::{CharacterFactory, CreatorConfig, StdConsole};

/// Run the interactive dialogue on stdin/stdout.
///
/// Running out of input ends the dialogue normally; it is not an error exit.
pub fn run(
    registry: &ClassRegistry,
    config: CreatorConfig,
    once: bool,
    json: bool,
) -> Result<(), String> {
    let render: fn(&Character) -> String = if json {
        render_json
    } else {
        Character::describe
    };
    let mut factory = CharacterFactory::new(StdConsole::new(), registry, config);

    if !once {
        let created = factory.create_characters_with(render);
        tracing::debug!(count = created.len(), "characters created");
        return Ok(());
    }

    match factory.create_character() {
        Ok(character) => println!("{}\n", render(&character)),
        Err(e) => println!("Error creating character: {e}"),
    }
    Ok(())
}

fn render_json(character: &Character) -> String {
    serde_json::to_string_pretty(character)
        .unwrap_or_else(|e| format!("failed to serialize character: {e}"))
}
