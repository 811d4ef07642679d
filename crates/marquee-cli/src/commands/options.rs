use anyhow::{bail, Result};
use marquee_core::{Genre, Language, MovieType, Status};

fn labels<T>(all: &[T], label: fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(label).collect()
}

fn option_sets() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (Status::FIELD, labels(Status::ALL, Status::label)),
        (MovieType::FIELD, labels(MovieType::ALL, MovieType::label)),
        (Language::FIELD, labels(Language::ALL, Language::label)),
        (Genre::FIELD, labels(Genre::ALL, Genre::label)),
    ]
}

/// List the values accepted by the select fields.
pub fn show_options(field: Option<&str>) -> Result<()> {
    let sets = option_sets();

    if let Some(field) = field {
        let Some((_, values)) = sets.iter().find(|(name, _)| name.eq_ignore_ascii_case(field))
        else {
            let known: Vec<&str> = sets.iter().map(|(name, _)| *name).collect();
            bail!(
                "Unknown field: {}\n\nValid fields: {}",
                field,
                known.join(", ")
            );
        };
        for value in values {
            println!("{}", value);
        }
        return Ok(());
    }

    for (name, values) in &sets {
        println!("{}:", name);
        for value in values {
            println!("  {}", value);
        }
    }
    Ok(())
}
