use std::path::PathBuf;

use anyhow::{Context, Result};
use marquee_core::MovieRecord;
use marquee_form::{Config, MovieForm};

use super::draft_file::{self, DraftFile};
use super::submit::{console_form, submit_form, SubmitOpts};

/// Split a `FIELD=VALUE` override. The value may itself contain `=`.
fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .map(|(field, value)| (field.trim(), value))
        .with_context(|| format!("Invalid override {:?}: expected FIELD=VALUE", raw))
}

/// Apply `--set` overrides to a hydrated form.
pub fn apply_overrides(form: &mut MovieForm, sets: &[String]) -> Result<()> {
    for raw in sets {
        let (field, value) = parse_assignment(raw)?;
        form.set_field(field, value)
            .with_context(|| format!("Cannot set {}", field))?;
    }
    Ok(())
}

/// Update a stored movie.
pub async fn run_edit(
    config: &Config,
    record_path: PathBuf,
    sets: &[String],
    opts: SubmitOpts,
) -> Result<()> {
    let file: DraftFile<MovieRecord> = draft_file::load(&record_path)?;

    let opts = opts.or_saved_poster(file.poster_path);
    let mut form = console_form();
    form.hydrate(file.content);
    apply_overrides(&mut form, sets)?;
    let trailer = opts.apply(&mut form)?;

    submit_form(&mut form, config, trailer, &opts, &record_path).await
}
