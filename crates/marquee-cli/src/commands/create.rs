use std::path::PathBuf;

use anyhow::Result;
use marquee_core::{DraftPatch, MovieDraft, Poster};
use marquee_form::{Config, MovieForm};

use super::draft_file::{self, DraftFile};
use super::submit::{console_form, submit_form, SubmitOpts};

/// Feed a draft into the form one interaction at a time.
///
/// Writers and cast members the form refuses (duplicates or entries
/// without an identifier) are reported and left out. Returns how many
/// entries were skipped.
pub fn fill_form(form: &mut MovieForm, draft: MovieDraft) -> Result<usize> {
    form.set_field("title", &draft.title)?;
    form.set_field("storyLine", &draft.story_line)?;
    form.set_field("releaseDate", &draft.release_date)?;
    form.set_field("status", draft.status.map_or("", |s| s.label()))?;
    form.set_field("type", draft.movie_type.map_or("", |t| t.label()))?;
    form.set_field("language", draft.language.map_or("", |l| l.label()))?;
    form.update_tags(draft.tags);
    form.update_genres(draft.genre);
    form.update_director(draft.director);

    let mut skipped = 0;
    for writer in draft.writers {
        let name = writer.name.clone();
        if !form.add_writer(writer) {
            println!("Skipping writer {}: duplicate or missing id", name);
            skipped += 1;
        }
    }
    for member in draft.cast {
        let name = member.actor.name.clone();
        if !form.add_cast(member) {
            println!("Skipping cast member {}: duplicate or missing id", name);
            skipped += 1;
        }
    }

    match draft.poster {
        Poster::Empty => {}
        Poster::Pending(file) => form.select_poster(file),
        existing @ Poster::Existing(_) => form.merge(DraftPatch {
            poster: Some(existing),
            ..DraftPatch::default()
        }),
    }
    if draft.trailer.is_some() {
        form.merge(DraftPatch {
            trailer: Some(draft.trailer),
            ..DraftPatch::default()
        });
    }

    Ok(skipped)
}

/// Create a movie from a draft file.
pub async fn run_create(config: &Config, draft_path: PathBuf, opts: SubmitOpts) -> Result<()> {
    let file: DraftFile<MovieDraft> = draft_file::load(&draft_path)?;
    let draft = file.content;
    log::info!("Loaded draft {:?} from {}", draft.title, draft_path.display());

    let opts = opts.or_saved_poster(file.poster_path);
    let mut form = console_form();
    fill_form(&mut form, draft)?;
    let trailer = opts.apply(&mut form)?;

    submit_form(&mut form, config, trailer, &opts, &draft_path).await
}
