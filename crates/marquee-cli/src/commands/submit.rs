//! Submission plumbing shared by `create` and `edit`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use marquee_core::{MediaRef, MovieRecord, Poster, PosterFile};
use marquee_form::{
    Config, HttpMovieApi, MovieForm, MoviePayload, PayloadValue, SubmissionTarget,
};

use super::console::{ConsoleEvents, ConsoleNotifier};
use super::draft_file::{self, DraftFile};

/// Options common to every submitting command.
#[derive(Debug, Default)]
pub struct SubmitOpts {
    pub poster: Option<PathBuf>,
    pub trailer_url: Option<String>,
    pub dry_run: bool,
}

impl SubmitOpts {
    /// Fall back to the poster remembered in a draft file when none was
    /// given on the command line.
    #[must_use]
    pub fn or_saved_poster(mut self, saved: Option<PathBuf>) -> Self {
        if self.poster.is_none() {
            if let Some(path) = &saved {
                println!("Using saved poster {}", path.display());
            }
            self.poster = saved;
        }
        self
    }

    /// Attach the poster file to the form and resolve the external trailer.
    pub fn apply(&self, form: &mut MovieForm) -> Result<Option<MediaRef>> {
        if let Some(path) = &self.poster {
            let file = PosterFile::from_path(path)
                .with_context(|| format!("Failed to load poster {}", path.display()))?;
            form.select_poster(file);
            log::debug!("Poster preview at {}", form.preview_url().unwrap_or("<none>"));
        }

        Ok(self.trailer_url.as_ref().map(MediaRef::new))
    }
}

/// A form wired to the terminal.
pub fn console_form() -> MovieForm {
    MovieForm::new(Arc::new(ConsoleNotifier), Arc::new(ConsoleEvents))
}

fn describe(target: &SubmissionTarget) -> String {
    match target {
        SubmissionTarget::Create => String::from("create a new movie"),
        SubmissionTarget::Update(id) => format!("update movie {}", id),
    }
}

/// Print the encoded fields in submission order.
pub fn print_payload(payload: &MoviePayload) {
    println!("Payload ({} fields):", payload.len());
    for (name, value) in payload.fields() {
        match value {
            PayloadValue::Text(text) => println!("  {}: {}", name, text),
            PayloadValue::File(file) => println!(
                "  {}: <file {} ({}, {} bytes)>",
                name,
                file.file_name,
                file.mime,
                file.bytes.len()
            ),
        }
    }
}

/// Submit the form, or only show what would be sent for a dry run.
///
/// When the backend rejects the submission and the user keeps the draft,
/// it is written next to `source` so it can be fixed and sent again.
pub async fn submit_form(
    form: &mut MovieForm,
    config: &Config,
    trailer: Option<MediaRef>,
    opts: &SubmitOpts,
    source: &Path,
) -> Result<()> {
    if opts.dry_run {
        let pending = form.begin_submission(trailer.as_ref())?;
        println!("Dry run: would {}", describe(pending.target()));
        print_payload(pending.payload());
        return Ok(());
    }

    let api = HttpMovieApi::from_config(config).context("Failed to create API client")?;
    log::info!("Submitting to {}", api.base_url());

    match form.submit(&api, trailer.as_ref()).await {
        Ok(outcome) => {
            let json = serde_json::to_string_pretty(outcome.record())
                .context("Failed to format saved movie")?;
            println!("{}", json);
            Ok(())
        }
        Err(err) if err.is_local() => Err(err.into()),
        Err(err) => {
            if !form.request_close() {
                keep_unsaved(form, source, opts.poster.as_deref())?;
            }
            Err(err.into())
        }
    }
}

/// Save the draft, and the path of a poster still waiting for upload, so
/// the next run can pick both up again.
fn keep_unsaved(form: &MovieForm, source: &Path, poster: Option<&Path>) -> Result<()> {
    let path = draft_file::unsaved_path(source);
    let poster_path = match (&form.draft().poster, poster) {
        (Poster::Pending(_), Some(poster)) => {
            Some(std::fs::canonicalize(poster).unwrap_or_else(|_| poster.to_path_buf()))
        }
        _ => None,
    };

    match form.record_id() {
        Some(id) => draft_file::save_json(
            &path,
            &DraftFile {
                content: MovieRecord::new(id.clone(), form.draft().clone()),
                poster_path,
            },
        )?,
        None => draft_file::save_json(
            &path,
            &DraftFile {
                content: form.draft().clone(),
                poster_path,
            },
        )?,
    }
    println!("Unsaved draft kept at {}", path.display());
    Ok(())
}
