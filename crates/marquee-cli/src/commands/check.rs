use std::path::PathBuf;

use anyhow::Result;
use marquee_core::MovieDraft;

use super::create::fill_form;
use super::draft_file::{self, DraftFile};
use super::submit::{console_form, print_payload, SubmitOpts};

/// Validate a draft file without submitting it.
pub fn run_check(draft_path: PathBuf) -> Result<()> {
    let file: DraftFile<MovieDraft> = draft_file::load(&draft_path)?;

    let mut form = console_form();
    let skipped = fill_form(&mut form, file.content)?;
    SubmitOpts::default()
        .or_saved_poster(file.poster_path)
        .apply(&mut form)?;
    let pending = form.begin_submission(None)?;

    println!("✓ {} is ready to submit", draft_path.display());
    if skipped > 0 {
        println!("  ({} writer or cast entries were skipped)", skipped);
    }
    println!(
        "  Release date: {}",
        form.draft().release_date_display()
    );
    print_payload(pending.payload());

    Ok(())
}
