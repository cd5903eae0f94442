//! The save pipeline: render, gate, estimate, assemble, write.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::application::{error::SaveError, readtime, render};
use crate::config::Settings;
use crate::domain::{
    filename,
    story::{StoryDraft, ValidationIssues},
};
use crate::infra::{assets, output};
use crate::presentation::views;

/// What a save attempt produced.
///
/// A rejected draft is a normal outcome, distinct from both success and the
/// error cases carried by [`SaveError`]; callers match on all three.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved { file_name: String, path: PathBuf },
    Rejected(ValidationIssues),
}

/// Run one story through the full pipeline.
///
/// The body is rendered exactly once, the export directory is created before
/// the mandatory-field gate, and nothing is written when the gate rejects.
/// Saving the same publisher/author/title again silently replaces the
/// earlier document.
pub fn save(draft: StoryDraft, settings: &Settings) -> Result<SaveOutcome, SaveError> {
    let rendered_html = render::render(&draft.body, draft.markdown)?;
    debug!(
        markdown = draft.markdown,
        bytes = rendered_html.len(),
        "body rendered"
    );

    output::ensure_dir(&settings.output.directory)?;

    let story = match draft.validate(rendered_html) {
        Ok(story) => story,
        Err(issues) => {
            warn!(missing = ?issues.missing, "story rejected");
            return Ok(SaveOutcome::Rejected(issues));
        }
    };

    let assets = assets::load(&settings.assets)?;
    let read_time = readtime::estimate(&story.rendered_html);
    let file_name = filename::document_file_name(&story.publisher, &story.author, &story.title);
    debug!(file = %file_name, read_time = %read_time, "document composed");

    let document = views::assemble(&story, &read_time, &file_name, &assets)?;
    let path = output::write_document(&settings.output.directory, &file_name, &document)?;
    info!(file = %file_name, "story saved");

    Ok(SaveOutcome::Saved { file_name, path })
}
