use thiserror::Error;

use crate::application::render::RenderError;
use crate::infra::{assets::AssetError, output::WriteError};

/// Everything that can abort a save attempt.
///
/// Validation rejection is deliberately absent: an invalid draft is a normal
/// outcome ([`crate::application::save::SaveOutcome::Rejected`]), not an
/// error. Callers match on this enum instead of catching exception kinds.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("story rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error(transparent)]
    AssetRead(#[from] AssetError),
    #[error(transparent)]
    Write(#[from] WriteError),
    #[error("document template rendering failed: {0}")]
    Template(#[from] askama::Error),
}
