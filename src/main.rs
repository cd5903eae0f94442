use std::{fs, io, process::ExitCode};

use clap::Parser;
use thiserror::Error;
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;

use rilega::{
    application::{
        error::SaveError,
        save::{SaveOutcome, save},
    },
    config::{self, CliArgs, Command, SaveArgs, StoryArgs},
    domain::story::StoryDraft,
    infra::telemetry::{self, TelemetryError},
};

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::LoadError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read `{path}`: {source}")]
    InputFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid story input `{path}`: {source}")]
    InputJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Save(#[from] SaveError),
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            report_cli_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let cli = CliArgs::parse();
    let settings = config::load(&cli)?;
    telemetry::init(&settings.logging)?;

    let args = match cli.command {
        Some(Command::Save(args)) => *args,
        None => SaveArgs::default(),
    };
    let draft = build_draft(&args)?;

    match save(draft, &settings)? {
        SaveOutcome::Saved { file_name, .. } => {
            println!("Saved to {file_name}");
            Ok(ExitCode::SUCCESS)
        }
        SaveOutcome::Rejected(issues) => {
            eprintln!("Please fill all mandatory fields ({})", issues.missing.join(", "));
            Ok(ExitCode::from(2))
        }
    }
}

/// Build the draft from `--input` JSON, then let field flags override it.
fn build_draft(args: &SaveArgs) -> Result<StoryDraft, CliError> {
    let mut draft = match args.input.as_ref() {
        Some(path) => {
            let data = fs::read_to_string(path).map_err(|source| CliError::InputFile {
                path: path.display().to_string(),
                source,
            })?;
            serde_json::from_str(&data).map_err(|source| CliError::InputJson {
                path: path.display().to_string(),
                source,
            })?
        }
        None => StoryDraft::default(),
    };

    apply_story_args(&mut draft, &args.story)?;
    Ok(draft)
}

fn apply_story_args(draft: &mut StoryDraft, story: &StoryArgs) -> Result<(), CliError> {
    if let Some(title) = story.title.as_ref() {
        draft.title = title.clone();
    }
    if let Some(description) = story.description.as_ref() {
        draft.description = description.clone();
    }
    if let Some(author) = story.author.as_ref() {
        draft.author = author.clone();
    }
    if let Some(publisher) = story.publisher.as_ref() {
        draft.publisher = publisher.clone();
    }
    if let Some(category) = story.category.as_ref() {
        draft.category = category.clone();
    }
    if let Some(link) = story.story_link.as_ref() {
        draft.story_link = link.clone();
    }
    if let Some(link) = story.author_profile_link.as_ref() {
        draft.author_profile_link = link.clone();
    }
    if let Some(link) = story.category_link.as_ref() {
        draft.category_link = link.clone();
    }
    if let Some(markdown) = story.markdown {
        draft.markdown = markdown;
    }

    if let Some(path) = story.body_file.as_ref() {
        draft.body = fs::read_to_string(path).map_err(|source| CliError::InputFile {
            path: path.display().to_string(),
            source,
        })?;
    } else if let Some(body) = story.body.as_ref() {
        draft.body = body.clone();
    }

    Ok(())
}

fn report_cli_error(error: &CliError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "save failed");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "save failed");
    });
}
