//! Command validation service

use std::sync::Arc;

use libris_config::{ErrorMode, ValidationConfig};
use libris_domain::{Command, MediaCommand};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::context::ValidatorContext;
use crate::pass::{ValidationPass, ValidationReport};
use crate::rules::{self, ReferenceLookups};
use crate::target::type_label;

/// Validates any [`Command`] against a set of reference repositories
///
/// A fresh [`ValidatorContext`] is built for every call; nothing is carried
/// over between calls.
pub struct CommandValidator<'r> {
    error_mode: ErrorMode,
    clock: Arc<dyn Clock>,
    lookups: ReferenceLookups<'r>,
}

impl<'r> CommandValidator<'r> {
    pub fn new(config: &ValidationConfig, lookups: ReferenceLookups<'r>) -> Self {
        Self {
            error_mode: config.error_mode,
            clock: Arc::new(SystemClock::new(config.time_basis)),
            lookups,
        }
    }

    /// Replace the clock used for date checks
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Override the configured error mode
    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    pub async fn validate(&self, command: &Command) -> Result<(), ValidationReport> {
        let ctx = ValidatorContext::with_clock(self.clock.clone());
        let pass = self.pass_for(&ctx, command);
        debug!(
            kind = command.kind(),
            steps = pass.len(),
            mode = ?self.error_mode,
            "validating command"
        );

        let result = pass.run(self.error_mode).await;
        match &result {
            Ok(()) => info!(kind = command.kind(), "command is valid"),
            Err(report) => info!(
                kind = command.kind(),
                errors = report.len(),
                "command rejected"
            ),
        }
        result
    }

    fn pass_for<'a>(&'a self, ctx: &'a ValidatorContext, command: &'a Command) -> ValidationPass<'a> {
        let lookups = self.lookups;
        match command {
            Command::Media(media) => rules::media_pass(ctx, media, lookups, type_label::<MediaCommand>()),
            Command::Book(book) => rules::book_pass(ctx, book, lookups),
            Command::Movie(movie) => rules::movie_pass(ctx, movie, lookups),
            Command::Music(music) => rules::music_pass(ctx, music, lookups),
            Command::MediaPersonality(personality) => {
                rules::media_personality_pass(ctx, personality, lookups)
            }
            Command::Borrower(borrower) => rules::borrower_pass(ctx, borrower),
            Command::Lending(lending) => rules::lending_pass(ctx, lending, lookups),
        }
    }
}
