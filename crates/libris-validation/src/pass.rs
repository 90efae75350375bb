//! Caller-side sequencing of rule functions
//!
//! A rule function always stops at its first failure. Whether a whole
//! aggregate stops at the first failing rule function, or runs all of them
//! and reports every failure, is decided here by the caller's [`ErrorMode`].

use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;
use libris_config::ErrorMode;
use thiserror::Error;
use tracing::debug;

use crate::errors::{ValidationError, ValidationResult};

/// Errors collected by a [`ValidationPass`]
#[derive(Error, Debug, Clone, PartialEq)]
#[error("validation failed with {} error(s)", .errors.len())]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<ValidationError> for ValidationReport {
    fn from(error: ValidationError) -> Self {
        Self::new(vec![error])
    }
}

/// Ordered list of pending rule-function calls
///
/// Steps are lazy futures; nothing runs until [`ValidationPass::run`] polls
/// them one after the other in insertion order.
#[derive(Default)]
pub struct ValidationPass<'a> {
    steps: Vec<BoxFuture<'a, ValidationResult<()>>>,
}

impl<'a> ValidationPass<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Queue a rule-function call
    pub fn step<F, T>(&mut self, step: F) -> &mut Self
    where
        F: Future<Output = ValidationResult<T>> + Send + 'a,
    {
        self.steps.push(step.map(|result| result.map(|_| ())).boxed());
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order
    pub async fn run(self, mode: ErrorMode) -> Result<(), ValidationReport> {
        match mode {
            ErrorMode::FailFast => self.run_fail_fast().await.map_err(ValidationReport::from),
            ErrorMode::Collect => {
                let mut errors = Vec::new();
                for step in self.steps {
                    if let Err(error) = step.await {
                        errors.push(error);
                    }
                }
                if errors.is_empty() {
                    Ok(())
                } else {
                    debug!(count = errors.len(), "validation pass collected errors");
                    Err(ValidationReport::new(errors))
                }
            }
        }
    }

    /// Run steps until the first failure
    pub async fn run_fail_fast(self) -> ValidationResult<()> {
        for step in self.steps {
            step.await?;
        }
        Ok(())
    }
}
