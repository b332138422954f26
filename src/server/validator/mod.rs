//! Request field validation.
//!
//! A `Validation` collects at most one error per request. Each field is
//! checked through a `FieldChain`: sanitizers and checks run in the order they
//! are chained, the first failing check records its error and halts the field,
//! and once an error is recorded every later check of every field is skipped.
//!
//! ```ignore
//! let mut validation = Validation::new();
//! let title = validation
//!     .field(dto.title)
//!     .trim()
//!     .required(ClientError::TitleRequired)
//!     .min_length(3, ClientError::TitleTooShort)
//!     .value();
//! validation.finish()?;
//! ```

pub mod common;
pub mod project;
pub mod ticket;
pub mod user;

#[cfg(test)]
mod test;

use std::future::Future;

use regex::Regex;

use crate::server::error::{client::ClientError, AppError};

/// First-error-wins record of a request's validation.
#[derive(Debug, Default)]
pub struct Validation {
    error: Option<AppError>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a check chain over one field's raw value.
    pub fn field(&mut self, value: Option<String>) -> FieldChain<'_> {
        FieldChain {
            validation: self,
            value,
            halted: false,
        }
    }

    /// Records an error unless one was already recorded.
    pub fn record(&mut self, error: impl Into<AppError>) {
        if self.error.is_none() {
            self.error = Some(error.into());
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the first recorded error, if any.
    pub fn finish(self) -> Result<(), AppError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Ordered checks over a single field.
///
/// An absent value is checked as an empty string unless `optional` halted
/// the chain first.
pub struct FieldChain<'v> {
    validation: &'v mut Validation,
    value: Option<String>,
    halted: bool,
}

impl<'v> FieldChain<'v> {
    fn active(&self) -> bool {
        !self.halted && !self.validation.has_error()
    }

    fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    fn fail(&mut self, error: impl Into<AppError>) {
        self.validation.record(error);
        self.halted = true;
    }

    fn sanitize(mut self, f: impl FnOnce(&str) -> String) -> Self {
        if self.active() {
            self.value = self.value.as_deref().map(f);
        }
        self
    }

    /// Runs `predicate` against the current value, recording `error` when it
    /// returns false.
    pub fn check(mut self, predicate: impl FnOnce(&str) -> bool, error: ClientError) -> Self {
        if self.active() && !predicate(self.text()) {
            self.fail(error);
        }
        self
    }

    pub fn trim(self) -> Self {
        self.sanitize(|value| value.trim().to_string())
    }

    pub fn lowercase(self) -> Self {
        self.sanitize(str::to_lowercase)
    }

    /// Uppercases the first character.
    pub fn capitalize(self) -> Self {
        self.sanitize(|value| {
            let mut chars = value.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
    }

    /// Skips the remaining checks when the field was not sent.
    pub fn optional(mut self) -> Self {
        if self.value.is_none() {
            self.halted = true;
        }
        self
    }

    /// Fails when the value is absent or empty.
    pub fn required(self, error: ClientError) -> Self {
        self.check(|value| !value.is_empty(), error)
    }

    pub fn min_length(self, min: usize, error: ClientError) -> Self {
        self.check(|value| value.chars().count() >= min, error)
    }

    pub fn max_length(self, max: usize, error: ClientError) -> Self {
        self.check(|value| value.chars().count() <= max, error)
    }

    /// Fails when the value does not match `pattern`.
    pub fn matches(self, pattern: &Regex, error: ClientError) -> Self {
        self.check(|value| pattern.is_match(value), error)
    }

    pub fn one_of(self, allowed: &[&str], error: ClientError) -> Self {
        self.check(|value| allowed.contains(&value), error)
    }

    pub fn integer(self, error: ClientError) -> Self {
        self.check(|value| value.parse::<i64>().is_ok(), error)
    }

    /// Fails when the integer value is below `min`. Call after `integer`.
    pub fn int_min(self, min: i64, error: ClientError) -> Self {
        self.check(|value| value.parse::<i64>().is_ok_and(|n| n >= min), error)
    }

    /// Fails when the integer value is above `max`. Call after `integer`.
    pub fn int_max(self, max: i64, error: ClientError) -> Self {
        self.check(|value| value.parse::<i64>().is_ok_and(|n| n <= max), error)
    }

    /// Runs an asynchronous data store check, recording `error` when it
    /// returns `Ok(false)`.
    ///
    /// A failing lookup records the lookup's own error instead.
    pub async fn verify<F, Fut>(mut self, lookup: F, error: ClientError) -> Self
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<bool, AppError>>,
    {
        if !self.active() {
            return self;
        }

        match lookup(self.text().to_string()).await {
            Ok(true) => {}
            Ok(false) => self.fail(error),
            Err(err) => self.fail(err),
        }
        self
    }

    /// Fails with `error` when `is_taken` reports the value as already in use.
    pub async fn unique<F, Fut>(self, is_taken: F, error: ClientError) -> Self
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<bool, AppError>>,
    {
        self.verify(
            |value| async move { is_taken(value).await.map(|taken| !taken) },
            error,
        )
        .await
    }

    /// The sanitized value.
    pub fn value(self) -> Option<String> {
        self.value
    }

    /// The sanitized value parsed as an integer.
    pub fn int_value(self) -> Option<i64> {
        self.value.and_then(|value| value.parse().ok())
    }
}
