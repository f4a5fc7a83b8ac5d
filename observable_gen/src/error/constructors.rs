//! Constructors and aggregation helpers for `GeneratorError`.

use super::{AggregatedErrors, GeneratorError};

impl GeneratorError {
    /// Tries to build a [`GeneratorError`] from an iterator of errors.
    ///
    /// Returns `None` for an empty iterator, the error itself for a single
    /// entry and [`Self::Aggregate`] for two or more.
    #[must_use]
    pub fn try_aggregate<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut collected: Vec<Self> = errors.into_iter().collect();
        match collected.len() {
            0 => None,
            1 => collected.pop(),
            _ => Some(Self::Aggregate(Box::new(AggregatedErrors::new(collected)))),
        }
    }

    /// Construct a missing-container error.
    ///
    /// # Examples
    ///
    /// ```
    /// use observable_gen::GeneratorError;
    /// let e = GeneratorError::missing_container("App.Gone", "_value");
    /// assert!(e.to_string().contains("App.Gone"));
    /// ```
    #[must_use]
    pub fn missing_container(container: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingContainer {
            container: container.into(),
            field: field.into(),
        }
    }

    /// Construct a configuration error from a [`figment::Error`].
    #[must_use]
    pub fn config(source: figment::Error) -> Self {
        Self::Config(Box::new(source))
    }

    /// Construct an emitter error for `unit`.
    #[must_use]
    pub fn emit<E>(unit: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Emit {
            unit: unit.into(),
            source: Box::new(source),
        }
    }
}
