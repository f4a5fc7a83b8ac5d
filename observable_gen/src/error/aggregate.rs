//! Aggregation container for multiple `GeneratorError` values.

use std::{error::Error, fmt};

use super::GeneratorError;

/// Collection of [`GeneratorError`]s produced during a single run.
///
/// # Examples
///
/// ```
/// use observable_gen::GeneratorError;
///
/// let e = GeneratorError::try_aggregate(vec![
///     GeneratorError::missing_container("App.A", "_one"),
///     GeneratorError::missing_container("App.B", "_two"),
/// ]);
/// if let Some(GeneratorError::Aggregate(agg)) = e {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug, Default)]
pub struct AggregatedErrors(Vec<GeneratorError>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<GeneratorError>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &GeneratorError> {
        self.0.iter()
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl IntoIterator for AggregatedErrors {
    type Item = GeneratorError;
    type IntoIter = std::vec::IntoIter<GeneratorError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
