//! Error type for fixed-arity targets.

/// Represents a call with the wrong number of arguments.
///
/// This error is produced by targets built with the `from_fn*` adapters.
/// Placeholder resolution itself never fails; the error is returned by
/// the target once the final call happens, and is passed through to the
/// caller unchanged.
///
/// # Examples
///
/// ```rust
/// use partiell::ArityError;
///
/// let error = ArityError::new(3, 2);
/// assert_eq!(
///     format!("{}", error),
///     "takes 3 positional arguments but 2 were given"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArityError {
    /// The number of arguments the target takes.
    pub expected: usize,
    /// The number of arguments it was called with.
    pub actual: usize,
}

impl ArityError {
    /// Creates a new `ArityError`.
    #[inline]
    pub const fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.expected == 1 {
            "argument"
        } else {
            "arguments"
        };
        let verb = if self.actual == 1 { "was" } else { "were" };
        write!(
            formatter,
            "takes {} positional {noun} but {} {verb} given",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for ArityError {}
