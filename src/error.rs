//! Structured failure records and their boundary formatting.
//!
//! [`ErrorValue`] is the unit of failure in this crate: one message plus an
//! ordered (possibly empty) list of field paths naming what the message is
//! about. Failures never carry stack traces or host exceptions; they are
//! plain data that flows through [`Outcome`](crate::Outcome) chains.
//!
//! Rendering errors as text is the caller's job. The only human-readable
//! boundary is [`format_errors`]; nothing in this crate prints or logs
//! failures on its own.

use core::fmt;

/// One structured failure record: a message plus optional field paths.
///
/// Construction normalizes field names: blank or whitespace-only names are
/// dropped, kept names are trimmed. The message is stored as given (an empty
/// message is allowed). Equality is structural over `(fields, message)`.
///
/// # Example
/// ```
/// use outcome::ErrorValue;
///
/// let e = ErrorValue::field("email", "must not be empty");
/// assert_eq!(e.fields(), ["email"]);
/// assert_eq!(e.to_string(), "[email] must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorValue {
    fields: Vec<String>,
    message: String,
}

impl ErrorValue {
    /// Creates an error with a message and no field path.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            fields: Vec::new(),
            message: message.into(),
        }
    }

    /// Creates an error attached to a single field.
    ///
    /// A blank field name is dropped, leaving a field-less error.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_fields([field.into()], message)
    }

    /// Creates an error attached to several fields, in the given order.
    ///
    /// Blank or whitespace-only names are dropped; kept names are trimmed.
    pub fn with_fields<I, S>(fields: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(Into::into)
            .filter_map(|f| {
                let trimmed = f.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_owned())
            })
            .collect();
        Self {
            fields,
            message: message.into(),
        }
    }

    /// The field paths this error is attached to, in construction order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The error message. May be empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorValue {
    /// Renders as `[f1, f2] message` when fields are present, else `message`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.fields.is_empty() {
            write!(f, "[{}] ", self.fields.join(", "))?;
        }
        f.write_str(&self.message)
    }
}

/// Renders a sequence of errors, one record per separator-delimited segment.
///
/// Each record renders as `[f1, f2] message` when its fields are non-empty,
/// else as the bare message. This is the sole human-readable representation
/// of failures this crate defines.
#[must_use]
pub fn format_errors(errors: &[ErrorValue], separator: &str) -> String {
    let mut out = String::new();
    for (i, error) in errors.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&error.to_string());
    }
    out
}

/// [`format_errors`] with the default newline separator.
#[must_use]
pub fn format_errors_default(errors: &[ErrorValue]) -> String {
    format_errors(errors, "\n")
}

/// Concatenates groups of errors into one sequence, preserving source order.
///
/// The first group's errors come first, in their own order, then the second
/// group's, and so on. Multi-error combination is built on this.
pub fn flatten_errors<I>(groups: I) -> Vec<ErrorValue>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = ErrorValue>,
{
    groups.into_iter().flatten().collect()
}

/// A non-empty error sequence, for interop with `Result` and `?`.
///
/// Produced by [`Outcome::into_result`](crate::Outcome::into_result); never
/// constructed empty. Displays via [`format_errors_default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors(Vec<ErrorValue>);

impl Errors {
    pub(crate) fn from_vec(errors: Vec<ErrorValue>) -> Self {
        debug_assert!(!errors.is_empty(), "Errors must hold at least one error");
        Self(errors)
    }

    /// The errors, in their original order.
    #[must_use]
    pub fn as_slice(&self) -> &[ErrorValue] {
        &self.0
    }

    /// Unwraps into the underlying sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<ErrorValue> {
        self.0
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_errors_default(&self.0))
    }
}

impl std::error::Error for Errors {}
