/*!
# Argmatch: Errors.

There are two families here: [`RegisterError`], returned when a flag is
declared badly, and [`ParseError`], returned by [`Parser::evaluate`](crate::Parser::evaluate)
when the command line doesn't fit the declared flags.
*/

use std::fmt;
use thiserror::Error;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Parse Error Kind.
///
/// Each kind is raised by exactly one condition; see the variants.
pub enum ErrorKind {
	/// # Invalid Flag.
	///
	/// A flag-shaped token matched no registered argument.
	InvalidFlag,

	/// # Not Enough Arguments.
	///
	/// The line ended, or another flag turned up, before a value-bearing
	/// flag reached its minimum arity.
	NotEnoughArguments,

	/// # Failed on Parse.
	///
	/// A flag's callback rejected one of its values.
	FailedOnParse,
}

impl fmt::Display for ErrorKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ErrorKind {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::InvalidFlag => "Invalid flag.",
			Self::NotEnoughArguments => "Not enough arguments.",
			Self::FailedOnParse => "Failed on parse.",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{message}")]
/// # Parse Error.
///
/// The first problem [`Parser::evaluate`](crate::Parser::evaluate) ran into.
/// Evaluation stops there; arguments matched before the failure keep
/// whatever state they picked up.
///
/// ## Examples
///
/// ```
/// use argmatch::{ErrorKind, Parser};
///
/// let mut parser = Parser::from_line("prog -z");
/// let err = parser.evaluate().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidFlag);
/// assert_eq!(err.token(), "-z");
/// ```
pub struct ParseError {
	/// # Kind.
	kind: ErrorKind,

	/// # Offending Flag Token.
	token: String,

	/// # Human-Readable Message.
	message: String,
}

impl ParseError {
	/// # Invalid Flag.
	pub(crate) fn invalid_flag(token: &str) -> Self {
		Self {
			kind: ErrorKind::InvalidFlag,
			token: token.to_owned(),
			message: format!("Invalid flag ({token})"),
		}
	}

	/// # Not Enough Arguments.
	pub(crate) fn not_enough_arguments(flag: &str, min: usize, found: usize)
	-> Self {
		Self {
			kind: ErrorKind::NotEnoughArguments,
			token: flag.to_owned(),
			message: format!(
				"Flag ({flag}) requires at least ({min}) values - Found: ({found})"
			),
		}
	}

	/// # Failed on Parse.
	pub(crate) fn failed_on_parse(flag: &str, value: &str) -> Self {
		Self {
			kind: ErrorKind::FailedOnParse,
			token: flag.to_owned(),
			message: format!("Failed to parse Flag ({flag}) with value ({value})"),
		}
	}
}

impl ParseError {
	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> ErrorKind { self.kind }

	#[must_use]
	/// # Token.
	///
	/// The flag token the error relates to, as it appeared after
	/// normalization (e.g. `-o` or `--output`).
	pub fn token(&self) -> &str { &self.token }

	#[must_use]
	/// # Message.
	pub fn message(&self) -> &str { &self.message }
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Registration Error.
///
/// Flags are checked when they're declared so that mistakes surface before
/// any command line is looked at.
pub enum RegisterError {
	#[error("An argument needs a short or long name.")]
	/// # Both Names Empty.
	EmptyName,

	#[error("Invalid argument name: {0}")]
	/// # Malformed Name.
	InvalidName(String),

	#[error("Invalid arity: min ({min}) exceeds max ({max})")]
	/// # Min Greater Than Max.
	InvalidArity {
		/// # Requested Minimum.
		min: usize,
		/// # Requested Maximum.
		max: usize,
	},

	#[error("Argument name conflict: {0}")]
	/// # Name Belongs to Another Argument.
	NameConflict(String),
}
