/*!
# Argmatch: Arguments.
*/

use crate::Arity;
use std::fmt;



/// # Value Callback.
///
/// Called once for each raw value a flag consumes. It is expected to convert
/// and stash the value wherever the caller wants it, and report whether or
/// not the value made sense.
pub type ParseCallback<'a> = Box<dyn FnMut(&str) -> ParseStatus + 'a>;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Callback Verdict.
///
/// ## Examples
///
/// ```
/// use argmatch::ParseStatus;
///
/// assert_eq!(ParseStatus::from(true), ParseStatus::Valid);
/// assert_eq!(ParseStatus::from("12".parse::<u8>()), ParseStatus::Valid);
/// assert_eq!(ParseStatus::from("Björk".parse::<u8>()), ParseStatus::Invalid);
/// ```
pub enum ParseStatus {
	/// # The value was accepted.
	Valid,

	/// # The value was rejected.
	Invalid,
}

impl From<bool> for ParseStatus {
	#[inline]
	fn from(src: bool) -> Self {
		if src { Self::Valid } else { Self::Invalid }
	}
}

impl<T, E> From<Result<T, E>> for ParseStatus {
	#[inline]
	fn from(src: Result<T, E>) -> Self { Self::from(src.is_ok()) }
}

impl ParseStatus {
	#[must_use]
	/// # Is Valid?
	pub const fn is_valid(self) -> bool { matches!(self, Self::Valid) }
}



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Argument Handle.
///
/// This is returned by [`Parser::register`](crate::Parser::register) and
/// can be used to look the argument back up after evaluation.
pub struct ArgId(usize);

impl ArgId {
	/// # New.
	pub(crate) const fn new(idx: usize) -> Self { Self(idx) }

	/// # Index.
	pub(crate) const fn index(self) -> usize { self.0 }
}



/// # Argument.
///
/// A single registered flag: its names, its arity, its value callback, and
/// whatever it picked up during evaluation.
///
/// Arguments are owned by their [`Parser`](crate::Parser); see
/// [`Parser::register`](crate::Parser::register) for creating them.
pub struct Argument<'a> {
	/// # Short Name (Unprefixed).
	short: String,

	/// # Long Name (Unprefixed).
	long: String,

	/// # Description.
	description: String,

	/// # Value Arity.
	arity: Arity,

	/// # Value Callback.
	callback: Option<ParseCallback<'a>>,

	/// # Accepted Values.
	values: Vec<String>,

	/// # Matched?
	present: bool,
}

impl fmt::Debug for Argument<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Argument")
			.field("short", &self.short)
			.field("long", &self.long)
			.field("description", &self.description)
			.field("arity", &self.arity)
			.field("values", &self.values)
			.field("present", &self.present)
			.finish_non_exhaustive()
	}
}

impl<'a> Argument<'a> {
	/// # New.
	///
	/// Names are expected to have already been validated and stripped.
	pub(crate) fn new(
		short: &str,
		long: &str,
		description: &str,
		arity: Arity,
		callback: Option<ParseCallback<'a>>,
	) -> Self {
		Self {
			short: short.to_owned(),
			long: long.to_owned(),
			description: description.to_owned(),
			arity,
			callback,
			values: Vec::new(),
			present: false,
		}
	}
}

impl Argument<'_> {
	#[must_use]
	/// # Short Name.
	///
	/// This is returned without its `-` prefix, and may be empty.
	pub fn short_name(&self) -> &str { &self.short }

	#[must_use]
	/// # Long Name.
	///
	/// This is returned without its `--` prefix, and may be empty.
	pub fn long_name(&self) -> &str { &self.long }

	#[must_use]
	/// # Description.
	pub fn description(&self) -> &str { &self.description }

	#[must_use]
	/// # Arity.
	pub const fn arity(&self) -> Arity { self.arity }

	#[must_use]
	/// # Accepted Values.
	///
	/// The raw values the callback accepted, in order.
	pub fn values(&self) -> &[String] { &self.values }

	#[must_use]
	/// # Value Count.
	pub fn values_count(&self) -> usize { self.values.len() }

	#[must_use]
	/// # Is Present?
	///
	/// True if the flag was matched at all, even if it doesn't take values.
	pub const fn is_present(&self) -> bool { self.present }

	/// # Has Name?
	pub(crate) fn has_name(&self, name: &str) -> bool {
		! name.is_empty() && (self.short == name || self.long == name)
	}
}

impl Argument<'_> {
	/// # Parse Switch.
	///
	/// Zero-arity flags just get marked as present.
	pub(crate) fn parse_switch(&mut self) { self.present = true; }

	/// # Parse Value.
	///
	/// Run the callback, if any. Nothing changes unless the value is valid.
	pub(crate) fn parse_value(&mut self, raw: &str) -> ParseStatus {
		let status = self.callback.as_mut().map_or(ParseStatus::Valid, |cb| cb(raw));
		if status.is_valid() {
			self.values.push(raw.to_owned());
			self.present = true;
		}
		status
	}

	/// # Reset.
	///
	/// Forget everything picked up during evaluation.
	pub(crate) fn reset(&mut self) {
		self.values.clear();
		self.present = false;
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_parse_switch() {
		let mut arg = Argument::new("v", "verbose", "", Arity::NONE, None);
		assert!(! arg.is_present());
		arg.parse_switch();
		assert!(arg.is_present());
		assert_eq!(arg.values_count(), 0);

		arg.reset();
		assert!(! arg.is_present());
	}

	#[test]
	fn t_parse_value() {
		let mut seen = Vec::new();
		{
			let mut arg = Argument::new(
				"n",
				"",
				"A number.",
				Arity::new(1, 3).unwrap(),
				Some(Box::new(|v: &str| -> ParseStatus {
					v.parse::<u8>().map(|n| seen.push(n)).into()
				})),
			);

			assert_eq!(arg.parse_value("1"), ParseStatus::Valid);
			assert_eq!(arg.parse_value("nope"), ParseStatus::Invalid);
			assert_eq!(arg.parse_value("2"), ParseStatus::Valid);
			assert!(arg.is_present());
			assert_eq!(arg.values(), ["1", "2"]);
			assert_eq!(arg.values_count(), 2);
		}

		assert_eq!(seen, [1, 2]);
	}

	#[test]
	fn t_invalid_leaves_state() {
		let mut arg = Argument::new(
			"n",
			"",
			"",
			Arity::ONE,
			Some(Box::new(|_: &str| ParseStatus::Invalid)),
		);
		assert_eq!(arg.parse_value("1"), ParseStatus::Invalid);
		assert!(! arg.is_present());
		assert_eq!(arg.values_count(), 0);
	}

	#[test]
	fn t_has_name() {
		let arg = Argument::new("o", "", "", Arity::ONE, None);
		assert!(arg.has_name("o"));
		assert!(! arg.has_name(""));
		assert!(! arg.has_name("output"));
	}
}
