/*!
# Argmatch: Parser.

The [`Parser`] holds the raw command line and the registered flags. Parsing
happens in two passes, both driven by [`Parser::evaluate`]: the line is
first normalized so every flag and every value sits in its own token, then
walked left-to-right to match flags, feed values to callbacks, and collect
whatever is left over as positional values.
*/

mod evaluate;
mod normalize;

use crate::{
	ArgId,
	Argument,
	Arity,
	ParseCallback,
	ParseStatus,
	RegisterError,
	token::{
		self,
		SEPARATORS,
	},
};
use std::{
	collections::BTreeMap,
	ops::Index,
};
use tracing::debug;



#[derive(Debug, Default)]
/// # Parser.
///
/// A `Parser` owns a copy of the command line (program name first) and a
/// set of registered flags. Register everything up front, then call
/// [`Parser::evaluate`].
///
/// Flags are matched by name with any leading `-` or `/` ignored, so a flag
/// registered as `o`/`output` answers to `-o`, `--output`, and `/output`.
/// Long and alternate flags may carry their value inline, e.g.
/// `--output=file` or `/output:file`, and registered short flags may be
/// bundled, e.g. `-vo file`.
///
/// ## Examples
///
/// ```
/// use argmatch::{Arity, Parser};
///
/// let mut output = String::new();
/// let mut parser = Parser::from_line("prog -v -o result.txt extra");
/// let verbose = parser.register_switch("v", "verbose", "Be chatty.").unwrap();
/// parser.register("o", "output", "Output file.", Arity::ONE, |v| {
///     output = v.to_owned();
///     true.into()
/// }).unwrap();
///
/// assert_eq!(parser.evaluate(), Ok(true));
/// assert!(parser[verbose].is_present());
/// assert_eq!(parser.positional(), ["extra"]);
///
/// drop(parser);
/// assert_eq!(output, "result.txt");
/// ```
pub struct Parser<'a> {
	/// # Registered Arguments.
	arguments: Vec<Argument<'a>>,

	/// # Names to Arguments.
	///
	/// Short and long names both point at the same handle.
	names: BTreeMap<String, ArgId>,

	/// # Raw Command Line.
	raw: Vec<String>,

	/// # Positional Values.
	positional: Vec<String>,
}

impl<S: Into<String>> FromIterator<S> for Parser<'_> {
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self {
		Self::from(src.into_iter().map(Into::into).collect::<Vec<String>>())
	}
}

impl From<Vec<String>> for Parser<'_> {
	fn from(raw: Vec<String>) -> Self {
		Self {
			arguments: Vec::new(),
			names: BTreeMap::new(),
			raw,
			positional: Vec::new(),
		}
	}
}

impl<'a> Index<ArgId> for Parser<'a> {
	type Output = Argument<'a>;

	/// # Index.
	///
	/// ## Panics
	///
	/// This will panic if the handle came from a different parser.
	fn index(&self, id: ArgId) -> &Self::Output { &self.arguments[id.index()] }
}

impl Parser<'_> {
	#[must_use]
	/// # New.
	///
	/// Create a parser from an argv-style sequence. The first entry is
	/// taken to be the program name and is never matched.
	pub fn new<I>(raw: I) -> Self
	where I: IntoIterator, I::Item: Into<String> {
		raw.into_iter().collect()
	}

	#[must_use]
	/// # From Line.
	///
	/// Create a parser from a single string, split on spaces. There is no
	/// quoting.
	///
	/// Unlike a plain `split(' ')`, the empty pieces left by extra spaces
	/// are dropped rather than kept. An empty token can't name a flag, so
	/// it would only land in the positional list as `""`. Use
	/// [`Parser::new`] if empty tokens matter.
	///
	/// ## Examples
	///
	/// ```
	/// let parser = argmatch::Parser::from_line("prog  -v file");
	/// assert_eq!(parser.raw(), ["prog", "-v", "file"]);
	/// ```
	pub fn from_line(line: &str) -> Self {
		line.split(' ').filter(|s| ! s.is_empty()).collect()
	}
}

impl<'a> Parser<'a> {
	/// # Register Argument.
	///
	/// Find or create a flag. `short` may be empty or a single character;
	/// `long` may be empty or any name without whitespace, `=`, or `:`. At
	/// least one must be provided. Leading `-`/`/` characters are ignored.
	///
	/// The callback is run once for each value the flag consumes.
	///
	/// If either name is already registered, the existing handle is returned
	/// as-is; the new description, arity, and callback are ignored.
	///
	/// ## Examples
	///
	/// ```
	/// use argmatch::{Arity, Parser};
	///
	/// let mut parser = Parser::from_line("prog -n 5");
	/// let a = parser.register("n", "", "", Arity::ONE, |v| v.parse::<u8>().into()).unwrap();
	/// let b = parser.register("n", "", "", Arity::ONE, |v| v.parse::<u8>().into()).unwrap();
	/// assert_eq!(a, b);
	/// assert_eq!(parser.arguments().len(), 1);
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if both names are empty, either name is
	/// malformed, or the names belong to different registered arguments.
	pub fn register<F>(
		&mut self,
		short: &str,
		long: &str,
		description: &str,
		arity: Arity,
		callback: F,
	) -> Result<ArgId, RegisterError>
	where F: FnMut(&str) -> ParseStatus + 'a {
		self.insert(short, long, description, arity, Some(Box::new(callback)))
	}

	/// # Register Switch.
	///
	/// Find or create a flag that takes no values.
	///
	/// ## Errors
	///
	/// See [`Parser::register`].
	pub fn register_switch(&mut self, short: &str, long: &str, description: &str)
	-> Result<ArgId, RegisterError> {
		self.insert(short, long, description, Arity::NONE, None)
	}

	/// # Insert.
	fn insert(
		&mut self,
		short: &str,
		long: &str,
		description: &str,
		arity: Arity,
		callback: Option<ParseCallback<'a>>,
	) -> Result<ArgId, RegisterError> {
		let short = clean_name(short, true)?;
		let long = clean_name(long, false)?;
		if short.is_empty() && long.is_empty() { return Err(RegisterError::EmptyName); }

		let by_short = self.names.get(short).copied();
		let by_long = self.names.get(long).copied();
		match (by_short, by_long) {
			(Some(a), Some(b)) if a != b => Err(RegisterError::NameConflict(long.to_owned())),
			(Some(id), _) | (_, Some(id)) => {
				// Every requested name has to belong to the match.
				let arg = &self.arguments[id.index()];
				for name in [short, long] {
					if ! name.is_empty() && ! arg.has_name(name) {
						return Err(RegisterError::NameConflict(name.to_owned()));
					}
				}
				debug!(short, long, "argument already registered");
				Ok(id)
			},
			(None, None) => {
				let id = ArgId::new(self.arguments.len());
				self.arguments.push(Argument::new(short, long, description, arity, callback));
				for name in [short, long] {
					if ! name.is_empty() { self.names.insert(name.to_owned(), id); }
				}
				debug!(short, long, min = arity.min(), max = arity.max(), "registered argument");
				Ok(id)
			},
		}
	}
}

impl<'a> Parser<'a> {
	#[must_use]
	/// # Find Argument.
	///
	/// Return the handle for the flag answering to `name`, ignoring any
	/// leading `-` or `/` characters.
	///
	/// ## Examples
	///
	/// ```
	/// let mut parser = argmatch::Parser::from_line("prog");
	/// let id = parser.register_switch("x", "", "").unwrap();
	/// assert_eq!(parser.find("x"), Some(id));
	/// assert_eq!(parser.find("-x"), Some(id));
	/// assert_eq!(parser.find("/x"), Some(id));
	/// assert_eq!(parser.find("y"), None);
	/// ```
	pub fn find(&self, name: &str) -> Option<ArgId> {
		let name = token::strip_prefixes(name);
		if name.is_empty() { None }
		else { self.names.get(name).copied() }
	}

	#[must_use]
	/// # Get Argument.
	pub fn get(&self, id: ArgId) -> Option<&Argument<'a>> {
		self.arguments.get(id.index())
	}

	#[must_use]
	/// # Get Argument by Name.
	///
	/// This is a shorthand for [`Parser::find`] followed by [`Parser::get`].
	pub fn get_by_name(&self, name: &str) -> Option<&Argument<'a>> {
		self.find(name).and_then(|id| self.get(id))
	}

	#[must_use]
	/// # Arguments.
	///
	/// All registered flags, in the order they were registered.
	pub fn arguments(&self) -> &[Argument<'a>] { &self.arguments }

	#[must_use]
	/// # Positional Values.
	///
	/// Everything the last [`Parser::evaluate`] didn't match as a flag or
	/// consume as a value, in order.
	pub fn positional(&self) -> &[String] { &self.positional }

	/// # Reset.
	///
	/// Clear every flag's values and presence, and the positional list, so
	/// the line can be evaluated again from scratch.
	pub fn reset(&mut self) {
		for arg in &mut self.arguments { arg.reset(); }
		self.positional.clear();
	}
}

impl Parser<'_> {
	#[must_use]
	/// # Raw Command Line.
	pub fn raw(&self) -> &[String] { &self.raw }

	#[must_use]
	/// # Raw Length.
	pub fn raw_len(&self) -> usize { self.raw.len() }

	#[must_use]
	/// # Raw Command Line (Joined).
	///
	/// Return the raw tokens glued back together with spaces.
	pub fn raw_line(&self) -> String { self.raw.join(" ") }
}



#[must_use]
/// # CLI Parser.
///
/// Return a [`Parser`] seeded with the current process arguments, program
/// name included. Anything that isn't valid UTF-8 is converted lossily.
///
/// This reads the environment once; pass the parser (or its tokens) along
/// from there.
pub fn args<'a>() -> Parser<'a> {
	std::env::args_os()
		.map(|a| a.to_string_lossy().into_owned())
		.collect()
}



/// # Clean Name.
///
/// Trim and strip a name, making sure whatever is left is usable. Empty
/// input is fine and comes back empty.
fn clean_name(raw: &str, short: bool) -> Result<&str, RegisterError> {
	let raw = raw.trim();
	if raw.is_empty() { return Ok(raw); }

	let name = token::strip_prefixes(raw);
	let mut chars = name.chars();
	let valid =
		if short { chars.next().is_some() && chars.next().is_none() }
		else { ! name.is_empty() };

	if valid && ! name.contains(|c: char| c.is_whitespace() || SEPARATORS.contains(&c)) {
		Ok(name)
	}
	else { Err(RegisterError::InvalidName(raw.to_owned())) }
}
