/*!
# Argmatch: Token Kind.
*/

/// # Short Flag Prefix.
pub(crate) const SHORT_PREFIX: char = '-';

/// # Long Flag Prefix.
pub(crate) const LONG_PREFIX: &str = "--";

/// # Alternate (Long) Flag Prefix.
pub(crate) const ALT_PREFIX: char = '/';

/// # Long Flag Value Separators.
pub(crate) const SEPARATORS: [char; 2] = ['=', ':'];



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Token Kind.
///
/// The `TokenKind` enum describes the _shape_ of a command line token. It
/// says nothing about whether or not a flag with that name was registered.
///
/// The rules are deliberately simple:
/// * If an entry begins with `--` or `/`, it is a long flag.
/// * If an entry begins with a single `-` and has at least one more character, it is a short flag.
/// * Everything else is plain.
///
/// ## Examples
///
/// ```
/// use argmatch::TokenKind;
///
/// assert_eq!(TokenKind::from("-v"), TokenKind::Short);
/// assert_eq!(TokenKind::from("--verbose"), TokenKind::Long);
/// assert_eq!(TokenKind::from("/verbose"), TokenKind::Long);
/// assert_eq!(TokenKind::from("verbose"), TokenKind::Plain);
/// assert_eq!(TokenKind::from("-"), TokenKind::Plain);
/// ```
pub enum TokenKind {
	#[default]
	/// Not a flag.
	Plain,

	/// A short flag, possibly several bundled together.
	Short,

	/// A long flag, possibly with an attached value.
	Long,
}

impl From<&str> for TokenKind {
	fn from(txt: &str) -> Self {
		if txt.starts_with(LONG_PREFIX) || txt.starts_with(ALT_PREFIX) { Self::Long }
		else if 2 <= txt.len() && txt.starts_with(SHORT_PREFIX) { Self::Short }
		else { Self::Plain }
	}
}

impl TokenKind {
	#[must_use]
	/// # Is Flag?
	///
	/// True for both short and long shapes.
	pub const fn is_flag(self) -> bool { matches!(self, Self::Short | Self::Long) }
}



/// # Strip Prefixes.
///
/// Remove any leading `-` or `/` characters, leaving the bare name.
pub(crate) fn strip_prefixes(txt: &str) -> &str {
	txt.trim_start_matches([SHORT_PREFIX, ALT_PREFIX])
}

/// # Split Long Flag.
///
/// Split a long flag on the first `=` or `:`. The value, if any, is whatever
/// follows, even if empty.
pub(crate) fn split_long(txt: &str) -> (&str, Option<&str>) {
	match txt.find(SEPARATORS) {
		Some(idx) => (&txt[..idx], Some(&txt[idx + 1..])),
		None => (txt, None),
	}
}
