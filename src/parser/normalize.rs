/*!
# Argmatch: Normalization.
*/

use crate::{
	Parser,
	TokenKind,
	token,
};
use tracing::trace;



impl Parser<'_> {
	#[must_use]
	/// # Normalize.
	///
	/// Return a copy of the raw command line rewritten so that every flag
	/// and every attached value has a token of its own. The program name at
	/// index zero is copied as-is.
	///
	/// Bundled short flags are split according to what is _registered_: each
	/// registered character becomes its own `-x` flag, and every other
	/// character becomes a plain token of its own. If the very first
	/// character isn't registered, the token is left alone.
	///
	/// Long and alternate flags are split on the first `=` or `:`.
	///
	/// Normalizing is idempotent, so feeding the output back in changes
	/// nothing.
	///
	/// ## Examples
	///
	/// ```
	/// let mut parser = argmatch::Parser::from_line("prog -abc --out=file /in:other");
	/// parser.register_switch("a", "", "").unwrap();
	/// parser.register_switch("b", "", "").unwrap();
	///
	/// assert_eq!(
	///     parser.normalize(),
	///     ["prog", "-a", "-b", "c", "--out", "file", "/in", "other"],
	/// );
	/// ```
	pub fn normalize(&self) -> Vec<String> {
		let mut out = Vec::with_capacity(self.raw.len());
		let mut raw = self.raw.iter();

		// The program name is nobody's business.
		if let Some(first) = raw.next() { out.push(first.clone()); }

		for item in raw {
			match TokenKind::from(item.as_str()) {
				TokenKind::Short => self.split_short(item, &mut out),
				TokenKind::Long => match token::split_long(item) {
					(flag, Some(value)) => {
						trace!(token = %item, flag, value, "split long flag");
						out.push(flag.to_owned());
						out.push(value.to_owned());
					},
					(_, None) => out.push(item.clone()),
				},
				TokenKind::Plain => out.push(item.clone()),
			}
		}

		out
	}

	/// # Split Short Flag(s).
	///
	/// Given `-abc`, each character is either a registered flag (`-a`) or
	/// a one-character plain value (`b`). Only registration decides.
	///
	/// Leftovers are never glued back together; a run like `/x=y` would
	/// otherwise be split again on the next pass.
	fn split_short(&self, item: &str, out: &mut Vec<String>) {
		let body = &item[1..];

		// An unknown lead means this isn't ours to pick apart.
		if ! body.chars().next().is_some_and(|c| self.is_registered_char(c)) {
			out.push(item.to_owned());
			return;
		}

		let before = out.len();
		for c in body.chars() {
			if self.is_registered_char(c) { out.push(format!("-{c}")); }
			else { out.push(c.to_string()); }
		}

		if out.len() - before > 1 {
			trace!(token = item, parts = ?&out[before..], "split short flags");
		}
	}

	/// # Registered Character?
	fn is_registered_char(&self, c: char) -> bool {
		let mut buf = [0_u8; 4];
		self.find(c.encode_utf8(&mut buf)).is_some()
	}
}
