/*!
# Argmatch: Evaluation.
*/

use crate::{
	ArgId,
	ParseError,
	Parser,
	TokenKind,
};
use tracing::debug;



impl Parser<'_> {
	/// # Evaluate.
	///
	/// Normalize the command line, then walk it once, left to right:
	///
	/// * Every token is looked up by name, prefixed or not;
	/// * Unmatched flag-shaped tokens are errors, and unmatched plain tokens
	///   are collected as positional values;
	/// * Value-bearing flags greedily consume the tokens that follow, stopping
	///   once their maximum is reached, or (provided their minimum has been
	///   met) at the next flag or the end of the line;
	///
	/// Nothing is ever revisited. Once a token has been consumed as a value,
	/// that's what it is.
	///
	/// Register every flag _before_ calling this; bundled short flags are
	/// split according to what is registered at the time.
	///
	/// Arguments accumulate across calls. Use [`Parser::reset`] first if
	/// evaluating more than once.
	///
	/// ## Examples
	///
	/// ```
	/// use argmatch::{Arity, ErrorKind, Parser};
	///
	/// let mut parser = Parser::from_line("prog -t 1 2 3 4");
	/// let t = parser.register("t", "", "", Arity::new(1, 3).unwrap(), |v| {
	///     v.parse::<u32>().into()
	/// }).unwrap();
	///
	/// assert_eq!(parser.evaluate(), Ok(true));
	/// assert_eq!(parser[t].values(), ["1", "2", "3"]);
	/// assert_eq!(parser.positional(), ["4"]);
	///
	/// // Flags need their minimums.
	/// let mut parser = Parser::from_line("prog -o");
	/// parser.register("o", "", "", Arity::ONE, |_| true.into()).unwrap();
	/// assert_eq!(
	///     parser.evaluate().map_err(|e| e.kind()),
	///     Err(ErrorKind::NotEnoughArguments),
	/// );
	/// ```
	///
	/// ## Errors
	///
	/// Evaluation stops at the first problem:
	/// * [`ErrorKind::InvalidFlag`](crate::ErrorKind::InvalidFlag) if a flag-shaped token isn't registered;
	/// * [`ErrorKind::NotEnoughArguments`](crate::ErrorKind::NotEnoughArguments) if a flag runs out of values before its minimum;
	/// * [`ErrorKind::FailedOnParse`](crate::ErrorKind::FailedOnParse) if a callback rejects a value;
	///
	/// Arguments matched before the failure keep whatever they picked up.
	pub fn evaluate(&mut self) -> Result<bool, ParseError> {
		let tokens = self.normalize();
		self.positional.clear();

		// Zero is the program name.
		let mut idx = 1;
		while idx < tokens.len() {
			let item = tokens[idx].as_str();
			match (self.find(item), TokenKind::from(item).is_flag()) {
				// Bare names count as much as prefixed ones.
				(Some(id), _) => { idx = self.consume(id, &tokens, idx)?; },
				(None, true) => {
					debug!(token = item, "unregistered flag");
					return Err(ParseError::invalid_flag(item));
				},
				(None, false) => {
					debug!(token = item, "positional value");
					self.positional.push(item.to_owned());
				},
			}

			idx += 1;
		}

		Ok(true)
	}

	/// # Consume Values.
	///
	/// Feed the values following the flag at `idx` to its argument, returning
	/// the index of the last token consumed.
	fn consume(&mut self, id: ArgId, tokens: &[String], mut idx: usize)
	-> Result<usize, ParseError> {
		let flag = tokens[idx].as_str();
		let arg = &mut self.arguments[id.index()];
		let arity = arg.arity();

		if arity.is_switch() {
			debug!(flag, "matched switch");
			arg.parse_switch();
			return Ok(idx);
		}

		loop {
			let count = arg.values_count();
			let next = match tokens.get(idx + 1) {
				Some(next) if ! TokenKind::from(next.as_str()).is_flag() => next,
				// The line ended or another flag turned up; that's only okay
				// if we have enough.
				_ => {
					if arity.is_satisfied(count) { break; }
					return Err(ParseError::not_enough_arguments(flag, arity.min(), count));
				},
			};

			if ! arg.parse_value(next).is_valid() {
				debug!(flag, value = %next, "value rejected");
				return Err(ParseError::failed_on_parse(flag, next));
			}

			debug!(flag, value = %next, "matched value");
			idx += 1;
			if arity.is_full(arg.values_count()) { break; }
		}

		Ok(idx)
	}
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		Argument,
		Arity,
		ErrorKind,
		ParseStatus,
	};

	/// # Numeric Callback.
	fn numeric(v: &str) -> ParseStatus { v.parse::<i64>().into() }

	#[test]
	fn t_switch_and_option() {
		let mut output = Vec::new();
		{
			let mut parser = Parser::from_line("prog -v -o result.txt extra");
			let v = parser.register_switch("v", "", "Verbose.").unwrap();
			let o = parser.register("o", "output", "Output.", Arity::ONE, |s| {
				output.push(s.to_owned());
				ParseStatus::Valid
			}).unwrap();

			assert_eq!(parser.evaluate(), Ok(true));
			assert!(parser[v].is_present());
			assert_eq!(parser[v].values_count(), 0);
			assert!(parser[o].is_present());
			assert_eq!(parser[o].values(), ["result.txt"]);
			assert_eq!(parser.positional(), ["extra"]);
		}

		assert_eq!(output, ["result.txt"]);
	}

	#[test]
	fn t_not_enough() {
		let mut parser = Parser::from_line("prog -o");
		parser.register("o", "", "", Arity::ONE, |_| ParseStatus::Valid).unwrap();
		let err = parser.evaluate().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::NotEnoughArguments);
		assert_eq!(err.token(), "-o");
		assert_eq!(err.message(), "Flag (-o) requires at least (1) values - Found: (0)");

		// A following flag can't be taken as a value.
		let mut parser = Parser::from_line("prog -o -v");
		parser.register("o", "", "", Arity::ONE, |_| ParseStatus::Valid).unwrap();
		parser.register_switch("v", "", "").unwrap();
		let err = parser.evaluate().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::NotEnoughArguments);

		// Not even an unregistered one.
		let mut parser = Parser::from_line("prog -o -5");
		parser.register("o", "", "", Arity::ONE, numeric).unwrap();
		assert_eq!(
			parser.evaluate().map_err(|e| e.kind()),
			Err(ErrorKind::NotEnoughArguments),
		);

		// Variadic flags count what they got.
		let mut parser = Parser::from_line("prog --nums 1 2");
		parser.register("", "nums", "", Arity::new(3, 5).unwrap(), numeric).unwrap();
		let err = parser.evaluate().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::NotEnoughArguments);
		assert_eq!(err.message(), "Flag (--nums) requires at least (3) values - Found: (2)");

		// The values it did get stick around.
		assert_eq!(parser.get_by_name("nums").map(Argument::values_count), Some(2));
	}

	#[test]
	fn t_invalid_flag() {
		let mut parser = Parser::from_line("prog -z");
		let err = parser.evaluate().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidFlag);
		assert_eq!(err.token(), "-z");

		for line in ["prog --zed", "prog /zed", "prog --zed=1", "prog --", "prog /"] {
			let mut parser = Parser::from_line(line);
			parser.register_switch("z", "", "").unwrap();
			assert_eq!(
				parser.evaluate().map_err(|e| e.kind()),
				Err(ErrorKind::InvalidFlag),
				"Bug: {line:?} should be an invalid flag.",
			);
		}
	}

	#[test]
	fn t_variadic() {
		let mut parser = Parser::from_line("prog -t 1 2 3 4");
		let t = parser.register("t", "", "", Arity::new(1, 3).unwrap(), numeric).unwrap();
		assert_eq!(parser.evaluate(), Ok(true));
		assert_eq!(parser[t].values(), ["1", "2", "3"]);
		assert_eq!(parser.positional(), ["4"]);

		// Stop early at the next flag once the minimum is met.
		let mut parser = Parser::from_line("prog -t 1 2 -v 3");
		let t = parser.register("t", "", "", Arity::new(1, 3).unwrap(), numeric).unwrap();
		let v = parser.register_switch("v", "", "").unwrap();
		assert_eq!(parser.evaluate(), Ok(true));
		assert_eq!(parser[t].values(), ["1", "2"]);
		assert!(parser[v].is_present());
		assert_eq!(parser.positional(), ["3"]);

		// Or at the end.
		let mut parser = Parser::from_line("prog file -t 1");
		let t = parser.register("t", "", "", Arity::at_least(1), numeric).unwrap();
		assert_eq!(parser.evaluate(), Ok(true));
		assert_eq!(parser[t].values(), ["1"]);
		assert_eq!(parser.positional(), ["file"]);
	}

	#[test]
	fn t_failed_on_parse() {
		let mut parser = Parser::from_line("prog -n abc");
		let n = parser.register("n", "", "", Arity::ONE, numeric).unwrap();
		let err = parser.evaluate().unwrap_err();
		assert_eq!(err.kind(), ErrorKind::FailedOnParse);
		assert_eq!(err.message(), "Failed to parse Flag (-n) with value (abc)");
		assert!(! parser[n].is_present());

		// Partway through a variadic list.
		let mut parser = Parser::from_line("prog -t 1 x 3");
		let t = parser.register("t", "", "", Arity::new(1, 3).unwrap(), numeric).unwrap();
		assert_eq!(
			parser.evaluate().map_err(|e| e.kind()),
			Err(ErrorKind::FailedOnParse),
		);
		assert_eq!(parser[t].values(), ["1"]);
	}

	#[test]
	fn t_inline_values() {
		for line in [
			"prog --output=a.txt",
			"prog --output:a.txt",
			"prog /output:a.txt",
			"prog /output=a.txt",
			"prog -o a.txt",
			"prog o a.txt",
			"prog output a.txt",
		] {
			let mut parser = Parser::from_line(line);
			let o = parser.register("o", "output", "", Arity::ONE, |_| ParseStatus::Valid)
				.unwrap();
			assert_eq!(parser.evaluate(), Ok(true), "Bug: {line:?} failed.");
			assert_eq!(parser[o].values(), ["a.txt"], "Bug: {line:?} missed the value.");
			assert!(parser.positional().is_empty());
		}

		// Attached short values come apart a character at a time.
		let mut parser = Parser::from_line("prog -oa.txt");
		let o = parser.register("o", "output", "", Arity::ONE, |_| ParseStatus::Valid)
			.unwrap();
		assert_eq!(parser.evaluate(), Ok(true));
		assert_eq!(parser[o].values(), ["a"]);
		assert_eq!(parser.positional(), [".", "t", "x", "t"]);
	}

	#[test]
	fn t_bundled() {
		let mut parser = Parser::from_line("prog -vqo out.txt -vx");
		let v = parser.register_switch("v", "", "").unwrap();
		let q = parser.register_switch("q", "", "").unwrap();
		let o = parser.register("o", "", "", Arity::ONE, |_| ParseStatus::Valid).unwrap();
		assert_eq!(parser.evaluate(), Ok(true));
		assert!(parser[v].is_present());
		assert!(parser[q].is_present());
		assert_eq!(parser[o].values(), ["out.txt"]);

		// The stray x is just a positional.
		assert_eq!(parser.positional(), ["x"]);
	}

	#[test]
	fn t_bare_names_match() {
		// Registered names needn't be prefixed.
		let mut parser = Parser::from_line("prog v verbose extra");
		let v = parser.register_switch("v", "verbose", "").unwrap();
		assert_eq!(parser.evaluate(), Ok(true));
		assert!(parser[v].is_present());
		assert_eq!(parser.positional(), ["extra"]);

		// And they take values like anybody else.
		let mut parser = Parser::from_line("prog o file");
		let o = parser.register("o", "", "", Arity::ONE, |_| ParseStatus::Valid).unwrap();
		assert_eq!(parser.evaluate(), Ok(true));
		assert!(parser[o].is_present());
		assert_eq!(parser[o].values(), ["file"]);
		assert!(parser.positional().is_empty());

		// But a bare name in value position is still just a value.
		let mut parser = Parser::from_line("prog -o v");
		let o = parser.register("o", "", "", Arity::ONE, |_| ParseStatus::Valid).unwrap();
		let v = parser.register_switch("v", "", "").unwrap();
		assert_eq!(parser.evaluate(), Ok(true));
		assert_eq!(parser[o].values(), ["v"]);
		assert!(! parser[v].is_present());
	}

	#[test]
	fn t_repeated() {
		// Counts accumulate across occurrences.
		let mut parser = Parser::from_line("prog -i a -i b");
		let i = parser.register("i", "", "", Arity::ONE, |_| ParseStatus::Valid).unwrap();
		assert_eq!(parser.evaluate(), Ok(true));
		assert_eq!(parser[i].values(), ["a", "b"]);

		// Evaluating again piles on; resetting doesn't.
		assert_eq!(parser.evaluate(), Ok(true));
		assert_eq!(parser[i].values_count(), 4);
		parser.reset();
		assert_eq!(parser[i].values_count(), 0);
		assert!(parser.positional().is_empty());
		assert_eq!(parser.evaluate(), Ok(true));
		assert_eq!(parser[i].values(), ["a", "b"]);
	}

	#[test]
	fn t_stops_at_first_error() {
		let mut parser = Parser::from_line("prog -v -z -q");
		let v = parser.register_switch("v", "", "").unwrap();
		let q = parser.register_switch("q", "", "").unwrap();
		assert_eq!(
			parser.evaluate().map_err(|e| e.kind()),
			Err(ErrorKind::InvalidFlag),
		);

		// The first switch was seen; the last wasn't.
		assert!(parser[v].is_present());
		assert!(! parser[q].is_present());
	}

	#[test]
	fn t_empty() {
		let mut parser = Parser::from_line("prog");
		assert_eq!(parser.evaluate(), Ok(true));
		assert!(parser.positional().is_empty());

		let mut parser = Parser::from_line("");
		assert_eq!(parser.evaluate(), Ok(true));
	}
}
