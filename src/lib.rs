/*!
# Argmatch

This crate provides a small, single-pass CLI argument matcher called [`Parser`].

Flags are registered up front, each with a short and/or long name, a
value [`Arity`], and a callback that receives every value the flag consumes.
The command line is then matched against them in one left-to-right
pass. Names match with or without their prefixes, so a bare `v` is as good
as `-v`. Whatever doesn't match a flag, or isn't consumed as a flag's value,
ends up in the positional list.

Before matching, the command line is normalized:
* Bundled short flags like `-abc` are split according to what is registered, so `-abc` might become `-a -b -c`, or `-a b c` if only `a` is a flag;
* Long flags with inline values like `--key=val` or `/key:val` are split in two;

Matching then stops at the first problem, which is returned as a
[`ParseError`] with one of three [`ErrorKind`]s.

Quoting, environment variables, config files, help screens, and
subcommands are all out of scope.



## Example

```
use argmatch::{Arity, ErrorKind, Parser};

#[derive(Debug, Default)]
/// # Configuration.
struct Settings {
    threads: usize,
    paths: Vec<String>,
}

let mut settings = Settings::default();
let mut parser = Parser::from_line("prog -v --threads=4 /tmp/a.txt");

let verbose = parser.register_switch("v", "verbose", "Be chatty.").unwrap();
parser.register("t", "threads", "Thread count.", Arity::ONE, |v| {
    v.parse::<usize>().map(|n| settings.threads = n).into()
}).unwrap();

// Paths starting with a slash look like alternate flags, so the paths
// would need to be relative here!
let err = parser.evaluate().unwrap_err();
assert_eq!(err.kind(), ErrorKind::InvalidFlag);
assert!(parser[verbose].is_present());
drop(parser);

// Try again.
let mut parser = Parser::from_line("prog -v --threads=4 a.txt b.txt");
parser.register_switch("v", "verbose", "Be chatty.").unwrap();
parser.register("t", "threads", "Thread count.", Arity::ONE, |v| {
    v.parse::<usize>().map(|n| settings.threads = n).into()
}).unwrap();
assert_eq!(parser.evaluate(), Ok(true));

let paths = parser.positional().to_vec();
drop(parser);

settings.paths = paths;

assert_eq!(settings.threads, 4);
assert_eq!(settings.paths, ["a.txt", "b.txt"]);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod argument;
mod arity;
mod error;
mod parser;
mod token;

pub use argument::{
	ArgId,
	Argument,
	ParseCallback,
	ParseStatus,
};
pub use arity::Arity;
pub use error::{
	ErrorKind,
	ParseError,
	RegisterError,
};
pub use parser::{
	args,
	Parser,
};
pub use token::TokenKind;
