/*!
# Argmatch: Debug

This example parses whatever arguments are fed to it against a handful of
flags and displays the results. Set `RUST_LOG=debug` (or `trace`) to watch
the matching happen.

```bash
cargo run --example debug -- -vq --out=file.txt -n 1 2 3 extra
```
*/

use argmatch::{
	Arity,
	ParseStatus,
};
use tracing_subscriber::{
	EnvFilter,
	fmt,
};



fn main() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	fmt()
		.with_env_filter(filter)
		.with_target(false)
		.compact()
		.init();

	let mut numbers: Vec<i64> = Vec::new();
	let mut parser = argmatch::args();
	parser.register_switch("v", "verbose", "Be chatty.").unwrap();
	parser.register_switch("q", "quiet", "Be quiet.").unwrap();
	parser.register("o", "out", "Output path.", Arity::ONE, |_| ParseStatus::Valid).unwrap();
	parser.register("n", "nums", "Some numbers.", Arity::new(1, 3).unwrap(), |v| {
		v.parse::<i64>().map(|n| numbers.push(n)).into()
	}).unwrap();

	println!("\x1b[2mRAW:\x1b[0m");
	println!("{}", parser.raw_line());
	println!();

	println!("\x1b[2mNORMALIZED:\x1b[0m");
	println!("{}", parser.normalize().join(" "));
	println!();

	let res = parser.evaluate();

	println!("\x1b[2mFLAGS:\x1b[0m");
	for arg in parser.arguments() {
		println!(
			"  -{:1} --{:8} present: {:5}  values: {:?}",
			arg.short_name(),
			arg.long_name(),
			arg.is_present(),
			arg.values(),
		);
	}
	println!();

	println!("\x1b[2mPOSITIONAL:\x1b[0m");
	for v in parser.positional() { println!("  {v}"); }
	println!();

	drop(parser);
	println!("\x1b[2mNUMBERS:\x1b[0m {numbers:?}");
	println!();

	if let Err(e) = res {
		println!("\x1b[1;91mError:\x1b[0m {e} \x1b[2m({})\x1b[0m", e.kind());
		std::process::exit(1);
	}
}
