pub mod constants;
pub mod errors;

pub use errors::*;

pub fn fatal_error(str: &str) {
	eprintln!("{}: {}", console::style("fatal error").bold().red(), str);
	std::process::exit(1);
}

pub fn warning(str: String) {
	eprintln!("{}: {}", console::style("warning").bold().yellow(), str);
}
