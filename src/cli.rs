pub use clap::Parser;

/// Register allocation for small assembly programs by interference graph
/// coloring.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
	/// Dump the parsed program and stop
	#[arg(long)]
	pub parse: bool,

	/// Dump the interference graph and stop
	#[arg(long)]
	pub graph: bool,

	#[arg(short)]
	pub output: Option<String>,

	/// Palette size, the reserved "none" color included
	#[arg(short = 'k', long)]
	pub colors: Option<usize>,

	/// Override the register count from the input header
	#[arg(short, long)]
	pub registers: Option<usize>,

	/// Give up the coloring search after this many steps
	#[arg(long)]
	pub limit: Option<u64>,

	/// Write the colored interference graph to this file as DOT
	#[arg(long)]
	pub plot: Option<String>,

	#[arg(value_parser)]
	pub input: Option<String>,
}
