mod cli;
mod config;
mod logging;
mod printer;

use std::{
	fs::{self, File},
	io,
	io::Write,
};

use crate::{config::PARSER_INDENT, printer::trans_indent};
use anyhow::Result;
use ast::{Header, Program};
use clap::Parser;
use cli::Args;
use emission::{plot, report};
use log::{info, trace};
use parser::parse;
use register::{
	build_graph, color_graph, graph::InterferenceGraph, interval::VarTable,
	palette::Palette, RegisterConfig,
};
use utils::{constants::PALETTE_SIZE, fatal_error, map_sys_err, warning};

fn step_parse(file_name: &str) -> Result<Program> {
	let code = fs::read_to_string(file_name).map_err(map_sys_err)?;
	Ok(parse(&code)?)
}

/// Register budget, plus a note when the command line overrides the header.
fn step_budget(args: &Args, header: &Header) -> (usize, Option<String>) {
	match args.registers {
		Some(registers) if registers != header.registers => (
			registers,
			Some(format!(
				"using {} registers instead of the {} declared by '{}'",
				registers, header.registers, header.label
			)),
		),
		Some(registers) => (registers, None),
		None => (header.registers, None),
	}
}

fn step_config(args: &Args, program: &Program) -> Result<RegisterConfig> {
	let palette = Palette::new(args.colors.unwrap_or(PALETTE_SIZE))?;
	let (budget, note) = step_budget(args, &program.header);
	if let Some(note) = note {
		warning(note);
	}
	Ok(RegisterConfig {
		palette,
		budget,
		search_limit: args.limit,
	})
}

fn dump_graph(vars: &VarTable, graph: &InterferenceGraph) -> String {
	let vars: String = vars.iter().map(|var| format!("{}: {}\n", var.id, var)).collect();
	format!("{}{}", vars, graph)
}

fn main() -> Result<()> {
	logging::init();
	trace!("start");
	let args = Args::parse();

	let mut writer: Box<dyn Write> = if let Some(o) = &args.output {
		Box::new(File::create(o).map_err(map_sys_err)?)
	} else {
		Box::new(io::stdout())
	};

	let file_name = args.input.clone().unwrap_or_else(|| {
		fatal_error("no input files");
		unreachable!()
	});

	let program = step_parse(&file_name)?;
	if args.parse {
		let x = format!("{:#?}", program);
		writeln!(writer, "{}", trans_indent(&x, PARSER_INDENT))?;
		return Ok(());
	}

	let (vars, graph) = build_graph(&program)?;
	if args.graph {
		write!(writer, "{}", dump_graph(&vars, &graph))?;
		return Ok(());
	}

	let config = step_config(&args, &program)?;
	let solution = color_graph(vars, graph, &config);
	write!(writer, "{}", report(&solution, &config.palette, config.budget))?;

	if let Some(path) = &args.plot {
		fs::write(path, plot(&solution, &config.palette)).map_err(map_sys_err)?;
		info!("interference graph written to {}", path);
	}

	Ok(())
}
