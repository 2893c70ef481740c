use ::utils::errors::Result;
use allocator::{AllocationResult, RegAllocator};
use ast::Program;
use graph::InterferenceGraph;
use interval::VarTable;
use log::{debug, info};
use palette::Palette;
use solver::{ColorOutcome, ColorSolver};

pub mod allocator;
pub mod graph;
pub mod interval;
pub mod palette;
pub mod solver;
pub mod spill;
pub mod utils;

#[derive(Clone, Debug)]
pub struct RegisterConfig {
	pub palette: Palette,
	/// Number of physical registers colors may be promoted to.
	pub budget: usize,
	/// Step budget for the coloring search, unbounded when `None`.
	pub search_limit: Option<u64>,
}

impl RegisterConfig {
	pub fn new(palette: Palette, budget: usize) -> Self {
		Self {
			palette,
			budget,
			search_limit: None,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
	Allocated(AllocationResult),
	/// No coloring exists with `colors` usable colors.
	NoSolution { colors: usize },
	Aborted { steps: u64 },
}

/// Everything a run produces, handed read-only to reporting.
#[derive(Clone, Debug)]
pub struct Solution {
	pub vars: VarTable,
	pub graph: InterferenceGraph,
	pub outcome: Outcome,
}

impl Solution {
	pub fn allocation(&self) -> Option<&AllocationResult> {
		match &self.outcome {
			Outcome::Allocated(result) => Some(result),
			_ => None,
		}
	}
}

/// Extraction and graph building only; no coloring is attempted.
pub fn build_graph(program: &Program) -> Result<(VarTable, InterferenceGraph)> {
	let vars = VarTable::extract(&program.instrs);
	let graph = InterferenceGraph::build(&vars);
	graph.validate()?;
	Ok((vars, graph))
}

pub fn color_graph(
	vars: VarTable,
	graph: InterferenceGraph,
	config: &RegisterConfig,
) -> Solution {
	let outcome = match ColorSolver::new(&graph, config.palette)
		.with_limit(config.search_limit)
		.solve()
	{
		ColorOutcome::AllColored(assignment) => {
			Outcome::Allocated(RegAllocator::new(config.budget).alloc(assignment))
		}
		ColorOutcome::ExhaustedRoot => Outcome::NoSolution {
			colors: config.palette.usable().len(),
		},
		ColorOutcome::Aborted { steps } => Outcome::Aborted { steps },
	};
	match &outcome {
		Outcome::Allocated(result) => info!(
			"allocated {} variables, {} spilled",
			vars.len(),
			result.spilled.len()
		),
		_ => debug!("allocation failed: {:?}", outcome),
	}
	Solution {
		vars,
		graph,
		outcome,
	}
}

pub fn solve_register(
	program: &Program,
	config: &RegisterConfig,
) -> Result<Solution> {
	let (vars, graph) = build_graph(program)?;
	Ok(color_graph(vars, graph, config))
}

#[cfg(test)]
mod tests {
	use crate::allocator::Location;
	use ast::{Header, Instr};

	use super::*;

	fn program(registers: usize, lines: &[(&str, &[&str])]) -> Program {
		let instrs = lines
			.iter()
			.enumerate()
			.map(|(i, &(opcode, operands))| {
				Instr::new(i + 2, format!("{:02}", i), opcode, operands)
			})
			.collect();
		Program::new(Header::new("registers", registers), instrs)
	}

	#[test]
	fn three_variables_two_registers() {
		let program = program(
			2,
			&[
				("LOAD", &["A", "1000"]),
				("LOAD", &["B", "1004"]),
				("INC", &["A"]),
				("LOAD", &["C", "1008"]),
			],
		);
		let config =
			RegisterConfig::new(Palette::new(3).unwrap(), program.header.registers);
		let solution = solve_register(&program, &config).unwrap();

		assert_eq!(solution.graph.edges().collect::<Vec<_>>(), vec![(0, 1)]);
		let result = solution.allocation().unwrap();
		assert_eq!(result.assignment.as_slice(), &[1, 2, 1]);
		assert_eq!(result.ranking, vec![(1, 2), (2, 1)]);
		assert_eq!(result.promoted, vec![1, 2]);
		assert!(result.spilled.is_empty());
		assert_eq!(result.registers_needed, 2);
		let c = solution.vars.lookup("C").unwrap();
		assert_eq!(result.location(c.id), Location::Register(1));
	}

	#[test]
	fn too_few_colors() {
		let program = program(4, &[("ADD", &["A", "B"]), ("ADD", &["C", "A"])]);
		// B dies before C is first used
		let config = RegisterConfig::new(Palette::new(3).unwrap(), 4);
		let solution = solve_register(&program, &config).unwrap();
		assert_eq!(solution.graph.edge_count(), 2);
		assert!(solution.allocation().is_some());

		let program = program_clique();
		let solution = solve_register(&program, &config).unwrap();
		assert_eq!(solution.outcome, Outcome::NoSolution { colors: 2 });
		assert!(solution.allocation().is_none());
	}

	fn program_clique() -> Program {
		program(
			4,
			&[
				("LOAD", &["A", "1000"]),
				("ADD", &["B", "C"]),
				("ADD", &["A", "B"]),
				("ADD", &["C", "A"]),
			],
		)
	}

	#[test]
	fn search_limit_is_reported() {
		let mut config = RegisterConfig::new(Palette::new(3).unwrap(), 4);
		config.search_limit = Some(2);
		let solution = solve_register(&program_clique(), &config).unwrap();
		assert_eq!(solution.outcome, Outcome::Aborted { steps: 2 });
	}

	#[test]
	fn no_variables() {
		let program = program(1, &[("HALT", &[]), ("JMP", &["FFFF"])]);
		let solution =
			solve_register(&program, &RegisterConfig::new(Palette::default(), 1))
				.unwrap();
		assert!(solution.vars.is_empty());
		assert_eq!(solution.graph.vertex_count(), 0);
		assert_eq!(solution.allocation().unwrap().registers_needed, 0);
	}

	const WIDE: [&str; 12] =
		["A0", "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9", "B0", "B1"];

	#[test]
	fn graph_stage_skips_coloring() {
		// 12 variables live across the whole program, one more than the
		// default palette can color
		let program = program(12, &[("DEF", &WIDE), ("NOP", &[]), ("USE", &WIDE)]);
		let (vars, graph) = build_graph(&program).unwrap();
		assert_eq!(vars.len(), 12);
		assert_eq!(graph.vertex_count(), 12);
		assert_eq!(graph.edge_count(), 12 * 11 / 2);

		let mut config = RegisterConfig::new(Palette::default(), 12);
		config.search_limit = Some(1000);
		let solution = color_graph(vars, graph, &config);
		assert_eq!(solution.outcome, Outcome::Aborted { steps: 1000 });
	}
}
