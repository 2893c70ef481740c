use log::{debug, trace};
use utils::constants::UNASSIGNED;

use crate::{
	graph::InterferenceGraph,
	interval::VarId,
	palette::{Color, Palette},
};

/// Color per vertex id; `UNASSIGNED` marks uncolored or spilled vertices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorAssignment {
	colors: Vec<Color>,
}

impl From<Vec<Color>> for ColorAssignment {
	fn from(colors: Vec<Color>) -> Self {
		Self { colors }
	}
}

impl ColorAssignment {
	pub fn new(vertices: usize) -> Self {
		Self {
			colors: vec![UNASSIGNED; vertices],
		}
	}

	pub fn get(&self, v: VarId) -> Color {
		self.colors.get(v).copied().unwrap_or(UNASSIGNED)
	}

	pub(crate) fn set(&mut self, v: VarId, color: Color) {
		self.colors[v] = color;
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn as_slice(&self) -> &[Color] {
		&self.colors
	}

	pub fn iter(&self) -> impl Iterator<Item = (VarId, Color)> + '_ {
		self.colors.iter().copied().enumerate()
	}

	pub fn max_color(&self) -> Color {
		self.colors.iter().copied().max().unwrap_or(UNASSIGNED)
	}

	/// Edges whose endpoints hold the same real color.
	pub fn conflicts<'a>(
		&'a self,
		graph: &'a InterferenceGraph,
	) -> impl Iterator<Item = (VarId, VarId)> + 'a {
		graph.edges().filter(move |&(a, b)| {
			self.get(a) != UNASSIGNED && self.get(a) == self.get(b)
		})
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorOutcome {
	AllColored(ColorAssignment),
	/// Every color was tried at the root: no coloring exists for this palette.
	ExhaustedRoot,
	/// The step budget ran out before the search finished.
	Aborted { steps: u64 },
}

impl ColorOutcome {
	pub fn is_colored(&self) -> bool {
		matches!(self, ColorOutcome::AllColored(_))
	}
}

struct Frame {
	vertex: VarId,
	next: Color,
}

/// Depth-first backtracking search over vertices in ascending id, trying
/// colors in ascending order. The first coloring found is returned, which
/// is not necessarily one with the fewest colors.
pub struct ColorSolver<'a> {
	graph: &'a InterferenceGraph,
	palette: Palette,
	limit: Option<u64>,
	steps: u64,
}

impl<'a> ColorSolver<'a> {
	pub fn new(graph: &'a InterferenceGraph, palette: Palette) -> Self {
		Self {
			graph,
			palette,
			limit: None,
			steps: 0,
		}
	}

	/// One step is one visit of a search frame.
	pub fn with_limit(mut self, limit: Option<u64>) -> Self {
		self.limit = limit;
		self
	}

	pub fn steps(&self) -> u64 {
		self.steps
	}

	pub fn solve(&mut self) -> ColorOutcome {
		let n = self.graph.vertex_count();
		let mut assignment = ColorAssignment::new(n);
		if n == 0 {
			return ColorOutcome::AllColored(assignment);
		}
		let graph = self.graph;
		let colors = self.palette.usable();
		let mut stack = vec![Frame {
			vertex: 0,
			next: colors.start,
		}];

		while let Some(frame) = stack.last_mut() {
			if self.limit.is_some_and(|limit| self.steps >= limit) {
				debug!("coloring aborted after {} steps", self.steps);
				return ColorOutcome::Aborted { steps: self.steps };
			}
			self.steps += 1;

			let vertex = frame.vertex;
			// vertices above `vertex` are all unassigned at this point
			let found = (frame.next..colors.end).find(|&color| {
				graph.lower_neighbors(vertex).all(|u| assignment.get(u) != color)
			});
			match found {
				Some(color) => {
					trace!("vertex {vertex} <- color {color}");
					assignment.set(vertex, color);
					frame.next = color + 1;
					if vertex + 1 == n {
						debug!(
							"colored {} vertices with {} colors in {} steps",
							n,
							assignment.max_color(),
							self.steps
						);
						return ColorOutcome::AllColored(assignment);
					}
					stack.push(Frame {
						vertex: vertex + 1,
						next: colors.start,
					});
				}
				None => {
					trace!("vertex {vertex} exhausted, backtracking");
					assignment.set(vertex, UNASSIGNED);
					stack.pop();
				}
			}
		}
		debug!(
			"no coloring with {} colors after {} steps",
			self.palette.size(),
			self.steps
		);
		ColorOutcome::ExhaustedRoot
	}
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, Rng, SeedableRng};

	use super::*;

	fn graph(n: usize, edges: &[(VarId, VarId)]) -> InterferenceGraph {
		let mut graph = InterferenceGraph::new(n);
		for &(a, b) in edges {
			graph.add_edge(a, b).unwrap();
		}
		graph
	}

	fn complete(n: usize) -> InterferenceGraph {
		let edges: Vec<_> =
			(0..n).flat_map(|a| (a + 1..n).map(move |b| (a, b))).collect();
		graph(n, &edges)
	}

	fn solve(graph: &InterferenceGraph, size: usize) -> ColorOutcome {
		ColorSolver::new(graph, Palette::new(size).unwrap()).solve()
	}

	#[test]
	fn first_solution_in_search_order() {
		let g = graph(3, &[(0, 1)]);
		assert_eq!(
			solve(&g, 3),
			ColorOutcome::AllColored(vec![1, 2, 1].into())
		);
	}

	#[test]
	fn backtracks_out_of_greedy_dead_end() {
		// path 0 - 2 - 3 - 1: greedy gives 0 and 1 the same color, leaving 3
		// with none
		let g = graph(4, &[(0, 2), (1, 3), (2, 3)]);
		let mut solver = ColorSolver::new(&g, Palette::new(3).unwrap());
		assert_eq!(
			solver.solve(),
			ColorOutcome::AllColored(vec![1, 2, 2, 1].into())
		);
		assert_eq!(solver.steps(), 8);
	}

	#[test]
	fn step_limit_aborts() {
		let g = graph(4, &[(0, 2), (1, 3), (2, 3)]);
		let palette = Palette::new(3).unwrap();
		assert_eq!(
			ColorSolver::new(&g, palette).with_limit(Some(7)).solve(),
			ColorOutcome::Aborted { steps: 7 }
		);
		assert!(ColorSolver::new(&g, palette).with_limit(Some(8)).solve().is_colored());
	}

	#[test]
	fn odd_cycle_needs_three_colors() {
		let g = graph(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
		assert_eq!(solve(&g, 3), ColorOutcome::ExhaustedRoot);
		assert!(solve(&g, 4).is_colored());
	}

	#[test]
	fn complete_graph_boundary() {
		for v in 1..=7 {
			let g = complete(v);
			for k in 1..=9 {
				let outcome = solve(&g, k);
				assert_eq!(outcome.is_colored(), k - 1 >= v, "V = {v}, K = {k}");
				if let ColorOutcome::AllColored(assignment) = outcome {
					let expected: Vec<_> = (1..=v).collect();
					assert_eq!(assignment.as_slice(), &expected[..]);
				}
			}
		}
	}

	#[test]
	fn empty_and_isolated() {
		let empty = InterferenceGraph::default();
		assert_eq!(
			solve(&empty, 1),
			ColorOutcome::AllColored(ColorAssignment::default())
		);
		let isolated = InterferenceGraph::new(2);
		assert_eq!(solve(&isolated, 1), ColorOutcome::ExhaustedRoot);
		assert_eq!(
			solve(&isolated, 2),
			ColorOutcome::AllColored(vec![1, 1].into())
		);
	}

	#[test]
	fn random_colorings_are_valid_and_repeatable() {
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..40 {
			let n = rng.gen_range(1..10);
			let mut g = InterferenceGraph::new(n);
			for a in 0..n {
				for b in a + 1..n {
					if rng.gen_bool(0.35) {
						g.add_edge(a, b).unwrap();
					}
				}
			}
			let size = rng.gen_range(2..=12);
			let first = solve(&g, size);
			assert_eq!(first, solve(&g, size));
			if let ColorOutcome::AllColored(assignment) = first {
				assert_eq!(assignment.len(), n);
				assert!(assignment.iter().all(|(_, c)| (1..size).contains(&c)));
				assert_eq!(assignment.conflicts(&g).count(), 0);
			} else {
				// a degree bound always admits a coloring
				let max_degree = (0..n).map(|v| g.degree(v)).max().unwrap_or(0);
				assert!(size - 1 <= max_degree);
			}
		}
	}
}
