use log::debug;
use utils::constants::UNASSIGNED;

use crate::{
	interval::VarId,
	palette::Color,
	solver::ColorAssignment,
	spill::spill,
	utils::{populations, rank_colors},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
	Register(Color),
	Memory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationResult {
	/// Final colors, spilled vertices reset to `UNASSIGNED`.
	pub assignment: ColorAssignment,
	/// Highest color id of the coloring, before any demotion.
	pub registers_needed: Color,
	pub ranking: Vec<(Color, usize)>,
	/// Colors that got a physical register, in ranking order.
	pub promoted: Vec<Color>,
	pub spilled: Vec<VarId>,
}

impl AllocationResult {
	pub fn location(&self, v: VarId) -> Location {
		match self.assignment.get(v) {
			UNASSIGNED => Location::Memory,
			color => Location::Register(color),
		}
	}

	pub fn locations(&self) -> Vec<Location> {
		(0..self.assignment.len()).map(|v| self.location(v)).collect()
	}

	pub fn is_spilled(&self, v: VarId) -> bool {
		self.location(v) == Location::Memory
	}
}

/// Maps the colors of a finished coloring onto `budget` physical registers.
pub struct RegAllocator {
	budget: usize,
}

impl RegAllocator {
	pub fn new(budget: usize) -> Self {
		Self { budget }
	}

	pub fn alloc(&self, mut assignment: ColorAssignment) -> AllocationResult {
		let registers_needed = assignment.max_color();
		let ranking = rank_colors(&populations(&assignment));
		let promoted: Vec<_> =
			ranking.iter().take(self.budget).map(|&(color, _)| color).collect();
		let spilled = spill(&mut assignment, &promoted);
		debug!(
			"{} of {} colors promoted, {} variables spilled",
			promoted.len(),
			ranking.len(),
			spilled.len()
		);
		AllocationResult {
			assignment,
			registers_needed,
			ranking,
			promoted,
			spilled,
		}
	}
}
