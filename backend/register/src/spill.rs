use utils::constants::UNASSIGNED;

use crate::{interval::VarId, palette::Color, solver::ColorAssignment};

/// Resets every vertex whose color is not promoted to `UNASSIGNED` and
/// returns the ids sent to memory, in ascending order.
pub fn spill(assignment: &mut ColorAssignment, promoted: &[Color]) -> Vec<VarId> {
	let spilled: Vec<_> = assignment
		.iter()
		.filter(|(_, color)| !promoted.contains(color))
		.map(|(v, _)| v)
		.collect();
	for &v in spilled.iter() {
		assignment.set(v, UNASSIGNED);
	}
	spilled
}
