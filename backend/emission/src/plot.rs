use register::{allocator::Location, palette::Palette, Solution};
use utils::constants::UNASSIGNED;

use crate::utils::{graph_head, quote};

/// Renders the interference graph in DOT, each vertex filled with its
/// final color. Spilled or uncolored vertices use the reserved color.
pub fn plot(solution: &Solution, palette: &Palette) -> String {
	let locations = solution.allocation().map(|r| r.locations()).unwrap_or_default();
	let color = |v: usize| match locations.get(v) {
		Some(&Location::Register(color)) => color,
		_ => UNASSIGNED,
	};
	let vertices = solution.vars.iter().map(|var| {
		format!(
			"  {} [label={}, fillcolor={}];",
			var.id,
			quote(&var.name),
			quote(palette.html(color(var.id)))
		)
	});
	let edges = solution.graph.edges().map(|(a, b)| format!("  {} -- {};", a, b));
	let body: Vec<_> = vertices.chain(edges).collect();
	if body.is_empty() {
		format!("{}\n}}\n", graph_head())
	} else {
		format!("{}\n{}\n}}\n", graph_head(), body.join("\n"))
	}
}
