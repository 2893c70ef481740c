use register::{palette::Palette, Outcome, Solution};

pub fn report(solution: &Solution, palette: &Palette, budget: usize) -> String {
	let usable = palette.usable().len();
	let result = match &solution.outcome {
		Outcome::Allocated(result) => result,
		Outcome::NoSolution { colors } => {
			return format!("no coloring exists with {} usable colors\n", colors)
		}
		Outcome::Aborted { steps } => {
			return format!("coloring search aborted after {} steps\n", steps)
		}
	};
	let name = |v| solution.vars.name(v);

	let mut lines = vec![
		format!(
			"found a coloring using {} of {} usable colors",
			result.registers_needed, usable
		),
		format!("registers needed: {}", result.registers_needed),
		format!("registers available: {}", budget),
	];
	// the ranking prefix is exactly the promoted colors
	for &(color, count) in result.ranking.iter().take(result.promoted.len()) {
		lines.push(format!("register {} ({} variables):", palette.name(color), count));
		lines.extend(
			result
				.assignment
				.iter()
				.filter(|&(_, c)| c == color)
				.map(|(v, _)| format!("  {}", name(v))),
		);
	}
	lines.extend(
		solution
			.vars
			.iter()
			.filter(|var| result.is_spilled(var.id))
			.map(|var| format!("{} -> memory", var.name)),
	);
	lines.join("\n") + "\n"
}
