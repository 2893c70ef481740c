use std::collections::BTreeMap;

use utils::constants::UNASSIGNED;

use crate::{palette::Color, solver::ColorAssignment};

/// Number of vertices holding each real color.
pub fn populations(assignment: &ColorAssignment) -> BTreeMap<Color, usize> {
	assignment
		.iter()
		.filter(|&(_, color)| color != UNASSIGNED)
		.fold(BTreeMap::new(), |mut map, (_, color)| {
			*map.entry(color).or_default() += 1;
			map
		})
}

/// Most populated colors first; equal populations go by ascending color id.
pub fn rank_colors(populations: &BTreeMap<Color, usize>) -> Vec<(Color, usize)> {
	let mut ranking: Vec<_> = populations.iter().map(|(&c, &n)| (c, n)).collect();
	ranking.sort_by(|(x, nx), (y, ny)| ny.cmp(nx).then(x.cmp(y)));
	ranking
}
