use std::{collections::BTreeSet, fmt::Display};

use log::debug;
use utils::{errors::Result, AllocError::InternalInconsistency};

use crate::interval::{VarId, VarTable};

/// Undirected, irreflexive interference graph over variable ids `0..n`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterferenceGraph {
	adjacency: Vec<BTreeSet<VarId>>,
}

impl InterferenceGraph {
	pub fn new(vertices: usize) -> Self {
		Self {
			adjacency: vec![BTreeSet::new(); vertices],
		}
	}

	/// Tests every unordered pair once, so building is quadratic in the
	/// number of variables. Fine for hand-written programs; a sorted sweep
	/// over the intervals would be needed for large inputs.
	pub fn build(table: &VarTable) -> Self {
		let mut graph = Self::new(table.len());
		let vars: Vec<_> = table.iter().collect();
		for (i, a) in vars.iter().enumerate() {
			for b in vars[i + 1..].iter() {
				if a.overlaps(b) {
					graph.adjacency[a.id].insert(b.id);
					graph.adjacency[b.id].insert(a.id);
				}
			}
		}
		debug!(
			"interference graph: {} vertices, {} edges",
			graph.vertex_count(),
			graph.edge_count()
		);
		graph
	}

	pub fn add_edge(&mut self, a: VarId, b: VarId) -> Result<()> {
		let n = self.vertex_count();
		if a >= n || b >= n {
			return Err(InternalInconsistency(format!(
				"edge ({a}, {b}) references a vertex outside 0..{n}"
			)));
		}
		if a == b {
			return Err(InternalInconsistency(format!("self edge on vertex {a}")));
		}
		self.adjacency[a].insert(b);
		self.adjacency[b].insert(a);
		Ok(())
	}

	pub fn vertex_count(&self) -> usize {
		self.adjacency.len()
	}

	pub fn edge_count(&self) -> usize {
		self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
	}

	pub fn neighbors(&self, v: VarId) -> impl Iterator<Item = VarId> + '_ {
		self.adjacency.get(v).into_iter().flatten().copied()
	}

	/// Neighbors with an id below `v`, i.e. those already visited by an
	/// ascending-id search.
	pub fn lower_neighbors(&self, v: VarId) -> impl Iterator<Item = VarId> + '_ {
		self.adjacency.get(v).into_iter().flat_map(move |set| set.range(..v)).copied()
	}

	pub fn degree(&self, v: VarId) -> usize {
		self.adjacency.get(v).map_or(0, BTreeSet::len)
	}

	pub fn interferes(&self, a: VarId, b: VarId) -> bool {
		self.adjacency.get(a).is_some_and(|set| set.contains(&b))
	}

	/// Each edge once, as `(low, high)`, in ascending order.
	pub fn edges(&self) -> impl Iterator<Item = (VarId, VarId)> + '_ {
		self.adjacency.iter().enumerate().flat_map(|(a, set)| {
			set.range(a + 1..).map(move |&b| (a, b))
		})
	}

	pub fn validate(&self) -> Result<()> {
		let n = self.vertex_count();
		for (a, set) in self.adjacency.iter().enumerate() {
			for &b in set.iter() {
				if b >= n {
					return Err(InternalInconsistency(format!(
						"vertex {a} lists undefined neighbor {b}"
					)));
				}
				if a == b {
					return Err(InternalInconsistency(format!("self edge on vertex {a}")));
				}
				if !self.adjacency[b].contains(&a) {
					return Err(InternalInconsistency(format!(
						"edge {a} -> {b} has no reverse"
					)));
				}
			}
		}
		Ok(())
	}
}

impl Display for InterferenceGraph {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for from in 0..self.vertex_count() {
			let tos: Vec<_> = self.neighbors(from).map(|v| v.to_string()).collect();
			writeln!(f, "{} -> {}", from, tos.join(", "))?;
		}
		Ok(())
	}
}
