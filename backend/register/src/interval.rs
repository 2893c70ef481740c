use std::{collections::HashMap, fmt::Display};

use ast::Instr;
use log::debug;
use utils::constants::MAX_VARIABLE_LEN;

pub type VarId = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
	pub id: VarId,
	pub name: String,
	pub first_use: usize,
	pub last_use: usize,
}

impl Variable {
	/// Inclusive on both ends: `[1, 3]` and `[3, 5]` overlap.
	pub fn overlaps(&self, other: &Variable) -> bool {
		self.first_use <= other.last_use && self.last_use >= other.first_use
	}
}

impl Display for Variable {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{} [{}, {}]", self.name, self.first_use, self.last_use)
	}
}

/// Operands of at most two characters name variables, longer ones are
/// literals or memory addresses.
pub fn is_variable(operand: &str) -> bool {
	!operand.is_empty() && operand.chars().count() <= MAX_VARIABLE_LEN
}

#[derive(Clone, Debug, Default)]
pub struct VarTable {
	vars: Vec<Variable>,
	index: HashMap<String, VarId>,
}

impl VarTable {
	pub fn extract(instrs: &[Instr]) -> Self {
		let mut table = Self::default();
		for (index, instr) in instrs.iter().enumerate() {
			for operand in instr.operands.iter().filter(|v| is_variable(v)) {
				table.touch(operand, index);
			}
		}
		debug!(
			"extracted {} variables from {} instructions",
			table.len(),
			instrs.len()
		);
		table
	}

	pub(crate) fn touch(&mut self, name: &str, index: usize) {
		if let Some(&id) = self.index.get(name) {
			self.vars[id].last_use = index;
		} else {
			let id = self.vars.len();
			self.index.insert(name.to_string(), id);
			self.vars.push(Variable {
				id,
				name: name.to_string(),
				first_use: index,
				last_use: index,
			});
		}
	}

	pub fn len(&self) -> usize {
		self.vars.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vars.is_empty()
	}

	pub fn get(&self, id: VarId) -> Option<&Variable> {
		self.vars.get(id)
	}

	pub fn lookup(&self, name: &str) -> Option<&Variable> {
		self.index.get(name).map(|&id| &self.vars[id])
	}

	pub fn iter(&self) -> impl Iterator<Item = &Variable> {
		self.vars.iter()
	}

	pub fn name(&self, id: VarId) -> &str {
		self.vars.get(id).map_or("?", |v| v.name.as_str())
	}
}
