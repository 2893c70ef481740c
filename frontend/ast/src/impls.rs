use std::fmt::Display;

use crate::tree::{Header, Instr, Program};

impl Header {
	pub fn new(label: impl Display, registers: usize) -> Self {
		Self {
			label: label.to_string(),
			registers,
		}
	}
}

impl Instr {
	pub fn new<S: Display>(
		line: usize,
		address: impl Display,
		opcode: impl Display,
		operands: &[S],
	) -> Self {
		Self {
			line,
			address: address.to_string(),
			opcode: opcode.to_string(),
			operands: operands.iter().map(|v| v.to_string()).collect(),
		}
	}
}

impl Program {
	pub fn new(header: Header, instrs: Vec<Instr>) -> Self {
		Self { header, instrs }
	}
}

impl Display for Header {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}: {}", self.label, self.registers)
	}
}

impl Display for Instr {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{} {}", self.address, self.opcode)?;
		if !self.operands.is_empty() {
			write!(f, " {}", self.operands.join(", "))?;
		}
		Ok(())
	}
}

impl Display for Program {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		writeln!(f, "{}", self.header)?;
		for instr in self.instrs.iter() {
			writeln!(f, "{}", instr)?;
		}
		Ok(())
	}
}
