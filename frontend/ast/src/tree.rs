/// `label: N` line at the top of every input, `N` being the register budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
	pub label: String,
	pub registers: usize,
}

/// One non-blank instruction line, already split into fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instr {
	pub line: usize,
	pub address: String,
	pub opcode: String,
	pub operands: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
	pub header: Header,
	pub instrs: Vec<Instr>,
}
