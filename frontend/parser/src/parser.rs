use ast::{Header, Instr, Program};
use pest::{error::Error, Parser};
use pest_derive::Parser;
use utils::{errors::Result, AllocError::ParseError};

#[derive(Parser)]
#[grammar = "asm.pest"]
struct AsmParser;

fn syntax_error(line: usize, e: Error<Rule>) -> utils::AllocError {
	ParseError(format!("line {}: {}", line, e.variant.message()))
}

fn parse_header(line: usize, text: &str) -> Result<Header> {
	let pairs =
		AsmParser::parse(Rule::header, text).map_err(|e| syntax_error(line, e))?;
	let mut label = None;
	let mut registers = None;
	for pair in pairs.flat_map(|v| v.into_inner()) {
		match pair.as_rule() {
			Rule::label => label = Some(pair.as_str().trim()),
			Rule::count => {
				registers = Some(pair.as_str().parse::<usize>().map_err(|e| {
					ParseError(format!("line {}: register count: {}", line, e))
				})?)
			}
			_ => (),
		}
	}
	match (label, registers) {
		(Some(label), Some(registers)) => Ok(Header::new(label, registers)),
		_ => Err(ParseError(format!("line {}: malformed header", line))),
	}
}

fn parse_instr(line: usize, text: &str) -> Result<Instr> {
	let pairs =
		AsmParser::parse(Rule::instr, text).map_err(|e| syntax_error(line, e))?;
	let mut fields = Vec::new();
	let mut operands = Vec::new();
	for pair in pairs.flat_map(|v| v.into_inner()) {
		match pair.as_rule() {
			Rule::address | Rule::opcode => fields.push(pair.as_str()),
			Rule::operands => {
				operands.extend(pair.into_inner().map(|v| v.as_str()))
			}
			_ => (),
		}
	}
	match fields[..] {
		[address, opcode] => Ok(Instr::new(line, address, opcode, &operands)),
		_ => Err(ParseError(format!("line {}: malformed instruction", line))),
	}
}

/// Reads a whole program. Blank lines are skipped and never become
/// instructions; `Instr::line` keeps the 1-based source line.
pub fn parse(str: &str) -> Result<Program> {
	let mut lines = str
		.lines()
		.enumerate()
		.map(|(index, text)| (index + 1, text))
		.filter(|(_, text)| !text.trim().is_empty());
	let (line, text) = lines
		.next()
		.ok_or_else(|| ParseError("missing register header".to_string()))?;
	let header = parse_header(line, text)?;
	let instrs = lines
		.map(|(line, text)| parse_instr(line, text))
		.collect::<Result<Vec<_>>>()?;
	Ok(Program::new(header, instrs))
}
