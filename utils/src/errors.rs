use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AllocError {
	#[error("parse error: {0}")]
	ParseError(String),
	#[error("invalid palette: {0}")]
	PaletteError(String),
	#[error("internal inconsistency: {0}")]
	InternalInconsistency(String),
	#[error("system error: {0}")]
	SystemError(String),
}

pub type Result<T, E = AllocError> = std::result::Result<T, E>;

pub fn map_sys_err(e: std::io::Error) -> AllocError {
	AllocError::SystemError(e.to_string())
}
