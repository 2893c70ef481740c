pub const PARSER_INDENT: usize = 2;
pub const DEFAULT_LOG_FILTER: &str = "warn";
