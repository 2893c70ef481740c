/// Number of entries in the color table, the reserved `none` included.
pub const PALETTE_SIZE: usize = 12;
/// Operands longer than this are treated as literals or addresses.
pub const MAX_VARIABLE_LEN: usize = 2;
/// Color id meaning "uncolored" during search and "spilled" afterwards.
pub const UNASSIGNED: usize = 0;
