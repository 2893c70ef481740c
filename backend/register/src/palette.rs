use std::ops::Range;

use utils::{
	constants::{PALETTE_SIZE, UNASSIGNED},
	errors::Result,
	AllocError::PaletteError,
};

pub type Color = usize;

#[derive(Debug, PartialEq, Eq)]
pub struct ColorInfo {
	pub name: &'static str,
	pub html: &'static str,
}

const fn info(name: &'static str, html: &'static str) -> ColorInfo {
	ColorInfo { name, html }
}

/// Indexed by color id; entry 0 is the reserved "none".
static COLOR_TABLE: [ColorInfo; PALETTE_SIZE] = [
	info("none", "#909090"),
	info("red", "#EA0D0D"),
	info("blue", "#0D67EA"),
	info("green", "#29C529"),
	info("yellow", "#E5F30C"),
	info("purple", "#980CF3"),
	info("black", "#000000"),
	info("pink", "#F510E3"),
	info("orange", "#F5A210"),
	info("cyan", "#10F5C8"),
	info("white", "#FFFFFF"),
	info("brown", "#6E2C00"),
];

/// `size` counts the reserved color, so a palette of size K offers the
/// colors `1..K`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
	size: usize,
}

impl Default for Palette {
	fn default() -> Self {
		Self { size: PALETTE_SIZE }
	}
}

impl Palette {
	pub fn new(size: usize) -> Result<Self> {
		if size == 0 || size > COLOR_TABLE.len() {
			return Err(PaletteError(format!(
				"palette size must be within 1..={}, got {}",
				COLOR_TABLE.len(),
				size
			)));
		}
		Ok(Self { size })
	}

	pub fn size(&self) -> usize {
		self.size
	}

	pub fn usable(&self) -> Range<Color> {
		UNASSIGNED + 1..self.size
	}

	pub fn info(&self, color: Color) -> Option<&'static ColorInfo> {
		(color < self.size).then(|| &COLOR_TABLE[color])
	}

	/// Unknown ids render as the reserved color.
	pub fn name(&self, color: Color) -> &'static str {
		self.info(color).unwrap_or(&COLOR_TABLE[UNASSIGNED]).name
	}

	pub fn html(&self, color: Color) -> &'static str {
		self.info(color).unwrap_or(&COLOR_TABLE[UNASSIGNED]).html
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn size_is_validated() {
		assert!(Palette::new(0).is_err());
		assert!(Palette::new(PALETTE_SIZE + 1).is_err());
		assert_eq!(Palette::new(1).unwrap().usable().count(), 0);
		assert_eq!(Palette::default().usable(), 1..12);
	}

	#[test]
	fn lookup_respects_declared_size() {
		let palette = Palette::new(3).unwrap();
		assert_eq!(palette.name(1), "red");
		assert_eq!(palette.html(2), "#0D67EA");
		assert_eq!(palette.info(3), None);
		assert_eq!(palette.name(3), "none");
		assert_eq!(palette.html(UNASSIGNED), "#909090");
	}
}
