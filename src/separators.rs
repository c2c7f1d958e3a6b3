//! Fixed BEM separators.

/// Separates a block from its element: `block__element`.
pub const ELEMENT: &str = "__";
/// Separates a block or element from its modifier: `block--modifier`.
pub const MODIFIER: &str = "--";
/// Separates a modifier name from its value: `block--size_big`.
pub const MODIFIER_VALUE: &str = "_";
