//! Layout constants shared by the passes.

/// Spaces per list nesting level.
pub const LIST_INDENT_WIDTH: usize = 2;

/// Width a leading tab contributes to list indentation.
pub const TAB_WIDTH: usize = LIST_INDENT_WIDTH;

/// Deepest ATX heading (`######`).
pub const MAX_HEADING_LEVEL: usize = 6;

/// Minimum backtick run that opens or closes a fenced code block.
pub const FENCE_LEN: usize = 3;

/// List frames kept inline before the frame stack spills to the heap.
pub const INLINE_LIST_FRAMES: usize = 8;

/// Maximum digits accepted in an ordered list marker.
pub const MAX_LIST_MARKER_DIGITS: usize = 9;

/// Cells kept per table row; the rest of a very wide row is dropped.
pub const MAX_TABLE_COLUMNS: usize = 128;

/// Fallback id for headings whose slug comes out empty.
pub const EMPTY_SLUG_FALLBACK: &str = "heading";
