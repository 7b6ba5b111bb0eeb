//! Fixed-slot sizing.
//!
//! A child that declares `line_slot_count = N` is pre-sized so that N such
//! children plus N + 1 gutters exactly fill the display width. Only the width
//! and margins are touched; the child is then measured and placed like any
//! other.

use flowwrap_core::{Dimension, FlowError, Insets};
use tracing::{debug, warn};

use crate::child::FlowItem;
use crate::display::DisplayMetrics;

/// Width and uniform margin computed for a slot child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSizing {
    pub width: i32,
    pub margin: i32,
}

impl SlotSizing {
    pub fn margins(&self) -> Insets {
        Insets::uniform(self.margin)
    }
}

/// Validate a declared slot count.
pub fn validate_slot_count(count: u32) -> Result<i32, FlowError> {
    match i32::try_from(count) {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FlowError::InvalidSlotCount { count }),
    }
}

/// Compute the slot width for `count` slots separated by `gutter`.
///
/// Uses floor division. A result below zero is clamped to zero.
pub fn slot_sizing(available_width: i32, gutter: i32, count: u32) -> Result<SlotSizing, FlowError> {
    if gutter < 0 {
        return Err(FlowError::NegativeGutter { gutter });
    }
    let n = validate_slot_count(count)?;

    let gutters = (i64::from(n) + 1) * i64::from(gutter);
    let remaining = i64::from(available_width) - gutters;
    let width = remaining.div_euclid(i64::from(n));

    let width = if width < 0 {
        warn!(available_width, gutter, count, "gutters exceed display width, slot width clamped to 0");
        0
    } else {
        // Bounded by available_width, which fits in i32.
        width as i32
    };

    Ok(SlotSizing {
        width,
        margin: gutter / 2,
    })
}

/// Apply slot sizing to an item if it declares a slot count.
///
/// The display is queried at most once, and only after the count is known
/// to be valid. Returns the sizing that was applied, if any.
pub fn apply_slot_sizing(
    item: &mut FlowItem,
    gutter: i32,
    display: &dyn DisplayMetrics,
) -> Result<Option<SlotSizing>, FlowError> {
    let Some(count) = item.line_slot_count else {
        return Ok(None);
    };
    validate_slot_count(count)?;
    if gutter < 0 {
        return Err(FlowError::NegativeGutter { gutter });
    }

    let available_width = display.available_width();
    let sizing = slot_sizing(available_width, gutter, count)?;

    item.margins = sizing.margins();
    item.requested.width = Dimension::Fixed(sizing.width);

    debug!(count, gutter, available_width, width = sizing.width, "sized slot child");

    Ok(Some(sizing))
}
