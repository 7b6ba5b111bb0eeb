//! Children of a flow container.

use flowwrap_core::{Dimension, Margins, MeasureSpec, RequestedSize, Size, Visibility};
use serde::{Deserialize, Serialize};

/// Anything the engine can measure and place.
pub trait FlowChild {
    fn visibility(&self) -> Visibility;

    fn margins(&self) -> Margins;

    /// Requested width and height, used to derive the child's measure specs.
    fn requested_size(&self) -> RequestedSize;

    /// Measure the content size against the given specs.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size;
}

/// A plain child element with a known intrinsic content size.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowItem {
    /// Natural content size
    pub intrinsic: Size,
    /// Requested width and height
    pub requested: RequestedSize,
    pub margins: Margins,
    pub visibility: Visibility,
    /// Number of equal slots this child shares its line with
    pub line_slot_count: Option<u32>,
}

impl FlowItem {
    /// Create a wrap-content item with the given intrinsic size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            intrinsic: Size::new(width, height),
            ..Default::default()
        }
    }

    /// Create an item with fixed width and height.
    pub fn fixed(width: i32, height: i32) -> Self {
        Self {
            intrinsic: Size::new(width, height),
            requested: RequestedSize {
                width: Dimension::Fixed(width),
                height: Dimension::Fixed(height),
            },
            ..Default::default()
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_width(mut self, width: Dimension) -> Self {
        self.requested.width = width;
        self
    }

    pub fn with_height(mut self, height: Dimension) -> Self {
        self.requested.height = height;
        self
    }

    /// Declare that this child takes one of `count` equal slots on its line.
    pub fn with_line_slots(mut self, count: u32) -> Self {
        self.line_slot_count = Some(count);
        self
    }
}

impl FlowChild for FlowItem {
    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn margins(&self) -> Margins {
        self.margins
    }

    fn requested_size(&self) -> RequestedSize {
        self.requested
    }

    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        Size::new(
            width.resolve(self.intrinsic.width),
            height.resolve(self.intrinsic.height),
        )
    }
}

/// A child as seen by the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasuredChild {
    /// Measured content size; zero for collapsed children
    pub size: Size,
    pub margins: Margins,
    pub visibility: Visibility,
}

impl MeasuredChild {
    /// Content size plus margins.
    pub fn box_size(&self) -> Size {
        self.size.outset(self.margins)
    }
}
