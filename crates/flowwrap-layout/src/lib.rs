//! Flow-wrap layout for rectangular children.
//!
//! Children are arranged left to right inside a width-constrained container
//! and broken onto successive lines when the next child would overflow.
//!
//! # Architecture
//!
//! 1. **Slot sizing**: children declaring a line slot count are pre-sized from
//!    the display width when they are registered
//! 2. **Measure pass**: walks the children once and resolves the container size
//! 3. **Layout pass**: walks the measured children again with the final width
//!    and produces one placement per visible child
//!
//! # Example
//!
//! ```
//! use flowwrap_core::MeasureSpec;
//! use flowwrap_layout::{FlowContainer, FlowItem, StaticDisplayMetrics};
//!
//! let mut container = FlowContainer::new(StaticDisplayMetrics(300));
//! container.set_gutter_size(20)?;
//! container.add_child(FlowItem::new(0, 40).with_line_slots(2))?;
//! container.add_child(FlowItem::new(0, 40).with_line_slots(2))?;
//!
//! let measurement = container.measure(MeasureSpec::exact(300), MeasureSpec::bounded(600));
//! for placement in container.layout(&measurement, measurement.size.width) {
//!     println!("child {} on line {}: {:?}", placement.index, placement.line, placement.bounds);
//! }
//! # Ok::<(), flowwrap_core::FlowError>(())
//! ```

mod child;
mod config;
mod container;
mod display;
mod flow;
mod placement;
mod slot;

pub use child::{FlowChild, FlowItem, MeasuredChild};
pub use config::{ConfigError, FlowSpec};
pub use container::FlowContainer;
pub use display::{
    platform_default, DisplayMetrics, EnvWidth, FixedWidth, FnWidth, StaticDisplayMetrics,
    TieredDisplayMetrics, WidthSource, DISPLAY_WIDTH_ENV, FALLBACK_DISPLAY_WIDTH,
};
pub use flow::{FlowLayoutEngine, FlowMeasurement, WrapThreshold};
pub use placement::{hit_test, Bounds, Placement};
pub use slot::{apply_slot_sizing, slot_sizing, validate_slot_count, SlotSizing};
