//! Host-side flow container.
//!
//! Owns the ordered children and container configuration, runs slot sizing
//! when children are registered, and forwards the two passes to a
//! [`FlowLayoutEngine`].

use std::fmt;

use flowwrap_core::{FlowError, MeasureSpec, Padding};
use tracing::debug;

use crate::child::FlowItem;
use crate::display::DisplayMetrics;
use crate::flow::{FlowLayoutEngine, FlowMeasurement, WrapThreshold};
use crate::placement::Placement;
use crate::slot::apply_slot_sizing;

/// An ordered set of flow children plus container configuration.
pub struct FlowContainer {
    engine: FlowLayoutEngine,
    gutter_size: i32,
    children: Vec<FlowItem>,
    display: Box<dyn DisplayMetrics>,
}

impl FlowContainer {
    pub fn new(display: impl DisplayMetrics + 'static) -> Self {
        Self {
            engine: FlowLayoutEngine::default(),
            gutter_size: 0,
            children: Vec::new(),
            display: Box::new(display),
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.engine.padding = padding;
        self
    }

    pub fn with_wrap_threshold(mut self, wrap_threshold: WrapThreshold) -> Self {
        self.engine.wrap_threshold = wrap_threshold;
        self
    }

    pub fn engine(&self) -> &FlowLayoutEngine {
        &self.engine
    }

    pub fn gutter_size(&self) -> i32 {
        self.gutter_size
    }

    /// Set the gutter used for slot sizing.
    ///
    /// Only children registered afterwards are sized with the new gutter.
    pub fn set_gutter_size(&mut self, gutter_size: i32) -> Result<(), FlowError> {
        if gutter_size < 0 {
            return Err(FlowError::NegativeGutter { gutter: gutter_size });
        }
        self.gutter_size = gutter_size;
        Ok(())
    }

    pub fn children(&self) -> &[FlowItem] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Register a child at the end of the sequence.
    pub fn add_child(&mut self, item: FlowItem) -> Result<(), FlowError> {
        self.insert_child(self.children.len(), item)
    }

    /// Register a child at `index`, shifting later children back.
    pub fn insert_child(&mut self, index: usize, mut item: FlowItem) -> Result<(), FlowError> {
        if index > self.children.len() {
            return Err(FlowError::IndexOutOfBounds {
                index,
                len: self.children.len(),
            });
        }

        apply_slot_sizing(&mut item, self.gutter_size, self.display.as_ref())?;
        self.children.insert(index, item);
        debug!(index, len = self.children.len(), "registered flow child");
        Ok(())
    }

    pub fn remove_child(&mut self, index: usize) -> Option<FlowItem> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Run the measure pass over the registered children.
    pub fn measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> FlowMeasurement {
        self.engine.measure(&self.children, width_spec, height_spec)
    }

    /// Run the layout pass over a measurement of this container.
    pub fn layout(&self, measurement: &FlowMeasurement, final_width: i32) -> Vec<Placement> {
        self.engine.layout(&measurement.children, final_width)
    }
}

impl fmt::Debug for FlowContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowContainer")
            .field("engine", &self.engine)
            .field("gutter_size", &self.gutter_size)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
