//! JSON configuration for flow containers.
//!
//! ```json
//! {
//!   "padding": { "top": 8, "left": 8, "right": 8, "bottom": 8 },
//!   "gutter_size": 20,
//!   "children": [
//!     { "intrinsic": { "width": 0, "height": 40 }, "line_slot_count": 2 },
//!     {
//!       "intrinsic": { "width": 90, "height": 30 },
//!       "requested": { "width": { "fixed": 90 } }
//!     }
//!   ]
//! }
//! ```
//!
//! Unknown keys are rejected at every level, so a misspelled field fails to
//! load instead of being ignored.

use flowwrap_core::{FlowError, Padding};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::child::FlowItem;
use crate::container::FlowContainer;
use crate::display::DisplayMetrics;
use crate::flow::WrapThreshold;

/// Errors while loading a container description.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid flow config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Flow(#[from] FlowError),
}

/// Serializable description of a flow container and its children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowSpec {
    pub padding: Padding,
    pub gutter_size: i32,
    pub wrap_threshold: WrapThreshold,
    pub children: Vec<FlowItem>,
}

impl FlowSpec {
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a container, registering children in order.
    pub fn into_container(
        self,
        display: impl DisplayMetrics + 'static,
    ) -> Result<FlowContainer, ConfigError> {
        let mut container = FlowContainer::new(display)
            .with_padding(self.padding)
            .with_wrap_threshold(self.wrap_threshold);
        container.set_gutter_size(self.gutter_size)?;

        for child in self.children {
            container.add_child(child)?;
        }

        Ok(container)
    }
}
