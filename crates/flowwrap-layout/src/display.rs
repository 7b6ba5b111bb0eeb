//! Display width providers.
//!
//! Slot sizing needs the ambient display width. Platforms expose that through
//! several APIs of varying age and reliability, so a provider is built from
//! ordered [`WidthSource`] tiers and never fails: when every tier errors it
//! falls back to the last width it saw, then to [`FALLBACK_DISPLAY_WIDTH`].

use std::cell::Cell;
use std::fmt;

use flowwrap_core::DisplayError;
use tracing::{debug, warn};

/// Width used when no tier has ever produced a value.
pub const FALLBACK_DISPLAY_WIDTH: i32 = 360;

/// Environment variable read by [`EnvWidth::default`].
pub const DISPLAY_WIDTH_ENV: &str = "FLOWWRAP_DISPLAY_WIDTH";

/// Ambient display width as seen by the layout core.
pub trait DisplayMetrics {
    /// Available width in device units. Always non-negative.
    fn available_width(&self) -> i32;
}

/// A single way of asking the platform for its width.
pub trait WidthSource {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    fn query_width(&self) -> Result<i32, DisplayError>;
}

/// A provider that always reports the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticDisplayMetrics(pub i32);

impl DisplayMetrics for StaticDisplayMetrics {
    fn available_width(&self) -> i32 {
        self.0.max(0)
    }
}

/// A tier that always succeeds with a known width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub i32);

impl WidthSource for FixedWidth {
    fn name(&self) -> &str {
        "fixed"
    }

    fn query_width(&self) -> Result<i32, DisplayError> {
        Ok(self.0)
    }
}

/// A tier that reads the width from an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvWidth {
    var: String,
}

impl EnvWidth {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvWidth {
    fn default() -> Self {
        Self::new(DISPLAY_WIDTH_ENV)
    }
}

impl WidthSource for EnvWidth {
    fn name(&self) -> &str {
        &self.var
    }

    fn query_width(&self) -> Result<i32, DisplayError> {
        let raw = std::env::var(&self.var).map_err(|err| DisplayError::Unavailable {
            source_name: self.var.clone(),
            reason: err.to_string(),
        })?;

        raw.trim().parse::<i32>().map_err(|err| DisplayError::Unavailable {
            source_name: self.var.clone(),
            reason: format!("cannot parse {raw:?}: {err}"),
        })
    }
}

/// A tier backed by a closure, for hosts wrapping their own platform calls.
pub struct FnWidth<F> {
    name: String,
    query: F,
}

impl<F> FnWidth<F>
where
    F: Fn() -> Result<i32, DisplayError>,
{
    pub fn new(name: impl Into<String>, query: F) -> Self {
        Self {
            name: name.into(),
            query,
        }
    }
}

impl<F> fmt::Debug for FnWidth<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnWidth").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<F> WidthSource for FnWidth<F>
where
    F: Fn() -> Result<i32, DisplayError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn query_width(&self) -> Result<i32, DisplayError> {
        (self.query)()
    }
}

/// Best-effort provider that tries each tier in order.
///
/// Tiers are ordered newest API first; the first success wins.
pub struct TieredDisplayMetrics {
    tiers: Vec<Box<dyn WidthSource>>,
    last_known: Cell<Option<i32>>,
    fallback: i32,
}

impl TieredDisplayMetrics {
    pub fn new() -> Self {
        Self {
            tiers: Vec::new(),
            last_known: Cell::new(None),
            fallback: FALLBACK_DISPLAY_WIDTH,
        }
    }

    /// Append a tier with lower priority than those already added.
    pub fn with_tier(mut self, tier: impl WidthSource + 'static) -> Self {
        self.tiers.push(Box::new(tier));
        self
    }

    /// Width reported when no tier has ever succeeded.
    pub fn with_fallback(mut self, fallback: i32) -> Self {
        self.fallback = fallback.max(0);
        self
    }

    /// The last width any tier produced.
    pub fn last_known(&self) -> Option<i32> {
        self.last_known.get()
    }

    fn query(&self) -> Option<i32> {
        for tier in &self.tiers {
            let result = tier.query_width().and_then(|width| {
                if width < 0 {
                    Err(DisplayError::InvalidWidth {
                        source_name: tier.name().to_string(),
                        width: i64::from(width),
                    })
                } else {
                    Ok(width)
                }
            });

            match result {
                Ok(width) => return Some(width),
                Err(err) => debug!(tier = tier.name(), %err, "display width tier failed"),
            }
        }
        None
    }
}

impl Default for TieredDisplayMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TieredDisplayMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.tiers.iter().map(|tier| tier.name()).collect();
        f.debug_struct("TieredDisplayMetrics")
            .field("tiers", &names)
            .field("last_known", &self.last_known.get())
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl DisplayMetrics for TieredDisplayMetrics {
    fn available_width(&self) -> i32 {
        if let Some(width) = self.query() {
            self.last_known.set(Some(width));
            return width;
        }

        let width = self.last_known.get().unwrap_or(self.fallback);
        warn!(width, "all display width tiers failed, using fallback");
        width
    }
}

/// Best-effort provider for the current target.
pub fn platform_default() -> TieredDisplayMetrics {
    TieredDisplayMetrics::new().with_tier(EnvWidth::default())
}
