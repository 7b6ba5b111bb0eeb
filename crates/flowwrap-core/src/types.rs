//! Core value types for flow layout.
//!
//! All lengths are integer device units.

/// Spacing on all four sides of a box.
///
/// Used both for container padding and for child margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Container padding.
pub type Padding = Insets;

/// Child margins.
pub type Margins = Insets;

impl Insets {
    pub const ZERO: Self = Self { top: 0, left: 0, right: 0, bottom: 0 };

    pub const fn new(top: i32, left: i32, right: i32, bottom: i32) -> Self {
        Self { top, left, right, bottom }
    }

    /// Create uniform insets.
    pub const fn uniform(value: i32) -> Self {
        Self {
            top: value,
            left: value,
            right: value,
            bottom: value,
        }
    }

    /// Create symmetric insets.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            top: vertical,
            left: horizontal,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Total horizontal insets.
    pub const fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical insets.
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self { width: 0, height: 0 };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grow this size by the given insets (content box to margin box).
    pub const fn outset(self, insets: Insets) -> Self {
        Self {
            width: self.width.saturating_add(insets.horizontal()),
            height: self.height.saturating_add(insets.vertical()),
        }
    }
}

/// How a child takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Visibility {
    /// Measured, placed and drawn
    #[default]
    Visible,
    /// Measured but not placed; still occupies space while measuring
    Hidden,
    /// Neither measured nor placed
    Collapsed,
}

/// A child's requested size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    /// Exactly this many device units
    Fixed(i32),
    /// As large as the content, within the parent's limits
    #[default]
    WrapContent,
    /// As large as the parent allows
    MatchParent,
}

/// Requested width and height of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RequestedSize {
    pub width: Dimension,
    pub height: Dimension,
}

/// Measure constraint modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeasureMode {
    /// Use exactly the given size
    Exact,
    /// Use at most the given size, shrinking to content
    Bounded,
    /// No limit; the size is only a hint
    #[default]
    Unspecified,
}

/// A size constraint along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: i32,
}

impl MeasureSpec {
    pub const fn exact(size: i32) -> Self {
        Self { mode: MeasureMode::Exact, size }
    }

    pub const fn bounded(size: i32) -> Self {
        Self { mode: MeasureMode::Bounded, size }
    }

    pub const fn unspecified(size: i32) -> Self {
        Self { mode: MeasureMode::Unspecified, size }
    }

    pub const fn is_exact(&self) -> bool {
        matches!(self.mode, MeasureMode::Exact)
    }

    /// Derive the spec a child sees from this (parent) spec.
    ///
    /// `padding` is the parent's padding along the same axis. Child margins
    /// are not subtracted.
    pub fn for_child(&self, padding: i32, requested: Dimension) -> MeasureSpec {
        let available = self.size.saturating_sub(padding).max(0);

        match (self.mode, requested) {
            (_, Dimension::Fixed(px)) => MeasureSpec::exact(px),
            (MeasureMode::Exact, Dimension::MatchParent) => MeasureSpec::exact(available),
            (MeasureMode::Exact, Dimension::WrapContent)
            | (MeasureMode::Bounded, Dimension::MatchParent)
            | (MeasureMode::Bounded, Dimension::WrapContent) => MeasureSpec::bounded(available),
            (MeasureMode::Unspecified, _) => MeasureSpec::unspecified(available),
        }
    }

    /// Resolve a content size against this spec.
    pub fn resolve(&self, content: i32) -> i32 {
        match self.mode {
            MeasureMode::Exact => self.size,
            MeasureMode::Bounded => content.min(self.size),
            MeasureMode::Unspecified => content,
        }
    }

    /// Resolve a container size: the spec size if exact, otherwise the content.
    pub fn resolve_container(&self, content: i32) -> i32 {
        if self.is_exact() {
            self.size
        } else {
            content
        }
    }
}
