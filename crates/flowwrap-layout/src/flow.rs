//! Flow-wrap measure and layout passes.
//!
//! Children run left to right and break onto a new line when the next one
//! would overflow. Both passes keep their line accumulators as locals, so the
//! engine can be invoked any number of times with identical results.
//!
//! The two passes deliberately disagree on the wrap threshold: measuring
//! compares against the width minus horizontal padding, while laying out
//! compares against the raw final width unless [`WrapThreshold::ContentWidth`]
//! is selected.

use flowwrap_core::{MeasureSpec, Padding, Size, Visibility};
use tracing::{debug, trace};

use crate::child::{FlowChild, MeasuredChild};
use crate::placement::{Bounds, Placement};

/// Width the layout pass compares each line against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapThreshold {
    /// The full final width, padding included
    #[default]
    FullWidth,
    /// The final width minus horizontal padding, matching the measure pass
    ContentWidth,
}

/// Result of the measure pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowMeasurement {
    /// Resolved container size
    pub size: Size,
    /// One entry per input child, in input order
    pub children: Vec<MeasuredChild>,
}

/// Flow layout configuration and passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowLayoutEngine {
    /// Padding inside the container
    pub padding: Padding,
    /// Threshold policy for the layout pass
    pub wrap_threshold: WrapThreshold,
}

#[derive(Debug, Default)]
struct LineTotals {
    line_width: i32,
    line_height: i32,
    total_width: i32,
    total_height: i32,
}

impl LineTotals {
    /// Fold the current line into the totals.
    fn flush(&mut self) {
        self.total_width = self.total_width.max(self.line_width);
        self.total_height = self.total_height.saturating_add(self.line_height);
    }
}

impl FlowLayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_wrap_threshold(mut self, wrap_threshold: WrapThreshold) -> Self {
        self.wrap_threshold = wrap_threshold;
        self
    }

    /// Measure all children and resolve the container size.
    pub fn measure<C: FlowChild>(
        &self,
        children: &[C],
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
    ) -> FlowMeasurement {
        let available_width = width_spec.size.saturating_sub(self.padding.horizontal());
        let last = children.len().checked_sub(1);
        let mut totals = LineTotals::default();
        let mut measured = Vec::with_capacity(children.len());

        for (i, child) in children.iter().enumerate() {
            let is_last = Some(i) == last;
            let margins = child.margins();
            let visibility = child.visibility();

            if visibility == Visibility::Collapsed {
                // The final line is flushed even when the final child is collapsed.
                if is_last {
                    totals.flush();
                }
                measured.push(MeasuredChild { size: Size::ZERO, margins, visibility });
                continue;
            }

            let requested = child.requested_size();
            let size = child.measure(
                width_spec.for_child(self.padding.horizontal(), requested.width),
                height_spec.for_child(self.padding.vertical(), requested.height),
            );
            let child_box = size.outset(margins);

            if totals.line_width.saturating_add(child_box.width) > available_width {
                trace!(
                    index = i,
                    line_width = totals.line_width,
                    child_width = child_box.width,
                    available_width,
                    "measure: wrapping line"
                );
                totals.flush();
                totals.line_width = child_box.width;
                totals.line_height = child_box.height;
            } else {
                totals.line_width = totals.line_width.saturating_add(child_box.width);
                totals.line_height = totals.line_height.max(child_box.height);
            }

            if is_last {
                totals.flush();
            }

            measured.push(MeasuredChild { size, margins, visibility });
        }

        let size = Size::new(
            width_spec.resolve_container(totals.total_width.saturating_add(self.padding.horizontal())),
            height_spec.resolve_container(totals.total_height.saturating_add(self.padding.vertical())),
        );

        debug!(
            children = children.len(),
            width = size.width,
            height = size.height,
            "measured flow container"
        );

        FlowMeasurement { size, children: measured }
    }

    /// Width the layout pass wraps against for a given final width.
    pub fn layout_threshold(&self, final_width: i32) -> i32 {
        match self.wrap_threshold {
            WrapThreshold::FullWidth => final_width,
            WrapThreshold::ContentWidth => final_width.saturating_sub(self.padding.horizontal()),
        }
    }

    /// Place every visible child given the container's final width.
    pub fn layout(&self, children: &[MeasuredChild], final_width: i32) -> Vec<Placement> {
        let threshold = self.layout_threshold(final_width);
        let mut placements = Vec::with_capacity(children.len());
        let mut line_width: i32 = 0;
        let mut line_height: i32 = 0;
        let mut max_child_height = 0;
        let mut line = 0;
        let mut line_occupied = false;

        for (index, child) in children.iter().enumerate() {
            if child.visibility != Visibility::Visible {
                continue;
            }

            let child_box = child.box_size();

            if line_width.saturating_add(child_box.width) > threshold {
                trace!(index, line_width, child_width = child_box.width, threshold, "layout: wrapping line");
                line_width = 0;
                line_height = line_height.saturating_add(max_child_height);
                max_child_height = 0;
                if line_occupied {
                    line += 1;
                    line_occupied = false;
                }
            }

            let left = line_width.saturating_add(child.margins.left);
            let top = line_height.saturating_add(child.margins.top);
            let bounds = Bounds::new(
                left,
                top,
                left.saturating_add(child.size.width),
                top.saturating_add(child.size.height),
            );

            line_width = bounds.right.saturating_add(child.margins.right);
            max_child_height = max_child_height.max(child_box.height);
            line_occupied = true;

            placements.push(Placement { index, line, bounds });
        }

        debug!(placed = placements.len(), final_width, threshold, "laid out flow container");

        placements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::child::FlowItem;
    use flowwrap_core::Insets;

    fn scenario_children() -> Vec<FlowItem> {
        vec![
            FlowItem::fixed(100, 30),
            FlowItem::fixed(100, 50),
            FlowItem::fixed(100, 40),
            FlowItem::fixed(150, 20),
        ]
    }

    #[test]
    fn test_measure_wraps_when_line_overflows() {
        let engine = FlowLayoutEngine::new();
        let result = engine.measure(
            &scenario_children(),
            MeasureSpec::exact(300),
            MeasureSpec::bounded(1000),
        );

        // Line 1: 100+100+100 = 300 fits; line 2 holds the 150-wide child.
        assert_eq!(result.size, Size::new(300, 50 + 20));
        assert_eq!(result.children.len(), 4);
    }

    #[test]
    fn test_measure_bounded_width_reports_widest_line() {
        let engine = FlowLayoutEngine::new();
        let result = engine.measure(
            &scenario_children(),
            MeasureSpec::bounded(320),
            MeasureSpec::bounded(1000),
        );
        assert_eq!(result.size, Size::new(300, 70));
    }

    #[test]
    fn test_measure_adds_padding_when_not_exact() {
        let engine = FlowLayoutEngine::new().with_padding(Insets::new(5, 10, 10, 5));
        let children = vec![FlowItem::fixed(100, 30), FlowItem::fixed(100, 30)];
        let result = engine.measure(&children, MeasureSpec::bounded(220), MeasureSpec::bounded(500));

        // Available width is 200, so both fit on one line.
        assert_eq!(result.size, Size::new(220, 40));
    }

    #[test]
    fn test_measure_padding_narrows_available_width() {
        let engine = FlowLayoutEngine::new().with_padding(Insets::symmetric(10, 0));
        let children = vec![FlowItem::fixed(100, 30), FlowItem::fixed(100, 30)];
        let result = engine.measure(&children, MeasureSpec::bounded(210), MeasureSpec::bounded(500));

        // Available width is 190, so the second child wraps.
        assert_eq!(result.size, Size::new(120, 60));
    }

    #[test]
    fn test_measure_exact_height_ignores_content() {
        let engine = FlowLayoutEngine::new();
        let result = engine.measure(
            &scenario_children(),
            MeasureSpec::exact(300),
            MeasureSpec::exact(12),
        );
        assert_eq!(result.size, Size::new(300, 12));
    }

    #[test]
    fn test_measure_empty() {
        let engine = FlowLayoutEngine::new().with_padding(Insets::uniform(4));
        let result = engine.measure::<FlowItem>(&[], MeasureSpec::bounded(300), MeasureSpec::bounded(300));
        assert_eq!(result.size, Size::new(8, 8));
        assert!(result.children.is_empty());
    }

    #[test]
    fn test_measure_margins_join_box_size() {
        let engine = FlowLayoutEngine::new();
        let children = vec![
            FlowItem::fixed(90, 20).with_margins(Insets::uniform(5)),
            FlowItem::fixed(90, 20).with_margins(Insets::uniform(5)),
        ];
        let result = engine.measure(&children, MeasureSpec::bounded(200), MeasureSpec::bounded(200));
        assert_eq!(result.size, Size::new(200, 30));
    }

    #[test]
    fn test_measure_trailing_collapsed_child_flushes_last_line() {
        let engine = FlowLayoutEngine::new();
        let children = vec![
            FlowItem::fixed(100, 30),
            FlowItem::fixed(80, 40),
            FlowItem::fixed(500, 500).with_visibility(Visibility::Collapsed),
        ];
        let result = engine.measure(&children, MeasureSpec::bounded(300), MeasureSpec::bounded(300));

        assert_eq!(result.size, Size::new(180, 40));
        assert_eq!(result.children[2].size, Size::ZERO);
    }

    #[test]
    fn test_measure_collapsed_mid_sequence_is_skipped() {
        let engine = FlowLayoutEngine::new();
        let children = vec![
            FlowItem::fixed(100, 30),
            FlowItem::fixed(500, 500).with_visibility(Visibility::Collapsed),
            FlowItem::fixed(100, 30),
        ];
        let result = engine.measure(&children, MeasureSpec::bounded(300), MeasureSpec::bounded(300));
        assert_eq!(result.size, Size::new(200, 30));
    }

    #[test]
    fn test_measure_hidden_child_occupies_space() {
        let engine = FlowLayoutEngine::new();
        let children = vec![
            FlowItem::fixed(200, 30),
            FlowItem::fixed(200, 60).with_visibility(Visibility::Hidden),
        ];
        let result = engine.measure(&children, MeasureSpec::bounded(300), MeasureSpec::bounded(300));
        assert_eq!(result.size, Size::new(200, 90));
    }

    #[test]
    fn test_layout_places_lines() {
        let engine = FlowLayoutEngine::new();
        let measurement = engine.measure(
            &scenario_children(),
            MeasureSpec::exact(300),
            MeasureSpec::bounded(1000),
        );
        let placements = engine.layout(&measurement.children, 300);

        let lefts: Vec<i32> = placements.iter().map(|p| p.bounds.left).collect();
        let tops: Vec<i32> = placements.iter().map(|p| p.bounds.top).collect();
        let lines: Vec<usize> = placements.iter().map(|p| p.line).collect();

        assert_eq!(lefts, vec![0, 100, 200, 0]);
        assert_eq!(tops, vec![0, 0, 0, 50]);
        assert_eq!(lines, vec![0, 0, 0, 1]);
        assert_eq!(placements[3].bounds, Bounds::new(0, 50, 150, 70));
    }

    #[test]
    fn test_layout_applies_margins() {
        let engine = FlowLayoutEngine::new();
        let children = vec![
            FlowItem::fixed(50, 20).with_margins(Insets::new(1, 2, 3, 4)),
            FlowItem::fixed(50, 20).with_margins(Insets::uniform(5)),
        ];
        let measurement = engine.measure(&children, MeasureSpec::exact(200), MeasureSpec::bounded(200));
        let placements = engine.layout(&measurement.children, 200);

        assert_eq!(placements[0].bounds, Bounds::new(2, 1, 52, 21));
        // 52 + right margin 3 + left margin 5
        assert_eq!(placements[1].bounds, Bounds::new(60, 5, 110, 25));
    }

    #[test]
    fn test_layout_skips_hidden_and_collapsed() {
        let engine = FlowLayoutEngine::new();
        let children = vec![
            FlowItem::fixed(100, 30).with_visibility(Visibility::Hidden),
            FlowItem::fixed(100, 30),
            FlowItem::fixed(100, 30).with_visibility(Visibility::Collapsed),
        ];
        let measurement = engine.measure(&children, MeasureSpec::exact(300), MeasureSpec::bounded(300));
        let placements = engine.layout(&measurement.children, 300);

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].index, 1);
        assert_eq!(placements[0].bounds, Bounds::new(0, 0, 100, 30));
    }

    #[test]
    fn test_layout_thresholds_differ_with_padding() {
        let children = vec![FlowItem::fixed(100, 30), FlowItem::fixed(100, 30)];
        let padding = Insets::symmetric(10, 0);

        let full = FlowLayoutEngine::new().with_padding(padding);
        let measured = full.measure(&children, MeasureSpec::exact(210), MeasureSpec::bounded(300));
        let placements = full.layout(&measured.children, 210);
        assert_eq!(placements[1].line, 0);
        assert_eq!(placements[1].bounds.left, 100);

        let content = full.with_wrap_threshold(WrapThreshold::ContentWidth);
        let placements = content.layout(&measured.children, 210);
        assert_eq!(placements[1].line, 1);
        assert_eq!(placements[1].bounds, Bounds::new(0, 30, 100, 60));
    }

    #[test]
    fn test_layout_oversized_first_child_stays_on_first_line() {
        let engine = FlowLayoutEngine::new();
        let children = vec![FlowItem::fixed(400, 30), FlowItem::fixed(50, 30)];
        let measurement = engine.measure(&children, MeasureSpec::exact(300), MeasureSpec::bounded(300));
        let placements = engine.layout(&measurement.children, 300);

        assert_eq!(placements[0].line, 0);
        assert_eq!(placements[0].bounds, Bounds::new(0, 0, 400, 30));
        assert_eq!(placements[1].line, 1);
        assert_eq!(placements[1].bounds, Bounds::new(0, 30, 50, 60));
    }

    #[test]
    fn test_passes_are_idempotent() {
        let engine = FlowLayoutEngine::new().with_padding(Insets::uniform(3));
        let children = scenario_children();

        let first = engine.measure(&children, MeasureSpec::bounded(280), MeasureSpec::bounded(500));
        let second = engine.measure(&children, MeasureSpec::bounded(280), MeasureSpec::bounded(500));
        assert_eq!(first, second);

        let width = first.size.width;
        assert_eq!(engine.layout(&first.children, width), engine.layout(&second.children, width));
    }

    #[test]
    fn test_near_max_widths_saturate() {
        let engine = FlowLayoutEngine::new();
        let children = vec![
            FlowItem::fixed(i32::MAX - 10, 10).with_margins(Insets::uniform(1)),
            FlowItem::fixed(i32::MAX - 10, 10).with_margins(Insets::uniform(1)),
        ];
        let measurement = engine.measure(&children, MeasureSpec::exact(i32::MAX), MeasureSpec::bounded(1000));
        assert_eq!(measurement.size, Size::new(i32::MAX, 12));

        let placements = engine.layout(&measurement.children, i32::MAX);
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].bounds, Bounds::new(1, 1, i32::MAX - 9, 11));
        assert_eq!(placements[1].bounds.left, i32::MAX - 7);
        assert_eq!(placements[1].bounds.right, i32::MAX);
    }

    #[test]
    fn test_near_max_heights_saturate() {
        let engine = FlowLayoutEngine::new().with_padding(Insets::symmetric(0, 5));
        let children = vec![
            FlowItem::fixed(100, i32::MAX / 2),
            FlowItem::fixed(100, i32::MAX / 2),
            FlowItem::fixed(100, i32::MAX / 2),
            FlowItem::fixed(100, i32::MAX / 2),
        ];

        let exact = engine.measure(&children, MeasureSpec::exact(150), MeasureSpec::exact(500));
        assert_eq!(exact.size, Size::new(150, 500));

        let bounded = engine.measure(&children, MeasureSpec::bounded(150), MeasureSpec::bounded(i32::MAX));
        assert_eq!(bounded.size, Size::new(100, i32::MAX));

        let placements = engine.layout(&bounded.children, 150);
        let lines: Vec<usize> = placements.iter().map(|p| p.line).collect();
        assert_eq!(lines, vec![0, 1, 2, 3]);
        assert_eq!(placements[1].bounds.top, i32::MAX / 2);
        assert_eq!(placements[2].bounds.top, i32::MAX - 1);
        assert_eq!(placements[2].bounds.bottom, i32::MAX);
        assert_eq!(placements[3].bounds.top, i32::MAX);
    }
}
