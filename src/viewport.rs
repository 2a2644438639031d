//! Vertical viewport intersection.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Vertical extent of an element relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VerticalRect {
    pub top: f64,
    pub bottom: f64,
}

impl VerticalRect {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// True when any part of `rect` overlaps a viewport of `viewport_height`.
///
/// Edges touching the viewport count as visible. No horizontal check.
#[must_use]
pub fn intersects(rect: VerticalRect, viewport_height: f64) -> bool {
    rect.top <= viewport_height && rect.bottom >= 0.0
}
