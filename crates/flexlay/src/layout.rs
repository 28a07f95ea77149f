//! Growth-axis distribution: the recursive resolver that turns the element
//! tree into absolute pixel rectangles.
//!
//! Each container splits its own rectangle among its children along one
//! axis. Fixed-size children (proportion 0) reserve their declared extent up
//! front; the rest is cut into shares by truncating integer division.
//! Rounding remainders are not redistributed, so a container can leave up to
//! `total_shares - 1` pixels unused.

use std::collections::HashMap;

use log::trace;

use crate::{Element, ElementId};

/// A simple rectangle for layout geometry.
///
/// `Default` is the all-zero rectangle, which is also what lookups for
/// unknown elements return. Negative extents are representable and
/// propagated as-is; intermediate math can produce them transiently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl LayoutRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

/// Direction along which a container distributes its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// The axis orthogonal to this one.
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Origin of `rect` along this axis.
    pub const fn origin(self, rect: &LayoutRect) -> i32 {
        match self {
            Self::Horizontal => rect.x,
            Self::Vertical => rect.y,
        }
    }

    /// Extent of `rect` along this axis.
    pub const fn extent(self, rect: &LayoutRect) -> i32 {
        match self {
            Self::Horizontal => rect.width,
            Self::Vertical => rect.height,
        }
    }

    pub const fn set_origin(self, rect: &mut LayoutRect, origin: i32) {
        match self {
            Self::Horizontal => rect.x = origin,
            Self::Vertical => rect.y = origin,
        }
    }

    pub const fn set_extent(self, rect: &mut LayoutRect, extent: i32) {
        match self {
            Self::Horizontal => rect.width = extent,
            Self::Vertical => rect.height = extent,
        }
    }
}

/// Recursively lay out `id` and everything below it, storing one rect per
/// element into `rects`.
///
/// A parentless element seeds its own rect from its declared bounds; any
/// other container finds its rect already stored by its parent. An id with
/// no stored element is nothing to do, not a fault.
pub(crate) fn layout_element(
    elements: &HashMap<ElementId, Element>,
    id: ElementId,
    rects: &mut HashMap<ElementId, LayoutRect>,
) {
    let Some(el) = elements.get(&id) else { return };

    if el.parent.is_none() {
        rects.insert(id, el.bounds);
    }
    if el.children.is_empty() {
        return;
    }

    let mut total_shares: i32 = el
        .children
        .iter()
        .filter_map(|child| elements.get(child))
        .map(|child| child.proportion as i32)
        .sum();
    if total_shares <= 0 {
        total_shares = 1;
    }

    let container = rects.get(&id).copied().unwrap_or_default();
    let axis = el.axis;
    let cross = axis.cross();
    let border = el.border as i32;
    let spacing = el.spacing as i32;

    // Fixed-size children reserve their declared extent before shares are cut.
    let mut remaining = axis.extent(&container);
    for child in el.children.iter().filter_map(|child| elements.get(child)) {
        if child.proportion == 0 {
            remaining -= axis.extent(&child.bounds);
        }
    }

    // Captured once per container: every share is cut from the same extent,
    // so truncation remainders stay unused instead of going to a sibling.
    let content_extent = remaining - border * 2;

    let mut cursor = axis.origin(&container) + border;
    let last = *el.children.last().expect("children checked non-empty");

    for &child_id in &el.children {
        let Some(child) = elements.get(&child_id) else { continue };

        // Declared width/height are size hints; declared x/y are ignored.
        let mut rect = child.bounds;
        cross.set_origin(&mut rect, cross.origin(&container) + border);
        cross.set_extent(&mut rect, cross.extent(&container) - border * 2);

        // Proportion-0 children keep their declared extent either way; the
        // subtraction only matters through the truncating division.
        let share = (content_extent
            - if child.proportion == 0 { axis.extent(&rect) } else { 0 })
            / total_shares;
        if child.proportion >= 1 {
            axis.set_extent(&mut rect, share * child.proportion as i32);
        }
        axis.set_origin(&mut rect, cursor);

        cursor += axis.extent(&rect);
        remaining -= axis.extent(&rect);

        // Spacing shrinks the child in place. The cursor already advanced by
        // the full extent, so the gap lands between this child and the next.
        if child_id != last {
            let shrunk = axis.extent(&rect) - spacing;
            axis.set_extent(&mut rect, shrunk);
        }

        rects.insert(child_id, rect);
        layout_element(elements, child_id, rects);
    }

    trace!("container {:?}: {}px leftover along {:?}", id, remaining, axis);
}
