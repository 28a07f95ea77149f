//! flexlay: a proportional box layout engine.
//!
//! A host builds a tree of elements once, then calls
//! [`Flexlay::perform_layout`] every tick and reads the computed rectangles
//! back through [`Flexlay::rects`] or [`Flexlay::element_rect`] for drawing
//! and event handling. The engine owns nothing beyond the tree and the
//! rectangle mapping; rendering and input stay with the host.
//!
//! ```
//! use flexlay::{Axis, ElementSpec, Flexlay, LayoutRect};
//!
//! let mut flex = Flexlay::new();
//! let shell = flex.create_element(ElementSpec {
//!     bounds: LayoutRect::new(10, 10, 236, 220),
//!     axis: Axis::Vertical,
//!     ..Default::default()
//! });
//! let toolbar = flex.create_element(ElementSpec {
//!     parent: Some(shell),
//!     bounds: LayoutRect::new(0, 0, 0, 40),
//!     proportion: 0,
//!     axis: Axis::Horizontal,
//!     ..Default::default()
//! });
//! flex.create_element(ElementSpec { parent: Some(toolbar), ..Default::default() });
//!
//! flex.perform_layout();
//! assert_eq!(flex.element_rect(shell), LayoutRect::new(10, 10, 236, 220));
//! ```

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, trace, warn};

pub mod layout;
mod printing;

pub use layout::{Axis, LayoutRect};

/// A stable handle for a layout element, unique for the lifetime of one
/// engine instance and never reused.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Creation record for [`Flexlay::create_element`].
///
/// Only the fields that differ from the defaults need to be spelled out;
/// `..Default::default()` fills the rest (proportion 1, border 3, spacing 3,
/// horizontal axis, 100x100 bounds, no parent).
#[derive(Debug, Clone, Copy)]
pub struct ElementSpec {
    /// Containing element, or `None` to create a root.
    pub parent: Option<ElementId>,
    /// For a root: the absolute viewport rectangle. For anything else: size
    /// hints only; width/height feed fixed sizing, x/y are ignored.
    pub bounds: LayoutRect,
    pub proportion: u32,
    pub border: u32,
    pub spacing: u32,
    pub axis: Axis,
}

impl Default for ElementSpec {
    fn default() -> Self {
        Self {
            parent: None,
            bounds: LayoutRect::new(0, 0, 100, 100),
            proportion: 1,
            border: 3,
            spacing: 3,
            axis: Axis::Horizontal,
        }
    }
}

/// A node in the layout tree.
#[derive(Debug, Clone)]
pub struct Element {
    /// Established at creation, immutable thereafter. `None` marks a root.
    pub parent: Option<ElementId>,
    pub bounds: LayoutRect,
    /// How many shares of the remaining growth-axis space this element
    /// claims relative to its siblings. Zero opts out of distribution and
    /// keeps the declared size instead.
    pub proportion: u32,
    /// Inner padding applied to all four sides of the content area when
    /// this element acts as a container.
    pub border: u32,
    /// Gap between consecutive children along the growth axis.
    pub spacing: u32,
    /// Direction along which children are distributed.
    pub axis: Axis,
    /// Layout order along the growth axis; appended to by
    /// [`Flexlay::create_element`] only.
    pub children: Vec<ElementId>,
}

/// The engine: owns the element tree and the per-pass rectangle mapping.
pub struct Flexlay {
    next_id: u64,
    elements: HashMap<ElementId, Element>,
    rects: HashMap<ElementId, LayoutRect>,
    /// Telemetry: number of layout passes performed.
    perf_layout_passes: u64,
    /// Telemetry: elements laid out by the last pass.
    perf_elements_laid_out_last: u64,
    /// Telemetry: last pass wall time in milliseconds.
    perf_layout_time_last_ms: u64,
    /// Telemetry: cumulative pass wall time in milliseconds.
    perf_layout_time_total_ms: u64,
}

impl Flexlay {
    /// Create an empty engine. Ids start at 1.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            elements: HashMap::new(),
            rects: HashMap::new(),
            perf_layout_passes: 0,
            perf_elements_laid_out_last: 0,
            perf_layout_time_last_ms: 0,
            perf_layout_time_total_ms: 0,
        }
    }

    /// Allocate a fresh element from `spec` and link it under its parent.
    ///
    /// Always returns the new id. When `spec.parent` names an element that
    /// was never created, the link is skipped with a warning and the new
    /// element stays parentless, laying out as its own root.
    pub fn create_element(&mut self, spec: ElementSpec) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(
            id,
            Element {
                parent: None,
                bounds: spec.bounds,
                proportion: spec.proportion,
                border: spec.border,
                spacing: spec.spacing,
                axis: spec.axis,
                children: Vec::new(),
            },
        );
        if let Some(parent) = spec.parent {
            self.link_parent(id, parent);
        }
        trace!("created element {:?} parent={:?}", id, spec.parent);
        id
    }

    fn link_parent(&mut self, id: ElementId, parent: ElementId) {
        if !self.elements.contains_key(&parent) {
            warn!("parent {:?} missing; leaving element {:?} unattached", parent, id);
            return;
        }
        self.elements.get_mut(&id).expect("just inserted").parent = Some(parent);
        self.elements
            .get_mut(&parent)
            .expect("presence checked above")
            .children
            .push(id);
    }

    /// Look up a stored element. Absence is an expected outcome, not an
    /// error.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Mutable access to a stored element, e.g. to adjust size hints
    /// between passes.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Parentless elements in ascending id order: the layout roots.
    fn roots(&self) -> Vec<ElementId> {
        let mut roots: Vec<ElementId> = self
            .elements
            .iter()
            .filter_map(|(id, el)| el.parent.is_none().then_some(*id))
            .collect();
        roots.sort();
        roots
    }

    /// Recursively (re)generate the layout rectangles of all elements.
    ///
    /// Always a full recompute: the previous mapping is discarded and every
    /// element reachable from a root gets a fresh absolute rectangle.
    /// Idempotent for an unchanged tree.
    pub fn perform_layout(&mut self) {
        let start = Instant::now();
        self.rects.clear();
        for root in self.roots() {
            layout::layout_element(&self.elements, root, &mut self.rects);
        }
        self.perf_layout_passes += 1;
        self.perf_elements_laid_out_last = self.rects.len() as u64;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        self.perf_layout_time_last_ms = elapsed_ms;
        self.perf_layout_time_total_ms = self.perf_layout_time_total_ms.saturating_add(elapsed_ms);
        debug!(
            "layout pass {}: {} elements in {}ms",
            self.perf_layout_passes, self.perf_elements_laid_out_last, elapsed_ms
        );
    }

    /// The rectangles generated by the last pass, keyed by element id. Use
    /// this after [`Self::perform_layout`] to render widgets and route
    /// events.
    pub fn rects(&self) -> &HashMap<ElementId, LayoutRect> {
        &self.rects
    }

    /// Rectangle for one element; the all-zero rect when the id has no
    /// computed rectangle.
    pub fn element_rect(&self, id: ElementId) -> LayoutRect {
        self.rects.get(&id).copied().unwrap_or_default()
    }

    /// Rewrite the bounds of the lowest-id root so a host can feed window
    /// resizes without rebuilding the tree. Returns false when the engine
    /// has no root.
    pub fn set_root_bounds(&mut self, bounds: LayoutRect) -> bool {
        let Some(root) = self.roots().into_iter().next() else {
            return false;
        };
        self.elements
            .get_mut(&root)
            .expect("roots() only returns stored ids")
            .bounds = bounds;
        debug!("root {:?} bounds set to {:?}", root, bounds);
        true
    }

    /// Telemetry: number of layout passes performed.
    pub fn perf_layout_passes(&self) -> u64 {
        self.perf_layout_passes
    }
    /// Telemetry: elements laid out by the last pass.
    pub fn perf_elements_laid_out_last(&self) -> u64 {
        self.perf_elements_laid_out_last
    }
    /// Telemetry: wall time of the last pass in milliseconds.
    pub fn perf_layout_time_last_ms(&self) -> u64 {
        self.perf_layout_time_last_ms
    }
    /// Telemetry: cumulative layout wall time in milliseconds.
    pub fn perf_layout_time_total_ms(&self) -> u64 {
        self.perf_layout_time_total_ms
    }
}

impl Default for Flexlay {
    fn default() -> Self {
        Self::new()
    }
}
