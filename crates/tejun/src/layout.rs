//! Deterministic left-to-right layout for process models.
//!
//! Layout is a pure function of element order and kind; it never inspects
//! element names, so re-laying-out the same model is idempotent. Element `i`
//! is placed at `x = origin_x + i * spacing`; box dimensions depend only on
//! the element kind; every kind shares one vertical center line so events,
//! gateways, and tasks line up visually.

use indexmap::IndexMap;
use log::debug;

use tejun_core::{
    geometry::{Bounds, Point, Size},
    model::{ElementKind, ProcessModel},
};

use crate::config::LayoutConfig;

/// Box dimensions for start and end events.
const EVENT_SIZE: Size = Size::new(36.0, 36.0);
/// Box dimensions for gateways.
const GATEWAY_SIZE: Size = Size::new(50.0, 50.0);
/// Box dimensions for tasks.
const TASK_SIZE: Size = Size::new(120.0, 80.0);

/// Derived geometry for one model: a bounding box per element and a waypoint
/// sequence per flow, keyed by id in model order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutInfo {
    shapes: IndexMap<String, Bounds>,
    edges: IndexMap<String, Vec<Point>>,
}

impl LayoutInfo {
    /// Returns the bounding box for the given element id.
    pub fn shape(&self, element_id: &str) -> Option<Bounds> {
        self.shapes.get(element_id).copied()
    }

    /// Returns the waypoints for the given flow id.
    pub fn edge(&self, flow_id: &str) -> Option<&[Point]> {
        self.edges.get(flow_id).map(Vec::as_slice)
    }

    /// Iterates element bounding boxes in model order.
    pub fn shapes(&self) -> impl Iterator<Item = (&str, Bounds)> {
        self.shapes.iter().map(|(id, bounds)| (id.as_str(), *bounds))
    }

    /// Iterates flow waypoint sequences in model order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &[Point])> {
        self.edges
            .iter()
            .map(|(id, points)| (id.as_str(), points.as_slice()))
    }
}

/// Returns the box size for an element kind.
fn node_size(kind: ElementKind) -> Size {
    match kind {
        ElementKind::StartEvent | ElementKind::EndEvent => EVENT_SIZE,
        ElementKind::Gateway(_) => GATEWAY_SIZE,
        ElementKind::Task(_) => TASK_SIZE,
    }
}

/// Computes bounding boxes and flow waypoints for a process model.
///
/// Every element kind is centered on the same horizontal line,
/// `center_y = origin_y + tallest_height / 2`; flow waypoints run from the
/// source element's center to the target element's center on that line
/// (a straight connector, no routing).
pub fn layout(model: &ProcessModel, config: &LayoutConfig) -> LayoutInfo {
    let center_y = config.origin_y() + TASK_SIZE.height() / 2.0;

    let mut shapes = IndexMap::with_capacity(model.elements.len());
    for (index, element) in model.elements.iter().enumerate() {
        let size = node_size(element.kind);
        let x = config.origin_x() + index as f32 * config.spacing();
        let y = center_y - size.height() / 2.0;
        shapes.insert(element.id.clone(), Bounds::new(Point::new(x, y), size));
    }

    let mut edges = IndexMap::with_capacity(model.flows.len());
    for flow in &model.flows {
        let source = shapes.get(&flow.source_ref).copied();
        let target = shapes.get(&flow.target_ref).copied();

        // Dangling references have no geometry; the validator reports them,
        // serialization simply omits the edge record's waypoints.
        let waypoints = match (source, target) {
            (Some(source), Some(target)) => vec![
                Point::new(source.center().x(), center_y),
                Point::new(target.center().x(), center_y),
            ],
            _ => Vec::new(),
        };
        edges.insert(flow.id.clone(), waypoints);
    }

    debug!(
        shape_count = shapes.len(),
        edge_count = edges.len();
        "Layout computed"
    );

    LayoutInfo { shapes, edges }
}
