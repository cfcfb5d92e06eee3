use tracing::trace;

use super::cells::{build_cells, register_cell_bounds, CellDescriptor, MarkerDotGeometry};
use super::interaction::{ClickContext, ClickEvent, ClickOutcome, InteractionController, TimeAreaHost};
use super::layout::ColumnLayout;
use super::markers::{MarkerBucketing, MarkerIndex};
use super::registry::BoundRegistry;
use super::virtualizer::{Viewport, VirtualWindow, Virtualizer};
use crate::state::Marker;

/// Inputs of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub layout: ColumnLayout,
    pub viewport: Viewport,
    pub markers: &'a [Marker],
    pub bucketing: MarkerBucketing,
    /// Screen position of the viewport's top-left corner.
    pub origin: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass<'a> {
    pub window: Option<VirtualWindow>,
    pub cells: Vec<CellDescriptor<'a>>,
}

/// Owns the ruler's mutable state: virtualizer cache, bound registry and
/// click controller.
///
/// `render_pass` clears and repopulates the registry before returning, so a
/// click resolved afterwards always sees the complete latest pass.
#[derive(Debug)]
pub struct RulerKernel {
    virtualizer: Virtualizer,
    registry: BoundRegistry,
    controller: InteractionController,
    dot: MarkerDotGeometry,
}

impl RulerKernel {
    pub fn new(overscan: usize) -> Self {
        Self {
            virtualizer: Virtualizer::new(overscan),
            registry: BoundRegistry::new(),
            controller: InteractionController::new(),
            dot: MarkerDotGeometry::default(),
        }
    }

    pub fn with_dot_geometry(mut self, dot: MarkerDotGeometry) -> Self {
        self.dot = dot;
        self
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.virtualizer.set_overscan(overscan);
    }

    pub fn registry(&self) -> &BoundRegistry {
        &self.registry
    }

    pub fn virtualizer(&self) -> &Virtualizer {
        &self.virtualizer
    }

    pub fn render_pass<'a>(&mut self, input: RenderInput<'a>) -> RenderPass<'a> {
        self.registry.clear();

        let Some(window) = self.virtualizer.window(&input.layout, input.viewport) else {
            return RenderPass {
                window: None,
                cells: Vec::new(),
            };
        };

        let index = MarkerIndex::new(input.markers, &input.layout, input.bucketing);
        let cells = build_cells(&input.layout, window.rendered, &index);
        let registered = register_cell_bounds(
            &cells,
            &self.dot,
            input.origin,
            input.viewport.scroll_left,
            &mut self.registry,
        );
        trace!(
            start = window.rendered.start,
            stop = window.rendered.stop,
            cells = cells.len(),
            registered,
            "ruler render pass"
        );

        RenderPass {
            window: Some(window),
            cells,
        }
    }

    pub fn click<H: TimeAreaHost + ?Sized>(
        &mut self,
        event: &ClickEvent,
        context: &ClickContext,
        host: &mut H,
    ) -> ClickOutcome {
        self.controller.click(event, context, &self.registry, host)
    }
}
