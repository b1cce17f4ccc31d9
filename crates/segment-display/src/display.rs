use alloc::{string::ToString, vec::Vec};
use core::fmt;

use log::{debug, trace, warn};
use segment_display_core::{CharacterMask, ElementArray, Error, Polygon, Surface, is_lit};

use crate::{CellSize, DisplayConfig, SegmentKind};

/// A segmented text display drawn onto a surface it owns.
///
/// The outline of every segment is computed once per layout and reused until
/// a layout-affecting setting changes.
#[derive(Debug)]
pub struct SegmentDisplay<S> {
    kind: SegmentKind,
    config: DisplayConfig,
    elements: ElementArray,
    geometry: Vec<Polygon>,
    geometry_stale: bool,
    surface: S,
}

impl<S: Surface> SegmentDisplay<S> {
    /// Creates a blank display with `config.cell_count` cells.
    pub fn new(kind: SegmentKind, config: DisplayConfig, surface: S) -> Result<Self, Error> {
        config.validate()?;
        debug!("new {:?} display with {} cells", kind, config.cell_count);

        Ok(Self {
            kind,
            elements: ElementArray::new(config.cell_count),
            config,
            geometry: Vec::new(),
            geometry_stale: true,
            surface,
        })
    }

    /// Replaces the configuration.
    ///
    /// A changed cell count blanks the display. On error nothing changes.
    pub fn configure(&mut self, config: DisplayConfig) -> Result<(), Error> {
        if let Err(e) = config.validate() {
            warn!("rejected display configuration: {e}");
            return Err(e);
        }

        if config.cell_count != self.elements.len() {
            self.elements.resize(config.cell_count);
        }
        if !self.config.same_layout(&config) {
            self.geometry_stale = true;
        }

        debug!("configured {:?} display: {:?}", self.kind, config);
        self.config = config;
        Ok(())
    }

    /// Sets the number of cells, blanking all of them.
    pub fn resize(&mut self, count: usize) {
        debug!("resizing display to {count} cells");
        self.elements.resize(count);
        self.config.cell_count = count;
        self.geometry_stale = true;
    }

    /// Parses a cell count and [resizes](Self::resize) to it.
    pub fn resize_from_str(&mut self, count: &str) -> Result<(), Error> {
        match self.elements.resize_from_str(count) {
            Ok(count) => {
                debug!("resizing display to {count} cells");
                self.config.cell_count = count;
                self.geometry_stale = true;
                Ok(())
            }
            Err(e) => {
                warn!("rejected element count {count:?}");
                Err(e)
            }
        }
    }

    /// Shows `value`, left aligned, and redraws. `None` blanks the display.
    ///
    /// Extra characters are dropped and characters without a pattern show as
    /// blanks.
    pub fn set_text(&mut self, value: Option<&str>) {
        self.refresh_geometry();
        self.kind.set_text(&mut self.elements, value);
        self.draw();
    }

    /// Shows the formatted form of `value` and redraws.
    pub fn display_value<V: fmt::Display>(&mut self, value: V) {
        let text = value.to_string();
        self.set_text(Some(&text));
    }

    /// Sets the mask of one cell without redrawing. Indices past the last
    /// cell are ignored.
    pub fn set_element(&mut self, index: usize, mask: CharacterMask) {
        self.elements.set_element(index, mask);
    }

    /// Paints every segment of every cell.
    pub fn draw(&mut self) {
        self.refresh_geometry();

        let config = &self.config;
        let cell = config.cell_size(self.elements.len());
        let surface = &mut self.surface;
        trace!("drawing {} cells", self.elements.len());

        surface.clear_rect(config.x, config.y, config.width, config.height);
        surface.save();
        surface.translate(config.x, config.y);
        surface.translate(config.padding, config.padding);

        for &mask in self.elements.as_slice() {
            for (segment, polygon) in self.geometry.iter().enumerate() {
                let (fill, stroke) = if is_lit(mask, segment) {
                    (config.on_fill, config.on_stroke)
                } else {
                    (config.off_fill, config.off_stroke)
                };

                surface.polygon(polygon);
                surface.fill(fill);
                if config.stroke_width > 0.0 {
                    surface.stroke(stroke, config.stroke_width);
                }
            }
            surface.translate(cell.width + config.spacing, 0.0);
        }

        surface.restore();
    }

    /// Segment outlines for one cell at the current layout.
    pub fn cell_geometry(&mut self) -> &[Polygon] {
        self.refresh_geometry();
        &self.geometry
    }

    fn refresh_geometry(&mut self) {
        if !self.geometry_stale {
            return;
        }

        let cell = self.cell_size();
        self.geometry =
            self.kind
                .compute_points(cell.width, cell.height, &self.config.segment_style());
        self.geometry_stale = false;
        debug!("computed segment geometry for {}x{} cells", cell.width, cell.height);
    }

    pub fn cell_size(&self) -> CellSize {
        self.config.cell_size(self.elements.len())
    }

    /// Number of cells.
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// Current mask of every cell.
    pub fn elements(&self) -> &[CharacterMask] {
        self.elements.as_slice()
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Releases the owned surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
