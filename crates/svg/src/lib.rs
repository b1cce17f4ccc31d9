//! `segment-display-svg` is a [Surface] for the `segment-display` crate that
//! records drawing into an SVG document.
//!
//! ```
//! use segment_display::{DisplayConfig, SegmentDisplay, SegmentKind};
//! use segment_display_svg::SvgSurface;
//!
//! let config = DisplayConfig::default();
//! let surface = SvgSurface::new(config.width, config.height);
//! let mut display = SegmentDisplay::new(SegmentKind::SevenSegment, config, surface).unwrap();
//! display.set_text(Some("8"));
//!
//! let svg = display.surface().to_string();
//! assert!(svg.contains("<path"));
//! ```

use std::{fmt, io, mem, path::Path as FilePath};

use segment_display_core::{Color, Point, Surface};
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle};

/// A [Surface] that turns every fill and stroke into an SVG `<path>`.
///
/// SVG has no notion of erasing, so [Surface::clear_rect] paints the
/// background colour when one is set and does nothing otherwise.
#[derive(Debug)]
pub struct SvgSurface {
    document: Document,
    background: Option<Color>,
    origin: (f64, f64),
    saved: Vec<(f64, f64)>,
    path: Data,
}

impl SvgSurface {
    /// Creates an empty document with a `width` by `height` view box.
    pub fn new(width: f64, height: f64) -> Self {
        let (width, height) = (width as f32, height as f32);
        let document = Document::new()
            .set("viewBox", (0, 0, width, height))
            .set("width", format!("{width}px"))
            .set("height", format!("{height}px"));

        Self {
            document,
            background: None,
            origin: (0.0, 0.0),
            saved: Vec::new(),
            path: Data::new(),
        }
    }

    /// Paint cleared areas with `color`.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Write the document to a file.
    pub fn write_to(&self, path: impl AsRef<FilePath>) -> io::Result<()> {
        svg::save(path, &self.document)
    }

    fn add(&mut self, node: impl Into<Box<dyn svg::Node>>) {
        let document = mem::replace(&mut self.document, Document::new());
        self.document = document.add(node);
    }

    fn absolute(&self, point: Point) -> (f32, f32) {
        (
            (point.x + self.origin.0) as f32,
            (point.y + self.origin.1) as f32,
        )
    }
}

impl fmt::Display for SvgSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.document)
    }
}

impl Surface for SvgSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if let Some(color) = self.background {
            let (x, y) = self.absolute(Point::new(x, y));
            let rect = Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", width as f32)
                .set("height", height as f32)
                .set("fill", color.to_string());
            self.add(rect);
        }
    }

    fn save(&mut self) {
        self.saved.push(self.origin);
    }

    fn restore(&mut self) {
        if let Some(origin) = self.saved.pop() {
            self.origin = origin;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    fn begin_path(&mut self) {
        self.path = Data::new();
    }

    fn move_to(&mut self, point: Point) {
        let point = self.absolute(point);
        self.path = mem::replace(&mut self.path, Data::new()).move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        let point = self.absolute(point);
        self.path = mem::replace(&mut self.path, Data::new()).line_to(point);
    }

    fn close_path(&mut self) {
        self.path = mem::replace(&mut self.path, Data::new()).close();
    }

    fn fill(&mut self, color: Color) {
        let path = Path::new()
            .set("fill", color.to_string())
            .set("stroke", "none")
            .set("d", self.path.clone());
        self.add(path);
    }

    fn stroke(&mut self, color: Color, width: f64) {
        let path = Path::new()
            .set("fill", "none")
            .set("stroke", color.to_string())
            .set("stroke-width", width as f32)
            .set("d", self.path.clone());
        self.add(path);
    }
}
