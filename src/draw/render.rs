//! SVG rendering for shapes.
//!
//! [`SvgSurface`] mirrors the visible circles as they come and go through the
//! [`PresentationSink`] notifications and serialises them as a standalone SVG
//! document.

use super::color::Color;
use super::shape::{Shape, ShapeId};
use super::sink::PresentationSink;
use log::debug;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::io::{Cursor, Write};
use thiserror::Error;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// In-memory drawing surface holding one `<circle>` per visible shape.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    background: Option<Color>,
    /// Visible shapes, bottom layer first
    elements: Vec<Shape>,
}

impl SvgSurface {
    /// Creates an empty, transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
            elements: Vec::new(),
        }
    }

    /// Paints a full-surface rectangle underneath every shape.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Shapes currently on the surface, bottom layer first.
    pub fn shapes(&self) -> &[Shape] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn position(&self, id: ShapeId) -> Option<usize> {
        self.elements.iter().position(|shape| shape.id == id)
    }

    /// Serialises the surface as an SVG document.
    pub fn to_svg(&self) -> Result<String, RenderError> {
        render_shapes(
            &self.elements,
            self.width,
            self.height,
            self.background.as_ref(),
        )
    }
}

impl PresentationSink for SvgSurface {
    fn shape_added(&mut self, shape: &Shape) {
        match self.position(shape.id) {
            Some(index) => self.elements[index] = shape.clone(),
            None => self.elements.push(shape.clone()),
        }
    }

    fn shape_updated(&mut self, shape: &Shape) {
        match self.position(shape.id) {
            Some(index) => self.elements[index].radius = shape.radius,
            None => debug!("Ignoring update for unknown shape {:?}", shape.id),
        }
    }

    fn shape_removed(&mut self, shape: &Shape) {
        match self.position(shape.id) {
            Some(index) => {
                self.elements.remove(index);
            }
            None => debug!("Ignoring removal of unknown shape {:?}", shape.id),
        }
    }
}

/// Errors raised while serialising a surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write SVG: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("SVG output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders shapes into a complete SVG document of the given size.
///
/// Shapes are emitted in iteration order, so later shapes paint over earlier ones.
pub fn render_shapes<'a>(
    shapes: impl IntoIterator<Item = &'a Shape>,
    width: u32,
    height: u32,
    background: Option<&Color>,
) -> Result<String, RenderError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    let width = width.to_string();
    let height = height.to_string();
    let view_box = format!("0 0 {width} {height}");
    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));
    root.push_attribute(("viewBox", view_box.as_str()));
    writer.write_event(Event::Start(root))?;

    if let Some(background) = background {
        let mut rect = BytesStart::new("rect");
        rect.push_attribute(("width", "100%"));
        rect.push_attribute(("height", "100%"));
        rect.push_attribute(("fill", background.as_str()));
        writer.write_event(Event::Empty(rect))?;
    }
    for shape in shapes {
        render_shape(&mut writer, shape)?;
    }

    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    let mut svg = String::from_utf8(writer.into_inner().into_inner())?;
    svg.push('\n');
    Ok(svg)
}

/// Writes a single `<circle>` element.
pub fn render_shape<W: Write>(writer: &mut Writer<W>, shape: &Shape) -> Result<(), RenderError> {
    let mut circle = BytesStart::new("circle");
    circle.push_attribute(("cx", shape.center.x.to_string().as_str()));
    circle.push_attribute(("cy", shape.center.y.to_string().as_str()));
    circle.push_attribute(("r", shape.radius.to_string().as_str()));
    circle.push_attribute(("fill", shape.fill.as_str()));
    writer.write_event(Event::Empty(circle))?;
    Ok(())
}
