use std::fmt::Write as _;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::layout::{Canvas, Layout, NODE_RADIUS};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

const INTERNAL_FILL: &str = "#3b82f6";
const LEAF_FILL: &str = "#10b981";
const LINK_STROKE: &str = "#cbd5e1";
const LINK_WIDTH: f64 = 1.5;
const MUTED_TEXT: &str = "#64748b";
const LABEL_OFFSET: f64 = 13.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
	Start,
	End,
}

impl Anchor {
	pub fn as_str(self) -> &'static str {
		match self {
			Anchor::Start => "start",
			Anchor::End => "end",
		}
	}
}

/// A single drawing instruction, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
	Path {
		d: String,
		stroke: &'static str,
		width: f64,
	},
	Circle {
		cx: f64,
		cy: f64,
		r: f64,
		fill: &'static str,
	},
	Text {
		x: f64,
		y: f64,
		dy: &'static str,
		anchor: Anchor,
		size: u32,
		weight: Option<u32>,
		fill: Option<&'static str>,
		content: String,
	},
}

/// Something a chart can be drawn onto.
pub trait Surface {
	/// Drop everything previously drawn.
	fn clear(&mut self);
	fn draw(&mut self, primitive: &Primitive);
}

/// Cubic curve leaving and entering horizontally, as d3's `linkHorizontal`.
fn horizontal_curve((sx, sy): (f64, f64), (tx, ty): (f64, f64)) -> String {
	let mx = (sx + tx) / 2.0;
	format!("M{sx:.2},{sy:.2}C{mx:.2},{sy:.2} {mx:.2},{ty:.2} {tx:.2},{ty:.2}")
}

/// Turn a layout into draw order: links first so circles and labels sit on top.
pub fn scene(layout: &Layout<'_>) -> Vec<Primitive> {
	let mut out = Vec::with_capacity(layout.links.len() + layout.nodes.len() * 3);

	for link in &layout.links {
		let (source, target) = layout.link_endpoints(link);
		out.push(Primitive::Path {
			d: horizontal_curve(source, target),
			stroke: LINK_STROKE,
			width: LINK_WIDTH,
		});
	}

	for node in &layout.nodes {
		// internal nodes label toward the root so text stays clear of their links
		let (dx, anchor) = if node.internal {
			(-LABEL_OFFSET, Anchor::End)
		} else {
			(LABEL_OFFSET, Anchor::Start)
		};
		out.push(Primitive::Circle {
			cx: node.x,
			cy: node.y,
			r: NODE_RADIUS,
			fill: if node.internal { INTERNAL_FILL } else { LEAF_FILL },
		});
		out.push(Primitive::Text {
			x: node.x + dx,
			y: node.y,
			dy: ".35em",
			anchor,
			size: 12,
			weight: Some(600),
			fill: None,
			content: node.node.name.clone(),
		});
		out.push(Primitive::Text {
			x: node.x + dx,
			y: node.y,
			dy: "1.45em",
			anchor,
			size: 10,
			weight: None,
			fill: Some(MUTED_TEXT),
			content: node.node.title.clone(),
		});
	}
	out
}

/// Clear `surface` and draw `layout` onto it. Safe to call repeatedly.
pub fn render(layout: &Layout<'_>, surface: &mut impl Surface) {
	surface.clear();
	for primitive in scene(layout) {
		surface.draw(&primitive);
	}
}

fn escape_xml(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for ch in input.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}
	out
}

/// Attribute list for a primitive, shared by both surfaces.
fn attributes(primitive: &Primitive) -> (&'static str, Vec<(&'static str, String)>) {
	match primitive {
		Primitive::Path { d, stroke, width } => (
			"path",
			vec![
				("d", d.clone()),
				("fill", "none".into()),
				("stroke", (*stroke).into()),
				("stroke-width", format!("{width}px")),
			],
		),
		Primitive::Circle { cx, cy, r, fill } => (
			"circle",
			vec![
				("cx", format!("{cx:.2}")),
				("cy", format!("{cy:.2}")),
				("r", format!("{r}")),
				("fill", (*fill).into()),
			],
		),
		Primitive::Text {
			x,
			y,
			dy,
			anchor,
			size,
			weight,
			fill,
			..
		} => {
			let mut attrs = vec![
				("x", format!("{x:.2}")),
				("y", format!("{y:.2}")),
				("dy", (*dy).into()),
				("text-anchor", anchor.as_str().into()),
				("font-size", format!("{size}px")),
			];
			if let Some(weight) = weight {
				attrs.push(("font-weight", weight.to_string()));
			}
			if let Some(fill) = fill {
				attrs.push(("fill", (*fill).into()));
			}
			("text", attrs)
		}
	}
}

/// In-memory surface that serializes to standalone SVG markup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgDocument {
	canvas: Canvas,
	primitives: Vec<Primitive>,
}

impl SvgDocument {
	pub fn new(canvas: Canvas) -> Self {
		Self {
			canvas,
			primitives: Vec::new(),
		}
	}

	pub fn primitives(&self) -> &[Primitive] {
		&self.primitives
	}

	pub fn to_markup(&self) -> String {
		let (w, h) = (self.canvas.width, self.canvas.height);
		let mut svg = format!(
			"<svg xmlns=\"{SVG_NS}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
		);
		for primitive in &self.primitives {
			let (tag, attrs) = attributes(primitive);
			let _ = write!(svg, "<{tag}");
			for (name, value) in attrs {
				let _ = write!(svg, " {name}=\"{}\"", escape_xml(&value));
			}
			match primitive {
				Primitive::Text { content, .. } => {
					let _ = write!(svg, ">{}</{tag}>", escape_xml(content));
				}
				_ => svg.push_str("/>"),
			}
		}
		svg.push_str("</svg>");
		svg
	}
}

impl Surface for SvgDocument {
	fn clear(&mut self) {
		self.primitives.clear();
	}

	fn draw(&mut self, primitive: &Primitive) {
		self.primitives.push(primitive.clone());
	}
}

/// Live surface: an `<svg>` element owned by a host element in the page.
pub struct DomSurface {
	document: Document,
	svg: Element,
}

impl DomSurface {
	/// Reuse the host's `<svg>` child, or create one sized to `canvas`.
	pub fn attach(host: &Element, canvas: &Canvas) -> Result<Self, JsValue> {
		let document = host
			.owner_document()
			.ok_or_else(|| JsValue::from_str("host element is detached"))?;
		let svg = match host.first_element_child() {
			Some(existing) if existing.tag_name().eq_ignore_ascii_case("svg") => existing,
			_ => {
				let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
				let (w, h) = (canvas.width, canvas.height);
				svg.set_attribute("width", &w.to_string())?;
				svg.set_attribute("height", &h.to_string())?;
				svg.set_attribute("viewBox", &format!("0 0 {w} {h}"))?;
				host.set_inner_html("");
				host.append_child(&svg)?;
				svg
			}
		};
		Ok(Self { document, svg })
	}

	fn try_draw(&self, primitive: &Primitive) -> Result<(), JsValue> {
		let (tag, attrs) = attributes(primitive);
		let element = self.document.create_element_ns(Some(SVG_NS), tag)?;
		for (name, value) in attrs {
			element.set_attribute(name, &value)?;
		}
		if let Primitive::Text { content, .. } = primitive {
			element.set_text_content(Some(content.as_str()));
		}
		self.svg.append_child(&element)?;
		Ok(())
	}
}

impl Surface for DomSurface {
	fn clear(&mut self) {
		self.svg.set_inner_html("");
	}

	fn draw(&mut self, primitive: &Primitive) {
		if let Err(err) = self.try_draw(primitive) {
			log::error!("failed to draw org chart primitive: {err:?}");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::org_chart::layout::layout;
	use crate::components::org_chart::types::OrgNode;
	use pretty_assertions::assert_eq;

	fn team() -> OrgNode {
		OrgNode::new("CEO", "Chief Executive")
			.with_child(OrgNode::new("CTO", "Tech Lead"))
			.with_child(OrgNode::new("CFO", "Finance & Risk"))
	}

	#[test]
	fn rendering_twice_is_byte_identical() {
		let tree = team();
		let canvas = Canvas::default();
		let chart = layout(&tree, &canvas);
		let mut doc = SvgDocument::new(canvas);

		render(&chart, &mut doc);
		let first = doc.to_markup();
		render(&chart, &mut doc);
		assert_eq!(first, doc.to_markup());
		assert_eq!(doc.primitives().len(), 2 + 3 * 3);
	}

	#[test]
	fn render_replaces_previous_drawing() {
		let canvas = Canvas::default();
		let big = team();
		let small = OrgNode::new("Solo", "");
		let mut doc = SvgDocument::new(canvas);

		render(&layout(&big, &canvas), &mut doc);
		render(&layout(&small, &canvas), &mut doc);

		assert_eq!(doc.primitives().len(), 3);
		let markup = doc.to_markup();
		assert!(markup.contains(">Solo</text>"));
		assert!(!markup.contains("CEO"));
	}

	#[test]
	fn internal_and_leaf_nodes_are_styled_apart() {
		let tree = team();
		let primitives = scene(&layout(&tree, &Canvas::default()));

		let fills: Vec<&str> = primitives
			.iter()
			.filter_map(|p| match p {
				Primitive::Circle { fill, .. } => Some(*fill),
				_ => None,
			})
			.collect();
		assert_eq!(fills, vec![INTERNAL_FILL, LEAF_FILL, LEAF_FILL]);

		let anchors: Vec<(String, Anchor)> = primitives
			.iter()
			.filter_map(|p| match p {
				Primitive::Text {
					content,
					anchor,
					weight: Some(_),
					..
				} => Some((content.clone(), *anchor)),
				_ => None,
			})
			.collect();
		assert_eq!(
			anchors,
			vec![
				("CEO".to_string(), Anchor::End),
				("CTO".to_string(), Anchor::Start),
				("CFO".to_string(), Anchor::Start),
			]
		);
	}

	#[test]
	fn links_are_drawn_before_nodes() {
		let tree = team();
		let primitives = scene(&layout(&tree, &Canvas::default()));
		assert!(matches!(primitives[0], Primitive::Path { .. }));
		assert!(matches!(primitives[1], Primitive::Path { .. }));
		assert!(matches!(primitives[2], Primitive::Circle { .. }));
	}

	#[test]
	fn curve_leaves_and_enters_horizontally() {
		assert_eq!(
			horizontal_curve((100.0, 50.0), (300.0, 150.0)),
			"M100.00,50.00C200.00,50.00 200.00,150.00 300.00,150.00"
		);
	}

	#[test]
	fn markup_escapes_labels() {
		let tree = OrgNode::new("R&D <Lab>", "\"Chief\"");
		let canvas = Canvas::default();
		let mut doc = SvgDocument::new(canvas);
		render(&layout(&tree, &canvas), &mut doc);
		let markup = doc.to_markup();
		assert!(markup.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"400\""));
		assert!(markup.contains(">R&amp;D &lt;Lab&gt;</text>"));
		assert!(markup.contains(">&quot;Chief&quot;</text>"));
		assert!(markup.ends_with("</svg>"));
	}

	#[test]
	fn degenerate_tree_still_draws_a_placeholder_node() {
		let tree = OrgNode::default();
		let canvas = Canvas::default();
		let mut doc = SvgDocument::new(canvas);
		render(&layout(&tree, &canvas), &mut doc);
		assert_eq!(doc.primitives().len(), 3);
		assert!(doc.to_markup().contains("<circle"));
	}
}
