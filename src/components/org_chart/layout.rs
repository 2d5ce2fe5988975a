//! Tidy-ish layered layout for organization trees.
//!
//! Leaves take consecutive breadth slots in visitation order and every internal
//! node sits on the mean of its direct children. Depth runs left to right, so
//! the root lands on the left margin and the deepest level on the right one.

use super::types::OrgNode;

pub const NODE_RADIUS: f64 = 10.0;

/// Reserved space around the drawable area, in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
	pub top: f64,
	pub right: f64,
	pub bottom: f64,
	pub left: f64,
}

impl Default for Margins {
	fn default() -> Self {
		Self {
			top: 20.0,
			right: 90.0,
			bottom: 30.0,
			left: 90.0,
		}
	}
}

/// Logical drawing area the layout is fitted into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
	pub width: f64,
	pub height: f64,
	pub margin: Margins,
}

impl Default for Canvas {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 400.0,
			margin: Margins::default(),
		}
	}
}

impl Canvas {
	/// Extent available to the depth axis.
	pub fn usable_width(&self) -> f64 {
		(self.width - self.margin.left - self.margin.right).max(0.0)
	}

	/// Extent available to the breadth axis.
	pub fn usable_height(&self) -> f64 {
		(self.height - self.margin.top - self.margin.bottom).max(0.0)
	}
}

/// A tree node with its computed draw position.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode<'a> {
	pub node: &'a OrgNode,
	pub depth: usize,
	pub parent: Option<usize>,
	/// Depth-axis coordinate.
	pub x: f64,
	/// Breadth-axis coordinate.
	pub y: f64,
	pub internal: bool,
}

/// Parent to child edge, as indices into [`Layout::nodes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
	pub parent: usize,
	pub child: usize,
}

/// Flat, index-addressed result of [`layout`]. Nodes are stored in pre-order
/// with the root at index 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout<'a> {
	pub canvas: Canvas,
	pub nodes: Vec<PositionedNode<'a>>,
	pub links: Vec<Link>,
}

impl<'a> Layout<'a> {
	pub fn root(&self) -> &PositionedNode<'a> {
		&self.nodes[0]
	}

	pub fn children_of(&self, index: usize) -> impl Iterator<Item = &PositionedNode<'a>> {
		self.links
			.iter()
			.filter(move |l| l.parent == index)
			.map(|l| &self.nodes[l.child])
	}

	pub fn leaves(&self) -> impl Iterator<Item = &PositionedNode<'a>> {
		self.nodes.iter().filter(|n| !n.internal)
	}

	/// Endpoints of a link: the parent's trailing edge and the child's leading edge.
	pub fn link_endpoints(&self, link: &Link) -> ((f64, f64), (f64, f64)) {
		let (source, target) = (&self.nodes[link.parent], &self.nodes[link.child]);
		(
			(source.x + NODE_RADIUS, source.y),
			(target.x - NODE_RADIUS, target.y),
		)
	}
}

struct Pending<'a> {
	node: &'a OrgNode,
	depth: usize,
	parent: Option<usize>,
	breadth: f64,
}

#[derive(Default)]
struct Walk<'a> {
	nodes: Vec<Pending<'a>>,
	links: Vec<Link>,
	next_slot: usize,
	max_depth: usize,
}

impl<'a> Walk<'a> {
	/// Returns the breadth of `node` in slot units.
	fn visit(&mut self, node: &'a OrgNode, depth: usize, parent: Option<usize>) -> f64 {
		let index = self.nodes.len();
		self.nodes.push(Pending {
			node,
			depth,
			parent,
			breadth: 0.0,
		});
		if let Some(parent) = parent {
			self.links.push(Link {
				parent,
				child: index,
			});
		}
		self.max_depth = self.max_depth.max(depth);

		let breadth = if node.is_leaf() {
			let slot = self.next_slot;
			self.next_slot += 1;
			slot as f64
		} else {
			let sum: f64 = node
				.children
				.iter()
				.map(|child| self.visit(child, depth + 1, Some(index)))
				.sum();
			sum / node.children.len() as f64
		};
		self.nodes[index].breadth = breadth;
		breadth
	}
}

/// Position every node of `root` inside `canvas`.
///
/// Slot `k` of `n` leaves maps to the centre of the `k`-th of `n` equal bands,
/// and the mapping is affine, so parents stay on their children's centroid.
pub fn layout<'a>(root: &'a OrgNode, canvas: &Canvas) -> Layout<'a> {
	let mut walk = Walk::default();
	walk.visit(root, 0, None);

	let band = canvas.usable_height() / walk.next_slot.max(1) as f64;
	let step = if walk.max_depth == 0 {
		0.0
	} else {
		canvas.usable_width() / walk.max_depth as f64
	};

	let nodes = walk
		.nodes
		.into_iter()
		.map(|p| PositionedNode {
			node: p.node,
			depth: p.depth,
			parent: p.parent,
			x: canvas.margin.left + p.depth as f64 * step,
			y: canvas.margin.top + (p.breadth + 0.5) * band,
			internal: !p.node.is_leaf(),
		})
		.collect();

	Layout {
		canvas: *canvas,
		nodes,
		links: walk.links,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	const EPS: f64 = 1e-9;

	fn executive_tree() -> OrgNode {
		OrgNode::new("CEO", "Chief Executive")
			.with_child(OrgNode::new("CTO", "Tech Lead"))
			.with_child(OrgNode::new("CFO", "Finance Lead"))
	}

	fn coordinates(layout: &Layout<'_>) -> Vec<(usize, f64, f64, bool)> {
		layout
			.nodes
			.iter()
			.map(|n| (n.depth, n.x, n.y, n.internal))
			.collect()
	}

	fn assert_within_canvas(layout: &Layout<'_>) {
		let c = layout.canvas;
		for n in &layout.nodes {
			assert!(n.x >= c.margin.left - EPS && n.x <= c.width - c.margin.right + EPS);
			assert!(n.y >= c.margin.top - EPS && n.y <= c.height - c.margin.bottom + EPS);
		}
	}

	#[test]
	fn places_executive_team_on_two_levels() {
		let tree = executive_tree();
		let layout = layout(&tree, &Canvas::default());

		assert_eq!(layout.nodes.len(), 3);
		assert_eq!(layout.links.len(), 2);
		let (ceo, cto, cfo) = (&layout.nodes[0], &layout.nodes[1], &layout.nodes[2]);
		assert_eq!((ceo.node.name.as_str(), ceo.depth), ("CEO", 0));
		assert_eq!((cto.node.name.as_str(), cto.depth), ("CTO", 1));
		assert_eq!((cfo.node.name.as_str(), cfo.depth), ("CFO", 1));

		assert!((ceo.y - (cto.y + cfo.y) / 2.0).abs() < EPS);
		assert_eq!(cto.x, cfo.x);
		assert_eq!(ceo.x, 90.0);
		assert_eq!(cto.x, 710.0);
		assert!(cto.y < cfo.y);
		assert!(ceo.internal && !cto.internal && !cfo.internal);
	}

	#[test]
	fn omitted_and_empty_children_lay_out_identically() {
		let omitted: OrgNode = serde_json::from_str(
			r#"{"name":"CEO","title":"","children":[{"name":"A","title":""},{"name":"B","title":"","children":[{"name":"C","title":""}]}]}"#,
		)
		.unwrap();
		let empty: OrgNode = serde_json::from_str(
			r#"{"name":"CEO","title":"","children":[{"name":"A","title":"","children":[]},{"name":"B","title":"","children":[{"name":"C","title":"","children":[]}]}]}"#,
		)
		.unwrap();
		let canvas = Canvas::default();
		assert_eq!(
			coordinates(&layout(&omitted, &canvas)),
			coordinates(&layout(&empty, &canvas))
		);
	}

	#[test]
	fn degenerate_root_renders_as_single_node() {
		let tree = OrgNode::default();
		let layout = layout(&tree, &Canvas::default());
		assert_eq!(layout.nodes.len(), 1);
		assert!(layout.links.is_empty());
		let root = layout.root();
		assert!(!root.internal);
		assert_eq!(root.x, 90.0);
		assert_eq!(root.y, 20.0 + 350.0 / 2.0);
	}

	#[test]
	fn deep_chain_spreads_over_depth_axis() {
		let tree = OrgNode::new("a", "")
			.with_child(OrgNode::new("b", "").with_child(OrgNode::new("c", "").with_child(OrgNode::new("d", ""))));
		let layout = layout(&tree, &Canvas::default());
		let expected = [90.0, 90.0 + 620.0 / 3.0, 90.0 + 2.0 * 620.0 / 3.0, 710.0];
		for (node, x) in layout.nodes.iter().zip(expected) {
			assert!((node.x - x).abs() < 1e-6, "{} at {}", node.node.name, node.x);
		}
		assert!(layout.nodes.iter().all(|n| (n.y - layout.root().y).abs() < EPS));
	}

	#[test]
	fn link_endpoints_sit_on_node_edges() {
		let tree = executive_tree();
		let layout = layout(&tree, &Canvas::default());
		let ((sx, sy), (tx, ty)) = layout.link_endpoints(&layout.links[0]);
		assert_eq!(sx, layout.nodes[0].x + NODE_RADIUS);
		assert_eq!(sy, layout.nodes[0].y);
		assert_eq!(tx, layout.nodes[1].x - NODE_RADIUS);
		assert_eq!(ty, layout.nodes[1].y);
	}

	#[test]
	fn children_of_follows_links() {
		let tree = executive_tree();
		let layout = layout(&tree, &Canvas::default());
		let names: Vec<&str> = layout.children_of(0).map(|n| n.node.name.as_str()).collect();
		assert_eq!(names, vec!["CTO", "CFO"]);
		assert_eq!(layout.children_of(1).count(), 0);
	}

	fn arb_tree() -> impl Strategy<Value = OrgNode> {
		let leaf = "[a-z]{0,6}".prop_map(|name| OrgNode::new(name, ""));
		leaf.prop_recursive(5, 96, 8, |inner| {
			("[A-Z]{1,4}", prop::collection::vec(inner, 0..8)).prop_map(|(name, children)| {
				OrgNode {
					name,
					title: String::new(),
					children,
				}
			})
		})
	}

	#[derive(Clone, Copy, Debug)]
	enum LeafChildren {
		Omitted,
		Empty,
		Null,
	}

	/// Re-encode `tree`, writing every leaf's `children` in the given form.
	fn encode(tree: &OrgNode, leaves: LeafChildren) -> serde_json::Value {
		let mut value = serde_json::json!({ "name": tree.name, "title": tree.title });
		let children = if tree.is_leaf() {
			match leaves {
				LeafChildren::Omitted => None,
				LeafChildren::Empty => Some(serde_json::json!([])),
				LeafChildren::Null => Some(serde_json::Value::Null),
			}
		} else {
			Some(tree.children.iter().map(|c| encode(c, leaves)).collect())
		};
		if let Some(children) = children {
			value["children"] = children;
		}
		value
	}

	proptest! {
		#[test]
		fn leaf_children_encoding_does_not_change_layout(tree in arb_tree()) {
			let canvas = Canvas::default();
			let decoded: Vec<OrgNode> = [LeafChildren::Omitted, LeafChildren::Empty, LeafChildren::Null]
				.into_iter()
				.map(|form| serde_json::from_value(encode(&tree, form)).unwrap())
				.collect();
			let expected = coordinates(&layout(&tree, &canvas));
			for node in &decoded {
				prop_assert_eq!(&coordinates(&layout(node, &canvas)), &expected);
			}
		}

		#[test]
		fn leaves_get_distinct_slots(tree in arb_tree()) {
			let layout = layout(&tree, &Canvas::default());
			let mut ys: Vec<f64> = layout.leaves().map(|n| n.y).collect();
			prop_assert_eq!(ys.len(), tree.leaf_count());
			ys.sort_by(f64::total_cmp);
			for pair in ys.windows(2) {
				prop_assert!(pair[1] - pair[0] > EPS);
			}
		}

		#[test]
		fn parents_sit_on_children_centroid(tree in arb_tree()) {
			let layout = layout(&tree, &Canvas::default());
			for (index, node) in layout.nodes.iter().enumerate().filter(|(_, n)| n.internal) {
				let ys: Vec<f64> = layout.children_of(index).map(|c| c.y).collect();
				let mean = ys.iter().sum::<f64>() / ys.len() as f64;
				prop_assert!((node.y - mean).abs() < 1e-6);
			}
		}

		#[test]
		fn same_depth_shares_depth_coordinate(tree in arb_tree()) {
			let layout = layout(&tree, &Canvas::default());
			for a in &layout.nodes {
				for b in layout.nodes.iter().filter(|b| b.depth == a.depth) {
					prop_assert_eq!(a.x, b.x);
				}
			}
			prop_assert_eq!(layout.nodes.len(), tree.node_count());
			assert_within_canvas(&layout);
		}
	}
}
