mod component;
pub mod layout;
pub mod render;
mod types;

pub use component::OrgChart;
pub use layout::{Canvas, Layout, Link, Margins, PositionedNode, layout};
pub use render::{DomSurface, Primitive, Surface, SvgDocument, render, scene};
pub(crate) use types::lenient_string;
pub use types::OrgNode;
