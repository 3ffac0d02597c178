mod facet;

pub use facet::{facet_color, facet_normal, normal_to_color};
