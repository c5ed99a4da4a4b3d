// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives: node discs, value labels, and parent→child edges.

use alloc::string::String;
use kurbo::{Circle, Line, Point, Rect, Shape};

/// A text label anchored at its visual center.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Center of the text run. Renderers should center the text on both axes.
    pub anchor: Point,
    /// Literal text to draw.
    pub text: String,
}

impl Label {
    /// Create a label centered on `anchor`.
    pub fn new(anchor: Point, text: impl Into<String>) -> Self {
        Self {
            anchor,
            text: text.into(),
        }
    }
}

/// One drawable item in a [`Scene`](crate::Scene).
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Connecting segment between a parent disc and a child disc.
    Edge(Line),
    /// A node disc.
    Node(Circle),
    /// A node's value label.
    Label(Label),
}

impl Primitive {
    /// Conservative bounds of the primitive.
    ///
    /// Labels have no measured extent here, so they report a zero-size rect at
    /// their anchor.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Edge(line) => line.bounding_box(),
            Self::Node(circle) => circle.bounding_box(),
            Self::Label(label) => Rect::from_points(label.anchor, label.anchor),
        }
    }

    /// True for [`Primitive::Edge`].
    pub fn is_edge(&self) -> bool {
        matches!(self, Self::Edge(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_bounds_cover_the_disc() {
        let p = Primitive::Node(Circle::new((50.0, 40.0), 20.0));
        assert_eq!(p.bounding_box(), Rect::new(30.0, 20.0, 70.0, 60.0));
        assert!(!p.is_edge());
    }

    #[test]
    fn label_bounds_collapse_to_anchor() {
        let p = Primitive::Label(Label::new(Point::new(3.0, 4.0), "7"));
        let b = p.bounding_box();
        assert_eq!(b.origin(), Point::new(3.0, 4.0));
        assert_eq!(b.area(), 0.0);
    }

    #[test]
    fn edge_bounds_are_normalized() {
        let p = Primitive::Edge(Line::new((100.0, 60.0), (40.0, 100.0)));
        assert_eq!(p.bounding_box(), Rect::new(40.0, 60.0, 100.0, 100.0));
        assert!(p.is_edge());
    }
}
