// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene container: an ordered primitive list plus the canvas size.

use alloc::vec::Vec;
use kurbo::{Circle, Line, Point, Rect, Size};

use crate::types::{Label, Primitive};

/// An ordered list of drawable primitives with an overall canvas size.
///
/// Primitives keep the order they were pushed in. The canvas always starts at
/// the origin; [`Scene::bounds`] is `(0, 0)` to `size`.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    size: Size,
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene with the given canvas size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    /// Create an empty scene, reserving room for `capacity` primitives.
    pub fn with_capacity(size: Size, capacity: usize) -> Self {
        Self {
            size,
            primitives: Vec::with_capacity(capacity),
        }
    }

    /// Canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Canvas rectangle, anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// Union of every primitive's bounds, or `None` for an empty scene.
    pub fn content_bounds(&self) -> Option<Rect> {
        let mut it = self.primitives.iter().map(Primitive::bounding_box);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// All primitives in push order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// True if the scene holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Append a node disc.
    pub fn push_node(&mut self, circle: Circle) {
        self.primitives.push(Primitive::Node(circle));
    }

    /// Append a label.
    pub fn push_label(&mut self, label: Label) {
        self.primitives.push(Primitive::Label(label));
    }

    /// Append an edge segment.
    pub fn push_edge(&mut self, line: Line) {
        self.primitives.push(Primitive::Edge(line));
    }

    /// Node discs in push order.
    pub fn circles(&self) -> impl Iterator<Item = &Circle> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Node(c) => Some(c),
            _ => None,
        })
    }

    /// Labels in push order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label(l) => Some(l),
            _ => None,
        })
    }

    /// Edge segments in push order.
    pub fn edges(&self) -> impl Iterator<Item = &Line> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Edge(l) => Some(l),
            _ => None,
        })
    }

    /// True if every primitive lies within the canvas.
    pub fn fits_canvas(&self) -> bool {
        let canvas = self.bounds();
        self.primitives.iter().all(|p| {
            let b = p.bounding_box();
            b.x0 >= canvas.x0 && b.y0 >= canvas.y0 && b.x1 <= canvas.x1 && b.y1 <= canvas.y1
        })
    }
}
