// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Scene: a Kurbo-native vector scene for tree diagrams.
//!
//! A [`Scene`] is an ordered list of [`Primitive`]s plus an overall canvas size.
//! Primitives are deliberately few:
//!
//! - [`Primitive::Node`]: a disc ([`kurbo::Circle`]) marking a tree node.
//! - [`Primitive::Label`]: a [`Label`] centered on a node, holding its literal value.
//! - [`Primitive::Edge`]: a [`kurbo::Line`] joining a parent disc to a child disc.
//!
//! The scene does not know about trees. Upstream code (see `canopy_layout`)
//! computes positions and pushes primitives; this crate stores them, reports
//! bounds, and serializes to SVG via [`Scene::to_svg`].
//!
//! # Example
//!
//! ```rust
//! use canopy_scene::{Label, Scene, SvgStyle};
//! use kurbo::{Circle, Line, Point, Size};
//!
//! let mut scene = Scene::new(Size::new(400.0, 200.0));
//! scene.push_node(Circle::new((200.0, 40.0), 20.0));
//! scene.push_label(Label::new(Point::new(200.0, 40.0), "50"));
//! scene.push_edge(Line::new((200.0, 60.0), (100.0, 100.0)));
//! scene.push_node(Circle::new((100.0, 120.0), 20.0));
//! scene.push_label(Label::new(Point::new(100.0, 120.0), "30"));
//!
//! assert_eq!(scene.circles().count(), 2);
//! assert!(scene.fits_canvas());
//!
//! let svg = scene.to_svg(&SvgStyle::default());
//! assert!(svg.contains("<circle"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod scene;
pub mod svg;
pub mod types;

pub use scene::Scene;
pub use svg::{Layers, SvgStyle};
pub use types::{Label, Primitive};
