// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization for [`Scene`].
//!
//! Output is a single `<svg>` element sized to the scene. Primitives are grouped
//! by kind so edges sit underneath discs and labels sit on top, regardless of the
//! order they were pushed in. Within a group, push order is preserved.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::scene::Scene;
use crate::types::Primitive;

bitflags::bitflags! {
    /// Which primitive groups to emit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Layers: u8 {
        /// Parent→child edge segments.
        const EDGES  = 0b0000_0001;
        /// Node discs.
        const NODES  = 0b0000_0010;
        /// Value labels.
        const LABELS = 0b0000_0100;
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::all()
    }
}

/// Presentation attributes for SVG output.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    /// Disc fill color.
    pub node_fill: String,
    /// Disc outline color.
    pub node_stroke: String,
    /// Edge color.
    pub edge_stroke: String,
    /// Label color.
    pub label_fill: String,
    /// Stroke width shared by edges and disc outlines.
    pub stroke_width: f64,
    /// Label font size in user units.
    pub font_size: f64,
    /// Label font family.
    pub font_family: String,
    /// Groups to emit.
    pub layers: Layers,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            node_fill: "#ffffff".into(),
            node_stroke: "#2c3e50".into(),
            edge_stroke: "#7f8c8d".into(),
            label_fill: "#2c3e50".into(),
            stroke_width: 2.0,
            font_size: 14.0,
            font_family: "sans-serif".into(),
            layers: Layers::default(),
        }
    }
}

impl SvgStyle {
    /// Replace the emitted layers.
    pub fn with_layers(mut self, layers: Layers) -> Self {
        self.layers = layers;
        self
    }

    /// Replace the disc fill color.
    pub fn with_node_fill(mut self, fill: impl Into<String>) -> Self {
        self.node_fill = fill.into();
        self
    }
}

impl Scene {
    /// Render the scene as a standalone SVG document.
    pub fn to_svg(&self, style: &SvgStyle) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_svg(&mut out, style);
        out
    }

    /// Write the scene as SVG into any [`fmt::Write`] sink.
    pub fn write_svg<W: Write>(&self, out: &mut W, style: &SvgStyle) -> fmt::Result {
        let size = self.size();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = size.width,
            h = size.height,
        )?;

        if style.layers.contains(Layers::EDGES) {
            writeln!(
                out,
                r#"  <g class="edges" stroke="{}" stroke-width="{}">"#,
                Escaped(&style.edge_stroke),
                style.stroke_width
            )?;
            for p in self.primitives() {
                if let Primitive::Edge(line) = p {
                    writeln!(
                        out,
                        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                        line.p0.x, line.p0.y, line.p1.x, line.p1.y
                    )?;
                }
            }
            writeln!(out, "  </g>")?;
        }

        if style.layers.contains(Layers::NODES) {
            writeln!(
                out,
                r#"  <g class="nodes" fill="{}" stroke="{}" stroke-width="{}">"#,
                Escaped(&style.node_fill),
                Escaped(&style.node_stroke),
                style.stroke_width
            )?;
            for p in self.primitives() {
                if let Primitive::Node(circle) = p {
                    writeln!(
                        out,
                        r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
                        circle.center.x, circle.center.y, circle.radius
                    )?;
                }
            }
            writeln!(out, "  </g>")?;
        }

        if style.layers.contains(Layers::LABELS) {
            writeln!(
                out,
                r#"  <g class="labels" fill="{}" font-size="{}" font-family="{}" text-anchor="middle" dominant-baseline="central">"#,
                Escaped(&style.label_fill),
                style.font_size,
                Escaped(&style.font_family)
            )?;
            for p in self.primitives() {
                if let Primitive::Label(label) = p {
                    writeln!(
                        out,
                        r#"    <text x="{}" y="{}">{}</text>"#,
                        label.anchor.x,
                        label.anchor.y,
                        Escaped(&label.text)
                    )?;
                }
            }
            writeln!(out, "  </g>")?;
        }

        writeln!(out, "</svg>")
    }
}

/// XML-escapes text and attribute values on the fly.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..i])?;
            let entity = match rest.as_bytes()[i] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&apos;",
            };
            f.write_str(entity)?;
            rest = &rest[i + 1..];
        }
        f.write_str(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;
    use alloc::string::ToString;
    use kurbo::{Circle, Line, Point, Size};

    fn two_nodes() -> Scene {
        let mut scene = Scene::new(Size::new(400.0, 200.0));
        scene.push_node(Circle::new((200.0, 40.0), 20.0));
        scene.push_label(Label::new(Point::new(200.0, 40.0), "50"));
        scene.push_edge(Line::new((200.0, 60.0), (100.0, 100.0)));
        scene.push_node(Circle::new((100.0, 120.0), 20.0));
        scene.push_label(Label::new(Point::new(100.0, 120.0), "30"));
        scene
    }

    #[test]
    fn empty_scene_is_a_sized_svg() {
        let svg = Scene::new(Size::new(800.0, 200.0)).to_svg(&SvgStyle::default());
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="800" height="200""#));
        assert!(!svg.contains("<circle"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn edges_are_emitted_before_nodes_and_labels() {
        let svg = two_nodes().to_svg(&SvgStyle::default());
        let line = svg.find("<line").unwrap();
        let circle = svg.find("<circle").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(line < circle && circle < text, "unexpected group order:\n{svg}");
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(r#"<line x1="200" y1="60" x2="100" y2="100"/>"#));
        assert!(svg.contains(r#"<text x="100" y="120">30</text>"#));
    }

    #[test]
    fn layers_filter_groups() {
        let style = SvgStyle::default().with_layers(Layers::NODES);
        let svg = two_nodes().to_svg(&style);
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<line"));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        scene.push_label(Label::new(Point::new(5.0, 5.0), "<a & 'b'>"));
        let style = SvgStyle::default().with_node_fill(r#"x"y"#);
        let svg = scene.to_svg(&style);
        assert!(svg.contains("&lt;a &amp; &apos;b&apos;&gt;"));
        assert!(svg.contains(r#"fill="x&quot;y""#));
    }

    #[test]
    fn escaping_leaves_plain_text_alone() {
        assert_eq!(Escaped("-42").to_string(), "-42");
        assert_eq!(Escaped("").to_string(), "");
    }
}
