//! The render boundary. The engine computes colorings whether or not a
//! renderer is attached; implementations here turn a finished coloring into
//! something a person can look at.

use crate::models::{Coloring, Graph, Palette, conflicts};
use std::io::{self, Write};

/// Receives the graph and the final color mapping after a run.
pub trait Renderer {
    fn render(&mut self, graph: &Graph, palette: &Palette, coloring: &Coloring) -> io::Result<()>;
}

/// Renders a vertex/color table and the edge list, marking conflicting
/// edges.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, graph: &Graph, palette: &Palette, coloring: &Coloring) -> io::Result<()> {
        for vertex in graph.vertices() {
            let label = palette.label(coloring.color_of(vertex));
            writeln!(self.out, "vertex {vertex}: {label}")?;
        }

        for edge in graph.edges() {
            let marker = if coloring.color_of(edge.u) == coloring.color_of(edge.v) {
                "  <- conflict"
            } else {
                ""
            };
            writeln!(
                self.out,
                "edge {} -- {} (weight {}){marker}",
                edge.u, edge.v, edge.weight
            )?;
        }

        writeln!(self.out, "conflicts: {}", conflicts(graph, coloring))
    }
}

/// Renders Graphviz source: filled vertices, weight-labeled edges. The
/// textual stand-in for an interactive plot.
pub struct DotRenderer<W: Write> {
    out: W,
}

impl<W: Write> DotRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for DotRenderer<W> {
    fn render(&mut self, graph: &Graph, palette: &Palette, coloring: &Coloring) -> io::Result<()> {
        writeln!(self.out, "graph coloring {{")?;
        for vertex in graph.vertices() {
            let label = palette.label(coloring.color_of(vertex));
            writeln!(
                self.out,
                "    {vertex} [style=filled, fillcolor={label}];"
            )?;
        }
        for edge in graph.edges() {
            writeln!(
                self.out,
                "    {} -- {} [label={}];",
                edge.u, edge.v, edge.weight
            )?;
        }
        writeln!(self.out, "}}")
    }
}
