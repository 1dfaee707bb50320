use crate::graph::{Graph, VertexDescriptor};

/// Receives every vertex a traversal reaches, once, with its depth from the
/// root.
pub trait Visitor<G>
where
    G: Graph,
{
    fn visit(&mut self, vertex: VertexDescriptor, depth: usize, graph: &G);
}

impl<G, F> Visitor<G> for F
where
    G: Graph,
    F: FnMut(VertexDescriptor, usize),
{
    fn visit(&mut self, vertex: VertexDescriptor, depth: usize, _graph: &G) {
        self(vertex, depth)
    }
}

/// Collects `(vertex, depth)` pairs in visiting order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub visits: Vec<(VertexDescriptor, usize)>,
}

impl<G> Visitor<G> for Recorder
where
    G: Graph,
{
    fn visit(&mut self, vertex: VertexDescriptor, depth: usize, _graph: &G) {
        self.visits.push((vertex, depth));
    }
}

pub struct DefaultVisitor;

impl<G> Visitor<G> for DefaultVisitor
where
    G: Graph,
{
    fn visit(&mut self, _vertex: VertexDescriptor, _depth: usize, _graph: &G) {}
}
