use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

pub trait FromUsize {
    fn from_usize(v: usize) -> Self;
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexDescriptor(usize);

impl VertexDescriptor {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<VertexDescriptor> for usize {
    fn from(v: VertexDescriptor) -> Self {
        v.0
    }
}

impl FromUsize for VertexDescriptor {
    fn from_usize(v: usize) -> Self {
        VertexDescriptor(v)
    }
}

/// An arc, identified by its source vertex and its position among that
/// vertex's outgoing edges.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeDescriptor {
    pub(crate) source: VertexDescriptor,
    pub(crate) offset: usize,
}

impl EdgeDescriptor {
    pub fn source(self) -> VertexDescriptor {
        self.source
    }

    pub fn offset(self) -> usize {
        self.offset
    }
}

/// Edge weights are unsigned primitive integers, so they can never be
/// negative.
pub trait Weight: PrimInt + Unsigned + Debug {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug {}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Unidirectional,
    Bidirectional,
}

pub trait Graph {
    type VertexProperty;
    type EdgeWeight: Weight;

    fn vertex_property(&self, d: VertexDescriptor) -> Option<&Self::VertexProperty>;

    /// Weight of an edge; unweighted edges count as one.
    fn edge_weight(&self, d: EdgeDescriptor) -> Self::EdgeWeight;

    fn contains_vertex(&self, d: VertexDescriptor) -> bool {
        self.vertex_property(d).is_some()
    }
}

pub trait IncidenceGraph<'a>: Graph {
    type Incidences: Iterator<Item = EdgeDescriptor>;

    fn out_degree(&self, d: VertexDescriptor) -> usize;
    fn out_edges(&'a self, d: VertexDescriptor) -> Self::Incidences;
    fn source(&self, d: EdgeDescriptor) -> VertexDescriptor;
    fn target(&self, d: EdgeDescriptor) -> VertexDescriptor;
}

/// A graph whose vertices can be listed.
///
/// Descriptors are dense: every vertex's `index()` lies in `0..order()`. The
/// searches size their per-vertex tables by `order()` and index them by
/// descriptor, so an implementation that breaks this makes them panic.
pub trait VertexListGraph<'a>: Graph {
    type Vertices: Iterator<Item = VertexDescriptor>;

    fn order(&self) -> usize;

    /// Vertices in insertion order.
    fn vertices(&'a self) -> Self::Vertices;
}

pub trait EdgeListGraph: Graph {
    fn size(&self) -> usize;
}
