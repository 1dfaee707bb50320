use std::fmt;
use std::ops::Range;

use fnv::FnvHashMap;
use slab::{self, Slab};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Direction, EdgeDescriptor, EdgeListGraph, FromUsize, Graph, IncidenceGraph,
                   VertexDescriptor, VertexListGraph, Weight};

/// Graph store: an arena of vertices, each owning its outgoing arcs.
///
/// Vertices are never removed, so a vertex's slab key is also its insertion
/// index.
#[derive(Clone, Debug)]
pub struct AdjacencyList<W = u32> {
    vertices: Slab<Vertex<W>>,
    lookup: FnvHashMap<String, VertexDescriptor>,
    size: usize,
    degree_hint: usize,
}

#[derive(Clone, Debug, Hash)]
pub struct Vertex<W> {
    content: String,
    index: usize,
    edges: Vec<Edge<W>>,
}

impl<W> Vertex<W> {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge<W> {
    target: VertexDescriptor,
    weight: Option<W>,
}

impl<W: Copy> Edge<W> {
    pub fn target(&self) -> VertexDescriptor {
        self.target
    }

    pub fn weight(&self) -> Option<W> {
        self.weight
    }
}

/// What a teardown gave back.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Released {
    pub vertices: usize,
    pub edges: usize,
}

impl Released {
    /// Every vertex, every edge and the graph itself.
    pub fn allocations(&self) -> usize {
        self.vertices + self.edges + 1
    }
}

impl<W> Default for AdjacencyList<W> {
    fn default() -> Self {
        Self {
            vertices: Slab::new(),
            lookup: FnvHashMap::default(),
            size: 0,
            degree_hint: 0,
        }
    }
}

impl<W> AdjacencyList<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: usize) -> Self {
        Self::with_order_size(order, 0)
    }

    /// Room for `order` vertices, with `size` arcs spread evenly over them.
    pub fn with_order_size(order: usize, size: usize) -> Self {
        let degree_hint = if order == 0 {
            0
        } else {
            size / order + usize::from(size % order != 0)
        };
        Self {
            vertices: Slab::with_capacity(order),
            lookup: FnvHashMap::with_capacity_and_hasher(order, Default::default()),
            size: 0,
            degree_hint,
        }
    }

    /// Every vertex starts with room for `size` outgoing arcs.
    pub fn with_size(size: usize) -> Self {
        Self {
            degree_hint: size,
            ..Self::default()
        }
    }

    pub fn vertex(&self, content: &str) -> Option<VertexDescriptor> {
        self.lookup.get(content).copied()
    }

    pub fn vertex_index(&self, content: &str) -> Option<usize> {
        self.vertex(content).map(VertexDescriptor::index)
    }

    pub fn content(&self, d: VertexDescriptor) -> Option<&str> {
        self.vertices.get(d.into()).map(Vertex::content)
    }

    pub fn get(&self, d: VertexDescriptor) -> Option<&Vertex<W>> {
        self.vertices.get(d.into())
    }

    pub fn add_vertex<S: Into<String>>(&mut self, content: S) -> Result<VertexDescriptor> {
        let content = content.into();
        if content.is_empty() {
            return Err(Error::EmptyContent);
        }
        if self.lookup.contains_key(&content) {
            return Err(Error::DuplicateVertex(content));
        }
        self.lookup.try_reserve(1)?;

        let entry = self.vertices.vacant_entry();
        let index = entry.key();
        debug_assert_eq!(index, self.lookup.len());
        entry.insert(Vertex {
            content: content.clone(),
            index,
            edges: Vec::with_capacity(self.degree_hint),
        });

        let d = VertexDescriptor::from_usize(index);
        debug!(index, content = %content, "added vertex");
        self.lookup.insert(content, d);
        Ok(d)
    }

    /// Consumes the graph and reports how much it held.
    pub fn delete(self) -> Released {
        let released = Released {
            vertices: self.vertices.len(),
            edges: self.size,
        };
        debug!(vertices = released.vertices, edges = released.edges, "deleted graph");
        released
    }

    /// Drops every vertex and arc but keeps the graph and its capacity.
    /// Descriptors handed out before are invalid afterwards; indices start
    /// again at 0.
    pub fn clear(&mut self) -> Released {
        let released = Released {
            vertices: self.vertices.len(),
            edges: self.size,
        };
        self.vertices.clear();
        self.lookup.clear();
        self.size = 0;
        debug!(vertices = released.vertices, edges = released.edges, "cleared graph");
        released
    }

    fn reserve_arcs(&mut self, d: VertexDescriptor, additional: usize) -> Result<()> {
        self.vertices[d.index()].edges.try_reserve(additional)?;
        Ok(())
    }
}

impl<W: Weight> AdjacencyList<W> {
    pub fn add_edge(&mut self, source: &str, target: &str, direction: Direction) -> Result<()> {
        self.insert_arcs(source, target, None, direction)
    }

    pub fn add_weighted_edge(
        &mut self,
        source: &str,
        target: &str,
        weight: W,
        direction: Direction,
    ) -> Result<()> {
        self.insert_arcs(source, target, Some(weight), direction)
    }

    fn insert_arcs(
        &mut self,
        source: &str,
        target: &str,
        weight: Option<W>,
        direction: Direction,
    ) -> Result<()> {
        let s = self.vertex(source)
            .ok_or_else(|| Error::VertexNotFound(source.to_owned()))?;
        let t = self.vertex(target)
            .ok_or_else(|| Error::VertexNotFound(target.to_owned()))?;

        // Room for every arc is secured before any arc is attached, so a
        // failure here leaves no arc behind.
        match direction {
            Direction::Unidirectional => self.reserve_arcs(s, 1)?,
            Direction::Bidirectional if s == t => self.reserve_arcs(s, 2)?,
            Direction::Bidirectional => {
                self.reserve_arcs(s, 1)?;
                self.reserve_arcs(t, 1)?;
            }
        }

        self.vertices[s.index()].edges.push(Edge { target: t, weight });
        self.size += 1;
        if direction == Direction::Bidirectional {
            self.vertices[t.index()].edges.push(Edge { target: s, weight });
            self.size += 1;
        }

        debug!(source, target, ?weight, ?direction, "added edge");
        Ok(())
    }
}

impl<W: Weight> Graph for AdjacencyList<W> {
    type VertexProperty = String;
    type EdgeWeight = W;

    fn vertex_property(&self, d: VertexDescriptor) -> Option<&Self::VertexProperty> {
        self.vertices.get(d.into()).map(|v| &v.content)
    }

    fn edge_weight(&self, d: EdgeDescriptor) -> W {
        self.vertices[d.source.index()].edges[d.offset]
            .weight
            .unwrap_or_else(W::one)
    }
}

#[derive(Clone, Debug)]
pub struct IncidentEdges {
    source: VertexDescriptor,
    offsets: Range<usize>,
}

impl Iterator for IncidentEdges {
    type Item = EdgeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        self.offsets.next().map(|offset| EdgeDescriptor {
            source: self.source,
            offset,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.offsets.size_hint()
    }
}

impl<'a, W> IncidenceGraph<'a> for AdjacencyList<W>
where
    W: Weight + 'a,
{
    type Incidences = IncidentEdges;

    fn out_degree(&self, d: VertexDescriptor) -> usize {
        self.vertices.get(d.into()).map_or(0, |v| v.edges.len())
    }

    fn out_edges(&'a self, d: VertexDescriptor) -> Self::Incidences {
        IncidentEdges {
            source: d,
            offsets: 0..self.vertices.get(d.into()).map_or(0, |v| v.edges.len()),
        }
    }

    fn source(&self, d: EdgeDescriptor) -> VertexDescriptor {
        d.source
    }

    fn target(&self, d: EdgeDescriptor) -> VertexDescriptor {
        self.vertices[d.source.index()].edges[d.offset].target
    }
}

impl<'a, W> VertexListGraph<'a> for AdjacencyList<W>
where
    W: Weight + 'a,
{
    type Vertices = ::std::iter::Map<
        slab::Iter<'a, Vertex<W>>,
        fn((usize, &Vertex<W>)) -> VertexDescriptor,
    >;

    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&'a self) -> Self::Vertices {
        self.vertices.iter().map(
            |(k, _)| VertexDescriptor::from_usize(k),
        )
    }
}

impl<W: Weight> EdgeListGraph for AdjacencyList<W> {
    fn size(&self) -> usize {
        self.size
    }
}

impl<W> fmt::Display for AdjacencyList<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Number of vertices: {}", self.vertices.len())?;
        for (_, v) in self.vertices.iter() {
            write!(f, "[{}] {}", v.index, v.content)?;
            for e in &v.edges {
                write!(f, " ->{}", e.target.index())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AdjacencyList, Released};

    #[test]
    fn vertex_attribute() {
        use crate::graph::{Graph, VertexListGraph};

        let mut g: AdjacencyList = AdjacencyList::new();

        let v1 = g.add_vertex("San Francisco").unwrap();
        let v2 = g.add_vertex("Seattle").unwrap();
        let v3 = g.add_vertex("Chicago").unwrap();

        assert_eq!(v1.index(), 0);
        assert_eq!(v2.index(), 1);
        assert_eq!(v3.index(), 2);
        assert_eq!(g.order(), 3);

        assert_eq!(g.vertex_property(v2), Some(&"Seattle".to_string()));
        assert_eq!(g.content(v3), Some("Chicago"));
        assert_eq!(g.get(v1).map(|v| v.index()), Some(0));
        assert_eq!(g.vertex("Seattle"), Some(v2));
        assert_eq!(g.vertex("seattle"), None);
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![v1, v2, v3]);
    }

    #[test]
    fn duplicate_label() {
        use crate::error::Error;
        use crate::graph::VertexListGraph;

        let mut g: AdjacencyList = AdjacencyList::new();

        assert!(g.add_vertex("a").is_ok());
        assert!(g.add_vertex("b").is_ok());
        assert_eq!(g.add_vertex("a"), Err(Error::DuplicateVertex("a".into())));
        assert_eq!(g.order(), 2);

        assert_eq!(g.add_vertex(""), Err(Error::EmptyContent));
        assert_eq!(g.order(), 2);

        let c = g.add_vertex("c").unwrap();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn general_usage() {
        use crate::graph::{Direction, EdgeListGraph, Graph, IncidenceGraph};

        let mut g: AdjacencyList = AdjacencyList::new();

        let v1 = g.add_vertex("a").unwrap();
        let v2 = g.add_vertex("b").unwrap();
        let v3 = g.add_vertex("c").unwrap();

        g.add_edge("a", "b", Direction::Unidirectional).unwrap();
        g.add_weighted_edge("b", "c", 7, Direction::Unidirectional).unwrap();
        g.add_edge("c", "a", Direction::Unidirectional).unwrap();

        // V1 <-------- V3
        // |            ^
        // |            7
        // v            |
        // V2 ----------+

        assert_eq!(g.size(), 3);

        let e12 = g.out_edges(v1).next().unwrap();
        let e23 = g.out_edges(v2).next().unwrap();
        let e31 = g.out_edges(v3).next().unwrap();

        assert_eq!(g.source(e12), v1);
        assert_eq!(g.target(e12), v2);
        assert_eq!(g.source(e23), v2);
        assert_eq!(g.target(e23), v3);
        assert_eq!(g.source(e31), v3);
        assert_eq!(g.target(e31), v1);

        assert_eq!(g.edge_weight(e12), 1);
        assert_eq!(g.edge_weight(e23), 7);
        assert_eq!(g.get(v2).unwrap().edges()[0].weight(), Some(7));
        assert_eq!(g.get(v1).unwrap().edges()[0].weight(), None);

        assert_eq!(g.out_degree(v1), 1);
        assert_eq!(g.out_degree(v2), 1);
        assert_eq!(g.out_degree(v3), 1);
    }

    #[test]
    fn bidirectional_edge_adds_both_arcs() {
        use crate::graph::{Direction, EdgeListGraph, IncidenceGraph};

        let mut g: AdjacencyList = AdjacencyList::new();

        let v1 = g.add_vertex("a").unwrap();
        let v2 = g.add_vertex("b").unwrap();

        g.add_edge("a", "b", Direction::Bidirectional).unwrap();

        assert_eq!(g.size(), 2);
        let forward = g.out_edges(v1).map(|e| g.target(e)).collect::<Vec<_>>();
        let back = g.out_edges(v2).map(|e| g.target(e)).collect::<Vec<_>>();
        assert_eq!(forward, vec![v2]);
        assert_eq!(back, vec![v1]);
    }

    #[test]
    fn bidirectional_self_loop() {
        use crate::graph::{Direction, EdgeListGraph, IncidenceGraph};

        let mut g: AdjacencyList = AdjacencyList::new();

        let v1 = g.add_vertex("a").unwrap();
        g.add_edge("a", "a", Direction::Bidirectional).unwrap();

        assert_eq!(g.size(), 2);
        assert_eq!(g.out_degree(v1), 2);
    }

    #[test]
    fn edge_with_missing_endpoint_adds_nothing() {
        use crate::error::Error;
        use crate::graph::{Direction, EdgeListGraph, IncidenceGraph};

        let mut g: AdjacencyList = AdjacencyList::new();

        let v1 = g.add_vertex("a").unwrap();

        assert_eq!(
            g.add_edge("a", "z", Direction::Bidirectional),
            Err(Error::VertexNotFound("z".into()))
        );
        assert_eq!(
            g.add_edge("z", "a", Direction::Unidirectional),
            Err(Error::VertexNotFound("z".into()))
        );
        assert_eq!(g.size(), 0);
        assert_eq!(g.out_degree(v1), 0);
    }

    #[test]
    fn out_iterator_keeps_insertion_order() {
        use crate::graph::{Direction, IncidenceGraph};

        let mut g: AdjacencyList = AdjacencyList::new();

        let v1 = g.add_vertex("a").unwrap();
        let v2 = g.add_vertex("b").unwrap();
        let v3 = g.add_vertex("c").unwrap();
        let v4 = g.add_vertex("d").unwrap();

        g.add_edge("a", "d", Direction::Unidirectional).unwrap();
        g.add_edge("a", "b", Direction::Unidirectional).unwrap();
        g.add_edge("a", "c", Direction::Unidirectional).unwrap();

        // +---------- V1 ---------+
        // |           |           |
        // v           v           v
        // V4          V2          V3

        let targets = g.out_edges(v1).map(|e| g.target(e)).collect::<Vec<_>>();
        assert_eq!(targets, vec![v4, v2, v3]);
        assert_eq!(g.out_edges(v2).next(), None);
    }

    #[test]
    fn display() {
        use crate::graph::Direction;

        let mut g: AdjacencyList = AdjacencyList::with_order(3);

        g.add_vertex("San Francisco").unwrap();
        g.add_vertex("Seattle").unwrap();
        g.add_vertex("Chicago").unwrap();
        g.add_edge("San Francisco", "Seattle", Direction::Bidirectional).unwrap();
        g.add_edge("Seattle", "Chicago", Direction::Unidirectional).unwrap();

        assert_eq!(
            g.to_string(),
            "Number of vertices: 3\n\
             [0] San Francisco ->1\n\
             [1] Seattle ->0 ->2\n\
             [2] Chicago\n"
        );
    }

    #[test]
    fn delete() {
        use crate::graph::Direction;

        let g: AdjacencyList = AdjacencyList::new();
        assert_eq!(g.delete(), Released::default());
        assert_eq!(Released::default().allocations(), 1);

        let mut g: AdjacencyList = AdjacencyList::new();
        g.add_vertex("a").unwrap();
        g.add_vertex("b").unwrap();
        g.add_vertex("c").unwrap();
        g.add_edge("a", "b", Direction::Bidirectional).unwrap();
        g.add_edge("b", "c", Direction::Unidirectional).unwrap();

        let released = g.delete();
        assert_eq!(released, Released { vertices: 3, edges: 3 });
        assert_eq!(released.allocations(), 7);
    }

    #[test]
    fn capacity_hints() {
        use crate::graph::Direction;

        let mut g: AdjacencyList = AdjacencyList::with_order_size(4, 10);
        assert!(g.vertices.capacity() >= 4);

        let a = g.add_vertex("a").unwrap();
        assert!(g.vertices[a.index()].edges.capacity() >= 3);

        let mut g: AdjacencyList = AdjacencyList::with_size(5);
        let a = g.add_vertex("a").unwrap();
        g.add_vertex("b").unwrap();
        g.add_edge("a", "b", Direction::Bidirectional).unwrap();
        assert!(g.vertices[a.index()].edges.capacity() >= 5);

        let g: AdjacencyList = AdjacencyList::with_order_size(0, 10);
        assert_eq!(g.degree_hint, 0);
    }

    #[test]
    fn vertex_index() {
        let mut g: AdjacencyList = AdjacencyList::new();

        g.add_vertex("a").unwrap();
        g.add_vertex("b").unwrap();

        assert_eq!(g.vertex_index("a"), Some(0));
        assert_eq!(g.vertex_index("b"), Some(1));
        assert_eq!(g.vertex_index("c"), None);
    }

    #[test]
    fn clear() {
        use crate::graph::{Direction, EdgeListGraph, VertexListGraph};

        let mut g: AdjacencyList = AdjacencyList::with_order(3);
        assert_eq!(g.clear(), Released::default());

        g.add_vertex("a").unwrap();
        g.add_vertex("b").unwrap();
        g.add_vertex("c").unwrap();
        g.add_edge("a", "b", Direction::Bidirectional).unwrap();
        g.add_edge("c", "a", Direction::Unidirectional).unwrap();

        let released = g.clear();
        assert_eq!(released, Released { vertices: 3, edges: 3 });
        assert_eq!(released.allocations(), 7);

        assert_eq!(g.order(), 0);
        assert_eq!(g.size(), 0);
        assert_eq!(g.vertex("a"), None);
        assert_eq!(g.to_string(), "Number of vertices: 0\n");

        let b = g.add_vertex("b").unwrap();
        assert_eq!(b.index(), 0);
        assert!(g.add_vertex("a").is_ok());
        assert_eq!(g.delete(), Released { vertices: 2, edges: 0 });
    }

    #[test]
    fn descriptors_are_dense() {
        use crate::graph::VertexListGraph;

        let mut g: AdjacencyList = AdjacencyList::new();

        for content in &["a", "b", "c"] {
            g.add_vertex(*content).unwrap();
        }
        g.clear();
        for content in &["x", "y"] {
            g.add_vertex(*content).unwrap();
        }

        let indices = g.vertices().map(|v| v.index()).collect::<Vec<_>>();
        assert_eq!(indices, (0..g.order()).collect::<Vec<_>>());
    }
}
