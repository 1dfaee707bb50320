use std::cmp;
use std::collections::VecDeque;
use std::marker::PhantomData;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, IncidenceGraph, VertexListGraph};
use crate::visitor::{DefaultVisitor, Visitor};

/// Level-order traversal from the first vertex of a graph.
///
/// A vertex is marked the moment it is queued, so it is queued at most once.
pub struct Bfs<T, V>
where
    T: Graph,
    V: Visitor<T>,
{
    visitor: V,
    phantom: PhantomData<T>,
}

impl<T> Bfs<T, DefaultVisitor>
where
    T: Graph,
{
    pub fn new() -> Self {
        Self::with_visitor(DefaultVisitor)
    }
}

impl<T, V> Bfs<T, V>
where
    T: Graph,
    V: Visitor<T>,
{
    pub fn with_visitor(visitor: V) -> Self {
        Self {
            visitor,
            phantom: PhantomData,
        }
    }

    /// Returns the largest depth reached, which on an unweighted graph is the
    /// hop count to the farthest reachable vertex.
    pub fn run<'a>(&mut self, graph: &'a T) -> Result<usize>
    where
        T: IncidenceGraph<'a> + VertexListGraph<'a>,
    {
        let root = graph.vertices().next().ok_or(Error::EmptyGraph)?;
        let mut visited = vec![false; graph.order()];
        let mut fringe = VecDeque::with_capacity(graph.order());
        let mut max_depth = 0;
        let mut count = 0;

        visited[root.index()] = true;
        fringe.push_back((root, 0));

        while let Some((vertex, depth)) = fringe.pop_front() {
            self.visitor.visit(vertex, depth, graph);
            max_depth = cmp::max(max_depth, depth);
            count += 1;

            for edge in graph.out_edges(vertex) {
                let next = graph.target(edge);
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    fringe.push_back((next, depth + 1));
                }
            }
        }

        debug!(visited = count, max_depth, "breadth-first traversal finished");
        Ok(max_depth)
    }

    pub fn visitor_ref(&self) -> &V {
        &self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }
}

pub fn traverse_breadth_first<'a, T, V>(graph: &'a T, visitor: V) -> Result<usize>
where
    T: IncidenceGraph<'a> + VertexListGraph<'a>,
    V: Visitor<T>,
{
    Bfs::with_visitor(visitor).run(graph)
}
