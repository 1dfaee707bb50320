use std::cmp;
use std::marker::PhantomData;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, IncidenceGraph, VertexListGraph};
use crate::visitor::{DefaultVisitor, Visitor};

/// Pre-order depth-first traversal from the first vertex of a graph.
///
/// Children are explored in edge insertion order. The traversal keeps its own
/// stack of `(vertex, depth, remaining edges)` frames instead of recursing, so
/// deep graphs cannot overflow the call stack.
pub struct Dfs<T, V>
where
    T: Graph,
    V: Visitor<T>,
{
    visitor: V,
    phantom: PhantomData<T>,
}

impl<T> Dfs<T, DefaultVisitor>
where
    T: Graph,
{
    pub fn new() -> Self {
        Self::with_visitor(DefaultVisitor)
    }
}

impl<T, V> Dfs<T, V>
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

    /// Returns the largest depth reached.
    pub fn run<'a>(&mut self, graph: &'a T) -> Result<usize>
    where
        T: IncidenceGraph<'a> + VertexListGraph<'a>,
    {
        let root = graph.vertices().next().ok_or(Error::EmptyGraph)?;
        let mut visited = vec![false; graph.order()];
        let mut max_depth = 0;
        let mut count = 1;

        visited[root.index()] = true;
        self.visitor.visit(root, 0, graph);
        let mut stack = vec![(0, graph.out_edges(root))];

        loop {
            let step = match stack.last_mut() {
                Some(&mut (depth, ref mut edges)) => edges.next().map(|e| (depth, e)),
                None => break,
            };
            match step {
                Some((depth, edge)) => {
                    let next = graph.target(edge);
                    if visited[next.index()] {
                        continue;
                    }
                    visited[next.index()] = true;
                    count += 1;
                    self.visitor.visit(next, depth + 1, graph);
                    max_depth = cmp::max(max_depth, depth + 1);
                    stack.push((depth + 1, graph.out_edges(next)));
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(visited = count, max_depth, "depth-first traversal finished");
        Ok(max_depth)
    }

    pub fn visitor_ref(&self) -> &V {
        &self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }
}

pub fn traverse_depth_first<'a, T, V>(graph: &'a T, visitor: V) -> Result<usize>
where
    T: IncidenceGraph<'a> + VertexListGraph<'a>,
    V: Visitor<T>,
{
    Dfs::with_visitor(visitor).run(graph)
}
