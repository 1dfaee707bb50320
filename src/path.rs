use std::collections::vec_deque::{self, VecDeque};
use std::iter::FromIterator;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexDescriptor};

/// An ordered route from a start location (front) to a target location
/// (back). An empty path means no route was found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Path<T> {
    steps: VecDeque<T>,
}

impl<T> Default for Path<T> {
    fn default() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }
}

impl<T> Path<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, step: T) {
        self.steps.push_back(step);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.steps.pop_front()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.steps.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.steps.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.steps.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.steps.into()
    }
}

impl<T> FromIterator<T> for Path<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Path<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Walks `parents` back from `goal` until a vertex without a parent, then
/// returns the walk start-first.
pub fn reverse_path(
    parents: &[Option<VertexDescriptor>],
    goal: VertexDescriptor,
) -> Vec<VertexDescriptor> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = parents.get(current.index()).copied().flatten() {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Replaces each descriptor of `path` by a copy of its vertex property.
pub fn resolve<G>(graph: &G, path: Path<VertexDescriptor>) -> Result<Path<G::VertexProperty>>
where
    G: Graph,
    G::VertexProperty: Clone,
{
    path.into_iter()
        .map(|v| {
            graph
                .vertex_property(v)
                .cloned()
                .ok_or(Error::UnknownVertex(v))
        })
        .collect()
}
