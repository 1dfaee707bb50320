use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{IncidenceGraph, VertexDescriptor, VertexListGraph};
use crate::path::{resolve, Path};

/// Finds the first path from `start` to `target`, following edges in
/// insertion order and backing out of dead ends.
///
/// A vertex is entered at most once per call. The returned path is empty when
/// `target` cannot be reached.
pub fn backtrack<'a, G>(
    graph: &'a G,
    start: VertexDescriptor,
    target: VertexDescriptor,
) -> Result<Path<VertexDescriptor>>
where
    G: IncidenceGraph<'a> + VertexListGraph<'a>,
{
    for &v in &[start, target] {
        if !graph.contains_vertex(v) {
            return Err(Error::UnknownVertex(v));
        }
    }

    let mut visited = vec![false; graph.order()];
    visited[start.index()] = true;
    trace!(vertex = start.index(), "checking vertex");

    let mut stack = vec![(start, graph.out_edges(start))];
    let mut found = start == target;

    while !found {
        let step = match stack.last_mut() {
            Some(&mut (_, ref mut edges)) => edges.next(),
            None => break,
        };
        match step {
            Some(edge) => {
                let next = graph.target(edge);
                if visited[next.index()] {
                    continue;
                }
                visited[next.index()] = true;
                trace!(vertex = next.index(), "checking vertex");
                stack.push((next, graph.out_edges(next)));
                found = next == target;
            }
            None => {
                stack.pop();
            }
        }
    }

    let path = stack.into_iter().map(|(v, _)| v).collect::<Path<_>>();
    debug!(
        start = start.index(),
        target = target.index(),
        length = path.len(),
        "graph backtracking finished"
    );
    Ok(path)
}

/// Like [`backtrack`], but the path holds vertex properties.
pub fn find_path_graph<'a, G>(
    graph: &'a G,
    start: VertexDescriptor,
    target: VertexDescriptor,
) -> Result<Path<G::VertexProperty>>
where
    G: IncidenceGraph<'a> + VertexListGraph<'a>,
    G::VertexProperty: Clone,
{
    let path = backtrack(graph, start, target)?;
    resolve(graph, path)
}
