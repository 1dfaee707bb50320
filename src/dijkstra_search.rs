use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{FromUsize, IncidenceGraph, VertexDescriptor, VertexListGraph, Weight};
use crate::path::{resolve, reverse_path, Path};

/// Label-setting shortest path search.
///
/// The next vertex to settle is found by a linear scan, ties going to the
/// lowest index, so a run costs O(V² + E). The distance and parent tables of
/// the last run stay available for inspection, also when the target turned out
/// to be unreachable.
#[derive(Clone, Debug, Default)]
pub struct Dijkstra<W> {
    distances: Vec<Option<W>>,
    parents: Vec<Option<VertexDescriptor>>,
    settled: Vec<bool>,
}

impl<W: Weight> Dijkstra<W> {
    pub fn new() -> Self {
        Self {
            distances: Vec::new(),
            parents: Vec::new(),
            settled: Vec::new(),
        }
    }

    pub fn run<'a, G>(
        &mut self,
        graph: &'a G,
        start: VertexDescriptor,
        target: VertexDescriptor,
    ) -> Result<Path<VertexDescriptor>>
    where
        G: IncidenceGraph<'a, EdgeWeight = W> + VertexListGraph<'a>,
    {
        for &v in &[start, target] {
            if !graph.contains_vertex(v) {
                return Err(Error::UnknownVertex(v));
            }
        }

        let order = graph.order();
        self.distances = vec![None; order];
        self.parents = vec![None; order];
        self.settled = vec![false; order];
        self.distances[start.index()] = Some(W::zero());

        while let Some((u, du)) = self.closest_unsettled() {
            self.settled[u.index()] = true;
            trace!(vertex = u.index(), distance = ?du, "settled vertex");
            if u == target {
                break;
            }

            for edge in graph.out_edges(u) {
                let v = graph.target(edge);
                if self.settled[v.index()] {
                    continue;
                }
                // A sum past the weight type's range is longer than any
                // representable distance.
                let candidate = match du.checked_add(&graph.edge_weight(edge)) {
                    Some(candidate) => candidate,
                    None => {
                        trace!(from = u.index(), to = v.index(), "skipped overflowing arc");
                        continue;
                    }
                };
                if self.distances[v.index()].map_or(true, |dv| candidate < dv) {
                    self.distances[v.index()] = Some(candidate);
                    self.parents[v.index()] = Some(u);
                }
            }
        }

        match self.distances[target.index()] {
            Some(distance) => {
                let path = reverse_path(&self.parents, target);
                debug!(
                    start = start.index(),
                    target = target.index(),
                    ?distance,
                    hops = path.len() - 1,
                    "shortest path found"
                );
                Ok(path.into_iter().collect())
            }
            None => {
                debug!(
                    start = start.index(),
                    target = target.index(),
                    "target unreachable"
                );
                Ok(Path::new())
            }
        }
    }

    /// Distance from the start of the last run, `None` if not reached.
    pub fn distance(&self, v: VertexDescriptor) -> Option<W> {
        self.distances.get(v.index()).copied().flatten()
    }

    pub fn parent(&self, v: VertexDescriptor) -> Option<VertexDescriptor> {
        self.parents.get(v.index()).copied().flatten()
    }

    pub fn is_settled(&self, v: VertexDescriptor) -> bool {
        self.settled.get(v.index()).copied().unwrap_or(false)
    }

    fn closest_unsettled(&self) -> Option<(VertexDescriptor, W)> {
        let mut best: Option<(usize, W)> = None;
        for (i, distance) in self.distances.iter().enumerate() {
            if self.settled[i] {
                continue;
            }
            if let Some(d) = *distance {
                if best.map_or(true, |(_, b)| d < b) {
                    best = Some((i, d));
                }
            }
        }
        best.map(|(i, d)| (VertexDescriptor::from_usize(i), d))
    }
}

/// Shortest path from `start` to `target` as vertex properties; empty when
/// `target` is unreachable.
pub fn shortest_path<'a, G>(
    graph: &'a G,
    start: VertexDescriptor,
    target: VertexDescriptor,
) -> Result<Path<G::VertexProperty>>
where
    G: IncidenceGraph<'a> + VertexListGraph<'a>,
    G::VertexProperty: Clone,
{
    let path = Dijkstra::<G::EdgeWeight>::new().run(graph, start, target)?;
    resolve(graph, path)
}
