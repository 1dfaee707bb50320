//! An in-memory graph with route finding.
//!
//! [`AdjacencyList`] stores vertices identified by their content and
//! optionally weighted arcs between them. On top of it sit depth- and
//! breadth-first traversal, backtracking path search (on a graph and on a
//! [`Grid`]) and Dijkstra's shortest path search. Every search returns its
//! result as a [`Path`] ordered from start to target; an empty path means no
//! route exists.

mod adjacency_list;
mod breadth_first_search;
mod depth_first_search;
mod dijkstra_search;
mod error;
mod graph;
mod graph_backtracking;
mod grid;
mod grid_backtracking;
mod path;
mod visitor;

pub use adjacency_list::{AdjacencyList, Edge, IncidentEdges, Released, Vertex};
pub use breadth_first_search::{traverse_breadth_first, Bfs};
pub use depth_first_search::{traverse_depth_first, Dfs};
pub use dijkstra_search::{shortest_path, Dijkstra};
pub use error::{Error, ErrorKind, Result};
pub use graph::{Direction, EdgeDescriptor, EdgeListGraph, FromUsize, Graph, IncidenceGraph,
                VertexDescriptor, VertexListGraph, Weight};
pub use graph_backtracking::{backtrack, find_path_graph};
pub use grid::{Cell, Grid, Point};
pub use grid_backtracking::find_path_grid;
pub use path::{reverse_path, Path};
pub use visitor::{DefaultVisitor, Recorder, Visitor};
