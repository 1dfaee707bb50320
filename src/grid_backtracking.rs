use tracing::{debug, trace};

use crate::error::Result;
use crate::grid::{Grid, Point};
use crate::path::Path;

/// Exploration priority: right, down, left, up. Changing it changes which
/// path is returned.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

struct Frame {
    point: Point,
    next: usize,
}

/// Finds the first path from `start` to `target` through 4-connected
/// walkable cells, trying neighbours right, down, left, then up.
///
/// A cell is entered at most once per call, even when the branch that
/// reached it failed. The returned path is empty when no route exists.
pub fn find_path_grid(grid: &Grid, start: Point, target: Point) -> Result<Path<Point>> {
    grid.check(start)?;
    grid.check(target)?;

    let mut visited = vec![false; grid.rows() * grid.cols()];
    let mut stack = Vec::new();
    let mut found = false;

    if enter(grid, &mut visited, start) {
        stack.push(Frame {
            point: start,
            next: 0,
        });
        found = start == target;
    }

    while !found {
        let (point, direction) = match stack.last_mut() {
            Some(frame) => {
                frame.next += 1;
                (frame.point, frame.next - 1)
            }
            None => break,
        };
        match DIRECTIONS.get(direction) {
            Some(&(dx, dy)) => {
                let next = point.offset(dx, dy);
                if enter(grid, &mut visited, next) {
                    stack.push(Frame {
                        point: next,
                        next: 0,
                    });
                    found = next == target;
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    // The stack holds exactly the successful branch, start first.
    let path = stack.into_iter().map(|frame| frame.point).collect::<Path<_>>();
    debug!(%start, %target, length = path.len(), "grid backtracking finished");
    Ok(path)
}

fn enter(grid: &Grid, visited: &mut [bool], p: Point) -> bool {
    let i = match grid.offset_of(p) {
        Some(i) => i,
        None => return false,
    };
    if visited[i] || !grid.is_walkable(p) {
        return false;
    }
    visited[i] = true;
    trace!(x = p.x, y = p.y, "checking coordinates");
    true
}
