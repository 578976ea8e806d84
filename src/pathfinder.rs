use crate::engine::{Board, Cell, Pos, BOARD_SIZE};

const GRID_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

// Search bookkeeping for one cell, stored in a flat arena indexed by
// position; the predecessor is an arena index, so path reconstruction never
// chases references.
#[derive(Clone, Copy)]
struct PathNode {
    g: u32,
    h: u32,
    f: u32,
    parent: Option<usize>,
    opened: bool,
    closed: bool,
}

const UNVISITED: PathNode = PathNode {
    g: 0,
    h: 0,
    f: 0,
    parent: None,
    opened: false,
    closed: false,
};

fn index_of(pos: Pos) -> usize {
    pos.y * BOARD_SIZE + pos.x
}

fn pos_of(index: usize) -> Pos {
    Pos::new(index % BOARD_SIZE, index / BOARD_SIZE)
}

fn manhattan(a: Pos, b: Pos) -> u32 {
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as u32
}

/// Finds the shortest 4-connected path over empty cells from `start` to
/// `goal`, or `None` when no such path exists.
///
/// A* with the Manhattan-distance heuristic, which is admissible and
/// consistent on a uniform-cost grid with 4-neighbor moves, so the first
/// path reaching the goal is optimal. Only empty cells are traversable; an
/// occupied `goal` is therefore unreachable and yields `None`, which is the
/// "can't move onto an occupied cell" rule. The ball sitting on `start`
/// never blocks its own search, since neighbors are tested but the start
/// cell itself is not.
///
/// The returned path excludes `start` and includes `goal`, in travel order.
/// Callers must reject `start == goal` before searching; the contract for
/// that case is undefined.
///
/// The open set is a plain vector scanned for the first strictly smaller
/// `f`, which keeps the tie-break among equal-cost nodes stable within one
/// search. That scan is O(V^2) worst case instead of the O(V log V) a heap
/// would give, acceptable at the fixed 81-cell scale.
pub fn find_path(board: &Board, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    debug_assert!(start != goal, "callers reject start == goal before searching");

    let mut nodes = [UNVISITED; GRID_CELLS];
    let mut open: Vec<usize> = Vec::new();

    let start_index = index_of(start);
    nodes[start_index].opened = true;
    open.push(start_index);

    while !open.is_empty() {
        // First index with a strictly smaller f wins; `Vec::remove` keeps
        // the frontier in insertion order so the tie-break stays stable.
        let mut best = 0;
        for i in 1..open.len() {
            if nodes[open[i]].f < nodes[open[best]].f {
                best = i;
            }
        }
        let current = open.remove(best);

        if pos_of(current) == goal {
            return Some(reconstruct(&nodes, current));
        }
        nodes[current].closed = true;

        let here = pos_of(current);
        let dx = [0i32, 0, -1, 1];
        let dy = [-1i32, 1, 0, 0];
        for i in 0..4 {
            let nx = here.x as i32 + dx[i];
            let ny = here.y as i32 + dy[i];
            if nx < 0 || nx >= BOARD_SIZE as i32 || ny < 0 || ny >= BOARD_SIZE as i32 {
                continue;
            }
            let neighbor = Pos::new(nx as usize, ny as usize);
            let ni = index_of(neighbor);
            // A neighbor is admissible iff it is empty; closed nodes are done.
            if nodes[ni].closed || board.get(neighbor) != Cell::Empty {
                continue;
            }

            let g = nodes[current].g + 1;
            let mut g_is_best = false;
            if !nodes[ni].opened {
                g_is_best = true;
                nodes[ni].opened = true;
                nodes[ni].h = manhattan(neighbor, goal);
                open.push(ni);
            } else if g < nodes[ni].g {
                g_is_best = true;
            }
            if g_is_best {
                nodes[ni].parent = Some(current);
                nodes[ni].g = g;
                nodes[ni].f = g + nodes[ni].h;
            }
        }
    }

    None
}

// Walks predecessor indices back from the goal. The start node is the only
// one without a parent and is excluded from the path.
fn reconstruct(nodes: &[PathNode], goal_index: usize) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut index = goal_index;
    while let Some(parent) = nodes[index].parent {
        path.push(pos_of(index));
        index = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    // A path is well-formed when every step is 4-adjacent to the previous
    // cell, every cell is empty, and the last cell is the goal.
    fn assert_valid_path(board: &Board, start: Pos, goal: Pos, path: &[Pos]) {
        assert!(!path.is_empty());
        assert_eq!(*path.last().unwrap(), goal);
        let mut prev = start;
        for &step in path {
            assert_eq!(
                step.x.abs_diff(prev.x) + step.y.abs_diff(prev.y),
                1,
                "step {} is not adjacent to {}",
                step,
                prev
            );
            assert_eq!(board.get(step), Cell::Empty, "step {} is occupied", step);
            prev = step;
        }
    }

    #[test]
    fn test_open_board_path_has_manhattan_length() {
        let board = board_from_str_array(&["R........"]).unwrap();
        let start = Pos::new(0, 0);
        let goal = Pos::new(5, 3);
        let path = find_path(&board, start, goal).unwrap();
        assert_eq!(path.len() as u32, manhattan(start, goal));
        assert_valid_path(&board, start, goal, &path);
    }

    #[test]
    fn test_straight_channel_path_is_optimal() {
        // A corridor of empty cells between walls: only one route exists and
        // its length is exactly the Manhattan distance.
        let board = board_from_str_array(&[
            "G........",
            "RRRRRRRR.",
            ".........",
        ])
        .unwrap();
        let start = Pos::new(0, 0);
        let goal = Pos::new(8, 0);
        let path = find_path(&board, start, goal).unwrap();
        assert_eq!(path.len() as u32, manhattan(start, goal));
        assert_valid_path(&board, start, goal, &path);
    }

    #[test]
    fn test_adjacent_goal_returns_single_cell_path() {
        // Row y=0 fully occupied except x=4; the ball at (4,1) steps
        // straight up into the gap.
        let board = board_from_str_array(&[
            "RRRR.RRRR",
            "....G....",
        ])
        .unwrap();
        let path = find_path(&board, Pos::new(4, 1), Pos::new(4, 0)).unwrap();
        assert_eq!(path, vec![Pos::new(4, 0)]);
    }

    #[test]
    fn test_path_excludes_start_includes_goal() {
        let board = Board::new_empty();
        let start = Pos::new(2, 2);
        let goal = Pos::new(2, 5);
        let path = find_path(&board, start, goal).unwrap();
        assert!(!path.contains(&start));
        assert_eq!(*path.last().unwrap(), goal);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_occupied_goal_is_not_found() {
        // The goal cell is treated as non-traversable when occupied, which
        // is the "can't move onto an occupied cell" rule.
        let board = board_from_str_array(&[
            "G........",
            ".........",
            "....R....",
        ])
        .unwrap();
        assert!(find_path(&board, Pos::new(0, 0), Pos::new(4, 2)).is_none());
    }

    #[test]
    fn test_obstacle_forces_detour() {
        // A wall across rows forces the path around its open end.
        let board = board_from_str_array(&[
            "G........",
            "RRRRRRRR.",
            ".........",
        ])
        .unwrap();
        let start = Pos::new(0, 0);
        let goal = Pos::new(0, 2);
        let path = find_path(&board, start, goal).unwrap();
        assert!(path.len() as u32 > manhattan(start, goal));
        assert_valid_path(&board, start, goal, &path);
    }

    #[test]
    fn test_closed_ring_disconnects_start_from_goal() {
        // The ball at (4,4) is sealed in by a ring of occupied cells.
        let board = board_from_str_array(&[
            ".........",
            ".........",
            ".........",
            "...RRR...",
            "...RGR...",
            "...RRR...",
        ])
        .unwrap();
        assert!(find_path(&board, Pos::new(4, 4), Pos::new(0, 0)).is_none());
    }

    #[test]
    fn test_start_occupancy_does_not_block_search() {
        // The start holds the moving ball; only the four exits matter.
        let board = board_from_str_array(&["G........"]).unwrap();
        assert_eq!(board.get(Pos::new(0, 0)), Cell::Green);
        assert!(find_path(&board, Pos::new(0, 0), Pos::new(8, 8)).is_some());
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        // Many equal-cost routes exist on an open board; repeated searches
        // must pick the same one.
        let board = Board::new_empty();
        let first = find_path(&board, Pos::new(1, 1), Pos::new(6, 6)).unwrap();
        for _ in 0..5 {
            let again = find_path(&board, Pos::new(1, 1), Pos::new(6, 6)).unwrap();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_full_width_maze() {
        // Alternating walls force a serpentine route covering most rows.
        let board = board_from_str_array(&[
            "G........",
            "RRRRRRRR.",
            ".........",
            ".RRRRRRRR",
            ".........",
        ])
        .unwrap();
        let start = Pos::new(0, 0);
        let goal = Pos::new(8, 4);
        let path = find_path(&board, start, goal).unwrap();
        assert_valid_path(&board, start, goal, &path);
        // Down the right gap, back across, down the left gap, across again.
        assert_eq!(path.len(), 28);
    }
}
