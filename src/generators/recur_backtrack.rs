use super::lcg::Lcg;
use crate::maze::{Cell, Coord, Grid};

/// Jumps to the next room, as `(d_row, d_col)`, before shuffling.
const JUMPS: [(isize, isize); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];

/// One room on the carving stack with its shuffled jump order.
struct Frame {
    room: Coord,
    jumps: [(isize, isize); 4],
    next: usize,
}

impl Frame {
    fn enter(room: Coord, rng: &mut Lcg) -> Self {
        let mut jumps = JUMPS;
        rng.shuffle(&mut jumps);
        Frame {
            room,
            jumps,
            next: 0,
        }
    }
}

/// Carves passages from `from` with a randomized depth-first backtracker.
///
/// Rooms sit at odd coordinates; moving between two rooms opens the wall cell
/// between them. A room is entered only if it is still a wall and strictly
/// inside the border. Each frame shuffles its jumps once, on entry, and then
/// resumes where it left off after a child is exhausted, so the PRNG is drawn
/// in exactly the order a recursive carver would draw it.
pub fn recursive_backtrack(grid: &mut Grid, from: Coord, rng: &mut Lcg) {
    let size = grid.size();
    let mut stack = vec![Frame::enter(from, rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.jumps.len() {
            stack.pop();
            continue;
        }
        let (d_row, d_col) = frame.jumps[frame.next];
        frame.next += 1;
        let room = frame.room;

        let neighbor = room
            .offset(d_row, d_col, size)
            .filter(|&n| !grid.is_boundary(n) && grid[n] == Cell::Wall);
        if let Some(neighbor) = neighbor {
            grid.set(neighbor, Cell::Open);
            grid.set(room.midpoint(neighbor), Cell::Open);
            stack.push(Frame::enter(neighbor, rng));
        }
    }
}
