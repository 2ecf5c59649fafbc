//! Tests for the explore/backtrack decision policy.

use maze_explorer::NavError;
use maze_explorer::navigation::{
    CellState, Chooser, ControllerState, Heading, JunctionMemory, MemoryEffect, Mode, Move,
    Relative, Snapshot, Topology, decide,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Always picks the candidate at a fixed position.
struct Scripted(usize);

impl Chooser for Scripted {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

fn snapshot(heading: Heading, readings: [(Relative, CellState); 4]) -> Snapshot {
    Snapshot::from_readings(heading, &readings).unwrap()
}

fn state(mode: Mode, steps: u64) -> ControllerState {
    ControllerState {
        runs: 1,
        steps,
        mode,
    }
}

#[test]
fn test_single_opening_is_always_taken() {
    for open in Relative::ALL {
        let readings = Relative::ALL.map(|d| {
            let cell = if d == open { CellState::Visited } else { CellState::Wall };
            (d, cell)
        });
        let s = snapshot(Heading::South, readings);

        for mode in [Mode::Explore, Mode::Backtrack] {
            for seed in 0..16 {
                let mut st = state(mode, 4);
                let mut memory = JunctionMemory::with_capacity(8);
                let mut rng = StdRng::seed_from_u64(seed);
                let d = decide(&s, &mut st, &mut memory, &mut rng).unwrap();
                assert_eq!(d.chosen, Move::Turn(open));
                assert_eq!(d.topology, Topology::DeadEnd);
            }
        }
    }
}

#[test]
fn test_corridor_never_reverses() {
    for other in [Relative::Ahead, Relative::Left, Relative::Right] {
        let readings = Relative::ALL.map(|d| {
            let cell = if d == other {
                CellState::Passage
            } else if d == Relative::Behind {
                CellState::Visited
            } else {
                CellState::Wall
            };
            (d, cell)
        });
        let s = snapshot(Heading::North, readings);

        for mode in [Mode::Explore, Mode::Backtrack] {
            for seed in 0..32 {
                let mut st = state(mode, 7);
                let mut memory = JunctionMemory::with_capacity(8);
                let mut rng = StdRng::seed_from_u64(seed);
                let d = decide(&s, &mut st, &mut memory, &mut rng).unwrap();
                assert_eq!(d.chosen, Move::Turn(other));
                assert_eq!(d.mode, mode);
            }
        }
    }
}

#[test]
fn test_corridor_without_behind_picks_either_side() {
    let s = snapshot(
        Heading::East,
        [
            (Relative::Ahead, CellState::Passage),
            (Relative::Left, CellState::Passage),
            (Relative::Right, CellState::Wall),
            (Relative::Behind, CellState::Wall),
        ],
    );
    let mut seen = Vec::new();
    for seed in 0..64 {
        let mut st = state(Mode::Explore, 0);
        let mut memory = JunctionMemory::with_capacity(8);
        let mut rng = StdRng::seed_from_u64(seed);
        let d = decide(&s, &mut st, &mut memory, &mut rng).unwrap();
        if !seen.contains(&d.chosen) {
            seen.push(d.chosen);
        }
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_explore_junction_moves_east_and_records_arrival() {
    // Facing north: left is west, right is east.
    let s = snapshot(
        Heading::North,
        [
            (Relative::Ahead, CellState::Wall),
            (Relative::Left, CellState::Passage),
            (Relative::Right, CellState::Passage),
            (Relative::Behind, CellState::Visited),
        ],
    );
    let mut st = state(Mode::Explore, 12);
    let mut memory = JunctionMemory::with_capacity(8);

    // Candidates are [Left, Right]; pick the second
    let d = decide(&s, &mut st, &mut memory, &mut Scripted(1)).unwrap();

    assert_eq!(d.chosen.heading(Heading::North), Heading::East);
    assert_eq!(d.memory, MemoryEffect::Pushed(Heading::North));
    assert_eq!(memory.peek_top(), Some(Heading::North));
    assert_eq!(memory.len(), 1);
    assert_eq!(st.mode, Mode::Explore);
}

#[test]
fn test_explore_junction_records_arrival_not_departure() {
    let s = snapshot(
        Heading::West,
        [
            (Relative::Ahead, CellState::Passage),
            (Relative::Left, CellState::Passage),
            (Relative::Right, CellState::Passage),
            (Relative::Behind, CellState::Visited),
        ],
    );
    for seed in 0..16 {
        let mut st = state(Mode::Explore, 3);
        let mut memory = JunctionMemory::with_capacity(8);
        let mut rng = StdRng::seed_from_u64(seed);
        let d = decide(&s, &mut st, &mut memory, &mut rng).unwrap();

        assert_eq!(d.topology, Topology::Crossroad);
        assert_ne!(d.chosen, Move::Turn(Relative::Behind));
        assert_eq!(memory.peek_top(), Some(Heading::West));
    }
}

#[test]
fn test_backtrack_pops_and_reverses_arrival() {
    // Returning eastwards into a fully explored crossroad first entered heading north.
    let s = snapshot(
        Heading::East,
        [
            (Relative::Ahead, CellState::Visited),
            (Relative::Left, CellState::Visited),
            (Relative::Right, CellState::Visited),
            (Relative::Behind, CellState::Visited),
        ],
    );
    let mut st = state(Mode::Backtrack, 40);
    let mut memory = JunctionMemory::with_capacity(8);
    memory.push(Heading::West).unwrap();
    memory.push(Heading::North).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let d = decide(&s, &mut st, &mut memory, &mut rng).unwrap();

    assert_eq!(d.chosen, Move::Face(Heading::South));
    assert_eq!(d.memory, MemoryEffect::Popped(Heading::North));
    assert_eq!(memory.len(), 1);
    assert_eq!(memory.peek_top(), Some(Heading::West));
    assert_eq!(st.mode, Mode::Backtrack);
}

#[test]
fn test_backtrack_resumes_exploring_without_repush() {
    let s = snapshot(
        Heading::South,
        [
            (Relative::Ahead, CellState::Visited),
            (Relative::Left, CellState::Passage),
            (Relative::Right, CellState::Wall),
            (Relative::Behind, CellState::Visited),
        ],
    );
    let mut st = state(Mode::Backtrack, 20);
    let mut memory = JunctionMemory::with_capacity(8);
    memory.push(Heading::South).unwrap();

    let mut rng = StdRng::seed_from_u64(9);
    let d = decide(&s, &mut st, &mut memory, &mut rng).unwrap();

    assert_eq!(d.chosen, Move::Turn(Relative::Left));
    assert_eq!(d.mode, Mode::Explore);
    assert_eq!(st.mode, Mode::Explore);
    assert_eq!(d.memory, MemoryEffect::Unchanged);
    assert_eq!(memory.len(), 1);
}

#[test]
fn test_backtrack_with_empty_memory_degrades_to_dead_end_rule() {
    let s = snapshot(
        Heading::North,
        [
            (Relative::Ahead, CellState::Visited),
            (Relative::Left, CellState::Visited),
            (Relative::Right, CellState::Wall),
            (Relative::Behind, CellState::Visited),
        ],
    );
    for seed in 0..16 {
        let mut st = state(Mode::Backtrack, 50);
        let mut memory = JunctionMemory::with_capacity(8);
        let mut rng = StdRng::seed_from_u64(seed);
        let d = decide(&s, &mut st, &mut memory, &mut rng).unwrap();

        assert_eq!(d.memory, MemoryEffect::Underflow);
        assert_ne!(d.chosen, Move::Turn(Relative::Right));
        assert!(memory.is_empty());
        assert_eq!(st.mode, Mode::Backtrack);
    }
}

#[test]
fn test_dead_end_switches_to_backtrack_after_first_step() {
    let s = snapshot(
        Heading::North,
        [
            (Relative::Ahead, CellState::Wall),
            (Relative::Left, CellState::Wall),
            (Relative::Right, CellState::Wall),
            (Relative::Behind, CellState::Visited),
        ],
    );
    let mut st = state(Mode::Explore, 6);
    let mut memory = JunctionMemory::with_capacity(8);
    let d = decide(&s, &mut st, &mut memory, &mut Scripted(0)).unwrap();

    assert_eq!(d.chosen, Move::Turn(Relative::Behind));
    assert_eq!(d.mode, Mode::Backtrack);
}

#[test]
fn test_exit_is_preferred_like_a_passage() {
    let s = snapshot(
        Heading::East,
        [
            (Relative::Ahead, CellState::Visited),
            (Relative::Left, CellState::Exit),
            (Relative::Right, CellState::Visited),
            (Relative::Behind, CellState::Visited),
        ],
    );
    let mut st = state(Mode::Backtrack, 30);
    let mut memory = JunctionMemory::with_capacity(8);
    let mut rng = StdRng::seed_from_u64(1);
    let d = decide(&s, &mut st, &mut memory, &mut rng).unwrap();
    assert_eq!(d.chosen, Move::Turn(Relative::Left));
}

#[test]
fn test_all_walls_is_fatal() {
    let s = snapshot(Heading::North, Relative::ALL.map(|d| (d, CellState::Wall)));
    let mut st = state(Mode::Explore, 0);
    let mut memory = JunctionMemory::with_capacity(8);
    let mut rng = StdRng::seed_from_u64(0);

    assert!(matches!(
        decide(&s, &mut st, &mut memory, &mut rng),
        Err(NavError::NoNonWallDirection)
    ));
}
