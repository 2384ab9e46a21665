use crate::error::{Side, SolveError};
use crate::frontier::Frontier;
use crate::puzzle_sliding::board::Board;
use crate::puzzle_sliding::heuristic::{Heuristic, Manhattan};
use crate::stats::SearchStatsCollector;
use arrayvec::ArrayVec;
use log::{debug, trace};

/// Node of the search tree. It is never modified after it is pushed to the arena.
struct SearchNode {
    board: Board,
    /// Number of moves from the root (depth of the node).
    moves: u32,
    /// Index of the predecessor in the arena, `None` for the root.
    parent: Option<usize>
}

/// Result of a single step of `Search`.
enum Step {
    /// The popped node was expanded.
    Expanded,
    /// The popped node (given by its index) holds the goal board.
    Goal(usize)
}

/// Best-first search from a single board.
///
/// Nodes are stored in the arena for the whole search; the frontier holds indices of nodes not expanded yet.
struct Search<'h, H> {
    nodes: Vec<SearchNode>,
    frontier: Frontier,
    heuristic: &'h H,
    side: Side,
    expanded: u64
}

impl<'h, H: Heuristic> Search<'h, H> {
    fn new(root: Board, heuristic: &'h H, side: Side) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(heuristic.estimate(&root), 0);
        Self {
            nodes: vec![SearchNode { board: root, moves: 0, parent: None }],
            frontier,
            heuristic,
            side,
            expanded: 0
        }
    }

    /// Pops the node with the lowest `moves + heuristic` and either reports it as the goal
    /// or pushes its neighbors, except the board of its predecessor.
    fn step(&mut self, stats: &mut impl SearchStatsCollector) -> Result<Step, SolveError> {
        let index = self.frontier.pop().ok_or(SolveError::FrontierExhausted(self.side))?;
        let node = &self.nodes[index];
        if node.board.is_goal() { return Ok(Step::Goal(index)); }
        if !stats.expanded() { return Err(SolveError::Cancelled); }
        self.expanded += 1;
        let moves = node.moves + 1;
        let predecessor = node.parent.map(|p| &self.nodes[p].board);
        let children: ArrayVec<Board, 4> = node.board.neighbors().into_iter()
            .filter(|neighbor| predecessor != Some(neighbor))
            .collect();
        trace!("{} search: expanding node {} at depth {}, {} children", self.side, index, node.moves, children.len());
        stats.generated(children.len());
        for board in children {
            let priority = moves + self.heuristic.estimate(&board);
            self.nodes.push(SearchNode { board, moves, parent: Some(index) });
            self.frontier.push(priority, self.nodes.len() - 1);
        }
        Ok(Step::Expanded)
    }

    /// Returns boards on the path from the root to the node with given `index`.
    fn path_to(&self, index: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[index].moves as usize + 1);
        let mut current = Some(index);
        while let Some(i) = current {
            path.push(self.nodes[i].board.clone());
            current = self.nodes[i].parent;
        }
        path.reverse();
        path
    }
}

/// Finds a minimum-move solution of the sliding puzzle or proves that it does not exist.
///
/// The solver runs two A* searches in lockstep, one from the initial board and one from its twin,
/// one expansion each per turn. Exactly one of them reaches the goal: if it is the search from
/// the twin, the initial board is not solvable.
#[derive(Clone, Debug)]
pub struct Solver {
    solution: Option<Vec<Board>>,
    expansions: (u64, u64)
}

impl Solver {
    /// Solves `initial` using Manhattan distance as the heuristic.
    pub fn new(initial: Board) -> Result<Self, SolveError> {
        Self::with_heuristic(initial, &Manhattan)
    }

    /// Solves `initial` using given `heuristic`, which should be admissible.
    pub fn with_heuristic<H: Heuristic>(initial: Board, heuristic: &H) -> Result<Self, SolveError> {
        Self::with_heuristic_stats(initial, heuristic, &mut ())
    }

    /// Solves `initial` using given `heuristic`. Collect statistics of both searches during search.
    pub fn with_heuristic_stats<H: Heuristic>(initial: Board, heuristic: &H, stats: &mut impl SearchStatsCollector) -> Result<Self, SolveError> {
        let twin = initial.twin();
        let mut original = Search::new(initial, heuristic, Side::Original);
        let mut twin = Search::new(twin, heuristic, Side::Twin);
        let solution = loop {
            if let Step::Goal(index) = original.step(stats)? {
                break Some(original.path_to(index));
            }
            if let Step::Goal(_) = twin.step(stats)? {
                break None;
            }
        };
        match &solution {
            Some(path) => debug!("solved in {} moves", path.len() - 1),
            None => debug!("twin solved first, the board is not solvable"),
        }
        debug!("{} + {} expansions, {} + {} nodes left in frontiers",
               original.expanded, twin.expanded, original.frontier.len(), twin.frontier.len());
        Ok(Self { solution, expansions: (original.expanded, twin.expanded) })
    }

    /// Returns whether the initial board can be brought to the goal.
    #[inline] pub fn is_solvable(&self) -> bool { self.solution.is_some() }

    /// Returns minimum number of moves to solve the initial board or `None` if it is not solvable.
    pub fn moves(&self) -> Option<u32> {
        self.solution.as_ref().map(|path| path.len() as u32 - 1)
    }

    /// Returns minimum number of moves to solve the initial board or `-1` if it is not solvable.
    pub fn moves_or_negative(&self) -> i64 {
        self.moves().map_or(-1, i64::from)
    }

    /// Returns the boards of a shortest solution, from the initial board to the goal,
    /// or `None` if the initial board is not solvable.
    #[inline] pub fn solution(&self) -> Option<&[Board]> { self.solution.as_deref() }

    /// Returns the solution without copying it.
    #[inline] pub fn into_solution(self) -> Option<Vec<Board>> { self.solution }

    /// Returns the number of expansions made by the search from the initial board and from its twin.
    #[inline] pub fn expansions(&self) -> (u64, u64) { self.expansions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_sliding::heuristic::Hamming;
    use crate::puzzle_sliding::scramble::{random_unsolvable, random_walk};
    use crate::stats::{Limited, SearchAllStats};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashSet, VecDeque};

    fn board(rows: &[&[u8]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    /// Returns the length of the shortest solution found by BFS, or `None` if the goal is unreachable.
    fn bfs_moves(start: &Board) -> Option<u32> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start.clone());
        queue.push_back((start.clone(), 0));
        while let Some((b, moves)) = queue.pop_front() {
            if b.is_goal() { return Some(moves); }
            for n in b.neighbors() {
                if seen.insert(n.clone()) { queue.push_back((n, moves + 1)); }
            }
        }
        None
    }

    /// Checks that `solution` is a valid path from `initial` to the goal.
    fn check_solution(initial: &Board, solution: &[Board]) {
        assert_eq!(solution.first(), Some(initial));
        assert!(solution.last().unwrap().is_goal());
        for pair in solution.windows(2) {
            assert!(pair[0].neighbors().contains(&pair[1]));
        }
    }

    #[test]
    fn test_one_move_33() {
        let initial = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        let solver = Solver::new(initial.clone()).unwrap();
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), Some(1));
        assert_eq!(solver.moves_or_negative(), 1);
        let solution = solver.solution().unwrap();
        assert_eq!(solution.len(), 2);
        check_solution(&initial, solution);
        assert_eq!(solution[1], Board::goal(3));
    }

    #[test]
    fn test_goal_22() {
        let initial = board(&[&[1, 2], &[3, 0]]);
        assert!(initial.is_goal());
        let solver = Solver::new(initial.clone()).unwrap();
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), Some(0));
        assert_eq!(solver.solution(), Some(&[initial][..]));
        assert_eq!(solver.expansions(), (0, 0));
    }

    #[test]
    fn test_single_cell() {
        let solver = Solver::new(Board::goal(1)).unwrap();
        assert_eq!(solver.moves(), Some(0));
    }

    #[test]
    fn test_22_and_twin_are_complementary() {
        let initial = board(&[&[1, 0], &[3, 2]]);
        let solver = Solver::new(initial.clone()).unwrap();
        let twin_solver = Solver::new(initial.twin()).unwrap();
        assert_ne!(solver.is_solvable(), twin_solver.is_solvable());
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), Some(1));
        assert_eq!(twin_solver.moves(), None);
        assert_eq!(twin_solver.moves_or_negative(), -1);
        assert_eq!(twin_solver.solution(), None);
    }

    #[test]
    fn test_four_moves_33() {
        let initial = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        let solver = Solver::new(initial.clone()).unwrap();
        assert_eq!(solver.moves(), Some(4));
        check_solution(&initial, solver.solution().unwrap());
    }

    #[test]
    fn test_unsolvable_33() {
        // 1 2 3 / 4 5 6 / 8 7 0 differs from the goal by a single swap
        let solver = Solver::new(board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]])).unwrap();
        assert!(!solver.is_solvable());
        assert_eq!(solver.moves(), None);
        assert!(solver.into_solution().is_none());
    }

    #[test]
    fn test_matches_bfs() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for steps in [3, 8, 13, 20, 30] {
            let initial = random_walk(3, steps, &mut rng);
            let solver = Solver::new(initial.clone()).unwrap();
            assert_eq!(solver.moves(), bfs_moves(&initial), "{:?}", initial);
            check_solution(&initial, solver.solution().unwrap());
        }
        for _ in 0..5 {
            let initial = random_walk(2, 15, &mut rng);
            assert_eq!(Solver::new(initial.clone()).unwrap().moves(), bfs_moves(&initial));
        }
    }

    #[test]
    fn test_random_walks_44() {
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        for steps in [5, 15, 25] {
            let initial = random_walk(4, steps, &mut rng);
            let solver = Solver::new(initial.clone()).unwrap();
            let moves = solver.moves().unwrap();
            assert!(moves as usize <= steps);
            assert_eq!((steps - moves as usize) % 2, 0);
            assert!(moves >= initial.manhattan());
            let solution = solver.solution().unwrap();
            assert_eq!(solution.len(), moves as usize + 1);
            check_solution(&initial, solution);
        }
    }

    #[test]
    fn test_exactly_one_of_board_and_twin_is_solvable() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for dimension in [2, 3, 4] {
            for _ in 0..3 {
                let initial = random_unsolvable(dimension, 12, &mut rng);
                let solver = Solver::new(initial.clone()).unwrap();
                let twin_solver = Solver::new(initial.twin()).unwrap();
                assert!(!solver.is_solvable());
                assert!(twin_solver.is_solvable());
                if dimension == 2 { assert_eq!(bfs_moves(&initial), None); }
            }
        }
    }

    #[test]
    fn test_hamming_is_also_optimal() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        for _ in 0..3 {
            let initial = random_walk(3, 14, &mut rng);
            let by_manhattan = Solver::new(initial.clone()).unwrap();
            let by_hamming = Solver::with_heuristic(initial.clone(), &Hamming).unwrap();
            assert_eq!(by_manhattan.moves(), by_hamming.moves());
            check_solution(&initial, by_hamming.solution().unwrap());
        }
    }

    #[test]
    fn test_stats() {
        let initial = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        let mut stats = SearchAllStats::default();
        let solver = Solver::with_heuristic_stats(initial, &Manhattan, &mut stats).unwrap();
        let (original, twin) = solver.expansions();
        assert_eq!(stats.expanded, original + twin);
        // searches alternate, the twin never gets ahead of the original
        assert!(twin <= original && original <= twin + 1);
        assert!(stats.generated >= stats.expanded);
    }

    #[test]
    fn test_cancelled() {
        // needs at least 21 expansions (its Manhattan distance) to be solved
        let initial = board(&[&[8, 6, 7], &[2, 5, 4], &[3, 0, 1]]);
        let mut limited = Limited::with_limit(10);
        let result = Solver::with_heuristic_stats(initial, &Manhattan, &mut limited);
        assert_eq!(result.unwrap_err(), SolveError::Cancelled);
        assert_eq!(limited.stats.expanded, 10);
    }

    #[test]
    fn test_search_step_on_empty_frontier() {
        let mut search = Search::new(Board::goal(2), &Manhattan, Side::Twin);
        assert!(matches!(search.step(&mut ()), Ok(Step::Goal(0))));
        assert!(matches!(search.step(&mut ()), Err(SolveError::FrontierExhausted(Side::Twin))));
    }

    #[test]
    fn test_search_skips_predecessor() {
        let mut search = Search::new(board(&[&[1, 2, 3], &[4, 0, 5], &[7, 8, 6]]), &Manhattan, Side::Original);
        assert!(matches!(search.step(&mut ()), Ok(Step::Expanded)));
        assert_eq!(search.nodes.len(), 5);
        // the child with blank moved right (node 4) has the lowest priority and is expanded next;
        // one of its neighbors is the root, which must not be pushed again
        assert!(matches!(search.step(&mut ()), Ok(Step::Expanded)));
        assert_eq!(search.nodes.len(), 7);
        assert!(search.nodes[5..].iter().all(|n| n.moves == 2 && n.parent == Some(4)));
        assert!(search.nodes[5..].iter().all(|n| n.board != search.nodes[0].board));
    }
}
