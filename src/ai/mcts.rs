//! Monte-Carlo tree search with UCT selection.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]; the
//! parent link is an index, so the tree has no ownership cycles. A tree is
//! built for one search call and dropped afterwards.

use log::{debug, log_enabled, trace, Level};
use rand::{prelude::*, rngs::StdRng};
use std::time::Instant;

use crate::core::{Board, EngineError, EngineResult, Outcome, Player};

use super::{
    agent::Agent,
    search::{searchable_columns, SearchConfig},
};

/// Reward for a drawn rollout
pub const DRAW_REWARD: f64 = 0.5;

/// Index into the node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Parent of the root
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub board: Board,
    pub outcome: Outcome,
    pub parent: NodeId,
    /// In expansion order
    pub children: Vec<NodeId>,
    pub visits: u32,
    /// Sum of rewards backpropagated through this node
    pub value: f64,
}

impl Node {
    fn new(board: Board, parent: NodeId, win_length: usize) -> Self {
        let outcome = board.evaluate_outcome(win_length);
        Self {
            board,
            outcome,
            parent,
            children: Vec::new(),
            visits: 0,
            value: 0.0,
        }
    }

    /// value/visits + sqrt(2 ln(parent visits) / visits)
    pub fn uct(&self, ln_parent_visits: f64) -> f64 {
        let n = self.visits as f64;
        self.value / n + (2.0 * ln_parent_visits / n).sqrt()
    }
}

/// Arena-backed search tree; the root is always `NodeId(0)`
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
    win_length: usize,
}

impl Tree {
    pub fn new(board: Board, win_length: usize) -> Self {
        Self {
            nodes: vec![Node::new(board, NodeId::NONE, win_length)],
            win_length,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn allocate(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add a child for the lowest-index column not tried yet, dropping the
    /// piece of whoever is next by piece-count parity
    fn expand(&mut self, id: NodeId) -> EngineResult<NodeId> {
        let node = self.get(id);
        let mv = node
            .board
            .legal_columns()
            .get(node.children.len())
            .copied()
            .ok_or(EngineError::NoLegalMove)?;

        let player = node.board.next_to_move();
        let board = node.board.apply_move(player, mv.column)?;

        let child = self.allocate(Node::new(board, id, self.win_length));
        self.get_mut(id).children.push(child);
        Ok(child)
    }

    /// Child with the highest UCT score; the first one wins ties
    pub fn select_child(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id);
        let ln_n = (node.visits as f64).ln();

        let mut best = None;
        let mut best_uct = f64::NEG_INFINITY;
        for &child in &node.children {
            let uct = self.get(child).uct(ln_n);
            if uct > best_uct {
                best_uct = uct;
                best = Some(child);
            }
        }
        best
    }

    /// Descend from the root, expanding the first node that still has an
    /// untried column. Stops early on terminal nodes.
    pub fn tree_policy(&mut self) -> EngineResult<NodeId> {
        let mut id = self.root();

        while !self.get(id).outcome.is_terminal() {
            let node = self.get(id);
            if node.children.len() < node.board.legal_columns().len() {
                return self.expand(id);
            }

            match self.select_child(id) {
                Some(child) => id = child,
                None => break,
            }
        }

        Ok(id)
    }

    /// Add the reward to every node from `id` up to the root inclusive
    pub fn backpropagate(&mut self, mut id: NodeId, reward: f64) {
        while !id.is_none() {
            let node = self.get_mut(id);
            node.visits += 1;
            node.value += reward;
            id = node.parent;
        }
    }

    /// Most visited child of the root; the first one wins ties
    pub fn best_child(&self) -> Option<NodeId> {
        let mut best = None;
        let mut best_visits = 0;
        for &child in &self.get(self.root()).children {
            let visits = self.get(child).visits;
            if best.is_none() || visits > best_visits {
                best_visits = visits;
                best = Some(child);
            }
        }
        best
    }
}

/// Random playout from `board`, alternating from `player`. Returns 1 if
/// `player` wins, [`DRAW_REWARD`] on a draw, 0 on a loss.
pub fn rollout(board: &Board, player: Player, win_length: usize, rng: &mut StdRng) -> EngineResult<f64> {
    let mut board = board.clone();
    let mut mover = player;

    let outcome = loop {
        let outcome = board.evaluate_outcome(win_length);
        if outcome.is_terminal() {
            break outcome;
        }

        let legal = board.legal_columns();
        let mv = legal.choose(rng).ok_or(EngineError::NoLegalMove)?;
        board.play(mover, mv.column)?;
        mover = mover.opponent();
    };

    Ok(match outcome {
        Outcome::Win(winner) if winner == player => 1.0,
        Outcome::Draw => DRAW_REWARD,
        _ => 0.0,
    })
}

pub struct Mcts {
    rng: StdRng,
    iterations: u64,
}

impl Mcts {
    pub fn new(rng: StdRng) -> Self {
        Self { rng, iterations: 0 }
    }

    /// Run the search and return the whole tree, for callers that want to
    /// inspect statistics beyond the chosen column
    pub fn build_tree(&mut self, board: &Board, player: Player, config: &SearchConfig) -> EngineResult<Tree> {
        searchable_columns(board, config)?;
        if config.iterations.is_none() && config.move_time.is_none() {
            return Err(EngineError::InvalidConfiguration(
                "MCTS needs an iteration or time budget".to_string(),
            ));
        }

        let start_time = Instant::now();
        let mut tree = Tree::new(board.clone(), config.win_length);
        self.iterations = 0;

        loop {
            let leaf = tree.tree_policy()?;
            let reward = rollout(&tree.get(leaf).board, player, config.win_length, &mut self.rng)?;
            tree.backpropagate(leaf, reward);
            self.iterations += 1;

            if log_enabled!(Level::Trace) {
                trace!(
                    "mcts iteration {} leaf {:?} reward {}",
                    self.iterations,
                    leaf,
                    reward
                );
            }

            if config
                .iterations
                .is_some_and(|budget| self.iterations >= budget as u64)
            {
                break;
            }
            if config
                .move_time
                .is_some_and(|budget| start_time.elapsed() >= budget)
            {
                break;
            }
        }

        debug!(
            "mcts ran {} iterations, {} nodes in {:.3}s",
            self.iterations,
            tree.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(tree)
    }
}

impl Agent for Mcts {
    fn search(&mut self, board: &Board, player: Player, config: &SearchConfig) -> EngineResult<usize> {
        let tree = self.build_tree(board, player, config)?;

        let best = tree.best_child().ok_or(EngineError::NoLegalMove)?;
        tree.get(best)
            .board
            .changed_column(&tree.get(tree.root()).board)
            .ok_or(EngineError::NoLegalMove)
    }

    fn nodes_explored(&self) -> u64 {
        self.iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::make_rng;
    use indoc::indoc;

    fn iterations(n: u32) -> SearchConfig {
        SearchConfig {
            iterations: Some(n),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_expansion_is_lowest_column_first() {
        let board = Board::new(4, 4).unwrap();
        let mut mcts = Mcts::new(make_rng(Some(5)));
        let tree = mcts.build_tree(&board, Player::One, &iterations(3)).unwrap();

        let root = tree.get(tree.root());
        assert_eq!(root.children.len(), 3);
        for (i, &child) in root.children.iter().enumerate() {
            let child = tree.get(child);
            assert_eq!(child.parent, tree.root());
            assert_eq!(child.board.changed_column(&root.board), Some(i));
            assert_eq!(child.board.get(i, 0), Some(Player::One));
        }
    }

    #[test]
    fn test_expansion_uses_parity_player() {
        let board = Board::new(3, 3).unwrap().apply_move(Player::One, 1).unwrap();
        let mut mcts = Mcts::new(make_rng(Some(5)));
        let tree = mcts.build_tree(&board, Player::Two, &iterations(1)).unwrap();

        let child = tree.get(tree.get(tree.root()).children[0]);
        assert_eq!(child.board.get(0, 0), Some(Player::Two));
    }

    #[test]
    fn test_visits_are_consistent() {
        let board = Board::new(5, 4).unwrap();
        let mut mcts = Mcts::new(make_rng(Some(9)));
        let tree = mcts.build_tree(&board, Player::One, &iterations(200)).unwrap();

        let root = tree.get(tree.root());
        assert_eq!(root.visits, 200);
        assert!(root.parent.is_none());

        // the root is never terminal here, so every iteration descends into a child
        let child_visits: u32 = root.children.iter().map(|&c| tree.get(c).visits).sum();
        assert_eq!(child_visits, 200);

        for node in (0..tree.len()).map(|i| tree.get(NodeId(i as u32))) {
            assert!(node.value <= node.visits as f64);
            assert!(node.visits >= 1);
        }
    }

    /// Root with its first two children expanded and the given statistics
    fn two_children(stats: [(u32, f64); 2]) -> (Tree, NodeId, NodeId) {
        let mut tree = Tree::new(Board::new(4, 4).unwrap(), 4);
        let root = tree.root();
        let first = tree.expand(root).unwrap();
        let second = tree.expand(root).unwrap();

        for (id, (visits, value)) in [first, second].into_iter().zip(stats) {
            let node = tree.get_mut(id);
            node.visits = visits;
            node.value = value;
        }
        tree.get_mut(root).visits = stats[0].0 + stats[1].0;
        (tree, first, second)
    }

    #[test]
    fn test_uct_tie_goes_to_first_child() {
        let (tree, first, _) = two_children([(5, 2.5), (5, 2.5)]);
        assert_eq!(tree.select_child(tree.root()), Some(first));

        let (tree, _, second) = two_children([(5, 2.5), (5, 3.0)]);
        assert_eq!(tree.select_child(tree.root()), Some(second));
    }

    #[test]
    fn test_robust_child_tie_goes_to_first_child() {
        // equal visits, the second child has the better average
        let (tree, first, _) = two_children([(6, 1.0), (6, 5.0)]);
        assert_eq!(tree.best_child(), Some(first));

        let (tree, _, second) = two_children([(6, 5.0), (7, 1.0)]);
        assert_eq!(tree.best_child(), Some(second));
    }

    #[test]
    fn test_rollout_rewards() {
        let won = Board::from_snapshot(indoc! {"
            1 . .
            1 2 .
            1 2 .
        "})
        .unwrap();
        let mut rng = make_rng(Some(1));
        assert_eq!(rollout(&won, Player::One, 3, &mut rng).unwrap(), 1.0);
        assert_eq!(rollout(&won, Player::Two, 3, &mut rng).unwrap(), 0.0);

        let drawn = Board::from_snapshot(indoc! {"
            2 1
            1 2
        "})
        .unwrap();
        assert_eq!(rollout(&drawn, Player::One, 3, &mut rng).unwrap(), DRAW_REWARD);
    }

    #[test]
    fn test_missing_budget_rejected() {
        let board = Board::new(7, 6).unwrap();
        let config = SearchConfig {
            iterations: None,
            move_time: None,
            ..SearchConfig::default()
        };
        let mut mcts = Mcts::new(make_rng(Some(2)));
        assert!(matches!(
            mcts.search(&board, Player::One, &config),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_time_budget_runs_at_least_once() {
        let board = Board::new(7, 6).unwrap();
        let config = SearchConfig {
            iterations: None,
            move_time: Some(std::time::Duration::from_millis(20)),
            ..SearchConfig::default()
        };
        let mut mcts = Mcts::new(make_rng(Some(2)));
        let column = mcts.search(&board, Player::One, &config).unwrap();
        assert!(column < 7);
        assert!(mcts.nodes_explored() >= 1);
    }
}
