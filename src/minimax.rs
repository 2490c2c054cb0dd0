use crate::board::{Board, GameOutcome, Player};
use crate::minimax_node::{MinimaxNode, outcome_of};
use crate::random::{RandomGenerator, StandardRandomGenerator};
use ego_tree::{NodeId, Tree};
use log::{debug, trace};

/// The default number of nodes pre-allocated when recording a search tree.
pub const DEFAULT_NODE_CAPACITY: usize = 1024;

/// The result of searching a position: the best move for the player to act, the minimax score it
/// leads to, and whether that score favours the player to act.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Evaluation<M> {
    /// The best move found. `None` if the position has no moves.
    pub best_move: Option<M>,
    /// The minimax score of the position.
    pub score: i64,
    /// Whether `score` favours the player to act.
    pub favorable: bool,
}

impl<M> Evaluation<M> {
    fn new(player: Player, best_move: Option<M>, score: i64) -> Self {
        Self {
            best_move,
            score,
            favorable: score * player.sign() > 0,
        }
    }

    /// The outcome of optimal play for the player to act.
    pub fn outcome(&self) -> GameOutcome {
        outcome_of(self.score, self.favorable)
    }
}

/// An exhaustive minimax search over any [`Board`].
///
/// The search walks the full game tree without pruning or depth limits, so it is only practical
/// for games whose trees fit in time. Ties between equally good moves are broken with `K`.
pub struct MinimaxSearch<K: RandomGenerator> {
    random: K,
    node_capacity: usize,
}

impl<K: RandomGenerator> Default for MinimaxSearch<K> {
    fn default() -> Self {
        MinimaxSearchBuilder::new().build()
    }
}

/// A builder for creating instances of `MinimaxSearch`.
pub struct MinimaxSearchBuilder<K: RandomGenerator> {
    random_generator: K,
    node_capacity: usize,
}

impl<K: RandomGenerator> Default for MinimaxSearchBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> MinimaxSearchBuilder<K> {
    pub fn new() -> Self {
        Self {
            random_generator: K::default(),
            node_capacity: DEFAULT_NODE_CAPACITY,
        }
    }

    /// Sets the random number generator used to break ties.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    /// Sets how many nodes to pre-allocate in trees built by [`MinimaxSearch::explore_tree`].
    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    pub fn build(self) -> MinimaxSearch<K> {
        MinimaxSearch {
            random: self.random_generator,
            node_capacity: self.node_capacity,
        }
    }
}

/// One position on the explicit search stack.
struct Frame<T: Board> {
    board: T,
    depth: u32,
    player: Player,
    moves: std::vec::IntoIter<T::Move>,
    pending: Option<T::Move>,
    best: Option<(T::Move, i64)>,
}

impl<T: Board> Frame<T> {
    fn new(board: T, depth: u32) -> Self {
        let moves = if board.is_terminal() {
            Vec::new()
        } else {
            board.get_available_moves()
        };
        Self {
            player: board.get_current_player(),
            board,
            depth,
            moves: moves.into_iter(),
            pending: None,
            best: None,
        }
    }

    /// Folds the score of the child reached by the pending move into the best line so far.
    fn record(&mut self, score: i64) {
        let Some(b_move) = self.pending.take() else {
            return;
        };
        let best_score = self.best.as_ref().map(|(_, best)| *best);
        if prefers(self.player, score, best_score) {
            self.best = Some((b_move, score));
        }
    }

    fn finish(self) -> Evaluation<T::Move> {
        let evaluation = match self.best {
            Some((b_move, score)) => Evaluation::new(self.player, Some(b_move), score),
            None => Evaluation::new(self.player, None, self.board.evaluate(self.depth)),
        };
        trace!(
            "depth {}: {:?} to move, score {}, best move {:?}",
            self.depth, self.player, evaluation.score, evaluation.best_move
        );
        evaluation
    }
}

/// The first player maximises, the second minimises. The earliest of equal scores is kept.
fn prefers(player: Player, score: i64, best: Option<i64>) -> bool {
    match best {
        None => true,
        Some(best) => match player {
            Player::First => score > best,
            Player::Second => score < best,
        },
    }
}

impl<K: RandomGenerator> MinimaxSearch<K> {
    /// Returns a new builder for `MinimaxSearch`.
    pub fn builder() -> MinimaxSearchBuilder<K> {
        MinimaxSearchBuilder::new()
    }

    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    /// Evaluates `board` by walking its whole game tree.
    ///
    /// Leaves are scored with [`Board::evaluate`] at their distance from `board`. Inner nodes take
    /// the maximum of their children when [`Player::First`] is to move and the minimum otherwise.
    /// The walk keeps its own stack, so the tree depth is not bounded by the call stack.
    pub fn minimax<T: Board>(&self, board: &T) -> Result<Evaluation<T::Move>, T::Error> {
        let mut current = Frame::new(board.clone(), 0);
        let mut parents: Vec<Frame<T>> = Vec::new();

        loop {
            if let Some(b_move) = current.moves.next() {
                let child = current.board.apply_move(&b_move)?;
                let depth = current.depth + 1;
                current.pending = Some(b_move);
                parents.push(std::mem::replace(&mut current, Frame::new(child, depth)));
                continue;
            }

            let evaluation = current.finish();
            match parents.pop() {
                Some(mut parent) => {
                    parent.record(evaluation.score);
                    current = parent;
                }
                None => return Ok(evaluation),
            }
        }
    }

    /// Returns every move after which the opponent cannot force a favourable result, in the
    /// board's move order.
    pub fn winning_moves<T: Board>(&self, board: &T) -> Result<Vec<T::Move>, T::Error> {
        let mut winning = Vec::new();
        for candidate in board.get_available_moves() {
            let successor = board.apply_move(&candidate)?;
            let reply = self.minimax(&successor)?;
            if !reply.favorable {
                winning.push(candidate);
            }
        }
        Ok(winning)
    }

    /// Picks a move for the player to act.
    ///
    /// Chooses uniformly among the winning moves, or among all legal moves when there is no
    /// winning one. Returns `None` only if the board has no legal moves.
    pub fn best_move<T: Board>(&mut self, board: &T) -> Result<Option<T::Move>, T::Error> {
        let candidates = board.get_available_moves();
        let winning = self.winning_moves(board)?;

        let use_fallback = winning.is_empty();
        let pool = if use_fallback { &candidates } else { &winning };
        let chosen = self.random.get_random_from_slice(pool).cloned();

        debug!(
            "{:?} to move: {} winning of {} legal moves, picked {:?}{}",
            board.get_current_player(),
            winning.len(),
            candidates.len(),
            chosen,
            if use_fallback { " (no winning move)" } else { "" }
        );
        Ok(chosen)
    }

    /// Builds and scores the complete game tree below `board`.
    ///
    /// Every node carries the same score and best move [`MinimaxSearch::minimax`] would report for
    /// its position, with depths counted from `board`. Only practical for small games.
    pub fn explore_tree<T: Board>(&self, board: &T) -> Result<Tree<MinimaxNode<T>>, T::Error> {
        let mut tree = Tree::with_capacity(
            MinimaxNode::new(board.clone(), 0, None),
            self.node_capacity,
        );

        let mut unexpanded = vec![tree.root().id()];
        while let Some(node_id) = unexpanded.pop() {
            let Some(node) = tree.get(node_id) else {
                continue;
            };
            let parent = node.value();
            if parent.board.is_terminal() {
                continue;
            }

            let mut children = Vec::new();
            for b_move in parent.board.get_available_moves() {
                let child = parent.board.apply_move(&b_move)?;
                children.push(MinimaxNode::new(child, parent.depth + 1, Some(b_move)));
            }

            let Some(mut node) = tree.get_mut(node_id) else {
                continue;
            };
            for child in children {
                unexpanded.push(node.append(child).id());
            }
        }

        let pre_order: Vec<NodeId> = tree.root().descendants().map(|node| node.id()).collect();
        for node_id in pre_order.into_iter().rev() {
            self.score_node(&mut tree, node_id);
        }

        debug!("explored {} nodes", tree.nodes().count());
        Ok(tree)
    }

    /// Scores a node whose children are already scored.
    fn score_node<T: Board>(&self, tree: &mut Tree<MinimaxNode<T>>, node_id: NodeId) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        let player = node.value().current_player;
        let mut best: Option<(T::Move, i64)> = None;
        for child in node.children() {
            let child = child.value();
            let best_score = best.as_ref().map(|(_, score)| *score);
            if let Some(b_move) = &child.prev_move {
                if prefers(player, child.score, best_score) {
                    best = Some((b_move.clone(), child.score));
                }
            }
        }

        let (best_move, score) = match best {
            Some((b_move, score)) => (Some(b_move), score),
            None => (None, node.value().board.evaluate(node.value().depth)),
        };

        if let Some(mut node) = tree.get_mut(node_id) {
            node.value().set_score(best_move, score);
        }
    }
}

impl MinimaxSearch<StandardRandomGenerator> {
    /// Creates a search that breaks ties with the thread-local generator.
    pub fn new() -> Self {
        MinimaxSearchBuilder::new().build()
    }
}
