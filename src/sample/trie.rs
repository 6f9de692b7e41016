use super::node::Node;
use super::node::NodeId;
use super::sample::Sample;
use crate::Cell;
use crate::Weight;
use crate::errors::Error;
use crate::quantile::cohort::Cohort;
use crate::quantile::row::Row;

/// The count-annotated prefix trie over grid multi-indices.
///
/// Nodes live in an arena; every root-to-leaf path of depth `d` is one
/// observed multi-index. The terminal layer is shared: one node per
/// distinct last-axis cell, registered in `last` and linked from every
/// prefix that reaches it. Children keep insertion order; child lookups
/// are linear scans (this is the unsorted variant, see `Sorted` for the
/// binary-search one).
///
/// Build with `observe` or `insert`, freeze with `finalize`, then read.
/// The two build modes do not mix: `observe` leaves counting to
/// `finalize`, `insert` maintains counts as it goes. A shared terminal's
/// own count aggregates the whole sample; the conditional mass of each
/// branch rides on the parent link (`Node::masses`), so last-axis
/// populations stay specific to the prefix that reached them. Mutating
/// calls must never race a `transform`.
#[derive(Debug, Clone)]
pub struct Trie {
    dimension: usize,
    nodes: Vec<Node>,
    last: Vec<NodeId>,
}

impl Trie {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            nodes: vec![Node::new(0)],
            last: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
    pub fn is_empty(&self) -> bool {
        self.node(NodeId::ROOT).children.is_empty()
    }
    /// total sample mass (root count)
    pub fn total(&self) -> Weight {
        self.node(NodeId::ROOT).count
    }
    /// number of distinct root-to-leaf paths (sum of terminal links)
    pub fn paths(&self) -> usize {
        self.last.iter().map(|&t| self.node(t).links).sum()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[usize::from(id)]
    }
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[usize::from(id)]
    }
    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub(crate) fn last(&self) -> &[NodeId] {
        &self.last
    }

    /// child of `at` holding the given grid cell, by linear scan
    fn child(&self, at: NodeId, cell: Cell) -> Option<NodeId> {
        self.node(at)
            .children
            .iter()
            .copied()
            .find(|&kid| self.node(kid).index == cell)
    }

    /// structural insert: dedups identical paths, leaves counts to `finalize`
    pub fn observe(&mut self, path: &[Cell]) -> Result<(), Error> {
        self.thread(path).map(|_| ())
    }

    /// weighted insert: every node on the chain gains `weight`, and the
    /// terminal link on the last-layer parent carries the branch's share
    pub fn insert(&mut self, path: &[Cell], weight: Weight) -> Result<(), Error> {
        let chain = self.thread(path)?;
        for &id in &chain {
            self.node_mut(id).count += weight;
        }
        if let [.., parent, term] = chain[..] {
            let pos = self
                .node(parent)
                .children
                .iter()
                .position(|&kid| kid == term)
                .expect("linked terminal");
            self.node_mut(parent).masses[pos] += weight;
        }
        Ok(())
    }

    /// root-to-terminal chain for `path`, growing the arena as needed
    fn thread(&mut self, path: &[Cell]) -> Result<Vec<NodeId>, Error> {
        if path.len() != self.dimension {
            return Err(Error::ShapeMismatch {
                expect: self.dimension,
                got: path.len(),
            });
        }
        let mut chain = Vec::with_capacity(path.len() + 1);
        let mut at = NodeId::ROOT;
        chain.push(at);
        let Some((&leaf, prefix)) = path.split_last() else {
            return Ok(chain);
        };
        for &cell in prefix {
            at = match self.child(at, cell) {
                Some(kid) => kid,
                None => {
                    let kid = NodeId::from(self.nodes.len());
                    self.nodes.push(Node::new(cell));
                    self.node_mut(at).children.push(kid);
                    kid
                }
            };
            chain.push(at);
        }
        let term = match self
            .last
            .iter()
            .copied()
            .find(|&t| self.node(t).index == leaf)
        {
            Some(t) => t,
            None => {
                let t = NodeId::from(self.nodes.len());
                self.nodes.push(Node::new(leaf));
                self.last.push(t);
                t
            }
        };
        if !self.node(at).children.contains(&term) {
            self.node_mut(at).children.push(term);
            self.node_mut(at).masses.push(0);
            self.node_mut(term).links += 1;
        }
        chain.push(term);
        Ok(chain)
    }

    /// exact membership of a full path, prefix membership of a shorter one
    pub fn search(&self, path: &[Cell]) -> bool {
        let mut at = NodeId::ROOT;
        for &cell in path {
            match self.child(at, cell) {
                Some(kid) => at = kid,
                None => return false,
            }
        }
        true
    }

    /// Fill empty counts: zero-count terminals get 1, zero-count internal
    /// nodes become the sum over their children. An observe-built trie
    /// ends up counting distinct completions; a weighted trie already
    /// carries its mass and passes through untouched. Idempotent.
    pub fn finalize(&mut self) {
        let total = self.fill(NodeId::ROOT);
        log::debug!(
            "finalized trie: {} nodes, {} terminals, mass {}",
            self.nodes.len(),
            self.last.len(),
            total,
        );
    }

    fn fill(&mut self, at: NodeId) -> Weight {
        if self.node(at).count != 0 {
            return self.node(at).count;
        }
        if at != NodeId::ROOT && self.node(at).is_terminal() {
            self.node_mut(at).count = 1;
            return 1;
        }
        let mut sum = 0;
        if self.node(at).masses.is_empty() {
            for i in 0..self.node(at).children.len() {
                let kid = self.node(at).children[i];
                sum += self.fill(kid);
            }
        } else {
            // last-layer parent: one completion per terminal link
            for i in 0..self.node(at).masses.len() {
                if self.node(at).masses[i] == 0 {
                    self.node_mut(at).masses[i] = 1;
                }
                sum += self.node(at).masses[i];
                let kid = self.node(at).children[i];
                self.fill(kid);
            }
        }
        self.node_mut(at).count = sum;
        sum
    }

    /// Remove and return the rightmost path, decrementing counts along the
    /// way. Emptied ancestors are pruned; a terminal leaves the registry
    /// when its last parent link disappears. Arena slots are not reclaimed.
    pub fn pop(&mut self) -> Option<Vec<Cell>> {
        if self.is_empty() {
            return None;
        }
        let mut chain = Vec::with_capacity(self.dimension + 1);
        let mut path = Vec::with_capacity(self.dimension);
        let mut at = NodeId::ROOT;
        chain.push(at);
        for _ in 0..self.dimension {
            let drained = self.node(at).count.saturating_sub(1);
            self.node_mut(at).count = drained;
            let kid = *self.node(at).children.last().expect("resident child");
            path.push(self.node(kid).index);
            chain.push(kid);
            at = kid;
        }
        let term = at;
        self.node_mut(chain[self.dimension - 1]).children.pop();
        self.node_mut(chain[self.dimension - 1]).masses.pop();
        self.node_mut(term).links -= 1;
        if self.node(term).links == 0 {
            self.last.retain(|&t| t != term);
        }
        let mut k = self.dimension - 1;
        while k > 0 && self.node(chain[k]).children.is_empty() {
            self.node_mut(chain[k - 1]).children.pop();
            k -= 1;
        }
        Some(path)
    }

    /// pop until empty
    pub fn drain(&mut self) {
        while self.pop().is_some() {}
    }

    /// order every node's children and the terminal registry by cell,
    /// carrying link masses along with their links
    pub(crate) fn sort(&mut self) {
        for slot in 0..self.nodes.len() {
            let kids = std::mem::take(&mut self.nodes[slot].children);
            let masses = std::mem::take(&mut self.nodes[slot].masses);
            if masses.is_empty() {
                let mut kids = kids;
                kids.sort_by_key(|&kid| self.node(kid).index);
                self.nodes[slot].children = kids;
            } else {
                let mut linked = kids.into_iter().zip(masses).collect::<Vec<_>>();
                linked.sort_by_key(|&(kid, _)| self.node(kid).index);
                let (kids, masses): (Vec<NodeId>, Vec<Weight>) = linked.into_iter().unzip();
                self.nodes[slot].children = kids;
                self.nodes[slot].masses = masses;
            }
        }
        let mut last = std::mem::take(&mut self.last);
        last.sort_by_key(|&t| self.node(t).index);
        self.last = last;
    }

    /// largest occupied cell on the given axis
    pub fn extent(&self, axis: usize) -> Option<Cell> {
        self.reach(NodeId::ROOT, 0, axis)
    }

    fn reach(&self, at: NodeId, depth: usize, axis: usize) -> Option<Cell> {
        let kids = &self.node(at).children;
        if depth == axis {
            kids.iter().map(|&kid| self.node(kid).index).max()
        } else {
            kids.iter()
                .filter_map(|&kid| self.reach(kid, depth + 1, axis))
                .max()
        }
    }
}

impl Sample for Trie {
    type Cursor = NodeId;
    fn root(&self) -> NodeId {
        NodeId::ROOT
    }
    fn layer(&self, at: NodeId) -> impl Cohort {
        let node = self.node(at);
        let pairs = if node.masses.is_empty() {
            node.children
                .iter()
                .map(|&kid| (self.node(kid).index, self.node(kid).count))
                .collect::<Vec<_>>()
        } else {
            node.children
                .iter()
                .zip(node.masses.iter())
                .map(|(&kid, &mass)| (self.node(kid).index, mass))
                .collect::<Vec<_>>()
        };
        Row::from(pairs)
    }
    fn descend(&self, at: NodeId, pos: usize) -> NodeId {
        self.node(at).children[pos]
    }
    fn dimension(&self) -> usize {
        self.dimension
    }
    fn total(&self) -> Weight {
        self.total()
    }
    fn extent(&self, axis: usize) -> Option<Cell> {
        self.extent(axis)
    }
}
