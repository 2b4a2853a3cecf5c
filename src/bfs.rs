//! This module implements a breadth-first search in the style of
//! [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
//! Discovered nodes are stored in an insertion-ordered map which doubles as the visited set and the
//! parent table, so the frontier only needs to hold map indices.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use std::collections::VecDeque;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the start node.
const NO_PARENT: usize = usize::MAX;

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, &parent)| {
            *i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until a node satisfying `success` is dequeued and returns the nodes from
/// `start` to that node. Successors are visited in the order `successors` yields them, which
/// decides between equally short paths. Returns [None] once every reachable node is exhausted.
pub fn bfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut to_see: VecDeque<usize> = VecDeque::new();
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), NO_PARENT);
    to_see.push_back(0);
    while let Some(index) = to_see.pop_front() {
        let successors = {
            let (node, _) = parents.get_index(index)?;
            if success(node) {
                return Some(reverse_path(&parents, index));
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                to_see.push_back(e.index());
                e.insert(index);
            }
        }
    }
    None
}

/// Like [bfs], but also returns how many nodes were dequeued.
pub fn bfs_explored<N, FN, IN, FS>(
    start: &N,
    successors: FN,
    mut success: FS,
) -> (Option<Vec<N>>, usize)
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut explored = 0;
    let path = bfs(start, successors, |n| {
        explored += 1;
        success(n)
    });
    (path, explored)
}
