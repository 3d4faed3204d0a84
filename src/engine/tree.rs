//! Combination tree.
//!
//! Candidate sets are folded left to right into a tree whose root-to-leaf
//! paths are the interpretations:
//!
//! ```text
//! groups:     "350"            "5"
//! sets:  {350,30050,35,3005}   {5}
//!
//! root ─┬─ 350   ── 5     -> 3505
//!       ├─ 30050 ── 5     -> 300505
//!       ├─ 35    ── 5     -> 355
//!       └─ 3005  ── 5     -> 30055
//! ```
//!
//! Nodes live in an arena (`Vec<TreeNode>`) and refer to children by index.
//! The frontier is the list of current leaves.

use crate::{CandidateSet, Interpretations};

#[derive(Debug)]
struct TreeNode {
    label: Option<String>,
    children: Vec<usize>,
}

#[derive(Debug)]
pub(crate) struct CombinationTree {
    nodes: Vec<TreeNode>,
    frontier: Vec<usize>,
}

impl CombinationTree {
    /// A tree holding only the unlabeled root.
    pub fn new() -> Self {
        CombinationTree { nodes: vec![TreeNode { label: None, children: Vec::new() }], frontier: vec![0] }
    }

    /// Attach one child per candidate to every current leaf. An empty set
    /// leaves the frontier untouched.
    pub fn grow(&mut self, candidates: &CandidateSet) {
        if candidates.is_empty() {
            return;
        }

        let mut next = Vec::with_capacity(self.frontier.len() * candidates.len());
        for &leaf in &self.frontier {
            for candidate in candidates {
                let id = self.nodes.len();
                self.nodes.push(TreeNode { label: Some(candidate.clone()), children: Vec::new() });
                self.nodes[leaf].children.push(id);
                next.push(id);
            }
        }
        self.frontier = next;
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Concatenate labels along every root-to-leaf path.
    ///
    /// A tree that was never grown yields nothing.
    pub fn interpretations(&self) -> Interpretations {
        let mut out = Interpretations::new();

        // Stack-based DFS; each entry carries the prefix built so far.
        let mut stack: Vec<(usize, String)> = vec![(0, String::new())];
        while let Some((id, prefix)) = stack.pop() {
            let node = &self.nodes[id];
            let prefix = match &node.label {
                Some(label) => prefix + label,
                None => prefix,
            };

            if node.children.is_empty() {
                if node.label.is_some() {
                    out.insert(prefix);
                }
                continue;
            }

            for &child in &node.children {
                stack.push((child, prefix.clone()));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> CandidateSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_tree_has_no_interpretations() {
        let tree = CombinationTree::new();
        assert!(tree.interpretations().is_empty());
    }

    #[test]
    fn builds_cross_product_in_group_order() {
        let mut tree = CombinationTree::new();
        tree.grow(&set(&["2"]));
        tree.grow(&set(&["10", "1"]));
        tree.grow(&set(&["5", "50"]));

        assert_eq!(tree.frontier_len(), 4);
        let got: Vec<String> = tree.interpretations().into_iter().collect();
        assert_eq!(got, vec!["2105", "21050", "215", "2150"]);
    }

    #[test]
    fn empty_candidate_set_is_a_no_op() {
        let mut tree = CombinationTree::new();
        tree.grow(&set(&["3"]));
        tree.grow(&CandidateSet::new());
        tree.grow(&set(&["4"]));
        assert_eq!(tree.interpretations().into_iter().collect::<Vec<_>>(), vec!["34"]);
    }

    #[test]
    fn duplicate_paths_collapse() {
        let mut tree = CombinationTree::new();
        tree.grow(&set(&["1", "10"]));
        tree.grow(&set(&["05", "5"]));
        // "1"+"05" and "10"+"5" both read "105".
        let got: Vec<String> = tree.interpretations().into_iter().collect();
        assert_eq!(got, vec!["1005", "105", "15"]);
    }
}
