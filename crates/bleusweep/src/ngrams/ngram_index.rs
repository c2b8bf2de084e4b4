//! # N-Gram Prefix Tree

use crate::{
    options::BleuOptions,
    types::{BSHashMap, NGramCount, WordType, hash_map_new},
};

/// A node of an [`NGramIndex`].
///
/// A node at depth ``d`` stands for the unique ``d``-gram spelled by the path
/// from the root; its `count` is the number of occurrences of that n-gram in
/// the phrase the index was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct NGramNode<W: WordType> {
    count: NGramCount,
    children: BSHashMap<W, NGramNode<W>>,
}

impl<W: WordType> Default for NGramNode<W> {
    fn default() -> Self {
        Self {
            count: 0,
            children: hash_map_new(),
        }
    }
}

impl<W: WordType> NGramNode<W> {
    /// The number of occurrences of this node's n-gram.
    pub fn count(&self) -> NGramCount {
        self.count
    }

    /// Look up the child extending this n-gram by `word`.
    pub fn child(
        &self,
        word: &W,
    ) -> Option<&NGramNode<W>> {
        self.children.get(word)
    }

    /// Iterate over ``(word, child)`` edges, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (&W, &NGramNode<W>)> {
        self.children.iter()
    }

    /// Is this node a leaf?
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A bounded-depth prefix tree of all n-grams of a phrase.
///
/// Every contiguous sub-phrase of length ``1..=min(order, len)`` is a path
/// from the root. The tree is never mutated after [`NGramIndex::build`], so a
/// reference index can be shared by any number of candidate intersections.
#[derive(Debug, Clone, PartialEq)]
pub struct NGramIndex<W: WordType> {
    order: usize,
    root: NGramNode<W>,
}

impl<W: WordType> NGramIndex<W> {
    /// Build the index of `phrase`.
    ///
    /// ## Arguments
    /// * `phrase` - the source phrase; may be empty.
    /// * `options` - supplies the maximum depth (the BLEU order).
    pub fn build(
        phrase: &[W],
        options: BleuOptions,
    ) -> Self {
        let mut index = Self {
            order: options.order(),
            root: NGramNode::default(),
        };
        for start in 0..phrase.len() {
            index.insert_ngrams_at(phrase, start);
        }
        index
    }

    /// Insert the n-grams of orders ``1..=order`` starting at `start`.
    ///
    /// ## Panics
    /// Panics if `start` is past the end of `phrase`.
    fn insert_ngrams_at(
        &mut self,
        phrase: &[W],
        start: usize,
    ) {
        assert!(
            start < phrase.len(),
            "n-gram start {start} past phrase end {}",
            phrase.len()
        );
        let end = usize::min(start + self.order, phrase.len());

        let mut node = &mut self.root;
        for word in &phrase[start..end] {
            node = node.children.entry(*word).or_default();
            node.count += 1;
        }
    }

    /// The maximum depth of this index.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The root node; it has no word and a count of 0.
    pub fn root(&self) -> &NGramNode<W> {
        &self.root
    }

    /// Was this index built from an empty phrase?
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// The number of occurrences of `ngram`.
    ///
    /// Returns 0 for the empty n-gram and for n-grams longer than the order.
    pub fn count_of(
        &self,
        ngram: &[W],
    ) -> NGramCount {
        if ngram.is_empty() {
            return 0;
        }
        let mut node = &self.root;
        for word in ngram {
            match node.child(word) {
                Some(child) => node = child,
                None => return 0,
            }
        }
        node.count
    }

    /// The deepest level reached; ``min(order, len)`` of the source phrase.
    pub fn max_depth(&self) -> usize {
        fn depth_below<W: WordType>(node: &NGramNode<W>) -> usize {
            node.children
                .values()
                .map(|child| 1 + depth_below(child))
                .max()
                .unwrap_or(0)
        }
        depth_below(&self.root)
    }

    /// The total number of n-grams of each order, ``totals[n - 1]``.
    ///
    /// For a phrase of length ``len`` this is ``max(len - n + 1, 0)``.
    pub fn ngram_totals(&self) -> Vec<NGramCount> {
        fn visit<W: WordType>(
            node: &NGramNode<W>,
            depth: usize,
            totals: &mut [NGramCount],
        ) {
            for child in node.children.values() {
                totals[depth] += child.count;
                visit(child, depth + 1, totals);
            }
        }
        let mut totals = vec![0; self.order];
        visit(&self.root, 0, &mut totals);
        totals
    }

    /// Clipped n-gram match counts of this (hypothesis) index against `reference`.
    ///
    /// See [`intersect`].
    pub fn intersect(
        &self,
        reference: &NGramIndex<W>,
    ) -> Vec<NGramCount> {
        intersect(self, reference)
    }
}

/// Clipped n-gram match counts of `hypothesis` against `reference`.
///
/// ``counts[n - 1]`` is the sum over all hypothesis n-grams ``g`` of
/// ``min(hyp_count(g), ref_count(g))``. The walk only descends where both
/// trees share a branch.
///
/// ## Panics
/// Panics if the two indices were built with different orders.
pub fn intersect<W: WordType>(
    hypothesis: &NGramIndex<W>,
    reference: &NGramIndex<W>,
) -> Vec<NGramCount> {
    assert_eq!(
        hypothesis.order, reference.order,
        "cannot intersect n-gram indices of different orders"
    );
    let mut counts = vec![0; hypothesis.order];
    intersect_nodes(&hypothesis.root, &reference.root, 0, &mut counts);
    counts
}

fn intersect_nodes<W: WordType>(
    hypothesis: &NGramNode<W>,
    reference: &NGramNode<W>,
    depth: usize,
    counts: &mut [NGramCount],
) {
    for (word, hyp_branch) in hypothesis.children.iter() {
        let Some(ref_branch) = reference.children.get(word) else {
            continue;
        };

        counts[depth] += NGramCount::min(hyp_branch.count, ref_branch.count);

        if depth + 1 < counts.len() {
            intersect_nodes(hyp_branch, ref_branch, depth + 1, counts);
        }
    }
}
