//! Complex-group expansion.
//!
//! A multi-digit run whose value is above the language threshold can be heard
//! as a sequence of smaller spoken numbers. "305" said as "three hundred five"
//! is also "three hundred" followed by "five", i.e. `3005`.
//!
//! For every split point `i` (right to left) the head keeps its magnitude by
//! padding with zeros and the tail is expanded recursively:
//!
//! ```text
//! "350"  i=2: head "350"  tail "0"   -> skipped (zeros)
//!        i=1: head "300"  tail "50"  -> expand("50") = {"50"} -> "30050"
//! result: {"350", "30050"}
//! ```
//!
//! Results depend only on `(text, threshold)`, and the threshold is fixed for
//! an [`Expander`], so the memo is keyed by text alone.

use super::shape::{GroupShape, exceeds, pad_zeros};
use crate::CandidateSet;
use std::collections::HashMap;
use std::rc::Rc;

/// Memoizing expander for one threshold. Lives for a single recognition call.
#[derive(Debug)]
pub(crate) struct Expander {
    threshold: u64,
    memo: HashMap<String, Rc<CandidateSet>>,
}

impl Expander {
    pub fn new(threshold: u64) -> Self {
        Expander { threshold, memo: HashMap::new() }
    }

    /// All readings of `text`; always contains `text` itself.
    pub fn expand(&mut self, text: &str) -> Rc<CandidateSet> {
        if let Some(hit) = self.memo.get(text) {
            return Rc::clone(hit);
        }

        let items = Rc::new(self.expand_uncached(text));
        self.memo.insert(text.to_string(), Rc::clone(&items));
        items
    }

    fn expand_uncached(&mut self, text: &str) -> CandidateSet {
        let mut items = CandidateSet::new();
        items.insert(text.to_string());

        if !exceeds(text, self.threshold) {
            return items;
        }

        let len = text.len();
        for i in (1..len).rev() {
            let head = pad_zeros(&text[..i], len - i);
            let tail = &text[i..];

            if GroupShape::scan(tail).is_unreadable_tail() {
                continue;
            }

            if tail.len() == 1 {
                items.insert(format!("{head}{tail}"));
            } else {
                for sub in self.expand(tail).iter() {
                    items.insert(format!("{head}{sub}"));
                }
            }
        }

        items
    }

    #[cfg(test)]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}
