//! C3 merge of ordered ancestor sequences
//!
//! Each input sequence must be duplicate-free. The output contains every
//! element of every input exactly once and preserves the relative order of
//! any two elements that share an input sequence.

use mro_core::prelude::*;
use std::collections::VecDeque;
use tracing::{trace, warn};

/// Merge sequences by repeatedly taking the first good head
///
/// Sequences are scanned left to right; the first head that does not appear
/// in the tail of any remaining sequence is emitted and removed from every
/// sequence it currently heads. Empty sequences are skipped.
///
/// # Errors
///
/// Returns `MroError::InconsistentHierarchy` carrying the blocked heads when
/// no good head exists.
pub fn merge<S>(sequences: &[S]) -> Result<Vec<TypeId>>
where
    S: AsRef<[TypeId]>,
{
    let mut lists: Vec<VecDeque<&TypeId>> = sequences
        .iter()
        .map(|seq| seq.as_ref().iter().collect::<VecDeque<_>>())
        .filter(|list| !list.is_empty())
        .collect();
    let mut result = Vec::new();

    while !lists.is_empty() {
        let Some(selected) = good_head(&lists) else {
            let blocking = blocked_heads(&lists);
            warn!(
                "C3 merge found no good head among {} remaining sequences",
                lists.len()
            );
            return Err(MroError::inconsistent(blocking));
        };

        trace!("C3 merge selected '{selected}'");
        result.push(selected.clone());

        for list in &mut lists {
            if list.front() == Some(&selected) {
                list.pop_front();
            }
        }
        lists.retain(|list| !list.is_empty());
    }

    Ok(result)
}

fn good_head<'a>(lists: &[VecDeque<&'a TypeId>]) -> Option<&'a TypeId> {
    lists
        .iter()
        .filter_map(|list| list.front().copied())
        .find(|head| !in_any_tail(lists, head))
}

fn in_any_tail(lists: &[VecDeque<&TypeId>], candidate: &TypeId) -> bool {
    lists
        .iter()
        .any(|list| list.iter().skip(1).any(|id| *id == candidate))
}

fn blocked_heads(lists: &[VecDeque<&TypeId>]) -> Vec<TypeId> {
    let mut heads: Vec<TypeId> = Vec::new();
    for head in lists.iter().filter_map(|list| list.front()) {
        if !heads.iter().any(|seen| seen == *head) {
            heads.push((*head).clone());
        }
    }
    heads
}
