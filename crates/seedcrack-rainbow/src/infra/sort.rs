//! In-place table sort
//!
//! Quicksort over the memory-mapped chain array, keyed by endpoint. The
//! comparisons are trivial next to the page faults, so no attempt is made to
//! be clever about pivot selection: first element pivot, single-direction
//! partition, recurse both sides. Recursion depth depends on input order;
//! endpoints of freshly generated tables are effectively random.

use crate::domain::chain::Chain;

/// Sort chains by endpoint, ascending. Equal endpoints stay adjacent in an
/// unspecified relative order.
pub fn sort_chains(table: &mut [Chain]) {
    if table.len() < 2 {
        return;
    }

    let pivot = table[0].end;
    let mut l = 1;
    let mut r = table.len();
    while l < r {
        if table[l].end <= pivot {
            l += 1;
        } else {
            r -= 1;
            table.swap(l, r);
        }
    }
    // table[1..l] <= pivot < table[l..]; move the pivot between them.
    l -= 1;
    table.swap(0, l);

    let (left, rest) = table.split_at_mut(l);
    sort_chains(left);
    sort_chains(&mut rest[1..]);
}
