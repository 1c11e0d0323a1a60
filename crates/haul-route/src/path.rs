//! Path reconstruction from a completed [`SearchTree`].
//!
//! The walk is iterative and keeps a visited set over slots, so it runs at
//! most `location_count` steps even if the predecessor links were somehow
//! cyclic.

use haul_core::LocationId;

use crate::search::SearchTree;
use crate::{Route, RouteError, RouteResult};

/// Identifiers from `target` back to the tree's source, in that
/// (target → source) order.
///
/// An unreachable target is an error, never a one-element path.
pub fn reverse_chain(tree: &SearchTree<'_>, target: &str) -> RouteResult<Vec<LocationId>> {
    let network = tree.network();
    let target_slot = network.slot(target)?;

    if tree.dist_at(target_slot).is_infinite() {
        return Err(RouteError::Unreachable {
            from: tree.source().clone(),
            to:   network.id_at(target_slot).clone(),
        });
    }

    let mut seen = vec![false; network.location_count()];
    let mut chain = vec![network.id_at(target_slot).clone()];
    let mut cur = target_slot;
    seen[cur.index()] = true;

    while let Some(prev) = tree.prev_at(cur) {
        if seen[prev.index()] {
            return Err(RouteError::CorruptChain {
                target: network.id_at(target_slot).clone(),
                at:     network.id_at(prev).clone(),
            });
        }
        seen[prev.index()] = true;
        chain.push(network.id_at(prev).clone());
        cur = prev;
    }

    if cur != tree.source_slot() {
        return Err(RouteError::CorruptChain {
            target: network.id_at(target_slot).clone(),
            at:     network.id_at(cur).clone(),
        });
    }

    Ok(chain)
}

/// Cheapest route from the tree's source to `target`, in travel order.
pub fn reconstruct(tree: &SearchTree<'_>, target: &str) -> RouteResult<Route> {
    let mut locations = reverse_chain(tree, target)?;
    locations.reverse();
    let distance = tree.distance(target)?;
    Ok(Route { locations, distance })
}
