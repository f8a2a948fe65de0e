use tracing::debug;

use crate::data::EvolutionChain;
use crate::data::wire::ApiChainLink;

/// Walk an evolution tree from its root, taking the first successor at each stage.
///
/// Branching families are cut down to one line; the result's `truncated`
/// flag records that it happened.
pub fn walk_first_branch(root: &ApiChainLink) -> EvolutionChain {
    let mut chain = EvolutionChain::default();
    let mut current = Some(root);

    while let Some(link) = current {
        chain.names.push(link.species.name.clone());
        if link.evolves_to.len() > 1 {
            debug!(
                species = %link.species.name,
                branches = link.evolves_to.len(),
                "following first evolution branch only"
            );
            chain.truncated = true;
        }
        current = link.evolves_to.first();
    }

    chain
}
