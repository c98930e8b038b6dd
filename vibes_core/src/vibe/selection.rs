use rand::Rng;

use crate::collections::dto::CollectionEntry;
use crate::helpers::dto::Nft;

/// Picks a displayable NFT from the fetched entries: a uniformly random start
/// index, a forward scan from there to the end of the list, and only if that
/// finds nothing, a second forward scan from index 0. The second phase is a
/// fallback, not a circular continuation, so it runs over the whole list.
pub fn select_nft<R: Rng + ?Sized>(entries: &[CollectionEntry], rng: &mut R) -> Option<Nft> {
    if entries.is_empty() {
        return None;
    }
    let start = rng.gen_range(0..entries.len());
    scan_from(entries, start).or_else(|| scan_from(entries, 0))
}

fn scan_from(entries: &[CollectionEntry], start: usize) -> Option<Nft> {
    entries[start..].iter().find_map(CollectionEntry::usable_nft)
}
