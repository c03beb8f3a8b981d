//! Clipboard type selection

use super::content_type::ContentType;

/// Pick the representation to extract from a clipboard entry.
///
/// Returns the offered type ranked highest in `allowed`. When none of the
/// offered types is allowed, the first offered type is returned unchanged.
/// `preferred` is already folded into `allowed` by [`super::allowed_types`];
/// it is only consulted here to log the outcome.
///
/// Returns `None` only when `offered` is empty.
pub fn select_type(
    offered: &[ContentType],
    allowed: &[ContentType],
    preferred: Option<&ContentType>,
) -> Option<ContentType> {
    let best = offered
        .iter()
        .filter_map(|ct| allowed.iter().position(|a| a == ct).map(|rank| (rank, ct)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, ct)| ct);

    let chosen = best.or_else(|| offered.first())?;

    if let Some(preferred) = preferred {
        if preferred != chosen && offered.contains(preferred) {
            log::debug!("preferred type {} offered but not allowed", preferred);
        }
    }

    Some(chosen.clone())
}
