//! Element inference for abilities authored without one.

use combat_core::{Ability, Element};

/// Fills in `element` from name keywords for every ability that lacks one.
///
/// Returns how many abilities were updated.
pub(crate) fn infer_elements<'a>(abilities: impl IntoIterator<Item = &'a mut Ability>) -> usize {
    let mut updated = 0;
    for ability in abilities {
        if ability.element.is_none() {
            let element = Element::from_keywords(&ability.name);
            tracing::trace!(ability = %ability.name, %element, "inferred element");
            ability.element = Some(element);
            updated += 1;
        }
    }
    updated
}
