// =============================================================================
// VALIDATE — Vérification de l'invariant d'une relation
// =============================================================================
//
// L'invariant unique d'une relation R ⊆ S × T :
//   pour toute paire (x, y) de R, x ∈ domaine ET y ∈ codomaine
//
// Il est vérifié UNE fois, à la construction. Comme une relation n'est
// jamais mutée ensuite, il n'y a jamais besoin de le revérifier.
//
// Ce module rapporte TOUTES les paires fautives (utile pour diagnostiquer
// une donnée d'entrée), le constructeur n'en garde que la première.
//
// =============================================================================

use std::collections::HashSet;

use super::element::{render, Element};
use super::error::{InvalidSide, RelationError};

/// Classe une paire par rapport aux deux univers.
/// Retourne `None` si la paire respecte l'invariant.
pub fn offending_side<S: Element, T: Element>(
    domain: &HashSet<S>,
    codomain: &HashSet<T>,
    x: &S,
    y: &T,
) -> Option<InvalidSide> {
    match (domain.contains(x), codomain.contains(y)) {
        (true, true) => None,
        (false, true) => Some(InvalidSide::Domain),
        (true, false) => Some(InvalidSide::Codomain),
        (false, false) => Some(InvalidSide::Both),
    }
}

/// Vérifie que chaque paire tombe dans domaine × codomaine.
///
/// Conditions :
/// - La composante gauche appartient au domaine déclaré
/// - La composante droite appartient au codomaine déclaré
pub fn validate_pairs<S: Element, T: Element>(
    domain: &HashSet<S>,
    codomain: &HashSet<T>,
    pairs: &HashSet<(S, T)>,
) -> Result<(), Vec<RelationError>> {
    let errors: Vec<RelationError> = pairs
        .iter()
        .filter_map(|(x, y)| {
            offending_side(domain, codomain, x, y).map(|side| RelationError::InvalidRelation {
                left: render(x),
                right: render(y),
                side,
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
