// =============================================================================
// CLASSIFY — Prédicats de classification d'une relation
// =============================================================================
//
// Ces propriétés sont DÉRIVÉES, jamais stockées : elles sont recalculées à
// la demande à partir des paires, du domaine et du codomaine. Comme la
// relation est immuable, elles n'ont jamais besoin d'être invalidées.
//
//   fonction   : chaque x défini a UNE seule image
//                  (x,y) ∈ R ∧ (x,z) ∈ R ⟹ y = z
//   injective  : (fonction) deux x distincts n'ont jamais la même image
//                  (x,z) ∈ R ∧ (y,z) ∈ R ⟹ x = y
//   surjective : (fonction) chaque élément du codomaine est atteint
//   totale     : chaque élément du domaine est défini
//                (indépendant de la fonctionnalité !)
//   partielle  : non totale
//   bijective  : (fonction) injective ET surjective
//
// Les prédicats qui n'ont de sens que pour une fonction échouent avec
// `RelationError::NotAFunction` plutôt que de rendre un booléen dégradé.
//
// =============================================================================

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::element::Element;
use super::error::{RelationError, Result};
use super::relation::Relation;

impl<S: Element, T: Element> Relation<S, T> {
    /// Chaque composante gauche apparaît avec au plus une composante droite.
    pub fn is_function(&self) -> bool {
        let mut seen: HashMap<&S, &T> = HashMap::new();
        for (x, y) in self.pairs() {
            if let Some(previous) = seen.insert(x, y) {
                if previous != y {
                    return false;
                }
            }
        }
        true
    }

    fn require_function(&self, operation: &'static str) -> Result<()> {
        if self.is_function() {
            Ok(())
        } else {
            debug!(operation, "prédicat réservé aux fonctions");
            Err(RelationError::NotAFunction { operation })
        }
    }

    /// Fonction dont deux antécédents distincts n'ont jamais la même image.
    pub fn is_injective(&self) -> Result<bool> {
        self.require_function("is_injective")?;
        let mut seen: HashMap<&T, &S> = HashMap::new();
        for (x, y) in self.pairs() {
            if let Some(previous) = seen.insert(y, x) {
                if previous != x {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Fonction dont l'ensemble des images effectives est exactement le codomaine.
    pub fn is_surjective(&self) -> Result<bool> {
        self.require_function("is_surjective")?;
        let range: HashSet<&T> = self.pairs().iter().map(|(_, y)| y).collect();
        Ok(range.len() == self.codomain().len())
    }

    /// Chaque élément du domaine est défini. Ne suppose PAS la fonctionnalité.
    pub fn is_total(&self) -> bool {
        let defined: HashSet<&S> = self.pairs().iter().map(|(x, _)| x).collect();
        defined.len() == self.domain().len()
    }

    pub fn is_partial(&self) -> bool {
        !self.is_total()
    }

    /// Fonction injective et surjective.
    pub fn is_bijective(&self) -> Result<bool> {
        Ok(self.is_injective()? && self.is_surjective()?)
    }
}

impl<S: Element> Relation<S, S> {
    /// Domaine = codomaine et les paires forment exactement la diagonale.
    pub fn is_identity(&self) -> bool {
        self.domain() == self.codomain()
            && self.len() == self.domain().len()
            && self.pairs().iter().all(|(x, y)| x == y)
    }
}
