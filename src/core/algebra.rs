// =============================================================================
// ALGEBRA — Relations dérivées : inverse, composition, identité
// =============================================================================
//
// Aucune de ces opérations ne modifie ses opérandes : elles allouent et
// retournent une relation NEUVE. On peut donc inverser ou composer une
// relation pendant que d'autres threads l'interrogent.
//
// INVERSE : R⁻¹ ⊆ T × S
//   domaine(R⁻¹) = codomaine(R), codomaine(R⁻¹) = domaine(R)
//   (y, x) ∈ R⁻¹  ⟺  (x, y) ∈ R
//   Toujours défini, même si R n'est pas une fonction.
//
// COMPOSITION : R ; Q ⊆ S × U   (R ⊆ S × T, Q ⊆ T × U)
//   (s, u) ∈ R ; Q  ⟺  ∃ t : (s, t) ∈ R ∧ (t, u) ∈ Q
//
//   Précondition STRICTE : domaine(Q) = codomaine(R). Pas une simple
//   inclusion : les deux relations partagent exactement le même univers
//   intermédiaire.
//
//   Si l'une des deux relations est multivaluée, la composition "éventaille" :
//
//       R :  1 ──> a          Q :  a ──> x
//            1 ──> b               b ──> y
//
//       R ; Q :  1 ──> x, 1 ──> y
//
// =============================================================================

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use super::element::Element;
use super::error::{RelationError, Result};
use super::relation::Relation;

impl<S: Element, T: Element> Relation<S, T> {
    /// La relation inverse, sur les univers échangés.
    pub fn inverse(&self) -> Relation<T, S> {
        let pairs: HashSet<(T, S)> = self
            .pairs()
            .iter()
            .map(|(x, y)| (y.clone(), x.clone()))
            .collect();
        trace!(pairs = pairs.len(), "inverse");
        Relation::from_parts(self.codomain().clone(), self.domain().clone(), pairs)
    }

    /// Composition relationnelle `self ; other` (d'abord self, puis other).
    ///
    /// Échoue avec `RelationError::CodomainMismatch` si le domaine de `other`
    /// n'est pas exactement le codomaine de `self`.
    pub fn compose<R: Element>(&self, other: &Relation<T, R>) -> Result<Relation<S, R>> {
        if other.domain() != self.codomain() {
            debug!(
                codomain = self.codomain().len(),
                other_domain = other.domain().len(),
                "composition sur des univers intermédiaires différents"
            );
            return Err(RelationError::CodomainMismatch {
                codomain: self.codomain().len(),
                other_domain: other.domain().len(),
            });
        }

        // Index de `other` : t → [r | (t, r) ∈ other]
        let mut successors: HashMap<&T, Vec<&R>> = HashMap::new();
        for (t, r) in other.pairs() {
            successors.entry(t).or_default().push(r);
        }

        let mut pairs: HashSet<(S, R)> = HashSet::new();
        for (s, t) in self.pairs() {
            if let Some(targets) = successors.get(t) {
                for r in targets {
                    pairs.insert((s.clone(), (*r).clone()));
                }
            }
        }

        trace!(pairs = pairs.len(), "composition");
        Ok(Relation::from_parts(
            self.domain().clone(),
            other.codomain().clone(),
            pairs,
        ))
    }
}

impl<S: Element> Relation<S, S> {
    /// Relation identité sur un ensemble : { (x, x) | x ∈ set }.
    pub fn identity(set: HashSet<S>) -> Self {
        let pairs = set.iter().map(|x| (x.clone(), x.clone())).collect();
        Relation::from_parts(set.clone(), set, pairs)
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compose_simple() {
        // Scénario 5
        let r1 = Relation::from_pairs([1], [2], [(1, 2)]).unwrap();
        let r2 = Relation::from_pairs([2], [3], [(2, 3)]).unwrap();
        let c = r1.compose(&r2).unwrap();
        assert_eq!(c.domain(), &HashSet::from([1]));
        assert_eq!(c.codomain(), &HashSet::from([3]));
        assert_eq!(c.pairs(), &HashSet::from([(1, 3)]));
    }

    #[test]
    fn test_compose_fans_out() {
        let r = Relation::from_pairs([1], ["a", "b"], [(1, "a"), (1, "b")]).unwrap();
        let q = Relation::from_pairs(["a", "b"], ['x', 'y'], [("a", 'x'), ("b", 'y')]).unwrap();
        let c = r.compose(&q).unwrap();
        assert_eq!(c.pairs(), &HashSet::from([(1, 'x'), (1, 'y')]));
        assert!(!c.is_function());
    }

    #[test]
    fn test_compose_requires_exact_intermediate_universe() {
        let r1 = Relation::from_pairs([1], [2], [(1, 2)]).unwrap();
        // {2} ⊂ {2, 4} mais l'égalité stricte est exigée
        let r2 = Relation::from_pairs([2, 4], [3], [(2, 3)]).unwrap();
        let err = r1.compose(&r2).unwrap_err();
        assert_eq!(err, RelationError::CodomainMismatch { codomain: 1, other_domain: 2 });
        assert!(err.is_precondition_violation());
    }

    #[test]
    fn test_inverse() {
        let r = Relation::from_pairs([1, 2, 3], ["a", "b"], [(1, "a"), (2, "a")]).unwrap();
        let inv = r.inverse();
        assert_eq!(inv.domain(), r.codomain());
        assert_eq!(inv.codomain(), r.domain());
        assert_eq!(inv.pairs(), &HashSet::from([("a", 1), ("a", 2)]));
        // L'inverse d'une non-injection n'est pas une fonction, c'est permis
        assert!(!inv.is_function());
    }

    #[test]
    fn test_identity() {
        let id = Relation::identity(HashSet::from([1, 2, 3]));
        assert!(id.is_identity());
        assert_eq!(id.is_bijective(), Ok(true));
        assert_eq!(id.inverse(), id);
    }

    #[test]
    fn test_identity_is_neutral_for_compose() {
        let r = Relation::from_pairs([1, 2], ["a", "b"], [(1, "a"), (1, "b")]).unwrap();
        let left = Relation::identity(r.domain().clone()).compose(&r).unwrap();
        let right = r.compose(&Relation::identity(r.codomain().clone())).unwrap();
        assert_eq!(left, r);
        assert_eq!(right, r);
    }

    // -------------------------------------------------------------------------
    // Lois algébriques (propriétés aléatoires sur de petits univers)
    // -------------------------------------------------------------------------

    const UNIVERSE: u8 = 5;

    fn universe() -> HashSet<u8> {
        (0..UNIVERSE).collect()
    }

    fn arb_relation() -> impl Strategy<Value = Relation<u8, u8>> {
        prop::collection::hash_set((0..UNIVERSE, 0..UNIVERSE), 0..12)
            .prop_map(|pairs| Relation::from_parts(universe(), universe(), pairs))
    }

    fn arb_function() -> impl Strategy<Value = Relation<u8, u8>> {
        prop::collection::hash_map(0..UNIVERSE, 0..UNIVERSE, 0..=UNIVERSE as usize)
            .prop_map(|map| Relation::from_parts(universe(), universe(), map.into_iter().collect()))
    }

    proptest! {
        #[test]
        fn prop_inverse_is_involution(r in arb_relation()) {
            prop_assert_eq!(r.inverse().inverse(), r);
        }

        #[test]
        fn prop_compose_is_associative(f in arb_relation(), g in arb_relation(), h in arb_relation()) {
            let left = f.compose(&g).unwrap().compose(&h).unwrap();
            let right = f.compose(&g.compose(&h).unwrap()).unwrap();
            prop_assert_eq!(left.pairs(), right.pairs());
        }

        #[test]
        fn prop_image_of_inverse_is_preimage(r in arb_relation(), k in 0..UNIVERSE) {
            prop_assert_eq!(r.inverse().image(&k), r.preimage(&k));
        }

        #[test]
        fn prop_total_iff_inverse_surjective(r in arb_relation()) {
            let inv = r.inverse();
            if inv.is_function() {
                prop_assert_eq!(r.is_total(), inv.is_surjective().unwrap());
            }
        }

        #[test]
        fn prop_bijective_iff_invertible_function(f in arb_function()) {
            let inv = f.inverse();
            let invertible = inv.is_function()
                && inv.compose(&f).unwrap() == Relation::identity(f.codomain().clone());
            prop_assert_eq!(f.is_bijective().unwrap(), invertible);
        }

        #[test]
        fn prop_functions_are_functions(f in arb_function()) {
            prop_assert!(f.is_function());
            for k in f.defined_domain() {
                let y = f.functional_image(&k).unwrap();
                prop_assert!(f.image(&k).contains(y));
            }
        }
    }
}
