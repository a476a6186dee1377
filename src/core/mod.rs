// =============================================================================
// CORE — Module principal du cœur relationnel
// =============================================================================
//
// Ce module regroupe toute la logique mathématique pure :
// pas d'I/O, pas de concurrence, pas d'état mutable — uniquement des
// ensembles finis, des paires et des relations entre eux.
//
// Architecture :
//   element   → la borne exigée des éléments (Eq + Hash + Clone + Debug)
//   error     → InvalidRelation et les violations de précondition
//   validate  → la vérification de l'invariant domaine × codomaine
//   relation  → l'entité Relation (construction, image, préimage)
//   classify  → fonction, injective, surjective, totale, bijective
//   algebra   → inverse, composition, identité
//
// =============================================================================

pub mod element;
pub mod error;
pub mod validate;
pub mod relation;
pub mod classify;
pub mod algebra;
