// =============================================================================
// RELCAT — Relations binaires finies en Rust
// =============================================================================
//
// RelCat implémente l'abstraction de RELATION BINAIRE FINIE entre deux
// ensembles (éventuellement distincts), avec ses prédicats dérivés et ses
// opérations d'algèbre relationnelle.
//
// Architecture :
//   core/     → Le cœur relationnel pur (aucune I/O)
//
// Concepts fondamentaux :
//   Relation  = domaine + codomaine + ensemble de paires (x, y)
//   Fonction  = relation où chaque x défini a une seule image
//   Inverse   = la relation lue "à l'envers"
//   Composition = enchaînement de deux relations via un univers commun
//
// Tout est fini, matérialisé et immuable : une relation se construit une
// fois, puis s'interroge ou se dérive indéfiniment.
//
// =============================================================================

pub mod core;

pub use crate::core::element::Element;
pub use crate::core::error::{InvalidSide, RelationError, Result};
pub use crate::core::relation::Relation;
