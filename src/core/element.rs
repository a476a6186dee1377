// =============================================================================
// ELEMENT — Ce qu'on exige d'un élément d'ensemble
// =============================================================================
//
// Une relation vit au-dessus d'ensembles FINIS et MATÉRIALISÉS. Pour qu'un
// type puisse peupler un domaine ou un codomaine, il faut :
//   - l'égalité (Eq) et le hachage (Hash) → appartenance à un HashSet
//   - Clone → les relations dérivées (inverse, composition) copient leurs
//     éléments, elles ne les empruntent pas
//   - Debug → les erreurs nomment la paire ou l'élément fautif
//
// Aucun ordre n'est requis : une relation n'a pas besoin de trier ses éléments.
//
// =============================================================================

use std::fmt::Debug;
use std::hash::Hash;

/// Borne commune à tous les paramètres S, T, R d'une relation.
///
/// Implémentée automatiquement pour tout type `Eq + Hash + Clone + Debug`.
pub trait Element: Eq + Hash + Clone + Debug {}

impl<X: Eq + Hash + Clone + Debug> Element for X {}

/// Rendu d'un élément pour les messages d'erreur et les logs.
pub(crate) fn render<X: Debug>(x: &X) -> String {
    format!("{:?}", x)
}
