// =============================================================================
// ERROR — Taxonomie des erreurs relationnelles
// =============================================================================
//
// Deux familles seulement :
//   - InvalidRelation : levée UNIQUEMENT à la construction, quand une paire
//     sort du domaine ou du codomaine déclaré. Une fois construite, une
//     relation est valide pour toute sa durée de vie.
//   - Violations de précondition : l'appelant a demandé quelque chose qui
//     n'a pas de sens (injectivité d'une non-fonction, composition sur des
//     univers intermédiaires différents...). C'est une erreur de logique
//     chez l'appelant, jamais une condition transitoire.
//
// Aucune erreur n'est avalée ni remplacée par une valeur par défaut.
//
// =============================================================================

use std::fmt;
use thiserror::Error;

/// Côté de la paire qui sort de son univers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidSide {
    /// La composante gauche n'est pas dans le domaine
    Domain,
    /// La composante droite n'est pas dans le codomaine
    Codomain,
    /// Les deux à la fois
    Both,
}

impl fmt::Display for InvalidSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSide::Domain => write!(f, "la composante gauche n'est pas dans le domaine"),
            InvalidSide::Codomain => write!(f, "la composante droite n'est pas dans le codomaine"),
            InvalidSide::Both => write!(f, "aucune des deux composantes n'est dans son univers"),
        }
    }
}

/// Erreur d'une opération sur une relation.
///
/// Les éléments fautifs sont rendus via `Debug` pour que l'erreur reste
/// indépendante des paramètres de type de la relation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    #[error("Relation invalide : la paire ({left}, {right}) est hors univers ({side})")]
    InvalidRelation {
        left: String,
        right: String,
        side: InvalidSide,
    },

    #[error("{operation} : la relation n'est pas une fonction")]
    NotAFunction { operation: &'static str },

    #[error("{operation} : {element} n'appartient pas au domaine")]
    NotInDomain {
        operation: &'static str,
        element: String,
    },

    #[error("{operation} : {element} n'appartient pas au codomaine")]
    NotInCodomain {
        operation: &'static str,
        element: String,
    },

    #[error("functional_image : la relation n'est pas définie en {element}")]
    Undefined { element: String },

    #[error("compose : le domaine de l'autre relation ({other_domain} éléments) diffère du codomaine ({codomain} éléments)")]
    CodomainMismatch { codomain: usize, other_domain: usize },
}

impl RelationError {
    /// Vrai pour toute la famille des violations de précondition,
    /// faux pour l'erreur d'invariant levée à la construction.
    pub fn is_precondition_violation(&self) -> bool {
        !matches!(self, RelationError::InvalidRelation { .. })
    }
}

/// Résultat des opérations relationnelles.
pub type Result<T> = std::result::Result<T, RelationError>;

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_relation_message_names_pair() {
        let err = RelationError::InvalidRelation {
            left: "2".into(),
            right: "\"a\"".into(),
            side: InvalidSide::Domain,
        };
        let msg = err.to_string();
        assert!(msg.contains("(2, \"a\")"));
        assert!(msg.contains("domaine"));
    }

    #[test]
    fn test_precondition_family() {
        assert!(RelationError::NotAFunction { operation: "is_injective" }.is_precondition_violation());
        assert!(RelationError::CodomainMismatch { codomain: 1, other_domain: 2 }.is_precondition_violation());
        assert!(!RelationError::InvalidRelation {
            left: "1".into(),
            right: "1".into(),
            side: InvalidSide::Both,
        }
        .is_precondition_violation());
    }
}
