// =============================================================================
// RELATION — Une relation binaire finie R ⊆ S × T
// =============================================================================
//
// Une RELATION est la donnée de trois ensembles finis :
//   - un DOMAINE     : l'univers déclaré des composantes gauches (S)
//   - un CODOMAINE   : l'univers déclaré des composantes droites (T)
//   - des PAIRES     : les associations effectives (x, y)
//
// INVARIANT : toute paire (x, y) vérifie x ∈ domaine et y ∈ codomaine.
//
// CYCLE DE VIE : construite une fois (et validée), jamais mutée. Toute
// "transformation" (inverse, composition) fabrique une NOUVELLE relation.
// Les champs sont privés et les accesseurs ne rendent que des références
// partagées : aucun appelant ne peut corrompre l'état interne.
//
// EXEMPLE :
//   domaine   = { 1, 2, 3 }
//   codomaine = { "a", "b" }
//   paires    = { (1, "a"), (1, "b"), (3, "b") }
//
//   image(1)       = { "a", "b" }   (pas une fonction : 1 a deux images)
//   image(2)       = { }            (2 n'est pas défini)
//   preimage("b")  = { 1, 3 }
//
// Ce fichier contient la construction, les accesseurs et les requêtes
// d'appartenance / d'image. Les prédicats de classification sont dans
// classify.rs, l'inverse et la composition dans algebra.rs.
//
// =============================================================================

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use super::element::{render, Element};
use super::error::{RelationError, Result};
use super::validate::validate_pairs;

/// Relation binaire finie entre un domaine de S et un codomaine de T.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation<S: Element, T: Element> {
    domain: HashSet<S>,
    codomain: HashSet<T>,
    pairs: HashSet<(S, T)>,
}

impl<S: Element, T: Element> Relation<S, T> {
    /// Construit une relation en vérifiant l'invariant.
    ///
    /// Les trois ensembles sont stockés tels quels (aucun filtrage).
    /// Échoue avec `RelationError::InvalidRelation` en nommant la première
    /// paire hors univers trouvée.
    pub fn new(domain: HashSet<S>, codomain: HashSet<T>, pairs: HashSet<(S, T)>) -> Result<Self> {
        if let Err(mut errors) = validate_pairs(&domain, &codomain, &pairs) {
            debug!(violations = errors.len(), "construction de relation refusée");
            return Err(errors.swap_remove(0));
        }

        debug!(
            domain = domain.len(),
            codomain = codomain.len(),
            pairs = pairs.len(),
            "relation construite"
        );
        Ok(Relation {
            domain,
            codomain,
            pairs,
        })
    }

    /// Variante de `new` qui accepte n'importe quels itérables.
    ///
    /// ```
    /// use relcat::Relation;
    ///
    /// let r = Relation::from_pairs([1, 2], ["a", "b"], [(1, "a"), (2, "b")]).unwrap();
    /// assert_eq!(r.len(), 2);
    /// ```
    pub fn from_pairs<D, C, P>(domain: D, codomain: C, pairs: P) -> Result<Self>
    where
        D: IntoIterator<Item = S>,
        C: IntoIterator<Item = T>,
        P: IntoIterator<Item = (S, T)>,
    {
        Self::new(
            domain.into_iter().collect(),
            codomain.into_iter().collect(),
            pairs.into_iter().collect(),
        )
    }

    /// Relation vide : aucune paire, toujours valide.
    pub fn empty(domain: HashSet<S>, codomain: HashSet<T>) -> Self {
        Relation {
            domain,
            codomain,
            pairs: HashSet::new(),
        }
    }

    /// Constructeur interne pour les relations dérivées (inverse, composition,
    /// identité), dont les paires respectent l'invariant par construction.
    pub(crate) fn from_parts(domain: HashSet<S>, codomain: HashSet<T>, pairs: HashSet<(S, T)>) -> Self {
        debug_assert!(validate_pairs(&domain, &codomain, &pairs).is_ok());
        Relation {
            domain,
            codomain,
            pairs,
        }
    }

    // -------------------------------------------------------------------------
    // Accesseurs
    // -------------------------------------------------------------------------

    pub fn domain(&self) -> &HashSet<S> {
        &self.domain
    }

    pub fn codomain(&self) -> &HashSet<T> {
        &self.codomain
    }

    pub fn pairs(&self) -> &HashSet<(S, T)> {
        &self.pairs
    }

    /// Nombre de paires
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// La relation est-elle vide (aucune paire) ?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// (x, y) ∈ paires ?
    pub fn contains(&self, x: &S, y: &T) -> bool {
        // HashSet<(S, T)> ne permet pas de chercher avec un tuple de références
        self.pairs.iter().any(|(a, b)| a == x && b == y)
    }

    // -------------------------------------------------------------------------
    // Appartenance
    // -------------------------------------------------------------------------

    pub fn in_domain(&self, k: &S) -> bool {
        self.domain.contains(k)
    }

    pub fn in_codomain(&self, v: &T) -> bool {
        self.codomain.contains(v)
    }

    /// Existe-t-il une paire (k, y) ?
    ///
    /// Précondition : k ∈ domaine, sinon `RelationError::NotInDomain`.
    pub fn is_defined_for(&self, k: &S) -> Result<bool> {
        if !self.in_domain(k) {
            debug!(element = %render(k), "is_defined_for hors domaine");
            return Err(RelationError::NotInDomain {
                operation: "is_defined_for",
                element: render(k),
            });
        }
        Ok(self.pairs.iter().any(|(x, _)| x == k))
    }

    /// Existe-t-il une paire (x, v) ?
    ///
    /// Précondition : v ∈ codomaine, sinon `RelationError::NotInCodomain`.
    pub fn in_range(&self, v: &T) -> Result<bool> {
        if !self.in_codomain(v) {
            debug!(element = %render(v), "in_range hors codomaine");
            return Err(RelationError::NotInCodomain {
                operation: "in_range",
                element: render(v),
            });
        }
        Ok(self.pairs.iter().any(|(_, y)| y == v))
    }

    /// Projection gauche des paires : les éléments effectivement définis.
    pub fn defined_domain(&self) -> HashSet<S> {
        self.pairs.iter().map(|(x, _)| x.clone()).collect()
    }

    /// Projection droite des paires : les éléments effectivement atteints.
    pub fn range(&self) -> HashSet<T> {
        self.pairs.iter().map(|(_, y)| y.clone()).collect()
    }

    // -------------------------------------------------------------------------
    // Image / préimage
    // -------------------------------------------------------------------------

    /// { y | (k, y) ∈ paires }. Peut être vide, peut avoir plusieurs éléments.
    pub fn image(&self, k: &S) -> HashSet<T> {
        self.pairs
            .iter()
            .filter(|(x, _)| x == k)
            .map(|(_, y)| y.clone())
            .collect()
    }

    /// Union des images des éléments de `ks`.
    pub fn image_of_set(&self, ks: &HashSet<S>) -> HashSet<T> {
        self.pairs
            .iter()
            .filter(|(x, _)| ks.contains(x))
            .map(|(_, y)| y.clone())
            .collect()
    }

    /// { x | (x, v) ∈ paires }, sans construire l'inverse.
    pub fn preimage(&self, v: &T) -> HashSet<S> {
        self.pairs
            .iter()
            .filter(|(_, y)| y == v)
            .map(|(x, _)| x.clone())
            .collect()
    }

    /// Union des préimages des éléments de `vs`.
    pub fn preimage_of_set(&self, vs: &HashSet<T>) -> HashSet<S> {
        self.pairs
            .iter()
            .filter(|(_, y)| vs.contains(y))
            .map(|(x, _)| x.clone())
            .collect()
    }

    /// L'unique y tel que (k, y) ∈ paires.
    ///
    /// Préconditions, vérifiées dans cet ordre :
    /// - la relation est une fonction (`NotAFunction`)
    /// - k ∈ domaine (`NotInDomain`)
    /// - la relation est définie en k (`Undefined`)
    pub fn functional_image(&self, k: &S) -> Result<&T> {
        if !self.is_function() {
            debug!(element = %render(k), "functional_image sur une non-fonction");
            return Err(RelationError::NotAFunction {
                operation: "functional_image",
            });
        }
        if !self.in_domain(k) {
            return Err(RelationError::NotInDomain {
                operation: "functional_image",
                element: render(k),
            });
        }
        // Fonction ⇒ au plus une paire de la forme (k, _)
        self.pairs
            .iter()
            .find(|(x, _)| x == k)
            .map(|(_, y)| y)
            .ok_or_else(|| RelationError::Undefined { element: render(k) })
    }
}

/// Rendu stable : les éléments sont triés selon leur forme `Debug`.
fn sorted_rendering<'a, X: Element + 'a>(items: impl Iterator<Item = &'a X>) -> Vec<String> {
    let mut out: Vec<String> = items.map(render).collect();
    out.sort();
    out
}

impl<S: Element, T: Element> fmt::Display for Relation<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let domain = sorted_rendering(self.domain.iter());
        let codomain = sorted_rendering(self.codomain.iter());
        writeln!(
            f,
            "relation {} : {{{}}} -> {{{}}} = {{",
            self.pairs.len(),
            domain.join(", "),
            codomain.join(", ")
        )?;

        let mut pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(x, y)| format!("({:?}, {:?})", x, y))
            .collect();
        pairs.sort();
        for pair in pairs {
            writeln!(f, "  {}", pair)?;
        }

        write!(f, "}}")
    }
}
