// =============================================================================
// RELCAT — Point d'entrée : démonstration des relations finies
// =============================================================================
//
// Ce main.rs parcourt les cas typiques :
//   1. Une bijection
//   2. Une surjection non injective
//   3. Une relation partielle
//   4. Une construction refusée (paire hors domaine)
//   5. Une composition
//   6. Une non-fonction et son image fonctionnelle refusée
//
// Les logs du cœur sont visibles avec RUST_LOG=relcat=debug.
//
// =============================================================================

use std::collections::HashSet;

use relcat::{Relation, RelationError};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("relcat=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn verdict(result: Result<bool, RelationError>) -> String {
    match result {
        Ok(true) => "oui".into(),
        Ok(false) => "non".into(),
        Err(e) => format!("indéfini ({})", e),
    }
}

fn main() -> Result<(), RelationError> {
    init_logging();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║      RELCAT — Relations binaires finies          ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 1 : Une bijection
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 1 : Bijection ═══\n");

    let bij = Relation::from_pairs([1, 2], ["a", "b"], [(1, "a"), (2, "b")])?;
    println!("{}\n", bij);
    println!("  fonction   : {}", bij.is_function());
    println!("  injective  : {}", verdict(bij.is_injective()));
    println!("  surjective : {}", verdict(bij.is_surjective()));
    println!("  bijective  : {}\n", verdict(bij.is_bijective()));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 2 : Surjection non injective
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 2 : Surjection non injective ═══\n");

    let surj = Relation::from_pairs([1, 2], ["a"], [(1, "a"), (2, "a")])?;
    println!("{}\n", surj);
    println!("  injective  : {}", verdict(surj.is_injective()));
    println!("  surjective : {}", verdict(surj.is_surjective()));
    println!("  préimage(\"a\") = {:?}\n", surj.preimage(&"a"));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 3 : Relation partielle
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 3 : Relation partielle ═══\n");

    let partial = Relation::from_pairs([1, 2, 3], ["a", "b"], [(1, "a")])?;
    println!("{}\n", partial);
    println!("  totale     : {}", partial.is_total());
    println!("  partielle  : {}", partial.is_partial());
    println!("  image(2)   = {:?}", partial.image(&2));
    println!("  définie en 2 : {}\n", verdict(partial.is_defined_for(&2)));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 4 : Construction refusée
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 4 : Paire hors domaine ═══\n");

    match Relation::from_pairs([1], ["a"], [(2, "a")]) {
        Ok(r) => println!("✗ Construction acceptée à tort :\n{}\n", r),
        Err(e) => println!("✓ {}\n", e),
    }

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 5 : Composition
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 5 : Composition ═══\n");

    let r1 = Relation::from_pairs([1], [2], [(1, 2)])?;
    let r2 = Relation::from_pairs([2], [3], [(2, 3)])?;
    let composed = r1.compose(&r2)?;
    println!("{}\n", composed);

    let inv = bij.inverse();
    let round_trip = inv.compose(&bij)?;
    println!("  inverse ; bijection = identité sur le codomaine : {}\n",
        round_trip == Relation::identity(HashSet::from(["a", "b"])));

    // ═══════════════════════════════════════════════════════════
    // ÉTAPE 6 : Non-fonction
    // ═══════════════════════════════════════════════════════════
    println!("═══ ÉTAPE 6 : Non-fonction ═══\n");

    let multi = Relation::from_pairs([1], ["a", "b"], [(1, "a"), (1, "b")])?;
    println!("{}\n", multi);
    println!("  fonction   : {}", multi.is_function());
    match multi.functional_image(&1) {
        Ok(y) => println!("✗ Image fonctionnelle inattendue : {:?}", y),
        Err(e) => println!("✓ {}", e),
    }

    println!("\n═══ FIN ═══");
    Ok(())
}
