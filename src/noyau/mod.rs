//! Noyau de calcul 98k
//!
//! Organisation interne :
//! - erreur.rs : taxonomie des défaillances
//! - jetons.rs : tokenisation
//! - rpn.rs    : shunting-yard + construction Expr
//! - expr.rs   : AST
//! - eval.rs   : évaluation f64 + pipeline complet
//! - format.rs : affichage du résultat
//!
//! Flux à sens unique : chaîne brute -> jetons -> AST -> f64 -> affichage.
//! Aucun état caché : tout est pur, l'état vit dans la session (app).

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_pipeline;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{soumettre, Soumission};
