//! Noyau d’évaluation (f64)
//!
//! Organisation interne :
//! - erreurs.rs  : Syntaxe / Eval (deux familles seulement)
//! - jetons.rs   : Tok + tokenisation
//! - unaire.rs   : '-' unaire => Op::Neg
//! - rpn.rs      : shunting-yard
//! - eval.rs     : pile RPN + pipeline complet
//! - format.rs   : affichage d’un résultat ("1,234.5", "Error")

pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod unaire;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalcul;
pub use eval::{demarche, evaluate, DemarcheNoyau};
