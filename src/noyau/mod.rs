//! Noyau de calcul Gazorpazorp
//!
//! Organisation interne :
//! - jetons.rs     : découpage de la chaîne en jetons (nombres / opérateurs)
//! - nombre.rs     : type numérique étiqueté (entier / décimal) + normalisation
//! - primitives.rs : opérations élémentaires (arrondi à 10 décimales)
//! - reduction.rs  : réduction par paliers de priorité
//! - erreur.rs     : erreurs du noyau
//! - eval.rs       : pipeline complet (jetons -> réduction)

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod nombre;
pub mod primitives;
pub mod reduction;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::evaluer;
pub use nombre::Nombre;
