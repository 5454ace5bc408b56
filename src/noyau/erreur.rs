//! Erreurs du noyau.
//!
//! Une seule énumération pour tout le pipeline (conversion des littéraux,
//! primitives, réduction). Les erreurs sont levées au point exact de
//! l’opération fautive et interrompent la réduction : aucun résultat partiel.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    /// Nombre de jetons final incorrect, opérateur orphelin ou mal placé.
    #[error("expression mal formée : {0}")]
    MalFormee(String),

    /// Entier attendu (factorielle, modulo, exposant).
    #[error("opérande invalide : {0}")]
    OperandeInvalide(&'static str),

    #[error("division par zéro")]
    DivisionParZero,

    /// Racine paire d’un négatif, 0^0, racine de degré zéro.
    #[error("hors domaine : {0}")]
    Domaine(&'static str),

    /// Littéral qui ne se lit pas comme un nombre décimal.
    #[error("nombre invalide : {0:?}")]
    NombreInvalide(String),

    /// Résultat hors de la plage des flottants (pas d’arithmétique arbitraire).
    #[error("dépassement de capacité")]
    Depassement,
}
