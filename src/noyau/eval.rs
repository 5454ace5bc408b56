//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> conversion des littéraux -> paliers [!] [^ √] [* / %] [+ -] -> résultat
//!
//! Fonction pure : aucun état conservé entre deux appels (le dernier résultat
//! « ANS » vit dans l’état de l’interface, pas ici).

use super::erreur::ErreurCalc;
use super::jetons::{format_jetons, tokenize};
use super::nombre::Nombre;
use super::reduction::reduire;

/// API publique : évalue une expression et retourne un nombre normalisé.
pub fn evaluer(expression: &str) -> Result<Nombre, ErreurCalc> {
    let jetons = tokenize(expression);
    log::debug!("jetons: {}", format_jetons(&jetons));

    let resultat = reduire(jetons);
    match &resultat {
        Ok(n) => log::debug!("{expression:?} = {n}"),
        Err(e) => log::debug!("{expression:?} : {e}"),
    }
    resultat
}
