// src/noyau/reduction.rs
//
// Réduction d’une suite de jetons en un seul nombre, palier par palier.
//
// Paliers (du plus prioritaire au moins prioritaire) :
//   [!]  [^ √]  [* / %]  [+ -]
//
// Chaque palier est UNE passe gauche -> droite d’un tampon d’entrée vers un
// tampon de sortie :
// - l’opérande gauche est le sommet du tampon de sortie ;
// - l’opérande droit est le prochain élément de l’entrée ;
// - le résultat est empilé en sortie, il devient donc l’opérande gauche du
//   prochain opérateur du même palier (2^3^2 = (2^3)^2).
//
// Un opérateur qui exige un opérande gauche mais arrive en position 0 (sortie
// vide) est recopié tel quel : le contrôle final le refusera.

use super::erreur::ErreurCalc;
use super::jetons::{Jeton, Op};
use super::nombre::Nombre;
use super::primitives;

const PALIERS: [&[Op]; 4] = [
    &[Op::Fact],
    &[Op::Caret, Op::Racine],
    &[Op::Star, Op::Slash, Op::Modulo],
    &[Op::Plus, Op::Minus],
];

/// Degré implicite de `√x`.
const DEGRE_IMPLICITE: Nombre = Nombre::Entier(2);

#[derive(Clone, Copy, Debug, PartialEq)]
enum Terme {
    Val(Nombre),
    Op(Op),
}

impl Terme {
    fn depuis_jeton(j: Jeton) -> Result<Terme, ErreurCalc> {
        match j {
            Jeton::Nombre(s) => Ok(Terme::Val(Nombre::depuis_litteral(&s)?)),
            Jeton::Op(op) => Ok(Terme::Op(op)),
        }
    }
}

/// Réduit les jetons en un nombre normalisé.
///
/// Tous les littéraux sont convertis avant le premier palier : un littéral
/// invalide donne `NombreInvalide` même si un opérateur placé avant lui aurait
/// échoué (`5/0+1..2`, `abc√9`).
pub fn reduire(jetons: Vec<Jeton>) -> Result<Nombre, ErreurCalc> {
    let mut termes = jetons
        .into_iter()
        .map(Terme::depuis_jeton)
        .collect::<Result<Vec<_>, _>>()?;

    signe_initial(&mut termes);

    for palier in PALIERS {
        termes = passe(termes, palier)?;
        log::trace!("palier {}: {}", format_palier(palier), format_termes(&termes));
    }

    match termes.as_slice() {
        [Terme::Val(n)] => Ok(n.normalise()),
        [] => Err(ErreurCalc::MalFormee("expression vide".into())),
        _ => Err(ErreurCalc::MalFormee(format!(
            "il reste {} éléments ({})",
            termes.len(),
            format_termes(&termes)
        ))),
    }
}

/// Signe en tête d’expression (un seul jeton examiné).
/// - `+` initial : retiré, ce qui suit n’est pas relu (`++5`, `+-5` refusés) ;
/// - `-` suivi d’un nombre : appliqué à ce nombre seulement (-2^2 = 4) ;
/// - `-` suivi d’un opérateur : lu comme `0 - ...` (-√9 = -3).
fn signe_initial(termes: &mut Vec<Terme>) {
    match termes.first().copied() {
        Some(Terme::Op(Op::Plus)) => {
            termes.remove(0);
            return;
        }
        Some(Terme::Op(Op::Minus)) => {}
        _ => return,
    }
    match termes.get(1).copied() {
        Some(Terme::Val(n)) => {
            termes[1] = Terme::Val(n.neg());
            termes.remove(0);
        }
        Some(Terme::Op(_)) => termes.insert(0, Terme::Val(Nombre::Entier(0))),
        // "-" seul : le contrôle final le refuse
        None => {}
    }
}

fn passe(entree: Vec<Terme>, palier: &[Op]) -> Result<Vec<Terme>, ErreurCalc> {
    let mut sortie: Vec<Terme> = Vec::with_capacity(entree.len());
    let mut reste = entree.into_iter().peekable();

    while let Some(terme) = reste.next() {
        let op = match terme {
            Terme::Op(op) if palier.contains(&op) => op,
            _ => {
                sortie.push(terme);
                continue;
            }
        };

        // √ : degré explicite si un nombre précède, sinon degré 2 (y compris en tête)
        if op == Op::Racine {
            let degre = match sortie.last().copied() {
                Some(Terme::Val(d)) => {
                    sortie.pop();
                    d.normalise()
                }
                _ => DEGRE_IMPLICITE,
            };
            let radicande = operande_droit(&mut reste, op)?;
            sortie.push(Terme::Val(primitives::racine(radicande, degre)?));
            continue;
        }

        if sortie.is_empty() {
            sortie.push(terme);
            continue;
        }

        let valeur = match op {
            Op::Fact => primitives::factorielle(operande_gauche(&mut sortie, op)?)?,
            Op::Plus | Op::Minus => {
                // signes collés : "+-" -> "-", "--" -> "+", etc.
                let mut signe = op;
                while let Some(Terme::Op(suivant @ (Op::Plus | Op::Minus))) = reste.peek().copied() {
                    signe = if suivant == signe { Op::Plus } else { Op::Minus };
                    reste.next();
                }
                let a = operande_gauche(&mut sortie, signe)?;
                let b = operande_droit(&mut reste, signe)?;
                if signe == Op::Plus {
                    primitives::add(a, b)?
                } else {
                    primitives::sub(a, b)?
                }
            }
            _ => {
                let a = operande_gauche(&mut sortie, op)?;
                let b = operande_droit(&mut reste, op)?;
                binaire(op, a, b)?
            }
        };
        sortie.push(Terme::Val(valeur));
    }

    Ok(sortie)
}

fn binaire(op: Op, a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalc> {
    match op {
        Op::Caret => primitives::puissance(a, b),
        Op::Star => primitives::mul(a, b),
        Op::Slash => primitives::div(a, b),
        Op::Modulo => primitives::modulo(a, b),
        Op::Plus => primitives::add(a, b),
        Op::Minus => primitives::sub(a, b),
        Op::Fact | Op::Racine => Err(ErreurCalc::MalFormee(format!(
            "« {op} » n’est pas un opérateur binaire"
        ))),
    }
}

fn operande_gauche(sortie: &mut Vec<Terme>, op: Op) -> Result<Nombre, ErreurCalc> {
    match sortie.pop() {
        Some(Terme::Val(n)) => Ok(n.normalise()),
        Some(Terme::Op(autre)) => Err(ErreurCalc::MalFormee(format!(
            "« {autre} » inattendu avant « {op} »"
        ))),
        None => Err(ErreurCalc::MalFormee(format!(
            "opérande manquant avant « {op} »"
        ))),
    }
}

fn operande_droit<I>(reste: &mut I, op: Op) -> Result<Nombre, ErreurCalc>
where
    I: Iterator<Item = Terme>,
{
    match reste.next() {
        Some(Terme::Val(n)) => Ok(n.normalise()),
        Some(Terme::Op(autre)) => Err(ErreurCalc::MalFormee(format!(
            "« {autre} » inattendu après « {op} »"
        ))),
        None => Err(ErreurCalc::MalFormee(format!(
            "opérande manquant après « {op} »"
        ))),
    }
}

fn format_palier(palier: &[Op]) -> String {
    palier.iter().map(|op| op.symbole()).collect()
}

fn format_termes(termes: &[Terme]) -> String {
    termes
        .iter()
        .map(|t| match t {
            Terme::Val(n) => n.to_string(),
            Terme::Op(op) => op.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
