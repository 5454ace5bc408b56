// src/noyau/primitives.rs
//
// Opérations élémentaires de la calculatrice.
//
// Contrat commun :
// - entiers : calcul exact en i64 (checked), repli en f64 si dépassement ;
// - décimaux : résultat arrondi à CHIFFRES_ARRONDI décimales puis normalisé ;
// - résultat non fini => ErreurCalc::Depassement (pas d’arithmétique arbitraire).

use super::erreur::ErreurCalc;
use super::nombre::Nombre;

/// Nombre de décimales conservées par toutes les primitives.
pub const CHIFFRES_ARRONDI: usize = 10;

/// Arrondi à CHIFFRES_ARRONDI décimales (arrondi correct sur la valeur binaire exacte).
pub fn arrondi(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.prec$}", prec = CHIFFRES_ARRONDI)
        .parse()
        .unwrap_or(x)
}

/// Flottant brut -> Nombre arrondi et normalisé.
fn resultat(x: f64) -> Result<Nombre, ErreurCalc> {
    let r = arrondi(x);
    if !r.is_finite() {
        return Err(ErreurCalc::Depassement);
    }
    Ok(Nombre::depuis_f64(r))
}

/// Opération exacte sur deux entiers, sinon repli flottant.
fn exact_ou_flottant(
    a: Nombre,
    b: Nombre,
    entier: fn(i64, i64) -> Option<i64>,
    flottant: fn(f64, f64) -> f64,
) -> Result<Nombre, ErreurCalc> {
    match (a.normalise(), b.normalise()) {
        (Nombre::Entier(x), Nombre::Entier(y)) => match entier(x, y) {
            Some(r) => Ok(Nombre::Entier(r)),
            None => resultat(flottant(x as f64, y as f64)),
        },
        (x, y) => resultat(flottant(x.en_f64(), y.en_f64())),
    }
}

pub fn add(a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalc> {
    exact_ou_flottant(a, b, i64::checked_add, |x, y| x + y)
}

pub fn sub(a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalc> {
    exact_ou_flottant(a, b, i64::checked_sub, |x, y| x - y)
}

pub fn mul(a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalc> {
    exact_ou_flottant(a, b, i64::checked_mul, |x, y| x * y)
}

/// Division toujours flottante : 6/3 = 2 (normalisé), 7/2 = 3.5.
pub fn div(a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalc> {
    if b.est_zero() {
        return Err(ErreurCalc::DivisionParZero);
    }
    resultat(a.en_f64() / b.en_f64())
}

/// Reste de la division entière, du signe du diviseur (-7 % 3 = 2).
pub fn modulo(a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalc> {
    let (Some(x), Some(y)) = (a.en_entier(), b.en_entier()) else {
        return Err(ErreurCalc::OperandeInvalide(
            "le modulo exige deux entiers",
        ));
    };
    if y == 0 {
        return Err(ErreurCalc::DivisionParZero);
    }

    // i64::MIN % -1 déborde mais vaut 0
    let r = x.checked_rem(y).unwrap_or(0);
    let r = if r != 0 && (r < 0) != (y < 0) { r + y } else { r };
    Ok(Nombre::Entier(r))
}

/// base^exp, exposant entier naturel uniquement.
pub fn puissance(base: Nombre, exp: Nombre) -> Result<Nombre, ErreurCalc> {
    let n = match exp.en_entier() {
        Some(n) if n >= 0 => n,
        _ => {
            return Err(ErreurCalc::OperandeInvalide(
                "l’exposant doit être un entier naturel",
            ))
        }
    };
    if base.est_zero() && n == 0 {
        return Err(ErreurCalc::Domaine("0^0 n’est pas défini"));
    }

    match base.normalise() {
        Nombre::Entier(b) => {
            let exact = u32::try_from(n).ok().and_then(|e| b.checked_pow(e));
            match exact {
                Some(r) => Ok(Nombre::Entier(r)),
                None => resultat((b as f64).powf(n as f64)),
            }
        }
        Nombre::Decimal(b) => resultat(b.powf(n as f64)),
    }
}

/// Racine de degré quelconque (non nul) : radicande^(1/degré).
///
/// - degré pair + radicande négatif : hors domaine ;
/// - degré impair + radicande négatif : -(|radicande|^(1/degré)) ;
/// - autre degré + radicande négatif : accepté seulement si 1/degré est entier
///   (la puissance reste réelle), sinon hors domaine.
pub fn racine(radicande: Nombre, degre: Nombre) -> Result<Nombre, ErreurCalc> {
    let a = radicande.en_f64();
    let d = degre.en_f64();
    let parite = d.rem_euclid(2.0);

    if parite == 0.0 && a < 0.0 {
        return Err(ErreurCalc::Domaine(
            "racine de degré pair d’un nombre négatif",
        ));
    }
    if d == 0.0 {
        return Err(ErreurCalc::Domaine("le degré d’une racine ne peut pas être zéro"));
    }
    if a == 0.0 && d < 0.0 {
        return Err(ErreurCalc::DivisionParZero);
    }

    let inverse = 1.0 / d;
    if a < 0.0 {
        if parite == 1.0 {
            return resultat(-((-a).powf(inverse)));
        }
        if inverse.fract() != 0.0 {
            return Err(ErreurCalc::Domaine(
                "racine non réelle d’un nombre négatif",
            ));
        }
    }
    resultat(a.powf(inverse))
}

/// n!, n entier naturel. Exact jusqu’à 20!, puis flottant.
pub fn factorielle(n: Nombre) -> Result<Nombre, ErreurCalc> {
    let n = match n.en_entier() {
        Some(n) if n >= 0 => n,
        _ => {
            return Err(ErreurCalc::OperandeInvalide(
                "la factorielle exige un entier positif ou nul",
            ))
        }
    };

    let mut exact: i64 = 1;
    let mut k: i64 = 2;
    while k <= n {
        match exact.checked_mul(k) {
            Some(v) => exact = v,
            None => break,
        }
        k += 1;
    }
    if k > n {
        return Ok(Nombre::Entier(exact));
    }

    // au-delà de i64 : on continue en flottant jusqu’au dépassement
    let mut approx = exact as f64;
    while k <= n {
        approx *= k as f64;
        if !approx.is_finite() {
            return Err(ErreurCalc::Depassement);
        }
        k += 1;
    }
    resultat(approx)
}

pub fn abs(x: Nombre) -> Nombre {
    if x.est_negatif() {
        x.neg()
    } else {
        x
    }
}
