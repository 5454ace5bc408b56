//! Tests de propriétés (campagne) : priorités, signes, racines, erreurs.
//!
//! Chaque bloc vérifie une propriété observable de `evaluer`, sans regarder
//! les jetons intermédiaires.

use super::nombre::Nombre::{Decimal as D, Entier as E};
use super::{evaluer, primitives, ErreurCalc, Nombre};

fn eval_ok(expr: &str) -> Nombre {
    let _ = env_logger::builder().is_test(true).try_init();
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_eval(expr: &str, attendu: Nombre) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/* ------------------------ Un opérateur = une primitive ------------------------ */

#[test]
fn prop_operateur_seul_egal_primitive() {
    let cas: [(&str, Result<Nombre, ErreurCalc>); 7] = [
        ("6*7", primitives::mul(E(6), E(7))),
        ("10%3", primitives::modulo(E(10), E(3))),
        ("9/4", primitives::div(E(9), E(4))),
        ("2.5+1.25", primitives::add(D(2.5), D(1.25))),
        ("3-8", primitives::sub(E(3), E(8))),
        ("3^4", primitives::puissance(E(3), E(4))),
        ("5!", primitives::factorielle(E(5))),
    ];
    for (expr, attendu) in cas {
        assert_eq!(evaluer(expr), attendu, "expr={expr:?}");
    }
    assert_eval("6*7", E(42));
    assert_eval("10%3", E(1));
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn prop_priorites() {
    assert_eval("2+3*4", E(14));
    assert_eval("2^3+1", E(9));
    assert_eval("4!+1", E(25));
    assert_eval("2*3!", E(12));
    assert_eval("1+2^3*2", E(17));
    assert_eval("10-6/3", E(8));
    assert_eval("2+10%4", E(4));
}

/* ------------------------ Racines ------------------------ */

#[test]
fn prop_racines() {
    assert_eval("√9", E(3));
    assert_eval("3√27", E(3));
    assert_eval("√2", D(1.4142135624));
    assert_eval("1+√16*2", E(9));
    assert_eval("4√16", E(2));
}

#[test]
fn prop_racine_degre_zero() {
    assert!(matches!(evaluer("0√5"), Err(ErreurCalc::Domaine(_))));
}

/* ------------------------ Signes ------------------------ */

#[test]
fn prop_signes() {
    assert_eval("-5+3", E(-2));
    assert_eval("5+-3", E(2));
    assert_eval("5--3", E(8));
    assert_eval("5-+3", E(2));
    assert_eval("5++3", E(8));
    assert_eval("-5*2", E(-10));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn prop_erreurs() {
    assert_eq!(evaluer("5/0"), Err(ErreurCalc::DivisionParZero));
    assert_eq!(evaluer("5%0"), Err(ErreurCalc::DivisionParZero));
    assert!(matches!(evaluer("5+"), Err(ErreurCalc::MalFormee(_))));
    assert!(matches!(evaluer(""), Err(ErreurCalc::MalFormee(_))));
    assert!(matches!(evaluer("5**3"), Err(ErreurCalc::MalFormee(_))));
    assert!(matches!(evaluer("0^0"), Err(ErreurCalc::Domaine(_))));
    assert!(matches!(evaluer("2.5!"), Err(ErreurCalc::OperandeInvalide(_))));
    assert!(matches!(evaluer("5.5%2"), Err(ErreurCalc::OperandeInvalide(_))));
    assert!(matches!(evaluer("2^0.5"), Err(ErreurCalc::OperandeInvalide(_))));
    assert!(matches!(evaluer("1.2.3+1"), Err(ErreurCalc::NombreInvalide(_))));
}

#[test]
fn prop_plus_initial_unique() {
    assert_eval("+5", E(5));
    assert_eval("+5-2", E(3));
    for expr in ["++5", "+-5", "+!5"] {
        assert!(
            matches!(evaluer(expr), Err(ErreurCalc::MalFormee(_))),
            "expr={expr:?} -> {:?}",
            evaluer(expr)
        );
    }
}

#[test]
fn prop_erreur_interrompt_la_reduction() {
    // l’erreur du palier [* / %] sort avant le contrôle final
    assert_eq!(evaluer("1/0+"), Err(ErreurCalc::DivisionParZero));
}

/* ------------------------ Idempotence / aller-retour ------------------------ */

#[test]
fn prop_idempotence() {
    for expr in ["2+3*4", "√2", "5/0", "-√9", "7/3", "5+"] {
        assert_eq!(evaluer(expr), evaluer(expr), "expr={expr:?}");
    }
}

#[test]
fn prop_aller_retour_entiers() {
    for i in [0i64, 1, 42, 9_007_199_254_740_991] {
        assert_eval(&i.to_string(), E(i));
        assert_eq!(Nombre::depuis_litteral(&format!("{i}.0")), Ok(E(i)));
    }
}

#[test]
fn prop_resultat_reinjecte() {
    // ANS : un résultat réinjecté tel quel redonne la même valeur
    for expr in ["7/2", "√2", "-5+3", "10^12"] {
        let r = eval_ok(expr);
        assert_eq!(eval_ok(&r.to_string()), r, "expr={expr:?}");
    }
}
