//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - toute erreur doit être une ErreurCalc (jamais de panique)
//! - invariant clé : même entrée => même sortie (aucun état caché)

use std::time::{Duration, Instant};

use super::{evaluer, ErreurCalc, Nombre};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

const ALPHABET: [char; 19] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '!', '^', '√', '*', '/', '%', '+',
    '-',
];

/// Chaîne quelconque sur l’alphabet accepté par l’interface.
fn gen_bruit(rng: &mut Rng, max_len: u32) -> String {
    let len = 1 + rng.pick(max_len);
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/// Somme/différence de produits d’entiers : (texte, valeur de référence).
fn gen_somme_de_produits(rng: &mut Rng) -> (String, i64) {
    let mut texte = String::new();
    let mut total: i64 = 0;
    let nb_termes = 1 + rng.pick(5);

    for t in 0..nb_termes {
        let negatif = t > 0 && rng.pick(2) == 1;
        if t > 0 {
            texte.push(if negatif { '-' } else { '+' });
        }

        let nb_facteurs = 1 + rng.pick(3);
        let mut produit: i64 = 1;
        for f in 0..nb_facteurs {
            let x = i64::from(rng.pick(20));
            if f > 0 {
                texte.push('*');
            }
            texte.push_str(&x.to_string());
            produit *= x;
        }

        total += if negatif { -produit } else { produit };
    }

    (texte, total)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_somme_de_produits_contre_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let (expr, attendu) = gen_somme_de_produits(&mut rng);
        assert_eq!(
            evaluer(&expr),
            Ok(Nombre::Entier(attendu)),
            "expr={expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng, 12);
        let a = evaluer(&expr);
        let b = evaluer(&expr);

        // Debug plutôt que PartialEq : robuste même si un décimal était NaN
        assert_eq!(format!("{a:?}"), format!("{b:?}"), "expr={expr:?}");

        match a {
            Ok(n) => assert!(n.en_f64().is_finite(), "expr={expr:?} -> {n}"),
            Err(e) => assert!(!e.to_string().is_empty(), "expr={expr:?}"),
        }
    }
}

#[test]
fn fuzz_safe_grands_nombres_sans_inf() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    for expr in ["99999!", "9^999999", "10^300*10^300", "170!*170!"] {
        budget(t0, max);
        assert_eq!(evaluer(expr), Err(ErreurCalc::Depassement), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = vec!["1"; 2000].join("+");
    budget(t0, max);

    assert_eq!(evaluer(&expr), Ok(Nombre::Entier(2000)));
}

#[test]
fn fuzz_safe_longue_chaine_de_signes() {
    // 1000 "-" collés : nombre pair => "+"
    let expr = format!("5{}3", "-".repeat(1000));
    assert_eq!(evaluer(&expr), Ok(Nombre::Entier(8)));
}
