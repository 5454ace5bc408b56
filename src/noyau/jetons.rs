// src/noyau/jetons.rs

use std::fmt;

/// Opérateurs reconnus : un seul caractère chacun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Fact,   // !
    Caret,  // ^
    Racine, // √
    Star,   // *
    Slash,  // /
    Modulo, // %
    Plus,
    Minus,
}

impl Op {
    /// Reconnaît un opérateur (correspondance exacte du caractère).
    pub fn depuis_char(c: char) -> Option<Op> {
        match c {
            '!' => Some(Op::Fact),
            '^' => Some(Op::Caret),
            '√' => Some(Op::Racine),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '%' => Some(Op::Modulo),
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Fact => '!',
            Op::Caret => '^',
            Op::Racine => '√',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Modulo => '%',
            Op::Plus => '+',
            Op::Minus => '-',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Littéral brut, sans signe, pas encore converti.
    Nombre(String),
    Op(Op),
}

/// Tokenize une chaîne en jetons.
///
/// Tout caractère qui n’est pas un opérateur s’accumule dans le littéral courant
/// (aucune validation ici : un littéral invalide échouera à la conversion).
/// Deux opérateurs consécutifs ne produisent pas de littéral vide entre eux.
pub fn tokenize(s: &str) -> Vec<Jeton> {
    let mut out = Vec::new();
    let mut litteral = String::new();

    for c in s.chars() {
        match Op::depuis_char(c) {
            Some(op) => {
                if !litteral.is_empty() {
                    out.push(Jeton::Nombre(std::mem::take(&mut litteral)));
                }
                out.push(Jeton::Op(op));
            }
            None => litteral.push(c),
        }
    }

    if !litteral.is_empty() {
        out.push(Jeton::Nombre(litteral));
    }

    out
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| match j {
            Jeton::Nombre(s) => s.clone(),
            Jeton::Op(op) => op.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
