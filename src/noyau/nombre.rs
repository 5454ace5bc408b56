// src/noyau/nombre.rs
//
// Type numérique étiqueté : entier OU décimal, décidé une fois à la lecture.
//
// Règles de promotion / rétrogradation :
// - un décimal dont la partie fractionnaire est exactement nulle (et qui tient
//   dans i64) redevient entier ;
// - un entier reste entier tant que l’opération est exacte (sinon f64) ;
// - normaliser deux fois ne change rien.

use std::fmt;

use num_traits::ToPrimitive;

use super::erreur::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nombre {
    Entier(i64),
    Decimal(f64),
}

impl Nombre {
    /// Lit un littéral (espaces de bord ignorés).
    pub fn depuis_litteral(s: &str) -> Result<Nombre, ErreurCalc> {
        let t = s.trim();

        // entier exact d’abord (évite l’arrondi f64 sur les grands entiers)
        if let Ok(i) = t.parse::<i64>() {
            return Ok(Nombre::Entier(i));
        }

        match t.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Nombre::depuis_f64(x)),
            _ => Err(ErreurCalc::NombreInvalide(s.to_string())),
        }
    }

    /// Flottant -> entier si partie fractionnaire nulle, sinon décimal.
    pub fn depuis_f64(x: f64) -> Nombre {
        if x.is_finite() && x.fract() == 0.0 {
            if let Some(i) = x.to_i64() {
                return Nombre::Entier(i);
            }
        }
        Nombre::Decimal(x)
    }

    pub fn normalise(self) -> Nombre {
        match self {
            Nombre::Entier(_) => self,
            Nombre::Decimal(x) => Nombre::depuis_f64(x),
        }
    }

    pub fn en_f64(self) -> f64 {
        match self {
            Nombre::Entier(i) => i as f64,
            Nombre::Decimal(x) => x,
        }
    }

    /// Valeur entière, après normalisation (6.0 compte comme 6).
    pub fn en_entier(self) -> Option<i64> {
        match self.normalise() {
            Nombre::Entier(i) => Some(i),
            Nombre::Decimal(_) => None,
        }
    }

    pub fn est_entier(self) -> bool {
        self.en_entier().is_some()
    }

    pub fn est_zero(self) -> bool {
        self.en_f64() == 0.0
    }

    pub fn est_negatif(self) -> bool {
        self.en_f64() < 0.0
    }

    pub fn neg(self) -> Nombre {
        match self {
            Nombre::Entier(i) => match i.checked_neg() {
                Some(v) => Nombre::Entier(v),
                None => Nombre::Decimal(-(i as f64)),
            },
            Nombre::Decimal(x) => Nombre::Decimal(-x),
        }
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nombre::Entier(i) => write!(f, "{i}"),
            Nombre::Decimal(x) => write!(f, "{x}"),
        }
    }
}
