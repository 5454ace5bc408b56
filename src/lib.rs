//! Calculatrice Gazorpazorp
//!
//! - `noyau` : évaluation pure d’une expression plate (`evaluer`)
//! - `app`   : état de session + interface egui (natif + web)

pub mod app;
pub mod noyau;
