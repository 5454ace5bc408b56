// src/app.rs
//
// Calculatrice Gazorpazorp — module App (racine)
// ---------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Raccourcis clavier globaux

pub mod etat;
pub mod vue;

// Ré-export pratique : `use calculatrice_gazorpazorp::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Raccourcis globaux : actifs même si le champ d’entrée a le focus
/// (les lettres correspondantes sont filtrées de l’entrée).
#[derive(Clone, Copy, Debug, Default)]
struct Raccourcis {
    egal: bool,
    ans: bool,
    effacer: bool,
    racine: bool,
}

impl Raccourcis {
    fn lire(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            egal: i.key_pressed(egui::Key::Enter),
            ans: i.key_pressed(egui::Key::A),
            effacer: i.key_pressed(egui::Key::E) || i.key_pressed(egui::Key::Escape),
            racine: i.key_pressed(egui::Key::R),
        })
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let r = Raccourcis::lire(ctx);
        if r.egal {
            self.evaluer_entree();
        }
        if r.ans {
            self.inserer_ans();
        }
        if r.effacer {
            self.effacer_tout();
        }
        if r.racine {
            self.saisir_nombre("√");
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
