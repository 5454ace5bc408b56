// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Entrée filtrée (seulement chiffres, point et opérateurs)
// - Gros boutons, focus redonné à l’entrée après clic (focus_entree)
// - Fenêtre d’aide (priorités, formes acceptées, raccourcis)
//
// Note :
// - Les raccourcis clavier globaux (Enter, a, e, r, Échap) sont dans app.rs.

use eframe::egui;

use super::etat::AppCalc;

/// Taille du texte de l’entrée.
const TAILLE_ENTREE: f32 = 35.0;
/// Taille du texte de l’historique.
const TAILLE_HISTORIQUE: f32 = 20.0;
/// Taille d’une touche du pavé.
const TAILLE_TOUCHE: [f32; 2] = [96.0, 56.0];

const TEXTE_AIDE: &str = "\
Les calculs s’écrivent sous forme mathématique usuelle.
Exemple, pour ajouter 1 et 2 : 1+2
Pour calculer, cliquez sur = ou appuyez sur Entrée.

Ordre de calcul :
    1. factorielle (!)
    2. racine (√), puissance (^)
    3. multiplication (*), division (/), modulo (% | touche MOD)
    4. addition (+), soustraction (-)
Dans un même niveau, le calcul se fait de gauche à droite.

Formes acceptées :
    - binaires (+, -, *, /, ^, √, %) : nombre opérateur nombre (ex. 5+3, 3√27)
    - unaire (!) : nombre opérateur (ex. 5!)
    - racine carrée : √x

Touches spéciales :
    ANS   insère le résultat du dernier calcul
    MOD   insère l’opérateur modulo %
    AC    efface toute l’entrée
    DEL   efface le dernier caractère

Raccourcis clavier :
    ANS   a
    AC    e ou Échap
    √     r
    =     Entrée";

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            if ui.button("Aide").clicked() {
                self.aide_ouverte = !self.aide_ouverte;
            }
        });

        self.ui_entree(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        self.ui_aide(ui.ctx());
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.label(egui::RichText::new(&self.historique).size(TAILLE_HISTORIQUE));
        });

        // Le champ édite une copie : saisie_clavier décide de ce qui est gardé.
        let mut tampon = self.entree.clone();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut tampon)
                .desired_width(ui.available_width())
                .horizontal_align(egui::Align::RIGHT)
                .font(egui::FontId::proportional(TAILLE_ENTREE))
                .id_salt("entree_edit"),
        );
        if resp.changed() {
            self.saisie_clavier(tampon);
        }

        // Si on a cliqué un bouton (pavé / ANS / DEL / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_gazorpazorp")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                let lignes: [[Touche; 4]; 6] = [
                    [Touche::Ans, Touche::Op('%', "MOD"), Touche::Ac, Touche::Del],
                    [
                        Touche::Op('^', "^"),
                        Touche::Racine,
                        Touche::Op('!', "!"),
                        Touche::Op('/', "/"),
                    ],
                    [
                        Touche::Chiffre("7"),
                        Touche::Chiffre("8"),
                        Touche::Chiffre("9"),
                        Touche::Op('*', "*"),
                    ],
                    [
                        Touche::Chiffre("4"),
                        Touche::Chiffre("5"),
                        Touche::Chiffre("6"),
                        Touche::Op('-', "-"),
                    ],
                    [
                        Touche::Chiffre("1"),
                        Touche::Chiffre("2"),
                        Touche::Chiffre("3"),
                        Touche::Op('+', "+"),
                    ],
                    [
                        Touche::Chiffre("0"),
                        Touche::Vide,
                        Touche::Chiffre("."),
                        Touche::Egal,
                    ],
                ];

                for ligne in lignes {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let label = match touche {
            Touche::Chiffre(c) => c,
            Touche::Op(_, label) => label,
            Touche::Racine => "√",
            Touche::Ans => "ANS",
            Touche::Del => "DEL",
            Touche::Ac => "AC",
            Touche::Egal => "=",
            Touche::Vide => {
                ui.label("");
                return;
            }
        };

        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Chiffre(c) => self.saisir_nombre(c),
            // √ se comporte comme un chiffre : il démarre une nouvelle expression
            Touche::Racine => self.saisir_nombre("√"),
            Touche::Op(op, _) => self.saisir_operateur(op),
            Touche::Ans => self.inserer_ans(),
            Touche::Del => self.effacer_dernier(),
            Touche::Ac => self.effacer_tout(),
            Touche::Egal => self.evaluer_entree(),
            Touche::Vide => {}
        }
        self.focus_entree = true;
    }

    fn ui_aide(&mut self, ctx: &egui::Context) {
        let mut ouverte = self.aide_ouverte;
        egui::Window::new("Aide")
            .open(&mut ouverte)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(TEXTE_AIDE).size(15.0));
            });
        self.aide_ouverte = ouverte;
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(&'static str),
    Op(char, &'static str),
    Racine,
    Ans,
    Del,
    Ac,
    Egal,
    Vide,
}
