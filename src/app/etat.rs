//! src/app/etat.rs
//!
//! État UI (sans vue) = contexte de session de la calculatrice.
//!
//! Rôle : contenir l’entrée, la ligne d’historique, le dernier résultat (ANS)
//! et l’indicateur « résultat affiché », et offrir les actions des touches
//! (chiffre, opérateur, ANS, DEL, AC, =) sans logique d’affichage.
//!
//! Contrats :
//! - Le noyau ne voit jamais cet état : `evaluer` reste une fonction pure.
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{evaluer, Nombre};

/// Caractères acceptés dans l’entrée (tout le reste est ignoré à la saisie).
pub const CARACTERES_AUTORISES: &str = "0123456789./*-+^%!√";

/// Caractères qui, tapés juste après un résultat, remplacent l’entrée.
const CARACTERES_NOMBRE: &str = "0123456789.";

pub fn caractere_autorise(c: char) -> bool {
    CARACTERES_AUTORISES.contains(c)
}

fn caractere_nombre(c: char) -> bool {
    CARACTERES_NOMBRE.contains(c)
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur (ou résultat / message d’erreur après "=") ---
    pub entree: String,

    // --- "expr = " de la dernière évaluation ---
    pub historique: String,

    // --- session ---
    pub dernier_resultat: Option<Nombre>, // ANS
    pub resultat_affiche: bool,

    // --- UX ---
    pub aide_ouverte: bool,
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            historique: String::new(),
            dernier_resultat: None,
            resultat_affiche: false,
            aide_ouverte: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffre, point, √ ou ANS : remplace un résultat affiché au lieu de s’y ajouter.
    pub fn saisir_nombre(&mut self, texte: &str) {
        if self.resultat_affiche {
            self.effacer_tout();
        }
        self.entree.push_str(texte);
        self.resultat_affiche = false;
        self.focus_entree = true;
    }

    /// Opérateur : s’ajoute toujours (permet d’enchaîner sur un résultat).
    pub fn saisir_operateur(&mut self, op: char) {
        self.entree.push(op);
        self.resultat_affiche = false;
        self.focus_entree = true;
    }

    /// ANS : insère le dernier résultat valide (rien si aucun).
    pub fn inserer_ans(&mut self) {
        if let Some(n) = self.dernier_resultat {
            self.saisir_nombre(&n.to_string());
        }
    }

    /// DEL : retire le dernier caractère ; sur un résultat affiché, efface tout.
    pub fn effacer_dernier(&mut self) {
        if self.resultat_affiche {
            self.effacer_tout();
            return;
        }
        self.entree.pop();
        self.focus_entree = true;
    }

    /// AC : efface l’entrée et l’historique (ANS est conservé).
    pub fn effacer_tout(&mut self) {
        self.entree.clear();
        self.historique.clear();
        self.resultat_affiche = false;
        self.focus_entree = true;
    }

    /// "=" : évalue l’entrée et la remplace par le résultat ou le message d’erreur.
    /// Une entrée vide est ignorée.
    pub fn evaluer_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        let expr = std::mem::take(&mut self.entree);
        match evaluer(&expr) {
            Ok(n) => {
                self.dernier_resultat = Some(n);
                self.entree = n.to_string();
            }
            Err(e) => {
                log::debug!("évaluation refusée: {expr:?}: {e}");
                self.entree = e.to_string();
            }
        }

        self.historique = format!("{expr} = ");
        self.resultat_affiche = true;
        self.focus_entree = true;
    }

    /* ------------------------ Saisie clavier ------------------------ */

    /// Applique le texte produit par le champ d’entrée après une frappe.
    ///
    /// - ajout en fin : seuls les caractères autorisés sont gardés ; un chiffre
    ///   tapé sur un résultat affiché remplace l’entrée ;
    /// - suppression : acceptée telle quelle ;
    /// - autre édition : acceptée seulement si tout le texte est autorisé.
    pub fn saisie_clavier(&mut self, nouveau: String) {
        if nouveau == self.entree {
            return;
        }

        if let Some(ajout) = nouveau.strip_prefix(self.entree.as_str()) {
            let ajout: String = ajout.chars().filter(|c| caractere_autorise(*c)).collect();
            match ajout.chars().last() {
                None => {}
                Some(c) if self.resultat_affiche && caractere_nombre(c) => {
                    self.historique.clear();
                    self.entree = ajout;
                    self.resultat_affiche = false;
                }
                Some(_) => {
                    self.entree.push_str(&ajout);
                    self.resultat_affiche = false;
                }
            }
            return;
        }

        if nouveau.chars().count() < self.entree.chars().count() {
            self.entree = nouveau;
            return;
        }

        if nouveau.chars().all(caractere_autorise) {
            self.entree = nouveau;
            self.resultat_affiche = false;
        }
    }
}
