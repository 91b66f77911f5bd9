//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir la saisie en cours, le dernier résultat affiché, l’erreur,
//! et le moteur RPN. Les actions “boutons” traduisent les appuis en appels au moteur.
//!
//! Contrats :
//! - Aucune évaluation ici : le moteur calcule, l’état affiche.
//! - Une opération avec une saisie en cours l’empile d’abord (comme ⏎).
//! - Garde-fou : longueur de saisie bornée.

use crate::noyau::{format_resultat, Moteur};

/// Garde-fou : longueur max d’un opérande tapé.
const SAISIE_MAX: usize = 32;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub saisie: String, // opérande en cours de frappe (pas encore empilé)

    // --- sorties ---
    pub affichage: String, // résultat courant du moteur
    pub erreur: String,    // message d’erreur (saisie invalide)

    moteur: Moteur,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            saisie: String::new(),
            affichage: format_resultat(None),
            erreur: String::new(),
            moteur: Moteur::new(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffre ou point décimal.
    pub fn appui_chiffre(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }
        if c == '.' && self.saisie.contains('.') {
            return;
        }
        if self.saisie.len() >= SAISIE_MAX {
            self.set_erreur(format!("saisie limitée à {SAISIE_MAX} caractères"));
            return;
        }
        self.erreur.clear();
        self.saisie.push(c);
    }

    /// Caractère tapé au clavier : chiffre, opérateur connu, ou espace (comme ⏎).
    /// Tout autre caractère est ignoré (la saisie en cours n’est pas empilée).
    pub fn appui_texte(&mut self, c: char) {
        match c {
            '0'..='9' | '.' => self.appui_chiffre(c),
            ' ' => self.entree(),
            _ => {
                let mut tampon = [0u8; 4];
                let symbole: &str = c.encode_utf8(&mut tampon);
                if self.moteur.registre().get(symbole).is_some() {
                    self.operation(symbole);
                }
            }
        }
    }

    /// ⏎ : empile la saisie en cours (si elle existe).
    pub fn entree(&mut self) {
        match lire_saisie(&self.saisie) {
            Ok(Some(v)) => {
                self.saisie.clear();
                let r = self.moteur.push_operand(v);
                self.set_resultat(r);
            }
            Ok(None) => {}
            Err(msg) => self.set_erreur(msg),
        }
    }

    /// Opérateur : saisie en cours empilée d’abord, puis l’opérateur.
    pub fn operation(&mut self, symbole: &str) {
        if !self.saisie.is_empty() {
            self.entree();
            if !self.erreur.is_empty() {
                return;
            }
        }
        let r = self.moteur.push_operator(symbole);
        self.set_resultat(r);
    }

    /// DEL : retire le dernier caractère de la saisie (la pile n’est jamais touchée).
    pub fn backspace_saisie(&mut self) {
        self.saisie.pop();
        self.erreur.clear();
    }

    /// C : remise à zéro totale (pile + saisie + affichage).
    pub fn clear_tout(&mut self) {
        self.moteur.clear();
        self.saisie.clear();
        self.erreur.clear();
        self.affichage = format_resultat(self.moteur.evaluate());
    }

    /* ------------------------ Lecture ------------------------ */

    /// Symboles des touches opérateur (ordre du registre).
    pub fn symboles(&self) -> Vec<&'static str> {
        self.moteur.registre().symboles().to_vec()
    }

    /// Historique : la pile telle qu’empilée ("8 3 -").
    pub fn historique(&self) -> String {
        self.moteur.to_string()
    }

    pub fn profondeur(&self) -> usize {
        self.moteur.len()
    }

    pub fn pile_vide(&self) -> bool {
        self.moteur.is_empty()
    }

    /* ------------------------ Utilitaires ------------------------ */

    fn set_resultat(&mut self, r: Option<f64>) {
        self.erreur.clear();
        self.affichage = format_resultat(r);
    }

    /// On CONSERVE l’affichage (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
    }
}

/// Saisie -> nombre. Vide => `Ok(None)`.
fn lire_saisie(s: &str) -> Result<Option<f64>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    // "." seul n’est pas un nombre, "5." et ".5" le sont
    s.parse::<f64>()
        .map(Some)
        .map_err(|_| format!("nombre invalide : {s:?}"))
}
