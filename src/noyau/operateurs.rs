// src/noyau/operateurs.rs
//
// Entrées de pile + registre des opérateurs connus.
//
// Règle d’ordre (binaires) :
// - la pile est lue de la fin vers le début
// - 1er opérande récupéré = opérande DROIT, 2e récupéré = opérande GAUCHE
// - donc "8 3 -" => f(3, 8) = 8 - 3

use std::collections::HashMap;
use std::fmt;

use super::format::format_nombre;

/// Une entrée de pile : opérande ou référence d’opérateur.
#[derive(Clone, Copy)]
pub enum Op {
    Operande(f64),
    Unaire(&'static str, fn(f64) -> f64),
    /// `fn(premier_recupere, second_recupere)`
    Binaire(&'static str, fn(f64, f64) -> f64),
}

impl Op {
    /// Texte lisible : valeur de l’opérande ou glyphe de l’opérateur.
    pub fn symbole(&self) -> String {
        match self {
            Op::Operande(v) => format_nombre(*v),
            Op::Unaire(s, _) | Op::Binaire(s, _) => (*s).to_string(),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbole())
    }
}

// Les pointeurs de fonction n’ont pas de Debug lisible : on montre le symbole.
impl fmt::Debug for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Operande(v) => write!(f, "Operande({v})"),
            Op::Unaire(s, _) => write!(f, "Unaire({s})"),
            Op::Binaire(s, _) => write!(f, "Binaire({s})"),
        }
    }
}

/// Table symbole -> opérateur, remplie une fois à la construction.
#[derive(Clone, Debug)]
pub struct RegistreOps {
    ops: HashMap<&'static str, Op>,
    ordre: Vec<&'static str>,
}

impl Default for RegistreOps {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistreOps {
    pub fn new() -> Self {
        let mut r = Self {
            ops: HashMap::new(),
            ordre: Vec::new(),
        };

        r.inscrire(Op::Binaire("*", |a, b| a * b));
        r.inscrire(Op::Binaire("/", |a, b| b / a));
        r.inscrire(Op::Binaire("-", |a, b| b - a));
        r.inscrire(Op::Binaire("+", |a, b| a + b));
        r.inscrire(Op::Unaire("√", f64::sqrt));

        r
    }

    fn inscrire(&mut self, op: Op) {
        let s = match op {
            Op::Unaire(s, _) | Op::Binaire(s, _) => s,
            // le registre ne contient que des opérateurs
            Op::Operande(_) => return,
        };
        if self.ops.insert(s, op).is_none() {
            self.ordre.push(s);
        }
    }

    /// Recherche exacte ; `None` si le symbole est inconnu.
    pub fn get(&self, symbole: &str) -> Option<Op> {
        self.ops.get(symbole).copied()
    }

    /// Symboles connus, dans l’ordre d’inscription.
    pub fn symboles(&self) -> &[&'static str] {
        &self.ordre
    }
}
