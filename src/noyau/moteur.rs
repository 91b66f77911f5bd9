//! Noyau — moteur RPN (pile + évaluation récursive)
//!
//! Chaque push est suivi d’une ré-évaluation complète de la pile.
//! L’évaluation ne modifie jamais la pile : elle lit des sous-tranches.
//!
//! Accès exclusif supposé (&mut self) : aucun verrou interne.

use std::fmt;

use log::{debug, trace};

use super::format::format_resultat;
use super::operateurs::{Op, RegistreOps};

/// Évalue `ops` en consommant depuis la fin.
///
/// Retourne (résultat, reste non consommé). Le reste est une sous-tranche de `ops`.
///
/// Si un opérateur manque d’opérandes, le reste retourné est `ops` tout entier
/// (et non ce qui restait au moment de l’échec).
///
/// Récursion : profondeur proportionnelle à la longueur de la pile. Vers
/// 60 000 entrées, un thread de 2 Mo déborde (abandon du processus).
pub fn evaluer(ops: &[Op]) -> (Option<f64>, &[Op]) {
    let Some((op, reste)) = ops.split_last() else {
        return (None, ops);
    };
    trace!("évaluation de {} (entrée {op})", PileTxt(ops));

    match *op {
        Op::Operande(v) => return (Some(v), reste),

        Op::Unaire(_, f) => {
            if let (Some(x), reste_x) = evaluer(reste) {
                return (Some(f(x)), reste_x);
            }
        }

        Op::Binaire(_, f) => {
            if let (Some(a), reste_a) = evaluer(reste) {
                if let (Some(b), reste_b) = evaluer(reste_a) {
                    return (Some(f(a, b)), reste_b);
                }
            }
        }
    }

    (None, ops)
}

/// Moteur : pile d’entrées + registre des opérateurs.
#[derive(Clone, Debug, Default)]
pub struct Moteur {
    pile: Vec<Op>,
    registre: RegistreOps,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vide la pile.
    pub fn clear(&mut self) {
        self.pile.clear();
    }

    /// Empile un opérande puis ré-évalue.
    pub fn push_operand(&mut self, v: f64) -> Option<f64> {
        self.pile.push(Op::Operande(v));
        self.evaluate()
    }

    /// Empile l’opérateur `symbole` s’il est connu (sinon rien), puis ré-évalue.
    pub fn push_operator(&mut self, symbole: &str) -> Option<f64> {
        match self.registre.get(symbole) {
            Some(op) => self.pile.push(op),
            None => debug!("symbole inconnu ignoré : {symbole:?}"),
        }
        self.evaluate()
    }

    /// Résultat courant de la pile (lecture seule).
    pub fn evaluate(&self) -> Option<f64> {
        let (resultat, reste) = evaluer(&self.pile);
        debug!(
            "{self} = {} (reste : [{}])",
            format_resultat(resultat),
            PileTxt(reste)
        );
        resultat
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn registre(&self) -> &RegistreOps {
        &self.registre
    }
}

/// "8 3 -"
impl fmt::Display for Moteur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PileTxt(&self.pile))
    }
}

struct PileTxt<'a>(&'a [Op]);

impl fmt::Display for PileTxt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}
