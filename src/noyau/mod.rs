//! Noyau RPN
//!
//! Organisation interne :
//! - operateurs.rs : entrées de pile (Op) + registre des opérateurs
//! - moteur.rs     : pile + évaluation récursive depuis la fin
//! - format.rs     : texte d’affichage des nombres / résultats

pub mod format;
pub mod moteur;
pub mod operateurs;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use format::format_resultat;
pub use moteur::Moteur;
