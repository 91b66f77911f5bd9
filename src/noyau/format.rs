// src/noyau/format.rs

/// Texte d’affichage d’un nombre : "5" plutôt que "5.0", sinon Display de Rust.
pub fn format_nombre(v: f64) -> String {
    // au-delà de 2^53 les entiers f64 restent entiers, mais "{:.0}" devient illisible
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        if v == 0.0 {
            // pas de "-0"
            return "0".to_string();
        }
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

/// Résultat du moteur pour l’affichage.
pub fn format_resultat(r: Option<f64>) -> String {
    match r {
        Some(v) => format_nombre(v),
        None => "indéfini".to_string(),
    }
}
