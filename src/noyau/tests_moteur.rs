//! Tests moteur : propriétés de la pile RPN + comportement de `evaluer`.
//!
//! Notes :
//! - les binaires lisent (1er récupéré = droite, 2e = gauche)
//! - un opérateur sans assez d’opérandes => pas de résultat, pas d’erreur
//! - en cas d’échec, `evaluer` rend la tranche d’entrée telle quelle

use super::moteur::{evaluer, Moteur};
use super::operateurs::{Op, RegistreOps};

fn pousse(m: &mut Moteur, entrees: &[&str]) -> Option<f64> {
    let mut r = m.evaluate();
    for e in entrees {
        r = match e.parse::<f64>() {
            Ok(v) => m.push_operand(v),
            Err(_) => m.push_operator(e),
        };
    }
    r
}

fn calcule(entrees: &[&str]) -> Option<f64> {
    pousse(&mut Moteur::new(), entrees)
}

fn op(s: &str) -> Op {
    RegistreOps::new()
        .get(s)
        .unwrap_or_else(|| panic!("opérateur {s:?} absent du registre"))
}

/* ------------------------ Propriétés de base ------------------------ */

#[test]
fn moteur_neuf_sans_resultat() {
    let m = Moteur::new();
    assert!(m.is_empty());
    assert_eq!(m.evaluate(), None);
}

#[test]
fn lecture_idempotente() {
    let mut m = Moteur::new();
    pousse(&mut m, &["4", "5", "*", "2"]);
    let avant = m.len();

    let r1 = m.evaluate();
    let r2 = m.evaluate();
    assert_eq!(r1, r2);
    assert_eq!(r1, Some(2.0));
    assert_eq!(m.len(), avant);
}

#[test]
fn ordre_soustraction() {
    assert_eq!(calcule(&["8", "3", "-"]), Some(5.0));
    assert_eq!(calcule(&["3", "8", "-"]), Some(-5.0));
}

#[test]
fn ordre_division() {
    assert_eq!(calcule(&["10", "2", "/"]), Some(5.0));
    assert_eq!(calcule(&["2", "10", "/"]), Some(0.2));
}

#[test]
fn composition_unaire() {
    assert_eq!(calcule(&["16", "√"]), Some(4.0));
    assert_eq!(calcule(&["16", "√", "√"]), Some(2.0));
}

#[test]
fn expression_incomplete_puis_completee() {
    let mut m = Moteur::new();
    assert_eq!(m.push_operator("+"), None);
    assert_eq!(m.len(), 1);

    assert_eq!(m.push_operand(5.0), Some(5.0));
    // le sommet est un opérande : il est le résultat, le "+" du fond reste en attente
    assert_eq!(m.push_operand(3.0), Some(3.0));
    assert_eq!(m.push_operator("+"), Some(8.0));
    assert_eq!(m.len(), 4);

    let binding = [op("+"), Op::Operande(5.0), Op::Operande(3.0), op("+")];
    let (r, reste) = evaluer(&binding);
    assert_eq!(r, Some(8.0));
    assert!(matches!(reste, [Op::Binaire("+", _)]));
}

#[test]
fn symbole_inconnu_sans_effet() {
    let mut m = Moteur::new();
    assert_eq!(m.push_operand(7.0), Some(7.0));
    let avant = m.len();

    assert_eq!(m.push_operator("%"), Some(7.0));
    assert_eq!(m.len(), avant);
    assert_eq!(m.to_string(), "7");
}

#[test]
fn clear_remet_a_neuf() {
    let mut m = Moteur::new();
    pousse(&mut m, &["3", "4", "+", "√", "9"]);
    m.clear();

    assert!(m.is_empty());
    assert_eq!(m.evaluate(), None);

    let mut neuf = Moteur::new();
    for seq in [&["6"][..], &["2", "*"][..], &["-"][..]] {
        assert_eq!(pousse(&mut m, seq), pousse(&mut neuf, seq));
        assert_eq!(m.len(), neuf.len());
    }
}

#[test]
fn division_par_zero_suit_ieee754() {
    assert_eq!(calcule(&["1", "0", "/"]), Some(f64::INFINITY));
    assert_eq!(calcule(&["-1", "0", "/"]), Some(f64::NEG_INFINITY));
    assert!(calcule(&["0", "0", "/"]).is_some_and(f64::is_nan));
    assert!(calcule(&["-4", "√"]).is_some_and(f64::is_nan));
}

#[test]
fn expression_imbriquee() {
    // (3 + 5) * √16 - 2 = 30
    assert_eq!(calcule(&["3", "5", "+", "16", "√", "*", "2", "-"]), Some(30.0));
}

#[test]
fn operandes_en_trop_ignorees() {
    // le 1 sous l’expression n’est pas consommé, et pas signalé
    assert_eq!(calcule(&["1", "2", "3", "+"]), Some(5.0));
    assert_eq!(calcule(&["1", "2"]), Some(2.0));
}

#[test]
fn affichage_de_la_pile() {
    let mut m = Moteur::new();
    pousse(&mut m, &["8", "3", "-", "2.5", "√"]);
    assert_eq!(m.to_string(), "8 3 - 2.5 √");
    assert_eq!(m.len(), 5);
}

/* ------------------------ evaluer (fonction pure) ------------------------ */

#[test]
fn evaluer_vide() {
    let (r, reste) = evaluer(&[]);
    assert_eq!(r, None);
    assert!(reste.is_empty());
}

#[test]
fn evaluer_rend_le_reste_non_consomme() {
    let ops = [Op::Operande(1.0), Op::Operande(2.0), Op::Operande(3.0), op("+")];
    let (r, reste) = evaluer(&ops);
    assert_eq!(r, Some(5.0));
    assert_eq!(reste.len(), 1);
    assert!(matches!(reste[0], Op::Operande(v) if v == 1.0));
}

#[test]
fn evaluer_unaire_sans_operande_rend_tout() {
    let ops = [op("√")];
    let (r, reste) = evaluer(&ops);
    assert_eq!(r, None);
    assert_eq!(reste.len(), 1);
}

#[test]
fn evaluer_binaire_incomplet_rend_la_tranche_d_origine() {
    // "5 +" : le 5 est consommé comme 1er opérande, puis échec sur le 2e.
    // Le reste rendu est la tranche complète, pas [] ni [5].
    let ops = [Op::Operande(5.0), op("+")];
    let (r, reste) = evaluer(&ops);
    assert_eq!(r, None);
    assert_eq!(reste.len(), 2);
    assert!(std::ptr::eq(reste, &ops[..]));
}

#[test]
fn evaluer_echec_en_profondeur() {
    // "√ +" sous un 4 : le 4 suffit pour le 1er opérande de "+",
    // le 2e tombe sur "√" sans opérande.
    let ops = [op("√"), Op::Operande(4.0), op("+")];
    let (r, reste) = evaluer(&ops);
    assert_eq!(r, None);
    assert_eq!(reste.len(), 3);
}

#[test]
fn evaluer_ne_lit_que_la_fin() {
    // entrée incomplète au fond, expression complète au sommet
    let ops = [op("-"), Op::Operande(9.0), op("√")];
    let (r, reste) = evaluer(&ops);
    assert_eq!(r, Some(3.0));
    assert_eq!(reste.len(), 1);
}
