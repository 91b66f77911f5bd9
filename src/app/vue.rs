// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé RPN : chiffres, ⏎, opérateurs du registre, C, DEL
// - Clavier : chiffres/opérateurs connus tapés, Espace/Enter empile, Backspace efface la saisie
//
// Note :
// - Les touches opérateur viennent du registre : pas de liste en dur ici.

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice RPN");
        ui.add_space(6.0);

        self.clavier(ui);
        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Pile ({}) :", self.profondeur()));
        let pile = if self.pile_vide() {
            "(vide)".to_string()
        } else {
            self.historique()
        };
        Self::champ_monospace(ui, "pile_out", &pile);

        ui.add_space(6.0);

        ui.label("Résultat :");
        let texte = if self.saisie.is_empty() {
            self.affichage.clone()
        } else {
            // saisie en cours : pas encore empilée
            format!("{}_", self.saisie)
        };
        Self::champ_monospace(ui, "resultat_out", &texte);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let symboles = self.symboles();
        let mut ops = symboles.iter();

        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in [['7', '8', '9'], ['4', '5', '6'], ['1', '2', '3']] {
                    for c in rangee {
                        self.bouton_chiffre(ui, c);
                    }
                    self.bouton_op(ui, ops.next());
                    ui.end_row();
                }

                self.bouton_chiffre(ui, '0');
                self.bouton_chiffre(ui, '.');
                if Self::bouton(ui, "⏎", "Empile la saisie").clicked() {
                    self.entree();
                }
                self.bouton_op(ui, ops.next());
                ui.end_row();

                if Self::bouton(ui, "C", "Vide la pile").clicked() {
                    self.clear_tout();
                }
                if Self::bouton(ui, "DEL", "Efface le dernier chiffre").clicked() {
                    self.backspace_saisie();
                }
                // opérateurs restants (registre plus grand que la colonne)
                for _ in 0..2 {
                    self.bouton_op(ui, ops.next());
                }
                ui.end_row();
            });
    }

    /// Saisie clavier (natif + web avec clavier physique).
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let events = ui.input(|i| i.events.clone());
        for ev in events {
            match ev {
                egui::Event::Text(t) => {
                    for c in t.chars() {
                        self.appui_texte(c);
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.entree(),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.backspace_saisie(),
                _ => {}
            }
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        if Self::bouton(ui, &c.to_string(), "").clicked() {
            self.appui_chiffre(c);
        }
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, symbole: Option<&&'static str>) {
        match symbole {
            Some(s) => {
                if Self::bouton(ui, s, "").clicked() {
                    self.operation(s);
                }
            }
            None => {
                ui.label("");
            }
        }
    }

    fn bouton(ui: &mut egui::Ui, label: &str, tip: &str) -> egui::Response {
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if tip.is_empty() {
            resp
        } else {
            resp.on_hover_text(tip)
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
