// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter valide (quand le champ est focus), toute édition relance l’aperçu
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Pavé scientifique + pavé de base, bascule Deg/Rad
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::AppCalc;
use super::saisie::Touche;

/// Pavé scientifique (4 colonnes).
const PAVE_SCIENTIFIQUE: [[Touche; 4]; 7] = [
    [Touche::Sin, Touche::Cos, Touche::Tan, Touche::Pi],
    [Touche::Asin, Touche::Acos, Touche::Atan, Touche::Euler],
    [Touche::Sinh, Touche::Cosh, Touche::Tanh, Touche::Abs],
    [Touche::Asinh, Touche::Acosh, Touche::Atanh, Touche::Fact],
    [Touche::Sqrt, Touche::Cbrt, Touche::Carre, Touche::Cube],
    [Touche::Puissance, Touche::DeuxPuissance, Touche::Exp, Touche::Inverse],
    [Touche::Log, Touche::Ln, Touche::ParG, Touche::ParD],
];

/// Pavé de base (4 colonnes).
const PAVE_BASE: [[Touche; 4]; 5] = [
    [Touche::AC, Touche::C, Touche::Parentheses, Touche::Divise],
    [Touche::Chiffre(7), Touche::Chiffre(8), Touche::Chiffre(9), Touche::Fois],
    [Touche::Chiffre(4), Touche::Chiffre(5), Touche::Chiffre(6), Touche::Moins],
    [Touche::Chiffre(1), Touche::Chiffre(2), Touche::Chiffre(3), Touche::Plus],
    [Touche::Signe, Touche::Chiffre(0), Touche::Point, Touche::Pourcent],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_paves(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Entrée :");

            // Deg/Rad : le libellé montre le mode ACTIF
            let mode = if self.degres { "Deg" } else { "Rad" };
            let resp = ui
                .add_sized([56.0, 24.0], egui::Button::new(mode))
                .on_hover_text("Unité d’angle pour sin/cos/tan et leurs inverses");
            if resp.clicked() {
                self.basculer_angle();
            }
        });

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2^3^2, sin(90), 5!, 50%, asin(1)")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        if resp.changed() {
            self.entree_modifiee();
        }

        // --- Clavier : Enter valide (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.touche(Touche::Egal);
        }

        ui.add_space(6.0);

        // Expression “jolie” (glyphes) + aperçu en direct
        Self::champ_monospace(ui, "expression_out", &self.expression_affichee(), 1);

        let apercu = self.apercu.texte();
        if self.resultat_affiche() || apercu.is_empty() {
            ui.monospace(" ");
        } else {
            ui.monospace(format!("= {apercu}"));
        }
    }

    fn ui_paves(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_top(|ui| {
            self.ui_grille(ui, "pave_scientifique", &PAVE_SCIENTIFIQUE);
            ui.separator();
            ui.vertical(|ui| {
                self.ui_grille(ui, "pave_base", &PAVE_BASE);
                ui.add_space(6.0);
                self.bouton_touche(ui, Touche::Egal, [4.0 * 46.0 + 18.0, 32.0]);
            });
        });
    }

    fn ui_grille<const N: usize>(&mut self, ui: &mut egui::Ui, id: &str, pave: &[[Touche; 4]; N]) {
        egui::Grid::new(id)
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in pave {
                    for t in ligne {
                        self.bouton_touche(ui, *t, [46.0, 28.0]);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, t: Touche, taille: [f32; 2]) {
        let resp = ui.add_sized(taille, egui::Button::new(t.libelle()));
        if resp.clicked() {
            self.touche(t);
            self.focus_entree = true;
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let titre = format!("Historique ({})", self.historique.len());
        egui::CollapsingHeader::new(titre)
            .id_salt("historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("aucun calcul");
                    return;
                }

                for e in self.historique.entrees() {
                    ui.add_space(4.0);
                    ui.small(e.type_calcul.libelle());
                    ui.monospace(format!("{} = {}", e.expression, e.resultat));
                }

                ui.add_space(6.0);
                if ui.button("Vider l’historique").clicked() {
                    self.historique.vider();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}
