// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// ----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (état, saisie, aperçu, historique, vue)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod apercu;
pub mod etat;
pub mod historique;
pub mod saisie;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use saisie::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = AC (remise à zéro de l’entrée)
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.touche(Touche::AC);
        }

        // Aperçu : on applique la dernière réponse arrivée, on repeint tant qu’une est en vol
        self.apercu.recevoir();
        if self.apercu.en_attente() {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
