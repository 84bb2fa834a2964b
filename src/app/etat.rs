//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, aperçu, mode d’angle, historique, démarche)
//! et traduire les touches en éditions de l’entrée.
//!
//! Contrats :
//! - Chaque édition relance l’aperçu (le dernier ticket gagne, voir apercu.rs).
//! - "=" ne touche à l’affichage qu’en cas de succès ; sinon rien ne bouge.
//! - Après "=", l’entrée contient le résultat : un chiffre repart de zéro, une fonction
//!   l’enveloppe, le reste continue le calcul.

use crate::noyau::format::{formater_affichage, resultat_pour_expression, ERREUR_AFFICHAGE};
use crate::noyau::{self, DemarcheNoyau};

use super::apercu::Apercu;
use super::historique::{EntreeHistorique, Historique, TypeCalcul};
use super::saisie::{self, Touche};

/// Mode d’angle au démarrage.
const DEGRES_DEFAUT: bool = true;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

impl From<DemarcheNoyau> for Demarche {
    fn from(d: DemarcheNoyau) -> Self {
        Self {
            jetons: d.jetons,
            rpn: d.rpn,
        }
    }
}

#[derive(Debug)]
pub struct AppCalc {
    // --- entrée utilisateur (ASCII, celle donnée au noyau) ---
    pub entree: String,

    // --- sorties ---
    pub apercu: Apercu, // résultat en direct
    pub historique: Historique,
    pub demarche: Demarche, // dernier "=" réussi

    // --- paramètres ---
    pub degres: bool,

    // --- UX ---
    // true juste après "=" : l’entrée contient le résultat
    resultat_affiche: bool,
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            apercu: Apercu::default(),
            historique: Historique::default(),
            demarche: Demarche::default(),
            degres: DEGRES_DEFAUT,
            resultat_affiche: false,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Touches ------------------------ */

    pub fn touche(&mut self, t: Touche) {
        // AC : remise à zéro immédiate, quel que soit l’état
        if t == Touche::AC {
            self.entree.clear();
            self.resultat_affiche = false;
            self.reevaluer();
            return;
        }

        // Résultat affiché : un chiffre repart de zéro, une fonction enveloppe le résultat
        if self.resultat_affiche && t != Touche::Egal {
            self.resultat_affiche = false;

            if t.est_chiffre() {
                self.entree = t.texte().to_string();
                self.reevaluer();
                return;
            }
            if t.est_fonction() {
                self.entree = format!("{}{}", t.texte(), self.entree);
                self.reevaluer();
                return;
            }
            // sinon : on continue le calcul avec le résultat
        }

        match t {
            Touche::C => saisie::effacer_dernier(&mut self.entree),
            Touche::Egal => {
                self.valider();
                return;
            }
            Touche::Signe => saisie::basculer_signe(&mut self.entree),
            Touche::Inverse => saisie::inverser(&mut self.entree),
            Touche::Fact => saisie::factorielle(&mut self.entree),
            Touche::Parentheses => saisie::parenthese(&mut self.entree),
            _ => saisie::ajouter(&mut self.entree, t.texte()),
        }

        self.reevaluer();
    }

    /// Entrée éditée au clavier (TextEdit).
    pub fn entree_modifiee(&mut self) {
        self.resultat_affiche = false;
        self.reevaluer();
    }

    pub fn basculer_angle(&mut self) {
        self.degres = !self.degres;
        self.reevaluer();
    }

    pub fn expression_affichee(&self) -> String {
        saisie::expression_affichee(&self.entree)
    }

    pub fn resultat_affiche(&self) -> bool {
        self.resultat_affiche
    }

    /* ------------------------ Noyau ------------------------ */

    fn reevaluer(&mut self) {
        self.apercu.soumettre(&self.entree, self.degres);
        self.focus_entree = true;
    }

    /// "=" : ferme les parenthèses, évalue, historise, réinjecte le résultat.
    ///
    /// Choix UX :
    /// - Erreur de syntaxe / d’évaluation : on CONSERVE l’écran tel quel.
    /// - Résultat NaN / ±Infinity : l’aperçu montre déjà "Error", l’entrée reste modifiable.
    pub fn valider(&mut self) {
        let expression = saisie::fermer_parentheses(&self.entree);

        let v = match noyau::evaluate(&expression, self.degres) {
            Ok(v) => v,
            Err(e) => {
                let etage = if e.est_syntaxe() { "syntaxe" } else { "évaluation" };
                log::debug!("\"=\" ignoré ({etage}, {}) pour {expression:?}: {e}", e.code());
                self.focus_entree = true;
                return;
            }
        };

        let affichage = formater_affichage(v);
        if affichage == ERREUR_AFFICHAGE {
            log::debug!("\"=\" sans résultat fini pour {expression:?}");
            self.focus_entree = true;
            return;
        }

        if !expression.trim().is_empty() {
            self.historique.ajouter(EntreeHistorique {
                type_calcul: TypeCalcul::depuis_expression(&expression),
                expression: saisie::expression_affichee(&expression),
                resultat: affichage.clone(),
            });
            log::info!("{expression} = {affichage}");
        }

        self.demarche = noyau::demarche(&expression)
            .map(Demarche::from)
            .unwrap_or_default();

        self.entree = resultat_pour_expression(v);
        self.apercu.effacer();
        self.resultat_affiche = true;
        self.focus_entree = true;
    }
}
