// src/app/apercu.rs
//
// Aperçu en direct (réévalué à chaque frappe)
// -------------------------------------------
// - Chaque soumission reçoit un ticket croissant
// - NATIF : un seul thread de travail, alimenté par un canal de requêtes ; il saute les
//   requêtes déjà dépassées. WEB (wasm32) : évaluation immédiate
// - Seule la réponse du DERNIER ticket est appliquée, les autres sont jetées
// - Erreur (syntaxe / éval) => aperçu vide

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::noyau::format::formater_affichage;
use crate::noyau::{evaluate, ErreurCalcul};

type Reponse = (u64, Result<f64, ErreurCalcul>);

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct Requete {
    ticket: u64,
    expr: String,
    degres: bool,
}

#[derive(Debug)]
pub struct Apercu {
    derniere: u64,
    appliquee: u64,
    #[cfg(not(target_arch = "wasm32"))]
    requetes: Sender<Requete>,
    rx: Receiver<Reponse>,
    texte: String,
}

impl Default for Apercu {
    fn default() -> Self {
        let (tx, rx) = channel();

        #[cfg(not(target_arch = "wasm32"))]
        let requetes = {
            let (tx_req, rx_req) = channel();
            std::thread::spawn(move || travailleur(rx_req, tx));
            tx_req
        };

        // wasm : évaluation inline, aucune réponse ne passe par le canal
        #[cfg(target_arch = "wasm32")]
        drop(tx);

        Self {
            derniere: 0,
            appliquee: 0,
            #[cfg(not(target_arch = "wasm32"))]
            requetes,
            rx,
            texte: String::new(),
        }
    }
}

/// Boucle du thread d’aperçu : une évaluation à la fois, toujours sur la requête la plus récente.
/// Se termine quand l’Apercu (émetteur des requêtes) ou le récepteur des réponses disparaît.
#[cfg(not(target_arch = "wasm32"))]
fn travailleur(rx_req: Receiver<Requete>, tx: Sender<Reponse>) {
    while let Ok(mut req) = rx_req.recv() {
        while let Ok(suivante) = rx_req.try_recv() {
            log::trace!("requête d’aperçu {} sautée", req.ticket);
            req = suivante;
        }
        if tx.send((req.ticket, evaluate(&req.expr, req.degres))).is_err() {
            break;
        }
    }
}

impl Apercu {
    /// Lance l’évaluation de `expr` ; rend le ticket attribué.
    pub fn soumettre(&mut self, expr: &str, degres: bool) -> u64 {
        self.derniere += 1;
        let ticket = self.derniere;

        #[cfg(not(target_arch = "wasm32"))]
        {
            let req = Requete {
                ticket,
                expr: expr.to_owned(),
                degres,
            };
            if self.requetes.send(req).is_err() {
                log::warn!("thread d’aperçu arrêté, ticket {ticket} perdu");
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.texte = texte_pour(evaluate(expr, degres));
            self.appliquee = ticket;
        }

        ticket
    }

    /// Draine les réponses arrivées. Rend true si le texte affiché a changé.
    pub fn recevoir(&mut self) -> bool {
        let mut change = false;

        while let Ok((ticket, resultat)) = self.rx.try_recv() {
            if ticket != self.derniere {
                log::trace!("aperçu périmé jeté (ticket {ticket}, dernier {})", self.derniere);
                continue;
            }

            self.texte = texte_pour(resultat);
            self.appliquee = ticket;
            change = true;
        }

        change
    }

    pub fn en_attente(&self) -> bool {
        self.appliquee < self.derniere
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Vide l’aperçu et périme toute évaluation encore en vol.
    pub fn effacer(&mut self) {
        self.derniere += 1;
        self.appliquee = self.derniere;
        self.texte.clear();
    }
}

fn texte_pour(resultat: Result<f64, ErreurCalcul>) -> String {
    match resultat {
        Ok(v) => formater_affichage(v),
        Err(_) => String::new(),
    }
}
