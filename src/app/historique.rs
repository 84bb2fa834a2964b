//! Historique en mémoire des calculs validés ("=").
//!
//! Plus récent en tête, borné à `HISTORIQUE_MAX` entrées. Pas de persistance.

use std::collections::VecDeque;

use super::saisie::est_scientifique;

/// Garde-fou : taille maximale de l’historique.
const HISTORIQUE_MAX: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeCalcul {
    Basique,
    Scientifique,
}

impl TypeCalcul {
    pub fn depuis_expression(expr: &str) -> Self {
        if est_scientifique(expr) {
            TypeCalcul::Scientifique
        } else {
            TypeCalcul::Basique
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            TypeCalcul::Basique => "Calculatrice basique",
            TypeCalcul::Scientifique => "Calculatrice scientifique",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub type_calcul: TypeCalcul,
    pub expression: String, // forme affichée (glyphes)
    pub resultat: String,   // forme affichée ("1,234.5")
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    pub fn ajouter(&mut self, e: EntreeHistorique) {
        self.entrees.push_front(e);
        self.entrees.truncate(HISTORIQUE_MAX);
    }

    pub fn entrees(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }
}
