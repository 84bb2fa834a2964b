// src/noyau/erreurs.rs
//
// Deux familles d’erreurs, pas une de plus :
// - Syntaxe : jetons (caractère, nombre, nom) ou parenthèses (RPN)
// - Eval    : pile numérique (opérande manquant, profondeur finale ≠ 1)
//
// Les erreurs “mathématiques” (1/0, sqrt(-1), asin(2)) ne passent PAS ici :
// elles sortent en NaN / ±Infinity.

use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ErreurCalcul {
    #[error("erreur de syntaxe : {0}")]
    Syntaxe(RaisonSyntaxe),

    #[error("erreur d’évaluation : {0}")]
    Eval(RaisonEval),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaisonSyntaxe {
    NombreInvalide(String),
    NomInconnu(String),
    CaractereInattendu(char),
    Parentheses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaisonEval {
    OperandeManquant,
    ExpressionInvalide,
}

impl RaisonSyntaxe {
    /// Code stable (lisible par machine), indépendant du message affiché.
    pub fn code(&self) -> &'static str {
        match self {
            RaisonSyntaxe::NombreInvalide(_) => "invalid number format",
            RaisonSyntaxe::NomInconnu(_) => "unknown name",
            RaisonSyntaxe::CaractereInattendu(_) => "unexpected character",
            RaisonSyntaxe::Parentheses => "mismatched parentheses",
        }
    }
}

impl RaisonEval {
    pub fn code(&self) -> &'static str {
        match self {
            RaisonEval::OperandeManquant => "missing operand",
            RaisonEval::ExpressionInvalide => "invalid expression",
        }
    }
}

impl ErreurCalcul {
    pub fn code(&self) -> &'static str {
        match self {
            ErreurCalcul::Syntaxe(r) => r.code(),
            ErreurCalcul::Eval(r) => r.code(),
        }
    }

    pub fn est_syntaxe(&self) -> bool {
        matches!(self, ErreurCalcul::Syntaxe(_))
    }
}

impl fmt::Display for RaisonSyntaxe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RaisonSyntaxe::NombreInvalide(s) => write!(f, "nombre invalide: '{s}'"),
            RaisonSyntaxe::NomInconnu(s) => write!(f, "nom inconnu: '{s}'"),
            RaisonSyntaxe::CaractereInattendu(c) => write!(f, "caractère inattendu: '{c}'"),
            RaisonSyntaxe::Parentheses => write!(f, "parenthèses non appariées"),
        }
    }
}

impl fmt::Display for RaisonEval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RaisonEval::OperandeManquant => write!(f, "opérande manquant"),
            RaisonEval::ExpressionInvalide => write!(f, "expression invalide"),
        }
    }
}

impl From<RaisonSyntaxe> for ErreurCalcul {
    fn from(r: RaisonSyntaxe) -> Self {
        ErreurCalcul::Syntaxe(r)
    }
}

impl From<RaisonEval> for ErreurCalcul {
    fn from(r: RaisonEval) -> Self {
        ErreurCalcul::Eval(r)
    }
}
