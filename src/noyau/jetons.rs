// src/noyau/jetons.rs

use std::f64::consts::{E, PI};

use super::erreurs::{ErreurCalcul, RaisonSyntaxe};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
    Func(Func),
    Postfix(Postfix),

    LPar,
    RPar,
}

/// Opérateurs infixes + le moins unaire synthétique (`Neg`, produit par unaire.rs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    Neg,
}

impl Op {
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash => 2,
            Op::Caret => 3,
            Op::Neg => 4,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, Op::Caret | Op::Neg)
    }

    pub fn arite(self) -> u8 {
        match self {
            Op::Neg => 1,
            _ => 2,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
            Op::Caret => "^",
            Op::Neg => "neg",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Postfix {
    Factorielle, // !
    Pourcent,    // %
}

/// Ensemble fermé des fonctions (toutes unaires).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Sqrt,
    Exp,
    Cbrt,
    Abs,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
}

impl Func {
    pub const TOUTES: [Func; 18] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Asin,
        Func::Acos,
        Func::Atan,
        Func::Log,
        Func::Ln,
        Func::Sqrt,
        Func::Exp,
        Func::Cbrt,
        Func::Abs,
        Func::Sinh,
        Func::Cosh,
        Func::Tanh,
        Func::Asinh,
        Func::Acosh,
        Func::Atanh,
    ];

    /// Nom déjà en minuscules.
    pub fn from_name(name: &str) -> Option<Func> {
        Func::TOUTES.iter().copied().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Log => "log",
            Func::Ln => "ln",
            Func::Sqrt => "sqrt",
            Func::Exp => "exp",
            Func::Cbrt => "cbrt",
            Func::Abs => "abs",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Asinh => "asinh",
            Func::Acosh => "acosh",
            Func::Atanh => "atanh",
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.) — un seul '.' par nombre
/// - constantes `pi` et `e` (e seul, pas suivi d’une lettre)
/// - fonctions (sin, asinh, sqrt, ...) insensibles à la casse
/// - opérateurs + - * / ^ (et − × ÷ unicode)
/// - postfixes ! et %
/// - parenthèses ( )
///
/// Les espaces sont retirés avant lecture ; tout autre blanc est un caractère inattendu.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let chars: Vec<char> = s.chars().filter(|&c| c != ' ').collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : suite maximale de chiffres et de '.'
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            if txt.matches('.').count() > 1 {
                return Err(RaisonSyntaxe::NombreInvalide(txt).into());
            }
            // "." seul ne se lit pas
            let v = txt
                .parse::<f64>()
                .map_err(|_| RaisonSyntaxe::NombreInvalide(txt.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        // π : "pi" exact (minuscules), AVANT la lecture des mots
        if c == 'p' && chars.get(i + 1) == Some(&'i') {
            out.push(Tok::Num(PI));
            i += 2;
            continue;
        }

        // e seul (pas "exp", pas "e2x")
        if c == 'e' && !chars.get(i + 1).is_some_and(|n| n.is_alphabetic()) {
            out.push(Tok::Num(E));
            i += 1;
            continue;
        }

        // Mot : fonction connue ou erreur
        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();
            let f = Func::from_name(&w).ok_or(RaisonSyntaxe::NomInconnu(word))?;
            out.push(Tok::Func(f));
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            '+' => Tok::Op(Op::Plus),
            '-' | '−' => Tok::Op(Op::Minus),
            '*' | '×' => Tok::Op(Op::Star),
            '/' | '÷' => Tok::Op(Op::Slash),
            '^' => Tok::Op(Op::Caret),
            '!' => Tok::Postfix(Postfix::Factorielle),
            '%' => Tok::Postfix(Postfix::Pourcent),
            _ => return Err(RaisonSyntaxe::CaractereInattendu(c).into()),
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Func(f) => f.name().to_string(),
            Tok::Postfix(Postfix::Factorielle) => "!".to_string(),
            Tok::Postfix(Postfix::Pourcent) => "%".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
