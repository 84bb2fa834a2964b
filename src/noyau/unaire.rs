// src/noyau/unaire.rs
//
// Moins unaire : '-' devient `Op::Neg` quand il n’y a pas de valeur à sa gauche,
// c’est-à-dire en tête, après un opérateur ou après '('.
// Après ')', un nombre, une fonction ou un postfixe, '-' reste binaire.

use super::jetons::{Op, Tok};

pub fn normalize_unary(tokens: Vec<Tok>) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());

    for tok in tokens {
        let unaire = matches!(tok, Tok::Op(Op::Minus))
            && matches!(out.last(), None | Some(Tok::Op(_)) | Some(Tok::LPar));

        out.push(if unaire { Tok::Op(Op::Neg) } else { tok });
    }

    out
}
