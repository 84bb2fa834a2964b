// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (moins unaire déjà normalisé) en RPN (postfix)
// - La sortie ne contient plus aucune parenthèse
//
// Règles:
// - Num et Postfix vont directement en sortie
// - Func est empilée, elle sort juste après la ')' de son argument
// - Op : dépile tant que le sommet est un Op qui lie plus fort
//   (gauche: p(tok) <= p(top) ; droite: p(tok) < p(top))
//
// NOTE:
// - Une fonction ou une '(' au sommet bloque le dépilement des opérateurs.

use super::erreurs::{ErreurCalcul, RaisonSyntaxe};
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Func(Sin), LPar, Num(π), Op(Slash), Num(2), RPar]
///   rpn:    [Num(π), Num(2), Op(Slash), Func(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) | Tok::Postfix(_) => out.push(tok),

            Tok::Func(_) | Tok::LPar => ops.push(tok),

            Tok::Op(op) => {
                while let Some(Tok::Op(top)) = ops.last() {
                    let doit_pop = if op.is_right_associative() {
                        op.precedence() < top.precedence()
                    } else {
                        op.precedence() <= top.precedence()
                    };
                    if !doit_pop {
                        break;
                    }
                    out.push(Tok::Op(*top));
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(RaisonSyntaxe::Parentheses.into()),
                    }
                }

                // fonction au sommet : elle prend le groupe qu’on vient de fermer
                if let Some(Tok::Func(f)) = ops.last() {
                    out.push(Tok::Func(*f));
                    ops.pop();
                }
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(RaisonSyntaxe::Parentheses.into());
        }
        out.push(op);
    }

    Ok(out)
}
