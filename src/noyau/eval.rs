//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> normalize_unary -> RPN -> pile f64
//!
//! Sans état : chaque appel crée puis jette ses propres piles, on peut appeler
//! `evaluate` depuis n’importe quel thread.

use super::erreurs::{ErreurCalcul, RaisonEval};
use super::jetons::{format_tokens, tokenize, Func, Op, Postfix, Tok};
use super::rpn::to_rpn;
use super::unaire::normalize_unary;

/// Écart toléré entre l’argument de `!` et l’entier le plus proche.
const TOLERANCE_ENTIER: f64 = 1e-9;

/// 171! dépasse f64::MAX.
const FACTORIELLE_MAX: f64 = 170.0;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression.
/// - Entrée vide ou blanche => 0.0 (pipeline non lancé)
/// - Syntaxe fautive => ErreurCalcul::Syntaxe ; pile incohérente => ErreurCalcul::Eval
/// - Math hors domaine => NaN / ±Infinity (pas d’erreur)
pub fn evaluate(expr_str: &str, degres: bool) -> Result<f64, ErreurCalcul> {
    if expr_str.trim().is_empty() {
        return Ok(0.0);
    }

    let resultat = tokenize(expr_str)
        .map(normalize_unary)
        .and_then(|jetons| to_rpn(&jetons))
        .and_then(|rpn| {
            log::trace!("rpn: {}", format_tokens(&rpn));
            eval_rpn(&rpn, degres)
        });

    if let Err(e) = &resultat {
        log::debug!("évaluation refusée pour {expr_str:?}: {e}");
    }
    resultat
}

/// Démarche (affichage) : jetons normalisés + RPN, sans évaluer.
pub fn demarche(expr_str: &str) -> Result<DemarcheNoyau, ErreurCalcul> {
    let jetons = normalize_unary(tokenize(expr_str)?);
    let rpn = to_rpn(&jetons)?;
    Ok(DemarcheNoyau {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    })
}

/// Évalue une suite RPN (sortie de `to_rpn`).
pub fn eval_rpn(rpn: &[Tok], degres: bool) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        let v = match *tok {
            Tok::Num(v) => v,

            Tok::Op(op) if op.arite() == 1 => {
                let a = pop(&mut st)?;
                match op {
                    Op::Neg => -a,
                    // arité 1 : seul Neg
                    _ => return Err(RaisonEval::ExpressionInvalide.into()),
                }
            }

            Tok::Op(op) => {
                // b a été empilé en dernier
                let b = pop(&mut st)?;
                let a = pop(&mut st)?;
                match op {
                    Op::Plus => a + b,
                    Op::Minus => a - b,
                    Op::Star => a * b,
                    Op::Slash => a / b,
                    Op::Caret => a.powf(b),
                    Op::Neg => return Err(RaisonEval::ExpressionInvalide.into()),
                }
            }

            Tok::Postfix(p) => {
                let a = pop(&mut st)?;
                match p {
                    Postfix::Pourcent => a / 100.0,
                    Postfix::Factorielle => factorielle(a),
                }
            }

            Tok::Func(f) => applique_fonction(f, pop(&mut st)?, degres),

            // to_rpn ne laisse aucune parenthèse
            Tok::LPar | Tok::RPar => return Err(RaisonEval::ExpressionInvalide.into()),
        };
        st.push(v);
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(RaisonEval::ExpressionInvalide.into()),
    }
}

fn pop(st: &mut Vec<f64>) -> Result<f64, ErreurCalcul> {
    st.pop().ok_or(ErreurCalcul::Eval(RaisonEval::OperandeManquant))
}

fn applique_fonction(f: Func, x: f64, degres: bool) -> f64 {
    // trig directe : degrés -> radians AVANT ; trig inverse : radians -> degrés APRÈS
    let vers_rad = |x: f64| if degres { x.to_radians() } else { x };
    let vers_unite = |r: f64| if degres { r.to_degrees() } else { r };

    match f {
        Func::Sin => vers_rad(x).sin(),
        Func::Cos => vers_rad(x).cos(),
        Func::Tan => vers_rad(x).tan(),
        Func::Asin => vers_unite(x.asin()),
        Func::Acos => vers_unite(x.acos()),
        Func::Atan => vers_unite(x.atan()),
        Func::Log => x.log10(),
        Func::Ln => x.ln(),
        Func::Sqrt => x.sqrt(),
        Func::Exp => x.exp(),
        Func::Cbrt => x.cbrt(),
        Func::Abs => x.abs(),
        Func::Sinh => x.sinh(),
        Func::Cosh => x.cosh(),
        Func::Tanh => x.tanh(),
        Func::Asinh => x.asinh(),
        Func::Acosh => x.acosh(),
        Func::Atanh => x.atanh(),
    }
}

/// n! pour n entier (à TOLERANCE_ENTIER près), NaN sinon.
/// Produit 2·3·…·n en f64, dans l’ordre croissant.
fn factorielle(a: f64) -> f64 {
    if a.is_nan() || a < 0.0 {
        return f64::NAN;
    }
    if a.is_infinite() {
        return f64::INFINITY;
    }

    let n = a.round();
    if (a - n).abs() > TOLERANCE_ENTIER {
        return f64::NAN;
    }
    if n > FACTORIELLE_MAX {
        return f64::INFINITY;
    }

    let n = n as u32;
    (2..=n).fold(1.0_f64, |acc, k| acc * f64::from(k))
}
