//! Tests scientifiques (campagne) : propriétés attendues du noyau, étage par étage.
//!
//! - associativité / précédence
//! - moins unaire selon le contexte
//! - mode degrés / radians
//! - postfixes, constantes
//! - étage d’échec : Syntaxe (jetons, parenthèses) vs Eval (pile)
//! - math hors domaine => NaN / ±Infinity, jamais une erreur

use std::f64::consts::{E, PI};

use super::erreurs::{ErreurCalcul, RaisonEval, RaisonSyntaxe};
use super::evaluate;

fn eval_ok(expr: &str, degres: bool) -> f64 {
    evaluate(expr, degres).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, degres: bool, attendu: f64, eps: f64) {
    let v = eval_ok(expr, degres);
    assert!(
        (v - attendu).abs() <= eps,
        "expr={expr:?} attendu={attendu} obtenu={v}"
    );
}

fn assert_syntaxe(expr: &str) {
    match evaluate(expr, true) {
        Err(ErreurCalcul::Syntaxe(_)) => {}
        autre => panic!("Syntaxe attendue pour expr={expr:?}, obtenu {autre:?}"),
    }
}

fn assert_eval(expr: &str) {
    match evaluate(expr, true) {
        Err(ErreurCalcul::Eval(_)) => {}
        autre => panic!("Eval attendue pour expr={expr:?}, obtenu {autre:?}"),
    }
}

/* ------------------------ Entrée vide ------------------------ */

#[test]
fn sci_entree_vide_vaut_zero() {
    assert_eq!(eval_ok("", true), 0.0);
    assert_eq!(eval_ok("   ", true), 0.0);
    assert_eq!(eval_ok("\t\n", false), 0.0);
}

/* ------------------------ Associativité / précédence ------------------------ */

#[test]
fn sci_associativite() {
    // ^ à droite : 2^(3^2)
    assert_eq!(eval_ok("2^3^2", true), 512.0);
    // - à gauche : (10-3)-2
    assert_eq!(eval_ok("10-3-2", true), 5.0);
    assert_eq!(eval_ok("64/4/2", true), 8.0);
}

#[test]
fn sci_precedence() {
    assert_eq!(eval_ok("2+3*4", true), 14.0);
    assert_eq!(eval_ok("(2+3)*4", true), 20.0);
    assert_eq!(eval_ok("2*3^2", true), 18.0);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_eq!(eval_ok("-5+3", true), -2.0);
    assert_eq!(eval_ok("2*-3", true), -6.0);
    assert_eq!(eval_ok("(-5)^2", true), 25.0);
    assert_eq!(eval_ok("--4", true), 4.0);
    assert_eq!(eval_ok("2^-1", true), 0.5);
    // signe unicode
    assert_eq!(eval_ok("−5+3", true), -2.0);
}

/* ------------------------ Degrés / radians ------------------------ */

#[test]
fn sci_mode_angle() {
    assert_proche("sin(90)", true, 1.0, 1e-6);
    assert_proche("sin(pi/2)", false, 1.0, 1e-6);
    assert_proche("tan(45)", true, 1.0, 1e-9);
    assert_proche("cos(pi)", false, -1.0, 1e-12);
}

#[test]
fn sci_trig_inverse_retourne_l_unite() {
    assert_proche("asin(1)", true, 90.0, 1e-9);
    assert_proche("asin(1)", false, PI / 2.0, 1e-12);
    assert_proche("atan(1)", true, 45.0, 1e-9);
}

/* ------------------------ Postfixes ------------------------ */

#[test]
fn sci_postfixes() {
    assert_eq!(eval_ok("5!", true), 120.0);
    assert_eq!(eval_ok("50%", true), 0.5);
    assert_eq!(eval_ok("3!!", true), 720.0);
    assert!(eval_ok("2.5!", true).is_nan());
    assert!(eval_ok("(-1)!", true).is_nan());
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn sci_constantes() {
    assert_proche("pi", true, 3.14159265, 1e-8);
    assert_proche("e", true, 2.71828183, 1e-8);
    assert_proche("exp(1)", true, E, 1e-12);
    assert_proche("2*pi/pi", true, 2.0, 1e-12);
}

/* ------------------------ Étage d’échec ------------------------ */

#[test]
fn sci_erreurs_de_syntaxe() {
    assert_syntaxe("1.2.3");
    assert_syntaxe("foo(1)");
    assert_syntaxe("2$");
    assert_eq!(
        evaluate("1.2.3", true),
        Err(ErreurCalcul::Syntaxe(RaisonSyntaxe::NombreInvalide(
            "1.2.3".into()
        )))
    );
}

#[test]
fn sci_parentheses_non_appariees() {
    assert_syntaxe("(1+2");
    assert_syntaxe("1+2)");
    assert_eq!(
        evaluate("((1)", true),
        Err(ErreurCalcul::Syntaxe(RaisonSyntaxe::Parentheses))
    );
}

#[test]
fn sci_operateur_en_queue_echoue_a_l_evaluation() {
    assert_eval("2+");
    assert_eval("*3");
    assert_eq!(
        evaluate("2+", true),
        Err(ErreurCalcul::Eval(RaisonEval::OperandeManquant))
    );
}

/* ------------------------ Sentinelles IEEE ------------------------ */

#[test]
fn sci_sentinelles_pas_d_erreur() {
    assert_eq!(eval_ok("1/0", true), f64::INFINITY);
    assert_eq!(eval_ok("-1/0", true), f64::NEG_INFINITY);
    assert!(eval_ok("0/0", true).is_nan());
    assert!(eval_ok("sqrt(-1)", true).is_nan());
    assert!(eval_ok("asin(2)", true).is_nan());
    assert!(eval_ok("(-8)^(1/3)", true).is_nan());
    assert_eq!(eval_ok("ln(0)", true), f64::NEG_INFINITY);
}
