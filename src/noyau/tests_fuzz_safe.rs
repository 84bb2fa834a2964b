//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : toute entrée donne un f64 (fini, NaN ou ±inf) OU une des deux erreurs

use std::time::{Duration, Instant};

use super::erreurs::ErreurCalcul;
use super::evaluate;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

const CODES_CONNUS: [&str; 6] = [
    "invalid number format",
    "unknown name",
    "unexpected character",
    "mismatched parentheses",
    "missing operand",
    "invalid expression",
];

fn check_erreur_connue(expr: &str, e: &ErreurCalcul) {
    assert!(
        CODES_CONNUS.contains(&e.code()),
        "code inconnu: expr={expr:?} err={e}"
    );
}

/// Même entrée => même sortie, bit à bit (NaN compris).
fn check_determinisme(expr: &str, degres: bool) {
    let a = evaluate(expr, degres);
    let b = evaluate(expr, degres);
    match (a, b) {
        (Ok(x), Ok(y)) => assert_eq!(x.to_bits(), y.to_bits(), "expr={expr:?}"),
        (Err(x), Err(y)) => assert_eq!(x, y, "expr={expr:?}"),
        (x, y) => panic!("non déterministe: expr={expr:?} {x:?} / {y:?}"),
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        3 => "pi".to_string(),
        4 => "e".to_string(),
        _ => format!("{}", rng.pick(1000)),
    }
}

const FONCTIONS: [&str; 18] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "sqrt", "exp", "cbrt", "abs",
    "sinh", "cosh", "tanh", "asinh", "acosh", "atanh",
];

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(10) {
        0 => gen_nombre(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({}^{})", gen_expr(rng, depth - 1), gen_nombre(rng)),
        6 => format!("-{}", gen_expr(rng, depth - 1)),
        7 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        8 => format!("({})%", gen_expr(rng, depth - 1)),
        _ => {
            // factorielle bornée : petits entiers (et parfois un non-entier => NaN)
            if rng.coin() {
                format!("{}!", rng.pick(12))
            } else {
                "2.5!".to_string()
            }
        }
    }
}

/// Soupe de caractères : mélange de morceaux valides et invalides.
fn gen_soupe(rng: &mut Rng) -> String {
    const MORCEAUX: [&str; 24] = [
        "1", "2.5", ".", "..", "pi", "e", "sin(", "exp(", "foo", "(", ")", "+", "-", "−", "*",
        "×", "/", "÷", "^", "!", "%", " ", "#", "PI",
    ];
    let n = 1 + rng.pick(12);
    (0..n)
        .map(|_| MORCEAUX[rng.pick(MORCEAUX.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut seen_nan_ou_inf = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let degres = rng.coin();

        // bien formée => jamais d’erreur, seulement des sentinelles éventuelles
        let v = evaluate(&expr, degres)
            .unwrap_or_else(|e| panic!("erreur non attendue: expr={expr:?} err={e}"));
        if !v.is_finite() {
            seen_nan_ou_inf += 1;
        }

        check_determinisme(&expr, degres);
    }

    // le générateur doit aussi toucher les domaines interdits (log(0), sqrt(-x), 2.5!)
    assert!(seen_nan_ou_inf > 0, "aucune sentinelle vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_soupe_de_caracteres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_soupe(&mut rng);
        match evaluate(&expr, true) {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                check_erreur_connue(&expr, &e);
                seen_err += 1;
            }
        }
        check_determinisme(&expr, true);
    }

    assert!(seen_ok > 0, "aucun succès: soupe trop invalide");
    assert!(seen_err > 0, "aucune erreur vue");
}

#[test]
fn fuzz_safe_mode_angle_sans_effet_hors_trig() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        budget(t0, max);

        let expr = format!(
            "({}+{})*{}",
            gen_nombre(&mut rng),
            gen_nombre(&mut rng),
            gen_nombre(&mut rng)
        );
        let deg = evaluate(&expr, true).unwrap();
        let rad = evaluate(&expr, false).unwrap();
        assert_eq!(deg.to_bits(), rad.to_bits(), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = evaluate(&expr, true).unwrap_or_else(|e| panic!("err: {e}"));

    // 800 * 0.5 = 400 (exact en binaire)
    assert_eq!(v, 400.0);
}
