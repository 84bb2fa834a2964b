// src/noyau/format.rs
//
// Affichage d’un résultat f64 (motif "#,###.##########") :
// - NaN / ±Infinity => "Error"
// - séparateur de milliers ','
// - au plus 10 décimales, zéros de queue retirés

/// Texte affiché quand le résultat n’est pas un nombre fini.
pub const ERREUR_AFFICHAGE: &str = "Error";

const DECIMALES_MAX: usize = 10;
const SEPARATEUR: char = ',';

/* ------------------------ Résultat -> texte ------------------------ */

pub fn formater_affichage(v: f64) -> String {
    if !v.is_finite() {
        return ERREUR_AFFICHAGE.to_string();
    }

    let txt = format!("{:.*}", DECIMALES_MAX, v.abs());
    let (ent, frac) = txt.split_once('.').unwrap_or((txt.as_str(), ""));
    let frac = frac.trim_end_matches('0');

    let mut out = String::with_capacity(txt.len() + ent.len() / 3 + 1);

    // -0 (ou -0.00000000001) s’affiche 0
    let nul = frac.is_empty() && ent.bytes().all(|b| b == b'0');
    if v.is_sign_negative() && !nul {
        out.push('-');
    }

    out.push_str(&grouper_milliers(ent));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Valeur réinjectée dans l’entrée après "=" : entier sans ".0" si possible,
/// sinon l’écriture décimale la plus courte (relisible par `tokenize`).
pub fn resultat_pour_expression(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// "1234567" -> "1,234,567" (chiffres ASCII seulement).
pub fn grouper_milliers(chiffres: &str) -> String {
    let n = chiffres.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in chiffres.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(SEPARATEUR);
        }
        out.push(c);
    }
    out
}
