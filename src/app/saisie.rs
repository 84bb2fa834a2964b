// src/app/saisie.rs
//
// Règles d’édition du pavé (sans évaluation) :
// - touches -> texte ASCII inséré dans l’entrée
// - garde-fous de saisie (zéro initial, un seul '.', opérateur remplacé, ...)
// - affichage “joli” de l’entrée (÷ × √( sin⁻¹( π ² ³ + milliers)
//
// Tout travaille sur l’entrée ASCII : c’est elle qu’on donne au noyau.

use crate::noyau::format::grouper_milliers;

const OPERATEURS: &str = "+-*/^";

/// Suffixes effacés d’un coup par C (plus longs d’abord).
const MOTIFS_EFFACEMENT: [&str; 21] = [
    "asinh(", "acosh(", "atanh(", "sqrt(", "cbrt(", "asin(", "acos(", "atan(", "sinh(", "cosh(",
    "tanh(", "abs(", "sin(", "cos(", "tan(", "log(", "exp(", "ln(", "pi", "^2", "^3",
];

/// Mots qui classent un calcul dans l’historique “scientifique”.
const MOTS_SCIENTIFIQUES: [&str; 20] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "asinh", "acosh",
    "atanh", "sqrt", "cbrt", "log", "ln", "exp", "abs", "pi", "^",
];

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    AC,
    C,
    Parentheses,
    Pourcent,
    Divise,
    Fois,
    Moins,
    Plus,
    Egal,
    Point,
    Signe,
    Chiffre(u8),

    Pi,
    Sqrt,
    Puissance,
    Exp,
    Log,
    Ln,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Cbrt,
    Cube,
    DeuxPuissance,
    Euler,
    Carre,
    Inverse,
    Abs,
    Fact,
    ParG,
    ParD,
}

impl Touche {
    /// Libellé du bouton.
    pub fn libelle(self) -> &'static str {
        match self {
            Touche::AC => "AC",
            Touche::C => "C",
            Touche::Parentheses => "()",
            Touche::Pourcent => "%",
            Touche::Divise => "÷",
            Touche::Fois => "×",
            Touche::Moins => "−",
            Touche::Plus => "+",
            Touche::Egal => "=",
            Touche::Point => ".",
            Touche::Signe => "±",
            Touche::Chiffre(d) => CHIFFRES[usize::from(d.min(9))],
            Touche::Pi => "π",
            Touche::Sqrt => "√",
            Touche::Puissance => "^",
            Touche::Exp => "eˣ",
            Touche::Log => "log",
            Touche::Ln => "ln",
            Touche::Sin => "sin",
            Touche::Cos => "cos",
            Touche::Tan => "tan",
            Touche::Asin => "sin⁻¹",
            Touche::Acos => "cos⁻¹",
            Touche::Atan => "tan⁻¹",
            Touche::Sinh => "sinh",
            Touche::Cosh => "cosh",
            Touche::Tanh => "tanh",
            Touche::Asinh => "sinh⁻¹",
            Touche::Acosh => "cosh⁻¹",
            Touche::Atanh => "tanh⁻¹",
            Touche::Cbrt => "³√",
            Touche::Cube => "x³",
            Touche::DeuxPuissance => "2ˣ",
            Touche::Euler => "e",
            Touche::Carre => "x²",
            Touche::Inverse => "1/x",
            Touche::Abs => "|x|",
            Touche::Fact => "x!",
            Touche::ParG => "(",
            Touche::ParD => ")",
        }
    }

    /// Texte inséré dans l’entrée (vide pour les touches d’action).
    pub fn texte(self) -> &'static str {
        match self {
            Touche::AC
            | Touche::C
            | Touche::Parentheses
            | Touche::Egal
            | Touche::Signe
            | Touche::Inverse
            | Touche::Fact => "",
            Touche::Pourcent => "%",
            Touche::Divise => "/",
            Touche::Fois => "*",
            Touche::Moins => "-",
            Touche::Plus => "+",
            Touche::Point => ".",
            Touche::Chiffre(d) => CHIFFRES[usize::from(d.min(9))],
            Touche::Pi => "pi",
            Touche::Sqrt => "sqrt(",
            Touche::Puissance => "^",
            Touche::Exp => "exp(",
            Touche::Log => "log(",
            Touche::Ln => "ln(",
            Touche::Sin => "sin(",
            Touche::Cos => "cos(",
            Touche::Tan => "tan(",
            Touche::Asin => "asin(",
            Touche::Acos => "acos(",
            Touche::Atan => "atan(",
            Touche::Sinh => "sinh(",
            Touche::Cosh => "cosh(",
            Touche::Tanh => "tanh(",
            Touche::Asinh => "asinh(",
            Touche::Acosh => "acosh(",
            Touche::Atanh => "atanh(",
            Touche::Cbrt => "cbrt(",
            Touche::Cube => "^3",
            Touche::DeuxPuissance => "2^",
            Touche::Euler => "e",
            Touche::Carre => "^2",
            Touche::Abs => "abs(",
            Touche::ParG => "(",
            Touche::ParD => ")",
        }
    }

    pub fn est_chiffre(self) -> bool {
        matches!(self, Touche::Chiffre(_))
    }

    /// Touche qui ouvre un appel de fonction ("sin(", "sqrt(", ...).
    pub fn est_fonction(self) -> bool {
        self.texte().ends_with('(') && self != Touche::ParG
    }
}

/* ------------------------ Outils ------------------------ */

/// Début (octet) du dernier nombre en fin d’entrée : chiffres, '.', '%'.
fn debut_dernier_nombre(entree: &str) -> usize {
    entree
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.' || *c == '%')
        .last()
        .map_or(entree.len(), |(i, _)| i)
}

fn dernier_char(entree: &str) -> Option<char> {
    entree.chars().next_back()
}

fn compte(entree: &str, c: char) -> usize {
    entree.chars().filter(|&x| x == c).count()
}

/* ------------------------ Insertion ------------------------ */

/// Ajoute le texte d’une touche en respectant les garde-fous de saisie.
pub fn ajouter(entree: &mut String, texte: &str) {
    match texte {
        "0" => {
            // "0" puis "0" : on garde un seul zéro
            if &entree[debut_dernier_nombre(entree)..] != "0" {
                entree.push('0');
            }
        }

        t if t.len() == 1 && t.as_bytes()[0].is_ascii_digit() => {
            // zéro initial d’un nombre remplacé : "2+0" + "5" => "2+5"
            let mut rev = entree.chars().rev();
            let zero_seul = rev.next() == Some('0')
                && !rev
                    .next()
                    .is_some_and(|p| p.is_ascii_digit() || p == '.');
            if zero_seul {
                entree.pop();
            }
            entree.push_str(t);
        }

        "." => {
            let nombre = &entree[debut_dernier_nombre(entree)..];
            if nombre.contains('.') || nombre.contains('%') {
                return;
            }
            match dernier_char(entree) {
                Some(')') => {}
                Some(c) if c.is_ascii_digit() => entree.push('.'),
                _ => entree.push_str("0."),
            }
        }

        "%" => {
            if dernier_char(entree).is_some_and(|c| c.is_ascii_digit() || c == ')') {
                entree.push('%');
            }
        }

        t if t.len() == 1 && OPERATEURS.contains(t) => match dernier_char(entree) {
            // en tête ou après '(' : seul '-' (unaire) passe
            None | Some('(') => {
                if t == "-" {
                    entree.push('-');
                }
            }
            Some(last) if "*/^".contains(last) && t == "-" => entree.push('-'),
            Some(last) if OPERATEURS.contains(last) => {
                entree.pop();
                entree.push_str(t);
            }
            Some(_) => entree.push_str(t),
        },

        t => entree.push_str(t),
    }
}

/// C : efface le dernier symbole (un motif entier pour "sin(", "pi", "^2", ...).
pub fn effacer_dernier(entree: &mut String) {
    while entree.ends_with(' ') {
        entree.pop();
    }

    if let Some(motif) = MOTIFS_EFFACEMENT.iter().find(|m| entree.ends_with(*m)) {
        entree.truncate(entree.len() - motif.len());
        return;
    }

    entree.pop();
}

/// Touche "()" : ferme si une '(' est ouverte, sinon ouvre (avec '*' implicite après une valeur).
pub fn parenthese(entree: &mut String) {
    if compte(entree, '(') > compte(entree, ')') {
        ajouter(entree, ")");
        return;
    }

    match dernier_char(entree) {
        None => ajouter(entree, "("),
        Some(c) if "+-*/^(".contains(c) => ajouter(entree, "("),
        Some(_) => ajouter(entree, "*("),
    }
}

/// ± : "12" => "(-12)" ; "(-12)" => "12" ; entrée vide => "-".
pub fn basculer_signe(entree: &mut String) {
    if entree.is_empty() {
        ajouter(entree, "-");
        return;
    }

    // déjà négatif : "...(-12)" => "...12"
    if let Some(sans_par) = entree.strip_suffix(')') {
        let debut = debut_dernier_nombre(sans_par);
        let nombre = &sans_par[debut..];
        if !nombre.is_empty() && sans_par[..debut].ends_with("(-") {
            let avant = &sans_par[..debut - 2];
            *entree = format!("{avant}{nombre}");
        }
        return;
    }

    let debut = debut_dernier_nombre(entree);
    if debut == entree.len() {
        return;
    }
    let nombre = entree.split_off(debut);
    entree.push_str(&format!("(-{nombre})"));
}

/// 1/x : "…12" => "…1/(12)".
pub fn inverser(entree: &mut String) {
    let debut = debut_dernier_nombre(entree);
    if debut == entree.len() {
        return;
    }
    let nombre = entree.split_off(debut);
    entree.push_str(&format!("1/({nombre})"));
}

/// x! : seulement après un chiffre ou ')'.
pub fn factorielle(entree: &mut String) {
    if dernier_char(entree).is_some_and(|c| c.is_ascii_digit() || c == ')') {
        entree.push('!');
    }
}

/// Ferme les '(' restées ouvertes (avant "=").
pub fn fermer_parentheses(entree: &str) -> String {
    let manque = compte(entree, '(').saturating_sub(compte(entree, ')'));
    let mut out = String::with_capacity(entree.len() + manque);
    out.push_str(entree);
    out.extend(std::iter::repeat(')').take(manque));
    out
}

pub fn est_scientifique(entree: &str) -> bool {
    MOTS_SCIENTIFIQUES.iter().any(|m| entree.contains(m))
}

/* ------------------------ Affichage ------------------------ */

/// Entrée ASCII -> texte affiché (milliers dans les nombres + glyphes).
pub fn expression_affichee(entree: &str) -> String {
    let chars: Vec<char> = entree.chars().collect();
    let mut out = String::with_capacity(entree.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let nombre: String = chars[start..i].iter().collect();
            match nombre.split_once('.') {
                Some((ent, frac)) => {
                    out.push_str(&grouper_milliers(ent));
                    out.push('.');
                    out.push_str(frac);
                }
                None => out.push_str(&grouper_milliers(&nombre)),
            }
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            let appel = chars.get(i) == Some(&'(');
            out.push_str(&glyphe_mot(&mot, appel));
            continue;
        }

        // ^2 / ^3 isolés => exposant
        if c == '^' {
            let exposant = match chars.get(i + 1) {
                Some('2') => Some('²'),
                Some('3') => Some('³'),
                _ => None,
            };
            let suite_numerique = chars
                .get(i + 2)
                .is_some_and(|n| n.is_ascii_digit() || *n == '.');
            if let (Some(e), false) = (exposant, suite_numerique) {
                out.push(e);
                i += 2;
                continue;
            }
        }

        match c {
            '/' => out.push('÷'),
            '*' => out.push('×'),
            _ => out.push(c),
        }
        i += 1;
    }

    out
}

fn glyphe_mot(mot: &str, appel: bool) -> String {
    let g = match (mot, appel) {
        ("sqrt", true) => "√",
        ("cbrt", true) => "³√",
        ("exp", true) => "eˣ",
        ("abs", true) => "|",
        ("asin", true) => "sin⁻¹",
        ("acos", true) => "cos⁻¹",
        ("atan", true) => "tan⁻¹",
        ("asinh", true) => "sinh⁻¹",
        ("acosh", true) => "cosh⁻¹",
        ("atanh", true) => "tanh⁻¹",
        _ => return mot.replace("pi", "π"),
    };
    g.to_string()
}
