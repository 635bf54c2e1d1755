// src/noyau/jetons.rs

use super::erreur::ErreurCalc;
use super::expr::Fonction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TypeJeton {
    Nombre(f64),
    E,
    Fonction(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Bang, // factorielle postfixée

    LPar,
    RPar,
}

/// Jeton + position (en caractères) dans l'entrée, pour les diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct Jeton {
    pub typ: TypeJeton,
    pub pos: usize,
}

/// Glyphes multi-caractères et mots-clés opérateurs, pilotés par table.
/// Pas de réécriture de chaîne : un identifiant voisin n'est jamais
/// corrompu par la reconnaissance d'un mot-clé.
const GLYPHES: &[(&str, TypeJeton)] = &[
    ("×", TypeJeton::Star),
    ("÷", TypeJeton::Slash),
    ("mod", TypeJeton::Percent),
];

/// Identificateurs reconnus comme fonctions (unaire).
const FONCTIONS: &[(&str, Fonction)] = &[
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("ln", Fonction::Ln),
    ("log", Fonction::Log),
];

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres : suite maximale de chiffres, au plus un point décimal
/// - opérateurs + - * / ^ % ! et glyphes × ÷ mod (via table)
/// - parenthèses ( )
/// - fonctions sin/cos/tan/ln/log et constante e (minuscules normalisées)
///
/// Entrée vide, caractère inattendu ou nombre mal formé : Syntaxe avec
/// la position fautive. Identifiant hors de l'ensemble fixe :
/// IdentifiantInconnu. Pur, sans effet de bord.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton { typ: TypeJeton::LPar, pos: i });
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton { typ: TypeJeton::RPar, pos: i });
            i += 1;
            continue;
        }

        // Opérateurs ASCII mono-caractère
        let op = match c {
            '+' => Some(TypeJeton::Plus),
            '-' => Some(TypeJeton::Minus),
            '*' => Some(TypeJeton::Star),
            '/' => Some(TypeJeton::Slash),
            '%' => Some(TypeJeton::Percent),
            '^' => Some(TypeJeton::Caret),
            '!' => Some(TypeJeton::Bang),
            _ => None,
        };
        if let Some(typ) = op {
            out.push(Jeton { typ, pos: i });
            i += 1;
            continue;
        }

        // Glyphes et mots-clés opérateurs (× ÷ mod), avant les identifiants
        if let Some((motif, typ)) = GLYPHES.iter().find(|&&(m, _)| motif_present(&chars, i, m)) {
            out.push(Jeton { typ: *typ, pos: i });
            i += motif.chars().count();
            continue;
        }

        // Identifiants : suite de lettres, coupée si un mot-clé commence
        // (entrées collées par l'UI : "emod3" => e, mod, 3)
        if c.is_ascii_alphabetic() {
            let debut = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_alphabetic() && !commence_mot_cle(&chars, i)
            {
                i += 1;
            }
            let mot: String = chars[debut..i].iter().collect();
            let mot = mot.to_lowercase();

            if let Some((_, typ)) = GLYPHES.iter().find(|(nom, _)| *nom == mot) {
                // mot-clé opérateur en majuscules ("MOD")
                out.push(Jeton { typ: *typ, pos: debut });
            } else if let Some((_, f)) = FONCTIONS.iter().find(|(nom, _)| *nom == mot) {
                out.push(Jeton { typ: TypeJeton::Fonction(*f), pos: debut });
            } else if mot == "e" {
                out.push(Jeton { typ: TypeJeton::E, pos: debut });
            } else {
                return Err(ErreurCalc::IdentifiantInconnu { nom: mot });
            }
            continue;
        }

        // Nombre : chiffres avec au plus un point décimal
        if c.is_ascii_digit() || c == '.' {
            let debut = i;
            let mut point_vu = false;
            while i < chars.len() {
                let cc = chars[i];
                if cc.is_ascii_digit() {
                    i += 1;
                } else if cc == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    break;
                }
            }
            let texte: String = chars[debut..i].iter().collect();
            if texte == "." {
                return Err(ErreurCalc::Syntaxe { pos: debut });
            }
            let v: f64 = texte
                .parse()
                .map_err(|_| ErreurCalc::Syntaxe { pos: debut })?;
            out.push(Jeton { typ: TypeJeton::Nombre(v), pos: debut });
            continue;
        }

        return Err(ErreurCalc::Syntaxe { pos: i });
    }

    if out.is_empty() {
        return Err(ErreurCalc::Syntaxe { pos: 0 });
    }

    Ok(out)
}

/// Vrai si `motif` apparaît dans `chars` à partir de `i`.
fn motif_present(chars: &[char], i: usize, motif: &str) -> bool {
    let mut j = i;
    for c in motif.chars() {
        if j >= chars.len() || chars[j] != c {
            return false;
        }
        j += 1;
    }
    true
}

/// Vrai si un mot-clé (glyphe alphabétique ou fonction) commence en `i`.
fn commence_mot_cle(chars: &[char], i: usize) -> bool {
    GLYPHES.iter().any(|&(m, _)| motif_present(chars, i, m))
        || FONCTIONS.iter().any(|&(m, _)| motif_present(chars, i, m))
}
