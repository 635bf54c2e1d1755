//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN -> Expr -> évaluation f64 -> format
//!
//! L'évaluateur est une lecture pure de l'arbre : aucune capacité
//! d'exécution ambiante, uniquement la grammaire et l'ensemble fixe de
//! fonctions. Tout NaN est reclassé en Indefini, tout infini en
//! Depassement : rien ne fuit vers l'affichage.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::erreur::ErreurCalc;
use super::expr::Expr;
use super::format::format_resultat;
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// Borne au-delà de laquelle n! sort du domaine f64 (171! > f64::MAX).
const FACTORIELLE_MAX: f64 = 170.0;

/// Garde-fou : borne le coût de parse/éval et la profondeur de
/// récursion (anti-gel ; la saisie normale est déjà limitée en amont).
const MAX_JETONS: usize = 512;

/// Résultat d'une soumission "=" : tout ce dont l'écran a besoin.
#[derive(Clone, Debug)]
pub struct Soumission {
    pub affichage: String,
    pub historique: String,
    pub est_erreur: bool,
}

/// API publique : évalue l'entrée accumulée et retourne les chaînes
/// prêtes à afficher. Ne panique jamais : toute défaillance devient
/// une chaîne d'erreur.
pub fn soumettre(entree: &str) -> Soumission {
    let resultat = evaluer_entree(entree);
    if let Err(e) = &resultat {
        log::debug!("soumission {entree:?} : {e}");
    }

    Soumission {
        affichage: format_resultat(&resultat),
        historique: format!("{} =", entree.trim()),
        est_erreur: resultat.is_err(),
    }
}

/// Pipeline complet sur une chaîne brute.
pub fn evaluer_entree(s: &str) -> Result<f64, ErreurCalc> {
    let jetons = tokenize(s.trim())?;
    if jetons.len() > MAX_JETONS {
        return Err(ErreurCalc::Depassement);
    }

    let rpn = to_rpn(&jetons)?;
    let expr = from_rpn(&rpn)?;
    log::debug!("ast: {expr}");

    evaluer(&expr)
}

/// Évalue un arbre en f64. Chaque opération vérifie arité et domaine
/// avant de calculer ; aucune faute flottante ne peut s'échapper.
pub fn evaluer(expr: &Expr) -> Result<f64, ErreurCalc> {
    use Expr::*;

    match expr {
        Num(v) => Ok(*v),
        E => Ok(std::f64::consts::E),

        MoinsUnaire(x) => Ok(-evaluer(x)?),
        Factorielle(x) => factorielle(evaluer(x)?),

        Sin(x) => fini(evaluer(x)?.sin()),
        Cos(x) => fini(evaluer(x)?.cos()),
        Tan(x) => fini(evaluer(x)?.tan()),

        Ln(x) => {
            let v = evaluer(x)?;
            if v <= 0.0 {
                return Err(ErreurCalc::Domaine {
                    motif: "ln exige un argument strictement positif",
                });
            }
            fini(v.ln())
        }
        Log(x) => {
            let v = evaluer(x)?;
            if v <= 0.0 {
                return Err(ErreurCalc::Domaine {
                    motif: "log exige un argument strictement positif",
                });
            }
            fini(v.log10())
        }

        Add(a, b) => fini(evaluer(a)? + evaluer(b)?),
        Sub(a, b) => fini(evaluer(a)? - evaluer(b)?),
        Mul(a, b) => fini(evaluer(a)? * evaluer(b)?),

        Div(a, b) => {
            let (a, b) = (evaluer(a)?, evaluer(b)?);
            if b == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            fini(a / b)
        }

        // reste tronqué : le signe suit le dividende
        Mod(a, b) => {
            let (a, b) = (evaluer(a)?, evaluer(b)?);
            if b == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            fini(a % b)
        }

        Pow(a, b) => {
            let (a, b) = (evaluer(a)?, evaluer(b)?);
            if a == 0.0 && b < 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            if a < 0.0 && b.fract() != 0.0 {
                return Err(ErreurCalc::Domaine {
                    motif: "base négative avec exposant fractionnaire",
                });
            }
            fini(a.powf(b))
        }
    }
}

/* ------------------------ Outils internes ------------------------ */

/// Reclasse les valeurs non finies : NaN => Indefini, ±inf => Depassement.
fn fini(v: f64) -> Result<f64, ErreurCalc> {
    if v.is_nan() {
        Err(ErreurCalc::Indefini)
    } else if v.is_infinite() {
        Err(ErreurCalc::Depassement)
    } else {
        Ok(v)
    }
}

/// Factorielle exacte sur grands entiers, puis conversion f64.
/// Exige un entier >= 0 ; au-delà de 170 le résultat exact dépasse f64.
fn factorielle(v: f64) -> Result<f64, ErreurCalc> {
    if v < 0.0 {
        return Err(ErreurCalc::Domaine {
            motif: "factorielle d'un nombre négatif",
        });
    }
    if v.fract() != 0.0 {
        return Err(ErreurCalc::Domaine {
            motif: "factorielle d'un non-entier",
        });
    }
    if v > FACTORIELLE_MAX {
        return Err(ErreurCalc::Depassement);
    }

    let n = v as u64;
    let mut acc = BigUint::one();
    for k in 2..=n {
        acc *= k;
    }

    match acc.to_f64() {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(ErreurCalc::Depassement),
    }
}
