// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau.
// Toutes les défaillances sont récupérables : la session les convertit
// en chaîne d'affichage et repart sur une saisie neuve. Aucune faute
// bas niveau (piège flottant, NaN, infini) ne doit sortir du noyau
// autrement que sous l'une de ces formes.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ErreurCalc {
    /// Entrée mal formée (position du caractère ou du jeton fautif).
    Syntaxe { pos: usize },

    /// Identifiant hors de l'ensemble fixe sin/cos/tan/ln/log + e.
    IdentifiantInconnu { nom: String },

    DivisionParZero,

    /// NaN sorti du matériel flottant, reclassé ici (jamais propagé tel quel).
    Indefini,

    /// Violation de domaine détectée avant calcul
    /// (factorielle d'un négatif, ln(0), base négative avec exposant fractionnaire...).
    Domaine { motif: &'static str },

    /// Résultat hors du domaine représentable.
    Depassement,
}

impl fmt::Display for ErreurCalc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurCalc::Syntaxe { pos } => write!(f, "erreur de syntaxe (position {pos})"),
            ErreurCalc::IdentifiantInconnu { nom } => write!(f, "identifiant inconnu: {nom}"),
            ErreurCalc::DivisionParZero => write!(f, "division par zéro"),
            ErreurCalc::Indefini => write!(f, "résultat indéfini"),
            ErreurCalc::Domaine { motif } => write!(f, "hors domaine: {motif}"),
            ErreurCalc::Depassement => write!(f, "dépassement de capacité"),
        }
    }
}

impl std::error::Error for ErreurCalc {}
