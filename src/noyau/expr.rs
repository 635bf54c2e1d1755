// src/noyau/expr.rs
//
// AST d'une expression de la calculatrice.
// - Num : littéral f64 (fini dès la tokenisation)
// - E   : constante d'Euler
// - un noeud possède exclusivement ses enfants (arbre, pas de partage)
//
// IMPORTANT (SAFE):
// - l'arbre, une fois construit pour une évaluation, n'est jamais muté ;
//   l'évaluateur ne fait que le lire.

use std::fmt;

/// Fonctions unaires reconnues (ensemble fixe).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Ln,
    Log,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    E,

    MoinsUnaire(Box<Expr>),
    Factorielle(Box<Expr>),

    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),
    Ln(Box<Expr>),
    Log(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

/* ------------------------ Affichage debug (pas l'affichage final) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Num(v) => write!(f, "{v}"),
            E => write!(f, "e"),
            MoinsUnaire(x) => write!(f, "(-{x})"),
            Factorielle(x) => write!(f, "({x})!"),
            Sin(x) => write!(f, "sin({x})"),
            Cos(x) => write!(f, "cos({x})"),
            Tan(x) => write!(f, "tan({x})"),
            Ln(x) => write!(f, "ln({x})"),
            Log(x) => write!(f, "log({x})"),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
            Mod(a, b) => write!(f, "({a}%{b})"),
            Pow(a, b) => write!(f, "({a}^{b})"),
        }
    }
}
