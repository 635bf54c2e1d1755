// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis reconstruire Expr
//
// Précédences, de la plus serrée à la plus lâche :
//   ! (postfixe) > ^ (associatif à droite) > moins unaire > * / % > + -
//
// Règles:
// - Moins unaire : un '-' qui arrive quand on n'attend PAS une valeur
//   devient MoinsUnaire (préfixe : il ne dépile rien en entrant).
// - '!' postfixe : sort directement, le résultat reste une valeur.
// - Les fonctions restent "collées" à leur argument : empilées, barrières
//   pour les opérateurs, sorties après la parenthèse fermante. Une
//   fonction DOIT être immédiatement suivie de '('.
// - Multiplication implicite refusée : deux valeurs qui se suivent,
//   ou une valeur suivie de '(', donnent une erreur de syntaxe à la
//   position du second jeton.

use super::erreur::ErreurCalc;
use super::expr::{Expr, Fonction};
use super::jetons::{Jeton, TypeJeton};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpRpn {
    Num(f64),
    E,

    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
    Puissance,

    MoinsUnaire,
    Factorielle,
    Fonction(Fonction),

    // interne à to_rpn (pile d'opérateurs), jamais en sortie
    LPar,
}

/// Élément RPN + position du jeton d'origine (diagnostics).
#[derive(Clone, Copy, Debug)]
pub struct ElemRpn {
    pub op: OpRpn,
    pub pos: usize,
}

fn precedence(op: OpRpn) -> i32 {
    match op {
        OpRpn::Plus | OpRpn::Moins => 1,
        OpRpn::Fois | OpRpn::Divise | OpRpn::Modulo => 2,
        OpRpn::MoinsUnaire => 3,
        OpRpn::Puissance => 4,
        OpRpn::Factorielle => 5,
        _ => 0,
    }
}

fn est_associatif_droite(op: OpRpn) -> bool {
    matches!(op, OpRpn::Puissance)
}

fn binaire(typ: TypeJeton) -> OpRpn {
    match typ {
        TypeJeton::Plus => OpRpn::Plus,
        TypeJeton::Minus => OpRpn::Moins,
        TypeJeton::Star => OpRpn::Fois,
        TypeJeton::Slash => OpRpn::Divise,
        TypeJeton::Percent => OpRpn::Modulo,
        TypeJeton::Caret => OpRpn::Puissance,
        _ => unreachable!("jeton non binaire"),
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Fonction(Sin), LPar, Nombre(1), RPar, Bang]
///   rpn:    [Num(1), Fonction(Sin), Factorielle]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<ElemRpn>, ErreurCalc> {
    let mut out: Vec<ElemRpn> = Vec::new();
    let mut ops: Vec<ElemRpn> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les juxtapositions interdites.
    let mut prev_valeur = false;

    // position d'une fonction en attente de sa parenthèse ouvrante
    let mut fonction_en_attente: Option<usize> = None;

    for j in jetons {
        let pos = j.pos;

        if let Some(p) = fonction_en_attente {
            if !matches!(j.typ, TypeJeton::LPar) {
                return Err(ErreurCalc::Syntaxe { pos: p });
            }
        }

        match j.typ {
            TypeJeton::Nombre(v) => {
                if prev_valeur {
                    return Err(ErreurCalc::Syntaxe { pos });
                }
                out.push(ElemRpn { op: OpRpn::Num(v), pos });
                prev_valeur = true;
            }

            TypeJeton::E => {
                if prev_valeur {
                    return Err(ErreurCalc::Syntaxe { pos });
                }
                out.push(ElemRpn { op: OpRpn::E, pos });
                prev_valeur = true;
            }

            TypeJeton::Fonction(f) => {
                if prev_valeur {
                    return Err(ErreurCalc::Syntaxe { pos });
                }
                ops.push(ElemRpn { op: OpRpn::Fonction(f), pos });
                fonction_en_attente = Some(pos);
                prev_valeur = false;
            }

            TypeJeton::LPar => {
                if fonction_en_attente.take().is_none() && prev_valeur {
                    return Err(ErreurCalc::Syntaxe { pos });
                }
                ops.push(ElemRpn { op: OpRpn::LPar, pos });
                prev_valeur = false;
            }

            TypeJeton::RPar => {
                if !prev_valeur {
                    return Err(ErreurCalc::Syntaxe { pos });
                }

                // dépile jusqu'à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top.op, OpRpn::LPar) {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurCalc::Syntaxe { pos });
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(top) = ops.last() {
                    if matches!(top.op, OpRpn::Fonction(_)) {
                        out.push(ops.pop().unwrap());
                    }
                }

                prev_valeur = true;
            }

            TypeJeton::Bang => {
                if !prev_valeur {
                    return Err(ErreurCalc::Syntaxe { pos });
                }
                // postfixe, précédence maximale : sortie directe
                out.push(ElemRpn { op: OpRpn::Factorielle, pos });
            }

            TypeJeton::Minus if !prev_valeur => {
                // moins unaire : préfixe, ne dépile rien en entrant
                ops.push(ElemRpn { op: OpRpn::MoinsUnaire, pos });
            }

            TypeJeton::Plus
            | TypeJeton::Minus
            | TypeJeton::Star
            | TypeJeton::Slash
            | TypeJeton::Percent
            | TypeJeton::Caret => {
                if !prev_valeur {
                    return Err(ErreurCalc::Syntaxe { pos });
                }

                let op = binaire(j.typ);

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (collée à son argument)
                // - et la précédence/associativité exige de sortir le sommet
                while let Some(top) = ops.last() {
                    if matches!(top.op, OpRpn::LPar | OpRpn::Fonction(_)) {
                        break;
                    }

                    let p_top = precedence(top.op);
                    let p_op = precedence(op);

                    let doit_sortir = if est_associatif_droite(op) {
                        p_top > p_op
                    } else {
                        p_top >= p_op
                    };

                    if doit_sortir {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(ElemRpn { op, pos });
                prev_valeur = false;
            }
        }
    }

    // fonction jamais suivie de '(' : "sin" tout seul
    if let Some(p) = fonction_en_attente {
        return Err(ErreurCalc::Syntaxe { pos: p });
    }

    // expression vide ou opérateur traînant
    if !prev_valeur {
        return Err(ErreurCalc::Syntaxe {
            pos: jetons.last().map_or(0, |j| j.pos),
        });
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op.op, OpRpn::LPar) {
            return Err(ErreurCalc::Syntaxe { pos: op.pos });
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d'une RPN.
///
/// Après to_rpn, les cas d'erreur ici sont normalement inatteignables ;
/// on les garde quand même (défense en profondeur).
pub fn from_rpn(rpn: &[ElemRpn]) -> Result<Expr, ErreurCalc> {
    let mut pile: Vec<Expr> = Vec::new();

    for e in rpn {
        match e.op {
            OpRpn::Num(v) => pile.push(Expr::Num(v)),
            OpRpn::E => pile.push(Expr::E),

            OpRpn::MoinsUnaire => {
                let x = pile.pop().ok_or(ErreurCalc::Syntaxe { pos: e.pos })?;
                pile.push(Expr::MoinsUnaire(Box::new(x)));
            }

            OpRpn::Factorielle => {
                let x = pile.pop().ok_or(ErreurCalc::Syntaxe { pos: e.pos })?;
                pile.push(Expr::Factorielle(Box::new(x)));
            }

            OpRpn::Fonction(f) => {
                let x = pile.pop().ok_or(ErreurCalc::Syntaxe { pos: e.pos })?;
                let x = Box::new(x);
                pile.push(match f {
                    Fonction::Sin => Expr::Sin(x),
                    Fonction::Cos => Expr::Cos(x),
                    Fonction::Tan => Expr::Tan(x),
                    Fonction::Ln => Expr::Ln(x),
                    Fonction::Log => Expr::Log(x),
                });
            }

            OpRpn::Plus
            | OpRpn::Moins
            | OpRpn::Fois
            | OpRpn::Divise
            | OpRpn::Modulo
            | OpRpn::Puissance => {
                let b = pile.pop().ok_or(ErreurCalc::Syntaxe { pos: e.pos })?;
                let a = pile.pop().ok_or(ErreurCalc::Syntaxe { pos: e.pos })?;
                let (a, b) = (Box::new(a), Box::new(b));
                pile.push(match e.op {
                    OpRpn::Plus => Expr::Add(a, b),
                    OpRpn::Moins => Expr::Sub(a, b),
                    OpRpn::Fois => Expr::Mul(a, b),
                    OpRpn::Divise => Expr::Div(a, b),
                    OpRpn::Modulo => Expr::Mod(a, b),
                    OpRpn::Puissance => Expr::Pow(a, b),
                    _ => unreachable!(),
                });
            }

            OpRpn::LPar => {
                // parenthèse inattendue en RPN
                return Err(ErreurCalc::Syntaxe { pos: e.pos });
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurCalc::Syntaxe {
            pos: rpn.last().map_or(0, |e| e.pos),
        });
    }
    Ok(pile.pop().unwrap())
}
