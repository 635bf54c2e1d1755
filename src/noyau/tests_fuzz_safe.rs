//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique, toujours une chaîne affichable

use std::time::{Duration, Instant};

use super::eval::soumettre;
use crate::app::AppCalc;

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
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(100)),
        2 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        3 => "e".to_string(),
        4 => format!("{}!", rng.pick(8)),
        _ => format!("{}", rng.pick(10)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(10) {
        0 => gen_atome(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}×{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}÷{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({}mod{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        6 => format!("({}^{})", gen_atome(rng), gen_atome(rng)),
        7 => format!("-{}", gen_expr(rng, depth - 1)),
        8 => {
            let f = match rng.pick(5) {
                0 => "sin",
                1 => "cos",
                2 => "tan",
                3 => "ln",
                _ => "log",
            };
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        _ => format!("({})!", gen_atome(rng)),
    }
}

/// Soupe de caractères arbitraire : la tokenisation doit classer, jamais paniquer.
fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '7', '9', '.', '+', '-', '×', '÷', '^', '%', '!', '(', ')', 'e', 'm', 'o',
        'd', 's', 'i', 'n', 'l', 'g', ' ', '$',
    ];
    let n = 1 + rng.pick(18) as usize;
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_soumettre_total_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let r1 = soumettre(&expr);
        let r2 = soumettre(&expr);

        // total : toujours une chaîne affichable
        assert!(!r1.affichage.is_empty(), "affichage vide pour {expr:?}");
        // déterministe : même entrée => même sortie
        assert_eq!(r1.affichage, r2.affichage, "non déterministe: {expr:?}");
        assert_eq!(r1.est_erreur, r2.est_erreur);

        if r1.est_erreur {
            seen_err += 1;
        } else {
            seen_ok += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_soupe_de_caracteres() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let soupe = gen_soupe(&mut rng);
        let r = soumettre(&soupe);
        assert!(!r.affichage.is_empty(), "affichage vide pour {soupe:?}");
    }
}

#[test]
fn fuzz_safe_session_boutons() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFACADE_u64);
    let mut app = AppCalc::default();

    for _ in 0..400 {
        budget(t0, max);

        match rng.pick(12) {
            0..=3 => app.chiffre(char::from(b'0' + (rng.pick(10) as u8))),
            4 => {
                let op = match rng.pick(6) {
                    0 => "+",
                    1 => "-",
                    2 => "×",
                    3 => "÷",
                    4 => "^",
                    _ => "%",
                };
                app.operateur(op);
            }
            5 => {
                let f = match rng.pick(5) {
                    0 => "sin",
                    1 => "cos",
                    2 => "tan",
                    3 => "ln",
                    _ => "log",
                };
                app.fonction(f);
            }
            6 => app.parenthese(if rng.coin() { '(' } else { ')' }),
            7 => app.constante_e(),
            8 => app.factorielle(),
            9 => {
                if rng.coin() {
                    app.carre();
                } else {
                    app.inverse();
                }
            }
            10 => app.egal(),
            _ => app.backspace(),
        }

        // invariant : l'écran n'est jamais vide
        assert!(!app.affichage().is_empty());
    }

    app.effacer_tout();
    assert_eq!(app.entree, "0");
    assert_eq!(app.affichage(), "0");
}
