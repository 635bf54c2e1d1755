//! Propriétés de bout en bout : jetons -> RPN -> Expr -> f64 -> affichage.
//!
//! Les assertions portent sur les chaînes affichées, telles que les
//! verrait l'utilisateur derrière l'écran.

use super::eval::soumettre;
use super::format::{AFFICHAGE_ERREUR, SENTINELLE_98K};
use super::jetons::{tokenize, TypeJeton};

fn affiche(s: &str) -> String {
    let r = soumettre(s);
    assert!(!r.est_erreur, "soumettre({s:?}) a échoué: {}", r.affichage);
    r.affichage
}

fn affiche_erreur(s: &str) -> String {
    let r = soumettre(s);
    assert!(
        r.est_erreur,
        "soumettre({s:?}) aurait dû échouer, obtenu {}",
        r.affichage
    );
    r.affichage
}

// --- Tokenisation ---

#[test]
fn suite_de_chiffres_en_un_seul_jeton() {
    let jetons = tokenize("0123456789").unwrap();
    assert_eq!(jetons.len(), 1);
    match jetons[0].typ {
        TypeJeton::Nombre(v) => assert_eq!(v, 123456789.0),
        autre => panic!("jeton inattendu: {autre:?}"),
    }
}

#[test]
fn nombre_decimal_en_un_seul_jeton() {
    let jetons = tokenize("3.25").unwrap();
    assert_eq!(jetons.len(), 1);
    assert!(matches!(jetons[0].typ, TypeJeton::Nombre(v) if v == 3.25));
}

#[test]
fn positions_des_jetons() {
    let jetons = tokenize("12+sin(4)").unwrap();
    let positions: Vec<usize> = jetons.iter().map(|j| j.pos).collect();
    assert_eq!(positions, vec![0, 2, 3, 6, 7, 8]);
}

// --- Calculs affichés ---

#[test]
fn priorite_de_la_multiplication() {
    assert_eq!(affiche("2+3×4"), "14");
}

#[test]
fn parentheses_prioritaires() {
    assert_eq!(affiche("(2+3)×4"), "20");
}

#[test]
fn division_par_zero_affiche_la_sentinelle() {
    assert_eq!(affiche_erreur("5÷0"), SENTINELLE_98K);
    assert_eq!(affiche_erreur("0÷0"), SENTINELLE_98K);
}

#[test]
fn factorielle_affichee() {
    assert_eq!(affiche("5!"), "120");
}

#[test]
fn factorielle_negative_affiche_erreur() {
    assert_eq!(affiche_erreur("(0-1)!"), AFFICHAGE_ERREUR);
}

#[test]
fn racine_par_puissance_fractionnaire() {
    assert_eq!(affiche("2^0.5"), "1.41421356");
}

#[test]
fn troncature_a_huit_decimales() {
    assert_eq!(affiche("2÷3"), "0.66666667");
}

#[test]
fn collapse_en_entier() {
    assert_eq!(affiche("2.5×2"), "5");
}

#[test]
fn bascule_en_notation_scientifique() {
    // 123456789² tient sur 17 chiffres : trop large pour l'écran
    let s = affiche("123456789×123456789");
    assert_eq!(s, "1.52416e16");
    let apres_point = s.split('.').nth(1).and_then(|q| q.split('e').next());
    assert_eq!(apres_point.map(str::len), Some(5));
}

// --- Rejouabilité (calcul enchaîné) ---

#[test]
fn resultat_entier_rejouable() {
    let s = affiche("7×8");
    let jetons = tokenize(&s).unwrap();
    assert_eq!(jetons.len(), 1);
    assert!(matches!(jetons[0].typ, TypeJeton::Nombre(v) if v == 56.0));
}

#[test]
fn historique_reprend_l_entree() {
    let r = soumettre("2+2");
    assert_eq!(r.historique, "2+2 =");
    assert_eq!(r.affichage, "4");
}

// --- Robustesse de la reconnaissance ---

#[test]
fn mod_colle_aux_nombres() {
    assert_eq!(affiche("5mod3"), "2");
}

#[test]
fn mot_cle_jamais_corrompu_par_un_voisin() {
    // e % 2, saisi sans séparateurs par l'UI
    assert_eq!(affiche("emod2"), "0.71828183");
}

#[test]
fn juxtaposition_refusee() {
    assert_eq!(affiche_erreur("2(3)"), AFFICHAGE_ERREUR);
    assert_eq!(affiche_erreur("2e"), AFFICHAGE_ERREUR);
}

#[test]
fn identifiant_inconnu_affiche_erreur() {
    assert_eq!(affiche_erreur("abc"), AFFICHAGE_ERREUR);
}

#[test]
fn fonctions_imbriquees_explicites() {
    assert_eq!(affiche("sin(cos(0))"), "0.84147098");
}
