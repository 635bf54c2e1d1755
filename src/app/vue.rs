// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Zone d'affichage : ligne d'historique discrète au-dessus du
//   résultat, alignés à droite comme sur une calculatrice de bureau
// - Grille de boutons 6 lignes x 5 colonnes (disposition d'origine)
// - Clavier : chiffres et opérateurs en saisie directe, Enter évalue,
//   Backspace efface le dernier symbole ('*' et '/' insèrent × et ÷)
// - Aucun calcul ici : tout passe par noyau::soumettre

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau;

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Operateur(&'static str),
    Fonction(&'static str),
    Parenthese(char),
    ConstanteE,
    Carre,
    Inverse,
    Factorielle,
    Egal,
    Effacer,
}

/// Disposition d'origine, 5 colonnes par ligne.
/// Le bouton "mod" insère '%' (forme canonique du reste).
#[rustfmt::skip]
const GRILLE: &[(&str, Touche)] = &[
    ("C", Touche::Effacer), ("(", Touche::Parenthese('(')), (")", Touche::Parenthese(')')), ("mod", Touche::Operateur("%")), ("÷", Touche::Operateur("÷")),
    ("sin", Touche::Fonction("sin")), ("cos", Touche::Fonction("cos")), ("tan", Touche::Fonction("tan")), ("x²", Touche::Carre), ("×", Touche::Operateur("×")),
    ("ln", Touche::Fonction("ln")), ("7", Touche::Chiffre('7')), ("8", Touche::Chiffre('8')), ("9", Touche::Chiffre('9')), ("-", Touche::Operateur("-")),
    ("log", Touche::Fonction("log")), ("4", Touche::Chiffre('4')), ("5", Touche::Chiffre('5')), ("6", Touche::Chiffre('6')), ("+", Touche::Operateur("+")),
    ("1/x", Touche::Inverse), ("1", Touche::Chiffre('1')), ("2", Touche::Chiffre('2')), ("3", Touche::Chiffre('3')), ("^", Touche::Operateur("^")),
    ("x!", Touche::Factorielle), ("e", Touche::ConstanteE), ("0", Touche::Chiffre('0')), (".", Touche::Chiffre('.')), ("=", Touche::Egal),
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        self.clavier(ui);

        self.ui_affichage(ui);
        ui.add_space(6.0);
        self.ui_grille(ui);
    }

    /* ------------------------ Clavier ------------------------ */

    fn clavier(&mut self, ui: &egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for evt in evenements {
            if let egui::Event::Text(texte) = evt {
                for c in texte.chars() {
                    self.touche_texte(c);
                }
            }
        }

        let (entrer, retour) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });
        if entrer {
            self.egal();
        }
        if retour {
            self.backspace();
        }
    }

    fn touche_texte(&mut self, c: char) {
        match c {
            '0'..='9' | '.' => self.chiffre(c),
            '+' => self.operateur("+"),
            '-' => self.operateur("-"),
            '*' => self.operateur("×"),
            '/' => self.operateur("÷"),
            '^' => self.operateur("^"),
            '%' => self.operateur("%"),
            '!' => self.factorielle(),
            '(' | ')' => self.parenthese(c),
            'e' => self.constante_e(),
            '=' => self.egal(),
            _ => {}
        }
    }

    /* ------------------------ Affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let historique = self.historique.clone();
        let resultat = self.affichage().to_string();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(historique).size(16.0).weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(resultat).size(40.0).monospace());
                });
            });
    }

    /* ------------------------ Boutons ------------------------ */

    fn ui_grille(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("grille_98k")
            .num_columns(5)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (rang, (libelle, touche)) in GRILLE.iter().enumerate() {
                    self.bouton(ui, libelle, *touche);
                    if rang % 5 == 4 {
                        ui.end_row();
                    }
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: Touche) {
        let resp = ui.add_sized([80.0, 48.0], egui::Button::new(libelle));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Fonction(nom) => self.fonction(nom),
            Touche::Parenthese(p) => self.parenthese(p),
            Touche::ConstanteE => self.constante_e(),
            Touche::Carre => self.carre(),
            Touche::Inverse => self.inverse(),
            Touche::Factorielle => self.factorielle(),
            Touche::Egal => self.egal(),
            Touche::Effacer => self.effacer_tout(),
        }
    }

    /* ------------------------ "=" ------------------------ */

    /// Évalue l'entrée via le noyau, puis dépose résultat ou erreur
    /// dans la session.
    pub fn egal(&mut self) {
        let s = noyau::soumettre(&self.entree);
        if s.est_erreur {
            self.deposer_erreur(s.affichage);
        } else {
            self.deposer_resultat(s.affichage, s.historique);
        }
    }
}
