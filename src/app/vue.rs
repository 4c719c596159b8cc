// src/app/vue.rs
//
// Vue texte : évaluation via le noyau + rendu d’une ligne de réponse.
//
// - succès : "<expression> = <valeur>"
// - échec  : "Erreur : <message>" + rappel sur les négatifs

use tracing::info;

use super::etat::Session;
use crate::noyau::calculate_expression_bornee;

/// Rappel affiché sous chaque erreur.
pub const NOTE_NEGATIFS: &str = "NOTE : pour un nombre négatif après un opérateur, \
utiliser des parenthèses, ex: 3*(-1). Sinon 3*-1 se lit 3*0-1.";

/// Réponse à une ligne saisie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reponse {
    Texte(String),
    Rien,
    Quitter,
}

impl Session {
    /// Évalue l’entrée via le noyau, puis dépose résultat/erreur dans l’état.
    pub fn eval_via_noyau(&mut self) {
        let s = self.entree.trim().to_string();

        match calculate_expression_bornee(&s, self.precision, &self.limites) {
            Ok(n) => self.set_resultat(n),
            Err(e) => {
                info!(entree = %s, erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
    }

    /// Rendu texte du dernier état.
    pub fn rendu(&self) -> String {
        if self.a_erreur() {
            return format!("Erreur : {}\n{NOTE_NEGATIFS}", self.erreur);
        }
        match &self.resultat {
            Some(n) => format!("{} = {n}", self.entree.trim()),
            None => String::new(),
        }
    }

    /// Traite une ligne : commande (`quit`, `exit`, `:c`, `:p N`) ou expression.
    pub fn traiter_ligne(&mut self, ligne: &str) -> Reponse {
        let ligne = ligne.trim();

        if ligne.is_empty() {
            return Reponse::Rien;
        }
        if matches!(ligne, "quit" | "exit") {
            return Reponse::Quitter;
        }

        if ligne == ":c" {
            self.clear_resultats();
            return Reponse::Texte("résultats effacés".to_string());
        }

        if let Some(arg) = ligne.strip_prefix(":p") {
            return match arg.trim().parse::<i32>() {
                Ok(p) => Reponse::Texte(format!("précision : {}", self.set_precision(p))),
                Err(_) => Reponse::Texte(format!("précision invalide : '{}'", arg.trim())),
            };
        }

        self.entree = ligne.to_string();
        self.eval_via_noyau();
        Reponse::Texte(self.rendu())
    }
}
