// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter Session
// - Fournir la boucle ligne à ligne (stdin -> stdout)

pub mod etat;
pub mod vue;

pub use etat::Session;
pub use vue::Reponse;

use std::io::{self, BufRead, Write};

/// Lit des lignes jusqu’à EOF ou `quit`, écrit une réponse par expression.
pub fn boucle<R: BufRead, W: Write>(session: &mut Session, entree: R, mut sortie: W) -> io::Result<()> {
    for ligne in entree.lines() {
        match session.traiter_ligne(&ligne?) {
            Reponse::Texte(t) => writeln!(sortie, "{t}")?,
            Reponse::Rien => {}
            Reponse::Quitter => break,
        }
        sortie.flush()?;
    }
    Ok(())
}
