//! Noyau de calcul infixe
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (+ moins unaire => "0 -")
//! - operateurs.rs : table symbole -> précédence + fonction
//! - nombre.rs     : Nombre étiqueté (Entier / Flottant) + promotion
//! - eval.rs       : évaluation à deux piles + pipeline complet
//! - format.rs     : arrondi half-to-even final
//! - erreur.rs     : erreurs typées

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod operateurs;

#[cfg(test)]
mod tests_scientifiques;



// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{calculate_expression_bornee, Limites, PRECISION_DEFAUT};
pub use nombre::Nombre;
