//! Calculatrice infixe
//!
//! - noyau : tokenisation, évaluation à deux piles, arrondi (pur, sans E/S)
//! - app   : session + rendu texte (appelant mince du noyau)

pub mod app;
pub mod noyau;

// API publique minimale
pub use noyau::eval::{calculate_expression, calculate_expression_bornee};
pub use noyau::{ErreurCalcul, Limites, Nombre, PRECISION_DEFAUT};
