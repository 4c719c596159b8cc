//! src/app/etat.rs
//!
//! État de session (sans rendu, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, précision)
//! et offrir des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Précision bornée.

use crate::noyau::{Limites, Nombre, PRECISION_DEFAUT};

/// Garde-fou : on borne la précision (dans les deux sens).
pub const PRECISION_MAX: i32 = 20;

#[derive(Clone, Debug)]
pub struct Session {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: Option<Nombre>, // dernier résultat réussi
    pub erreur: String,           // message d’erreur (si l’évaluation échoue)

    // --- paramètres ---
    pub precision: i32,
    pub limites: Limites,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Limites::default())
    }
}

impl Session {
    pub fn new(limites: Limites) -> Self {
        Self {
            entree: String::new(),
            resultat: None,
            erreur: String::new(),
            precision: PRECISION_DEFAUT,
            limites,
        }
    }

    /// Efface résultat + erreur (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat = None;
        self.erreur.clear();
    }

    /// Place une erreur.
    ///
    /// On CONSERVE `resultat` (dernier succès) : une faute ne l’efface pas.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
    }

    pub fn set_resultat(&mut self, n: Nombre) {
        self.erreur.clear();
        self.resultat = Some(n);
    }

    pub fn a_erreur(&self) -> bool {
        !self.erreur.is_empty()
    }

    /// Garde-fou : limite la précision ; renvoie la valeur retenue.
    pub fn set_precision(&mut self, precision: i32) -> i32 {
        self.precision = precision.clamp(-PRECISION_MAX, PRECISION_MAX);
        self.precision
    }
}
