// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau.
///
/// Chaque erreur est levée à l’endroit exact où elle est détectée :
/// aucune valeur “trou” n’est jamais poussée sur une pile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Lexème qui n’est ni un opérateur, ni une parenthèse, ni un nombre.
    #[error("jeton invalide : '{0}'")]
    JetonInvalide(String),

    /// Lexème numérique illisible (ex: "1.2.3", ".").
    #[error("nombre invalide : '{0}'")]
    NombreInvalide(String),

    #[error("parenthèses non appariées")]
    ParenthesesDesequilibrees,

    #[error("division par zéro")]
    DivisionParZero,

    /// Pile d’opérandes vide ou avec plusieurs valeurs à la fin,
    /// ou opérateur sans ses deux opérandes.
    #[error("expression incomplète")]
    ExpressionIncomplete,

    /// Garde-fou : entrée trop longue ou parenthèses trop imbriquées.
    #[error("expression trop complexe : {raison} (max {max})")]
    ExpressionTropComplexe { raison: &'static str, max: usize },

    /// Dépassement d’un entier 64 bits.
    #[error("dépassement de capacité entière")]
    DepassementEntier,

    /// Résultat flottant NaN ou infini.
    #[error("résultat non fini (NaN ou infini)")]
    ResultatNonFini,
}
