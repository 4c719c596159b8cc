// src/noyau/nombre.rs
//
// Nombre étiqueté : Entier (i64) ou Flottant (f64).
//
// Règle de promotion :
// - Entier ∘ Entier => Entier (sauf si l’opérateur force le flottant : `/`)
// - un opérande Flottant => Flottant
//
// Les opérations entières sont vérifiées (checked_*) : un dépassement
// devient ErreurCalcul::DepassementEntier. Un flottant NaN/∞ devient
// ErreurCalcul::ResultatNonFini.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nombre {
    Entier(i64),
    Flottant(f64),
}

impl Nombre {
    pub fn en_f64(self) -> f64 {
        match self {
            Nombre::Entier(n) => n as f64,
            Nombre::Flottant(x) => x,
        }
    }

    pub fn est_zero(self) -> bool {
        match self {
            Nombre::Entier(n) => n == 0,
            Nombre::Flottant(x) => x == 0.0,
        }
    }

    /// Lecture d’un lexème numérique brut.
    ///
    /// - pas de '.' et lisible en i64 => Entier
    /// - sinon lecture f64 (ex: "3.5", ".5", "5.", ou entier trop grand pour i64)
    pub fn depuis_lexeme(lexeme: &str) -> Result<Nombre, ErreurCalcul> {
        if !lexeme.contains('.') {
            if let Ok(n) = lexeme.parse::<i64>() {
                return Ok(Nombre::Entier(n));
            }
        }
        lexeme
            .parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
            .map(Nombre::Flottant)
            .ok_or_else(|| ErreurCalcul::NombreInvalide(lexeme.to_string()))
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Nombre::Entier(n) => write!(f, "{n}"),
            // un flottant garde toujours une partie décimale visible (4.0, pas 4)
            Nombre::Flottant(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Nombre::Flottant(x) => write!(f, "{x}"),
        }
    }
}

/* ------------------------ Opérations (promotion explicite) ------------------------ */

fn flottant_fini(x: f64) -> Result<Nombre, ErreurCalcul> {
    if x.is_finite() {
        Ok(Nombre::Flottant(x))
    } else {
        Err(ErreurCalcul::ResultatNonFini)
    }
}

/// Entier∘Entier vérifié, sinon flottant.
fn entier_ou_flottant(
    a: Nombre,
    b: Nombre,
    entier: fn(i64, i64) -> Option<i64>,
    flottant: fn(f64, f64) -> f64,
) -> Result<Nombre, ErreurCalcul> {
    match (a, b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => entier(x, y)
            .map(Nombre::Entier)
            .ok_or(ErreurCalcul::DepassementEntier),
        _ => flottant_fini(flottant(a.en_f64(), b.en_f64())),
    }
}

pub fn addition(a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalcul> {
    entier_ou_flottant(a, b, i64::checked_add, |x, y| x + y)
}

pub fn soustraction(a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalcul> {
    entier_ou_flottant(a, b, i64::checked_sub, |x, y| x - y)
}

pub fn multiplication(a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalcul> {
    entier_ou_flottant(a, b, i64::checked_mul, |x, y| x * y)
}

/// Division réelle : toujours Flottant, même 6/3.
///
/// Entier/Entier passe par le rationnel exact : un seul arrondi vers f64.
pub fn division(a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalcul> {
    if b.est_zero() {
        return Err(ErreurCalcul::DivisionParZero);
    }
    match (a, b) {
        (Nombre::Entier(x), Nombre::Entier(y)) => BigRational::new(BigInt::from(x), BigInt::from(y))
            .to_f64()
            .ok_or(ErreurCalcul::ResultatNonFini)
            .and_then(flottant_fini),
        _ => flottant_fini(a.en_f64() / b.en_f64()),
    }
}

/// Puissance :
/// - Entier ^ Entier ≥ 0 => Entier (vérifié)
/// - sinon Flottant
/// - 0 ^ négatif => division par zéro
pub fn puissance(a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalcul> {
    if a.est_zero() && b.en_f64() < 0.0 {
        return Err(ErreurCalcul::DivisionParZero);
    }

    match (a, b) {
        (Nombre::Entier(base), Nombre::Entier(exp)) if exp >= 0 => {
            puissance_entiere(base, exp).map(Nombre::Entier)
        }
        _ => flottant_fini(a.en_f64().powf(b.en_f64())),
    }
}

fn puissance_entiere(base: i64, exp: i64) -> Result<i64, ErreurCalcul> {
    if let Ok(e) = u32::try_from(exp) {
        return base.checked_pow(e).ok_or(ErreurCalcul::DepassementEntier);
    }

    // exposant énorme : seules les bases 0, 1, -1 restent représentables
    match base {
        0 | 1 => Ok(base),
        -1 => Ok(if exp % 2 == 0 { 1 } else { -1 }),
        _ => Err(ErreurCalcul::DepassementEntier),
    }
}
