// src/noyau/format.rs
//
// Arrondi final (half-to-even) à `precision` chiffres décimaux.
//
// Le flottant est lu EXACTEMENT (valeur binaire -> rationnel), arrondi en
// rationnel, puis relu via son écriture décimale (lecture f64 correctement
// arrondie). Donc 2.675 -> 2.67 (sa valeur binaire est 2.67499999...).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::ErreurCalcul;
use super::nombre::Nombre;

/// Au-delà, l’arrondi ne change plus un f64 (≤ 1074 décimales exactes).
const PRECISION_IDENTITE: i32 = 1100;

/// En deçà, tout f64 fini s’arrondit à zéro (|x| < 1.8e308).
const PRECISION_NULLE: i32 = -400;

/// En deçà, tout i64 s’arrondit à zéro (|i64| < 10^20 / 2).
/// À -19, |v| > 5·10^18 s’arrondit encore à ±10^19 (dépassement).
const PRECISION_ENTIER_NULLE: i32 = -20;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// Arrondi half-to-even d’un rationnel à l’entier le plus proche.
fn arrondi_pair(r: &BigRational) -> BigInt {
    let plancher = r.floor();
    let reste = r - &plancher;
    let demi = BigRational::new(BigInt::one(), BigInt::from(2));

    let mut n = plancher.to_integer();
    if reste > demi || (reste == demi && !(&n % BigInt::from(2)).is_zero()) {
        n += BigInt::one();
    }
    n
}

/// Entier “scalé” (×10^digits) -> texte décimal.
fn scaled_to_decimal(scaled: &BigInt, digits: u32) -> String {
    let signe = if scaled.is_negative() { "-" } else { "" };
    let abs = scaled.abs();

    if digits == 0 {
        return format!("{signe}{abs}");
    }

    let scale = pow10(digits);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits as usize {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// Arrondit le résultat final.
///
/// - Entier, precision ≥ 0 : inchangé (reste Entier)
/// - Entier, precision < 0 : arrondi aux dizaines/centaines… (reste Entier)
/// - Flottant : toujours Flottant
pub fn arrondir(n: Nombre, precision: i32) -> Result<Nombre, ErreurCalcul> {
    match n {
        Nombre::Entier(v) if precision >= 0 => Ok(Nombre::Entier(v)),
        Nombre::Entier(_) if precision <= PRECISION_ENTIER_NULLE => Ok(Nombre::Entier(0)),
        Nombre::Entier(v) => arrondir_entier(v, precision.unsigned_abs()),
        Nombre::Flottant(x) => arrondir_flottant(x, precision).map(Nombre::Flottant),
    }
}

fn arrondir_entier(v: i64, zeros: u32) -> Result<Nombre, ErreurCalcul> {
    let scale = pow10(zeros);
    let r = BigRational::new(BigInt::from(v), scale.clone());
    let arrondi = arrondi_pair(&r) * scale;

    arrondi
        .to_i64()
        .map(Nombre::Entier)
        .ok_or(ErreurCalcul::DepassementEntier)
}

fn arrondir_flottant(x: f64, precision: i32) -> Result<f64, ErreurCalcul> {
    if precision >= PRECISION_IDENTITE || x == 0.0 {
        return Ok(x);
    }
    if precision <= PRECISION_NULLE {
        return Ok(0.0_f64.copysign(x));
    }

    let exact = BigRational::from_float(x).ok_or(ErreurCalcul::ResultatNonFini)?;

    let texte = if precision >= 0 {
        let digits = precision.unsigned_abs();
        let scaled = arrondi_pair(&(exact * BigRational::from_integer(pow10(digits))));
        scaled_to_decimal(&scaled, digits)
    } else {
        let scale = pow10(precision.unsigned_abs());
        let arrondi = arrondi_pair(&(exact / BigRational::from_integer(scale.clone()))) * scale;
        arrondi.to_str_radix(10)
    };

    let y: f64 = texte.parse().map_err(|_| ErreurCalcul::ResultatNonFini)?;
    if !y.is_finite() {
        return Err(ErreurCalcul::ResultatNonFini);
    }

    // garde le signe du zéro (-0.001 -> -0.0)
    Ok(if y == 0.0 { 0.0_f64.copysign(x) } else { y })
}
