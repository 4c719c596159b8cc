//! Tests scientifiques (campagne) : comportements observables du pipeline complet.
//!
//! - valeurs de référence (précédence, associativité, types)
//! - erreurs typées au bon endroit
//! - limites contrôlées (longueur, imbrication)

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::eval::calculate_expression;
use super::{calculate_expression_bornee, ErreurCalcul, Limites, Nombre, PRECISION_DEFAUT};

fn calc_ok(expr: &str) -> Nombre {
    calculate_expression(expr, PRECISION_DEFAUT).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_erreur(expr: &str, attendu: ErreurCalcul) {
    assert_eq!(calculate_expression(expr, PRECISION_DEFAUT), Err(attendu), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Valeurs de référence ------------------------ */

#[test]
fn sci_precedence_et_parentheses() {
    assert_eq!(calc_ok("2+3*4"), Nombre::Entier(14));
    assert_eq!(calc_ok("(2+3)*4"), Nombre::Entier(20));
    assert_eq!(calc_ok("2 * (3 + 4) ^ 2"), Nombre::Entier(98));
    assert_eq!(calc_ok("((1))"), Nombre::Entier(1));
}

#[test]
fn sci_puissance_gauche_a_droite() {
    // associativité à gauche conservée : 64, pas 512
    assert_eq!(calc_ok("2^3^2"), Nombre::Entier(64));
}

#[test]
fn sci_types_propages() {
    assert_eq!(calc_ok("7/2"), Nombre::Flottant(3.5));
    assert_eq!(calc_ok("4/2"), Nombre::Flottant(2.0));
    assert_eq!(calc_ok("2^10"), Nombre::Entier(1024));
    assert_eq!(calc_ok("4^0.5"), Nombre::Flottant(2.0));
    assert_eq!(calc_ok("0.1+0.2"), Nombre::Flottant(0.3));
}

#[test]
fn sci_arrondi_precision() {
    assert_eq!(calculate_expression("3.14159", 2), Ok(Nombre::Flottant(3.14)));
    assert_eq!(calculate_expression("3.14159", 4), Ok(Nombre::Flottant(3.1416)));
    assert_eq!(calculate_expression("22/7", 0), Ok(Nombre::Flottant(3.0)));
    assert_eq!(calculate_expression("123456", -3), Ok(Nombre::Entier(123000)));
    assert_eq!(calculate_expression("10/4", 0), Ok(Nombre::Flottant(2.0)));
}

#[test]
fn sci_negatifs() {
    assert_eq!(calc_ok("-5"), Nombre::Entier(-5));
    assert_eq!(calc_ok("-(2+3)"), Nombre::Entier(-5));
    assert_eq!(calc_ok("4*(-2.5)"), Nombre::Flottant(-10.0));
    assert_eq!(calc_ok("(-2)^3"), Nombre::Entier(-8));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs() {
    assert_erreur("5/0", ErreurCalcul::DivisionParZero);
    assert_erreur("5/0.0", ErreurCalcul::DivisionParZero);
    assert_erreur("0^(0-1)", ErreurCalcul::DivisionParZero);
    assert_erreur("(1+2", ErreurCalcul::ParenthesesDesequilibrees);
    assert_erreur(")(", ErreurCalcul::ParenthesesDesequilibrees);
    assert_erreur("2+x", ErreurCalcul::JetonInvalide("x".into()));
    assert_erreur("1..2", ErreurCalcul::NombreInvalide("1..2".into()));
    assert_erreur("", ErreurCalcul::ExpressionIncomplete);
    assert_erreur("1 2", ErreurCalcul::ExpressionIncomplete);
    assert_erreur("9223372036854775807+1", ErreurCalcul::DepassementEntier);
    assert_erreur("(0-8)^0.5", ErreurCalcul::ResultatNonFini);
}

#[test]
fn sci_messages_lisibles() {
    assert_eq!(ErreurCalcul::DivisionParZero.to_string(), "division par zéro");
    assert_eq!(
        ErreurCalcul::JetonInvalide("x".into()).to_string(),
        "jeton invalide : 'x'"
    );
}

/* ------------------------ Limites ------------------------ */

#[test]
fn sci_imbrication_profonde_refusee() {
    let t0 = Instant::now();

    let n = 10_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    let limites = Limites {
        longueur_max: 3 * n,
        profondeur_max: 64,
    };

    assert!(matches!(
        calculate_expression_bornee(&expr, 2, &limites),
        Err(ErreurCalcul::ExpressionTropComplexe { max: 64, .. })
    ));
    budget(t0, Duration::from_millis(200));
}

#[test]
fn sci_longue_somme_plate() {
    let t0 = Instant::now();

    // pas d’imbrication : seule la longueur compte
    let expr = vec!["1"; 2000].join("+");
    let limites = Limites {
        longueur_max: 5000,
        profondeur_max: 64,
    };
    assert_eq!(
        calculate_expression_bornee(&expr, 2, &limites),
        Ok(Nombre::Entier(2000))
    );

    // limite par défaut : refus
    assert!(matches!(
        calculate_expression(&expr, 2),
        Err(ErreurCalcul::ExpressionTropComplexe { .. })
    ));
    budget(t0, Duration::from_millis(200));
}

#[test]
fn sci_precision_extreme_instantanee() {
    let t0 = Instant::now();

    assert_eq!(calculate_expression("5", i32::MIN), Ok(Nombre::Entier(0)));
    assert_eq!(calculate_expression("5", -2_000_000), Ok(Nombre::Entier(0)));
    assert_eq!(calculate_expression("5.5", i32::MIN), Ok(Nombre::Flottant(0.0)));
    assert_eq!(calculate_expression("5.5", i32::MAX), Ok(Nombre::Flottant(5.5)));

    budget(t0, Duration::from_millis(200));
}
