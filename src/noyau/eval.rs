//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> évaluation à deux piles (shunting-yard) -> arrondi
//!
//! Les piles sont locales à chaque appel : aucun état partagé hors de la
//! table des opérateurs (lecture seule).

use tracing::{debug, trace, warn};

use super::erreur::ErreurCalcul;
use super::format::arrondir;
use super::jetons::{format_tokens, tokenize, Tok};
use super::nombre::Nombre;
use super::operateurs::Operateur;

/// Précision d’arrondi par défaut (chiffres après la virgule).
pub const PRECISION_DEFAUT: i32 = 2;

/// Garde-fous contre les entrées pathologiques.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    /// Longueur max de l’entrée, en caractères.
    pub longueur_max: usize,
    /// Imbrication max des parenthèses.
    pub profondeur_max: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            longueur_max: 1024,
            profondeur_max: 64,
        }
    }
}

/// Élément de la pile d’opérateurs : un opérateur ou la marque '('.
#[derive(Clone, Copy, Debug)]
enum Pendant {
    Op(Operateur),
    ParG,
}

/// API publique : calcule une expression et l’arrondit à `precision` chiffres
/// (limites par défaut).
pub fn calculate_expression(expression: &str, precision: i32) -> Result<Nombre, ErreurCalcul> {
    calculate_expression_bornee(expression, precision, &Limites::default())
}

pub fn calculate_expression_bornee(
    expression: &str,
    precision: i32,
    limites: &Limites,
) -> Result<Nombre, ErreurCalcul> {
    let longueur = expression.chars().count();
    if longueur > limites.longueur_max {
        warn!(longueur, max = limites.longueur_max, "entrée trop longue");
        return Err(ErreurCalcul::ExpressionTropComplexe {
            raison: "entrée trop longue",
            max: limites.longueur_max,
        });
    }

    let jetons = tokenize(expression);
    debug!(jetons = %format_tokens(&jetons), "tokenisation");

    let brut = evaluate(&jetons, limites)?;
    let resultat = arrondir(brut, precision)?;
    debug!(%brut, %resultat, precision, "évaluation terminée");

    Ok(resultat)
}

/// Évalue une suite de jetons (deux piles : opérandes + opérateurs).
///
/// - '>=' sur la précédence : égalité => on réduit d’abord à gauche,
///   donc tout est associatif à gauche (y compris '^').
/// - première erreur => abandon immédiat.
pub fn evaluate(jetons: &[Tok], limites: &Limites) -> Result<Nombre, ErreurCalcul> {
    let mut operandes: Vec<Nombre> = Vec::new();
    let mut operateurs: Vec<Pendant> = Vec::new();
    let mut profondeur: usize = 0;

    for tok in jetons {
        match tok {
            Tok::Num(lexeme) => operandes.push(Nombre::depuis_lexeme(lexeme)?),

            Tok::Op(op) => {
                while let Some(&Pendant::Op(sommet)) = operateurs.last() {
                    if sommet.precedence() < op.precedence() {
                        break;
                    }
                    operateurs.pop();
                    reduire(sommet, &mut operandes)?;
                }
                operateurs.push(Pendant::Op(*op));
            }

            Tok::LPar => {
                profondeur += 1;
                if profondeur > limites.profondeur_max {
                    warn!(profondeur, max = limites.profondeur_max, "imbrication trop profonde");
                    return Err(ErreurCalcul::ExpressionTropComplexe {
                        raison: "parenthèses trop imbriquées",
                        max: limites.profondeur_max,
                    });
                }
                operateurs.push(Pendant::ParG);
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match operateurs.pop() {
                        Some(Pendant::Op(sommet)) => reduire(sommet, &mut operandes)?,
                        Some(Pendant::ParG) => break,
                        None => return Err(ErreurCalcul::ParenthesesDesequilibrees),
                    }
                }
                profondeur -= 1;
            }

            Tok::Autre(c) => return Err(ErreurCalcul::JetonInvalide(c.to_string())),
        }
    }

    // vide la pile d’opérateurs
    while let Some(p) = operateurs.pop() {
        match p {
            Pendant::Op(op) => reduire(op, &mut operandes)?,
            Pendant::ParG => return Err(ErreurCalcul::ParenthesesDesequilibrees),
        }
    }

    match operandes.as_slice() {
        [resultat] => Ok(*resultat),
        _ => Err(ErreurCalcul::ExpressionIncomplete),
    }
}

/// Applique `op` aux deux opérandes du sommet (b dépilé d’abord, puis a)
/// et repousse exactement un résultat.
fn reduire(op: Operateur, operandes: &mut Vec<Nombre>) -> Result<(), ErreurCalcul> {
    let b = operandes.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;
    let a = operandes.pop().ok_or(ErreurCalcul::ExpressionIncomplete)?;

    let r = op.appliquer(a, b)?;
    trace!(%a, op = %op.symbole(), %b, %r, "réduction");

    operandes.push(r);
    Ok(())
}
