// src/noyau/jetons.rs

use super::operateurs::Operateur;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Lexème numérique brut, non validé (ex: "12", "3.5", "1.2.3").
    Num(String),
    Op(Operateur),

    LPar,
    RPar,

    // Caractère non reconnu : laissé passer, l’évaluateur le refuse (JetonInvalide).
    Autre(char),
}

impl Tok {
    /// Lexème texte du jeton.
    pub fn lexeme(&self) -> String {
        match self {
            Tok::Num(s) => s.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Autre(c) => c.to_string(),
        }
    }
}

/// Tokenize une chaîne en jetons.
///
/// Règles:
/// - espaces ignorés (ils terminent seulement un nombre en cours)
/// - chiffres et '.' s’accumulent en un seul lexème numérique, sans validation
/// - moins unaire : si le '-' arrive en début d’expression, après '(' ou après
///   un opérateur, on injecte "0" avant lui : "-5" => "0 - 5"
/// - tout autre caractère devient un jeton d’un caractère
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::new();
    let mut nombre = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }

        // tout autre caractère termine le nombre en cours
        if !nombre.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut nombre)));
        }

        if c.is_whitespace() {
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => match Operateur::depuis_symbole(c) {
                Some(op) => Tok::Op(op),
                None => Tok::Autre(c),
            },
        };

        if tok == Tok::Op(Operateur::Moins)
            && matches!(out.last(), None | Some(Tok::LPar) | Some(Tok::Op(_)))
        {
            out.push(Tok::Num("0".to_string()));
        }

        out.push(tok);
    }

    if !nombre.is_empty() {
        out.push(Tok::Num(nombre));
    }

    out
}

/// Liste des lexèmes (tests / journalisation).
pub fn lexemes(tokens: &[Tok]) -> Vec<String> {
    tokens.iter().map(Tok::lexeme).collect()
}

/// Format utilitaire : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    lexemes(tokens).join(" ")
}
