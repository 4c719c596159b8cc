// src/noyau/operateurs.rs
//
// Table des opérateurs : symbole -> (précédence, fonction binaire).
// Source unique pour la reconnaissance (jetons.rs) et pour l’évaluation (eval.rs).
//
// Tous les opérateurs sont associatifs à gauche, y compris '^' :
// 2^3^2 = (2^3)^2 = 64.

use super::erreur::ErreurCalcul;
use super::nombre::{self, Nombre};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

pub struct OperateurSpec {
    pub op: Operateur,
    pub symbole: char,
    pub precedence: u8,
    pub appliquer: fn(Nombre, Nombre) -> Result<Nombre, ErreurCalcul>,
}

/// Ordre = ordre des variantes de `Operateur` (indexation directe).
pub static TABLE_OPERATEURS: [OperateurSpec; 5] = [
    OperateurSpec {
        op: Operateur::Plus,
        symbole: '+',
        precedence: 1,
        appliquer: nombre::addition,
    },
    OperateurSpec {
        op: Operateur::Moins,
        symbole: '-',
        precedence: 1,
        appliquer: nombre::soustraction,
    },
    OperateurSpec {
        op: Operateur::Fois,
        symbole: '*',
        precedence: 2,
        appliquer: nombre::multiplication,
    },
    OperateurSpec {
        op: Operateur::Divise,
        symbole: '/',
        precedence: 2,
        appliquer: nombre::division,
    },
    OperateurSpec {
        op: Operateur::Puissance,
        symbole: '^',
        precedence: 3,
        appliquer: nombre::puissance,
    },
];

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Operateur> {
        TABLE_OPERATEURS
            .iter()
            .find(|s| s.symbole == c)
            .map(|s| s.op)
    }

    pub fn spec(self) -> &'static OperateurSpec {
        &TABLE_OPERATEURS[self as usize]
    }

    pub fn symbole(self) -> char {
        self.spec().symbole
    }

    pub fn precedence(self) -> u8 {
        self.spec().precedence
    }

    pub fn appliquer(self, a: Nombre, b: Nombre) -> Result<Nombre, ErreurCalcul> {
        (self.spec().appliquer)(a, b)
    }
}
