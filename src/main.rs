// src/main.rs
//
// Calculatrice infixe — point d’entrée ligne de commande
// ------------------------------------------------------
// - avec EXPRESSION : une évaluation, code de sortie 1 en cas d’erreur
// - sans EXPRESSION : lecture ligne à ligne sur stdin (quit/exit, :p N)
//
// Journalisation sur stderr (RUST_LOG, défaut "warn", --verbose => "debug").

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use calculatrice_infixe::app::{self, Session};
use calculatrice_infixe::{Limites, PRECISION_DEFAUT};

#[derive(Parser, Debug)]
#[command(author, version, about = "Calcule une expression arithmétique (+ - * / ^, parenthèses)")]
struct Cli {
    /// Expression à calculer (sinon : lecture sur stdin)
    expression: Option<String>,

    /// Nombre de chiffres après la virgule (négatif : dizaines, centaines…)
    #[arg(short, long, default_value_t = PRECISION_DEFAUT, allow_negative_numbers = true)]
    precision: i32,

    /// Longueur max de l’entrée (caractères)
    #[arg(long, default_value_t = Limites::default().longueur_max)]
    longueur_max: usize,

    /// Imbrication max des parenthèses
    #[arg(long, default_value_t = Limites::default().profondeur_max)]
    profondeur_max: usize,

    /// Journalisation détaillée
    #[arg(short, long)]
    verbose: bool,
}

fn installer_journal(verbose: bool) {
    let defaut = if verbose { "debug" } else { "warn" };
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filtre)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    installer_journal(cli.verbose);
    debug!(?cli, "démarrage");

    let mut session = Session::new(Limites {
        longueur_max: cli.longueur_max,
        profondeur_max: cli.profondeur_max,
    });
    session.set_precision(cli.precision);

    let Some(expression) = cli.expression else {
        return match app::boucle(&mut session, io::stdin().lock(), io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("erreur d’E/S : {e}");
                ExitCode::FAILURE
            }
        };
    };

    session.entree = expression;
    session.eval_via_noyau();
    println!("{}", session.rendu());

    if session.a_erreur() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
