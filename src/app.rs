use std::io::{self, BufRead, Write};

use tracing::info;

use crate::display::display;
use crate::dorks::{self, format_menu};
use crate::search::Lang;
use crate::search::client::{SearchClient, search_or_log};

const PROMPT: &str = "\n👉 Ingresa el número del Dork que deseas ejecutar: ";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub start: u32,
    pub lang: Lang,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Displayed { count: usize },
    InvalidOption,
    NoResults,
}

/// Shows the menu, reads one selection, runs its dork and prints the results followed by the risk label.
///
/// An empty result list and a failed search end the same way.
pub async fn run(
    client: &impl SearchClient,
    options: &RunOptions,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<Outcome> {
    out.write_all(format_menu().as_bytes())?;
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    let line = String::from_utf8_lossy(&line);
    let choice = line.trim();

    let Some(dork) = dorks::find(choice) else {
        writeln!(out, "❌ Opción inválida.")?;
        return Ok(Outcome::InvalidOption);
    };

    writeln!(out, "\n🕵️‍♂️ Ejecutando búsqueda para: {}\n", dork.query)?;
    out.flush()?;
    info!(key = dork.key, query = dork.query, "running dork");

    match search_or_log(client, dork.query, options.start, &options.lang).await {
        Some(items) if !items.is_empty() => {
            display(out, &items)?;
            writeln!(out, "{}", dork.risk)?;
            Ok(Outcome::Displayed { count: items.len() })
        }
        _ => {
            info!("no results found or an error occurred during the search");
            Ok(Outcome::NoResults)
        }
    }
}
