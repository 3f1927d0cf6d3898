use std::io::{self, Write};

use crate::search::types::SearchItem;

const HEADER: &str = "------- Nuevo resultado -------";
const FOOTER: &str = "-------------------------------";
const PLACEHOLDER: &str = "(none)";

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

pub fn format_results(items: &[SearchItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(HEADER);
        out.push('\n');
        out.push_str(&format!("Título: {}\n", field(&item.title)));
        out.push_str(&format!("Descripción: {}\n", field(&item.snippet)));
        out.push_str(&format!("Enlace: {}\n", field(&item.link)));
        out.push_str(FOOTER);
        out.push('\n');
    }
    out
}

/// Writes one delimited block per item, in input order.
pub fn display(out: &mut impl Write, items: &[SearchItem]) -> io::Result<()> {
    out.write_all(format_results(items).as_bytes())
}
