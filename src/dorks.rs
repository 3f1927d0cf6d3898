/// A predefined query and the exposure it is meant to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dork {
    pub key: &'static str,
    pub query: &'static str,
    pub risk: &'static str,
}

pub const DORKS: [Dork; 4] = [
    Dork {
        key: "1",
        query: r#"intitle:"index of" "backup.zip""#,
        risk: "⚠️ Riesgo: Posibles archivos de respaldo expuestos.",
    },
    Dork {
        key: "2",
        query: r#"filetype:env "DB_PASSWORD""#,
        risk: "⚠️ Riesgo: Archivos de configuración con claves filtradas.",
    },
    Dork {
        key: "3",
        query: "inurl:admin site:example.com",
        risk: "⚠️ Riesgo: Paneles de administración visibles públicamente.",
    },
    Dork {
        key: "4",
        query: "filetype:sql password",
        risk: "⚠️ Riesgo: Archivos SQL con datos de acceso sensibles.",
    },
];

pub fn find(key: &str) -> Option<&'static Dork> {
    DORKS.iter().find(|d| d.key == key)
}

pub fn format_menu() -> String {
    let mut out = String::from("\n🎯 Menú de Google Dorks\n");
    for dork in &DORKS {
        out.push_str(&format!("{}. {}\n", dork.key, dork.query));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_one_through_four_in_order() {
        let keys: Vec<_> = DORKS.iter().map(|d| d.key).collect();
        assert_eq!(keys, ["1", "2", "3", "4"]);
    }

    #[test]
    fn find_known_key() {
        let dork = find("4").unwrap();
        assert_eq!(dork.query, "filetype:sql password");
        assert!(dork.risk.starts_with("⚠️ Riesgo:"));
    }

    #[test]
    fn find_rejects_unknown_and_padded_keys() {
        assert!(find("5").is_none());
        assert!(find("").is_none());
        assert!(find(" 1").is_none());
    }

    #[test]
    fn menu_lists_every_query() {
        let menu = format_menu();
        assert!(menu.contains("Menú de Google Dorks"));
        for dork in &DORKS {
            assert!(menu.contains(&format!("{}. {}", dork.key, dork.query)));
        }
        assert_eq!(menu.lines().filter(|l| !l.is_empty()).count(), 5);
    }
}
