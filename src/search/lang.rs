use std::fmt;
use std::str::FromStr;

const LR_PREFIX: &str = "lang_";

/// Language restriction sent as the `lr` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lang(String);

impl Default for Lang {
    fn default() -> Self {
        Lang("es".to_string())
    }
}

impl Lang {
    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn to_lr(&self) -> String {
        format!("{LR_PREFIX}{}", self.0)
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let code = code.strip_prefix(LR_PREFIX).unwrap_or(code);
        if code.is_empty() {
            return Err("language code must not be empty".to_string());
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!("invalid language code: '{s}'"));
        }
        Ok(Lang(code.to_string()))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_spanish() {
        assert_eq!(Lang::default().to_lr(), "lang_es");
    }

    #[test]
    fn bare_code_gets_prefixed() {
        let lang: Lang = "en".parse().unwrap();
        assert_eq!(lang.to_lr(), "lang_en");
    }

    #[test]
    fn prefixed_code_is_not_doubled() {
        let lang: Lang = "lang_zh-CN".parse().unwrap();
        assert_eq!(lang.code(), "zh-CN");
        assert_eq!(lang.to_lr(), "lang_zh-CN");
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!("".parse::<Lang>().is_err());
        assert!("lang_".parse::<Lang>().is_err());
        assert!("es&key=x".parse::<Lang>().is_err());
    }
}
