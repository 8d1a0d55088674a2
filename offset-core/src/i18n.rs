use serde::{Deserialize, Serialize};

/// UI language. German is the primary locale and the startup default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    En,
}

/// Closed set of translatable labels, addressed from markup by `data-i18n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKey {
    Bit,
    Bush,
    Target,
    ResultTitle,
    TemplateSize,
    Offset,
    Error,
    ErrorMsg,
    Toggle,
}

impl LabelKey {
    pub const ALL: [LabelKey; 9] = [
        LabelKey::Bit,
        LabelKey::Bush,
        LabelKey::Target,
        LabelKey::ResultTitle,
        LabelKey::TemplateSize,
        LabelKey::Offset,
        LabelKey::Error,
        LabelKey::ErrorMsg,
        LabelKey::Toggle,
    ];

    /// Identifier used in `data-i18n` attributes.
    pub fn id(self) -> &'static str {
        match self {
            LabelKey::Bit => "bit",
            LabelKey::Bush => "bush",
            LabelKey::Target => "target",
            LabelKey::ResultTitle => "result_title",
            LabelKey::TemplateSize => "template_size",
            LabelKey::Offset => "offset",
            LabelKey::Error => "error",
            LabelKey::ErrorMsg => "error_msg",
            LabelKey::Toggle => "toggle",
        }
    }

    pub fn from_id(id: &str) -> Option<LabelKey> {
        LabelKey::ALL.into_iter().find(|k| k.id() == id)
    }
}

impl Locale {
    /// Parse a language code such as `en`, `EN`, `de-DE` or `en_US`.
    pub fn from_code(code: &str) -> Option<Locale> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "de" => Some(Locale::De),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }

    /// The only transition: flip to the other language.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::De => Locale::En,
            Locale::En => Locale::De,
        }
    }

    pub fn label(self, key: LabelKey) -> &'static str {
        match self {
            Locale::De => match key {
                LabelKey::Bit => "Fräser",
                LabelKey::Bush => "Kopierring",
                LabelKey::Target => "Gewünschte Fräsung",
                LabelKey::ResultTitle => "ERGEBNIS",
                LabelKey::TemplateSize => "SCHABLONENMASS (LOCHGRÖSSE)",
                LabelKey::Offset => "VERSATZ",
                LabelKey::Error => "FEHLER",
                LabelKey::ErrorMsg => "Fräser > Ring",
                LabelKey::Toggle => "DE",
            },
            Locale::En => match key {
                LabelKey::Bit => "Router Bit",
                LabelKey::Bush => "Guide Bushing",
                LabelKey::Target => "Target Cut Size",
                LabelKey::ResultTitle => "RESULT",
                LabelKey::TemplateSize => "TEMPLATE SIZE (HOLE SIZE)",
                LabelKey::Offset => "OFFSET",
                LabelKey::Error => "ERROR",
                LabelKey::ErrorMsg => "Bit > Bushing",
                LabelKey::Toggle => "EN",
            },
        }
    }

    /// Lookup by markup identifier. Unknown identifiers yield `None` and the
    /// element keeps its current text.
    pub fn lookup(self, id: &str) -> Option<&'static str> {
        LabelKey::from_id(id).map(|k| self.label(k))
    }
}
