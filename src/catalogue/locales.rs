//! Locales with a published Apple glossary.

/// `(code, volume name, Vim menu language)`
pub(super) const LOCALES: &[(&str, &str, Option<&str>)] = &[
    ("ar", "Arabic", None),
    ("ca", "Catalan", Some("ca_es")),
    ("cs", "Czech", Some("cs_cz")),
    ("da", "Danish", Some("da")),
    ("de", "German", Some("de_de")),
    ("el", "Greek", None),
    // Apple does not provide a glossary for en.
    ("en", "Australian English", None),
    ("en-AU", "Australian English", None),
    ("en-GB", "British English", Some("en_gb")),
    ("es", "Spanish", Some("es_es")),
    ("es-419", "Latin", None),
    ("fi", "Finnish", Some("fi_fi")),
    ("fr", "Universal French", Some("fr_fr")),
    ("fr-CA", "Canadian", None),
    ("he", "Hebrew", None),
    ("hi", "Hindi", None),
    ("hr", "Croatian", None),
    ("hu", "Hungarian", Some("hu_hu")),
    ("id", "Indonesian", None),
    ("it", "Italian", Some("it_it")),
    ("ja", "Japanese", Some("ja")),
    ("ko", "Korean", Some("ko_kr")),
    ("ms", "Malay", None),
    ("nb", "Norwegian", Some("nb_no")),
    ("nl", "Dutch", Some("nl_nl")),
    ("pl", "Polish", Some("pl_pl")),
    ("pt-BR", "Brazilian", Some("pt_br")),
    ("pt-PT", "Portuguese", Some("pt_pt")),
    ("ro", "Romanian", None),
    ("ru", "Russian", Some("ru_ru")),
    ("sk", "Slovak", Some("sk_sk")),
    ("sv", "Swedish", Some("sv_se")),
    ("th", "Thai", None),
    ("tr", "Turkish", Some("tr_tr")),
    ("uk", "Ukrainian", Some("uk_ua")),
    ("vi", "Vietnamese", None),
    ("zh-Hans", "Simplified Chinese", Some("zh_cn")),
    ("zh-Hant", "Traditional Chinese", Some("zh_tw")),
    ("zh-HK", "Hong Kong", None),
];
