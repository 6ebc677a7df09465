//! Built-in settings defaults
//!
//! The scalar fallback table answers reads for keys nothing has persisted
//! yet, and the seeded collections stand in when a whole array block is
//! absent. None of these are ever written back implicitly.

use tiny_skia::Color;

use crate::settings::backend::SettingsValue;
use crate::settings::store::{GlyphSet, MarkColor};

/// Name of the built-in glyph set.
pub const LATIN_DEFAULT_NAME: &str = "Latin-default";

/// Glyph names of the built-in Latin set, in display order.
pub const LATIN_DEFAULT_GLYPH_NAMES: [&str; 197] = [
    "space", "exclam", "quotesingle", "quotedbl", "numbersign", "dollar",
    "percent", "ampersand", "parenleft", "parenright", "asterisk", "plus",
    "comma", "hyphen", "period", "slash", "zero", "one", "two", "three",
    "four", "five", "six", "seven", "eight", "nine", "colon", "semicolon",
    "less", "equal", "greater", "question", "at", "A", "B", "C", "D", "E",
    "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z", "bracketleft", "backslash",
    "bracketright", "asciicircum", "underscore", "grave", "a", "b", "c",
    "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q",
    "r", "s", "t", "u", "v", "w", "x", "y", "z", "braceleft", "bar",
    "braceright", "asciitilde", "exclamdown", "cent", "sterling",
    "currency", "yen", "brokenbar", "section", "copyright", "ordfeminine",
    "guillemotleft", "logicalnot", "registered", "macron", "degree",
    "plusminus", "twosuperior", "threesuperior", "mu", "paragraph",
    "periodcentered", "onesuperior", "ordmasculine", "guillemotright",
    "onequarter", "onehalf", "threequarters", "questiondown", "Agrave",
    "Aacute", "Acircumflex", "Atilde", "Adieresis", "Aring", "AE",
    "Ccedilla", "Egrave", "Eacute", "Ecircumflex", "Edieresis", "Igrave",
    "Iacute", "Icircumflex", "Idieresis", "Eth", "Ntilde", "Ograve",
    "Oacute", "Ocircumflex", "Otilde", "Odieresis", "multiply", "Oslash",
    "Ugrave", "Uacute", "Ucircumflex", "Udieresis", "Yacute", "Thorn",
    "germandbls", "agrave", "aacute", "acircumflex", "atilde", "adieresis",
    "aring", "ae", "ccedilla", "egrave", "eacute", "ecircumflex",
    "edieresis", "igrave", "iacute", "icircumflex", "idieresis", "eth",
    "ntilde", "ograve", "oacute", "ocircumflex", "otilde", "odieresis",
    "divide", "oslash", "ugrave", "uacute", "ucircumflex", "udieresis",
    "yacute", "thorn", "ydieresis", "dotlessi", "gravecomb", "acutecomb",
    "uni0302", "uni0308", "uni030A", "tildecomb", "uni0327", "quoteleft",
    "quoteright", "minus",
];

/// Sample texts offered by the metrics window combo box.
pub fn metrics_combo_box_items() -> Vec<String> {
    [
        "abcdefghijklmnopqrstuvwxyz",
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        "0123456789",
        "nn/? nono/? oo",
        "HH/? HOHO/? OO",
    ]
    .iter()
    .map(|item| item.to_string())
    .collect()
}

/// Looks up the scalar fallback for `key`.
///
/// Consulted by reads after the backend comes back empty; an absent entry
/// here means the key has no built-in value.
pub fn fallback(key: &str) -> Option<SettingsValue> {
    match key {
        "metricsWindow/comboBoxItems" => Some(SettingsValue::List(metrics_combo_box_items())),
        "misc/loadRecentFile" => Some(SettingsValue::Bool(false)),
        "settings/defaultGlyphSet" => Some(SettingsValue::Text(LATIN_DEFAULT_NAME.to_string())),
        _ => None,
    }
}

/// The built-in Latin glyph set, materialized.
pub fn latin_default_glyph_set() -> GlyphSet {
    GlyphSet {
        name: LATIN_DEFAULT_NAME.to_string(),
        glyphs: LATIN_DEFAULT_GLYPH_NAMES
            .iter()
            .map(|name| name.to_string())
            .collect(),
    }
}

/// Mark colors seeded when none are persisted: Red, Yellow, Green.
pub fn default_mark_colors() -> Vec<MarkColor> {
    vec![
        MarkColor {
            name: "Red".to_string(),
            color: Color::from_rgba8(255, 0, 0, 255),
        },
        MarkColor {
            name: "Yellow".to_string(),
            color: Color::from_rgba8(255, 255, 0, 255),
        },
        MarkColor {
            name: "Green".to_string(),
            color: Color::from_rgba8(0, 255, 0, 255),
        },
    ]
}
