//! Language codes and the task presenter's language configuration

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// ISO 639-1 language codes.
const LANGUAGE_CODES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja",
    "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw",
    "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml",
    "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu", "rm", "rn", "ro",
    "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr",
    "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr",
    "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Whether `code` is a recognized ISO 639-1 language code.
pub fn is_language_code(code: &str) -> bool {
    LANGUAGE_CODES.binary_search(&code).is_ok()
}

/// The languages a task presenter is written in.
///
/// `default` is always one of `available`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub default: String,
    pub available: Vec<String>,
}

impl LanguageConfig {
    pub const DEFAULT_CODE: &'static str = "en";

    /// Resolve the language configuration a task presenter effectively uses.
    ///
    /// Missing keys are filled the same way the formatter fills them: a
    /// missing `default` is `en` when it is available and the first
    /// available language otherwise, a missing `available` holds only the
    /// default. Returns `None` for a `language`
    /// value of the wrong shape.
    pub fn resolve(language: Option<&Value>) -> Option<Self> {
        let Some(language) = language else {
            return Some(Self::default());
        };
        let object = language.as_object()?;

        let available = match object.get("available") {
            Some(Value::Array(codes)) => Some(
                codes
                    .iter()
                    .map(|code| code.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()?,
            ),
            Some(_) => return None,
            None => None,
        };
        let default = match object.get("default") {
            Some(Value::String(code)) => Some(code.clone()),
            Some(_) => return None,
            None => None,
        };

        match (default, available) {
            (Some(default), Some(available)) => Some(Self { default, available }),
            (Some(default), None) => Some(Self {
                available: vec![default.clone()],
                default,
            }),
            (None, Some(available)) => {
                let default = if available.iter().any(|code| code == Self::DEFAULT_CODE) {
                    Self::DEFAULT_CODE.to_string()
                } else {
                    available
                        .first()
                        .cloned()
                        .unwrap_or_else(|| Self::DEFAULT_CODE.to_string())
                };
                Some(Self { default, available })
            }
            (None, None) => Some(Self::default()),
        }
    }

    /// The configuration as a `language` mapping.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("default".into(), json!(self.default));
        map.insert("available".into(), json!(self.available));
        map
    }

    pub fn is_available(&self, code: &str) -> bool {
        self.available.iter().any(|available| available == code)
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: Self::DEFAULT_CODE.to_string(),
            available: vec![Self::DEFAULT_CODE.to_string()],
        }
    }
}
