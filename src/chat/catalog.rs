//! Static catalog of models offered in the picker.

/// A model the UI offers by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownModel {
    pub id: &'static str,
    pub icon_url: &'static str,
}

const LLAMA_ICON: &str = "https://em-content.zobj.net/source/twitter/376/llama_1f999.png";
const TORNADO_ICON: &str = "https://em-content.zobj.net/source/twitter/376/tornado_1f32a-fe0f.png";

/// Models offered in the selection list.
pub const KNOWN_MODELS: &[KnownModel] = &[
    KnownModel {
        id: "llama3",
        icon_url: LLAMA_ICON,
    },
    KnownModel {
        id: "llama3:70b",
        icon_url: LLAMA_ICON,
    },
    KnownModel {
        id: "codellama",
        icon_url: LLAMA_ICON,
    },
    KnownModel {
        id: "mistral",
        icon_url: TORNADO_ICON,
    },
];

/// The model selected when a session starts.
pub fn default_model() -> &'static str {
    KNOWN_MODELS[0].id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_in_catalog() {
        assert!(KNOWN_MODELS.iter().any(|m| m.id == default_model()));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in KNOWN_MODELS.iter().enumerate() {
            for b in &KNOWN_MODELS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
