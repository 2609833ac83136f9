//! Catalog of selectable completion models.
//!
//! Labels are what the user sees; identifiers are sent verbatim to the
//! completion API. Nothing here checks that an identifier is still served:
//! a retired model only shows up as an API error at call time.

/// One entry of the model catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Model {
    /// Human-readable label shown in the model picker.
    pub label: &'static str,
    /// Identifier sent in the `model` field of the request.
    pub id: &'static str,
}

const MODELS: &[Model] = &[
    Model {
        label: "Llama 3 8B",
        id: "llama3-8b-8192",
    },
    Model {
        label: "Llama 3.2 1B (Preview)",
        id: "llama-3.2-1b-preview",
    },
    Model {
        label: "Llama 3 70B",
        id: "llama3-70b-8192",
    },
    Model {
        label: "Mixtral 8x7B",
        id: "mixtral-8x7b-32768",
    },
    Model {
        label: "Gemma 2 9B",
        id: "gemma2-9b-it",
    },
    Model {
        label: "Llama 3.2 11B Vision (Preview)",
        id: "llama-3.2-11b-vision-preview",
    },
    Model {
        label: "Llama 3.2 11B Text (Preview)",
        id: "llama-3.2-11b-text-preview",
    },
    Model {
        label: "Llama 3.1 8B Instant (Text-Only Workloads)",
        id: "llama-3.1-8b-instant",
    },
    Model {
        label: "Llama 3.2 90B Vision (Preview)",
        id: "llama-3.2-90b-vision-preview",
    },
    Model {
        label: "Llama 3.1 70B Versatile",
        id: "llama-3.1-70b-versatile",
    },
    Model {
        label: "Llama 3.3 70B SpecDec",
        id: "llama-3.3-70b-specdec",
    },
    Model {
        label: "Llama 3.3 70B Versatile",
        id: "llama-3.3-70b-versatile",
    },
];

/// All models, in display order.
pub fn all() -> &'static [Model] {
    MODELS
}

/// The model preselected in the picker.
pub fn default_model() -> &'static Model {
    &MODELS[0]
}

/// Look up a model by its label.
pub fn resolve(label: &str) -> Option<&'static Model> {
    MODELS.iter().find(|m| m.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<_> = all().iter().map(|m| m.label).collect();
        assert_eq!(labels.len(), all().len());
    }

    #[test]
    fn resolve_known_and_unknown() {
        assert_eq!(resolve("Mixtral 8x7B").map(|m| m.id), Some("mixtral-8x7b-32768"));
        assert_eq!(
            resolve("Llama 3.3 70B Versatile").map(|m| m.id),
            Some("llama-3.3-70b-versatile")
        );
        assert!(resolve("GPT-5").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn default_is_first() {
        assert_eq!(default_model().id, "llama3-8b-8192");
    }
}
