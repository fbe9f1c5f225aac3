//! Intent store: the knowledge base of the local response engine.
//!
//! Intents are loaded once from a JSON document of the form
//! `{"intents": [{"tag", "patterns", "responses"}, ...]}` and are
//! immutable afterwards. Definition order is preserved because the
//! fallback pattern matcher scans intents in order — earlier intents
//! shadow later ones with overlapping patterns.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// A labeled unit of the knowledge base: trigger phrases plus the
/// candidate replies the selector may draw from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Intent {
    pub tag: String,
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

/// Fatal knowledge-base load errors. Any of these aborts startup
/// before a single input is processed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read knowledge base at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid knowledge base document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate intent tag: {0}")]
    DuplicateTag(String),
    #[error("intent '{0}' has an empty response list")]
    EmptyResponses(String),
}

#[derive(Debug, Deserialize)]
struct Document {
    intents: Vec<Intent>,
}

/// Read-only catalog of intents, indexed by tag.
#[derive(Debug, Clone)]
pub struct IntentStore {
    intents: Vec<Intent>,
    by_tag: HashMap<String, usize>,
}

impl IntentStore {
    /// Load the knowledge base from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&content)?;
        info!(path = %path.display(), intents = store.len(), "Knowledge base loaded");
        Ok(store)
    }

    /// Parse and validate a knowledge-base document.
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let doc: Document = serde_json::from_str(content)?;

        let mut by_tag = HashMap::with_capacity(doc.intents.len());
        for (i, intent) in doc.intents.iter().enumerate() {
            if intent.responses.is_empty() {
                return Err(LoadError::EmptyResponses(intent.tag.clone()));
            }
            if by_tag.insert(intent.tag.clone(), i).is_some() {
                return Err(LoadError::DuplicateTag(intent.tag.clone()));
            }
        }

        Ok(Self {
            intents: doc.intents,
            by_tag,
        })
    }

    /// Look up an intent by tag.
    pub fn lookup(&self, tag: &str) -> Option<&Intent> {
        self.by_tag.get(tag).map(|&i| &self.intents[i])
    }

    /// Iterate intents in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Intent> {
        self.intents.iter()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Write the bundled default knowledge base to disk.
    ///
    /// Used by `rigbot onboard` so a fresh install has something to
    /// chat with before the user curates their own file.
    pub fn write_default_template(path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&default_document())?)?;
        Ok(())
    }
}

/// The bundled default PC-building knowledge base.
///
/// The budget/tier tags (`budget_*_gaming`, `workstation_*`,
/// `streaming_build`) must all be present — the tier resolver produces
/// exactly these tags.
pub fn default_document() -> serde_json::Value {
    serde_json::json!({
        "intents": [
            {
                "tag": "greeting",
                "patterns": ["hello", "hey", "hi there", "good morning", "good evening"],
                "responses": [
                    "Hey! I'm your PC-building assistant. Tell me your budget and what the rig is for!",
                    "Hello! Ask me about a build (e.g. 'gaming pc for $1000') or about a specific part."
                ]
            },
            {
                "tag": "goodbye",
                "patterns": ["bye", "goodbye", "see you", "later"],
                "responses": [
                    "Goodbye! Happy building!",
                    "See you! Good luck with the build."
                ]
            },
            {
                "tag": "thanks",
                "patterns": ["thanks", "thank you", "appreciate it"],
                "responses": [
                    "You're welcome! Come back any time.",
                    "Happy to help! Enjoy the new rig."
                ]
            },
            {
                "tag": "help",
                "patterns": ["help", "what can you do", "how does this work"],
                "responses": [
                    "Give me a budget and a use case, like 'workstation for $1500' or 'gaming pc around 900'. I can also answer part questions (GPU, CPU, RAM, storage, PSU, cooling)."
                ]
            },
            {
                "tag": "budget_entry_gaming",
                "patterns": ["cheap gaming pc", "entry level gaming", "budget gaming build"],
                "responses": [
                    "Under $800 I'd pair a Ryzen 5 5600 with an RX 6600 and 16GB of DDR4. Rock-solid 1080p gaming.",
                    "For an entry gaming build: Ryzen 5 5600, RX 6600 or RTX 3050, 16GB RAM, 500GB NVMe. Great 1080p value.",
                    "At that budget, go last-gen: B550 board, Ryzen 5 5600, used RX 6700 if you can find one."
                ]
            },
            {
                "tag": "budget_mid_gaming",
                "patterns": ["mid range gaming pc", "1080p high settings build"],
                "responses": [
                    "Around $800-1400 the sweet spot is a Ryzen 5 7600 with an RX 7700 XT or RTX 4060 Ti. Smooth 1440p.",
                    "Mid-range pick: Ryzen 5 7600, 32GB DDR5, RX 7800 XT if the budget stretches. Excellent 1440p gaming.",
                    "I'd do a B650 board, Ryzen 5 7600, RTX 4060 Ti 16GB, 1TB NVMe at that price."
                ]
            },
            {
                "tag": "budget_high_gaming",
                "patterns": ["high end gaming pc", "1440p ultra build"],
                "responses": [
                    "In the $1400-2000 range: Ryzen 7 7800X3D with an RX 7900 XT or RTX 4070 Ti Super. 1440p ultra, easy.",
                    "High-end pick: 7800X3D, 32GB DDR5-6000, RTX 4070 Ti Super, 2TB NVMe. It'll chew through anything at 1440p."
                ]
            },
            {
                "tag": "budget_enthusiast_gaming",
                "patterns": ["best gaming pc", "no budget gaming build", "4k gaming rig"],
                "responses": [
                    "Above $2000 you're in 4K territory: Ryzen 7 7800X3D, RTX 4080 Super or 4090, 32GB DDR5, 2TB Gen4 NVMe.",
                    "Enthusiast build: 7800X3D, RTX 4090 if it fits the budget, 32GB DDR5-6000 CL30, a 360mm AIO and a quality 1000W PSU."
                ]
            },
            {
                "tag": "workstation_entry",
                "patterns": ["cheap workstation", "budget editing pc"],
                "responses": [
                    "Under $800 for work: Ryzen 5 7600 (6 cores), 32GB RAM, 1TB NVMe, integrated or entry GPU. Fine for code and light editing.",
                    "Entry workstation: prioritize RAM over GPU — Ryzen 5 7600, 32GB, fast NVMe. Add a cheap GPU only if you need the outputs."
                ]
            },
            {
                "tag": "workstation_mid",
                "patterns": ["mid range workstation", "video editing build"],
                "responses": [
                    "For $800-1700: Ryzen 9 7900 (12 cores), 64GB DDR5, RTX 4060 Ti for CUDA, 2TB NVMe. Handles 4K timelines well.",
                    "Mid workstation: 12+ cores (7900), 64GB RAM, an NVIDIA card for the encoders, and two NVMe drives (OS + scratch)."
                ]
            },
            {
                "tag": "workstation_high",
                "patterns": ["professional workstation", "3d rendering rig"],
                "responses": [
                    "Above $1700: Ryzen 9 7950X (16 cores), 64-128GB DDR5, RTX 4080 Super for GPU renders, 4TB of NVMe. A proper render box.",
                    "High-end workstation: 7950X or a Threadripper if the budget allows, 128GB RAM, RTX 4080 Super+, and serious cooling."
                ]
            },
            {
                "tag": "streaming_build",
                "patterns": ["streaming pc", "twitch setup", "stream and game"],
                "responses": [
                    "For streaming in the $1400-2200 range: Ryzen 7 7700X (8 cores for x264), RTX 4070 for NVENC, 32GB RAM, 2TB NVMe.",
                    "Single-PC stream setup: 8 cores minimum (7700X), an NVIDIA GPU for NVENC, 32GB RAM, and a wired network card. Done."
                ]
            },
            {
                "tag": "gpu_advice",
                "patterns": ["which gpu", "graphics card", "gpu recommendation"],
                "responses": [
                    "GPU rule of thumb: RX 6600 for 1080p, RX 7800 XT / RTX 4070 for 1440p, RTX 4080 Super+ for 4K. NVIDIA if you stream or do CUDA work.",
                    "Spend roughly 40% of a gaming budget on the GPU. AMD wins raw raster value, NVIDIA wins encoders and ray tracing."
                ]
            },
            {
                "tag": "cpu_advice",
                "patterns": ["which cpu", "processor", "intel or amd"],
                "responses": [
                    "For pure gaming the 7800X3D is the answer. For mixed work/play, Ryzen 9 7900. Intel 14th gen is fine but runs hotter.",
                    "Six cores for gaming, eight for streaming, twelve plus for editing and rendering. The X3D chips are king for games."
                ]
            },
            {
                "tag": "ram_advice",
                "patterns": ["how much ram", "memory", "ddr5"],
                "responses": [
                    "16GB is the gaming floor, 32GB is the comfortable default, 64GB+ for editing and VMs. On AM5 get DDR5-6000 CL30.",
                    "32GB of DDR5-6000 in two sticks. Don't buy four sticks on AM5 — it hurts memory speeds."
                ]
            },
            {
                "tag": "storage_advice",
                "patterns": ["ssd", "storage", "hard drive", "nvme"],
                "responses": [
                    "Go NVMe-only: 1TB minimum for gaming, 2TB if you can. Hard drives are for bulk archives, not boot drives.",
                    "A Gen4 NVMe like the SN850X or 990 Pro as your main drive. Skip SATA SSDs in a new build unless you need cheap bulk."
                ]
            },
            {
                "tag": "psu_advice",
                "patterns": ["power supply", "psu", "how many watts"],
                "responses": [
                    "Never cheap out on the PSU: 80+ Gold, ATX 3.0 if you run a 40-series. 650W for mid builds, 850W+ for high end.",
                    "650W Gold covers most builds; 850W for an RTX 4080, 1000W for a 4090. Buy a tier-A unit — it protects everything else."
                ]
            },
            {
                "tag": "cooling_advice",
                "patterns": ["cooling", "cpu cooler", "aio or air", "temperatures"],
                "responses": [
                    "A $35 tower cooler (Peerless Assassin) handles anything up to a 7800X3D. AIOs are for 7950X/14900K class chips or aesthetics.",
                    "Air cooling is quieter and lasts longer; a 360mm AIO only earns its keep on 200W+ CPUs. Two intake + one exhaust fan minimum."
                ]
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_document() {
        let json = r#"{"intents": [
            {"tag": "a", "patterns": ["hello"], "responses": ["hi"]},
            {"tag": "b", "patterns": [], "responses": ["x", "y"]}
        ]}"#;
        let store = IntentStore::from_json(json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup("a").unwrap().responses, vec!["hi"]);
        assert!(store.lookup("missing").is_none());
    }

    #[test]
    fn test_duplicate_tag_is_fatal() {
        let json = r#"{"intents": [
            {"tag": "a", "patterns": [], "responses": ["x"]},
            {"tag": "a", "patterns": [], "responses": ["y"]}
        ]}"#;
        let err = IntentStore::from_json(json).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateTag(tag) if tag == "a"));
    }

    #[test]
    fn test_empty_responses_is_fatal() {
        let json = r#"{"intents": [{"tag": "a", "patterns": ["p"], "responses": []}]}"#;
        let err = IntentStore::from_json(json).unwrap_err();
        assert!(matches!(err, LoadError::EmptyResponses(tag) if tag == "a"));
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        assert!(matches!(
            IntentStore::from_json("not json").unwrap_err(),
            LoadError::Parse(_)
        ));
    }

    #[test]
    fn test_load_is_deterministic() {
        let json = default_document().to_string();
        let a = IntentStore::from_json(&json).unwrap();
        let b = IntentStore::from_json(&json).unwrap();
        let tags_a: Vec<_> = a.iter().map(|i| i.tag.clone()).collect();
        let tags_b: Vec<_> = b.iter().map(|i| i.tag.clone()).collect();
        assert_eq!(tags_a, tags_b);
        for (ia, ib) in a.iter().zip(b.iter()) {
            assert_eq!(ia, ib);
        }
    }

    #[test]
    fn test_default_document_covers_all_tier_tags() {
        let store = IntentStore::from_json(&default_document().to_string()).unwrap();
        for tag in [
            "budget_entry_gaming",
            "budget_mid_gaming",
            "budget_high_gaming",
            "budget_enthusiast_gaming",
            "workstation_entry",
            "workstation_mid",
            "workstation_high",
            "streaming_build",
        ] {
            assert!(store.lookup(tag).is_some(), "missing tier tag: {tag}");
        }
    }

    #[test]
    fn test_iteration_preserves_definition_order() {
        let store = IntentStore::from_json(&default_document().to_string()).unwrap();
        assert_eq!(store.iter().next().unwrap().tag, "greeting");
    }
}
