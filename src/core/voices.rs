use serde::Serialize;

/// A prebuilt provider voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Voice {
    /// Voice name sent to the provider
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Gender of the voice
    pub gender: &'static str,
}

/// Voice used when a request does not pick one
pub const DEFAULT_VOICE: &str = "Kore";

const VOICES: &[Voice] = &[
    Voice {
        id: "Kore",
        name: "Kore",
        gender: "Female",
    },
    Voice {
        id: "Puck",
        name: "Puck",
        gender: "Male",
    },
    Voice {
        id: "Charon",
        name: "Charon",
        gender: "Male",
    },
    Voice {
        id: "Zephyr",
        name: "Zephyr",
        gender: "Female",
    },
    Voice {
        id: "Fenrir",
        name: "Fenrir",
        gender: "Male",
    },
];

/// All voices offered to users, in display order
pub fn available_voices() -> &'static [Voice] {
    VOICES
}

/// Looks up a voice by its exact id
pub fn find_voice(id: &str) -> Option<&'static Voice> {
    VOICES.iter().find(|voice| voice.id == id)
}
