//! Persona selection: the audience whose register the text is rewritten into.
//!
//! Unknown or missing targets fall back to `Boss`. Adding a variant forces a new
//! arm in `instruction`, so every persona always has a prompt.

use serde::{Deserialize, Deserializer};

use crate::conversion::prompts::{BOSS_PROMPT, COLLEAGUE_PROMPT, CUSTOMER_PROMPT};
use crate::llm_client::prompts::with_plain_output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    #[default]
    Boss,
    Colleague,
    Customer,
}

impl Persona {
    /// Resolves a raw `target` value. Anything unrecognized becomes `Boss`.
    pub fn from_target(target: Option<&str>) -> Self {
        match target.map(str::trim) {
            Some("boss") => Persona::Boss,
            Some("colleague") => Persona::Colleague,
            Some("customer") => Persona::Customer,
            _ => Persona::Boss,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Persona::Boss => "boss",
            Persona::Colleague => "colleague",
            Persona::Customer => "customer",
        }
    }

    /// The fixed persona instruction.
    pub fn instruction(self) -> &'static str {
        match self {
            Persona::Boss => BOSS_PROMPT,
            Persona::Colleague => COLLEAGUE_PROMPT,
            Persona::Customer => CUSTOMER_PROMPT,
        }
    }

    /// The full system prompt sent upstream.
    pub fn system_prompt(self) -> String {
        with_plain_output(self.instruction())
    }
}

// Accepts any JSON value so a bad `target` never rejects the whole request.
impl<'de> Deserialize<'de> for Persona {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Persona::from_target(value.as_str()))
    }
}
