use serde::{Deserialize, Serialize};

/// A name/email pair. Absent fields decode to empty strings, unknown fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Record {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// The record every fresh store starts with.
    pub fn seed() -> Self {
        Self::new("Exemplo", "exemplo@dominio.com")
    }
}

/// Confirmation returned for an accepted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationMessage {
    #[serde(rename = "mensagem")]
    pub message: String,
}

impl ConfirmationMessage {
    pub fn for_record(record: &Record) -> Self {
        Self {
            message: format!("Dados de {} recebidos com sucesso!", record.name),
        }
    }
}
