//! Wire models for the Gemini `generateContent` REST call. Only the fields
//! read or written here are modelled.

use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<ContentModel>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ContentModel {
    #[serde(default)]
    pub parts: Vec<PartModel>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PartModel {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<CandidateModel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateModel {
    pub content: Option<ContentModel>,
}

impl GenerateContentRequest {
    pub(crate) fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![ContentModel {
                parts: vec![PartModel {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, with its parts joined. `None` when the
    /// response carries no text at all.
    pub(crate) fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
