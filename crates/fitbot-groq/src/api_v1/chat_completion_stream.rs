use serde::Deserialize;

/// The outermost object sent for each SSE chunk when `stream = true`.
///
/// Only `choices` is read. Metadata such as `id`, `model` or Groq's `x_groq`
/// usage block is ignored.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkResponse {
    pub choices: Vec<ChatCompletionChunkChoice>,
}

impl ChatCompletionChunkResponse {
    /// Text delta of the first choice, if it carries any.
    pub fn first_delta_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|text| !text.is_empty())
    }
}

/// A single streaming choice payload; `index` and `finish_reason` are not
/// needed to rebuild the reply.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkChoice {
    pub delta: ChatCompletionMessageDelta,
}

/// A delta message as returned when `stream = true`.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessageDelta {
    #[serde(default)]
    pub content: Option<String>,
}
