use std::borrow::Cow;

use fitbot_core::model::{GroqModel, Model};

pub const LLAMA_3_3_70B_VERSATILE: &str = "llama-3.3-70b-versatile";
pub const LLAMA_3_1_8B_INSTANT: &str = "llama-3.1-8b-instant";

pub(crate) fn map_model(model: Model) -> Cow<'static, str> {
    match model {
        Model::Custom(custom) => custom,
        Model::Groq(GroqModel::Llama3_3_70bVersatile) => LLAMA_3_3_70B_VERSATILE.into(),
        Model::Groq(GroqModel::Llama3_1_8bInstant) => LLAMA_3_1_8B_INSTANT.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_ids_pass_through() {
        assert_eq!(map_model(Model::from("mixtral-8x7b".to_owned())), "mixtral-8x7b");
        assert_eq!(map_model(Model::default()), LLAMA_3_3_70B_VERSATILE);
    }
}
