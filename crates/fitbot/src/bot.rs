//! The chat-turn driver handed to the user interface.
//!
//! [`FitBot`] is **generic over the backend type `B`**, so the same driver
//! works against Groq in production and a scripted provider in tests.
//! Every turn rebuilds the full conversation: the persona instruction, the
//! caller's normalized history, then the new user message.
use std::sync::Arc;

use fitbot_core::{
    ChatCompleteParameters, GenerationConfig, StreamingChatProvider,
    error::FitbotError,
    generic::Message,
    history::History,
    model::Model,
};
use fitbot_prompt::chain::PromptChain;
use fitbot_types::fragments::{
    FitnessGoal, PERSONA_INSTRUCTION, StaticFragment, persona_instruction,
};
use futures_core::Stream;
use futures_util::StreamExt;
use tracing::{debug, warn};

/// A fitness coach bound to a single streaming backend.
///
/// Cloning is cheap; the backend sits behind an `Arc`.
pub struct FitBot<B> {
    backend: Arc<B>,
    model: Model,
    config: GenerationConfig,
    persona: String,
}

impl<B> Clone for FitBot<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            model: self.model.clone(),
            config: self.config.clone(),
            persona: self.persona.clone(),
        }
    }
}

impl<B> FitBot<B>
where
    B: StreamingChatProvider,
{
    /// Create a bot with the default model, default sampling settings and
    /// the plain persona instruction.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            model: Model::default(),
            config: GenerationConfig::default(),
            persona: PERSONA_INSTRUCTION.to_owned(),
        }
    }

    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Extend the persona with the focus points of a known goal.
    pub fn with_goal(mut self, goal: FitnessGoal) -> Self {
        self.persona = persona_instruction(Some(goal));
        self
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The exact message list sent for a turn.
    pub fn conversation(&self, message: impl Into<String>, history: History) -> Vec<Message> {
        PromptChain::new()
            .with(StaticFragment::from(self.persona.as_str()))
            .with(history)
            .with(Message::user(message))
            .build()
    }

    /// Start a turn and return the backend's snapshot stream untouched.
    ///
    /// Each item is the full reply so far. Errors are typed and end the
    /// stream.
    pub fn stream_reply(&self, message: impl Into<String>, history: History) -> B::Snapshots<'_> {
        let messages = self.conversation(message, history);
        debug!(
            model = ?self.model,
            messages = messages.len(),
            "starting chat turn"
        );

        let params = ChatCompleteParameters::new(messages, self.model.clone())
            .with_config(self.config.clone());
        self.backend.chat_complete_stream(params)
    }

    /// Start a turn and return what the user should see after every update.
    ///
    /// Items are the growing reply text. If the turn fails, the last item
    /// carries the rendered error, appended after a blank line to whatever
    /// text had already arrived. The stream never yields an error itself.
    pub fn respond(
        &self,
        message: impl Into<String>,
        history: History,
    ) -> impl Stream<Item = String> + Send + '_ {
        let snapshots = self.stream_reply(message, history);

        async_stream::stream! {
            futures_util::pin_mut!(snapshots);
            let mut shown = String::new();

            while let Some(item) = snapshots.next().await {
                match item {
                    Ok(snapshot) => {
                        shown.clone_from(&snapshot);
                        yield snapshot;
                    }
                    Err(err) => {
                        warn!(error = %err, chars = shown.len(), "chat turn failed");
                        let rendered = render_error(&err);
                        if shown.is_empty() {
                            yield rendered;
                        } else {
                            yield format!("{shown}\n\n{rendered}");
                        }
                        return;
                    }
                }
            }

            debug!(chars = shown.len(), "chat turn complete");
        }
    }
}

#[cfg(feature = "groq")]
impl FitBot<fitbot_groq::GroqAdapter> {
    /// Build a Groq-backed bot from `GROQ_API_KEY`, `GROQ_BASE_URL` and the
    /// optional `GROQ_MODEL` override. A `.env` file is honoured.
    ///
    /// # Errors
    ///
    /// * [`FitbotError::Configuration`] – if no API key is configured.
    pub fn from_env() -> fitbot_core::error::Result<Self> {
        let backend = fitbot_groq::GroqAdapterBuilder::new_from_env().build()?;
        let bot = Self::new(backend);

        Ok(match std::env::var("GROQ_MODEL") {
            Ok(model) if !model.trim().is_empty() => bot.with_model(model.trim().to_owned()),
            _ => bot,
        })
    }
}

/// Turn an error into the text shown in place of (or after) a reply.
pub fn render_error(err: &FitbotError) -> String {
    match err {
        FitbotError::Configuration(message) => message.clone(),
        FitbotError::UpstreamStatus { status, body } => format!("Groq error {status}: {body}"),
        FitbotError::Transport(source) => format!("Error: {source}"),
        other => format!("Error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitbot_core::error::Result;
    use fitbot_core::generic::Role;
    use fitbot_core::history::Turn;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Replays fixed snapshots, optionally ending with an upstream error,
    /// and remembers the last request it saw.
    #[derive(Default)]
    struct Scripted {
        snapshots: Vec<&'static str>,
        fail_with: Option<u16>,
        seen: Mutex<Option<ChatCompleteParameters>>,
    }

    impl StreamingChatProvider for Scripted {
        type Snapshots<'s>
            = futures_util::stream::Iter<std::vec::IntoIter<Result<String>>>
        where
            Self: 's;

        fn chat_complete_stream(&self, params: ChatCompleteParameters) -> Self::Snapshots<'_> {
            *self.seen.lock().unwrap() = Some(params);
            let mut items: Vec<Result<String>> =
                self.snapshots.iter().map(|s| Ok((*s).to_owned())).collect();
            if let Some(status) = self.fail_with {
                items.push(Err(FitbotError::UpstreamStatus {
                    status,
                    body: "slow down".into(),
                }));
            }
            futures_util::stream::iter(items)
        }
    }

    fn last_request(bot: &FitBot<Scripted>) -> ChatCompleteParameters {
        bot.backend().seen.lock().unwrap().clone().unwrap()
    }

    #[test]
    fn conversation_puts_persona_first_and_message_last() {
        let bot = FitBot::new(Scripted::default());
        let history = History::Turns(vec![Turn::new("hi", ""), Turn::new("", "hello")]);

        let messages = bot.conversation("plan please", history);

        assert_eq!(messages[0], Message::system(PERSONA_INSTRUCTION));
        assert_eq!(
            messages[1..],
            [
                Message::user("hi"),
                Message::assistant("hello"),
                Message::user("plan please"),
            ]
        );
    }

    #[test]
    fn goal_extends_the_persona() {
        let bot = FitBot::new(Scripted::default()).with_goal(FitnessGoal::Endurance);
        let messages = bot.conversation("go", History::default());

        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.starts_with(PERSONA_INSTRUCTION));
        assert!(messages[0].content.contains("Focus on:"));
    }

    #[tokio::test]
    async fn respond_passes_snapshots_through() {
        let bot = FitBot::new(Scripted {
            snapshots: vec!["Hi", "Hi there"],
            ..Default::default()
        })
        .with_config(GenerationConfig::default().with_max_output_tokens(64));

        let shown: Vec<String> = bot.respond("hey", History::default()).collect().await;

        assert_eq!(shown, vec!["Hi", "Hi there"]);
        let request = last_request(&bot);
        assert_eq!(request.config.max_output_tokens, 64);
        assert_eq!(request.model, Model::default());
    }

    #[tokio::test]
    async fn error_after_text_is_appended_after_blank_line() {
        let bot = FitBot::new(Scripted {
            snapshots: vec!["Squats"],
            fail_with: Some(429),
            ..Default::default()
        });

        let shown: Vec<String> = bot.respond("hey", History::default()).collect().await;

        assert_eq!(shown, vec!["Squats", "Squats\n\nGroq error 429: slow down"]);
    }

    #[tokio::test]
    async fn error_without_text_is_the_whole_reply() {
        let bot = FitBot::new(Scripted {
            fail_with: Some(500),
            ..Default::default()
        });

        let shown: Vec<String> = bot.respond("hey", History::default()).collect().await;

        assert_eq!(shown, vec!["Groq error 500: slow down"]);
    }

    #[test]
    fn renders_each_error_kind() {
        assert_eq!(
            render_error(&FitbotError::Configuration("key missing".into())),
            "key missing"
        );
        assert_eq!(
            render_error(&FitbotError::Transport("connection reset".into())),
            "Error: connection reset"
        );
        assert_eq!(
            render_error(&FitbotError::Invalid("height must be positive".into())),
            "Error: invalid: height must be positive"
        );
    }
}
