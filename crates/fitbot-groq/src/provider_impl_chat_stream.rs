use std::pin::Pin;
use std::sync::Arc;

use crate::GroqAdapter;
use crate::api_v1::ChatCompletionRequest;
use fitbot_core::error::{FitbotError, Result};
use fitbot_core::generic::PartialReply;
use fitbot_core::provider::{ChatCompleteParameters, StreamingChatProvider};
use futures_core::stream::Stream;

impl StreamingChatProvider for GroqAdapter {
    type Snapshots<'s>
        = Pin<Box<dyn Stream<Item = Result<String>> + Send + 's>>
    where
        Self: 's;

    fn chat_complete_stream(&self, params: ChatCompleteParameters) -> Self::Snapshots<'_> {
        let client = Arc::clone(&self.client);

        Box::pin(async_stream::try_stream! {
            use futures_util::StreamExt;

            let timeout = params.config.request_timeout;
            let request = ChatCompletionRequest::from(params);

            let deltas = client.chat_completion_stream(request, timeout);
            futures_util::pin_mut!(deltas);

            let mut reply = PartialReply::new();
            while let Some(delta) = deltas.next().await {
                let delta = delta.map_err(FitbotError::from)?;
                if let Some(snapshot) = reply.push(&delta) {
                    yield snapshot.to_owned();
                }
            }
        })
    }
}
