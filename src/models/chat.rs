use serde::{Deserialize, Serialize};

pub const MISSING_MESSAGE_MESSAGE: &str = "Please provide a message";

/*
    Body of POST /api/trip/chat
*/
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ChatInput {
    pub message: Option<String>,
}

/// One question and the assistant's cleaned-up answer. Nothing is kept after the
/// response is written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatExchange {
    pub user_message: String,
    pub assistant_reply: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
}

impl From<ChatExchange> for ChatReply {
    fn from(exchange: ChatExchange) -> Self {
        ChatReply {
            response: exchange.assistant_reply,
        }
    }
}
