//! Domain entities

mod audio_upload;
mod chat_message;
mod conversation;

pub use audio_upload::AudioUpload;
pub use chat_message::{ChatMessage, MessageMetadata, MessageRole};
pub use conversation::Conversation;
