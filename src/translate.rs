//! Translation collaborator boundary.
//!
//! Announcement messages are stored in English, Thai and Chinese. The
//! actual translation provider lives outside this service; callers only see
//! the `Translator` trait. A failed translation must abort the write that
//! requested it; partially translated records are never persisted.

use async_trait::async_trait;

use crate::error::Result;

/// A message translated into every supported site language.
///
/// All three fields are always populated; a provider that cannot produce
/// one of them must fail the whole call instead.
#[derive(Debug, Clone)]
pub struct MessageTranslations {
    pub message_en: String,
    pub message_th: String,
    pub message_zh: String,
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate_announcement_message(&self, message: &str) -> Result<MessageTranslations>;
}

/// Fallback translator for deployments without a translation provider:
/// every language slot carries the source text verbatim.
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate_announcement_message(&self, message: &str) -> Result<MessageTranslations> {
        Ok(MessageTranslations {
            message_en: message.to_string(),
            message_th: message.to_string(),
            message_zh: message.to_string(),
        })
    }
}

#[cfg(test)]
pub mod mock {
    //! Test doubles for the translation boundary.

    use super::*;
    use crate::error::AppError;

    /// Tags each language slot so tests can verify which variant landed in
    /// which column.
    pub struct TaggingTranslator;

    #[async_trait]
    impl Translator for TaggingTranslator {
        async fn translate_announcement_message(
            &self,
            message: &str,
        ) -> Result<MessageTranslations> {
            Ok(MessageTranslations {
                message_en: format!("{message} [en]"),
                message_th: format!("{message} [th]"),
                message_zh: format!("{message} [zh]"),
            })
        }
    }

    /// Always fails, for exercising the fail-closed path.
    pub struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate_announcement_message(
            &self,
            _message: &str,
        ) -> Result<MessageTranslations> {
            Err(AppError::TranslationFailed("provider unavailable".to_string()))
        }
    }
}
