//! Translator card state: language pair, both panes and the actions on them.
use crate::api::{TranslateError, TranslateRequest, TranslationService};
use crate::catalog::find_content_language;
use crate::clipboard::ClipboardSink;
use crate::i18n::LocaleContext;
use crate::lang::MessageKey;

/// How long the copy button shows its "copied" state.
pub const COPIED_RESET: std::time::Duration = std::time::Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Destructive,
}

/// Transient toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    fn new(ctx: &LocaleContext, title: MessageKey, description: MessageKey, kind: NoticeKind) -> Self {
        Self { title: ctx.t(title), description: ctx.t(description), kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorCard {
    pub source_language: String,
    pub target_language: String,
    pub source_text: String,
    pub translated_text: String,
    pub is_translating: bool,
    pub copied: bool,
}

impl Default for TranslatorCard {
    fn default() -> Self {
        Self {
            source_language: "en".into(),
            target_language: "es".into(),
            source_text: String::new(),
            translated_text: String::new(),
            is_translating: false,
            copied: false,
        }
    }
}

impl TranslatorCard {
    pub fn set_source_language(&mut self, code: &str) {
        self.source_language = code.to_string();
    }

    pub fn set_target_language(&mut self, code: &str) {
        self.target_language = code.to_string();
    }

    pub fn set_source_text(&mut self, text: String) {
        self.source_text = text;
    }

    /// Exchange the language pair and the contents of both panes.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
    }

    pub fn source_char_count(&self) -> usize {
        self.source_text.chars().count()
    }

    pub fn source_language_name(&self) -> &str {
        find_content_language(&self.source_language).map(|l| l.name).unwrap_or(self.source_language.as_str())
    }

    pub fn target_language_name(&self) -> &str {
        find_content_language(&self.target_language).map(|l| l.name).unwrap_or(self.target_language.as_str())
    }

    /// Whether the translate button is enabled.
    pub fn can_translate(&self) -> bool {
        !self.is_translating && !self.source_text.trim().is_empty()
    }

    /// Validate and mark the card busy. Blank input is rejected with a
    /// notice and leaves the card untouched.
    pub fn begin_translate(&mut self, ctx: &LocaleContext) -> Result<TranslateRequest, Notice> {
        if self.source_text.trim().is_empty() {
            return Err(Notice::new(ctx, MessageKey::NoTextToTranslate, MessageKey::PleaseEnterText, NoticeKind::Destructive));
        }
        self.is_translating = true;
        Ok(TranslateRequest {
            text: self.source_text.clone(),
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
        })
    }

    /// Apply the service outcome. A failure keeps the previous result pane.
    pub fn finish_translate(&mut self, ctx: &LocaleContext, result: Result<String, TranslateError>) -> Notice {
        self.is_translating = false;
        match result {
            Ok(text) => {
                self.translated_text = text;
                Notice::new(ctx, MessageKey::TranslationComplete, MessageKey::TranslationSuccess, NoticeKind::Info)
            }
            Err(e) => {
                tracing::error!(error = %e, "translation failed");
                Notice::new(ctx, MessageKey::TranslationFailed, MessageKey::TranslationError, NoticeKind::Destructive)
            }
        }
    }

    /// Validate, call `service` and apply the outcome in one step.
    pub async fn translate(&mut self, service: &dyn TranslationService, ctx: &LocaleContext) -> Notice {
        let req = match self.begin_translate(ctx) {
            Ok(req) => req,
            Err(notice) => return notice,
        };
        let result = service.translate(&req.text, &req.source_language, &req.target_language).await;
        self.finish_translate(ctx, result)
    }

    /// Put the translation on the clipboard. Nothing happens while the
    /// result pane is empty.
    pub fn copy_translation(&mut self, clipboard: &mut dyn ClipboardSink, ctx: &LocaleContext) -> Option<Notice> {
        if self.translated_text.is_empty() {
            return None;
        }
        match clipboard.write_text(&self.translated_text) {
            Ok(()) => {
                self.copied = true;
                Some(Notice::new(ctx, MessageKey::CopiedToClipboard, MessageKey::CopiedDescription, NoticeKind::Info))
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy to clipboard failed");
                Some(Notice::new(ctx, MessageKey::CopyFailed, MessageKey::ClipboardUnavailable, NoticeKind::Destructive))
            }
        }
    }

    pub fn reset_copied(&mut self) {
        self.copied = false;
    }
}
