use teloxide::types::{ChatId, InlineKeyboardMarkup, UserId};

/// One outbound chat message produced by the handlers.
#[derive(Debug, Clone)]
pub struct Reply {
    pub chat_id: ChatId,
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

impl Reply {
    pub fn new(user: UserId, text: impl Into<String>) -> Self {
        Self {
            chat_id: ChatId::from(user),
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: InlineKeyboardMarkup) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    /// Callback payloads of the attached buttons, row by row.
    #[cfg(test)]
    pub fn actions(&self) -> Vec<String> {
        use teloxide::types::InlineKeyboardButtonKind;

        self.keyboard
            .iter()
            .flat_map(|kb| kb.inline_keyboard.iter().flatten())
            .filter_map(|button| match &button.kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }
}
