//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    /// Start from the configured locale tag, English when unrecognized
    pub fn from_tag(tag: &str) -> Self {
        let locale = Locale::from_tag(tag).unwrap_or_else(|| {
            tracing::warn!(tag, "Unknown locale in config, using English");
            Locale::default()
        });
        Self { locale }
    }

    /// Toggle between English and Chinese
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::ZhCN => Locale::EnUS,
            Locale::EnUS => Locale::ZhCN,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        let mut state = I18nState::from_tag("zh");
        assert_eq!(state.locale, Locale::ZhCN);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EnUS);
        assert_eq!(I18nState::from_tag("klingon").locale, Locale::EnUS);
    }
}
