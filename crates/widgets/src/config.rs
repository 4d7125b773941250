use figment::{
    Figment,
    providers::{Format, Json, Serialized},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/chat";
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry, I'm having trouble connecting right now.";
pub const DEFAULT_MOOD_OPTION_SELECTOR: &str = ".mood-btn";
pub const DEFAULT_MOOD_SCORE_ATTRIBUTE: &str = "data-score";
pub const DEFAULT_MOOD_SCORE_FIELD_ID: &str = "mood-score";
pub const DEFAULT_SELECTED_CLASS: &str = "selected";
pub const DEFAULT_CHAT_FORM_ID: &str = "chat-form";
pub const DEFAULT_CHAT_INPUT_ID: &str = "chat-input";
pub const DEFAULT_CHAT_MESSAGES_ID: &str = "chat-messages";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_chat_endpoint")]
    pub chat_endpoint: String,
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
    #[serde(default = "default_mood_option_selector")]
    pub mood_option_selector: String,
    #[serde(default = "default_mood_score_attribute")]
    pub mood_score_attribute: String,
    #[serde(default = "default_mood_score_field_id")]
    pub mood_score_field_id: String,
    #[serde(default = "default_selected_class")]
    pub selected_class: String,
    #[serde(default = "default_chat_form_id")]
    pub chat_form_id: String,
    #[serde(default = "default_chat_input_id")]
    pub chat_input_id: String,
    #[serde(default = "default_chat_messages_id")]
    pub chat_messages_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: default_chat_endpoint(),
            fallback_message: default_fallback_message(),
            mood_option_selector: default_mood_option_selector(),
            mood_score_attribute: default_mood_score_attribute(),
            mood_score_field_id: default_mood_score_field_id(),
            selected_class: default_selected_class(),
            chat_form_id: default_chat_form_id(),
            chat_input_id: default_chat_input_id(),
            chat_messages_id: default_chat_messages_id(),
        }
    }
}

impl WidgetConfig {
    /// Layers page-supplied JSON overrides on top of the defaults.
    ///
    /// Unparseable overrides are reported and ignored; the page keeps working with defaults.
    pub fn load(overrides: Option<&str>) -> Self {
        let Some(overrides) = overrides.filter(|raw| !raw.trim().is_empty()) else {
            return Self::default();
        };

        let figment =
            Figment::from(Serialized::defaults(Self::default())).merge(Json::string(overrides));

        match figment.extract::<Self>() {
            Ok(config) => config.normalized(),
            Err(error) => {
                tracing::warn!("failed to parse widget config overrides: {}. using defaults", error);
                Self::default()
            }
        }
    }

    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        Self {
            chat_endpoint: or_default(self.chat_endpoint, defaults.chat_endpoint),
            // The fallback is user-facing text, so only blank values are replaced.
            fallback_message: if self.fallback_message.trim().is_empty() {
                defaults.fallback_message
            } else {
                self.fallback_message
            },
            mood_option_selector: or_default(
                self.mood_option_selector,
                defaults.mood_option_selector,
            ),
            mood_score_attribute: or_default(
                self.mood_score_attribute,
                defaults.mood_score_attribute,
            ),
            mood_score_field_id: or_default(self.mood_score_field_id, defaults.mood_score_field_id),
            selected_class: or_default(self.selected_class, defaults.selected_class),
            chat_form_id: or_default(self.chat_form_id, defaults.chat_form_id),
            chat_input_id: or_default(self.chat_input_id, defaults.chat_input_id),
            chat_messages_id: or_default(self.chat_messages_id, defaults.chat_messages_id),
        }
    }
}

fn or_default(value: String, default: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed.to_string()
    }
}

fn default_chat_endpoint() -> String {
    DEFAULT_CHAT_ENDPOINT.to_string()
}

fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.to_string()
}

fn default_mood_option_selector() -> String {
    DEFAULT_MOOD_OPTION_SELECTOR.to_string()
}

fn default_mood_score_attribute() -> String {
    DEFAULT_MOOD_SCORE_ATTRIBUTE.to_string()
}

fn default_mood_score_field_id() -> String {
    DEFAULT_MOOD_SCORE_FIELD_ID.to_string()
}

fn default_selected_class() -> String {
    DEFAULT_SELECTED_CLASS.to_string()
}

fn default_chat_form_id() -> String {
    DEFAULT_CHAT_FORM_ID.to_string()
}

fn default_chat_input_id() -> String {
    DEFAULT_CHAT_INPUT_ID.to_string()
}

fn default_chat_messages_id() -> String {
    DEFAULT_CHAT_MESSAGES_ID.to_string()
}
