use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use mindful_widgets::{ChatWidget, MoodSelector, WidgetConfig};
use web_sys::Document;

use crate::dom::{self, DomChatSurface, DomMoodBoard};
use crate::error::MountResult;
use crate::http::FetchTransport;

pub type DomMoodSelector = MoodSelector<DomMoodBoard>;
pub type DomChatWidget = ChatWidget<DomChatSurface, FetchTransport>;

/// Widgets bound to the current page; `None` where the page has no markup for one.
pub struct Mounted {
    pub mood: Option<Rc<DomMoodSelector>>,
    pub chat: Option<Rc<DomChatWidget>>,
}

/// Binds both widgets independently; a failure in one is logged and leaves the other working.
pub fn mount(document: &Document, config: &WidgetConfig) -> Mounted {
    let mood = bind_mood_selector(document, config).unwrap_or_else(|error| {
        log::error!("mood selector not mounted: {error}");
        None
    });
    let chat = bind_chat_widget(document, config).unwrap_or_else(|error| {
        log::error!("chat widget not mounted: {error}");
        None
    });

    log::info!(
        "widgets mounted (mood selector: {}, chat: {})",
        mood.is_some(),
        chat.is_some()
    );
    Mounted { mood, chat }
}

pub fn bind_mood_selector(
    document: &Document,
    config: &WidgetConfig,
) -> MountResult<Option<Rc<DomMoodSelector>>> {
    let options = dom::query_all(document, &config.mood_option_selector)?;
    if options.is_empty() {
        return Ok(None);
    }

    if document
        .get_element_by_id(&config.mood_score_field_id)
        .is_none()
    {
        log::warn!(
            "found {} mood options but no #{} field; mood selection disabled",
            options.len(),
            config.mood_score_field_id
        );
        return Ok(None);
    }
    let score_field = dom::input_by_id(document, &config.mood_score_field_id)?;

    let selector = Rc::new(MoodSelector::new(DomMoodBoard::new(
        options,
        score_field,
        config.mood_score_attribute.as_str(),
        config.selected_class.as_str(),
    )));

    for (index, option) in selector.board().options().iter().enumerate() {
        let selector = Rc::clone(&selector);
        EventListener::new_with_options(
            option,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                selector.select(index);
            },
        )
        .forget();
    }

    Ok(Some(selector))
}

pub fn bind_chat_widget(
    document: &Document,
    config: &WidgetConfig,
) -> MountResult<Option<Rc<DomChatWidget>>> {
    let Some(form) = document.get_element_by_id(&config.chat_form_id) else {
        return Ok(None);
    };

    let input = dom::input_by_id(document, &config.chat_input_id)?;
    let messages = dom::element_by_id(document, &config.chat_messages_id)?;

    let widget = Rc::new(ChatWidget::new(
        DomChatSurface::new(document.clone(), input, messages),
        FetchTransport::new(config.chat_endpoint.as_str()),
        config.fallback_message.as_str(),
    ));

    let handler = Rc::clone(&widget);
    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            if let Some(delivery) = handler.submit() {
                wasm_bindgen_futures::spawn_local(async move {
                    delivery.await;
                });
            }
        },
    )
    .forget();

    Ok(Some(widget))
}
