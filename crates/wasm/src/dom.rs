use mindful_widgets::{ChatMessage, ChatSurface, MoodBoard};
use snafu::OptionExt;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::error::{
    MissingDocumentSnafu, MissingElementSnafu, MissingWindowSnafu, MountError, MountResult,
    WrongElementTypeSnafu,
};

pub fn document() -> MountResult<Document> {
    let window = web_sys::window().context(MissingWindowSnafu {
        stage: "lookup-window",
    })?;
    window.document().context(MissingDocumentSnafu {
        stage: "lookup-document",
    })
}

pub fn element_by_id(document: &Document, id: &str) -> MountResult<Element> {
    document.get_element_by_id(id).context(MissingElementSnafu {
        stage: "lookup-element",
        selector: format!("#{id}"),
    })
}

pub fn input_by_id(document: &Document, id: &str) -> MountResult<HtmlInputElement> {
    element_by_id(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| MountError::WrongElementType {
            stage: "cast-input-element",
            selector: format!("#{id}"),
            expected: "input",
        })
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> MountResult<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|value| MountError::dom("query-selector-all", value))?;

    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let element = node.dyn_into::<Element>().ok().context(WrongElementTypeSnafu {
            stage: "cast-queried-node",
            selector: selector.to_string(),
            expected: "element",
        })?;
        elements.push(element);
    }
    Ok(elements)
}

/// Mood options and the hidden score field, captured once at mount.
pub struct DomMoodBoard {
    options: Vec<Element>,
    score_field: HtmlInputElement,
    score_attribute: String,
    selected_class: String,
}

impl DomMoodBoard {
    pub fn new(
        options: Vec<Element>,
        score_field: HtmlInputElement,
        score_attribute: impl Into<String>,
        selected_class: impl Into<String>,
    ) -> Self {
        Self {
            options,
            score_field,
            score_attribute: score_attribute.into(),
            selected_class: selected_class.into(),
        }
    }

    pub fn options(&self) -> &[Element] {
        &self.options
    }
}

impl MoodBoard for DomMoodBoard {
    fn option_count(&self) -> usize {
        self.options.len()
    }

    fn option_score(&self, index: usize) -> Option<String> {
        self.options
            .get(index)
            .and_then(|option| option.get_attribute(&self.score_attribute))
    }

    fn set_marked(&self, index: usize, marked: bool) {
        let Some(option) = self.options.get(index) else {
            return;
        };

        let classes = option.class_list();
        let result = if marked {
            classes.add_1(&self.selected_class)
        } else {
            classes.remove_1(&self.selected_class)
        };
        if let Err(error) = result {
            log::warn!("failed to update mood option {index} marker: {error:?}");
        }
    }

    fn write_score(&self, score: &str) {
        self.score_field.set_value(score);
    }
}

/// Chat input and message list, captured once at mount.
pub struct DomChatSurface {
    document: Document,
    input: HtmlInputElement,
    messages: Element,
}

impl DomChatSurface {
    pub fn new(document: Document, input: HtmlInputElement, messages: Element) -> Self {
        Self {
            document,
            input,
            messages,
        }
    }

    pub fn messages_element(&self) -> &Element {
        &self.messages
    }

    fn render_message(&self, message: &ChatMessage) -> MountResult<()> {
        let element = self
            .document
            .create_element("div")
            .map_err(|value| MountError::dom("create-message-element", value))?;

        let classes = element.class_list();
        for class in message.css_classes() {
            classes
                .add_1(class)
                .map_err(|value| MountError::dom("add-message-class", value))?;
        }

        // Plain text only; replies are never interpreted as markup.
        element.set_text_content(Some(&message.text));
        self.messages
            .append_child(&element)
            .map_err(|value| MountError::dom("append-message-element", value))?;
        Ok(())
    }
}

impl ChatSurface for DomChatSurface {
    fn input_text(&self) -> String {
        self.input.value()
    }

    fn clear_input(&self) {
        self.input.set_value("");
    }

    fn append_message(&self, message: &ChatMessage) {
        if let Err(error) = self.render_message(message) {
            log::error!("failed to render chat message: {error}");
        }
    }

    fn scroll_to_bottom(&self) {
        self.messages.set_scroll_top(self.messages.scroll_height());
    }
}
