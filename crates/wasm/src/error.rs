use snafu::Snafu;
use wasm_bindgen::JsValue;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum MountError {
    #[snafu(display("no global window on `{stage}`"))]
    MissingWindow { stage: &'static str },
    #[snafu(display("window has no document on `{stage}`"))]
    MissingDocument { stage: &'static str },
    #[snafu(display("element '{selector}' not found on `{stage}`"))]
    MissingElement {
        stage: &'static str,
        selector: String,
    },
    #[snafu(display("element '{selector}' is not an {expected} on `{stage}`"))]
    WrongElementType {
        stage: &'static str,
        selector: String,
        expected: &'static str,
    },
    #[snafu(display("DOM call failed on `{stage}`: {message}"))]
    Dom {
        stage: &'static str,
        message: String,
    },
}

pub type MountResult<T> = Result<T, MountError>;

impl MountError {
    pub(crate) fn dom(stage: &'static str, value: JsValue) -> Self {
        Self::Dom {
            stage,
            message: format!("{value:?}"),
        }
    }
}

impl From<MountError> for JsValue {
    fn from(error: MountError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
