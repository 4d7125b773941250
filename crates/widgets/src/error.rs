use snafu::Snafu;

/// Failure of one chat round trip.
///
/// Every variant collapses to the same fallback message on the page; the variants only exist
/// so the developer console can tell them apart.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ChatError {
    #[snafu(display("chat request to '{endpoint}' failed on `{stage}`: {message}"))]
    Request {
        stage: &'static str,
        endpoint: String,
        message: String,
    },
    #[snafu(display("chat endpoint '{endpoint}' answered with status {status} on `{stage}`"))]
    Status {
        stage: &'static str,
        endpoint: String,
        status: u16,
    },
    #[snafu(display("failed to decode chat reply on `{stage}`: {message}"))]
    Decode {
        stage: &'static str,
        message: String,
    },
}

pub type ChatResult<T> = Result<T, ChatError>;
