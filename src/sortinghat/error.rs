use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortingHatError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Unable to render template '{name}': {source}")]
    TemplateRender {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SortingHatError {
    /// Classifies a template engine failure for the given template name.
    pub(crate) fn from_template(name: &str, err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => Self::TemplateNotFound(name.to_string()),
            _ => Self::TemplateRender {
                name: name.to_string(),
                source: err,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, SortingHatError>;
