#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitLabel {
    #[default]
    Shorten,
    Shortening,
    Retrying,
}

impl SubmitLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmitLabel::Shorten => "Shorten URL",
            SubmitLabel::Shortening => "Shortening...",
            SubmitLabel::Retrying => "Retrying...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub long_url: String,
    pub url_error: Option<String>,
    pub submit_label: SubmitLabel,
    pub submit_enabled: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub short_url: Option<String>,
    pub expiration_text: Option<String>,
    pub expires_in_seconds: Option<u64>,
    pub copied: bool,
    /// A submission or a clipboard write is still outstanding.
    pub busy: bool,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy"
        }
    }
}
