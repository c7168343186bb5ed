//! User-facing message catalogue.
//!
//! Every string the plugin shows to the user lives here so the interaction
//! logic never hard-codes wording. Two locales ship: English (default) and
//! Korean, which matches the wording the conversion service was built with.

/// Localized strings for notifications and the output pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Validation: the trimmed input was empty.
    pub empty_input: String,
    /// Validation: no target selected.
    pub no_target: String,
    /// Generic render shown in the output pane after any conversion failure.
    pub conversion_failed: String,
    /// Fallback when the service failed without a usable error message.
    pub unknown_error: String,
    /// Fallback when the service could not be reached.
    pub network_failure: String,
    /// The request deadline passed.
    pub timed_out: String,
    /// Copy requested with no converted text on screen.
    pub nothing_to_copy: String,
    /// Clipboard write succeeded.
    pub copied: String,
    /// Clipboard write failed.
    pub copy_failed: String,
    /// Web access permission was not granted.
    pub permission_denied: String,
    /// Output pane before the first conversion.
    pub placeholder: String,
}

impl Messages {
    /// Returns the catalogue for `language`, falling back to English.
    #[must_use]
    pub fn for_language(language: &str) -> Self {
        match language.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" | "korean" => Self::korean(),
            "en" | "en-us" | "english" => Self::english(),
            other => {
                tracing::debug!(language = %other, "unknown language, using english");
                Self::english()
            }
        }
    }

    #[must_use]
    pub fn english() -> Self {
        Self {
            empty_input: "Please enter text to convert.".to_string(),
            no_target: "Please choose a conversion target.".to_string(),
            conversion_failed: "Something went wrong. Please try again shortly.".to_string(),
            unknown_error: "An unknown error occurred.".to_string(),
            network_failure: "Could not reach the conversion service.".to_string(),
            timed_out: "The conversion service did not respond in time.".to_string(),
            nothing_to_copy: "Nothing to copy.".to_string(),
            copied: "Copied to clipboard.".to_string(),
            copy_failed: "Copying failed.".to_string(),
            permission_denied: "Web access was not granted; conversions will fail.".to_string(),
            placeholder: "Converted text will appear here.".to_string(),
        }
    }

    #[must_use]
    pub fn korean() -> Self {
        Self {
            empty_input: "변환할 내용을 입력해주세요.".to_string(),
            no_target: "변환 대상을 선택해주세요.".to_string(),
            conversion_failed: "오류가 발생했습니다. 잠시 후 다시 시도해주세요.".to_string(),
            unknown_error: "알 수 없는 오류가 발생했습니다.".to_string(),
            network_failure: "변환 서버에 연결할 수 없습니다.".to_string(),
            timed_out: "변환 서버의 응답이 지연되고 있습니다.".to_string(),
            nothing_to_copy: "복사할 내용이 없습니다.".to_string(),
            copied: "텍스트가 클립보드에 복사되었습니다.".to_string(),
            copy_failed: "복사에 실패했습니다.".to_string(),
            permission_denied: "웹 접근 권한이 없어 변환할 수 없습니다.".to_string(),
            placeholder: "변환된 텍스트가 여기에 표시됩니다.".to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}
