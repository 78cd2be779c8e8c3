//! Sharing a rendered prediction with native share, clipboard or prompt

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::surface::{FormSurface, Notification};

pub const COPIED_MESSAGE: &str = "Hasil telah disalin ke clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Gagal menyalin hasil";
pub const PROMPT_MESSAGE: &str = "Salin teks berikut untuk membagikan hasil:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("sharing is not available on this platform")]
    Unavailable,

    #[error("share was rejected: {0}")]
    Rejected(String),
}

/// What gets shared: the prediction text of the result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    /// Short text for the platform share sheet
    pub text: String,
    pub url: String,
    /// Longer text used for clipboard and manual copy
    pub fallback_text: String,
}

impl SharePayload {
    pub fn new(title: &str, result: &str, confidence: &str, url: &str, origin: &str) -> Self {
        let result = result.trim();
        let confidence = confidence.trim();
        Self {
            title: title.to_string(),
            text: format!("Hasil prediksi: {result} {confidence}").trim_end().to_string(),
            url: url.to_string(),
            fallback_text: format!("{title}:\n{result}\n{confidence}\n\nDapatkan prediksi di: {origin}"),
        }
    }
}

/// Platform share mechanisms, in the order they are tried
pub trait ShareTarget {
    /// A native share sheet exists
    fn can_share(&self) -> bool;

    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError>;

    fn can_copy(&self) -> bool;

    fn copy_text(&mut self, text: &str) -> Result<(), ShareError>;

    /// Last resort: show the text so the user can copy it by hand
    fn prompt_copy(&mut self, message: &str, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOutcome {
    Shared,
    /// Native share was tried and failed; only logged, as the user may just
    /// have dismissed the share sheet
    ShareFailed(String),
    Copied,
    CopyFailed(String),
    Prompted,
}

/// Shares `payload` through the first available mechanism
///
/// Failures never propagate. A clipboard outcome is reported to the user
/// through `surface` notifications.
pub fn share_result<T, S>(target: &mut T, surface: &mut S, payload: &SharePayload) -> ShareOutcome
where
    T: ShareTarget + ?Sized,
    S: FormSurface + ?Sized,
{
    if target.can_share() {
        return match target.share(payload) {
            Ok(()) => {
                info!("result shared");
                ShareOutcome::Shared
            }
            Err(err) => {
                warn!(error = %err, "error sharing result");
                ShareOutcome::ShareFailed(err.to_string())
            }
        };
    }

    if target.can_copy() {
        return match target.copy_text(&payload.fallback_text) {
            Ok(()) => {
                surface.notify(&Notification::success(COPIED_MESSAGE));
                ShareOutcome::Copied
            }
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                surface.notify(&Notification::error(COPY_FAILED_MESSAGE));
                ShareOutcome::CopyFailed(err.to_string())
            }
        };
    }

    target.prompt_copy(PROMPT_MESSAGE, &payload.fallback_text);
    ShareOutcome::Prompted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_texts() {
        let payload = SharePayload::new(
            "Hasil Prediksi Risiko Penyakit Jantung",
            "Berisiko (1)",
            "Keyakinan: 87%",
            "https://example.test/predict",
            "https://example.test",
        );
        assert_eq!(payload.text, "Hasil prediksi: Berisiko (1) Keyakinan: 87%");
        assert_eq!(
            payload.fallback_text,
            "Hasil Prediksi Risiko Penyakit Jantung:\nBerisiko (1)\nKeyakinan: 87%\n\nDapatkan prediksi di: https://example.test"
        );
    }

    #[test]
    fn test_payload_without_confidence() {
        let payload = SharePayload::new("T", "Tidak Berisiko (0)", "", "u", "o");
        assert_eq!(payload.text, "Hasil prediksi: Tidak Berisiko (0)");
    }
}
