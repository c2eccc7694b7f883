//! Ad-generation request lifecycle for the dashboard.
//!
//! DESIGN
//! ======
//! `status` drives the disabled state of the input and trigger; `result` is
//! the last successful artifact and is only ever replaced wholesale by a
//! later success. A failure moves `status` to `Failed` and leaves `result`
//! alone, so the previous ad stays on screen.
//!
//! At most one request is in flight: `begin` refuses while `Generating`.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

use crate::net::types::AdResult;
use crate::state::notices::Notice;

/// Where the current request stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
    Succeeded,
    /// Rendered like `Idle`; the reason is kept for logging.
    Failed(String),
}

/// Why `begin` did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeginError {
    /// The trimmed product name is empty.
    EmptyProduct,
    /// A request is already running.
    InFlight,
}

impl BeginError {
    /// Notice to show for the rejection, if the user should see one.
    #[must_use]
    pub fn notice(self) -> Option<Notice> {
        match self {
            Self::EmptyProduct => Some(Notice::empty_product()),
            Self::InFlight => None,
        }
    }
}

/// Dashboard generator state: input text, request status, last result.
#[derive(Clone, Debug, Default)]
pub struct GenerationState {
    pub product_name: String,
    pub status: GenerationStatus,
    pub result: Option<AdResult>,
}

impl GenerationState {
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.status == GenerationStatus::Generating
    }

    /// Try to move into `Generating`.
    ///
    /// Returns the product name to send, exactly as typed.
    ///
    /// # Errors
    ///
    /// [`BeginError::InFlight`] while a request is running, and
    /// [`BeginError::EmptyProduct`] when the input is blank. Neither changes
    /// the state.
    pub fn begin(&mut self) -> Result<String, BeginError> {
        if self.is_generating() {
            return Err(BeginError::InFlight);
        }
        if self.product_name.trim().is_empty() {
            return Err(BeginError::EmptyProduct);
        }
        self.status = GenerationStatus::Generating;
        Ok(self.product_name.clone())
    }

    /// Apply the outcome of the request started by `begin` and return the
    /// notice to show.
    pub fn finish(&mut self, outcome: Result<AdResult, String>) -> Notice {
        match outcome {
            Ok(ad) => {
                self.result = Some(ad);
                self.status = GenerationStatus::Succeeded;
                Notice::ad_generated()
            }
            Err(reason) => {
                self.status = GenerationStatus::Failed(reason);
                Notice::generation_failed()
            }
        }
    }

    /// Ad copy available for the clipboard. Empty text counts as absent.
    #[must_use]
    pub fn copyable_text(&self) -> Option<&str> {
        self.result
            .as_ref()
            .map(|ad| ad.anuncio.as_str())
            .filter(|text| !text.is_empty())
    }

    /// Image URL available for display and opening. Empty counts as absent.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.result
            .as_ref()
            .map(|ad| ad.imagem.as_str())
            .filter(|url| !url.is_empty())
    }

    /// Label for the trigger button.
    #[must_use]
    pub fn trigger_label(&self) -> &'static str {
        if self.is_generating() { "Gerando anúncio..." } else { "Gerar Anúncio Mágico" }
    }
}
