//! Rendering many payloads at once.
//!
//! Each input is encoded on its own: a failure is recorded on that item and
//! the batch carries on with the next one.

use crate::config::QrConfig;
use crate::error::RenderError;
use crate::render::{Encoder, QrEncoder, RenderedQr};

/// A successfully rendered item: the image and its exported PNG data URL.
#[derive(Debug)]
pub struct BatchImage {
    pub qr: RenderedQr,
    pub data_url: String,
}

/// The outcome for one input of a batch.
#[derive(Debug)]
pub struct BatchItem {
    /// Position of the input in the batch.
    pub index: usize,
    /// The input payload.
    pub data: String,
    pub result: Result<BatchImage, RenderError>,
}

impl BatchItem {
    pub fn success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn rendered(&self) -> Option<&RenderedQr> {
        self.result.as_ref().ok().map(|image| &image.qr)
    }

    /// The encoder's message when this item failed.
    pub fn error(&self) -> Option<String> {
        self.result.as_ref().err().map(ToString::to_string)
    }

    /// PNG data URL of a successful item.
    pub fn data_url(&self) -> Option<&str> {
        self.result.as_ref().ok().map(|image| image.data_url.as_str())
    }
}

/// Encodes and exports one input; a failure in either step fails the item.
fn render_item<E: Encoder + ?Sized>(
    encoder: &E,
    data: &str,
    config: &QrConfig,
) -> Result<BatchImage, RenderError> {
    let qr = encoder.encode(data, config)?;
    let data_url = qr.to_data_url()?;
    Ok(BatchImage { qr, data_url })
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn of(items: &[BatchItem]) -> Self {
        let succeeded = items.iter().filter(|item| item.success()).count();
        Self {
            succeeded,
            failed: items.len() - succeeded,
        }
    }
}

/// Encodes every input with `encoder`, in order.
///
/// The result has one item per input and `result[i].index == i`, whether or
/// not the item succeeded.
pub fn generate_batch<E: Encoder + ?Sized>(
    encoder: &E,
    inputs: &[impl AsRef<str>],
    config: &QrConfig,
) -> Vec<BatchItem> {
    let items: Vec<BatchItem> = inputs
        .iter()
        .enumerate()
        .map(|(index, data)| {
            let data = data.as_ref();
            let result = render_item(encoder, data, config);
            match &result {
                Ok(_) => log::debug!("Batch item {} encoded", index),
                Err(e) => log::warn!("Batch item {} failed: {}", index, e),
            }
            BatchItem {
                index,
                data: data.to_string(),
                result,
            }
        })
        .collect();

    let summary = BatchSummary::of(&items);
    log::info!(
        "Batch finished: {} succeeded, {} failed",
        summary.succeeded,
        summary.failed
    );
    items
}

/// [`generate_batch`] with the default [`QrEncoder`].
pub fn generate_batch_default(inputs: &[impl AsRef<str>], config: &QrConfig) -> Vec<BatchItem> {
    generate_batch(&QrEncoder, inputs, config)
}
