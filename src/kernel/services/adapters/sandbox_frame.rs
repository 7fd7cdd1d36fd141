//! In-process stand-in for the isolated preview frame.
//!
//! Holds the last written document plus the sandbox tokens it was written under. A frame that
//! has not been attached to a host surface refuses writes, which keeps whatever was shown
//! before on screen.

use crate::kernel::preview::{PreviewDocument, PreviewError, SANDBOX_PERMISSIONS};
use crate::kernel::services::ports::PreviewFrame;

const MAX_DOCUMENT_BYTES: usize = 4 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct SandboxFrame {
    sandbox: String,
    attached: bool,
    document: Option<PreviewDocument>,
    writes: u64,
}

impl Default for SandboxFrame {
    fn default() -> Self {
        Self {
            sandbox: SANDBOX_PERMISSIONS.to_string(),
            attached: false,
            document: None,
            writes: 0,
        }
    }
}

impl SandboxFrame {
    pub fn attached() -> Self {
        Self {
            attached: true,
            ..Self::default()
        }
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn document(&self) -> Option<&PreviewDocument> {
        self.document.as_ref()
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl PreviewFrame for SandboxFrame {
    fn sandbox(&self) -> &str {
        &self.sandbox
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn write_document(&mut self, document: &PreviewDocument) -> Result<(), PreviewError> {
        if !self.attached {
            return Err(PreviewError::Detached);
        }
        if document.html.len() > MAX_DOCUMENT_BYTES {
            return Err(PreviewError::Rejected(format!(
                "document is {} bytes, limit is {MAX_DOCUMENT_BYTES}",
                document.html.len()
            )));
        }

        self.document = Some(document.clone());
        self.writes = self.writes.saturating_add(1);
        Ok(())
    }
}
