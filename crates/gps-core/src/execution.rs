//! Sinks for the real-world side effect of executing an operation.

use tracing::info;

use crate::operation::Operation;

/// Performs whatever real action an [`Operation`] stands for.
///
/// Called only from [`Operation::execute_with`], never while simulating.
pub trait ActionHandler {
    /// Perform the action of `operation`.
    fn perform(&mut self, operation: &Operation);
}

/// Default handler: emits an "Executing <action>" notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHandler;

impl ActionHandler for LogHandler {
    fn perform(&mut self, operation: &Operation) {
        info!("Executing {}", operation.action());
    }
}

/// Handler that remembers every performed action, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    performed: Vec<String>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions performed so far.
    pub fn performed(&self) -> &[String] {
        &self.performed
    }
}

impl ActionHandler for RecordingHandler {
    fn perform(&mut self, operation: &Operation) {
        info!("Executing {}", operation.action());
        self.performed.push(operation.action().to_string());
    }
}

impl<H: ActionHandler + ?Sized> ActionHandler for &mut H {
    fn perform(&mut self, operation: &Operation) {
        (**self).perform(operation);
    }
}
