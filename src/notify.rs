use tracing::{info, warn};

use crate::error::Result;
use crate::models::Reorder;

/// Side channel told about every new reorder.
pub trait ReorderNotifier {
    fn notify(&self, reorder: &Reorder) -> Result<()>;
}

/// Notifier that only writes the reorder to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl ReorderNotifier for LogNotifier {
    fn notify(&self, reorder: &Reorder) -> Result<()> {
        info!(
            event = reorder.event.as_deref().unwrap_or("-"),
            lines = reorder.lines.len(),
            packages = reorder.package_count(),
            "Nachbestellung created"
        );
        Ok(())
    }
}

/// Fire-and-forget delivery. Empty reorders are not sent and failures are
/// only logged. Returns whether the notifier accepted the reorder.
pub fn notify_reorder(notifier: &dyn ReorderNotifier, reorder: &Reorder) -> bool {
    if reorder.is_empty() {
        return false;
    }
    match notifier.notify(reorder) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Reorder notification failed");
            false
        }
    }
}
