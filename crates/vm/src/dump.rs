//! Destinations for the `dump` command.

use tracing::info;

/// Receives a snapshot of the stack each time `dump` executes.
pub trait DumpSink {
    /// `stack` is bottom first.
    fn dump(&mut self, stack: &[i64]);
}

/// Emits one `info` event per stack entry on the `paramprog::dump` target.
///
/// Entries are listed bottom to top with their depth, where depth 0 is
/// the top of the stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DumpSink for TracingSink {
    fn dump(&mut self, stack: &[i64]) {
        if stack.is_empty() {
            info!(target: "paramprog::dump", "stack empty");
            return;
        }
        for (i, value) in stack.iter().enumerate() {
            let depth = stack.len() - 1 - i;
            info!(target: "paramprog::dump", depth, value, "{depth}: {value}");
        }
    }
}

/// Records every snapshot.
impl DumpSink for Vec<Vec<i64>> {
    fn dump(&mut self, stack: &[i64]) {
        self.push(stack.to_vec());
    }
}

impl<D: DumpSink + ?Sized> DumpSink for &mut D {
    fn dump(&mut self, stack: &[i64]) {
        (**self).dump(stack);
    }
}
