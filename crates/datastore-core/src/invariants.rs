//! Contract checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::layout::RefLayout;

impl RefLayout {
    /// Panic unless `(offset, buffer_id)` is encodable.
    ///
    /// The arena checks capacity before building a reference.
    #[track_caller]
    pub(crate) fn ensure_fields(&self, offset: u64, buffer_id: u32) {
        if let Err(err) = self.check_fields(offset, buffer_id) {
            panic!("entry reference contract violated for layout {self}: {err}");
        }
    }
}
