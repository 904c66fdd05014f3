//! Style combination

use crate::record::StyleRecord;

/// Merge style records left to right
///
/// Later records override properties set by earlier ones. `None` entries are
/// skipped, so conditional styles can be passed inline:
///
/// ```rust
/// use stylesheet::{combine, StyleRecord};
///
/// let base = StyleRecord::new().border_width(1.0).padding(16.0);
/// let destructive = StyleRecord::new().border_color("red");
/// let is_destructive = false;
///
/// let combined = combine([Some(&base), is_destructive.then_some(&destructive)]);
/// assert_eq!(combined, base);
/// ```
pub fn combine<'a>(styles: impl IntoIterator<Item = Option<&'a StyleRecord>>) -> StyleRecord {
    styles
        .into_iter()
        .flatten()
        .fold(StyleRecord::new(), |mut combined, record| {
            combined.merge(record);
            combined
        })
}
