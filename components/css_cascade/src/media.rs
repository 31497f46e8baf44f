//! Simple media-list matching.
//!
//! The cascade only needs to know whether a stylesheet or `@media` block
//! applies at all — not to evaluate feature queries (`(min-width: ...)`),
//! which is explicitly out of scope. A sheet with no media list applies to
//! every medium; an empty/missing active medium list also matches every
//! sheet, regardless of what it lists; otherwise a sheet applies if any
//! entry case-insensitively matches an active medium, or is the literal
//! `"all"`.
pub fn media_list_matches(sheet_media: &[String], active_media: &[String]) -> bool {
    if sheet_media.is_empty() || active_media.is_empty() {
        return true;
    }

    sheet_media.iter().any(|entry| {
        let entry = entry.trim();
        entry.eq_ignore_ascii_case("all")
            || active_media
                .iter()
                .any(|active| active.eq_ignore_ascii_case(entry))
    })
}
