/// File types offered by the open and save dialogs, in menu order.
pub const TEXT_FILE_FILTERS: &[(&str, &str)] = &[
    ("Text Files", "*.txt"),
    ("Java Files", "*.java"),
    ("HTML Files", "*.{html,htm}"),
    ("CSS Files", "*.css"),
    ("JavaScript Files", "*.js"),
    ("JSON Files", "*.json"),
    ("XML Files", "*.xml"),
    ("Markdown Files", "*.md"),
    ("RTF Files", "*.rtf"),
];

/// Get filter pattern for the supported text formats
///
/// Returns a multi-line filter string where each line is a separate filter option.
/// FLTK format: "Description\tPattern\nDescription2\tPattern2"
/// Note: FLTK automatically adds "All Files (*)" option, so we don't include it
pub fn text_files_filter() -> String {
    TEXT_FILE_FILTERS
        .iter()
        .map(|(description, pattern)| format!("{}\t{}", description, pattern))
        .collect::<Vec<_>>()
        .join("\n")
}
