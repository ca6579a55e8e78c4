//! Output formatting utilities

/// Format validated tags for display, one per line
///
/// Stored tags are already escaped, so quoting only adds the delimiters.
pub fn format_tag_list(tags: &[String], quoted: bool) -> String {
    if tags.is_empty() {
        return "No tags\n".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        if quoted {
            output.push_str(&format!("\"{}\"\n", tag));
        } else {
            output.push_str(&format!("{}\n", tag));
        }
    }
    output
}

/// Format the default tag set for display
pub fn format_default_tags(tags: &[&str]) -> String {
    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }
    output
}
