//! Line-oriented text splicing

/// Insert `line` right after the first line for which `is_anchor` holds,
/// or at the very top when no line matches.
///
/// `is_anchor` sees each line trimmed of surrounding whitespace, so `\r\n`
/// files and indented lines behave like plain ones. The inserted line takes
/// the anchor's line ending, or the file's when the anchor has none.
pub fn insert_after_anchor(
    content: &str,
    is_anchor: impl Fn(&str) -> bool,
    line: &str,
) -> String {
    let file_ending = line_ending(content);
    let mut out = String::with_capacity(content.len() + line.len() + 4);
    let mut inserted = false;

    for current in content.split_inclusive('\n') {
        out.push_str(current);
        if !inserted && is_anchor(current.trim()) {
            let ending = if current.ends_with("\r\n") {
                "\r\n"
            } else if current.ends_with('\n') {
                "\n"
            } else {
                out.push_str(file_ending);
                file_ending
            };
            out.push_str(line);
            out.push_str(ending);
            inserted = true;
        }
    }

    if inserted {
        out
    } else {
        format!("{line}{file_ending}{content}")
    }
}

/// `\r\n` when the first line ends with it, `\n` otherwise
fn line_ending(content: &str) -> &'static str {
    match content.split_inclusive('\n').next() {
        Some(first) if first.ends_with("\r\n") => "\r\n",
        _ => "\n",
    }
}
