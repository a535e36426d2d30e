/// Indicate a line of the document.
/// This function will show the line number, the first column of content and the line itself.
///
/// ```
/// use weak_yaml::indicated_msg;
///
/// let doc = indicated_msg("a:\n  b: [1, \"x\"]\n", 2);
/// assert_eq!(doc, "2:3\n  b: [1, \"x\"]\n  ^")
/// ```
///
/// If print the string, it would be like:
///
/// ```bash
/// 2:3
///   b: [1, "x"]
///   ^
/// ```
///
/// A line number out of the document shows the number only.
pub fn indicated_msg(doc: &str, line: usize) -> String {
    match line.checked_sub(1).and_then(|i| doc.split('\n').nth(i)) {
        Some(str_line) => {
            let str_line = str_line.strip_suffix('\r').unwrap_or(str_line);
            let column = str_line.len() - str_line.trim_start_matches(' ').len();
            format!(
                "{}:{}\n{}\n{}^",
                line,
                column + 1,
                str_line,
                " ".repeat(column)
            )
        }
        None => format!("{}:1", line),
    }
}

/// Same as [`indicated_msg`], but join the path before message.
///
/// ```
/// use weak_yaml::indicated_msg_file;
///
/// let doc = indicated_msg_file("my/file.yaml", "a: *b", 1);
/// assert_eq!(doc, "my/file.yaml:1:1\na: *b\n^")
/// ```
pub fn indicated_msg_file(path: &str, doc: &str, line: usize) -> String {
    format!("{}:{}", path, indicated_msg(doc, line))
}
