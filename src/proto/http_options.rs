/*!
 * Removal of `google.api.http` method options.
 *
 * Each option is cut from the `option` keyword through its balanced
 * closing brace and any `;` directly after it. Braces inside string
 * literals (path templates such as `"/v1/items/{id}"`) and inside `//` or
 * `/* */` comments are not counted.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

static HTTP_OPTION_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"option\s?\(google\.api\.http\)").expect("Invalid http option regex")
});

/// Byte offset just past the end of an option value starting at `from`.
///
/// A braced value ends at its balanced `}` plus trailing semicolons. A value
/// without braces ends at its `;`. Returns `None` when the value never
/// terminates.
fn option_end(text: &str, from: usize) -> Option<usize> {
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut close_at: Option<usize> = None;
    let mut chars = text[from..].char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                chars.by_ref().find(|&(_, n)| n == '\n');
            }
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                let mut previous = '\0';
                loop {
                    match chars.next() {
                        Some((_, '/')) if previous == '*' => break,
                        Some((_, n)) => previous = n,
                        None => return None,
                    }
                }
            }
            '"' | '\'' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
                if depth == 0 {
                    close_at = Some(from + offset + 1);
                    break;
                }
            }
            ';' if depth == 0 => return Some(from + offset + 1),
            _ => {}
        }
    }

    let close = close_at?;
    let semicolons = text[close..].chars().take_while(|&c| c == ';').count();
    Some(close + semicolons)
}

/// Remove every `option (google.api.http)` block from `text`.
///
/// Returns the new text and the number of blocks removed. A block whose
/// braces never balance is left in place.
pub fn strip_http_options(text: &str) -> (String, usize) {
    let mut output = String::with_capacity(text.len());
    let mut copied_up_to = 0;
    let mut search_from = 0;
    let mut removed = 0;

    while let Some(found) = HTTP_OPTION_START.find_at(text, search_from) {
        match option_end(text, found.end()) {
            Some(end) => {
                output.push_str(&text[copied_up_to..found.start()]);
                copied_up_to = end;
                search_from = end;
                removed += 1;
            }
            None => {
                warn!(
                    "Unterminated google.api.http option at byte {}, leaving it in place",
                    found.start()
                );
                search_from = found.end();
            }
        }
    }
    output.push_str(&text[copied_up_to..]);

    if removed > 0 {
        debug!("Removed {} google.api.http option block(s)", removed);
    }
    (output, removed)
}
