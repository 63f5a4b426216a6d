//! Common utilities and helper functions.

/// Replaces environment variable placeholders in a string.
///
/// Placeholders use the format `${env:VAR_NAME}` where `VAR_NAME` is the
/// name of an environment variable. If the variable is not set, the
/// placeholder is replaced with an empty string.
///
/// # Example
///
/// ```rust
/// use pagecraft::utils::replace_env_placeholders;
///
/// unsafe { std::env::set_var("MY_VAR", "hello"); }
/// let result = replace_env_placeholders("Value: ${env:MY_VAR}");
/// assert_eq!(result, "Value: hello");
/// ```
pub fn replace_env_placeholders(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = closing_brace(after) else {
            // unterminated, keep the tail as written
            result.push_str(&rest[start..]);
            return result;
        };

        let placeholder = &after[..end];
        match placeholder.strip_prefix("env:") {
            Some(name) => match std::env::var(name) {
                Ok(value) => {
                    debug!("using {name} from environment");
                    result.push_str(&value);
                }
                Err(_) => warn!("environment variable {name} is not set, using empty value"),
            },
            None => {
                result.push_str("${");
                result.push_str(placeholder);
                result.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}

/// Byte offset of the brace closing a `${`, honoring nested braces.
fn closing_brace(s: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Expands `${env:VAR}` placeholders in every string of a TOML document.
pub fn expand_env_in_toml(value: &mut toml::Value) {
    match value {
        toml::Value::String(s) => {
            if s.contains("${") {
                *s = replace_env_placeholders(s);
            }
        }
        toml::Value::Array(items) => items.iter_mut().for_each(expand_env_in_toml),
        toml::Value::Table(table) => table
            .iter_mut()
            .for_each(|(_, v)| expand_env_in_toml(v)),
        _ => {}
    }
}
