use std::sync::OnceLock;

use regex::Regex;

/// Expand `${env:VAR}` placeholders in a raw TOML string
///
/// Supports an optional fallback via `${env:VAR:-fallback}`, used when the
/// variable is unset. A placeholder without a fallback referencing an unset
/// variable is an error. Lines starting with `#` (TOML comments) are passed
/// through unchanged.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // Group 1: variable name; group 2: optional `:-fallback` value
        RE.get_or_init(|| Regex::new(r"\$\{env:([A-Za-z0-9_]+)(?::-([^}]*))?\}").expect("must be valid regex"))
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in re().captures_iter(line) {
            let overall = captures.get(0).expect("match always has a full capture");
            let var_name = captures.get(1).expect("group 1 is not optional").as_str();
            let fallback = captures.get(2).map(|m| m.as_str());

            output.push_str(&line[last_end..overall.start()]);

            match std::env::var(var_name) {
                Ok(value) => output.push_str(&value),
                Err(_) => match fallback {
                    Some(value) => output.push_str(value),
                    None => return Err(format!("environment variable not found: `{var_name}`")),
                },
            }

            last_end = overall.end();
        }
        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
