// Shared prompt fragments and the template filler. Each feature that builds
// prompts keeps its own templates alongside it.

/// Appended to every generation prompt. The reply is still scanned for the
/// first JSON object, so stray prose does not break parsing, but asking for
/// bare JSON keeps replies short.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with the JSON object only. \
    Do NOT wrap it in markdown code fences. \
    Do NOT add explanations before or after it.";

/// Replaces each `{name}` placeholder in `template` with its value.
///
/// Single pass over the template: a value that itself contains `{name}` text
/// is inserted verbatim and never expanded. Braces that do not form a known
/// placeholder (the JSON examples in the templates) are left alone.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];

        let matched = values.iter().find(|(name, _)| {
            tail.strip_prefix(name)
                .is_some_and(|after| after.starts_with('}'))
        });

        match matched {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
