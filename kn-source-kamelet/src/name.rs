use knative::KReference;

/// The binding name: `explicit` when given, otherwise
/// `<sink>-to-<kind>-<name>` reduced to a DNS label.
pub fn derive_name(explicit: &str, sink: &str, source: &KReference) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }

    let generated = format!("{sink}-to-{}-{}", source.kind, source.name);
    // last path element, trailing separators ignored
    let base = generated.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    let stem = base.split('.').next().unwrap_or_default();

    stem.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
        .collect::<String>()
        .trim_matches(|c: char| !c.is_ascii_alphanumeric())
        .to_string()
}
