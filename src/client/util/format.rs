/// Format a value as Brazilian currency, e.g. `R$ 1234,50`.
pub fn format_moeda(valor: f64) -> String {
    format!("R$ {:.2}", valor).replace('.', ",")
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
