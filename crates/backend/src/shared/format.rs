/// Число с точками между тысячами: `1234567` -> `"1.234.567"`
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut groups: Vec<&str> = Vec::with_capacity(digits.len() / 3 + 1);
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok()),
    );
    groups.join(".")
}

/// Начало тела ответа для логов: не больше `limit` символов, с `...` при обрезке
pub fn body_preview(body: &str, limit: usize) -> String {
    let preview: String = body.chars().take(limit).collect();
    if preview.len() < body.len() {
        format!("{}...", preview)
    } else {
        preview
    }
}
