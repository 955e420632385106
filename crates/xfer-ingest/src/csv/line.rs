//! Single-line CSV splitting with Excel-style quoting.

/// Splits one CSV line into fields.
///
/// Every `"` toggles the quoted state; a `,` separates fields only outside
/// quotes. An unterminated quote swallows the rest of the line into the last
/// field. Quoted fields cannot span lines.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    // Both delimiters are ASCII, so byte offsets always fall on char boundaries.
    for (idx, byte) in line.bytes().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                fields.push(unescape_value(&line[start..idx]));
                start = idx + 1;
            }
            _ => {}
        }
    }

    fields.push(unescape_value(&line[start..]));
    fields
}

/// Trims a raw field and removes one level of quoting.
///
/// A value wrapped in `"` loses the outer quotes and has every `""` collapsed
/// to `"`. Anything else is only trimmed.
pub fn unescape_value(raw: &str) -> String {
    let trimmed = raw.trim();
    if !(trimmed.starts_with('"') && trimmed.ends_with('"')) {
        return trimmed.to_string();
    }
    if trimmed.len() < 2 {
        // A lone quote opens and closes on the same character.
        return String::new();
    }
    trimmed[1..trimmed.len() - 1].replace("\"\"", "\"")
}
