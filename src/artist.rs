/// Artist name as shown before the first colon of the page title.
///
/// `"The Band: Tiny Desk Concert : NPR"` becomes `"The Band"`. A title with
/// no colon is used whole.
pub fn artist_from_title(title: &str) -> String {
    title
        .split_once(':')
        .map_or(title, |(artist, _)| artist)
        .trim()
        .to_string()
}

/// Lowercased file stem for an artist.
///
/// Anything that is not an ASCII letter, digit, underscore or whitespace is
/// dropped (not transliterated), then every whitespace run becomes one
/// underscore.
pub fn sanitized_name(artist: &str) -> String {
    let mut stem = String::with_capacity(artist.len());
    let mut in_space = false;

    for c in artist.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            stem.push(c);
            in_space = false;
        }
    }

    stem
}

/// Name of the JSON file written for an artist
pub fn output_file_name(artist: &str, suffix: &str) -> String {
    format!("{}{}", sanitized_name(artist), suffix)
}
