/// Upper-cases the first letter of every run of cased letters and lower-cases the rest
///
/// Any character without case (whitespace, apostrophe, hyphen, digit, CJK) ends a
/// run, so `"o'neil-SMITH"` becomes `"O'Neil-Smith"` and `"中a"` becomes `"中A"`.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_word = false;

    for ch in input.chars() {
        if is_cased(ch) {
            if in_word {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(ch);
            in_word = false;
        }
    }

    output
}

fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase()
}
