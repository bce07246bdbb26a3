/// The door code is always exactly three decimal digits.
pub const CODE_LEN: usize = 3;

/// Code entry field. Only ASCII digits are ever stored and the length is
/// clamped to [`CODE_LEN`]; everything else typed is dropped without comment.
#[derive(Clone, Debug, Default)]
pub struct CodeInput {
    text: String,
}

impl CodeInput {
    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn push(&mut self, ch: char) {
        if ch.is_ascii_digit() && self.text.len() < CODE_LEN {
            self.text.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeOutcome {
    /// Not exactly three digits after trimming.
    InvalidFormat,
    /// Well-formed but not in the allow-list.
    WrongCode,
    Accepted,
}

/// Validate an entered code against the allow-list. Membership is exact
/// string equality — "007" and "7" are different codes. Any match in the
/// list succeeds identically.
pub fn validate(raw: &str, allowed: &[String]) -> CodeOutcome {
    let value = raw.trim();
    if value.chars().count() != CODE_LEN || !value.chars().all(|ch| ch.is_ascii_digit()) {
        return CodeOutcome::InvalidFormat;
    }
    if !allowed.iter().any(|code| code == value) {
        return CodeOutcome::WrongCode;
    }
    CodeOutcome::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn input_keeps_only_digits() {
        let mut input = CodeInput::default();
        for ch in "a2!b2 .7#".chars() {
            input.push(ch);
        }
        assert_eq!(input.value(), "227");
    }

    #[test]
    fn input_clamps_to_three_digits() {
        let mut input = CodeInput::default();
        for ch in "123456".chars() {
            input.push(ch);
        }
        assert_eq!(input.value(), "123");
    }

    #[test]
    fn input_value_always_matches_digit_pattern() {
        let re = regex::Regex::new(r"^\d{0,3}$").unwrap();
        let mut input = CodeInput::default();
        let noise = "x1\ty2 z3-４!9八7";
        for ch in noise.chars() {
            input.push(ch);
            assert!(re.is_match(input.value()), "got {:?}", input.value());
        }
        input.backspace();
        assert!(re.is_match(input.value()));
        input.clear();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut input = CodeInput::default();
        input.backspace();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn too_short_and_too_long_are_invalid_format() {
        let list = allowed(&["227"]);
        assert_eq!(validate("", &list), CodeOutcome::InvalidFormat);
        assert_eq!(validate("22", &list), CodeOutcome::InvalidFormat);
        assert_eq!(validate("2277", &list), CodeOutcome::InvalidFormat);
    }

    #[test]
    fn non_digits_are_invalid_format() {
        let list = allowed(&["227"]);
        assert_eq!(validate("22a", &list), CodeOutcome::InvalidFormat);
        // Full-width digits are not ASCII digits
        assert_eq!(validate("２２７", &list), CodeOutcome::InvalidFormat);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let list = allowed(&["227"]);
        assert_eq!(validate("  227 ", &list), CodeOutcome::Accepted);
    }

    #[test]
    fn wrong_code_is_rejected() {
        let list = allowed(&["227"]);
        assert_eq!(validate("228", &list), CodeOutcome::WrongCode);
    }

    #[test]
    fn any_code_in_the_list_is_accepted() {
        let list = allowed(&["227", "314"]);
        assert_eq!(validate("227", &list), CodeOutcome::Accepted);
        assert_eq!(validate("314", &list), CodeOutcome::Accepted);
        assert_eq!(validate("315", &list), CodeOutcome::WrongCode);
    }

    #[test]
    fn leading_zeros_are_significant() {
        let list = allowed(&["007"]);
        assert_eq!(validate("007", &list), CodeOutcome::Accepted);
        assert_eq!(validate("7", &list), CodeOutcome::InvalidFormat);
        assert_eq!(validate("070", &list), CodeOutcome::WrongCode);
    }
}
