use super::MessagesError;

/// Replace every `{0}` in `template` with `value`. Placeholders with any
/// other index are kept verbatim since only one argument exists.
pub fn substitute(template: &str, value: i64) -> Result<String, MessagesError> {
    let malformed = |position: usize| MessagesError::MalformedTemplate {
        template: template.to_string(),
        position,
    };

    let mut out = String::with_capacity(template.len() + 8);
    let mut offset = 0;
    while let Some(found) = template[offset..].find(['{', '}']) {
        let open = offset + found;
        out.push_str(&template[offset..open]);
        if template[open..].starts_with('}') {
            return Err(malformed(open));
        }

        let close = match template[open..].find('}') {
            Some(i) => open + i,
            None => return Err(malformed(open)),
        };
        let index = &template[open + 1..close];
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(open));
        }

        if index.parse::<u32>() == Ok(0) {
            out.push_str(&value.to_string());
        } else {
            out.push_str(&template[open..=close]);
        }
        offset = close + 1;
    }
    out.push_str(&template[offset..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_placeholder() {
        assert_eq!(substitute("{0} minutes ago", 6).unwrap(), "6 minutes ago");
        assert_eq!(substitute("hace {0} días", 3).unwrap(), "hace 3 días");
    }

    #[test]
    fn replaces_repeated_placeholder() {
        assert_eq!(substitute("{0}/{0}", 2).unwrap(), "2/2");
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        assert_eq!(substitute("just now", 9).unwrap(), "just now");
    }

    #[test]
    fn other_indexes_are_kept() {
        assert_eq!(substitute("{0} of {1}", 4).unwrap(), "4 of {1}");
    }

    #[test]
    fn unclosed_brace_is_malformed() {
        let err = substitute("in {0 days", 3).unwrap_err();
        assert!(matches!(err, MessagesError::MalformedTemplate { position: 3, .. }));
    }

    #[test]
    fn stray_closing_brace_is_malformed() {
        assert!(substitute("oops} {0}", 3).is_err());
    }

    #[test]
    fn non_numeric_index_is_malformed() {
        assert!(substitute("{count} days", 3).is_err());
        assert!(substitute("{} days", 3).is_err());
    }
}
