//! Placeholder substitution for rich text templates.
//!
//! Supports `{}` (next positional), `{N}` (explicit positional), `{name}`
//! (named) and the `{{` / `}}` escapes. Automatic and manual numbering cannot
//! be mixed in a single template. Arguments that are never referenced are
//! ignored.

use crate::error::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Unset,
    Automatic,
    Manual,
}

/// Substitute already-rendered arguments into `template`.
pub fn substitute(
    template: &str,
    positional: &[String],
    named: &[(String, String)],
) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut numbering = Numbering::Unset;
    let mut next_auto = 0usize;
    let bytes = template.as_bytes();
    let mut cursor = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                out.push_str(&template[cursor..i]);
                out.push('{');
                i += 2;
                cursor = i;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                out.push_str(&template[cursor..i]);
                out.push('}');
                i += 2;
                cursor = i;
            }
            b'}' => return Err(FormatError::UnmatchedClose(i)),
            b'{' => {
                out.push_str(&template[cursor..i]);
                let close = find_close(bytes, i)?;
                let field = &template[i + 1..close];
                let value = resolve(
                    field,
                    positional,
                    named,
                    &mut numbering,
                    &mut next_auto,
                )?;
                out.push_str(value);
                i = close + 1;
                cursor = i;
            }
            _ => i += 1,
        }
    }
    out.push_str(&template[cursor..]);
    Ok(out)
}

fn find_close(bytes: &[u8], open: usize) -> Result<usize, FormatError> {
    for (offset, b) in bytes[open + 1..].iter().enumerate() {
        match b {
            b'}' => return Ok(open + 1 + offset),
            b'{' => return Err(FormatError::UnmatchedOpen(open)),
            _ => {}
        }
    }
    Err(FormatError::UnmatchedOpen(open))
}

fn resolve<'a>(
    field: &str,
    positional: &'a [String],
    named: &'a [(String, String)],
    numbering: &mut Numbering,
    next_auto: &mut usize,
) -> Result<&'a str, FormatError> {
    if field.contains([':', '!']) {
        return Err(FormatError::UnsupportedSpec(field.to_string()));
    }

    if field.is_empty() {
        if *numbering == Numbering::Manual {
            return Err(FormatError::MixedNumbering);
        }
        *numbering = Numbering::Automatic;
        let index = *next_auto;
        *next_auto += 1;
        return positional
            .get(index)
            .map(String::as_str)
            .ok_or(FormatError::MissingPositional(index));
    }

    if field.bytes().all(|b| b.is_ascii_digit()) {
        if *numbering == Numbering::Automatic {
            return Err(FormatError::MixedNumbering);
        }
        *numbering = Numbering::Manual;
        // An index too large for usize cannot exist either.
        let index = field.parse::<usize>().unwrap_or(usize::MAX);
        return positional
            .get(index)
            .map(String::as_str)
            .ok_or(FormatError::MissingPositional(index));
    }

    named
        .iter()
        .find(|(key, _)| key == field)
        .map(|(_, value)| value.as_str())
        .ok_or_else(|| FormatError::MissingNamed(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn named(values: &[(&str, &str)]) -> Vec<(String, String)> {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_placeholders() {
        assert_eq!(substitute("plain text", &[], &[]).unwrap(), "plain text");
    }

    #[test]
    fn automatic_positional() {
        let out = substitute("{} and {}", &pos(&["salt", "pepper"]), &[]).unwrap();
        assert_eq!(out, "salt and pepper");
    }

    #[test]
    fn manual_positional_reuse() {
        let out = substitute("{1}{0}{1}", &pos(&["a", "b"]), &[]).unwrap();
        assert_eq!(out, "bab");
    }

    #[test]
    fn named_lookup() {
        let out = substitute("Hi {who}!", &[], &named(&[("who", "Ada")])).unwrap();
        assert_eq!(out, "Hi Ada!");
    }

    #[test]
    fn escaped_braces() {
        let out = substitute("{{literal}} {}", &pos(&["x"]), &[]).unwrap();
        assert_eq!(out, "{literal} x");
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let out = substitute("{}", &pos(&["a", "b"]), &named(&[("c", "d")])).unwrap();
        assert_eq!(out, "a");
    }

    #[test]
    fn missing_positional() {
        let err = substitute("{} {}", &pos(&["only"]), &[]).unwrap_err();
        assert_eq!(err, FormatError::MissingPositional(1));
    }

    #[test]
    fn missing_named() {
        let err = substitute("{ghost}", &[], &[]).unwrap_err();
        assert_eq!(err, FormatError::MissingNamed("ghost".to_string()));
    }

    #[test]
    fn unmatched_braces() {
        assert_eq!(
            substitute("oops {", &[], &[]).unwrap_err(),
            FormatError::UnmatchedOpen(5)
        );
        assert_eq!(
            substitute("oops }", &[], &[]).unwrap_err(),
            FormatError::UnmatchedClose(5)
        );
        assert_eq!(
            substitute("{a{b}", &[], &[]).unwrap_err(),
            FormatError::UnmatchedOpen(0)
        );
    }

    #[test]
    fn mixed_numbering() {
        let args = pos(&["a", "b"]);
        assert_eq!(
            substitute("{} {1}", &args, &[]).unwrap_err(),
            FormatError::MixedNumbering
        );
        assert_eq!(
            substitute("{0} {}", &args, &[]).unwrap_err(),
            FormatError::MixedNumbering
        );
    }

    #[test]
    fn format_spec_rejected() {
        let err = substitute("{0:>4}", &pos(&["a"]), &[]).unwrap_err();
        assert_eq!(err, FormatError::UnsupportedSpec("0:>4".to_string()));
    }

    #[test]
    fn multibyte_text_survives() {
        let out = substitute("héllo {} · ünïcode", &pos(&["wörld"]), &[]).unwrap();
        assert_eq!(out, "héllo wörld · ünïcode");
    }
}
