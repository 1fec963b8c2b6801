use std::fmt::{self, Write};

/// Substitutes positional placeholders (`{0}`, `{1}`, ...) in `template`.
///
/// `{{` and `}}` produce literal braces. A placeholder whose index has no
/// matching argument is kept verbatim.
pub fn format_template(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let bytes = template.as_bytes();
    let mut i = 0;
    let mut literal_start = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => {
                out.push_str(&template[literal_start..i]);
                out.push('{');
                i += 2;
                literal_start = i;
            }
            b'}' if bytes.get(i + 1) == Some(&b'}') => {
                out.push_str(&template[literal_start..i]);
                out.push('}');
                i += 2;
                literal_start = i;
            }
            b'{' => {
                let digits = bytes[i + 1..]
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                let close = i + 1 + digits;
                let arg = if digits > 0 && bytes.get(close) == Some(&b'}') {
                    template[i + 1..close]
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| args.get(n))
                } else {
                    None
                };
                match arg {
                    Some(arg) => {
                        out.push_str(&template[literal_start..i]);
                        let _ = write!(out, "{}", arg);
                        i = close + 1;
                        literal_start = i;
                    }
                    None => i += 1,
                }
            }
            _ => i += 1,
        }
    }
    out.push_str(&template[literal_start..]);
    out
}
