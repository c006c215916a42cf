//! Quote-aware argument splitting.
//!
//! Positional command arguments are separated by spaces, but a field may be
//! wrapped in `'` or `"` to contain spaces. The final field absorbs any
//! overflow so that trailing free text survives verbatim.

/// Split `msg` into at most `max_fields` ordered fields.
///
/// Tokenization is on single spaces. A token starting with `'` or `"` opens
/// a quoted field: the mark is stripped and subsequent tokens are
/// space-joined into that field until one *ends* with the same mark
/// (trailing mark stripped). Input that ends mid-quote closes the field
/// with whatever accumulated; malformed quoting never errors.
///
/// If quote joining still leaves more than `max_fields` fields, the final
/// field is replaced by the remainder of `msg` starting at the token that
/// opened it — verbatim, quote marks and internal whitespace included.
/// `max_fields == 0` yields no fields.
pub fn split_args(msg: &str, max_fields: usize) -> Vec<String> {
    if max_fields == 0 {
        return Vec::new();
    }

    let mut fields: Vec<String> = Vec::new();
    // Byte offset in `msg` where each field's first token starts, so an
    // overflowing tail can be recovered verbatim.
    let mut starts: Vec<usize> = Vec::new();
    // An open quoted field: its mark, the text so far, and its start offset.
    let mut pending: Option<(char, String, usize)> = None;
    let mut offset = 0;

    for token in msg.split(' ') {
        if let Some((quote, mut acc, start)) = pending.take() {
            acc.push(' ');
            if token.ends_with(quote) {
                acc.push_str(&token[..token.len() - quote.len_utf8()]);
                fields.push(acc);
                starts.push(start);
            } else {
                acc.push_str(token);
                pending = Some((quote, acc, start));
            }
        } else if let Some(quote) = token.chars().next().filter(|c| *c == '\'' || *c == '"') {
            pending = Some((quote, token[quote.len_utf8()..].to_string(), offset));
        } else {
            fields.push(token.to_string());
            starts.push(offset);
        }
        offset += token.len() + 1;
    }
    if let Some((_, acc, start)) = pending {
        fields.push(acc);
        starts.push(start);
    }

    if fields.len() > max_fields {
        fields.truncate(max_fields - 1);
        fields.push(msg[starts[max_fields - 1]..].to_string());
    }
    fields
}
