//! The fixed-capacity line tokenizer.
//!
//! Tabular sections of the `.osu` grammar are decoded from bounded,
//! positional token lists. Each call site knows its own capacity (3 for
//! event lines, 8 for timing points, 10 for hit objects and for the
//! extras sub-group), so the tokenizer is parameterized by a const
//! capacity and backed by an inline [`SmallVec`] buffer: the hot
//! per-line path never touches the heap.

use smallvec::SmallVec;

/// Splits `line` on `delimiter` into at most `CAP` non-owning slices.
///
/// Tokens are produced left to right. Once `CAP - 1` tokens have been
/// produced, the final slice absorbs everything that remains of the
/// line, delimiters included; no data is ever truncated. Downstream
/// decoders rely on this to re-tokenize the final comma token on `:`.
///
/// Every slice borrows from `line`; the returned buffer never spills to
/// the heap because its length never exceeds the inline capacity.
#[must_use]
pub fn split_bounded<const CAP: usize>(line: &str, delimiter: char) -> SmallVec<[&str; CAP]> {
    const {
        assert!(CAP > 0, "token capacity must be at least 1");
    }
    let mut tokens = SmallVec::new();
    let mut rest = line;
    while tokens.len() + 1 < CAP {
        let Some((token, tail)) = rest.split_once(delimiter) else {
            break;
        };
        tokens.push(token);
        rest = tail;
    }
    tokens.push(rest);
    tokens
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::split_bounded;

    #[test]
    fn splits_below_capacity() {
        let tokens = split_bounded::<8>("0,500,4,2", ',');
        assert_eq!(tokens.as_slice(), &["0", "500", "4", "2"]);
    }

    #[test]
    fn reconstructs_original_line() {
        const LINE: &str = "256,192,1000,1,0";
        let tokens = split_bounded::<10>(LINE, ',');
        assert_eq!(tokens.join(","), LINE);
    }

    #[test]
    fn last_token_absorbs_remainder() {
        let tokens = split_bounded::<3>("Sprite,Foreground,Centre,\"sb.png\",320,240", ',');
        assert_eq!(
            tokens.as_slice(),
            &["Sprite", "Foreground", "Centre,\"sb.png\",320,240"]
        );
    }

    #[test]
    fn exact_capacity_keeps_all_tokens() {
        let tokens = split_bounded::<3>("a,b,c", ',');
        assert_eq!(tokens.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn empty_segments_are_preserved() {
        let tokens = split_bounded::<4>("a,,b", ',');
        assert_eq!(tokens.as_slice(), &["a", "", "b"]);
    }

    #[test]
    fn empty_line_yields_one_empty_token() {
        let tokens = split_bounded::<3>("", ',');
        assert_eq!(tokens.as_slice(), &[""]);
    }

    #[test]
    fn never_spills_to_heap() {
        let tokens = split_bounded::<3>("a,b,c,d,e,f,g,h", ',');
        assert!(!tokens.spilled());
        assert_eq!(tokens.len(), 3);
    }
}
