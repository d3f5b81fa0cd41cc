/// Human-readable label for a path segment id.
///
/// Splits on `-` and `_`, upper-cases the first character of each token and
/// joins the tokens with spaces: `socket_head` becomes `Socket Head`. Empty
/// tokens are kept as-is, so `a__b` becomes `A  B`.
pub fn display_label(id: &str) -> String {
    id.split(['-', '_'])
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_both_separators() {
        assert_eq!(display_label("socket_head"), "Socket Head");
        assert_eq!(display_label("hex-head_flange"), "Hex Head Flange");
    }

    #[test]
    fn keeps_remaining_case() {
        assert_eq!(display_label("iso4762"), "Iso4762");
        assert_eq!(display_label("dIN_912"), "DIN 912");
    }

    #[test]
    fn empty_tokens_do_not_panic() {
        assert_eq!(display_label(""), "");
        assert_eq!(display_label("_"), " ");
        assert_eq!(display_label("a__b"), "A  B");
    }

    #[test]
    fn non_ascii_first_letters() {
        assert_eq!(display_label("ölring"), "Ölring");
    }
}
