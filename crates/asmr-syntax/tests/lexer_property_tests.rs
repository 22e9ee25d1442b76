#![cfg(feature = "proptest")]

use asmr_syntax::tokenize;
use proptest::prelude::*;

proptest! {
    #[test]
    fn lexer_never_panics_and_covers_input(
        input in prop::collection::vec(any::<char>(), 0..2048)
            .prop_map(|chars| chars.into_iter().collect::<String>())
    ) {
        let tokens = tokenize(&input);
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn tokens_are_nonempty_and_contiguous(input in "[ -~\n]{0,512}") {
        let tokens = tokenize(&input);
        let mut cursor = (0usize, 0usize);
        for token in &tokens {
            prop_assert!(!token.text.is_empty());
            let start = (token.span.start.line, token.span.start.column);
            prop_assert_eq!(start, cursor, "gap before {:?}", token);
            cursor = (token.span.end.line, token.span.end.column);
        }
    }
}
