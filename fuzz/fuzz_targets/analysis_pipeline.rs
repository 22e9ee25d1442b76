#![no_main]
//! Fuzz target: full analysis pipeline.
//!
//! Simulates what an editor triggers when a document is opened or changed:
//!   lex → resolve → completions / outline / semantic tokens
//!
//! Invariants checked:
//! - No stage may panic on arbitrary input.
//! - Token texts concatenate back to the input (total coverage).
//! - All three boundary operations return JSON, never an error, for any
//!   input text.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Editor documents are typically small; cap at 32 KiB.
    if data.len() > 32 * 1024 {
        return;
    }
    let src = String::from_utf8_lossy(data);

    let tokens = asmr_syntax::tokenize(&src);
    let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(rebuilt, src, "lexer dropped input characters");

    let _table = asmr_analysis::resolve(&tokens);

    assert!(asmr_ide::get_completion_items(&src).is_ok());
    assert!(asmr_ide::get_document_symbols(&src).is_ok());
    assert!(asmr_ide::parse_file_tokens(&src).is_ok());
});
