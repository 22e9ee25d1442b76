use asmr_syntax::tokenize;

use crate::{resolve, Symbol, SymbolKind};

fn symbols(text: &str) -> Vec<Symbol> {
    let tokens = tokenize(text);
    resolve(&tokens).iter().cloned().collect()
}

#[test]
fn empty_text_yields_empty_table() {
    assert!(symbols("").is_empty());
}

#[test]
fn label_declaration_and_reference() {
    let table = symbols("LOOP: mov a, 1\njmp LOOP");
    assert_eq!(table.len(), 1);
    let sym = &table[0];
    assert_eq!(sym.name, "LOOP");
    assert_eq!(sym.kind, SymbolKind::Label);
    assert_eq!(sym.declaration.start.line, 0);
    assert_eq!(sym.declaration.start.column, 0);
    assert_eq!(sym.declaration.end.column, 4);
    assert_eq!(sym.references.len(), 1);
    assert_eq!(sym.references[0].start.line, 1);
}

#[test]
fn variable_and_function_kinds() {
    let table = symbols("msg db \"hi\"\ncount resb 4\ntotal equ 10\nproc strlen\nendp");
    let kinds: Vec<_> = table.iter().map(|s| (s.name.as_str(), s.kind)).collect();
    assert_eq!(
        kinds,
        [
            ("msg", SymbolKind::Variable),
            ("count", SymbolKind::Variable),
            ("total", SymbolKind::Variable),
            ("strlen", SymbolKind::Function),
        ]
    );
}

#[test]
fn first_declaration_wins_over_conflicting_redeclaration() {
    // `LOOP` is first a label; the later `db` declaration must not
    // reclassify it.
    let table = symbols("LOOP: nop\nLOOP db 1");
    assert_eq!(table.len(), 1);
    let sym = &table[0];
    assert_eq!(sym.kind, SymbolKind::Label);
    assert_eq!(sym.references.len(), 1);
    assert_eq!(sym.references[0].start.line, 1);
}

#[test]
fn same_kind_redeclaration_becomes_reference() {
    let table = symbols("x db 1\nx db 2");
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].kind, SymbolKind::Variable);
    assert_eq!(table[0].references.len(), 1);
}

#[test]
fn unknown_identifiers_are_not_fabricated() {
    let table = symbols("mov eax, ebx\njmp nowhere");
    assert!(table.is_empty());
}

#[test]
fn forward_references_are_not_recorded() {
    let table = symbols("jmp end\nend: nop");
    assert_eq!(table.len(), 1);
    let sym = &table[0];
    assert_eq!(sym.name, "end");
    // The use on line 0 precedes the declaration, so only the declaration
    // is known.
    assert!(sym.references.is_empty());
}

#[test]
fn symbols_iterate_in_first_declaration_order() {
    let table = symbols("b db 1\na: nop\nproc c\nendp\njmp a");
    let names: Vec<_> = table.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["b", "a", "c"]);
}

#[test]
fn case_sensitive_names_stay_distinct() {
    let table = symbols("loop: nop\nLOOP: nop");
    let names: Vec<_> = table.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["loop", "LOOP"]);
}

#[test]
fn resolve_is_deterministic() {
    let text = "start:\nmsg db \"hi\"\nproc f\nendp\njmp start\nmov msg, 1";
    assert_eq!(symbols(text), symbols(text));
}

#[test]
fn lookup_by_name_is_case_sensitive() {
    let tokens = tokenize("msg db 1");
    let table = resolve(&tokens);
    assert_eq!(table.len(), 1);
    assert!(!table.is_empty());
    assert!(table.get("msg").is_some());
    assert!(table.get("MSG").is_none());
}

#[test]
fn references_accumulate_in_source_order() {
    let table = symbols("x db 1\nmov x, 2\nadd x, 3");
    let sym = &table[0];
    assert_eq!(sym.references.len(), 2);
    assert!(sym.references[0].start.line < sym.references[1].start.line);
}
