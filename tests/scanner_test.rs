use errcodegen::error::Error;
use errcodegen::scanner::{scan, ErrorCode, Scanner};

fn pairs(text: &str) -> Vec<(String, String)> {
    scan(text)
        .unwrap()
        .into_iter()
        .map(|e| (e.code().to_string(), e.name().to_string()))
        .collect()
}

fn pair(code: &str, name: &str) -> (String, String) {
    (code.to_string(), name.to_string())
}

fn invalid_code_point(text: &str) -> u32 {
    match scan(text) {
        Err(Error::InvalidCharacter { code_point, .. }) => code_point,
        other => panic!("Expected InvalidCharacter, got {other:?}"),
    }
}

#[test]
fn test_empty_text() {
    assert!(scan("").unwrap().is_empty());
    assert!(scan(" \n\t\r\n  ").unwrap().is_empty());
}

#[test]
fn test_entries_in_source_order() {
    let text = r#"
1 FileNotFound = "File not found.";
2_5 AccessDenied = "Access denied.";
1_000_000 OutOfMemory="Out of memory." ;
"#;
    assert_eq!(
        pairs(text),
        vec![
            pair("1", "FileNotFound"),
            pair("2_5", "AccessDenied"),
            pair("1_000_000", "OutOfMemory"),
        ]
    );
}

#[test]
fn test_entry_spanning_lines() {
    let text = "42\n  _private_Name9\n=\n\"multi\nline\"\n;";
    assert_eq!(pairs(text), vec![pair("42", "_private_Name9")]);
}

#[test]
fn test_comments_are_skipped() {
    let text = r#"
// Leading comment
1 First = "first"; // Trailing comment
/* Block comment
   2 Hidden = "not an entry";
*/
2 Second = "second";/* adjacent */3 Third = "third";
// Comment at end of file without newline"#;
    assert_eq!(pairs(text), vec![pair("1", "First"), pair("2", "Second"), pair("3", "Third")]);
}

#[test]
fn test_block_comments_do_not_nest() {
    let text = "/* outer /* inner */ 1 Visible = \"x\";";
    assert_eq!(pairs(text), vec![pair("1", "Visible")]);

    // The first `*/` closes the comment, so the second one is stray.
    assert_eq!(invalid_code_point("/* a /* b */ */"), '*' as u32);
}

#[test]
fn test_comment_like_text_inside_message() {
    let text = r#"1 Url = "see http://example.com /* not a comment */";"#;
    assert_eq!(pairs(text), vec![pair("1", "Url")]);
}

#[test]
fn test_message_escapes() {
    let text = r#"
1 Quotes = "say \"hi\" and \'bye\'";
2 Controls = "\0\a\b\n\r\t\_\-\\";
3 Unicode = "é \U0001F600";
4 Empty = "";
5 Raw = "tabs	and ünïcödé";
"#;
    let names: Vec<String> = pairs(text).into_iter().map(|(_, name)| name).collect();
    assert_eq!(names, vec!["Quotes", "Controls", "Unicode", "Empty", "Raw"]);
}

#[test]
fn test_stray_character_fails() {
    let text = "1 First = \"first\";\n#\n2 Second = \"second\";";
    match scan(text) {
        Err(Error::InvalidCharacter { character, code_point, line, column }) => {
            assert_eq!(character, '#');
            assert_eq!(code_point, 35);
            assert_eq!(line, 2);
            assert_eq!(column, 1);
        }
        other => panic!("Expected InvalidCharacter, got {other:?}"),
    }
}

#[test]
fn test_first_invalid_character_is_reported() {
    assert_eq!(invalid_code_point("1 A = \"a\"; @ $"), '@' as u32);
}

#[test]
fn test_malformed_entries_fail_at_their_first_character() {
    // Unknown escape
    assert_eq!(invalid_code_point(r#"1 A = "\q";"#), '1' as u32);
    // Short unicode escape with too few digits
    assert_eq!(invalid_code_point(r#"7 A = "\u12";"#), '7' as u32);
    // Unterminated string
    assert_eq!(invalid_code_point("3 A = \"abc"), '3' as u32);
    // Missing semicolon
    assert_eq!(invalid_code_point("4 A = \"abc\""), '4' as u32);
    // Name must not start with a digit
    assert_eq!(invalid_code_point("5 9A = \"abc\";"), '5' as u32);
    // Doubled digit separator
    assert_eq!(invalid_code_point("1__0 A = \"abc\";"), '1' as u32);
    // Leading separator
    assert_eq!(invalid_code_point("_1 A = \"abc\";"), '_' as u32);
    // Code and name must be separated
    assert_eq!(invalid_code_point("6A = \"abc\";"), '6' as u32);
}

#[test]
fn test_comment_inside_entry_is_not_allowed() {
    assert_eq!(invalid_code_point("1 A /* c */ = \"abc\";"), '1' as u32);
}

#[test]
fn test_unterminated_block_comment() {
    assert_eq!(invalid_code_point("/* never closed\n1 A = \"a\";"), '/' as u32);
}

#[test]
fn test_non_ascii_invalid_character() {
    assert_eq!(invalid_code_point("1 A = \"a\";\n€"), 0x20AC);
}

#[test]
fn test_duplicates_are_kept() {
    let text = "1 Same = \"a\";\n1 Same = \"b\";";
    assert_eq!(pairs(text), vec![pair("1", "Same"), pair("1", "Same")]);
}

#[test]
fn test_scanner_is_reusable() {
    let scanner = Scanner::new().unwrap();
    let first = scanner.scan("1 A = \"a\";").unwrap();
    let second = scanner.scan("1 A = \"a\";").unwrap();

    assert_eq!(first, vec![ErrorCode::new("1", "A")]);
    assert_eq!(first, second);
    assert!(scanner.scan("!").is_err());
}
