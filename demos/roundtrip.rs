// Round-trip demonstration
// This example parses JSON text, inspects and mutates the tree, and
// serializes it back.

use dynjson::{parse, stringify};

fn main() {
    println!("dynjson Round-Trip Demo\n");
    println!("=======================\n");

    // Example 1: Parse and reserialize
    println!("Example 1: Parse and reserialize");
    let text = r#"{"name": "Ada", "scores": [1, 2.5, 3], "active": true}"#;
    match parse(text) {
        Ok(doc) => println!("  '{}' => {}\n", text, stringify(&doc)),
        Err(e) => println!("  Error: {}\n", e),
    }

    // Example 2: Mutate between trips
    println!("Example 2: Mutate between trips");
    let mut doc = parse(r#"{"items": ["a"], "count": 1}"#).unwrap();
    doc.get_mut("items").unwrap().push("b").unwrap();
    doc.get_mut("count").unwrap().set_long(2);
    println!("  => {}\n", stringify(&doc));

    // Example 3: Dual addressing on objects
    println!("Example 3: Dual addressing");
    let doc = parse(r#"{"first": 10, "second": 20}"#).unwrap();
    println!("  by key 'second' => {}", doc.get("second").unwrap());
    println!("  by position 0   => {}\n", doc.get_index(0).unwrap());

    // Example 4: Structured parse errors
    println!("Example 4: Structured parse errors");
    for bad in [r#"{"a":}"#, "\"unterminated", "1e5"] {
        match parse(bad) {
            Ok(doc) => println!("  '{}' => {}", bad, stringify(&doc)),
            Err(e) => println!("  '{}' => Error: {}", bad, e),
        }
    }
}
