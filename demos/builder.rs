// Builder demonstration
// This example constructs trees with the jval! macro and the mutation API,
// and shows the legacy boolean write mode.

use dynjson::{jval, stringify, stringify_with, JsonValue, WriteOptions};

fn main() {
    println!("dynjson Builder Demo\n");
    println!("====================\n");

    // Example 1: Literal construction with jval!
    println!("Example 1: jval! literals");
    let doc = jval!({
        "name": "Ada",
        "tags": ["math", "engines"],
        "born": 1815i64
    });
    println!("  => {}\n", stringify(&doc));

    // Example 2: Promotion from an uninitialized value
    println!("Example 2: Promotion");
    let mut obj = JsonValue::new();
    obj.insert("kind", "object now").unwrap();
    let mut arr = JsonValue::new();
    arr.push(1i64).unwrap();
    arr.push(2i64).unwrap();
    println!("  object => {}", stringify(&obj));
    println!("  array  => {}\n", stringify(&arr));

    // Example 3: Typed getters coerce through text
    println!("Example 3: Textual coercion");
    let n = jval!(42i64);
    println!("  42 as long   => {}", n.get_long().unwrap());
    println!("  42 as double => {}", n.get_double().unwrap());
    println!("  42 as string => {:?}\n", n.get_string().unwrap());

    // Example 4: Legacy boolean encoding
    println!("Example 4: Legacy booleans");
    let flags = jval!({"on": true, "off": false});
    println!("  default => {}", stringify(&flags));
    println!(
        "  legacy  => {}",
        stringify_with(&flags, &WriteOptions::legacy())
    );
}
