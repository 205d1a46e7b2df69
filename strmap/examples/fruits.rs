//! Keeps a small fruit inventory in a `StrMap`, exercising insert, update,
//! lookup, and removal.
//!
//! Run with: `cargo run --example fruits`

use strmap::{StrMap, StrMapError};

fn report(inventory: &StrMap, key: &str) {
    match inventory.get(key) {
        Some(count) => println!("{key} => {count}"),
        None => println!("{key} => not found"),
    }
}

fn main() -> Result<(), StrMapError> {
    let mut inventory = StrMap::new(10)?;

    inventory.set("apple", 3);
    inventory.set("banana", 7);
    inventory.set("orange", 5);
    inventory.set("banana", 10); // restock: updates in place

    report(&inventory, "banana");
    report(&inventory, "grape");

    inventory.remove("apple");
    report(&inventory, "apple");

    println!("{} kinds of fruit in stock:", inventory.len());
    for (fruit, count) in &inventory {
        println!("  {fruit}: {count}");
    }

    Ok(())
}
