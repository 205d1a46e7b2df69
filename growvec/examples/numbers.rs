//! Walks a `GrowVec` through every operation it supports, printing the
//! contents after each step.
//!
//! Run with: `cargo run --example numbers`

use growvec::{GrowVec, GrowVecError};

fn main() -> Result<(), GrowVecError> {
    let mut numbers = GrowVec::new()?;

    numbers.push(10)?;
    numbers.push(20)?;
    numbers.push(30)?;
    println!("after pushing 10, 20, 30:      {numbers:?}");

    numbers.insert(1, 15)?;
    println!("after inserting 15 at index 1: {numbers:?}");

    if let Some(value) = numbers.get(2) {
        println!("element at index 2:            {value}");
    }

    numbers.set(2, 25)?;
    println!("after setting index 2 to 25:   {numbers:?}");

    let removed = numbers.remove(1)?;
    println!("removed {removed} from index 1:       {numbers:?}");

    let popped = numbers.pop();
    println!("popped {popped:?}:               {numbers:?}");

    println!("length {} of capacity {}", numbers.len(), numbers.capacity());

    Ok(())
}
