//! Interactive driver: prompts for an array size and a thread count,
//! generates the array, runs the parallel search, and prints the result.

use parallel_min::{array, search};
use std::{
    error::Error,
    io::{self, Write},
    str::FromStr,
};

/// Prints `text` as a prompt and parses the next stdin line.
/// A malformed line is fatal; there is no re-prompt.
fn prompt<T>(text: &str) -> Result<T, Box<dyn Error>>
where
    T: FromStr,
    T::Err: Error + 'static,
{
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().parse()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let size: usize = prompt("Enter the size of the array: ")?;
    let num_threads: usize = prompt("Enter the number of threads: ")?;

    let values = array::generate(size)?;
    let min = search::find_min(&values, num_threads)?;

    println!("Global Min: {}, Index: {}", min.value, min.index);
    Ok(())
}
