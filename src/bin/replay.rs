//! Replay Binary
//!
//! Loads a saved game file (default `game.txt`) and prints its contents.

use limelight::save::Record;

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or("game.txt".to_string());
    let record = Record::load(std::path::Path::new(&path))?;
    println!("n = {}", record.game.n());
    println!("m = {}", record.game.m());
    println!("D = {}", record.game.demand());
    println!("Q = {}", record.game.quality());
    println!("start = {}", record.start);
    println!("end = {}", record.end);
    let trail = record
        .path
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("path = {}", trail);
    Ok(())
}
