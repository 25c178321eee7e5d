use limelight::search::Outcome;
use limelight::search::Search;

fn main() {
    limelight::log();
    match Search::default().run() {
        Outcome::Found(witness) => println!("{}", witness),
        Outcome::Exhausted => {}
    }
}
