//! Three-song walkthrough of the catalog operations.

use cadence_catalog::{DuplicatePolicy, HybridCatalog};
use cadence_core::Record;

pub fn run(policy: DuplicatePolicy) {
    let mut player = HybridCatalog::with_policy(policy);
    player.insert(Record::new("Song One", "Artist A"));
    player.insert(Record::new("Song Two", "Artist B"));
    player.insert(Record::new("Another Song", "Artist C"));

    println!("Searching for 'Song Two': {}", describe(player.search("Song Two")));
    println!("Searching for 'Song Three': {}", describe(player.search("Song Three")));

    player.delete("Song One");

    println!("Range query for songs between 'Song' and 'Song Z':");
    for song in player.range_query("Song", "Song Z") {
        println!("{}", song);
    }
}

fn describe(record: Option<&Record>) -> String {
    match record {
        Some(record) => record.to_string(),
        None => "None".to_string(),
    }
}
