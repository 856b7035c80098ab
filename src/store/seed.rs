//! Records present at process start

use super::record::{Pokemon, Trainer};

/// The four seed records, in seed order
pub fn seed_pokemons() -> Vec<Pokemon> {
    vec![
        Pokemon::new("1", "Pikachu", "Electricity", Some(Trainer::new("Ash", "Ketchum"))),
        Pokemon::new("2", "Charmender", "Flame", Some(Trainer::new("Ash", "Ketchum"))),
        Pokemon::new("3", "Psyduck", "Water", Some(Trainer::new("Misty", "Williams"))),
        Pokemon::new("4", "Onix", "Rock", Some(Trainer::new("Brock", "Harrison"))),
    ]
}
