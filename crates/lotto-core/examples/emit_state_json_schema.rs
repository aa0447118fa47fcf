use lotto_core::Favorites;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(Favorites);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
