use lotto_core::Constraints;
use lotto_generate::{GenerateOptions, GenerationEngine, GenerationRequest};

fn main() {
    let constraints = Constraints::from_values(&[7], &[13]).expect("valid numbers");
    let request = GenerationRequest::new(constraints, 5);
    let engine = GenerationEngine::new(GenerateOptions { seed: Some(2024) });

    let result = engine.run(&request).expect("generate sets");
    for (idx, set) in result.sets.iter().enumerate() {
        println!("Set {}: {set}", idx + 1);
    }
    let report = serde_json::to_string_pretty(&result.report).expect("serialize report");
    println!("{report}");
}
