use quantline_artifact::{Artifact, DataCommitment};
use std::fs;

// Consumer-side intake: read an emitted artifact, decode the columns and
// print the data commitment that binds the threshold check to them.
// Usage: commit_input [path-to-artifact.json]

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.json".to_string());

    let json = fs::read_to_string(&path).expect("read artifact");
    let artifact = Artifact::from_json(&json).expect("parse artifact");
    let commitment = DataCommitment::of(&artifact).expect("derive commitment");

    println!("X_HASH {}", hex::encode(commitment.x_hash));
    println!("Y_HASH {}", hex::encode(commitment.y_hash));
    println!("DATA_COMMITMENT {}", commitment.to_hex());
}
