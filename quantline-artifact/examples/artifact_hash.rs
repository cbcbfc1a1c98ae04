use quantline_artifact::Artifact;
use quantline_core::{run_pipeline, PipelineConfig, SampleSet};
use quantline_fit::LeastSquaresFitter;

// Prints a SHA-256 digest of the reference artifact's JSON bytes.
// Run on two platforms and diff the output to verify byte-level determinism.

fn main() {
    let samples = SampleSet::from_columns(
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        &[9.2, 12.8, 17.1, 21.5, 24.8, 29.1, 32.7, 37.2, 41.0, 45.3],
    )
    .expect("reference columns");

    let run = run_pipeline(&LeastSquaresFitter, &samples, &PipelineConfig::default())
        .expect("reference pipeline");
    let json = Artifact::from_run(&run).to_json().expect("encode");

    println!("ARTIFACT_HASH {}", sha256(json.as_bytes()));
}

fn sha256(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
