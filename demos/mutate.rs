//! Pipe an AdmissionReview body through the webhook core
//!
//! ```sh
//! cat review.json | cargo run --example mutate
//! ```

use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let mut body = Vec::new();
    std::io::stdin().read_to_end(&mut body)?;

    let response = namegen::mutate(&body, true)?;
    println!("{}", String::from_utf8_lossy(&response));

    Ok(())
}
