//! IDCT command implementation.

use oxijpeg_core::OxiJpegError;
use oxijpeg_dct::{DCT_WIDTH, inverse_dct};

pub fn cmd_idct(coefficients: &[f64], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let block_size = DCT_WIDTH * DCT_WIDTH;
    if coefficients.len() > block_size {
        return Err(OxiJpegError::invalid_input(format!(
            "expected at most {} coefficients, got {}",
            block_size,
            coefficients.len()
        ))
        .into());
    }

    // Missing trailing coefficients are zero.
    let mut input = vec![0.0; block_size];
    input[..coefficients.len()].copy_from_slice(coefficients);
    let mut output = vec![0.0; block_size];
    inverse_dct(&mut input, &mut output)?;

    if json {
        let rows: Vec<&[f64]> = output.chunks_exact(DCT_WIDTH).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in output.chunks_exact(DCT_WIDTH) {
        let line: Vec<String> = row.iter().map(|v| format!("{:8.2}", v)).collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}
