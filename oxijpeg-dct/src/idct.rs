//! Scaled 8x8 inverse DCT.
//!
//! The transform is the unnormalized two-dimensional DCT-III (the
//! `REDFT01` kind in FFTW terms): along each axis
//!
//! ```text
//! Y[k] = X[0] + 2 * sum_{j=1}^{N-1} X[j] * cos(pi * j * (2k + 1) / 2N)
//! ```
//!
//! Scaling row 0 and column 0 of the coefficients by sqrt(2) beforehand and
//! dividing the result by 16 afterwards turns it into the JPEG IDCT of
//! T.81 A.3.3.

use oxijpeg_core::DctError;
use std::f64::consts::{PI, SQRT_2};
use std::sync::OnceLock;

/// Block width; blocks hold `DCT_WIDTH * DCT_WIDTH` coefficients.
pub const DCT_WIDTH: usize = 8;

/// Divisor applied to every output sample.
pub const DCT_NORMALIZE: f64 = 16.0;

/// Factor applied to the first row and first column of the input.
pub const BOUNDARY_SCALE: f64 = SQRT_2;

const BLOCK_SIZE: usize = DCT_WIDTH * DCT_WIDTH;

type Basis = [[f64; DCT_WIDTH]; DCT_WIDTH];

/// `basis()[k][j]` is the weight of input `j` in output `k`.
fn basis() -> &'static Basis {
    static BASIS: OnceLock<Basis> = OnceLock::new();
    BASIS.get_or_init(|| {
        let mut basis = [[0.0; DCT_WIDTH]; DCT_WIDTH];
        for (k, row) in basis.iter_mut().enumerate() {
            for (j, weight) in row.iter_mut().enumerate() {
                *weight = if j == 0 {
                    1.0
                } else {
                    let angle = PI * (j * (2 * k + 1)) as f64 / (2 * DCT_WIDTH) as f64;
                    2.0 * angle.cos()
                };
            }
        }
        basis
    })
}

/// Inverse DCT over one caller-owned block.
///
/// Buffers are row-major. [`inverse`](Self::inverse) scales the input in
/// place before transforming it into the output buffer.
///
/// # Example
///
/// ```rust
/// use oxijpeg_dct::{DCT_WIDTH, DctCalculator};
///
/// let mut input = vec![0.0; DCT_WIDTH * DCT_WIDTH];
/// let mut output = vec![0.0; DCT_WIDTH * DCT_WIDTH];
/// input[0] = 80.0;
///
/// DctCalculator::new(DCT_WIDTH, &mut input, &mut output)
///     .unwrap()
///     .inverse();
/// assert!(output.iter().all(|&v| (v - 10.0).abs() < 1e-9));
/// ```
#[derive(Debug)]
pub struct DctCalculator<'a> {
    input: &'a mut [f64],
    output: &'a mut [f64],
}

impl<'a> DctCalculator<'a> {
    /// Bind a calculator to a pair of `width * width` buffers.
    ///
    /// Buffer sizes are checked before the width, and the only accepted
    /// width is [`DCT_WIDTH`].
    pub fn new(
        width: usize,
        input: &'a mut [f64],
        output: &'a mut [f64],
    ) -> Result<Self, DctError> {
        let expected = width * width;
        if input.len() != expected || input.len() != output.len() {
            return Err(DctError::InvalidSize {
                input: input.len(),
                output: output.len(),
                expected,
            });
        }
        if width != DCT_WIDTH {
            return Err(DctError::InvalidWidth {
                width,
                expected: DCT_WIDTH,
            });
        }
        Ok(Self { input, output })
    }

    /// Run the scaled inverse transform into the output buffer.
    pub fn inverse(&mut self) {
        for coefficient in self.input[..DCT_WIDTH].iter_mut() {
            *coefficient *= BOUNDARY_SCALE;
        }
        for coefficient in self.input.iter_mut().step_by(DCT_WIDTH) {
            *coefficient *= BOUNDARY_SCALE;
        }

        let basis = basis();

        // Along each row.
        let mut rows = [0.0; BLOCK_SIZE];
        for (row_in, row_out) in self
            .input
            .chunks_exact(DCT_WIDTH)
            .zip(rows.chunks_exact_mut(DCT_WIDTH))
        {
            for (out, weights) in row_out.iter_mut().zip(basis) {
                *out = row_in.iter().zip(weights).map(|(x, w)| x * w).sum();
            }
        }

        // Along each column.
        for (row_out, weights) in self.output.chunks_exact_mut(DCT_WIDTH).zip(basis) {
            for (column, out) in row_out.iter_mut().enumerate() {
                let sum: f64 = rows
                    .chunks_exact(DCT_WIDTH)
                    .zip(weights)
                    .map(|(row, w)| row[column] * w)
                    .sum();
                *out = sum / DCT_NORMALIZE;
            }
        }
    }

    /// The (possibly already scaled) coefficients.
    pub fn input(&self) -> &[f64] {
        &self.input[..]
    }

    /// The transformed samples.
    pub fn output(&self) -> &[f64] {
        &self.output[..]
    }
}

/// Validate the buffers and run [`DctCalculator::inverse`] once.
pub fn inverse_dct(input: &mut [f64], output: &mut [f64]) -> Result<(), DctError> {
    DctCalculator::new(DCT_WIDTH, input, output)?.inverse();
    Ok(())
}
