use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The coordinate tables do not match the destination buffer.
    #[error("destination has {0} pixels but the coordinate tables describe {1}")]
    SizeMismatch(usize, usize),
}

/// Controls how resampling operations are executed.
///
/// Every strategy produces the same pixels; only the scheduling differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process output rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

/// Fill every pixel of a row-major buffer from its source coordinates.
///
/// Output pixel `(r, c)` is computed as `f(map_rows[r], map_cols[c], &mut dst[r * cols + c])`
/// where `cols == map_cols.len()`. Rows are independent, so they are the unit of work.
///
/// # Arguments
///
/// * `dst` - The destination buffer with `map_rows.len() * map_cols.len()` pixels.
/// * `map_rows` - The source row coordinate of every output row.
/// * `map_cols` - The source column coordinate of every output column.
/// * `strategy` - How the rows are scheduled.
/// * `f` - The per-pixel kernel.
///
/// # Errors
///
/// Returns an error when the buffer size does not match the tables or when the
/// thread pool cannot be created.
pub fn par_iter_rows_resample<T: Send>(
    dst: &mut [T],
    map_rows: &[f32],
    map_cols: &[f32],
    strategy: ExecutionStrategy,
    f: impl Fn(f32, f32, &mut T) + Send + Sync,
) -> Result<(), ParallelError> {
    let cols = map_cols.len();
    let expected = map_rows.len() * cols;
    if dst.len() != expected || cols == 0 {
        return Err(ParallelError::SizeMismatch(dst.len(), expected));
    }

    let fill_row = |(dst_row, &x): (&mut [T], &f32)| {
        dst_row
            .iter_mut()
            .zip(map_cols.iter())
            .for_each(|(dst_pixel, &y)| f(x, y, dst_pixel));
    };

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(cols)
                .zip(map_rows.iter())
                .for_each(fill_row);
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(cols)
                .zip(map_rows.par_iter())
                .for_each(fill_row);
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;
            log::trace!("built local thread pool with {n} threads");

            pool.install(|| {
                dst.par_chunks_exact_mut(cols)
                    .zip(map_rows.par_iter())
                    .for_each(fill_row);
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_kernel(x: f32, y: f32, d: &mut f32) {
        *d = x * 10.0 + y;
    }

    #[test]
    fn test_execute_serial() {
        let mut dst = vec![0.0f32; 6];
        par_iter_rows_resample(
            &mut dst,
            &[0.0, 1.0],
            &[0.0, 1.0, 2.0],
            ExecutionStrategy::Serial,
            index_kernel,
        )
        .unwrap();
        assert_eq!(dst, vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn test_execute_parallel_rows() {
        let mut dst = vec![0.0f32; 6];
        par_iter_rows_resample(
            &mut dst,
            &[0.0, 1.0, 2.0],
            &[0.5, 1.5],
            ExecutionStrategy::ParallelRows,
            index_kernel,
        )
        .unwrap();
        assert_eq!(dst, vec![0.5, 1.5, 10.5, 11.5, 20.5, 21.5]);
    }

    #[test]
    fn test_execute_fixed_success() {
        let mut dst = vec![0.0f32; 4];
        par_iter_rows_resample(
            &mut dst,
            &[0.0, 1.0],
            &[0.0, 1.0],
            ExecutionStrategy::Fixed(2),
            index_kernel,
        )
        .unwrap();
        assert_eq!(dst, vec![0.0, 1.0, 10.0, 11.0]);
    }

    #[test]
    fn test_execute_fixed_error() {
        let mut dst = vec![0.0f32; 1];
        let res = par_iter_rows_resample(
            &mut dst,
            &[0.0],
            &[0.0],
            ExecutionStrategy::Fixed(0),
            index_kernel,
        );
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
    }

    #[test]
    fn test_execute_size_mismatch() {
        let mut dst = vec![0.0f32; 5];
        let res = par_iter_rows_resample(
            &mut dst,
            &[0.0, 1.0],
            &[0.0, 1.0, 2.0],
            ExecutionStrategy::Serial,
            index_kernel,
        );
        assert_eq!(res, Err(ParallelError::SizeMismatch(5, 6)));
    }
}
