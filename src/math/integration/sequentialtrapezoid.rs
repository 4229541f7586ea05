use num_traits::Float;

use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrator::{
    Integrator,
    accumulate,
    endpoint_correction,
    mesh_step,
    validate_bounds
};

/// 單執行緒版本，作為 concurrent 版本的對照基準。
#[derive(Debug, Clone, Copy)]
pub struct SequentialTrapezoid {
    nodes: usize,
}

impl SequentialTrapezoid {
    pub fn new(nodes: usize) -> Result<SequentialTrapezoid, IntegrationError> {
        if nodes == 0 {
            return Err(IntegrationError::ZeroNodes);
        }
        Ok(SequentialTrapezoid { nodes })
    }

    fn integrate_with<T, F>(&self, f: &F, x1: T, x2: T) -> Result<T, IntegrationError>
    where
        T: Float,
        F: Fn(T) -> T,
    {
        validate_bounds(x1, x2)?;
        let h = mesh_step(x1, x2, self.nodes);
        let sum = accumulate(f, x1, h, 0..self.nodes);
        Ok(endpoint_correction(f, x1, x2, h, sum))
    }
}

impl<T> Integrator<T> for SequentialTrapezoid
where
    T: Float + Send + Sync,
{
    fn nodes(&self) -> usize {
        self.nodes
    }

    fn integrate<F>(&self, f: F, x1: T, x2: T) -> Result<T, IntegrationError>
    where
        F: Fn(T) -> T + Sync,
    {
        self.integrate_with(&f, x1, x2)
    }
}

/// `∫_{x1}^{x2} f dx`，以 `n` 個區間的 trapezoidal rule 近似。
///
/// `x1 > x2` 亦可，結果自然帶負號。`f` 不需要 `Sync`。
pub fn trapezoid_seq<T, F>(f: F, x1: T, x2: T, n: usize) -> Result<T, IntegrationError>
where
    T: Float,
    F: Fn(T) -> T,
{
    SequentialTrapezoid::new(n)?.integrate_with(&f, x1, x2)
}
