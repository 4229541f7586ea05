use std::num::NonZeroUsize;
use std::thread;

use num_traits::Float;
use rayon::{
    ThreadPool,
    ThreadPoolBuilder
};

use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrator::{
    Integrator,
    accumulate,
    endpoint_correction,
    mesh_step,
    validate_bounds
};
use crate::math::integration::partition::Partition;

// ─────────────────────────────────────────────────────────────────────────────
// ConcurrentTrapezoid - fork-join over contiguous node blocks
// ─────────────────────────────────────────────────────────────────────────────
//
// partial_sums 共 t + 1 格：
//
//   [ block 0 | block 1 | ... | block t-1 | remainder ]
//     worker 0  worker 1        worker t-1  calling thread
//
// 每格只有一個 writer（split_at_mut 切出互不重疊的 &mut），不需要 lock 或 atomic。
// ThreadPool::scope 即為 join barrier：scope 返回時所有 worker 都已完成。
// 最後依 slot index 由小到大 fold，結果與 worker 完成順序無關。
//
// worker 數（partition 的段數）完全由呼叫端決定；實際 OS thread 數則以
// 硬體平行度為上限，因此 t = n 這類極端設定也能執行，且結果只取決於 t。

#[derive(Debug, Clone, Copy)]
pub struct ConcurrentTrapezoid {
    partition: Partition,
}

impl ConcurrentTrapezoid {
    pub fn new(nodes: usize, workers: usize) -> Result<ConcurrentTrapezoid, IntegrationError> {
        Ok(ConcurrentTrapezoid {
            partition: Partition::new(nodes, workers)?,
        })
    }

    pub fn workers(&self) -> usize {
        self.partition.workers()
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    fn build_pool(&self) -> Result<ThreadPool, IntegrationError> {
        let hardware = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        let threads = self.partition.workers().min(hardware);
        tracing::debug!(
            nodes = self.partition.nodes(),
            workers = self.partition.workers(),
            block_len = self.partition.block_len(),
            remainder = self.partition.remainder().len(),
            threads,
            "building trapezoid worker pool"
        );
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("trapezoid-worker-{}", i))
            .build()?;
        Ok(pool)
    }
}

impl<T> Integrator<T> for ConcurrentTrapezoid
where
    T: Float + Send + Sync,
{
    fn nodes(&self) -> usize {
        self.partition.nodes()
    }

    fn integrate<F>(&self, f: F, x1: T, x2: T) -> Result<T, IntegrationError>
    where
        F: Fn(T) -> T + Sync,
    {
        validate_bounds(x1, x2)?;
        let partition = &self.partition;
        let h = mesh_step(x1, x2, partition.nodes());
        let pool = self.build_pool()?;

        let mut partial_sums = vec![T::zero(); partition.slot_count()];
        let (worker_slots, remainder_slot) = partial_sums.split_at_mut(partition.workers());
        let f_ref = &f;

        pool.scope(|scope| {
            for (i, slot) in worker_slots.iter_mut().enumerate() {
                scope.spawn(move |_| {
                    *slot = accumulate(f_ref, x1, h, partition.block(i));
                });
            }
        });

        remainder_slot[0] = accumulate(f_ref, x1, h, partition.remainder());

        let sum = partial_sums
            .iter()
            .fold(T::zero(), |acc, &partial| acc + partial);
        tracing::trace!(slots = partial_sums.len(), "partial sums reduced");

        Ok(endpoint_correction(f_ref, x1, x2, h, sum))
    }
}

/// 與 [`trapezoid_seq`](crate::math::integration::sequentialtrapezoid::trapezoid_seq)
/// 相同的積分，由 `t` 個 worker 分段累加。
///
/// `f` 會被多個 thread 同時呼叫，必須是 `Sync` 且不應持有共享可變狀態。
pub fn trapezoid_con<T, F>(f: F, x1: T, x2: T, n: usize, t: usize) -> Result<T, IntegrationError>
where
    T: Float + Send + Sync,
    F: Fn(T) -> T + Sync,
{
    ConcurrentTrapezoid::new(n, t)?.integrate(f, x1, x2)
}
