use std::ops::Range;

use crate::math::integration::integrationerror::IntegrationError;

/// 把節點索引 `[0, n)` 切成 `t` 段連續區塊，加上一段 remainder。
///
/// - 第 `i` 段：`[i·nt, (i+1)·nt)`，其中 `nt = n / t`（整數除法）
/// - remainder：`[t·nt, n)`，長度必定小於 `t`
///
/// `t > n` 時 `nt = 0`，所有區塊為空，全部節點落在 remainder。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    nodes: usize,
    workers: usize,
    block_len: usize,
}

impl Partition {
    pub fn new(nodes: usize, workers: usize) -> Result<Partition, IntegrationError> {
        if nodes == 0 {
            return Err(IntegrationError::ZeroNodes);
        }
        if workers == 0 {
            return Err(IntegrationError::ZeroWorkers);
        }
        Ok(Partition {
            nodes,
            workers,
            block_len: nodes / workers,
        })
    }

    pub fn nodes(&self) -> usize {
        self.nodes
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// partial sum 的數量：每個 worker 一格，加上 remainder 一格。
    pub fn slot_count(&self) -> usize {
        self.workers + 1
    }

    pub fn block(&self, i: usize) -> Range<usize> {
        (i * self.block_len)..((i + 1) * self.block_len)
    }

    pub fn blocks(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.workers).map(|i| self.block(i))
    }

    pub fn remainder(&self) -> Range<usize> {
        (self.workers * self.block_len)..self.nodes
    }
}
