//! Ordered collection of line operators.

use super::common::ApplyOp;
use super::inner_block::InnerBlock;

/// Accumulates [`InnerBlock`]s in insertion order. Finalization consumes
/// the builder.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    blocks: Vec<InnerBlock>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_inner_block(&mut self, block: InnerBlock) {
        self.blocks.push(block);
    }

    pub fn to_block(self) -> Block {
        Block {
            blocks: self.blocks,
        }
    }
}

/// The block operator O: one [`InnerBlock`] per assembled line.
///
/// InnerBlocks address disjoint row ranges by construction, so application
/// order does not affect the aggregate result.
#[derive(Clone, Debug, Default)]
pub struct Block {
    blocks: Vec<InnerBlock>,
}

impl Block {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn apply(&self, x: &[f64], b: &mut [f64], op: ApplyOp) {
        for block in &self.blocks {
            block.apply(x, b, op);
        }
    }
}
