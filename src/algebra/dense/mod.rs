mod block_concatenate;
mod core;
