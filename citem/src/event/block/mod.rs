mod block_break;

pub use block_break::BlockBreakEvent;
