pub mod canvas;
pub mod markers;
pub mod trace_list;

pub use trace_list::TraceRow;
