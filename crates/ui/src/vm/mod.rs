mod chat_vm;
mod time_fmt;

pub use chat_vm::{ChatIntent, ChatVm, InputMode, TurnVm};
pub use time_fmt::format_clock_time;
