pub mod systick;
pub use systick::SysTick;
