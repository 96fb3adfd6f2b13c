pub mod clock;

pub use clock::{Sleeper, TokioSleeper};
