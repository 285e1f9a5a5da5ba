pub mod charset;
pub mod export;
pub mod generator;
pub mod strength;

pub use charset::{CharsetSpec, InvalidConfiguration, Pool};
pub use generator::{sample, sample_many};
pub use strength::{PasswordAnalysis, Strength, StrengthReport, analyze, estimate};
