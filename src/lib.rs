// Sorting benchmark with environmental impact estimation

pub mod benchmark;
pub mod impact;
pub mod measure;
pub mod sort;

pub use impact::{estimate, ImpactEstimate, CPU_TDP_WATTS, EMISSION_FACTOR_KG_PER_KWH};
pub use measure::{measure, Measurement};
pub use sort::{bubble_sort, insertion_sort, merge_sort, quick_sort, Algorithm};
