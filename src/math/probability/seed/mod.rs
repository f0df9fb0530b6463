pub mod resource;

#[macro_export]
macro_rules! next_random_range {
    // Inklusive Range: min..=max
    ($seed_resource:expr, $min:expr, $max:expr) => {
        $seed_resource.next_f64_in_inclusive_range($min, $max)
    };
}

#[macro_export]
macro_rules! next_random_ratio {
    ($seed_resource:expr, $probability:expr) => {
        $seed_resource.next_bool_with_probability($probability)
    };
}
