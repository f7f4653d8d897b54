pub mod bbox;
pub mod color;
pub mod coord;
pub mod film;
pub mod hit_record;
pub mod ray;
pub mod rng;
pub mod scatter;
pub mod scene;
